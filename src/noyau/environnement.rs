// src/noyau/environnement.rs
//
// Environnement d’évaluation : noms -> constantes / fonctions unaires.
// - Les fonctions sont une énumération fermée (MathFn) : aucune résolution dynamique.
// - Table statique nom -> MathFn, puis MathFn -> pointeur fn(f64) -> EvalResult<f64>.

use std::collections::BTreeMap;
use std::f64::consts;

use num_traits::ToPrimitive;

use super::erreur::{EvalError, EvalResult, MSG_DOMAINE, MSG_FACTORIELLE};

/// Plus grand n tel que n! reste fini en f64.
pub const FACTORIELLE_MAX: u64 = 170;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MathFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Sqrt,
    Factorial,
}

/// Table statique des noms reconnus.
const TABLE: [(&str, MathFn); 10] = [
    ("sin", MathFn::Sin),
    ("cos", MathFn::Cos),
    ("tan", MathFn::Tan),
    ("asin", MathFn::Asin),
    ("acos", MathFn::Acos),
    ("atan", MathFn::Atan),
    ("log", MathFn::Log),
    ("ln", MathFn::Ln),
    ("sqrt", MathFn::Sqrt),
    ("factorial", MathFn::Factorial),
];

impl MathFn {
    pub fn from_name(name: &str) -> Option<MathFn> {
        TABLE.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
    }

    pub fn name(self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, f)| *f == self)
            .map(|(n, _)| *n)
            .unwrap_or("?")
    }

    pub fn all() -> impl Iterator<Item = MathFn> {
        TABLE.iter().map(|(_, f)| *f)
    }

    /// Trig directe (l’argument est un angle).
    pub fn is_trig(self) -> bool {
        matches!(self, MathFn::Sin | MathFn::Cos | MathFn::Tan)
    }

    /// Trig inverse (le résultat est un angle).
    pub fn is_inverse_trig(self) -> bool {
        matches!(self, MathFn::Asin | MathFn::Acos | MathFn::Atan)
    }

    fn pointeur(self) -> fn(f64) -> EvalResult<f64> {
        match self {
            MathFn::Sin => |x| Ok(x.sin()),
            MathFn::Cos => |x| Ok(x.cos()),
            MathFn::Tan => |x| Ok(x.tan()),
            MathFn::Asin => |x| borne_unite(x).map(f64::asin),
            MathFn::Acos => |x| borne_unite(x).map(f64::acos),
            MathFn::Atan => |x| Ok(x.atan()),
            MathFn::Log => |x| strictement_positif(x).map(f64::log10),
            MathFn::Ln => |x| strictement_positif(x).map(f64::ln),
            MathFn::Sqrt => |x| {
                if x < 0.0 {
                    Err(EvalError::domain(MSG_DOMAINE))
                } else {
                    Ok(x.sqrt())
                }
            },
            MathFn::Factorial => factorielle,
        }
    }

    /// Applique la fonction (radians pour la trig).
    /// Un NaN produit à partir d’un argument valide est une erreur de domaine (ex: sin(inf)).
    pub fn apply(self, x: f64) -> EvalResult<f64> {
        let r = (self.pointeur())(x)?;
        if r.is_nan() && !x.is_nan() {
            return Err(EvalError::domain(MSG_DOMAINE));
        }
        Ok(r)
    }
}

fn borne_unite(x: f64) -> EvalResult<f64> {
    if (-1.0..=1.0).contains(&x) {
        Ok(x)
    } else {
        Err(EvalError::domain(MSG_DOMAINE))
    }
}

fn strictement_positif(x: f64) -> EvalResult<f64> {
    if x > 0.0 {
        Ok(x)
    } else {
        Err(EvalError::domain(MSG_DOMAINE))
    }
}

/// n! pour n entier >= 0 (5.0 accepté, 5.5 refusé).
pub fn factorielle(x: f64) -> EvalResult<f64> {
    if !x.is_finite() || x < 0.0 || x.fract() != 0.0 {
        return Err(EvalError::domain(MSG_FACTORIELLE));
    }
    // avant la conversion : 1e300 est entier mais ne tient pas dans un u64
    if x > FACTORIELLE_MAX as f64 {
        return Err(EvalError::domain("Factorial result too large"));
    }
    let n = x
        .to_u64()
        .ok_or_else(|| EvalError::domain(MSG_FACTORIELLE))?;
    Ok((2..=n).fold(1.0, |acc, k| acc * k as f64))
}

/// Noms accessibles à une expression. Figé pendant l’évaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    constantes: BTreeMap<String, f64>,
    fonctions: BTreeMap<String, MathFn>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::standard()
    }
}

impl Environment {
    /// Aucun nom : seuls les littéraux sont évaluables.
    pub fn vide() -> Self {
        Self {
            constantes: BTreeMap::new(),
            fonctions: BTreeMap::new(),
        }
    }

    /// pi, e + les dix fonctions de la calculatrice.
    pub fn standard() -> Self {
        let mut env = Self::vide()
            .with_constant("pi", consts::PI)
            .with_constant("e", consts::E);
        for f in MathFn::all() {
            env = env.with_function(f.name(), f);
        }
        env
    }

    pub fn with_constant(mut self, name: impl Into<String>, value: f64) -> Self {
        self.constantes.insert(name.into(), value);
        self
    }

    pub fn with_function(mut self, name: impl Into<String>, f: MathFn) -> Self {
        self.fonctions.insert(name.into(), f);
        self
    }

    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constantes.get(name).copied()
    }

    pub fn function(&self, name: &str) -> Option<MathFn> {
        self.fonctions.get(name).copied()
    }
}
