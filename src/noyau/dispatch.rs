// src/noyau/dispatch.rs
//
// Appel direct d’une fonction sur la valeur affichée (mode ingénieur).
// - π / e : ne consomment pas l’affichage, produisent le texte de la constante
// - trig  : tient compte du mode d’angle (trig.rs)
// - autres: MathFn::apply tel quel
//
// Volontairement distinct de evaluate() : la conversion degrés n’existe qu’ici.

use std::f64::consts;
use std::fmt;
use std::str::FromStr;

use super::environnement::MathFn;
use super::erreur::{EvalError, EvalResult};
use super::format::{format_number, parse_display};
use super::trig::AngleMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionKey {
    Apply(MathFn),
    Pi,
    E,
}

impl FromStr for FunctionKey {
    type Err = String;

    /// Accepte les libellés des touches ("π", "!") et les noms ("pi", "factorial").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "π" | "pi" => Ok(FunctionKey::Pi),
            "e" => Ok(FunctionKey::E),
            "!" => Ok(FunctionKey::Apply(MathFn::Factorial)),
            nom => MathFn::from_name(nom)
                .map(FunctionKey::Apply)
                .ok_or_else(|| format!("unknown function key '{nom}'")),
        }
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionKey::Apply(m) => f.write_str(m.name()),
            FunctionKey::Pi => f.write_str("π"),
            FunctionKey::E => f.write_str("e"),
        }
    }
}

/// Résultat d’un appel direct.
#[derive(Clone, Debug, PartialEq)]
pub enum DirectOutcome {
    /// Valeur calculée + description pour l’historique : "funcname(inputValue)".
    Value { value: f64, description: String },
    /// Texte à ajouter à l’affichage (π, e).
    Insert(String),
}

/// Applique `key` au texte affiché.
///
/// Erreurs:
/// - Parse  : affichage non numérique
/// - Domain : hors domaine (sqrt(-1), log(0), factorielle non entière…)
pub fn apply_direct(key: FunctionKey, display: &str, mode: AngleMode) -> EvalResult<DirectOutcome> {
    let f = match key {
        FunctionKey::Pi => return Ok(DirectOutcome::Insert(consts::PI.to_string())),
        FunctionKey::E => return Ok(DirectOutcome::Insert(consts::E.to_string())),
        FunctionKey::Apply(f) => f,
    };

    let entree = parse_display(display).ok_or_else(|| {
        EvalError::parse(format!("could not convert display to number: '{}'", display.trim()))
    })?;

    let value = if f.is_trig() {
        f.apply(mode.vers_radians(entree))?
    } else if f.is_inverse_trig() {
        mode.depuis_radians(f.apply(entree)?)
    } else {
        f.apply(entree)?
    };

    Ok(DirectOutcome::Value {
        value,
        description: format!("{}({})", f.name(), format_number(entree)),
    })
}
