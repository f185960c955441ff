//! Noyau — évaluation (pipeline réel)
//!
//! texte -> réécriture `^` => `**` -> jetons -> Expr -> interprétation pure
//!
//! Remarque : l’interprétation ne voit que l’arbre + l’Environment.
//! Aucun nom hors Environment, aucune instruction : seulement de l’arithmétique.

use num_traits::Zero;
use tracing::debug;

use super::analyse::parse;
use super::environnement::Environment;
use super::erreur::{EvalError, EvalResult, MSG_DOMAINE};
use super::expr::{BinOp, Expr, UnOp};
use super::jetons::{format_tokens, reecrire_puissance, tokenize};

/// API publique : évalue une expression dans un environnement donné.
///
/// Erreurs:
/// - Syntax   : texte vide ou mal formé
/// - Name     : identifiant absent de `env`
/// - Function : appel d’une fonction absente de `env`
/// - Division : division par zéro (y compris 0 ** négatif)
/// - Domain   : fonction mathématique hors domaine
pub fn evaluate(expr: &str, env: &Environment) -> EvalResult<f64> {
    let s = expr.trim();
    if s.is_empty() {
        return Err(EvalError::syntax("empty expression"));
    }

    // 1) Réécriture puissance
    let reecrit = reecrire_puissance(s);

    // 2) Jetons
    let jetons = tokenize(&reecrit)?;

    // 3) Arbre
    let arbre = parse(&jetons)?;

    // 4) Interprétation
    let v = interpreter(&arbre, env)?;

    debug!(
        expression = s,
        jetons = %format_tokens(&jetons),
        arbre = %arbre,
        resultat = v,
        "expression évaluée"
    );
    Ok(v)
}

/// Passe d’évaluation pure (gauche puis droite).
pub fn interpreter(expr: &Expr, env: &Environment) -> EvalResult<f64> {
    match expr {
        Expr::Literal(v) => Ok(*v),

        Expr::Name(nom) => env
            .constant(nom)
            .ok_or_else(|| EvalError::Name(nom.clone())),

        Expr::Unary(UnOp::Neg, x) => Ok(-interpreter(x, env)?),
        Expr::Unary(UnOp::Pos, x) => interpreter(x, env),

        Expr::Binary(op, a, b) => {
            let va = interpreter(a, env)?;
            let vb = interpreter(b, env)?;
            match op {
                BinOp::Add => Ok(va + vb),
                BinOp::Sub => Ok(va - vb),
                BinOp::Mul => Ok(va * vb),
                BinOp::Div => {
                    if vb.is_zero() {
                        return Err(EvalError::Division);
                    }
                    Ok(va / vb)
                }
                BinOp::Pow => puissance(va, vb),
            }
        }

        // La cible est résolue AVANT l’argument : foo(1/0) => Function.
        Expr::Call(nom, x) => {
            let f = env
                .function(nom)
                .ok_or_else(|| EvalError::Function(nom.clone()))?;
            let arg = interpreter(x, env)?;
            f.apply(arg)
        }
    }
}

fn puissance(base: f64, exposant: f64) -> EvalResult<f64> {
    if base.is_zero() && exposant < 0.0 {
        return Err(EvalError::Division);
    }

    let r = base.powf(exposant);
    let entrees_finies = base.is_finite() && exposant.is_finite();

    // ex: (-8) ** (1/3)
    if r.is_nan() && entrees_finies {
        return Err(EvalError::domain(MSG_DOMAINE));
    }
    if r.is_infinite() && entrees_finies {
        return Err(EvalError::domain("Numerical result out of range"));
    }
    Ok(r)
}
