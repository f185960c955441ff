//! Noyau de la calculatrice (sans vue)
//!
//! Organisation interne :
//! - jetons.rs       : réécriture `^` + tokenisation
//! - expr.rs         : arbre explicite (Literal, Name, Unary, Binary, Call)
//! - analyse.rs      : precedence climbing -> Expr
//! - environnement.rs: constantes + fonctions (MathFn, table statique)
//! - eval.rs         : pipeline complet + interprétation pure
//! - trig.rs         : mode d’angle
//! - dispatch.rs     : appel direct d’une fonction sur l’affichage
//! - memoire.rs      : registre MC/MR/M+/M-
//! - historique.rs   : journal horodaté
//! - format.rs       : nombre -> texte d’affichage
//! - session.rs      : état regroupé, passé par &mut
//! - erreur.rs       : taxonomie EvalError

pub mod analyse;
pub mod dispatch;
pub mod environnement;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod memoire;
pub mod session;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use dispatch::{DirectOutcome, FunctionKey};
pub use erreur::EvalError;
pub use format::format_number;
pub use memoire::MemoryOp;
pub use session::Session;
pub use trig::AngleMode;
