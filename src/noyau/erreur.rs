// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Le texte (Display) EST le message montré à l’utilisateur.

use thiserror::Error;

/// Message de domaine renvoyé par les fonctions mathématiques (sqrt, log, asin…).
pub const MSG_DOMAINE: &str = "math domain error";

/// Message de la factorielle hors domaine.
pub const MSG_FACTORIELLE: &str = "Factorial requires non-negative integer";

/// Message des opérations mémoire sur un affichage non numérique.
pub const MSG_MEMOIRE: &str = "Invalid value for memory operation";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Texte mal formé (parenthèses, opérateur pendant, opérande vide…).
    #[error("Error in expression: {0}")]
    Syntax(String),

    /// Identifiant absent de l’environnement.
    #[error("Error in expression: name '{0}' is not defined")]
    Name(String),

    /// Appel d’une fonction absente de l’environnement.
    #[error("Error in expression: function '{0}' is not defined")]
    Function(String),

    #[error("Cannot divide by zero")]
    Division,

    /// Violation de domaine mathématique (porte le message d’origine).
    #[error("Calculation error: {0}")]
    Domain(String),

    /// Affichage non convertible en nombre.
    #[error("{0}")]
    Parse(String),
}

pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    pub fn syntax(msg: impl Into<String>) -> Self {
        EvalError::Syntax(msg.into())
    }

    pub fn domain(msg: impl Into<String>) -> Self {
        EvalError::Domain(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        EvalError::Parse(msg.into())
    }

    /// Nom court de la catégorie (journalisation).
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::Syntax(_) => "syntax",
            EvalError::Name(_) => "name",
            EvalError::Function(_) => "function",
            EvalError::Division => "division",
            EvalError::Domain(_) => "domain",
            EvalError::Parse(_) => "parse",
        }
    }
}
