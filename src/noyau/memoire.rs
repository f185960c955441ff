// src/noyau/memoire.rs
//
// Registre mémoire unique (MC / MR / M+ / M-).
// Contrat : l’affichage est relu AVANT toute opération ; s’il n’est pas numérique,
// le registre n’est pas touché.

use std::str::FromStr;

use super::erreur::{EvalError, EvalResult, MSG_MEMOIRE};
use super::format::{format_number, parse_display};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOp {
    Clear,
    Recall,
    Add,
    Subtract,
}

impl FromStr for MemoryOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MC" => Ok(MemoryOp::Clear),
            "MR" => Ok(MemoryOp::Recall),
            "M+" => Ok(MemoryOp::Add),
            "M-" => Ok(MemoryOp::Subtract),
            autre => Err(format!("unknown memory key '{autre}'")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Memory {
    valeur: f64,
}

impl Memory {
    pub fn value(&self) -> f64 {
        self.valeur
    }

    /// Applique `op`. Retourne le nouveau texte d’affichage pour MR, sinon None.
    pub fn apply(&mut self, op: MemoryOp, display: &str) -> EvalResult<Option<String>> {
        let courant = parse_display(display).ok_or_else(|| EvalError::parse(MSG_MEMOIRE))?;

        match op {
            MemoryOp::Clear => self.valeur = 0.0,
            MemoryOp::Recall => return Ok(Some(format_number(self.valeur))),
            MemoryOp::Add => self.valeur += courant,
            MemoryOp::Subtract => self.valeur -= courant,
        }
        Ok(None)
    }
}
