// src/noyau/historique.rs
//
// Journal des calculs réussis (ajout seulement, effacé sur demande).
// Ordre de stockage : du plus ancien au plus récent.

use std::fmt;

use chrono::{DateTime, Local};

use super::format::format_number;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Local>,
    /// Expression saisie, ou appel direct "funcname(valeur)".
    pub description: String,
    pub result: f64,
}

/// "hh:mm:ss texte = résultat"
impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {}",
            self.timestamp.format("%H:%M:%S"),
            self.description,
            format_number(self.result)
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct History {
    entrees: Vec<HistoryEntry>,
}

impl History {
    pub fn push(&mut self, description: impl Into<String>, result: f64) {
        self.push_at(Local::now(), description, result);
    }

    pub fn push_at(
        &mut self,
        timestamp: DateTime<Local>,
        description: impl Into<String>,
        result: f64,
    ) {
        self.entrees.push(HistoryEntry {
            timestamp,
            description: description.into(),
            result,
        });
    }

    pub fn clear(&mut self) {
        self.entrees.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entrees
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
