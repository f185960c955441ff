// src/noyau/session.rs
//
// État de session (sans vue) : environnement, mode d’angle, mémoire, historique.
// Toute opération passe par ici ; l’historique ne reçoit QUE les réussites.

use tracing::debug;

use super::dispatch::{apply_direct, DirectOutcome, FunctionKey};
use super::environnement::Environment;
use super::erreur::EvalResult;
use super::eval::evaluate;
use super::historique::History;
use super::memoire::{Memory, MemoryOp};
use super::trig::AngleMode;

#[derive(Clone, Debug, Default)]
pub struct Session {
    env: Environment,
    angle_mode: AngleMode,
    memory: Memory,
    history: History,
}

impl Session {
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            angle_mode,
            ..Self::default()
        }
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Évalue le texte et journalise "texte = résultat".
    pub fn evaluate(&mut self, texte: &str) -> EvalResult<f64> {
        match evaluate(texte, &self.env) {
            Ok(v) => {
                self.history.push(texte.trim(), v);
                Ok(v)
            }
            Err(e) => {
                debug!(expression = texte, kind = e.kind(), erreur = %e, "évaluation refusée");
                Err(e)
            }
        }
    }

    /// Appel direct sur l’affichage (mode d’angle de la session).
    pub fn apply_function(&mut self, key: FunctionKey, display: &str) -> EvalResult<DirectOutcome> {
        let out = apply_direct(key, display, self.angle_mode).inspect_err(|e| {
            debug!(touche = %key, kind = e.kind(), erreur = %e, "appel direct refusé");
        })?;

        if let DirectOutcome::Value { value, description } = &out {
            self.history.push(description.clone(), *value);
        }
        Ok(out)
    }

    /// MC / MR / M+ / M-. Retourne le nouvel affichage pour MR.
    pub fn memory_op(&mut self, op: MemoryOp, display: &str) -> EvalResult<Option<String>> {
        let r = self.memory.apply(op, display);
        debug!(?op, memoire = self.memory.value(), ok = r.is_ok(), "opération mémoire");
        r
    }

    pub fn toggle_angle_mode(&mut self) -> AngleMode {
        self.angle_mode = self.angle_mode.toggled();
        debug!(mode = %self.angle_mode, "mode d’angle");
        self.angle_mode
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
