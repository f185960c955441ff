//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’affichage (tampon texte), le dernier message d’erreur, le mode
//! (standard / ingénieur), le thème, et la Session du noyau ; traduire chaque touche
//! en opération du noyau.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `Session`.
//! - En cas d’erreur : message dans `erreur`, affichage = "Error".
//! - L’application reste utilisable après n’importe quelle erreur.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::info;

use crate::config::Config;
use crate::noyau::{format_number, DirectOutcome, EvalError, FunctionKey, MemoryOp, Session};

/// Texte affiché après une erreur.
pub const TEXTE_ERREUR: &str = "Error";

/// Pavé standard (4 colonnes).
pub const TOUCHES_STANDARD: [&str; 22] = [
    "MC", "MR", "M+", "M-", //
    "7", "8", "9", "/", //
    "4", "5", "6", "*", //
    "1", "2", "3", "-", //
    "0", ".", "=", "+", //
    "C", "DEL",
];

/// Pavé ingénieur (4 colonnes) : fonctions + pavé standard sans la mémoire.
pub const TOUCHES_INGENIEUR: [&str; 34] = [
    "sin", "cos", "tan", "log", //
    "asin", "acos", "atan", "ln", //
    "sqrt", "^", "!", "π", //
    "e", "(", ")", "Deg/Rad", //
    "7", "8", "9", "/", //
    "4", "5", "6", "*", //
    "1", "2", "3", "-", //
    "0", ".", "=", "+", //
    "C", "DEL",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Standard,
    Engineering,
}

impl Mode {
    pub fn touches(self) -> &'static [&'static str] {
        match self {
            Mode::Standard => &TOUCHES_STANDARD,
            Mode::Engineering => &TOUCHES_INGENIEUR,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Standard => f.write_str("Standard"),
            Mode::Engineering => f.write_str("Engineering"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Mode::Standard),
            "engineering" => Ok(Mode::Engineering),
            autre => Err(format!("unknown mode '{autre}' (expected standard or engineering)")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            autre => Err(format!("unknown theme '{autre}' (expected light or dark)")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- affichage (tampon texte) ---
    pub entree: String,

    // --- surface d’erreur ---
    pub erreur: String,

    // --- paramètres ---
    pub mode: Mode,
    pub theme: Theme,

    // --- noyau ---
    pub session: Session,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’affichage après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppCalc {
    pub fn new(cfg: &Config) -> Self {
        Self {
            entree: String::new(),
            erreur: String::new(),
            mode: cfg.mode,
            theme: cfg.theme,
            session: Session::new(cfg.angle_mode),
            focus_entree: true,
        }
    }

    /* ------------------------ Touches ------------------------ */

    /// Traduit un libellé de touche en action.
    pub fn touche(&mut self, label: &str) {
        match label {
            "=" => self.evaluer(),
            "C" => self.clear_entree(),
            "DEL" => self.backspace(),
            "Deg/Rad" => self.basculer_angle(),
            _ => {
                if let Ok(op) = label.parse::<MemoryOp>() {
                    self.memoire(op);
                } else if let Ok(key) = label.parse::<FunctionKey>() {
                    self.fonction(key);
                } else {
                    self.inserer(label);
                }
            }
        }
        self.focus_entree = true;
    }

    /* ------------------------ Tampon ------------------------ */

    /// Ajoute du texte ; un affichage d’état ("Error", "Angle Mode: …") est d’abord remplacé.
    pub fn inserer(&mut self, txt: &str) {
        if self.affiche_un_etat() {
            self.entree.clear();
        }
        self.entree.push_str(txt);
    }

    /// C : efface l’affichage et l’erreur.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    pub fn backspace(&mut self) {
        if self.affiche_un_etat() {
            self.entree.clear();
        } else {
            self.entree.pop();
        }
    }

    fn affiche_un_etat(&self) -> bool {
        self.entree == TEXTE_ERREUR || self.entree.starts_with("Angle Mode:")
    }

    /* ------------------------ Opérations noyau ------------------------ */

    pub fn evaluer(&mut self) {
        let texte = self.entree.clone();
        match self.session.evaluate(&texte) {
            Ok(v) => self.set_resultat(v),
            Err(e) => self.set_erreur(&e),
        }
    }

    pub fn fonction(&mut self, key: FunctionKey) {
        let display = self.entree.clone();
        match self.session.apply_function(key, &display) {
            Ok(DirectOutcome::Value { value, .. }) => self.set_resultat(value),
            Ok(DirectOutcome::Insert(txt)) => self.inserer(&txt),
            Err(e) => self.set_erreur(&e),
        }
    }

    pub fn memoire(&mut self, op: MemoryOp) {
        let display = self.entree.clone();
        match self.session.memory_op(op, &display) {
            Ok(Some(rappel)) => {
                self.erreur.clear();
                self.entree = rappel;
            }
            Ok(None) => {}
            Err(e) => self.set_erreur(&e),
        }
    }

    pub fn basculer_angle(&mut self) {
        let mode = self.session.toggle_angle_mode();
        self.entree = format!("Angle Mode: {mode}");
    }

    pub fn effacer_historique(&mut self) {
        self.session.clear_history();
        info!("historique effacé");
    }

    /* ------------------------ Sorties ------------------------ */

    pub fn set_resultat(&mut self, v: f64) {
        self.erreur.clear();
        self.entree = format_number(v);
    }

    /// Utilitaire : placer une erreur (message + affichage "Error").
    pub fn set_erreur(&mut self, e: &EvalError) {
        self.erreur = e.to_string();
        self.entree = TEXTE_ERREUR.to_string();
        self.focus_entree = true;
    }
}
