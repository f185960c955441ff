// src/noyau/trig.rs
//
// Mode d’angle (Radians / Degrés).
// Ne s’applique qu’à l’appel direct d’une fonction (dispatch.rs) :
// - sin/cos/tan   : l’entrée est convertie en radians si Degrés
// - asin/acos/atan: le résultat est reconverti en degrés si Degrés

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    #[serde(alias = "rad")]
    Radians,
    #[serde(alias = "deg")]
    Degrees,
}

impl AngleMode {
    pub fn toggled(self) -> AngleMode {
        match self {
            AngleMode::Radians => AngleMode::Degrees,
            AngleMode::Degrees => AngleMode::Radians,
        }
    }

    /// Angle utilisateur -> radians.
    pub fn vers_radians(self, x: f64) -> f64 {
        match self {
            AngleMode::Radians => x,
            AngleMode::Degrees => x.to_radians(),
        }
    }

    /// Radians -> angle utilisateur.
    pub fn depuis_radians(self, x: f64) -> f64 {
        match self {
            AngleMode::Radians => x,
            AngleMode::Degrees => x.to_degrees(),
        }
    }

    /// Libellé court affiché après bascule ("Angle Mode: deg").
    pub fn court(self) -> &'static str {
        match self {
            AngleMode::Radians => "rad",
            AngleMode::Degrees => "deg",
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.court())
    }
}

impl FromStr for AngleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rad" | "radians" => Ok(AngleMode::Radians),
            "deg" | "degrees" => Ok(AngleMode::Degrees),
            autre => Err(format!("unknown angle mode '{autre}' (expected rad or deg)")),
        }
    }
}
