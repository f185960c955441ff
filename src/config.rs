// src/config.rs
//
// Configuration (fichier TOML) : mode d’angle initial, pavé, thème.
// Emplacement par défaut : <config_dir>/scicalc/config.toml
// - fichier par défaut absent      => valeurs par défaut
// - fichier explicite absent       => erreur
// - TOML invalide / clé inconnue   => erreur

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::app::etat::{Mode, Theme};
use crate::noyau::AngleMode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub angle_mode: AngleMode,
    pub mode: Mode,
    pub theme: Theme,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// <config_dir>/scicalc/config.toml (None si la plateforme n’a pas de dossier de config).
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("scicalc").join("config.toml"))
}

impl Config {
    pub fn from_toml(texte: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(texte)
    }

    /// Charge `explicite` (obligatoire) ou, à défaut, le fichier par défaut (facultatif).
    pub fn load(explicite: Option<&Path>) -> Result<Config, ConfigError> {
        match explicite {
            Some(p) => lire(p, true),
            None => match default_path() {
                Some(p) => lire(&p, false),
                None => Ok(Config::default()),
            },
        }
    }
}

fn lire(path: &Path, obligatoire: bool) -> Result<Config, ConfigError> {
    let texte = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound && !obligatoire => {
            debug!(path = %path.display(), "pas de fichier de configuration, valeurs par défaut");
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let cfg = Config::from_toml(&texte).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), ?cfg, "configuration chargée");
    Ok(cfg)
}
