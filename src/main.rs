// src/main.rs
//
// SciCalc — point d’entrée
// ------------------------
// But:
// - Lire la configuration (TOML) puis appliquer les options de ligne de commande
// - `-e EXPR` : évaluation en lot, aucune fenêtre
// - sinon     : eframe::run_native + NativeOptions
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d’entrée seulement

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod config;
mod noyau;

use app::etat::{Mode, Theme};
use app::AppCalc;
use config::Config;
use noyau::{AngleMode, Session};

/// Titre de la fenêtre.
const TITRE_APP: &str = "SciCalc Pro";

#[derive(Debug, Parser)]
#[command(name = "scicalc", version, about = "Scientific calculator")]
struct Args {
    /// Configuration file (default: <config_dir>/scicalc/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial angle mode for trigonometric keys (rad|deg)
    #[arg(long)]
    angle: Option<AngleMode>,

    /// Keypad layout (standard|engineering)
    #[arg(long)]
    mode: Option<Mode>,

    /// Colour theme (light|dark)
    #[arg(long)]
    theme: Option<Theme>,

    /// Evaluate EXPR and print the result instead of opening the window (repeatable)
    #[arg(short = 'e', long = "eval", value_name = "EXPR")]
    eval: Vec<String>,
}

impl Args {
    /// Les options explicites l’emportent sur le fichier.
    fn appliquer(&self, mut cfg: Config) -> Config {
        if let Some(a) = self.angle {
            cfg.angle_mode = a;
        }
        if let Some(m) = self.mode {
            cfg.mode = m;
        }
        if let Some(t) = self.theme {
            cfg.theme = t;
        }
        cfg
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let args = Args::parse();
    let cfg = Config::load(args.config.as_deref()).context("loading configuration")?;
    let cfg = args.appliquer(cfg);

    if !args.eval.is_empty() {
        let mut session = Session::new(cfg.angle_mode);
        let ok = cli::evaluer_lot(
            &mut session,
            &args.eval,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        )?;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    info!(?cfg, "démarrage de l’interface");
    let app = AppCalc::new(&cfg);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([760.0, 620.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(TITRE_APP, options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    Ok(ExitCode::SUCCESS)
}
