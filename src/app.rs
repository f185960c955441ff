// src/app.rs
//
// Interface egui : état (etat.rs), dessin (vue.rs), boucle eframe (ici).
// Chaque frame : thème, Échap, barre du haut, historique à droite, pavé au centre.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

use etat::Theme;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(match self.theme {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        });

        // ESC = effacer l’affichage (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::TopBottomPanel::top("barre").show(ctx, |ui| {
            self.ui_barre(ui);
        });

        egui::SidePanel::right("historique")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                self.ui_historique(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
