// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - Barre : pavé (Standard / Engineering), thème, mode d’angle, mémoire
// - Affichage : Enter évalue (quand le champ est focus)
// - Pavé : grille 4 colonnes, chaque clic passe par AppCalc::touche
// - Historique : panneau latéral + "Clear history"

use eframe::egui;

use super::etat::{AppCalc, Mode, Theme};
use crate::noyau::format_number;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    pub fn ui_barre(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.mode, Mode::Standard, "Standard");
            ui.selectable_value(&mut self.mode, Mode::Engineering, "Engineering");

            ui.separator();

            ui.selectable_value(&mut self.theme, Theme::Light, "Light");
            ui.selectable_value(&mut self.theme, Theme::Dark, "Dark");

            ui.separator();

            ui.label(format!("Angle: {}", self.session.angle_mode()));
            ui.label(format!(
                "M = {}",
                format_number(self.session.memory().value())
            ));
        });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2^10, sin(pi/2), sqrt(2)*3")
                .id_source("affichage")
                .font(egui::TextStyle::Heading),
        );

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.evaluer();
            self.focus_entree = true;
        }

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let touches = self.mode.touches();

        egui::Grid::new("pave")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, label) in touches.iter().enumerate() {
                    self.bouton(ui, label);
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str) {
        let mut b = egui::Button::new(label);
        if matches!(label, "=" | "C" | "DEL") {
            b = b.fill(egui::Color32::from_rgb(0xff, 0x99, 0x33));
        }
        if ui.add_sized([64.0, 36.0], b).clicked() {
            self.touche(label);
        }
    }

    pub fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let historique = self.session.history();
        let titre = format!("History ({})", historique.len());
        let vide = historique.is_empty();

        ui.horizontal(|ui| {
            ui.heading(titre);
            if ui.add_enabled(!vide, egui::Button::new("Clear history")).clicked() {
                self.effacer_historique();
            }
        });
        ui.separator();

        if vide {
            ui.weak("No calculations yet");
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for entree in self.session.history().entries() {
                    ui.monospace(entree.to_string());
                }
            });
    }
}
