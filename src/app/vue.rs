// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : historique ("12 +", "M: 5") au-dessus de l'affichage principal
// - Pavé standard 4 colonnes ; rangées scientifiques si mode Scientifique
// - Clavier : chiffres/./opérateurs via Event::Text, Enter évalue,
//   Backspace efface un caractère (Échap est géré dans app.rs)
//
// Note :
// - Les caractères ('+', '*', …) n'existent pas en egui::Key : on lit les
//   événements Text, ce qui couvre aussi les claviers virtuels mobiles.

use eframe::egui;

use super::etat::{AppCalc, Mode, Touche};
use crate::noyau::{Fonction, Operateur};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...).
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.clavier(ui);

        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_entete(ui);
        ui.add_space(6.0);

        self.ui_ecran(ui);
        ui.add_space(8.0);

        if self.mode == Mode::Scientifique {
            self.ui_pave_scientifique(ui);
            ui.add_space(6.0);
        }

        self.ui_pave_standard(ui);
    }

    /* ------------------------ Clavier ------------------------ */

    fn clavier(&mut self, ui: &egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());
        for e in evenements {
            match e {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if let Some(t) = Touche::depuis_caractere(c) {
                            self.appuyer(t);
                        }
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.appuyer(Touche::Egal),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.appuyer(Touche::RetourArriere),
                _ => {}
            }
        }
    }

    /* ------------------------ Entête : thème + mode ------------------------ */

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculatrice");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icone = match self.theme {
                    super::etat::Theme::Clair => "🌙",
                    super::etat::Theme::Sombre => "☀",
                };
                if ui
                    .button(icone)
                    .on_hover_text("Basculer le thème")
                    .clicked()
                {
                    self.basculer_theme();
                }

                let mut mode = self.mode;
                ui.selectable_value(&mut mode, Mode::Scientifique, "Scientifique");
                ui.selectable_value(&mut mode, Mode::Standard, "Standard");
                if mode != self.mode {
                    // remet l'accumulateur à zéro (contrat du mode)
                    self.changer_mode(mode);
                }
            });
        });
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Historique : petit, aligné à droite ("12 +", "M: 5", ou vide)
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let historique = self.moteur.historique();
                    ui.weak(egui::RichText::new(historique).monospace());
                });

                // Affichage principal : gros, aligné à droite
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.moteur.affichage())
                            .monospace()
                            .size(30.0),
                    );
                });
            });
    }

    /* ------------------------ Pavés ------------------------ */

    fn ui_pave_standard(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_standard")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Touche::Efface);
                self.bouton(ui, "⌫", Touche::RetourArriere);
                self.bouton(ui, "%", Touche::Operateur(Operateur::Modulo));
                self.bouton(ui, "/", Touche::Operateur(Operateur::Division));
                ui.end_row();

                self.bouton(ui, "7", Touche::Chiffre('7'));
                self.bouton(ui, "8", Touche::Chiffre('8'));
                self.bouton(ui, "9", Touche::Chiffre('9'));
                self.bouton(ui, "*", Touche::Operateur(Operateur::Fois));
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'));
                self.bouton(ui, "5", Touche::Chiffre('5'));
                self.bouton(ui, "6", Touche::Chiffre('6'));
                self.bouton(ui, "-", Touche::Operateur(Operateur::Moins));
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'));
                self.bouton(ui, "2", Touche::Chiffre('2'));
                self.bouton(ui, "3", Touche::Chiffre('3'));
                self.bouton(ui, "+", Touche::Operateur(Operateur::Plus));
                ui.end_row();

                self.bouton(ui, "±", Touche::Fonction(Fonction::Negation));
                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Egal);
                ui.end_row();
            });
    }

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "sin", Touche::Fonction(Fonction::Sin));
                self.bouton(ui, "cos", Touche::Fonction(Fonction::Cos));
                self.bouton(ui, "tan", Touche::Fonction(Fonction::Tan));
                self.bouton(ui, "n!", Touche::Fonction(Fonction::Factorielle));
                ui.end_row();

                self.bouton(ui, "x²", Touche::Fonction(Fonction::Carre));
                self.bouton(ui, "x³", Touche::Fonction(Fonction::Cube));
                self.bouton(ui, "√", Touche::Fonction(Fonction::Racine));
                self.bouton(ui, "xʸ", Touche::Operateur(Operateur::Puissance));
                ui.end_row();

                self.bouton(ui, "log", Touche::Fonction(Fonction::Log10));
                self.bouton(ui, "ln", Touche::Fonction(Fonction::Ln));
                self.bouton(ui, "1/x", Touche::Fonction(Fonction::Inverse));
                self.bouton(ui, "π", Touche::Fonction(Fonction::Pi));
                ui.end_row();

                self.bouton(ui, "MC", Touche::MemoireEfface);
                self.bouton(ui, "MR", Touche::MemoireRappel);
                self.bouton(ui, "M+", Touche::MemoirePlus);
                self.bouton(ui, "M-", Touche::MemoireMoins);
                ui.end_row();

                self.bouton(ui, "e", Touche::Fonction(Fonction::E));
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([56.0, 34.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
