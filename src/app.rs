// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB) + la persistance thème/mode
//
// Important:
// - Le clavier calculatrice (chiffres, opérateurs, Enter, Backspace) est géré
//   dans vue.rs via les événements egui.
// - Ici: Échap = efface (bouton "C"), visuels du thème, sauvegarde/restauration.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::{Theme, Touche};

/// Clés eframe::Storage (thème + mode, rien d'autre n'est persisté).
const CLE_THEME: &str = "theme";
const CLE_MODE: &str = "mode";

impl AppCalc {
    /// Construction au lancement : restaure thème + mode depuis le stockage
    /// eframe s'il existe (natif: fichier ; web: localStorage).
    pub fn nouveau(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        if let Some(stockage) = cc.storage {
            if let Some(theme) = eframe::get_value(stockage, CLE_THEME) {
                app.theme = theme;
            }
            if let Some(mode) = eframe::get_value(stockage, CLE_MODE) {
                app.mode = mode;
            }
        }
        app
    }

    fn appliquer_theme(&self, ctx: &egui::Context) {
        let visuels = match self.theme {
            Theme::Clair => egui::Visuals::light(),
            Theme::Sombre => egui::Visuals::dark(),
        };
        ctx.set_visuals(visuels);
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.appliquer_theme(ctx);

        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = tout effacer (comme bouton "C"). La mémoire survit (contrat moteur).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.appuyer(Touche::Efface);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }

    fn save(&mut self, stockage: &mut dyn eframe::Storage) {
        eframe::set_value(stockage, CLE_THEME, &self.theme);
        eframe::set_value(stockage, CLE_MODE, &self.mode);
    }
}
