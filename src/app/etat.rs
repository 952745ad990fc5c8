//! src/app/etat.rs
//!
//! État UI (sans vue, sans egui).
//!
//! Rôle : porter le moteur + les réglages d'affichage (mode, thème) et traduire
//! chaque `Touche` en UN appel de moteur, sans aucune arithmétique ici.
//!
//! Contrats (Loi de Clément, version UI) :
//! - Aucun calcul ici (tout passe par le noyau).
//! - Thème et mode ne changent jamais un résultat : le mode remet seulement
//!   l'accumulateur à zéro, le thème ne touche à rien.
//! - Actions déterministes, sans effet de bord caché.

use serde::{Deserialize, Serialize};

use crate::noyau::{Fonction, MoteurCalc, Operateur};

/// Thème visuel. Persisté entre sessions (eframe::Storage).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Clair,
    Sombre,
}

impl Theme {
    pub fn bascule(self) -> Self {
        match self {
            Self::Clair => Self::Sombre,
            Self::Sombre => Self::Clair,
        }
    }
}

/// Mode d'affichage du pavé : standard (4 colonnes) ou scientifique (rangées en plus).
/// Aucun effet sur le calcul.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Standard,
    Scientifique,
}

/// Touche logique : ce que la vue (boutons) ou le clavier envoie à l'état.
#[derive(Clone, Copy, Debug)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(Operateur),
    Fonction(Fonction),
    Egal,
    Efface,
    RetourArriere,
    MemoireEfface,
    MemoireRappel,
    MemoirePlus,
    MemoireMoins,
}

impl Touche {
    /// Mappe un caractère clavier vers une touche logique (None si non reconnu).
    pub fn depuis_caractere(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            return Some(Self::Chiffre(c));
        }
        match c {
            '.' => Some(Self::Point),
            '=' => Some(Self::Egal),
            _ => Operateur::depuis_symbole(c).map(Self::Operateur),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: MoteurCalc,
    pub mode: Mode,
    pub theme: Theme,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: MoteurCalc::new(),
            mode: Mode::Standard,
            theme: Theme::Clair,
        }
    }
}

impl AppCalc {
    /* ------------------------ Dispatch des touches ------------------------ */

    /// Chaque touche part vers exactement une méthode du moteur.
    pub fn appuyer(&mut self, touche: Touche) {
        tracing::debug!(?touche, "touche");
        match touche {
            Touche::Chiffre(c) => self.moteur.saisir_chiffre(c),
            Touche::Point => self.moteur.saisir_point(),
            Touche::Operateur(op) => self.moteur.operateur(op),
            Touche::Fonction(f) => self.moteur.fonction(f),
            Touche::Egal => self.moteur.egal(),
            Touche::Efface => self.moteur.efface(),
            Touche::RetourArriere => self.moteur.retour_arriere(),
            Touche::MemoireEfface => self.moteur.memoire_efface(),
            Touche::MemoireRappel => self.moteur.memoire_rappel(),
            Touche::MemoirePlus => self.moteur.memoire_plus(),
            Touche::MemoireMoins => self.moteur.memoire_moins(),
        }
    }

    /* ------------------------ Réglages ------------------------ */

    pub fn basculer_theme(&mut self) {
        self.theme = self.theme.bascule();
        tracing::debug!(theme = ?self.theme, "bascule thème");
    }

    /// Changer de mode remet l'accumulateur à zéro (la mémoire survit).
    pub fn changer_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.moteur.efface();
            tracing::debug!(mode = ?self.mode, "bascule mode");
        }
    }
}
