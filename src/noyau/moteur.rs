//! src/noyau/moteur.rs
//!
//! Moteur de calcul (sans vue, sans egui, sans stockage).
//!
//! Rôle : machine à états d'une calculatrice à boutons :
//! - accumulateur : texte en cours de saisie ("0", "0.", "12.5", …)
//! - opération en attente : (opérande mémorisé, opérateur) entre un opérateur et sa résolution
//! - mémoire : registre unique M
//!
//! Machine à états : {Repos, OperateurEnAttente}.
//! - Repos -> OperateurEnAttente : `operateur` sans opération en attente
//! - OperateurEnAttente -> OperateurEnAttente : nouvel `operateur` (chaînage, résolution gauche->droite)
//! - OperateurEnAttente -> Repos : `egal`
//! - `efface` force Repos depuis n'importe où
//! - fonctions unaires et mémoire ne changent JAMAIS cet état
//!
//! Contrats (Loi de Clément, version moteur) :
//! - Aucune panique : les cas invalides produisent des sentinelles (NaN, 0).
//! - Au plus un point décimal dans l'accumulateur.
//! - La mémoire survit à `efface`.

use super::fonctions::Fonction;
use super::format::format_valeur;
use super::operations::Operateur;

#[derive(Clone, Debug)]
pub struct MoteurCalc {
    /// Accumulateur : le texte affiché, tel que tapé ou tel que posé par un résultat.
    affichage: String,

    /// Opération en attente : (opérande mémorisé, opérateur).
    en_attente: Option<(f64, Operateur)>,

    /// Après un opérateur / "=" / fonction / rappel mémoire :
    /// le prochain chiffre REMPLACE l'affichage au lieu de s'y ajouter.
    attente_saisie: bool,

    /// Registre mémoire (M). Survit à `efface`.
    memoire: f64,
}

impl Default for MoteurCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            en_attente: None,
            attente_saisie: false,
            memoire: 0.0,
        }
    }
}

impl MoteurCalc {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    /// Texte de l'écran principal.
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Ligne d'historique :
    /// - "a op" si une opération est en attente
    /// - "M: m" si la mémoire est non nulle
    /// - vide sinon
    pub fn historique(&self) -> String {
        if let Some((a, op)) = self.en_attente {
            return format!("{} {}", format_valeur(a), op.symbole());
        }
        if self.memoire != 0.0 {
            return format!("M: {}", format_valeur(self.memoire));
        }
        String::new()
    }

    /// Valeur numérique de l'accumulateur.
    /// Un texte partiel illisible (ex: "-" après retour arrière) donne NaN,
    /// qui se propage ensuite comme sentinelle.
    pub fn valeur_courante(&self) -> f64 {
        self.affichage.parse().unwrap_or(f64::NAN)
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un chiffre. Un "0" nu est remplacé (jamais "07").
    pub fn saisir_chiffre(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        if self.attente_saisie {
            self.affichage.clear();
            self.affichage.push(c);
            self.attente_saisie = false;
            return;
        }
        if self.affichage == "0" {
            self.affichage.clear();
        }
        self.affichage.push(c);
    }

    /// Ajoute le point décimal. Un second point est refusé.
    pub fn saisir_point(&mut self) {
        if self.attente_saisie {
            self.affichage = "0.".to_string();
            self.attente_saisie = false;
            return;
        }
        if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// Retire le dernier caractère ; un seul caractère restant => "0".
    pub fn retour_arriere(&mut self) {
        if self.affichage.chars().count() > 1 {
            self.affichage.pop();
        } else {
            self.affichage = "0".to_string();
        }
    }

    /* ------------------------ Opérateurs binaires ------------------------ */

    /// Arme `op`. Si une opération était déjà en attente, elle est résolue
    /// d'abord (chaînage gauche->droite, AUCUNE précédence) et son résultat
    /// devient le nouvel opérande mémorisé.
    pub fn operateur(&mut self, op: Operateur) {
        let courante = self.valeur_courante();

        let operande = match self.en_attente.take() {
            Some((a, op_prec)) => {
                let r = op_prec.appliquer(a, courante);
                self.poser_valeur(r);
                r
            }
            None => courante,
        };

        self.en_attente = Some((operande, op));
        self.attente_saisie = true;
    }

    /// Résout l'opération en attente ; sans opération en attente, ne change rien.
    pub fn egal(&mut self) {
        if let Some((a, op)) = self.en_attente.take() {
            let r = op.appliquer(a, self.valeur_courante());
            self.poser_valeur(r);
            self.attente_saisie = true;
        }
    }

    /* ------------------------ Fonctions unaires ------------------------ */

    /// Écrase l'accumulateur avec f(valeur courante).
    /// L'opération en attente n'est PAS touchée : sin pendant "2 +" laisse "2 +" armé.
    pub fn fonction(&mut self, f: Fonction) {
        let r = f.appliquer(self.valeur_courante());
        self.poser_valeur(r);
        self.attente_saisie = true;
    }

    /* ------------------------ Mémoire ------------------------ */

    /// MC : remet la mémoire à 0.
    pub fn memoire_efface(&mut self) {
        self.memoire = 0.0;
    }

    /// MR : charge la mémoire dans l'accumulateur.
    pub fn memoire_rappel(&mut self) {
        self.poser_valeur(self.memoire);
        self.attente_saisie = true;
    }

    /// M+ : ajoute la valeur courante à la mémoire.
    pub fn memoire_plus(&mut self) {
        self.memoire += self.valeur_courante();
        self.attente_saisie = true;
    }

    /// M- : retire la valeur courante de la mémoire.
    pub fn memoire_moins(&mut self) {
        self.memoire -= self.valeur_courante();
        self.attente_saisie = true;
    }

    /* ------------------------ Effacement ------------------------ */

    /// C : accumulateur à "0", opération en attente annulée. La mémoire survit.
    pub fn efface(&mut self) {
        self.affichage = "0".to_string();
        self.en_attente = None;
        self.attente_saisie = false;
    }

    /* ------------------------ Interne ------------------------ */

    /// Dépose un résultat calculé dans l'accumulateur (via le format d'affichage).
    fn poser_valeur(&mut self, v: f64) {
        self.affichage = format_valeur(v);
    }
}
