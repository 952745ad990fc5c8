//! Tests scientifiques (campagne) : comportements observables du moteur.
//!
//! But : vérifier le contrat complet de la machine à états, bouton par bouton.
//! - opérateurs binaires + chaînage gauche->droite (AUCUNE précédence)
//! - fonctions unaires (trig degrés, logs, factorielle, constantes)
//! - sentinelles (division par zéro => 0, factorielle négative => NaN)
//! - mémoire (MC/MR/M+/M-) et effacement
//!
//! Convention : `tape` rejoue une séquence de touches caractère par caractère
//! ('0'..'9', '.', opérateurs, '=' pour égal, '<' pour retour arrière, 'C' pour efface).

use super::{Fonction, MoteurCalc, Operateur};

/* ------------------------ Helpers ------------------------ */

fn tape(m: &mut MoteurCalc, touches: &str) {
    for c in touches.chars() {
        match c {
            '0'..='9' => m.saisir_chiffre(c),
            '.' => m.saisir_point(),
            '=' => m.egal(),
            '<' => m.retour_arriere(),
            'C' => m.efface(),
            ' ' => {}
            _ => {
                let op = Operateur::depuis_symbole(c)
                    .unwrap_or_else(|| panic!("touche inconnue dans le test: {c:?}"));
                m.operateur(op);
            }
        }
    }
}

fn affichage_apres(touches: &str) -> String {
    let mut m = MoteurCalc::new();
    tape(&mut m, touches);
    m.affichage().to_string()
}

fn assert_affiche(touches: &str, attendu: &str) {
    let obtenu = affichage_apres(touches);
    assert_eq!(obtenu, attendu, "séquence {touches:?}");
}

/* ------------------------ Opérateurs binaires ------------------------ */

#[test]
fn sci_binaires_simples() {
    assert_affiche("10 + 5 =", "15");
    assert_affiche("10 - 3 =", "7");
    assert_affiche("6 * 7 =", "42");
    assert_affiche("20 / 4 =", "5");
    assert_affiche("17 % 5 =", "2");
    assert_affiche("2 ^ 10 =", "1024");
}

#[test]
fn sci_chainage_sans_precedence() {
    // 2 + 3 * 4 = : résolution gauche->droite : (2+3)=5, puis 5*4=20
    assert_affiche("2 + 3 * 4 =", "20");

    // l'écran montre le résultat intermédiaire dès le second opérateur
    let mut m = MoteurCalc::new();
    tape(&mut m, "2 + 3 *");
    assert_eq!(m.affichage(), "5");
    assert_eq!(m.historique(), "5 *");
}

#[test]
fn sci_division_par_zero_politique() {
    assert_affiche("5 / 0 =", "0");
    // et la sentinelle reste exploitable : on peut continuer à calculer
    assert_affiche("5 / 0 = + 3 =", "3");
}

#[test]
fn sci_egal_sans_operation_ne_change_rien() {
    assert_affiche("42 =", "42");
    assert_affiche("7 = = =", "7");
}

#[test]
fn sci_decimales() {
    assert_affiche("1.5 + 2.25 =", "3.75");
    assert_affiche("0.1 + 0.2 =", "0.3"); // artefact binaire coupé par le format
}

/* ------------------------ Fonctions unaires ------------------------ */

#[test]
fn sci_puissances_et_racines() {
    let mut m = MoteurCalc::new();
    tape(&mut m, "16");
    m.fonction(Fonction::Racine);
    assert_eq!(m.affichage(), "4");

    let mut m = MoteurCalc::new();
    tape(&mut m, "5");
    m.fonction(Fonction::Carre);
    assert_eq!(m.affichage(), "25");

    let mut m = MoteurCalc::new();
    tape(&mut m, "3");
    m.fonction(Fonction::Cube);
    assert_eq!(m.affichage(), "27");

    let mut m = MoteurCalc::new();
    tape(&mut m, "8");
    m.fonction(Fonction::Inverse);
    assert_eq!(m.affichage(), "0.125");
}

#[test]
fn sci_trig_degres() {
    let mut m = MoteurCalc::new();
    tape(&mut m, "90");
    m.fonction(Fonction::Sin);
    assert_eq!(m.affichage(), "1");

    // cos(90°) ≈ 6.1e-17 : le clamp anti-bruit affiche 0
    let mut m = MoteurCalc::new();
    tape(&mut m, "90");
    m.fonction(Fonction::Cos);
    assert_eq!(m.affichage(), "0");

    let mut m = MoteurCalc::new();
    tape(&mut m, "45");
    m.fonction(Fonction::Tan);
    assert_eq!(m.affichage(), "1");
}

#[test]
fn sci_logs() {
    let mut m = MoteurCalc::new();
    tape(&mut m, "1000");
    m.fonction(Fonction::Log10);
    assert_eq!(m.affichage(), "3");

    let mut m = MoteurCalc::new();
    m.fonction(Fonction::E); // charge e
    m.fonction(Fonction::Ln); // ln(e) = 1
    assert_eq!(m.affichage(), "1");

    // log d'un négatif : sentinelle NaN, affichée telle quelle
    let mut m = MoteurCalc::new();
    tape(&mut m, "5");
    m.fonction(Fonction::Negation);
    m.fonction(Fonction::Log10);
    assert_eq!(m.affichage(), "NaN");
}

#[test]
fn sci_factorielle() {
    let mut m = MoteurCalc::new();
    tape(&mut m, "5");
    m.fonction(Fonction::Factorielle);
    assert_eq!(m.affichage(), "120");

    let mut m = MoteurCalc::new();
    tape(&mut m, "0");
    m.fonction(Fonction::Factorielle);
    assert_eq!(m.affichage(), "1");

    let mut m = MoteurCalc::new();
    tape(&mut m, "1");
    m.fonction(Fonction::Negation);
    m.fonction(Fonction::Factorielle);
    assert_eq!(m.affichage(), "NaN");
}

#[test]
fn sci_constantes() {
    let mut m = MoteurCalc::new();
    tape(&mut m, "42"); // ignoré par les constantes
    m.fonction(Fonction::Pi);
    assert_eq!(m.affichage(), "3.14159265359"); // 12 chiffres significatifs

    let mut m = MoteurCalc::new();
    m.fonction(Fonction::E);
    assert_eq!(m.affichage(), "2.71828182846");
}

#[test]
fn sci_unaire_ne_touche_pas_l_operation_en_attente() {
    let mut m = MoteurCalc::new();
    tape(&mut m, "2 + 9");
    m.fonction(Fonction::Racine); // 9 -> 3, "2 +" reste armé
    assert_eq!(m.affichage(), "3");
    assert_eq!(m.historique(), "2 +");
    m.egal();
    assert_eq!(m.affichage(), "5");
}

/* ------------------------ Retour arrière ------------------------ */

#[test]
fn sci_retour_arriere() {
    assert_affiche("123 <", "12");
    assert_affiche("7 <", "0"); // un seul caractère => "0"
    assert_affiche("<", "0"); // "0" reste "0"
    assert_affiche("1.5 <", "1.");
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn sci_memoire_aller_retour() {
    // m+ puis mc puis mr => 0
    let mut m = MoteurCalc::new();
    tape(&mut m, "9");
    m.memoire_plus();
    m.memoire_efface();
    m.memoire_rappel();
    assert_eq!(m.affichage(), "0");

    // 5 m+ 3 m+ mr => 8
    let mut m = MoteurCalc::new();
    tape(&mut m, "5");
    m.memoire_plus();
    tape(&mut m, "3");
    m.memoire_moins(); // M = 5 - 3 = 2
    tape(&mut m, "4");
    m.memoire_plus(); // M = 6
    m.memoire_rappel();
    assert_eq!(m.affichage(), "6");

    let mut m = MoteurCalc::new();
    tape(&mut m, "5");
    m.memoire_plus();
    tape(&mut m, "3");
    m.memoire_plus();
    m.memoire_rappel();
    assert_eq!(m.affichage(), "8");
}

#[test]
fn sci_rappel_memoire_arme_la_saisie() {
    // après MR, un chiffre remplace (il ne s'ajoute pas au rappel)
    let mut m = MoteurCalc::new();
    tape(&mut m, "5");
    m.memoire_plus();
    m.memoire_rappel();
    tape(&mut m, "3");
    assert_eq!(m.affichage(), "3");
}

/* ------------------------ Effacement ------------------------ */

#[test]
fn sci_efface_preserve_la_memoire() {
    let mut m = MoteurCalc::new();
    tape(&mut m, "5");
    m.memoire_plus();
    tape(&mut m, "12 + 3");
    m.efface();

    assert_eq!(m.affichage(), "0");
    // l'opération en attente est annulée : "=" ne fait plus rien
    m.egal();
    assert_eq!(m.affichage(), "0");
    // …mais la mémoire survit
    m.memoire_rappel();
    assert_eq!(m.affichage(), "5");
}

#[test]
fn sci_efface_depuis_tout_etat() {
    for seq in ["", "12", "12 +", "12 + 3", "12 + 3 ="] {
        let mut m = MoteurCalc::new();
        tape(&mut m, seq);
        m.efface();
        assert_eq!(m.affichage(), "0", "séquence {seq:?}");
        assert_eq!(m.historique(), "", "séquence {seq:?}");
    }
}
