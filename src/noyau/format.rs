// src/noyau/format.rs
//
// Affichage des valeurs
// ---------------------
// - |v| < 1e-10 => "0" (masque le bruit flottant, ex: cos(90°) ≈ 6.1e-17)
// - sinon arrondi à 12 chiffres significatifs (coupe l'expansion décimale)
// - NaN / ±inf passent tels quels (sentinelles du noyau)

/// Seuil sous lequel une valeur est traitée comme du bruit flottant.
const SEUIL_BRUIT: f64 = 1e-10;

/// Chiffres significatifs conservés à l'affichage.
const CHIFFRES_SIGNIFICATIFS: i32 = 12;

/// Formate une valeur pour l'écran principal (et l'historique).
pub fn format_valeur(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v.abs() < SEUIL_BRUIT {
        return "0".to_string();
    }

    // Arrondi à 12 chiffres significatifs, puis affichage décimal le plus court.
    let exposant = v.abs().log10().floor() as i32;
    let facteur = 10_f64.powi(CHIFFRES_SIGNIFICATIFS - 1 - exposant);
    let arrondi = (v * facteur).round() / facteur;

    arrondi.to_string()
}
