// src/noyau/fonctions.rs
//
// Fonctions scientifiques unaires
// -------------------------------
// - chacune lit la valeur courante et la remplace (l'opération en attente n'est pas touchée)
// - trig en DEGRÉS : conversion degrés -> radians avant évaluation
// - entrées invalides (√ de négatif, log de ≤ 0, factorielle de négatif)
//   => sentinelles flottantes (NaN), jamais d'erreur

/// Fonction unaire du pavé scientifique.
///
/// `Pi` et `E` ignorent la valeur courante : elles chargent la constante.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Racine,
    Carre,
    Cube,
    Inverse,
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Factorielle,
    Negation,
    Pi,
    E,
}

impl Fonction {
    /// Applique la fonction à la valeur courante.
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Self::Racine => x.sqrt(),
            Self::Carre => x * x,
            Self::Cube => x * x * x,
            Self::Inverse => 1.0 / x,
            Self::Sin => x.to_radians().sin(),
            Self::Cos => x.to_radians().cos(),
            Self::Tan => x.to_radians().tan(),
            Self::Log10 => x.log10(),
            Self::Ln => x.ln(),
            Self::Factorielle => factorielle(x),
            Self::Negation => -x,
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

/// Factorielle sur flottant : entrée tronquée vers le bas.
///
/// - n < 0      => NaN (sentinelle)
/// - n ∈ {0, 1} => 1
/// - sinon      => produit itératif 2 * 3 * … * n
pub fn factorielle(x: f64) -> f64 {
    let n = x.floor();
    if n < 0.0 {
        return f64::NAN;
    }
    if n <= 1.0 {
        return 1.0;
    }

    let mut produit = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n {
        produit *= i;
        if !produit.is_finite() {
            // produit saturé (inf) : la suite ne change plus rien
            break;
        }
        i += 1.0;
    }
    produit
}
