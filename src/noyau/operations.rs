// src/noyau/operations.rs
//
// Opérateurs binaires de la calculatrice
// --------------------------------------
// - six opérateurs : + - * / % ^
// - règle d'application UNIQUE (appliquer), partagée par le chaînage et par "="
// - division par zéro => 0 (politique d'affichage, pas une erreur)

/// Opérateur binaire en attente entre deux opérandes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
    Modulo,
    Puissance,
}

impl Operateur {
    /// Mappe un caractère (bouton ou clavier) vers un opérateur.
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Division),
            '%' => Some(Self::Modulo),
            '^' => Some(Self::Puissance),
            _ => None,
        }
    }

    /// Symbole affiché dans l'historique ("5 +", "12 ^", …).
    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Division => '/',
            Self::Modulo => '%',
            Self::Puissance => '^',
        }
    }

    /// Applique `a op b`.
    ///
    /// Cas limites :
    /// - a / 0 => 0 (sentinelle, l'affichage continue sans erreur)
    /// - a % b : reste du flottant hôte (signe du dividende)
    /// - a ^ b : exponentiation flottante (powf)
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Plus => a + b,
            Self::Moins => a - b,
            Self::Fois => a * b,
            Self::Division => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
            Self::Modulo => a % b,
            Self::Puissance => a.powf(b),
        }
    }
}
