//! Noyau calculatrice
//!
//! Organisation interne :
//! - operations.rs : opérateurs binaires (+ - * / % ^) + règle d'application
//! - fonctions.rs  : fonctions scientifiques unaires (trig degrés, logs, factorielle…)
//! - format.rs     : affichage (clamp anti-bruit + chiffres significatifs)
//! - moteur.rs     : machine à états (accumulateur, opération en attente, mémoire)

pub mod fonctions;
pub mod format;
pub mod moteur;
pub mod operations;

#[cfg(test)]
mod tests_scientifiques;



// API publique minimale
pub use fonctions::Fonction;
pub use moteur::MoteurCalc;
pub use operations::Operateur;
