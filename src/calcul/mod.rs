//! Logique de calculatrice hors noyau (aucune vue egui ici)
//!
//! - simple.rs     : mode séquentiel (affichage / opérande en attente / opérateur)
//! - memoire.rs    : registre M+ M- MR MC
//! - historique.rs : entrées {id, expression, result} persistées en JSON
//! - curseur.rs    : édition d’expression au curseur + autocomplétion

pub mod curseur;
pub mod historique;
pub mod memoire;
pub mod simple;

#[cfg(test)]
pub mod stockage_memoire;
