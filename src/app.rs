// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (état, réglages, clavier, vues)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB) : update + save
//
// Important:
// - Le clavier est lu ici, une fois par frame, et traduit en appuis (clavier.rs).
//   L’éditeur d’expression n’est pas un TextEdit : aucun double déclenchement.

pub mod clavier;
pub mod etat;
pub mod graphe_vue;
pub mod reglages;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use clavier::{traduit, Entree};

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let evenements = ctx.input(|i| i.events.clone());
        for entree in traduit(&evenements) {
            match entree {
                Entree::Bouton(b) => self.bouton(&b),
                Entree::Copie => self.bouton("copy"),
                Entree::Colle(t) => self.colle(&t),
            }
        }

        egui::SidePanel::right("historique")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                self.ui_historique(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });

        // Copie demandée (clavier ou bouton) : après la vue, pour attraper les deux.
        if let Some(texte) = self.a_copier.take() {
            ctx.copy_text(texte);
        }
    }

    /// Appelé par eframe (périodiquement + à la fermeture), qui flush ensuite le stockage.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.reglages().sauve(storage);
        self.historique.sauve(storage);
    }
}
