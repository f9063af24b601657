// src/calcul/historique.rs
//
// Historique des calculs
// ----------------------
// - entrée {id, expression, result} ; plus récente en tête
// - id = max existant + 1 (monotone, déterministe)
// - persistance : tableau JSON dans le Storage eframe, clé fixe "calculator-history"
// - données illisibles => historique vide (avertissement dans les logs)

use serde::{Deserialize, Serialize};

/// Clé de stockage (clé/valeur eframe).
pub const CLE_HISTORIQUE: &str = "calculator-history";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub expression: String,
    pub result: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Historique {
    entrees: Vec<HistoryEntry>,
}

impl Historique {
    pub fn entrees(&self) -> &[HistoryEntry] {
        &self.entrees
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Ajoute en tête ; renvoie l’id attribué.
    pub fn ajoute(&mut self, expression: impl Into<String>, result: impl Into<String>) -> u64 {
        let id = self.entrees.iter().map(|e| e.id).max().map_or(1, |m| m + 1);
        self.entrees.insert(
            0,
            HistoryEntry {
                id,
                expression: expression.into(),
                result: result.into(),
            },
        );
        id
    }

    pub fn trouve(&self, id: u64) -> Option<&HistoryEntry> {
        self.entrees.iter().find(|e| e.id == id)
    }

    /// "Clear History"
    pub fn efface(&mut self) {
        self.entrees.clear();
    }

    /* ------------------------ Persistance ------------------------ */

    pub fn depuis_json(json: &str) -> Result<Self, serde_json::Error> {
        let entrees: Vec<HistoryEntry> = serde_json::from_str(json)?;
        Ok(Self { entrees })
    }

    pub fn vers_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entrees)
    }

    /// Lecture au démarrage. Absence de stockage ou de clé : vide, sans bruit.
    pub fn charge(storage: Option<&dyn eframe::Storage>) -> Self {
        let Some(json) = storage.and_then(|s| s.get_string(CLE_HISTORIQUE)) else {
            return Self::default();
        };
        match Self::depuis_json(&json) {
            Ok(h) => {
                log::debug!("historique chargé : {} entrées", h.entrees.len());
                h
            }
            Err(e) => {
                log::warn!("historique illisible, ignoré : {e}");
                Self::default()
            }
        }
    }

    pub fn sauve(&self, storage: &mut dyn eframe::Storage) {
        match self.vers_json() {
            Ok(json) => storage.set_string(CLE_HISTORIQUE, json),
            Err(e) => log::warn!("historique non sauvegardé : {e}"),
        }
    }
}
