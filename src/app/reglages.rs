//! src/app/reglages.rs
//!
//! Réglages utilisateur persistés (JSON dans le Storage eframe, clé "calculator-settings").
//! Lecture tolérante : champ manquant => valeur par défaut ; JSON illisible => défauts + warn.

use serde::{Deserialize, Serialize};

use crate::graphe::viewport::clamp;
use crate::graphe::ViewportBounds;
use crate::noyau::AngleMode;

use super::etat::Mode;

pub const CLE_REGLAGES: &str = "calculator-settings";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub mode: Mode,
    pub angle: AngleMode,
    pub viewport: ViewportBounds,
    pub table_visible: bool,
}

impl Reglages {
    pub fn charge(storage: Option<&dyn eframe::Storage>) -> Self {
        let Some(json) = storage.and_then(|s| s.get_string(CLE_REGLAGES)) else {
            return Self::default();
        };
        match serde_json::from_str::<Reglages>(&json) {
            Ok(mut r) => {
                // bornes relues : on ré-impose les étendues valides
                r.viewport = clamp(r.viewport);
                r
            }
            Err(e) => {
                log::warn!("réglages illisibles, valeurs par défaut : {e}");
                Self::default()
            }
        }
    }

    pub fn sauve(&self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(self) {
            Ok(json) => storage.set_string(CLE_REGLAGES, json),
            Err(e) => log::warn!("réglages non sauvegardés : {e}"),
        }
    }
}
