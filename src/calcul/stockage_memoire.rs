//! Stockage clé/valeur en mémoire (tests de persistance sans disque ni navigateur).

use std::collections::HashMap;

#[derive(Default)]
pub struct StockageMemoire {
    pub valeurs: HashMap<String, String>,
    pub flushes: usize,
}

impl eframe::Storage for StockageMemoire {
    fn get_string(&self, key: &str) -> Option<String> {
        self.valeurs.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.valeurs.insert(key.to_string(), value);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
