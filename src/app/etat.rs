//! src/app/etat.rs
//!
//! État UI + répartition des « boutons » (sans vue egui).
//!
//! Rôle : contenir l’état de la calculatrice (mode, angle, expression au curseur,
//! aperçu, mode simple, mémoire, historique, viewport) et traduire chaque appui
//! (bouton ou touche, déjà normalisé en texte) en opérations.
//!
//! Contrats :
//! - Le noyau est appelé à chaque édition (aperçu) et à la validation.
//! - Aucune erreur ne sort d’ici : tout finit dans `erreur` / l’affichage simple.

use serde::{Deserialize, Serialize};

use crate::calcul::curseur::{Direction, Edition};
use crate::calcul::historique::Historique;
use crate::calcul::memoire::Memoire;
use crate::calcul::simple::{Calcul, EtatSimple, Operateur, ENTREE_MAX};
use crate::graphe::{ViewportBounds, DEFAULT_VIEWPORT};
use crate::noyau::fonctions::est_fonction;
use crate::noyau::{evaluate, AngleMode};

use super::reglages::Reglages;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Simple,
    Expression,
    Graphe,
}

impl Mode {
    pub fn libelle(self) -> &'static str {
        match self {
            Mode::Simple => "Simple",
            Mode::Expression => "Expression",
            Mode::Graphe => "Graph",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- paramètres ---
    pub mode: Mode,
    pub angle: AngleMode,

    // --- mode expression / graphe ---
    pub edition: Edition,
    pub apercu: String,   // aperçu en direct (affichage si succès, vide sinon)
    pub resultat: String, // dernier résultat validé
    pub erreur: String,   // message d’erreur de la dernière validation
    pub selection: usize, // suggestion surlignée (autocomplétion)

    // --- mode simple ---
    pub simple: EtatSimple,
    pub memoire: Memoire,

    // --- partagé ---
    pub historique: Historique,

    // --- graphe ---
    pub viewport: ViewportBounds,
    pub table_visible: bool,

    /// Texte à copier dans le presse-papiers (consommé par la vue).
    pub a_copier: Option<String>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            mode: Mode::Simple,
            angle: AngleMode::Deg,
            edition: Edition::default(),
            apercu: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            selection: 0,
            simple: EtatSimple::default(),
            memoire: Memoire::default(),
            historique: Historique::default(),
            viewport: DEFAULT_VIEWPORT,
            table_visible: false,
            a_copier: None,
        }
    }
}

impl AppCalc {
    /// Démarrage : réglages + historique relus depuis le stockage (s’il existe).
    pub fn new(storage: Option<&dyn eframe::Storage>) -> Self {
        let r = Reglages::charge(storage);
        let app = Self {
            mode: r.mode,
            angle: r.angle,
            viewport: r.viewport,
            table_visible: r.table_visible,
            historique: Historique::charge(storage),
            ..Self::default()
        };
        log::info!(
            "démarrage : mode {}, angle {}, {} entrées d’historique",
            app.mode.libelle(),
            app.angle.libelle(),
            app.historique.entrees().len()
        );
        app
    }

    pub fn reglages(&self) -> Reglages {
        Reglages {
            mode: self.mode,
            angle: self.angle,
            viewport: self.viewport,
            table_visible: self.table_visible,
        }
    }

    /* ------------------------ Modes ------------------------ */

    pub fn change_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        log::info!("mode {} -> {}", self.mode.libelle(), mode.libelle());
        self.mode = mode;
        self.selection = 0;
    }

    pub fn bascule_angle(&mut self) {
        self.angle = self.angle.bascule();
        log::info!("angle : {}", self.angle.libelle());
        self.maj_apercu();
    }

    pub fn reset_viewport(&mut self) {
        self.viewport = DEFAULT_VIEWPORT;
    }

    /* ------------------------ Répartition ------------------------ */

    /// Un appui (bouton ou touche normalisée) : "7", "+", "Enter", "C", "sin", "M+", "copy"…
    pub fn bouton(&mut self, valeur: &str) {
        match valeur {
            "M+" => {
                let v = self.valeur_courante();
                self.memoire.ajoute(&v);
            }
            "M-" => {
                let v = self.valeur_courante();
                self.memoire.retranche(&v);
            }
            "MC" => self.memoire.efface(),
            "MR" => {
                let v = self.memoire.rappel();
                match self.mode {
                    Mode::Simple => self.simple.rappelle(v),
                    _ => self.edite(|e| e.insere(&v)),
                }
            }
            "copy" => self.a_copier = Some(self.valeur_courante()),
            _ => match self.mode {
                Mode::Simple => self.bouton_simple(valeur),
                Mode::Expression | Mode::Graphe => self.bouton_expression(valeur),
            },
        }
    }

    fn bouton_simple(&mut self, valeur: &str) {
        let mut chars = valeur.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                self.simple.chiffre(c);
                return;
            }
        }

        let calcul = match valeur {
            "." => {
                self.simple.point();
                None
            }
            "=" | "Enter" => self.simple.egal(),
            "C" => {
                self.simple.efface();
                None
            }
            "CE" => {
                self.simple.efface_entree();
                None
            }
            "Backspace" => {
                self.simple.retour_arriere();
                None
            }
            _ => Operateur::depuis_symbole(valeur).and_then(|op| self.simple.operateur(op)),
        };

        if let Some(Calcul { expression, resultat }) = calcul {
            self.historique.ajoute(expression, resultat);
        }
    }

    fn bouton_expression(&mut self, valeur: &str) {
        match valeur {
            "Enter" => {
                let suggestions = self.edition.suggestions();
                match suggestions.get(self.selection) {
                    Some(nom) => self.edite(|e| e.complete(nom)),
                    None => self.valide(),
                }
            }
            "=" => self.valide(),
            "C" => self.efface_tout(),
            "CE" => self.edite(Edition::vide),
            "Backspace" => self.edite(Edition::efface_avant),
            "ArrowLeft" => self.edite(|e| e.deplace(Direction::Gauche)),
            "ArrowRight" => self.edite(|e| e.deplace(Direction::Droite)),
            "ArrowUp" => self.selection = self.selection.saturating_sub(1),
            "ArrowDown" => {
                let n = self.edition.suggestions().len();
                if n > 0 {
                    self.selection = (self.selection + 1).min(n - 1);
                }
            }
            "(" => self.edite(Edition::insere_parentheses),
            "e_constant" => self.edite(|e| e.insere("e")),
            nom if est_fonction(nom) => self.edite(|e| {
                e.insere(nom);
                e.insere("(");
            }),
            autre => self.edite(|e| e.insere(autre)),
        }
    }

    /// Coller : expression => insertion au curseur ; simple => nombre lisible seulement.
    pub fn colle(&mut self, texte: &str) {
        let texte: String = texte.chars().filter(|c| !c.is_control()).collect();
        let texte = texte.trim();
        if texte.is_empty() {
            return;
        }
        match self.mode {
            Mode::Simple => {
                if texte.parse::<f64>().is_ok_and(f64::is_finite) {
                    let tronque: String = texte.chars().take(ENTREE_MAX).collect();
                    self.simple.rappelle(tronque);
                }
            }
            Mode::Expression | Mode::Graphe => self.edite(|e| e.insere(texte)),
        }
    }

    /// Clic sur une entrée d’historique.
    pub fn rappelle_historique(&mut self, id: u64) {
        let Some(entree) = self.historique.trouve(id).cloned() else {
            return;
        };
        match self.mode {
            Mode::Simple => self.simple.rappelle(entree.result),
            Mode::Expression | Mode::Graphe => {
                self.edite(|e| e.remplace(entree.expression));
                self.erreur.clear();
            }
        }
    }

    /// Clic sur une suggestion d’autocomplétion.
    pub fn choisit_suggestion(&mut self, nom: &str) {
        self.edite(|e| e.complete(nom));
    }

    /// Position du curseur depuis un clic dans la zone d’expression.
    pub fn clic_expression(&mut self, decalage_x: f32, largeur_car: f32) {
        self.edition.positionne_clic(decalage_x, largeur_car, 0.0);
        self.selection = 0;
    }

    /* ------------------------ Expression ------------------------ */

    /// Toute édition passe par ici : aperçu recalculé, sélection remise à zéro.
    fn edite(&mut self, f: impl FnOnce(&mut Edition)) {
        f(&mut self.edition);
        self.selection = 0;
        self.maj_apercu();
    }

    pub fn maj_apercu(&mut self) {
        self.apercu = evaluate(&self.edition.texte, self.angle)
            .affichage()
            .map(str::to_string)
            .unwrap_or_default();
    }

    /// Validation : résultat affiché + historique, ou message d’erreur (expression gardée).
    pub fn valide(&mut self) {
        let r = evaluate(&self.edition.texte, self.angle);
        log::debug!("validation {:?} : {:?}", self.edition.texte, r.statut());

        if let Some(affichage) = r.affichage() {
            self.historique.ajoute(self.edition.texte.trim(), affichage);
            self.resultat = affichage.to_string();
            self.erreur.clear();
        } else if let Some(e) = r.erreur() {
            self.resultat.clear();
            self.erreur = e.to_string();
        }
    }

    fn efface_tout(&mut self) {
        self.edition.vide();
        self.apercu.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.selection = 0;
    }

    /// Valeur « courante » pour M+/M-/copie : affichage simple, ou dernier résultat / aperçu.
    fn valeur_courante(&self) -> String {
        match self.mode {
            Mode::Simple => self.simple.affichage.clone(),
            Mode::Expression | Mode::Graphe => {
                if self.resultat.is_empty() {
                    self.apercu.clone()
                } else {
                    self.resultat.clone()
                }
            }
        }
    }
}
