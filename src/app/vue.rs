// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Sélecteur de mode (Simple / Expression / Graph) + bascule DEG/RAD
// - Simple : afficheur (+ indicateur M), mémoire, pavé
// - Expression : éditeur à curseur, autocomplétion, aperçu, résultat/erreur,
//                panneau scientifique + pavé
// - Historique : panneau latéral (rappel au clic, "Clear History")
//
// Aucune logique ici : chaque clic devient un appui `bouton(...)` (etat.rs).

use eframe::egui;

use super::etat::{AppCalc, Mode};

/// Panneau scientifique : (valeur envoyée, libellé affiché).
const SCIENTIFIQUE: [[(&str, &str); 4]; 5] = [
    [("sin", "sin"), ("cos", "cos"), ("tan", "tan"), ("pi", "π")],
    [("asin", "asin"), ("acos", "acos"), ("atan", "atan"), ("e_constant", "e")],
    [("sinh", "sinh"), ("cosh", "cosh"), ("tanh", "tanh"), ("!", "x!")],
    [("log", "log"), ("ln", "ln"), ("sqrt", "√"), ("^", "x^y")],
    [("abs", "abs"), ("cbrt", "cbrt"), ("(", "("), (")", ")")],
];

/// Pavé de base ; "" = case vide. "%" n’existe qu’en mode expression.
const PAVE: [[(&str, &str); 4]; 5] = [
    [("C", "C"), ("CE", "CE"), ("Backspace", "⌫"), ("/", "÷")],
    [("7", "7"), ("8", "8"), ("9", "9"), ("*", "×")],
    [("4", "4"), ("5", "5"), ("6", "6"), ("-", "−")],
    [("1", "1"), ("2", "2"), ("3", "3"), ("+", "+")],
    [("0", "0"), (".", "."), ("=", "="), ("%", "%")],
];

const MEMOIRE: [&str; 4] = ["MC", "MR", "M+", "M-"];

/// Taille des touches.
const TOUCHE: [f32; 2] = [56.0, 34.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(4.0);
        self.ui_modes(ui);
        ui.add_space(6.0);
        ui.separator();
        ui.add_space(6.0);

        match self.mode {
            Mode::Simple => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.ui_simple(ui));
            }
            Mode::Expression => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.ui_expression(ui));
            }
            // Pas de ScrollArea : la molette sert au zoom du graphe.
            Mode::Graphe => self.ui_mode_graphe(ui),
        }
    }

    fn ui_modes(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for m in [Mode::Simple, Mode::Expression, Mode::Graphe] {
                if ui.selectable_label(self.mode == m, m.libelle()).clicked() {
                    self.change_mode(m);
                }
            }

            if self.mode != Mode::Simple {
                ui.separator();
                let resp = ui
                    .add_sized([56.0, 24.0], egui::Button::new(self.angle.libelle()))
                    .on_hover_text("Unité des fonctions trigonométriques");
                if resp.clicked() {
                    self.bascule_angle();
                }
            }
        });
    }

    /* ------------------------ Mode simple ------------------------ */

    fn ui_simple(&mut self, ui: &mut egui::Ui) {
        let indicateur = if self.memoire.active() { "M" } else { "" };
        let taille = if self.simple.affichage.chars().count() > 12 {
            22.0
        } else {
            30.0
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.monospace(indicateur);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(&self.simple.affichage)
                                .monospace()
                                .size(taille),
                        );
                    });
                });
            });

        ui.add_space(8.0);
        self.ui_memoire(ui);
        ui.add_space(6.0);
        self.ui_pave(ui, false);
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for m in MEMOIRE {
                if ui.add_sized(TOUCHE, egui::Button::new(m)).clicked() {
                    self.bouton(m);
                }
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, avec_pourcent: bool) {
        egui::Grid::new("pave_calc")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (valeur, libelle) in ligne {
                        if valeur == "%" && !avec_pourcent {
                            ui.label("");
                            continue;
                        }
                        self.touche(ui, valeur, libelle);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in SCIENTIFIQUE {
                    for (valeur, libelle) in ligne {
                        self.touche(ui, valeur, libelle);
                    }
                    ui.end_row();
                }
            });
    }

    fn touche(&mut self, ui: &mut egui::Ui, valeur: &str, libelle: &str) {
        if ui.add_sized(TOUCHE, egui::Button::new(libelle)).clicked() {
            self.bouton(valeur);
        }
    }

    /* ------------------------ Mode expression ------------------------ */

    fn ui_expression(&mut self, ui: &mut egui::Ui) {
        self.ui_editeur(ui);
        self.ui_autocompletion(ui);
        self.ui_sorties(ui);

        ui.add_space(8.0);
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| self.ui_scientifique(ui));
            ui.separator();
            ui.vertical(|ui| {
                self.ui_pave(ui, true);
                ui.add_space(6.0);
                self.ui_memoire(ui);
            });
        });
    }

    /// Éditeur d’expression : texte monospace + curseur dessiné, clic = positionne le curseur.
    pub(super) fn ui_editeur(&mut self, ui: &mut egui::Ui) {
        const MARGE: f32 = 8.0;

        let police = egui::FontId::monospace(22.0);
        let couleur = ui.visuals().text_color();
        let largeur_car = ui
            .painter()
            .layout_no_wrap("0".to_string(), police.clone(), couleur)
            .size()
            .x;

        let (rect, resp) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), 40.0),
            egui::Sense::click(),
        );
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

        let origine = rect.left_center() + egui::vec2(MARGE, 0.0);
        if self.edition.texte.is_empty() {
            painter.text(
                origine,
                egui::Align2::LEFT_CENTER,
                "ex: 2sin(30)+sqrt(16)",
                police.clone(),
                ui.visuals().weak_text_color(),
            );
        } else {
            painter.text(
                origine,
                egui::Align2::LEFT_CENTER,
                &self.edition.texte,
                police,
                couleur,
            );
        }

        let x = origine.x + largeur_car * self.edition.curseur as f32;
        painter.line_segment(
            [
                egui::pos2(x, rect.top() + 8.0),
                egui::pos2(x, rect.bottom() - 8.0),
            ],
            egui::Stroke::new(1.5, ui.visuals().selection.stroke.color),
        );

        if resp.clicked() {
            if let Some(p) = resp.interact_pointer_pos() {
                self.clic_expression(p.x - origine.x, largeur_car);
            }
        }
    }

    pub(super) fn ui_autocompletion(&mut self, ui: &mut egui::Ui) {
        let suggestions = self.edition.suggestions();
        if suggestions.is_empty() {
            return;
        }
        ui.horizontal_wrapped(|ui| {
            for (i, nom) in suggestions.into_iter().enumerate() {
                if ui.selectable_label(i == self.selection, nom).clicked() {
                    self.choisit_suggestion(nom);
                }
            }
        });
    }

    pub(super) fn ui_sorties(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        if !self.apercu.is_empty() && self.apercu != self.resultat {
            ui.label(egui::RichText::new(format!("= {}", self.apercu)).weak().monospace());
        }
        if !self.resultat.is_empty() {
            ui.label(
                egui::RichText::new(&self.resultat)
                    .monospace()
                    .size(26.0)
                    .strong(),
            );
        }
        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /* ------------------------ Historique ------------------------ */

    pub fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("History");
            if !self.historique.est_vide() && ui.button("Clear History").clicked() {
                self.historique.efface();
            }
        });
        ui.separator();

        if self.historique.est_vide() {
            ui.weak("No calculations yet");
            return;
        }

        let mut rappel = None;
        egui::ScrollArea::vertical()
            .id_salt("historique_defilement")
            .show(ui, |ui| {
                for e in self.historique.entrees() {
                    let texte = format!("{} =\n{}", e.expression, e.result);
                    let resp = ui.add(
                        egui::Button::new(egui::RichText::new(texte).monospace())
                            .min_size(egui::vec2(ui.available_width(), 0.0)),
                    );
                    if resp.clicked() {
                        rappel = Some(e.id);
                    }
                }
            });
        if let Some(id) = rappel {
            self.rappelle_historique(id);
        }
    }
}
