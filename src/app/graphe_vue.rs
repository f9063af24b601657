// src/app/graphe_vue.rs
//
// Vue du mode Graph (egui Painter)
// --------------------------------
// - grille + axes + étiquettes (format canonique du noyau)
// - courbe : polylignes de graphe::rendu (stylo levé sur les trous)
// - trace : point survolé + réticule pointillé vers les axes
// - glisser = pan ; molette / pincement = zoom autour du pointeur ; Reset
// - table de valeurs (21 lignes) optionnelle

use eframe::egui;

use crate::graphe::coords::{math_to_pixel_x, math_to_pixel_y, pixel_to_math_x, pixel_to_math_y};
use crate::graphe::echantillon::LIGNES_TABLE_DEFAUT;
use crate::graphe::rendu::{
    ancre_etiquettes, axe_x_pixel, axe_y_pixel, graduations, ligne_table, pas_graduation,
    segments_courbe,
};
use crate::graphe::viewport::{pan, zoom, FACTEUR_ZOOM};
use crate::graphe::{evaluate_at_point, sample_for_plot, sample_for_table, GraphConfig};
use crate::noyau::format_value;

use super::etat::AppCalc;

const HAUTEUR_GRAPHE: f32 = 320.0;

impl AppCalc {
    pub(super) fn ui_mode_graphe(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("f(x) =");
        });
        self.ui_editeur(ui);
        self.ui_autocompletion(ui);

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Reset").on_hover_text("Revenir à [-10, 10] × [-10, 10]").clicked() {
                self.reset_viewport();
            }
            ui.checkbox(&mut self.table_visible, "Table");
        });

        ui.add_space(4.0);
        self.ui_graphe(ui);

        ui.add_space(6.0);
        egui::ScrollArea::vertical()
            .id_salt("graphe_bas")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if self.table_visible {
                    self.ui_table(ui);
                    ui.add_space(6.0);
                }
                self.ui_scientifique_graphe(ui);
            });
    }

    fn ui_scientifique_graphe(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Fonctions")
            .default_open(true)
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for t in ["x", "sin", "cos", "tan", "sqrt", "ln", "abs", "^", "(", ")"] {
                        if ui.button(t).clicked() {
                            self.bouton(t);
                        }
                    }
                    for (t, libelle) in [("Backspace", "⌫"), ("C", "C")] {
                        if ui.button(libelle).clicked() {
                            self.bouton(t);
                        }
                    }
                });
            });
    }

    fn ui_graphe(&mut self, ui: &mut egui::Ui) {
        let taille = egui::vec2(ui.available_width(), HAUTEUR_GRAPHE);
        let (resp, painter) = ui.allocate_painter(taille, egui::Sense::click_and_drag());
        let rect = resp.rect;

        /* ---- interactions ---- */

        if resp.dragged() {
            let d = resp.drag_delta();
            self.viewport = pan(&self.config_graphe(rect), f64::from(d.x), f64::from(d.y));
        }

        if let Some(p) = resp.hover_pos() {
            let (defilement, pincement) = ui.input(|i| (i.smooth_scroll_delta.y, i.zoom_delta()));
            let facteur = if pincement != 1.0 {
                1.0 / f64::from(pincement)
            } else if defilement > 0.0 {
                FACTEUR_ZOOM
            } else if defilement < 0.0 {
                1.0 / FACTEUR_ZOOM
            } else {
                1.0
            };
            if facteur != 1.0 {
                let c = self.config_graphe(rect);
                let cx = pixel_to_math_x(f64::from(p.x - rect.left()), &c);
                let cy = pixel_to_math_y(f64::from(p.y - rect.top()), &c);
                self.viewport = zoom(&c, facteur, cx, cy);
            }
        }

        let c = self.config_graphe(rect);
        let visuals = ui.visuals();
        let vers_ecran = |px: f64, py: f64| {
            egui::pos2(rect.left() + px as f32, rect.top() + py as f32)
        };

        painter.rect_filled(rect, 4.0, visuals.extreme_bg_color);

        /* ---- grille + étiquettes ---- */

        let grille = egui::Stroke::new(1.0, visuals.faint_bg_color.gamma_multiply(2.0));
        let police = egui::FontId::monospace(10.0);
        let texte = visuals.weak_text_color();
        let b = c.bornes;

        let axe_h = axe_x_pixel(&c);
        let axe_v = axe_y_pixel(&c);
        let y_etiquettes = ancre_etiquettes(axe_h, math_to_pixel_y(0.0, &c), c.hauteur_px() - 12.0);
        let x_etiquettes = ancre_etiquettes(axe_v, math_to_pixel_x(0.0, &c), c.largeur_px() - 24.0);

        for gx in graduations(b.x_min, b.x_max, pas_graduation(b.largeur())) {
            let px = math_to_pixel_x(gx, &c);
            painter.line_segment([vers_ecran(px, 0.0), vers_ecran(px, c.hauteur_px())], grille);
            if gx != 0.0 {
                painter.text(
                    vers_ecran(px + 2.0, y_etiquettes + 2.0),
                    egui::Align2::LEFT_TOP,
                    format_value(gx),
                    police.clone(),
                    texte,
                );
            }
        }
        for gy in graduations(b.y_min, b.y_max, pas_graduation(b.hauteur())) {
            let py = math_to_pixel_y(gy, &c);
            painter.line_segment([vers_ecran(0.0, py), vers_ecran(c.largeur_px(), py)], grille);
            if gy != 0.0 {
                painter.text(
                    vers_ecran(x_etiquettes + 2.0, py - 2.0),
                    egui::Align2::LEFT_BOTTOM,
                    format_value(gy),
                    police.clone(),
                    texte,
                );
            }
        }

        /* ---- axes ---- */

        let axe = egui::Stroke::new(1.5, visuals.text_color());
        if let Some(py) = axe_h {
            painter.line_segment([vers_ecran(0.0, py), vers_ecran(c.largeur_px(), py)], axe);
        }
        if let Some(px) = axe_v {
            painter.line_segment([vers_ecran(px, 0.0), vers_ecran(px, c.hauteur_px())], axe);
        }

        /* ---- courbe ---- */

        let expr = self.edition.texte.trim();
        if expr.is_empty() {
            return;
        }

        let courbe = egui::Stroke::new(2.0, visuals.selection.stroke.color);
        for segment in segments_courbe(&sample_for_plot(expr, &c), &c) {
            let points: Vec<egui::Pos2> = segment.iter().map(|p| vers_ecran(p[0], p[1])).collect();
            painter.add(egui::Shape::line(points, courbe));
        }

        /* ---- trace ---- */

        let Some(p) = resp.hover_pos() else {
            return;
        };
        let x = pixel_to_math_x(f64::from(p.x - rect.left()), &c);
        let Some(y) = evaluate_at_point(expr, x, c.angle) else {
            return;
        };
        let (px, py) = (math_to_pixel_x(x, &c), math_to_pixel_y(y, &c));
        if !(0.0..=c.hauteur_px()).contains(&py) {
            return;
        }

        let pointille = egui::Stroke::new(1.0, texte);
        let point = vers_ecran(px, py);
        let y0 = ancre_etiquettes(axe_h, math_to_pixel_y(0.0, &c), c.hauteur_px());
        let x0 = ancre_etiquettes(axe_v, math_to_pixel_x(0.0, &c), c.largeur_px());
        painter.extend(egui::Shape::dashed_line(
            &[point, vers_ecran(px, y0)],
            pointille,
            4.0,
            3.0,
        ));
        painter.extend(egui::Shape::dashed_line(
            &[point, vers_ecran(x0, py)],
            pointille,
            4.0,
            3.0,
        ));
        painter.circle_filled(point, 4.0, courbe.color);
        painter.text(
            point + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            format!("({}, {})", format_value(x), format_value(y)),
            egui::FontId::monospace(12.0),
            visuals.text_color(),
        );
    }

    fn config_graphe(&self, rect: egui::Rect) -> GraphConfig {
        GraphConfig::new(
            rect.width() as u32,
            rect.height() as u32,
            self.viewport,
            self.angle,
        )
    }

    fn ui_table(&mut self, ui: &mut egui::Ui) {
        let expr = self.edition.texte.trim();
        if expr.is_empty() {
            ui.weak("Entrez une fonction de x");
            return;
        }

        // La table suit le viewport (pas de dépendance à la taille du canevas).
        let c = GraphConfig::new(1, 1, self.viewport, self.angle);
        egui::Grid::new("table_valeurs")
            .striped(true)
            .num_columns(2)
            .spacing([24.0, 2.0])
            .show(ui, |ui| {
                ui.strong("x");
                ui.strong("f(x)");
                ui.end_row();
                for p in sample_for_table(expr, &c, LIGNES_TABLE_DEFAUT) {
                    let (x, y) = ligne_table(&p);
                    ui.monospace(x);
                    if p.y.is_some() {
                        ui.monospace(y);
                    } else {
                        ui.colored_label(ui.visuals().weak_text_color(), y);
                    }
                    ui.end_row();
                }
            });
    }
}
