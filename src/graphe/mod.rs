//! Graphe : viewport + échantillonnage d’une fonction de x
//!
//! - config.rs      : ViewportBounds / GraphConfig (+ DEFAULT_VIEWPORT)
//! - coords.rs      : transformations affines pixel <-> math
//! - viewport.rs    : zoom / pan / clamp
//! - echantillon.rs : une évaluation indépendante par colonne (ou par ligne de table)
//! - rendu.rs       : données prêtes à peindre (graduations, axes, polylignes)
//!
//! Rien ici ne dépend d’egui : la vue (app/graphe_vue.rs) consomme ces données.

pub mod config;
pub mod coords;
pub mod echantillon;
pub mod rendu;
pub mod viewport;

pub use config::{GraphConfig, ViewportBounds, DEFAULT_VIEWPORT};
pub use echantillon::{evaluate_at_point, sample_for_plot, sample_for_table};
