/// Projection d'une grille de blocs dans l'espace 3D.

pub mod projector;

pub use projector::{Placements, project, project_view};
