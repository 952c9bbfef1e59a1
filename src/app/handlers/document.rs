//! Handler für Operationen am geladenen Dokument.

use crate::app::use_cases;
use crate::app::AppState;

/// Berechnet die Extents des aktuellen Dokuments neu.
pub fn recalculate_extents(state: &mut AppState) {
    use_cases::extents::recalculate_extents(state);
}
