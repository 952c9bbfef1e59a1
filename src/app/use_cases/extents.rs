//! Use-Case: Extents des aktuellen Dokuments neu berechnen.

use crate::app::AppState;
use crate::core::extents;

/// Berechnet Streaming- und Entity-Extents aus allen Platzierungen neu.
///
/// Ohne Platzierungen bleibt das Dokument unverändert.
pub fn recalculate_extents(state: &mut AppState) {
    if extents::recalculate(&mut state.ymap, &state.options.extents_padding) {
        log::info!(
            "Extents neu berechnet: {:?} .. {:?}",
            state.ymap.streaming_extents_min,
            state.ymap.streaming_extents_max
        );
    } else {
        log::info!("Keine Platzierungen vorhanden, Extents unverändert");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Entity, Quaternion, Vector3};

    #[test]
    fn test_recalculate_extents_on_state() {
        let mut state = AppState::new();
        state.ymap.entities.push(Entity::new(
            "prop_bench_01a",
            Vector3::new(100.0, 200.0, 30.0),
            Quaternion::IDENTITY,
            None,
        ));

        recalculate_extents(&mut state);

        assert_eq!(
            state.ymap.streaming_extents_min,
            Vector3::new(-9900.0, -9800.0, -970.0)
        );
        assert_eq!(
            state.ymap.entities_extents_max,
            Vector3::new(10100.0, 10200.0, 5030.0)
        );
    }

    #[test]
    fn test_recalculate_extents_empty_document_unchanged() {
        let mut state = AppState::new();
        let before = state.ymap.clone();

        recalculate_extents(&mut state);

        assert_eq!(state.ymap, before);
    }
}
