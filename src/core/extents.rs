//! Extents-Berechnung: gepaddete Bounding-Box um den Schwerpunkt aller Platzierungen.

use super::math::{add, scale_divide, Vector3};
use super::ymap::YMap;
use serde::{Deserialize, Serialize};

/// Horizontales Padding (X und Y) um den Schwerpunkt.
pub const EXTENTS_PADDING_HORIZONTAL: f32 = 10_000.0;
/// Padding nach unten (Z).
pub const EXTENTS_PADDING_BELOW: f32 = 1_000.0;
/// Padding nach oben (Z). Asymmetrisch wegen des Streaming-Rasters der Engine.
pub const EXTENTS_PADDING_ABOVE: f32 = 5_000.0;

/// Padding für die Streaming- und Entity-Extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtentsPadding {
    pub horizontal: f32,
    pub below: f32,
    pub above: f32,
}

impl Default for ExtentsPadding {
    fn default() -> Self {
        Self {
            horizontal: EXTENTS_PADDING_HORIZONTAL,
            below: EXTENTS_PADDING_BELOW,
            above: EXTENTS_PADDING_ABOVE,
        }
    }
}

impl ExtentsPadding {
    fn min_offset(&self) -> Vector3 {
        Vector3::new(self.horizontal, self.horizontal, self.below)
    }

    fn max_offset(&self) -> Vector3 {
        Vector3::new(self.horizontal, self.horizontal, self.above)
    }
}

/// Arithmetisches Mittel aller Entity- und CarGenerator-Positionen.
///
/// `None` bei leerem Dokument.
pub fn centre(ymap: &YMap) -> Option<Vector3> {
    let (sum, count) = ymap
        .placement_positions()
        .fold((Vector3::ZERO, 0usize), |(sum, count), p| (add(sum, p), count + 1));

    if count == 0 {
        return None;
    }

    Some(scale_divide(sum, count as f32))
}

/// Setzt Streaming- und Entity-Extents auf dieselbe gepaddete Box.
///
/// Ohne Platzierungen bleibt das Dokument unverändert, Rückgabe `false`.
pub fn recalculate(ymap: &mut YMap, padding: &ExtentsPadding) -> bool {
    let Some(centre) = centre(ymap) else {
        log::debug!("Extents nicht berechnet: Dokument ohne Platzierungen");
        return false;
    };

    let min = centre - padding.min_offset();
    let max = centre + padding.max_offset();

    ymap.streaming_extents_min = min;
    ymap.streaming_extents_max = max;
    ymap.entities_extents_min = min;
    ymap.entities_extents_max = max;

    log::debug!(
        "Extents neu berechnet: Zentrum=({:.3}, {:.3}, {:.3})",
        centre.x,
        centre.y,
        centre.z
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CarGenerator, Entity, Quaternion};

    fn entity_at(x: f32, y: f32, z: f32) -> Entity {
        Entity::new("prop", Vector3::new(x, y, z), Quaternion::IDENTITY, None)
    }

    #[test]
    fn test_three_placements_centered_on_origin() {
        let mut ymap = YMap::new();
        ymap.entities.push(entity_at(0.0, 0.0, 0.0));
        ymap.entities.push(entity_at(10.0, 0.0, 0.0));
        ymap.entities.push(entity_at(-10.0, 0.0, 0.0));

        assert!(ymap.recalculate_extents());
        assert_eq!(
            ymap.streaming_extents_min,
            Vector3::new(-10_000.0, -10_000.0, -1_000.0)
        );
        assert_eq!(
            ymap.streaming_extents_max,
            Vector3::new(10_000.0, 10_000.0, 5_000.0)
        );
        assert_eq!(ymap.entities_extents_min, ymap.streaming_extents_min);
        assert_eq!(ymap.entities_extents_max, ymap.streaming_extents_max);
    }

    #[test]
    fn test_centre_includes_car_generators() {
        let mut ymap = YMap::new();
        ymap.entities.push(entity_at(0.0, 0.0, 0.0));
        ymap.car_generators.push(CarGenerator {
            position: Vector3::new(100.0, 50.0, 20.0),
            orient_x: 0.0,
            orient_y: 1.5,
            perpendicular_length: 1.5,
            car_model: "adder".into(),
        });

        assert_eq!(centre(&ymap), Some(Vector3::new(50.0, 25.0, 10.0)));
    }

    #[test]
    fn test_empty_document_keeps_previous_extents() {
        let mut ymap = YMap::new();
        ymap.streaming_extents_min = Vector3::new(1.0, 2.0, 3.0);

        assert!(!ymap.recalculate_extents());
        assert_eq!(ymap.streaming_extents_min, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(ymap.streaming_extents_max, Vector3::ZERO);
    }

    #[test]
    fn test_recalculate_is_idempotent() {
        let mut ymap = YMap::new();
        ymap.entities.push(entity_at(12.5, -3.0, 40.0));
        ymap.entities.push(entity_at(7.0, 9.0, 1.0));

        ymap.recalculate_extents();
        let first = ymap.clone();
        ymap.recalculate_extents();

        assert_eq!(first, ymap);
    }

    #[test]
    fn test_custom_padding() {
        let mut ymap = YMap::new();
        ymap.entities.push(entity_at(0.0, 0.0, 0.0));
        let padding = ExtentsPadding {
            horizontal: 10.0,
            below: 1.0,
            above: 2.0,
        };

        recalculate(&mut ymap, &padding);
        assert_eq!(ymap.entities_extents_min, Vector3::new(-10.0, -10.0, -1.0));
        assert_eq!(ymap.entities_extents_max, Vector3::new(10.0, 10.0, 2.0));
    }
}
