//! Umrechnungsregeln für einzelne Platzierungen (Entity- und CarGenerator-Regel).

use crate::core::math::{conjugate, rotate};
use crate::core::{CarGenerator, Entity, Quaternion, Vector3};

/// Normalisiert die Rotation einer Entity.
///
/// Mit `conjugate_rotation`: bei `w < 0` wird nur `w` negiert, sonst wird
/// konjugiert. Ohne wird die Rotation unverändert übernommen.
pub fn entity_rotation(rotation: Quaternion, conjugate_rotation: bool) -> Quaternion {
    if !conjugate_rotation {
        return rotation;
    }

    if rotation.w < 0.0 {
        Quaternion {
            w: -rotation.w,
            ..rotation
        }
    } else {
        conjugate(rotation)
    }
}

/// Entity-Regel: Position unverändert, Rotation normalisiert,
/// `flags = Some(static_flags)` für statische Platzierungen.
pub fn build_entity(
    archetype_name: String,
    position: Vector3,
    rotation: Quaternion,
    is_static: bool,
    conjugate_rotation: bool,
    static_flags: u32,
) -> Entity {
    Entity::new(
        archetype_name,
        position,
        entity_rotation(rotation, conjugate_rotation),
        is_static.then_some(static_flags),
    )
}

/// CarGenerator-Regel: Referenzvektor (0, scale, 0) wird mit der Rotation
/// gedreht, x/y ergeben die Blickrichtung.
pub fn build_car_generator(
    car_model: String,
    position: Vector3,
    rotation: Quaternion,
    scale: f32,
) -> CarGenerator {
    let direction = rotate(rotation, Vector3::new(0.0, scale, 0.0));

    CarGenerator {
        position,
        orient_x: direction.x,
        orient_y: direction.y,
        perpendicular_length: scale,
        car_model,
    }
}
