//! Typisiertes Modell des Spooner-Dialekts.

use crate::core::{Quaternion, Vector3};

/// Typ-Code für Fahrzeuge
pub const SPOONER_TYPE_VEHICLE: i32 = 2;
/// Typ-Code für Props
pub const SPOONER_TYPE_PROP: i32 = 3;

/// Kombiniertes Positions- und Rotationsfeld (`<PositionRotation>`).
///
/// Winkel in Grad: Pitch um X, Roll um Y, Yaw um Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionRotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

impl PositionRotation {
    /// Positionsanteil
    pub fn position(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Rotationsanteil als Quaternion
    pub fn quaternion(&self) -> Quaternion {
        Quaternion::from_euler_degrees(self.pitch, self.roll, self.yaw)
    }
}

/// Einzelne Platzierung (`<Placement>`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Placement {
    /// Modell-Hash (`<ModelHash>`, hex `0x…` oder dezimal)
    pub model_hash: Option<u32>,
    /// Getrimmter Originaltext von `<ModelHash>`, auch wenn er kein Hash ist
    pub model_hash_text: Option<String>,
    /// Vom Spooner bereits aufgelöster Modellname (`<HashName>`)
    pub hash_name: Option<String>,
    /// Typ-Code (2 = Fahrzeug, 3 = Prop)
    pub type_code: i32,
    pub dynamic: bool,
    pub position_rotation: PositionRotation,
}

/// Komplettes Spooner-Dokument (`<SpoonerPlacements>`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpoonerPlacements {
    pub placements: Vec<Placement>,
}
