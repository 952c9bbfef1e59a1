//! Typisiertes Modell des Map-Editor-Dialekts.

use crate::core::{Quaternion, Vector3};

/// Objekt-Typ eines Map-Editor-Objekts (`<Type>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapObjectType {
    Prop,
    Vehicle,
    Ped,
    Pickup,
    /// Unbekannter Typ-Text, bleibt für Logging erhalten
    Other(String),
}

impl MapObjectType {
    /// Wandelt den `<Type>`-Text in einen Objekt-Typ.
    pub fn from_text(text: &str) -> Self {
        match text.trim() {
            "Prop" => Self::Prop,
            "Vehicle" => Self::Vehicle,
            "Ped" => Self::Ped,
            "Pickup" => Self::Pickup,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Einzelnes Objekt (`<MapObject>`).
#[derive(Debug, Clone, PartialEq)]
pub struct MapObject {
    pub object_type: MapObjectType,
    pub position: Vector3,
    pub quaternion: Quaternion,
    /// Modell-Hash, vom Editor als vorzeichenbehafteter Integer geschrieben.
    /// `None`, wenn `<Hash>` fehlt.
    pub hash: Option<i32>,
    pub dynamic: bool,
    pub door: bool,
}

impl MapObject {
    /// Modell-Hash als 32-Bit-Muster.
    pub fn model_hash(&self) -> Option<u32> {
        self.hash.map(|hash| hash as u32)
    }

    /// Statisch, wenn weder dynamisch noch Tür.
    pub fn is_static(&self) -> bool {
        !(self.dynamic || self.door)
    }
}

/// Komplettes Map-Editor-Dokument (`<Map>`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapEditorMap {
    pub objects: Vec<MapObject>,
}
