//! Kanonisches YMap-Modell: Entities, CarGenerators und Extents.

use super::extents::{self, ExtentsPadding};
use super::math::{Quaternion, Vector3};

/// Flag-Wert, mit dem eine nicht-dynamische (statische) Entity markiert wird.
pub const STATIC_ENTITY_FLAGS: u32 = 32;

/// Platziertes Objekt (`CEntityDef`).
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Archetyp-Name (nie leer)
    pub archetype_name: String,
    /// Optionale Flags; `Some(32)` = statisch, `None` = Element wird nicht geschrieben
    pub flags: Option<u32>,
    pub position: Vector3,
    pub rotation: Quaternion,
}

impl Entity {
    /// Erstellt eine neue Entity.
    pub fn new(
        archetype_name: impl Into<String>,
        position: Vector3,
        rotation: Quaternion,
        flags: Option<u32>,
    ) -> Self {
        Self {
            archetype_name: archetype_name.into(),
            flags,
            position,
            rotation,
        }
    }

    /// Gibt `true` zurück, wenn die Entity als statisch markiert ist.
    pub fn is_static(&self) -> bool {
        self.flags == Some(STATIC_ENTITY_FLAGS)
    }
}

/// Fahrzeug-Spawnpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct CarGenerator {
    pub position: Vector3,
    /// X-Komponente der Blickrichtung
    pub orient_x: f32,
    /// Y-Komponente der Blickrichtung
    pub orient_y: f32,
    /// Abstandsparameter senkrecht zur Blickrichtung
    pub perpendicular_length: f32,
    /// Fahrzeugmodell (nie leer)
    pub car_model: String,
}

/// Container für ein komplettes YMap-Dokument.
///
/// Reihenfolge der Entities und CarGenerators entspricht der Quelldatei
/// und bestimmt die Ausgabereihenfolge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YMap {
    /// Optionaler Map-Name (`<name>`), wird beim Roundtrip durchgereicht
    pub name: Option<String>,
    pub entities: Vec<Entity>,
    pub car_generators: Vec<CarGenerator>,
    pub streaming_extents_min: Vector3,
    pub streaming_extents_max: Vector3,
    pub entities_extents_min: Vector3,
    pub entities_extents_max: Vector3,
}

impl YMap {
    /// Erstellt ein leeres Dokument (Extents = 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Anzahl der CarGenerators
    pub fn car_generator_count(&self) -> usize {
        self.car_generators.len()
    }

    /// Gibt `true` zurück, wenn weder Entities noch CarGenerators vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.car_generators.is_empty()
    }

    /// Alle Platzierungspositionen (erst Entities, dann CarGenerators).
    pub fn placement_positions(&self) -> impl Iterator<Item = Vector3> + '_ {
        self.entities
            .iter()
            .map(|e| e.position)
            .chain(self.car_generators.iter().map(|c| c.position))
    }

    /// Berechnet die Extents mit Standard-Padding neu.
    ///
    /// Gibt `false` zurück (und lässt die Extents unverändert), wenn das
    /// Dokument keine Platzierungen enthält.
    pub fn recalculate_extents(&mut self) -> bool {
        extents::recalculate(self, &ExtentsPadding::default())
    }
}
