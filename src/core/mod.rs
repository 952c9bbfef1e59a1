//! Core-Domänentypen: Geometrie, YMap-Modell, Extents, Modellnamen.

pub mod extents;
pub mod math;
pub mod model_names;
/// Kanonisches YMap-Datenmodell
///
/// - YMap: Container für alle Entities und CarGenerators
/// - Entity: platziertes Objekt mit Archetyp-Name
/// - CarGenerator: Fahrzeug-Spawnpunkt
pub mod ymap;

pub use extents::ExtentsPadding;
pub use math::{Quaternion, Vector3};
pub use model_names::{hash_fallback_name, joaat, resolve_name, ModelNameLookup, ModelNameTable};
pub use ymap::{CarGenerator, Entity, YMap, STATIC_ENTITY_FLAGS};
