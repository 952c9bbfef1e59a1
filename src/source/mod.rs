//! Quellmodelle der beiden Eingabe-Dialekte (Map-Editor, Spooner).

pub mod map_editor;
pub mod spooner;

pub use map_editor::{MapEditorMap, MapObject, MapObjectType};
pub use spooner::{Placement, PositionRotation, SpoonerPlacements};

/// Bekannter Eingabe-Dialekt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceDialect {
    MapEditor,
    Spooner,
}

impl std::fmt::Display for SourceDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MapEditor => write!(f, "Map Editor"),
            Self::Spooner => write!(f, "Spooner"),
        }
    }
}

/// Geparstes Quelldokument eines der beiden Dialekte.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceDocument {
    MapEditor(MapEditorMap),
    Spooner(SpoonerPlacements),
}

impl SourceDocument {
    /// Dialekt des Dokuments
    pub fn dialect(&self) -> SourceDialect {
        match self {
            Self::MapEditor(_) => SourceDialect::MapEditor,
            Self::Spooner(_) => SourceDialect::Spooner,
        }
    }

    /// Anzahl der Platzierungen (vor Klassifizierung)
    pub fn placement_count(&self) -> usize {
        match self {
            Self::MapEditor(map) => map.objects.len(),
            Self::Spooner(spooner) => spooner.placements.len(),
        }
    }
}
