//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::state::{DocumentOrigin, APP_TITLE};
use crate::app::AppState;
use crate::convert;
use crate::core::{ModelNameLookup, YMap};
use crate::shared::ConverterOptions;
use crate::xml::{self, Document, ParseError, Schema, UnknownDialectError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Endung für YMap-Dateien
pub const YMAP_EXTENSION: &str = ".ymap.xml";
/// Endung für Quell-Dialekt-Dateien
pub const SOURCE_EXTENSION: &str = ".xml";

/// Fehler beim Laden einer Datei. Der bisherige Zustand bleibt unverändert.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Kein gueltiger Dateityp: {}", .0.display())]
    UnsupportedExtension(PathBuf),
    #[error("Datei nicht lesbar: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    UnknownDialect(#[from] UnknownDialectError),
}

/// Dateiart anhand der Endung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `*.ymap.xml`
    YMap,
    /// `*.xml` (Map-Editor oder Spooner)
    SourceXml,
}

impl FileKind {
    /// Bestimmt die Dateiart (Groß-/Kleinschreibung egal).
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        if file_name.ends_with(YMAP_EXTENSION) {
            Ok(Self::YMap)
        } else if file_name.ends_with(SOURCE_EXTENSION) {
            Ok(Self::SourceXml)
        } else {
            Err(LoadError::UnsupportedExtension(path.to_path_buf()))
        }
    }
}

/// Ergebnis eines erfolgreichen Ladevorgangs.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub ymap: YMap,
    pub origin: DocumentOrigin,
}

/// Liest und (falls nötig) konvertiert eine Datei, ohne den State zu berühren.
pub fn load_document(
    path: &Path,
    names: &dyn ModelNameLookup,
    options: &ConverterOptions,
) -> Result<LoadedDocument, LoadError> {
    let kind = FileKind::from_path(path)?;

    let xml_content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = match kind {
        FileKind::YMap => xml::deserialize(&xml_content, Schema::YMap)?,
        FileKind::SourceXml => Document::Source(xml::detect_source_document(&xml_content)?),
    };

    match document {
        Document::YMap(ymap) => Ok(LoadedDocument {
            ymap,
            origin: DocumentOrigin::YMap,
        }),
        Document::Source(source) => {
            let dialect = source.dialect();
            let (ymap, report) = convert::convert(&source, names, options);
            Ok(LoadedDocument {
                ymap,
                origin: DocumentOrigin::Converted { dialect, report },
            })
        }
    }
}

/// Ersetzt das aktuelle Dokument durch ein leeres.
pub fn new_document(state: &mut AppState) {
    state.ymap = YMap::new();
    state.origin = DocumentOrigin::New;
    state.current_file_path = None;
    state.title = APP_TITLE.to_string();
    log::info!("Neues Dokument angelegt");
}

/// Lädt die Datei in den AppState.
///
/// Bei Fehlern bleibt das bisherige Dokument unverändert.
pub fn open_file(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let loaded = load_document(path, &state.model_names, &state.options)?;

    log::info!(
        "Geladen: {} ({} Entities, {} CarGenerators)",
        path.display(),
        loaded.ymap.entity_count(),
        loaded.ymap.car_generator_count()
    );

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    state.ymap = loaded.ymap;
    state.origin = loaded.origin;
    state.current_file_path = Some(path.to_path_buf());
    state.title = format!("{} - {}", APP_TITLE, file_name);
    Ok(())
}

/// Schreibt das aktuelle Dokument als YMap-XML.
pub fn save_file(state: &AppState, path: &Path) -> anyhow::Result<()> {
    let xml_content = xml::write_ymap(&state.ymap)?;
    std::fs::write(path, xml_content)
        .map_err(|e| anyhow::anyhow!("Datei {} nicht schreibbar: {}", path.display(), e))?;
    log::info!("YMap gespeichert: {}", path.display());
    Ok(())
}

/// Standard-Ausgabepfad: `karte.xml` → `karte.ymap.xml`.
///
/// Bereits als YMap benannte Dateien behalten ihren Namen.
pub fn default_output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let lower = file_name.to_ascii_lowercase();

    if lower.ends_with(YMAP_EXTENSION) {
        return input.to_path_buf();
    }

    let stem = if lower.ends_with(SOURCE_EXTENSION) {
        &file_name[..file_name.len() - SOURCE_EXTENSION.len()]
    } else {
        file_name.as_str()
    };
    input.with_file_name(format!("{}{}", stem, YMAP_EXTENSION))
}
