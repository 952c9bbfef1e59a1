//! Application State: aktuelles Dokument, Optionen, Modellnamen.

use crate::app::CommandLog;
use crate::convert::ConversionReport;
use crate::core::{ModelNameTable, YMap};
use crate::shared::ConverterOptions;
use crate::source::SourceDialect;
use std::fmt;
use std::path::PathBuf;

/// Basistitel ohne geöffnete Datei.
pub const APP_TITLE: &str = "ME2YM";

/// Herkunft des aktuellen Dokuments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentOrigin {
    /// Neu angelegt
    New,
    /// Direkt aus einer YMap-Datei geladen
    YMap,
    /// Aus einem Quell-Dialekt konvertiert
    Converted {
        dialect: SourceDialect,
        report: ConversionReport,
    },
}

/// Hauptzustand der Anwendung.
///
/// Hält genau ein aktives Dokument; es wird bei Neu/Öffnen/Konvertieren
/// komplett ersetzt und nur durch die Extents-Berechnung in-place verändert.
#[derive(Debug)]
pub struct AppState {
    /// Aktuelles YMap-Dokument
    pub ymap: YMap,
    /// Herkunft des aktuellen Dokuments
    pub origin: DocumentOrigin,
    /// Pfad der zuletzt geöffneten Datei
    pub current_file_path: Option<PathBuf>,
    /// Fenstertitel bzw. Anzeigename (`ME2YM - datei.xml`)
    pub title: String,
    /// Laufzeit-Optionen
    pub options: ConverterOptions,
    /// Hash→Name-Tabelle für die Konvertierung
    pub model_names: ModelNameTable,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen.
    pub fn new() -> Self {
        Self {
            ymap: YMap::new(),
            origin: DocumentOrigin::New,
            current_file_path: None,
            title: APP_TITLE.to_string(),
            options: ConverterOptions::default(),
            model_names: ModelNameTable::new(),
            command_log: CommandLog::new(),
        }
    }

    /// Erstellt einen App-State mit Optionen und lädt ggf. die Modellnamen-Liste.
    ///
    /// Eine unlesbare Namensliste ist kein Abbruchgrund: es wird mit leerer
    /// Tabelle (Hex-Fallback für alle Hashes) weitergearbeitet.
    pub fn with_options(options: ConverterOptions) -> Self {
        let model_names = match options.model_names_path.as_deref() {
            Some(path) => ModelNameTable::load_from_file(path).unwrap_or_else(|e| {
                log::warn!("{:#}. Modellnamen werden als Hash ausgegeben.", e);
                ModelNameTable::new()
            }),
            None => ModelNameTable::new(),
        };

        Self {
            options,
            model_names,
            ..Self::new()
        }
    }

    /// Anzahl der Entities (für Anzeige)
    pub fn entity_count(&self) -> usize {
        self.ymap.entity_count()
    }

    /// Anzahl der CarGenerators (für Anzeige)
    pub fn car_generator_count(&self) -> usize {
        self.ymap.car_generator_count()
    }

    /// Kurzübersicht des aktuellen Dokuments.
    pub fn summary(&self) -> DocumentSummary<'_> {
        DocumentSummary { state: self }
    }
}

/// Textuelle Übersicht des aktuellen Dokuments (ersetzt das Property-Grid).
pub struct DocumentSummary<'a> {
    state: &'a AppState,
}

impl fmt::Display for DocumentSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ymap = &self.state.ymap;
        writeln!(f, "{}", self.state.title)?;
        match self.state.origin {
            DocumentOrigin::New => writeln!(f, "Herkunft: neu")?,
            DocumentOrigin::YMap => writeln!(f, "Herkunft: YMap")?,
            DocumentOrigin::Converted { dialect, report } => writeln!(
                f,
                "Herkunft: {} ({} nach Typ übersprungen, {} ohne Modellnamen)",
                dialect, report.skipped_by_type, report.unresolved
            )?,
        }
        writeln!(f, "Entities: {}", ymap.entity_count())?;
        writeln!(f, "CarGenerators: {}", ymap.car_generator_count())?;
        let min = ymap.streaming_extents_min;
        let max = ymap.streaming_extents_max;
        writeln!(
            f,
            "Streaming-Extents: ({}, {}, {}) .. ({}, {}, {})",
            min.x, min.y, min.z, max.x, max.y, max.z
        )?;
        for entity in &ymap.entities {
            let marker = if entity.is_static() { " [statisch]" } else { "" };
            writeln!(f, "  Entity {}{}", entity.archetype_name, marker)?;
        }
        for car_gen in &ymap.car_generators {
            writeln!(
                f,
                "  CarGenerator {} ({}, {})",
                car_gen.car_model, car_gen.orient_x, car_gen.orient_y
            )?;
        }
        Ok(())
    }
}
