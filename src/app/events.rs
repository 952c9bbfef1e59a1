//! Intents (Benutzerabsicht) und Commands (mutierende Schritte).

use std::path::PathBuf;

/// Intents beschreiben, was der Benutzer auslösen möchte.
/// Sie werden vom Controller in eine Folge von Commands übersetzt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Leeres Dokument anlegen
    NewDocumentRequested,
    /// Datei öffnen (YMap direkt, `.xml` mit Dialekt-Erkennung und Konvertierung)
    OpenRequested { path: PathBuf },
    /// Extents des aktuellen Dokuments neu berechnen
    RecalculateExtentsRequested,
    /// Aktuelles Dokument als YMap-XML speichern
    SaveRequested { path: PathBuf },
    /// Öffnen + Speichern in einem Schritt; ohne `output` neben der Eingabe
    ConvertRequested {
        input: PathBuf,
        output: Option<PathBuf>,
    },
    /// Aktuelle Optionen als TOML-Datei schreiben
    SaveOptionsRequested { path: PathBuf },
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Aktuelles Dokument durch ein leeres ersetzen
    NewDocument,
    /// Datei laden und aktuelles Dokument ersetzen
    OpenFile { path: PathBuf },
    /// Extents neu berechnen (No-op ohne Platzierungen)
    RecalculateExtents,
    /// Aktuelles Dokument schreiben
    SaveFile { path: PathBuf },
    /// Optionen als TOML schreiben
    SaveOptions { path: PathBuf },
}
