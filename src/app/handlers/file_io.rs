//! Handler für Datei-Operationen (Neu, Öffnen, Speichern).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::Path;

/// Ersetzt das aktuelle Dokument durch ein leeres.
pub fn new_document(state: &mut AppState) {
    use_cases::file_io::new_document(state);
}

/// Lädt eine YMap oder konvertiert ein Quelldokument aus dem Pfad.
pub fn open(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::file_io::open_file(state, path)
}

/// Speichert das aktuelle Dokument unter dem Pfad.
pub fn save(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::file_io::save_file(state, path)
}
