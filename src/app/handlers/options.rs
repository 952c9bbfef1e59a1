//! Handler für die Optionen-Datei.

use crate::app::use_cases;
use crate::app::AppState;
use std::path::Path;

/// Schreibt die aktiven Optionen nach `path`.
pub fn save(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::options::save_options(state, path)
}
