//! Use-Case: Laufzeit-Optionen persistieren.

use crate::app::AppState;
use anyhow::Context;
use std::path::Path;

/// Schreibt die aktiven Optionen (inkl. CLI-Overrides) als TOML.
pub fn save_options(state: &AppState, path: &Path) -> anyhow::Result<()> {
    state
        .options
        .save_to_file(path)
        .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ConverterOptions;
    use std::path::PathBuf;

    #[test]
    fn test_saved_options_load_back() {
        let path = std::env::temp_dir().join(format!(
            "ymap_exporter_use_case_options_{}.toml",
            std::process::id()
        ));
        let mut state = AppState::new();
        state.options.car_gen_scale = 3.0;
        state.options.model_names_path = Some(PathBuf::from("names.txt"));

        save_options(&state, &path).expect("Speichern sollte gelingen");
        let loaded = ConverterOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, state.options);
    }
}
