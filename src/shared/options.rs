//! Zentrale Konfiguration für den YMap-Exporter.
//!
//! `ConverterOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::extents::ExtentsPadding;
use crate::core::STATIC_ENTITY_FLAGS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── CarGenerators ───────────────────────────────────────────────────

/// Länge des Referenzvektors (0, s, 0) und `perpendicularLength` der CarGenerators.
pub const CAR_GEN_SCALE: f32 = 1.5;

// ── Rotation ────────────────────────────────────────────────────────

/// Map-Editor-Rotationen werden standardmäßig konjugiert/vorzeichen-normalisiert.
pub const MAP_EDITOR_CONJUGATE_ROTATION: bool = true;
/// Spooner-Rotationen werden standardmäßig unverändert übernommen.
pub const SPOONER_CONJUGATE_ROTATION: bool = false;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Konverter-Optionen.
/// Wird als `ymap_exporter.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConverterOptions {
    // ── CarGenerators ───────────────────────────────────────────
    /// Skalierung des Richtungsvektors und Wert für `perpendicularLength`
    #[serde(default = "default_car_gen_scale")]
    pub car_gen_scale: f32,

    // ── Entities ────────────────────────────────────────────────
    /// Flag-Wert für statische (nicht-dynamische) Entities
    #[serde(default = "default_static_entity_flags")]
    pub static_entity_flags: u32,
    /// Rotation von Map-Editor-Objekten konjugieren
    #[serde(default = "default_map_editor_conjugate_rotation")]
    pub map_editor_conjugate_rotation: bool,
    /// Rotation von Spooner-Platzierungen konjugieren
    #[serde(default)]
    pub spooner_conjugate_rotation: bool,

    // ── Modellnamen ─────────────────────────────────────────────
    /// Optionale Textdatei mit Modellnamen (ein Name pro Zeile)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_names_path: Option<PathBuf>,

    // ── Extents ─────────────────────────────────────────────────
    /// Padding um den Schwerpunkt aller Platzierungen
    #[serde(default)]
    pub extents_padding: ExtentsPadding,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            car_gen_scale: CAR_GEN_SCALE,
            static_entity_flags: STATIC_ENTITY_FLAGS,
            map_editor_conjugate_rotation: MAP_EDITOR_CONJUGATE_ROTATION,
            spooner_conjugate_rotation: SPOONER_CONJUGATE_ROTATION,
            model_names_path: None,
            extents_padding: ExtentsPadding::default(),
        }
    }
}

fn default_car_gen_scale() -> f32 {
    CAR_GEN_SCALE
}

/// Serde-Default für `static_entity_flags`.
fn default_static_entity_flags() -> u32 {
    STATIC_ENTITY_FLAGS
}

/// Serde-Default für `map_editor_conjugate_rotation`.
fn default_map_editor_conjugate_rotation() -> bool {
    MAP_EDITOR_CONJUGATE_ROTATION
}

impl ConverterOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("ymap_exporter"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("ymap_exporter.toml")
    }
}
