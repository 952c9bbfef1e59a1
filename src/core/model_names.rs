//! Auflösung von Modell-Hashes zu Modellnamen.
//!
//! Die Spiel-Engine referenziert Modelle über den Jenkins-one-at-a-time-Hash
//! ("joaat") des kleingeschriebenen Namens. Die Tabelle wird aus einer
//! Textdatei mit einem Modellnamen pro Zeile aufgebaut.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Schnittstelle für die Hash→Name-Auflösung. Ein Fehltreffer ist kein Fehler.
pub trait ModelNameLookup {
    /// Liefert den Modellnamen zu `hash`, falls bekannt.
    fn lookup(&self, hash: u32) -> Option<&str>;
}

/// Jenkins-one-at-a-time-Hash über den kleingeschriebenen Namen.
pub fn joaat(name: &str) -> u32 {
    let mut hash: u32 = 0;
    for byte in name.bytes().map(|b| b.to_ascii_lowercase()) {
        hash = hash.wrapping_add(byte as u32);
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }
    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash.wrapping_add(hash << 15)
}

/// Ersatzname für einen unbekannten Hash: `0x` + Hex-Darstellung (klein).
pub fn hash_fallback_name(hash: u32) -> String {
    format!("0x{:x}", hash)
}

/// Hash→Name-Tabelle.
#[derive(Debug, Clone, Default)]
pub struct ModelNameTable {
    names: HashMap<u32, String>,
}

impl ModelNameTable {
    /// Erstellt eine leere Tabelle (jeder Lookup ist ein Fehltreffer).
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut die Tabelle aus einer Liste von Modellnamen.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for name in names {
            table.insert(name);
        }
        table
    }

    /// Parst eine Namensliste: ein Name pro Zeile, `#` leitet Kommentare ein.
    pub fn parse(content: &str) -> Self {
        Self::from_names(
            content
                .lines()
                .map(|line| line.split('#').next().unwrap_or_default().trim())
                .filter(|line| !line.is_empty()),
        )
    }

    /// Lädt eine Namensliste aus einer Datei.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Modellnamen-Liste nicht lesbar: {}", path.display()))?;
        let table = Self::parse(&content);
        log::info!(
            "{} Modellnamen geladen aus: {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Fügt einen Namen hinzu; der Hash wird berechnet.
    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.names.insert(joaat(&name), name);
    }

    /// Anzahl der bekannten Namen
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Gibt `true` zurück, wenn die Tabelle leer ist.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ModelNameLookup for ModelNameTable {
    fn lookup(&self, hash: u32) -> Option<&str> {
        self.names.get(&hash).map(String::as_str)
    }
}

impl ModelNameLookup for HashMap<u32, String> {
    fn lookup(&self, hash: u32) -> Option<&str> {
        self.get(&hash).map(String::as_str)
    }
}

/// Löst `hash` auf; bei Fehltreffer oder leerem Namen greift der Hex-Fallback.
pub fn resolve_name(lookup: &dyn ModelNameLookup, hash: u32) -> String {
    match lookup.lookup(hash) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => hash_fallback_name(hash),
    }
}
