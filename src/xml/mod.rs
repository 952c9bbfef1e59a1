//! XML Import/Export für YMap-Dokumente und die Quell-Dialekte.
//!
//! Parser sind schema-getrieben: falsches Wurzelelement oder unlesbare
//! Pflichtwerte liefern einen `ParseError`, nie ein halbes Dokument.

pub mod parser;
pub mod writer;

use crate::core::YMap;
use crate::source::{SourceDialect, SourceDocument};
use thiserror::Error;

pub use parser::{parse_map_editor, parse_spooner, parse_ymap};
pub use writer::write_ymap;

/// Erwartetes Schema beim Deserialisieren.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    YMap,
    MapEditor,
    Spooner,
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YMap => write!(f, "YMap"),
            Self::MapEditor => write!(f, "Map-Editor"),
            Self::Spooner => write!(f, "Spooner"),
        }
    }
}

impl From<SourceDialect> for Schema {
    fn from(dialect: SourceDialect) -> Self {
        match dialect {
            SourceDialect::MapEditor => Self::MapEditor,
            SourceDialect::Spooner => Self::Spooner,
        }
    }
}

/// Ergebnis von `deserialize`.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    YMap(YMap),
    Source(SourceDocument),
}

/// Eingabe passt nicht zum erwarteten Schema (oder ist kein gültiges XML).
///
/// Die Ursache hängt als `source` an und erscheint erst in der Fehlerkette.
#[derive(Debug, Error)]
#[error("Datei passt nicht zum {schema}-Schema")]
pub struct ParseError {
    pub schema: Schema,
    pub source: anyhow::Error,
}

/// Keiner der Quell-Dialekte konnte die Datei lesen.
#[derive(Debug, Error)]
#[error("Datei passt zu keinem bekannten Dialekt ({})", describe_attempts(.attempts))]
pub struct UnknownDialectError {
    /// Fehler je Versuch, in Prüfreihenfolge
    pub attempts: Vec<ParseError>,
}

fn describe_attempts(attempts: &[ParseError]) -> String {
    attempts
        .iter()
        .map(|a| format!("{}: {:#}", a, a.source))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Deserialisiert `xml_content` gegen genau ein Schema.
pub fn deserialize(xml_content: &str, schema: Schema) -> Result<Document, ParseError> {
    let result = match schema {
        Schema::YMap => parse_ymap(xml_content).map(Document::YMap),
        Schema::MapEditor => parse_map_editor(xml_content)
            .map(|map| Document::Source(SourceDocument::MapEditor(map))),
        Schema::Spooner => parse_spooner(xml_content)
            .map(|spooner| Document::Source(SourceDocument::Spooner(spooner))),
    };
    result.map_err(|source| ParseError { schema, source })
}

type SourceValidator = fn(&str) -> anyhow::Result<SourceDocument>;

fn validate_map_editor(xml_content: &str) -> anyhow::Result<SourceDocument> {
    parse_map_editor(xml_content).map(SourceDocument::MapEditor)
}

fn validate_spooner(xml_content: &str) -> anyhow::Result<SourceDocument> {
    parse_spooner(xml_content).map(SourceDocument::Spooner)
}

/// Prüfreihenfolge für mehrdeutige `.xml`-Dateien: Map-Editor vor Spooner.
const SOURCE_VALIDATORS: [(SourceDialect, SourceValidator); 2] = [
    (SourceDialect::MapEditor, validate_map_editor),
    (SourceDialect::Spooner, validate_spooner),
];

/// Erkennt den Quell-Dialekt: der erste Validator, der erfolgreich parst, gewinnt.
///
/// Eine Datei, die strukturell als Map-Editor-Dokument durchgeht, wird nie
/// als Spooner-Dokument gelesen.
pub fn detect_source_document(xml_content: &str) -> Result<SourceDocument, UnknownDialectError> {
    let mut attempts = Vec::new();

    for (dialect, validate) in SOURCE_VALIDATORS {
        match validate(xml_content) {
            Ok(document) => {
                log::info!("Dialekt erkannt: {}", dialect);
                return Ok(document);
            }
            Err(source) => {
                log::debug!("{}-Schema passt nicht: {:#}", dialect, source);
                attempts.push(ParseError {
                    schema: dialect.into(),
                    source,
                });
            }
        }
    }

    Err(UnknownDialectError { attempts })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPOONER_XML: &str = "<SpoonerPlacements><Placement><Type>3</Type>\
        <HashName>prop_bench_01a</HashName></Placement></SpoonerPlacements>";

    #[test]
    fn test_deserialize_reports_expected_schema() {
        let err = deserialize(SPOONER_XML, Schema::YMap).expect_err("Falsches Schema");

        assert_eq!(err.schema, Schema::YMap);
        assert!(err.to_string().contains("YMap-Schema"));
    }

    #[test]
    fn test_deserialize_spooner_document() {
        let document = deserialize(SPOONER_XML, Schema::Spooner).expect("Spooner-Dokument");

        match document {
            Document::Source(source) => assert_eq!(source.dialect(), SourceDialect::Spooner),
            Document::YMap(_) => panic!("Erwartet Quelldokument"),
        }
    }

    #[test]
    fn test_detection_falls_back_to_spooner() {
        let source = detect_source_document(SPOONER_XML).expect("Dialekt erkannt");
        assert_eq!(source.dialect(), SourceDialect::Spooner);
        assert_eq!(source.placement_count(), 1);
    }

    #[test]
    fn test_parse_error_chain_names_each_cause_once() {
        let err = deserialize("<CMapData><entities>", Schema::YMap).expect_err("Unvollständig");

        let msg = format!("{:#}", anyhow::Error::from(err));
        assert!(msg.starts_with("Datei passt nicht zum YMap-Schema: Kein gueltiges YMap-Dokument"));
        assert_eq!(msg.matches("nicht geschlossen").count(), 1);
    }

    #[test]
    fn test_map_editor_with_hashless_object_is_still_detected() {
        let xml = "<Map><Objects>\
            <MapObject><Type>Prop</Type><Hash>6699</Hash></MapObject>\
            <MapObject><Type>Prop</Type></MapObject>\
            </Objects></Map>";

        let source = detect_source_document(xml).expect("Dialekt erkannt");
        assert_eq!(source.dialect(), SourceDialect::MapEditor);
        assert_eq!(source.placement_count(), 2);
    }

    #[test]
    fn test_detection_prefers_map_editor() {
        let xml = "<Map><Objects /></Map>";

        let source = detect_source_document(xml).expect("Dialekt erkannt");
        assert_eq!(source.dialect(), SourceDialect::MapEditor);
    }

    #[test]
    fn test_unknown_dialect_lists_every_attempt() {
        let err = detect_source_document("<CMapData />").expect_err("Kein Quell-Dialekt");

        assert_eq!(err.attempts.len(), 2);
        assert_eq!(err.attempts[0].schema, Schema::MapEditor);
        assert_eq!(err.attempts[1].schema, Schema::Spooner);
        assert!(err.to_string().contains("CMapData"));
    }
}
