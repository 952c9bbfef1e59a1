//! YMap Exporter Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod convert;
pub mod core;
pub mod shared;
pub mod source;
pub mod xml;

pub use app::{
    default_output_path, AppCommand, AppController, AppIntent, AppState, FileKind, LoadError,
};
pub use convert::{convert, ConversionReport};
pub use core::{
    CarGenerator, Entity, ExtentsPadding, ModelNameLookup, ModelNameTable, Quaternion, Vector3,
    YMap,
};
pub use shared::ConverterOptions;
pub use source::{SourceDialect, SourceDocument};
pub use xml::{
    deserialize, detect_source_document, parse_map_editor, parse_spooner, parse_ymap, write_ymap,
    Document, ParseError, Schema, UnknownDialectError,
};
