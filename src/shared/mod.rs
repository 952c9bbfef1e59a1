//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die zwischen `convert`, `app` und der
//! Binary geteilt werden.

pub mod options;

pub use options::ConverterOptions;
