//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Hält das aktive YMap-Dokument samt Optionen und Modellnamen.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, DocumentOrigin, DocumentSummary};
pub use use_cases::file_io::{default_output_path, FileKind, LoadError};
