//! Use-Cases der Application-Layer-Orchestrierung.

pub mod extents;
pub mod file_io;
pub mod options;
