//! Mapping von Benutzer-Intents auf mutierende App-Commands.

use super::use_cases::file_io::default_output_path;
use super::{AppCommand, AppIntent, AppState};

#[cfg(test)]
mod tests;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NewDocumentRequested => vec![AppCommand::NewDocument],
        AppIntent::OpenRequested { path } => vec![AppCommand::OpenFile { path }],
        AppIntent::RecalculateExtentsRequested => vec![AppCommand::RecalculateExtents],
        AppIntent::SaveRequested { path } => vec![AppCommand::SaveFile { path }],
        AppIntent::ConvertRequested { input, output } => {
            let output = output.unwrap_or_else(|| default_output_path(&input));
            vec![
                AppCommand::OpenFile { path: input },
                AppCommand::SaveFile { path: output },
            ]
        }
        AppIntent::SaveOptionsRequested { path } => vec![AppCommand::SaveOptions { path }],
    }
}
