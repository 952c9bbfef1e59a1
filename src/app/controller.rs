//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Intents und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Bricht beim ersten fehlgeschlagenen Command ab; nachfolgende
    /// Commands (z.B. Speichern nach fehlgeschlagenem Öffnen) laufen nicht.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::NewDocument => handlers::file_io::new_document(state),
            AppCommand::OpenFile { path } => handlers::file_io::open(state, &path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, &path)?,

            // === Optionen ===
            AppCommand::SaveOptions { path } => handlers::options::save(state, &path)?,

            // === Dokument ===
            AppCommand::RecalculateExtents => handlers::document::recalculate_extents(state),
        }

        Ok(())
    }
}
