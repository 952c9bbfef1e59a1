use crate::app::{AppCommand, AppIntent, AppState};
use std::path::PathBuf;

use super::map_intent_to_commands;

#[test]
fn open_requested_maps_to_open_file() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::OpenRequested {
            path: PathBuf::from("karte.xml"),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::OpenFile {
            path: PathBuf::from("karte.xml")
        }]
    );
}

#[test]
fn convert_requested_maps_to_open_then_save_in_order() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ConvertRequested {
            input: PathBuf::from("maps/karte.xml"),
            output: Some(PathBuf::from("out/ziel.ymap.xml")),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::OpenFile { .. }));
    assert_eq!(
        commands[1],
        AppCommand::SaveFile {
            path: PathBuf::from("out/ziel.ymap.xml")
        }
    );
}

#[test]
fn convert_requested_without_output_saves_next_to_input() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ConvertRequested {
            input: PathBuf::from("maps/karte.xml"),
            output: None,
        },
    );

    assert_eq!(
        commands[1],
        AppCommand::SaveFile {
            path: PathBuf::from("maps/karte.ymap.xml")
        }
    );
}

#[test]
fn recalculate_requested_maps_to_single_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::RecalculateExtentsRequested);

    assert_eq!(commands, vec![AppCommand::RecalculateExtents]);
}

#[test]
fn save_options_requested_maps_to_single_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SaveOptionsRequested {
            path: PathBuf::from("ymap_exporter.toml"),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::SaveOptions {
            path: PathBuf::from("ymap_exporter.toml")
        }]
    );
}
