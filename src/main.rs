//! ME2YM: YMap Exporter.
//!
//! Konvertiert Map-Editor- und Spooner-Platzierungen in YMap-XML
//! und berechnet Streaming-Extents vorhandener YMaps neu.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use ymap_exporter::{default_output_path, AppController, AppIntent, AppState, ConverterOptions};

#[derive(Parser)]
#[command(name = "ymap-exporter")]
#[command(about = "Map-Editor/Spooner-XML nach YMap-XML konvertieren", long_about = None)]
#[command(version)]
struct Cli {
    /// Optionsdatei (Standard: ymap_exporter.toml neben dem Programm)
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Hash→Name-Liste, überschreibt `model_names_path` aus den Optionen
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    names: Option<PathBuf>,

    /// Ausführliche Ausgabe (Debug-Level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quelldatei (.xml) oder YMap (.ymap.xml) laden und als YMap speichern
    Convert {
        /// Eingabedatei
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Ausgabedatei (Standard: <eingabe>.ymap.xml)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Extents einer Datei neu berechnen und speichern
    Extents {
        /// Eingabedatei
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Ausgabedatei (Standard: <eingabe>.ymap.xml bzw. in-place)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Datei laden und Übersicht ausgeben
    Info {
        /// Eingabedatei
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,
    },

    /// Wirksame Optionen (inkl. --names) als TOML schreiben
    WriteConfig {
        /// Zieldatei (Standard: die Optionsdatei aus --config)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    log::debug!("YMap Exporter v{} startet...", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = cli.config.unwrap_or_else(ConverterOptions::config_path);
    let mut options = ConverterOptions::load_from_file(&config_path);
    if let Some(names) = cli.names {
        options.model_names_path = Some(names);
    }

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    match cli.command {
        Commands::Convert { input, output } => {
            controller.handle_intent(&mut state, AppIntent::ConvertRequested { input, output })?;
        }
        Commands::Extents { input, output } => {
            let output = output.unwrap_or_else(|| default_output_path(&input));
            controller.handle_intent(&mut state, AppIntent::OpenRequested { path: input })?;
            controller.handle_intent(&mut state, AppIntent::RecalculateExtentsRequested)?;
            controller.handle_intent(&mut state, AppIntent::SaveRequested { path: output })?;
        }
        Commands::Info { input } => {
            controller.handle_intent(&mut state, AppIntent::OpenRequested { path: input })?;
            print!("{}", state.summary());
        }
        Commands::WriteConfig { output } => {
            let path = output.unwrap_or(config_path);
            controller.handle_intent(&mut state, AppIntent::SaveOptionsRequested { path })?;
        }
    }

    Ok(())
}
