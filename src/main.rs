use babushka::app::BabushkaApp;
use babushka::config::{AppConfig, Cli};
use babushka::database::SqliteStorage;
use babushka::gateway::GeminiTutor;
use babushka::gateway::worker::TutorWorker;
use babushka::{DeckStore, Trainer};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_cli(Cli::parse());

    let storage = match SqliteStorage::open(&config.db_path) {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!(
                path = %config.db_path.display(),
                error = %e,
                "cannot open database, custom units will not be saved"
            );
            match SqliteStorage::open_in_memory() {
                Ok(storage) => storage,
                Err(e) => {
                    tracing::error!(error = %e, "failed to initialize storage");
                    return ExitCode::FAILURE;
                }
            }
        }
    };
    let store = DeckStore::load(storage);
    tracing::info!(units = store.list_units().len(), "units available");

    let tutor = match GeminiTutor::new(config.api_key.clone(), config.model.clone()) {
        Ok(tutor) => tutor,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            return ExitCode::FAILURE;
        }
    };
    if !tutor.has_credential() {
        tracing::warn!("no API key configured, unit generation and the assistant are unavailable");
    }
    let worker = TutorWorker::new(Arc::new(tutor));

    let app = BabushkaApp::new(
        Trainer::new(store),
        worker,
        config.share_base.clone(),
        config.startup_link.clone(),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 760.0]),
        ..Default::default()
    };
    match eframe::run_native("Babushka", options, Box::new(|_cc| Ok(Box::new(app)))) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "window closed with an error");
            ExitCode::FAILURE
        }
    }
}
