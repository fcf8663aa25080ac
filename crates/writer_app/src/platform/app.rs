use std::ffi::OsString;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use writer_core::{update, AppState, AppViewModel, Msg, Tint};
use writer_engine::{apply_effects, settings_restored_msg, MemoryStore};
use writer_logging::{writer_error, writer_info};

use super::logging::{self, LogDestination};
use super::persistence;

/// Counts the document named by the first argument (stdin without one) and
/// prints the status bar line against the persisted word goal.
pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env());

    let dir = persistence::settings_dir();
    let mut store = persistence::load_settings(&dir);
    let document = read_document(std::env::args_os().nth(1))?;

    let before = store.clone();
    let view = evaluate(&mut store, &document);
    println!("{}", status_line(&view));

    if store != before {
        match persistence::save_settings(&dir, &store) {
            Ok(path) => writer_info!("Saved corrected settings to {:?}", path),
            Err(err) => writer_error!("Failed to save settings: {}", err),
        }
    }
    Ok(())
}

/// Runs the editor state machine over restored settings and one text snapshot.
///
/// Clamping corrections are written back into `store`.
pub(crate) fn evaluate(store: &mut MemoryStore, document: &str) -> AppViewModel {
    let (state, effects) = update(AppState::new(), settings_restored_msg(&*store));
    apply_effects(&mut *store, &effects);

    let (state, _) = update(state, Msg::TextChanged(document.to_owned()));
    state.view()
}

pub(crate) fn status_line(view: &AppViewModel) -> String {
    let percent = (view.progress.fraction * 100.0).round();
    let marker = match view.progress.tint {
        Tint::Alert => "!".to_string(),
        Tint::Hue(hue) => format!("hue {hue:.3}"),
    };
    format!(
        "Goal: {}  {}  [{percent:.0}% {marker}]  {}",
        view.word_limit,
        view.counter_label(),
        view.status_label()
    )
}

fn read_document(path: Option<OsString>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            let path = PathBuf::from(path);
            fs::read_to_string(&path)
                .with_context(|| format!("failed to read document {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read document from stdin")?;
            Ok(text)
        }
    }
}
