use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::Result;

use board_logging::board_info;
use jobboard_core::{update, AppState, AppViewModel, ApplicationRecord, JobKey, Msg};
use jobboard_engine::{EngineConfig, FetchSettings};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::render;

/// Shell wiring, resolved from the command line and passed down
/// explicitly.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub endpoint: String,
    pub data_dir: PathBuf,
    pub log: LogDestination,
}

/// One multiplexed inbox: messages mapped from engine events, and raw
/// input lines from the terminal.
pub(crate) enum ShellEvent {
    App(Msg),
    Input(String),
}

pub fn run(config: ShellConfig) -> Result<()> {
    logging::initialize(config.log);
    board_info!("Starting jobboard shell against {}", config.endpoint);

    let (tx, rx) = mpsc::channel::<ShellEvent>();
    let runner = EffectRunner::new(
        EngineConfig {
            fetch: FetchSettings {
                endpoint: config.endpoint,
                ..FetchSettings::default()
            },
            storage_dir: config.data_dir,
        },
        tx.clone(),
    );
    spawn_stdin_reader(tx);

    // Restore the saved set, then kick off the first fetch.
    runner.request_saved_set();
    let mut state = dispatch(AppState::new(), Msg::RefreshClicked, &runner);
    render::help();

    while let Ok(event) = rx.recv() {
        match event {
            ShellEvent::App(msg) => {
                state = dispatch(state, msg, &runner);
            }
            ShellEvent::Input(line) => {
                let line = line.trim();
                match line {
                    "quit" | "exit" => break,
                    "" | "help" => render::help(),
                    "saved" => render::saved_list(&state.view()),
                    "list" => render::render(&state.view()),
                    _ => match parse_command(line, &state.view()) {
                        Ok(msg) => state = dispatch(state, msg, &runner),
                        Err(message) => render::usage_error(&message),
                    },
                }
            }
        }
    }

    Ok(())
}

/// Runs one message through the core and executes the resulting effects;
/// renders when the state reports itself dirty.
fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (mut state, effects) = update(state, msg);
    runner.enqueue(effects);
    if state.consume_dirty() {
        render::render(&state.view());
    }
    state
}

fn spawn_stdin_reader(tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(ShellEvent::Input(line)).is_err() {
                break;
            }
        }
    });
}

const APPLY_USAGE: &str = "usage: apply <row> <name>|<email>|<phone>|<cover letter>";

fn parse_command(line: &str, view: &AppViewModel) -> Result<Msg, String> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    match command.to_ascii_lowercase().as_str() {
        "fetch" | "refresh" => Ok(Msg::RefreshClicked),
        "search" => Ok(Msg::QueryChanged(rest.to_string())),
        "save" => catalog_key(view, rest).map(|key| Msg::SaveClicked { key }),
        "remove" => saved_key(view, rest).map(|key| Msg::RemoveClicked { key }),
        "apply" => parse_apply(view, rest),
        other => Err(format!("unknown command: {other}")),
    }
}

fn parse_apply(view: &AppViewModel, rest: &str) -> Result<Msg, String> {
    let (row, form) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| APPLY_USAGE.to_string())?;
    let job_key = catalog_key(view, row)?;
    let parts: Vec<&str> = form.splitn(4, '|').map(str::trim).collect();
    let [name, email, phone, cover_letter] = parts.as_slice() else {
        return Err(APPLY_USAGE.to_string());
    };
    Ok(Msg::ApplySubmitted {
        record: ApplicationRecord {
            job_key,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            cover_letter: cover_letter.to_string(),
        },
    })
}

fn catalog_key(view: &AppViewModel, arg: &str) -> Result<JobKey, String> {
    let row_number = parse_row_number(arg)?;
    view.rows
        .get(row_number - 1)
        .map(|row| row.key.clone())
        .ok_or_else(|| format!("no listing at row {row_number}"))
}

fn saved_key(view: &AppViewModel, arg: &str) -> Result<JobKey, String> {
    let row_number = parse_row_number(arg)?;
    view.saved
        .get(row_number - 1)
        .map(|row| row.key.clone())
        .ok_or_else(|| format!("no saved entry at row {row_number}"))
}

fn parse_row_number(arg: &str) -> Result<usize, String> {
    match arg.trim().parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(format!("expected a row number, got {arg:?}")),
    }
}
