use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use board_logging::board_warn;
use jobboard_core::{Effect, Msg};
use jobboard_engine::{EngineConfig, EngineEvent, EngineHandle};

use super::app::ShellEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, tx: mpsc::Sender<ShellEvent>) -> Self {
        let engine = EngineHandle::new(config);
        let runner = Self { engine };
        runner.spawn_event_loop(tx);
        runner
    }

    /// Asks the engine for the persisted saved set (startup restore).
    pub fn request_saved_set(&self) {
        self.engine.load_saved_set();
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchListings { generation } => {
                    self.engine.fetch_listings(generation, None);
                }
                Effect::PersistSave { entry } => self.engine.save(entry),
                Effect::PersistRemove { key } => self.engine.remove(key),
                Effect::SubmitApplication { record } => self.engine.submit_application(record),
            }
        }
    }

    fn spawn_event_loop(&self, tx: mpsc::Sender<ShellEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                if tx.send(ShellEvent::App(map_event(event))).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ListingsFetched { generation, result } => match result {
            Ok(listings) => Msg::ListingsFetched {
                generation,
                listings,
            },
            Err(err) => {
                board_warn!("Fetch {} failed: {}", generation, err);
                Msg::ListingsFetchFailed {
                    generation,
                    message: err.to_string(),
                }
            }
        },
        EngineEvent::SavedSetChanged { entries } => Msg::SavedSetLoaded(entries),
        EngineEvent::SavedMutationFailed { error } => {
            board_warn!("Saved-set mutation failed: {}", error);
            Msg::SavedMutationFailed {
                message: error.to_string(),
            }
        }
        EngineEvent::ApplicationSubmitted { result } => match result {
            Ok(()) => Msg::ApplicationAccepted,
            Err(err) => {
                board_warn!("Application submission failed: {}", err);
                Msg::ApplicationFailed {
                    message: err.to_string(),
                }
            }
        },
    }
}
