use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use tokio_util::sync::CancellationToken;

use board_logging::board_warn;
use jobboard_core::{ApplicationRecord, JobKey, SavedEntry};

use crate::fetch::{FetchSettings, HttpListingFetcher, ListingFetcher};
use crate::saved::SavedSetStore;
use crate::store::FileStore;
use crate::types::{EngineEvent, RawListing};

/// Engine wiring, passed explicitly through the constructor rather than
/// read from ambient global state.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    pub storage_dir: PathBuf,
}

impl EngineConfig {
    pub fn with_storage_dir(storage_dir: PathBuf) -> Self {
        Self {
            fetch: FetchSettings::default(),
            storage_dir,
        }
    }
}

enum EngineCommand {
    FetchListings { generation: u64, query: Option<String> },
    SaveEntry { entry: SavedEntry },
    RemoveEntry { key: JobKey },
    LoadSavedSet,
    SubmitApplication { record: ApplicationRecord },
}

/// Handle to the engine loop: commands in, events out.
///
/// The loop thread owns the saved-set store, so mutations execute strictly
/// in arrival order; that is the serialization boundary for racing
/// mutations on the same key. Fetches run as cancellable tasks on the
/// loop's runtime: issuing a new fetch drops all interest in the prior
/// one, whose completion is never emitted.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    events: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(HttpListingFetcher::new(config.fetch.clone()));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut saved = SavedSetStore::load(FileStore::new(config.storage_dir));
            let mut fetch_token: Option<CancellationToken> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::FetchListings { generation, query } => {
                        if let Some(token) = fetch_token.take() {
                            token.cancel();
                        }
                        let token = CancellationToken::new();
                        fetch_token = Some(token.clone());

                        let fetcher = fetcher.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = tokio::select! {
                                _ = token.cancelled() => return,
                                result = fetcher.fetch(query.as_deref()) => result,
                            };
                            let result = result.map(|raw| {
                                raw.into_iter()
                                    .map(RawListing::into_listing)
                                    .collect::<Vec<_>>()
                            });
                            let _ = event_tx.send(EngineEvent::ListingsFetched { generation, result });
                        });
                    }
                    EngineCommand::SaveEntry { entry } => match saved.add(entry) {
                        Ok(()) => {
                            let _ = event_tx.send(EngineEvent::SavedSetChanged {
                                entries: saved.list(),
                            });
                        }
                        Err(error) => {
                            board_warn!("Saved-set write failed: {}", error);
                            let _ = event_tx.send(EngineEvent::SavedMutationFailed { error });
                        }
                    },
                    EngineCommand::RemoveEntry { key } => match saved.remove(&key) {
                        Ok(()) => {
                            let _ = event_tx.send(EngineEvent::SavedSetChanged {
                                entries: saved.list(),
                            });
                        }
                        Err(error) => {
                            board_warn!("Saved-set write failed: {}", error);
                            let _ = event_tx.send(EngineEvent::SavedMutationFailed { error });
                        }
                    },
                    EngineCommand::LoadSavedSet => {
                        let _ = event_tx.send(EngineEvent::SavedSetChanged {
                            entries: saved.list(),
                        });
                    }
                    EngineCommand::SubmitApplication { record } => {
                        let fetcher = fetcher.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = fetcher.submit_application(&record).await;
                            let _ = event_tx.send(EngineEvent::ApplicationSubmitted { result });
                        });
                    }
                }
            }
        });

        Self {
            cmd_tx,
            events: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch_listings(&self, generation: u64, query: Option<String>) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::FetchListings { generation, query });
    }

    pub fn save(&self, entry: SavedEntry) {
        let _ = self.cmd_tx.send(EngineCommand::SaveEntry { entry });
    }

    pub fn remove(&self, key: JobKey) {
        let _ = self.cmd_tx.send(EngineCommand::RemoveEntry { key });
    }

    /// Asks for the current saved set; answered with `SavedSetChanged`.
    pub fn load_saved_set(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadSavedSet);
    }

    pub fn submit_application(&self, record: ApplicationRecord) {
        let _ = self.cmd_tx.send(EngineCommand::SubmitApplication { record });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.events.lock().ok()?.try_recv().ok()
    }
}
