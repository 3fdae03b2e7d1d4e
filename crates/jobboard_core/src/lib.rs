//! Jobboard core: pure state machine and view-model helpers.
mod application;
mod catalog;
mod effect;
mod filter;
mod identity;
mod listing;
mod msg;
mod reconcile;
mod state;
mod update;
mod view_model;

pub use application::{validate, ApplicationField, ApplicationRecord, MIN_COVER_LETTER_LEN};
pub use catalog::CatalogStore;
pub use effect::Effect;
pub use filter::filter_rows;
pub use identity::JobKey;
pub use listing::{JobListing, SavedEntry};
pub use msg::Msg;
pub use reconcile::reconcile;
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, JobRowView, SubmissionStatus};
