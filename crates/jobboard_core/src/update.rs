use std::collections::BTreeMap;

use crate::application::validate;
use crate::view_model::SubmissionStatus;
use crate::{AppState, Effect, Msg, SavedEntry};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RefreshClicked => {
            let generation = state.begin_fetch();
            state.mark_dirty();
            vec![Effect::FetchListings { generation }]
        }
        Msg::ListingsFetched {
            generation,
            listings,
        } => {
            // A completion from a superseded fetch must not clobber newer
            // catalog state.
            if !state.is_current_fetch(generation) {
                return (state, Vec::new());
            }
            state.apply_listings(listings);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ListingsFetchFailed {
            generation,
            message,
        } => {
            if !state.is_current_fetch(generation) {
                return (state, Vec::new());
            }
            state.apply_fetch_failure(message);
            state.mark_dirty();
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            state.set_query(query);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SaveClicked { key } => {
            let Some(listing) = state.catalog_entry(&key) else {
                return (state, Vec::new());
            };
            let entry = SavedEntry::snapshot_of(listing);
            // Already saved with an identical snapshot: nothing to do.
            if state.saved_entry(&key) == Some(&entry) {
                return (state, Vec::new());
            }
            // The in-memory saved set is not touched here; it follows the
            // engine's SavedSetLoaded confirmation once the write lands.
            vec![Effect::PersistSave { entry }]
        }
        Msg::RemoveClicked { key } => {
            if state.saved_entry(&key).is_none() {
                return (state, Vec::new());
            }
            vec![Effect::PersistRemove { key }]
        }
        Msg::SavedSetLoaded(entries) => {
            state.replace_saved(entries);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SavedMutationFailed { message } => {
            state.apply_store_failure(message);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ApplySubmitted { record } => {
            let errors = validate(&record);
            if errors.is_empty() {
                state.set_form_errors(BTreeMap::new());
                state.set_submission(SubmissionStatus::Pending);
                state.mark_dirty();
                vec![Effect::SubmitApplication { record }]
            } else {
                state.set_form_errors(errors);
                state.mark_dirty();
                Vec::new()
            }
        }
        Msg::ApplicationAccepted => {
            state.set_submission(SubmissionStatus::Accepted);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ApplicationFailed { message } => {
            state.set_submission(SubmissionStatus::Rejected(message));
            state.mark_dirty();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
