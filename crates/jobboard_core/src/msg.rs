/// Inputs to the state machine, from the UI shell and from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked for a fresh catalog fetch.
    RefreshClicked,
    /// Engine finished the fetch tagged with `generation`.
    ListingsFetched {
        generation: u64,
        listings: Vec<crate::JobListing>,
    },
    /// Engine failed the fetch tagged with `generation`.
    ListingsFetchFailed { generation: u64, message: String },
    /// User edited the search box (local filter, not a remote query).
    QueryChanged(String),
    /// User asked to save the listing with this key.
    SaveClicked { key: crate::JobKey },
    /// User asked to drop this key from the saved set.
    RemoveClicked { key: crate::JobKey },
    /// Authoritative saved-set contents: startup restore, or confirmation
    /// after a persisted mutation.
    SavedSetLoaded(Vec<crate::SavedEntry>),
    /// A saved-set mutation failed to persist; the store rolled back.
    SavedMutationFailed { message: String },
    /// User submitted the application form.
    ApplySubmitted { record: crate::ApplicationRecord },
    /// Engine accepted the application submission.
    ApplicationAccepted,
    /// Engine failed the application submission.
    ApplicationFailed { message: String },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
