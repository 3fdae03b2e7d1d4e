use std::sync::Once;

use jobboard_core::{update, AppState, Effect, JobKey, JobListing, Msg, SavedEntry};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn engineer() -> JobListing {
    JobListing::new(
        "Software Engineer",
        "Tech Corp",
        "$100,000 - $150,000",
        "New York, NY",
        "Looking for a skilled software engineer...",
    )
}

fn designer() -> JobListing {
    JobListing::new(
        "UX Designer",
        "Design Studio",
        "$90,000 - $130,000",
        "Remote",
        "Creative UX designer with 3+ years...",
    )
}

fn refresh_and_load(state: AppState, listings: Vec<JobListing>) -> AppState {
    let (state, effects) = update(state, Msg::RefreshClicked);
    let generation = match effects.as_slice() {
        [Effect::FetchListings { generation }] => *generation,
        other => panic!("unexpected effects: {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::ListingsFetched {
            generation,
            listings,
        },
    );
    state
}

#[test]
fn save_emits_snapshot_effect_without_touching_state() {
    init_logging();
    let state = refresh_and_load(AppState::new(), vec![engineer(), designer()]);
    let key = engineer().key;

    let (state, effects) = update(state, Msg::SaveClicked { key: key.clone() });

    assert_eq!(
        effects,
        vec![Effect::PersistSave {
            entry: SavedEntry::snapshot_of(&engineer()),
        }]
    );
    // The flag flips only once the engine confirms the durable write.
    let view = state.view();
    assert!(!view.rows.iter().find(|r| r.key == key).unwrap().is_saved);
    assert_eq!(view.saved_count, 0);
}

#[test]
fn save_for_unknown_key_is_noop() {
    init_logging();
    let state = refresh_and_load(AppState::new(), vec![engineer()]);

    let (_, effects) = update(
        state,
        Msg::SaveClicked {
            key: JobKey::resolve("Product Manager", "Innovation Inc"),
        },
    );

    assert!(effects.is_empty());
}

#[test]
fn saved_set_confirmation_flips_is_saved() {
    init_logging();
    let state = refresh_and_load(AppState::new(), vec![engineer(), designer()]);
    let entry = SavedEntry::snapshot_of(&engineer());

    let (mut state, effects) = update(state, Msg::SavedSetLoaded(vec![entry]));

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.saved_count, 1);
    let flags: Vec<_> = view.rows.iter().map(|row| row.is_saved).collect();
    assert_eq!(flags, vec![true, false]);
    assert!(state.consume_dirty());
}

#[test]
fn save_with_identical_snapshot_already_saved_is_noop() {
    init_logging();
    let state = refresh_and_load(AppState::new(), vec![engineer()]);
    let entry = SavedEntry::snapshot_of(&engineer());
    let (state, _) = update(state, Msg::SavedSetLoaded(vec![entry]));

    let (_, effects) = update(
        state,
        Msg::SaveClicked {
            key: engineer().key,
        },
    );

    assert!(effects.is_empty());
}

#[test]
fn save_with_changed_snapshot_refreshes_stored_fields() {
    init_logging();
    // Saved from an earlier fetch at the old salary.
    let stale = SavedEntry::snapshot_of(&JobListing::new(
        "Software Engineer",
        "Tech Corp",
        "$95,000",
        "New York, NY",
        "Looking for a skilled software engineer...",
    ));
    let state = refresh_and_load(AppState::new(), vec![engineer()]);
    let (state, _) = update(state, Msg::SavedSetLoaded(vec![stale]));

    let (_, effects) = update(
        state,
        Msg::SaveClicked {
            key: engineer().key,
        },
    );

    assert_eq!(
        effects,
        vec![Effect::PersistSave {
            entry: SavedEntry::snapshot_of(&engineer()),
        }]
    );
}

#[test]
fn remove_for_absent_key_is_noop_twice() {
    init_logging();
    let state = refresh_and_load(AppState::new(), vec![engineer()]);
    let key = designer().key;

    let (state, effects) = update(state, Msg::RemoveClicked { key: key.clone() });
    assert!(effects.is_empty());

    let (_, effects) = update(state, Msg::RemoveClicked { key });
    assert!(effects.is_empty());
}

#[test]
fn remove_emits_effect_and_confirmation_unsets_flag() {
    init_logging();
    let state = refresh_and_load(AppState::new(), vec![engineer()]);
    let entry = SavedEntry::snapshot_of(&engineer());
    let (state, _) = update(state, Msg::SavedSetLoaded(vec![entry]));
    let key = engineer().key;

    let (state, effects) = update(state, Msg::RemoveClicked { key: key.clone() });
    assert_eq!(effects, vec![Effect::PersistRemove { key }]);

    let (state, _) = update(state, Msg::SavedSetLoaded(Vec::new()));
    let view = state.view();
    assert_eq!(view.saved_count, 0);
    assert!(!view.rows[0].is_saved);
}

#[test]
fn saved_flag_survives_refetch_with_reordered_entries() {
    init_logging();
    let state = refresh_and_load(AppState::new(), vec![engineer(), designer()]);
    let (state, _) = update(
        state,
        Msg::SavedSetLoaded(vec![SavedEntry::snapshot_of(&engineer())]),
    );

    // The next fetch returns the same postings reordered, with the noise a
    // remote refresh brings (new blurbs, adjusted salary). Identity rides
    // on title+company, so the saved flag must follow the engineer posting.
    let refetched = vec![
        JobListing::new(
            "UX Designer",
            "Design Studio",
            "$92,000 - $132,000",
            "Remote",
            "Reposted designer role.",
        ),
        JobListing::new(
            "Software Engineer",
            "Tech Corp",
            "$105,000 - $155,000",
            "New York, NY",
            "Reposted engineer role.",
        ),
    ];
    let state = refresh_and_load(state, refetched);

    let view = state.view();
    let flags: Vec<_> = view
        .rows
        .iter()
        .map(|row| (row.title.as_str(), row.is_saved))
        .collect();
    assert_eq!(
        flags,
        vec![("UX Designer", false), ("Software Engineer", true)]
    );
}

#[test]
fn persistence_failure_leaves_saved_state_rolled_back() {
    init_logging();
    let state = refresh_and_load(AppState::new(), vec![engineer()]);
    let key = engineer().key;

    let (state, effects) = update(state, Msg::SaveClicked { key: key.clone() });
    assert_eq!(effects.len(), 1);

    // The engine reports the durable write failed; nothing was committed.
    let (mut state, effects) = update(
        state,
        Msg::SavedMutationFailed {
            message: "io failure: disk full".to_string(),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.rows[0].is_saved);
    assert_eq!(view.saved_count, 0);
    assert_eq!(
        view.last_store_error.as_deref(),
        Some("io failure: disk full")
    );
    assert!(state.consume_dirty());

    // A later successful mutation clears the banner.
    let (state, _) = update(
        state,
        Msg::SavedSetLoaded(vec![SavedEntry::snapshot_of(&engineer())]),
    );
    assert_eq!(state.view().last_store_error, None);
    assert!(state.view().rows[0].is_saved);
}

#[test]
fn saved_list_is_available_without_a_catalog() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::SavedSetLoaded(vec![SavedEntry::snapshot_of(&designer())]),
    );

    let view = state.view();
    assert!(view.rows.is_empty());
    assert_eq!(view.saved.len(), 1);
    assert_eq!(view.saved[0].title, "UX Designer");
    assert!(view.saved[0].is_saved);
}
