use restorer_core::{
    update, ContentStatus, Effect, Msg, PopupState, PopupVisual, StatusPayload, VideoId,
    STATE_CHANGE_DEBOUNCE_MS,
};

fn status_at(state: PopupState, status: ContentStatus, at_ms: u64) -> (PopupState, Vec<Effect>) {
    update(state, Msg::StatusReceived { status, at_ms })
}

#[test]
fn first_transition_applies_immediately() {
    let state = PopupState::new();
    let (state, effects) = status_at(state, ContentStatus::CheckingForAnnotations, 1_000);

    assert!(effects.is_empty());
    assert_eq!(state.view().visual, PopupVisual::CheckingAnnotations);
}

#[test]
fn rapid_requests_defer_and_keep_only_the_latest() {
    let state = PopupState::new();
    let (state, _effects) = status_at(state, ContentStatus::CheckingForAnnotations, 0);

    // 50ms later: inside the window, parked instead of applied.
    let (state, effects) = status_at(state, ContentStatus::NoVideo, 50);
    assert_eq!(
        effects,
        vec![Effect::ScheduleTransition {
            delay_ms: STATE_CHANGE_DEBOUNCE_MS,
        }]
    );
    assert_eq!(state.view().visual, PopupVisual::CheckingAnnotations);

    // Another request inside the window replaces the pending one.
    let no_annotations = ContentStatus::NoAnnotations(StatusPayload {
        video_id: VideoId::parse("dQw4w9WgXcQ").unwrap(),
        annotations: Vec::new(),
    });
    let (state, effects) = status_at(state, no_annotations, 100);
    assert_eq!(
        effects,
        vec![
            Effect::CancelScheduledTransition,
            Effect::ScheduleTransition {
                delay_ms: STATE_CHANGE_DEBOUNCE_MS,
            },
        ]
    );
    assert_eq!(state.view().visual, PopupVisual::CheckingAnnotations);

    // Timer elapse applies exactly the latest pending transition.
    let (state, effects) = update(state, Msg::TransitionTimerElapsed { at_ms: 350 });
    assert!(effects.is_empty());
    assert_eq!(state.view().visual, PopupVisual::NoAnnotations);
}

#[test]
fn requests_spaced_beyond_the_window_both_apply() {
    let state = PopupState::new();
    let (state, _effects) = status_at(state, ContentStatus::CheckingForAnnotations, 0);
    assert_eq!(state.view().visual, PopupVisual::CheckingAnnotations);

    let (state, effects) = status_at(state, ContentStatus::NoVideo, 300);
    assert!(effects.is_empty());
    assert_eq!(state.view().visual, PopupVisual::NoVideo);
}

#[test]
fn window_boundary_is_inclusive() {
    let state = PopupState::new();
    let (state, _effects) = status_at(state, ContentStatus::CheckingForAnnotations, 0);

    // Exactly 250ms after the applied transition still defers.
    let (state, effects) = status_at(state, ContentStatus::NoVideo, STATE_CHANGE_DEBOUNCE_MS);
    assert_eq!(
        effects,
        vec![Effect::ScheduleTransition {
            delay_ms: STATE_CHANGE_DEBOUNCE_MS,
        }]
    );
    assert_eq!(state.view().visual, PopupVisual::CheckingAnnotations);

    // One past the window applies immediately.
    let state = PopupState::new();
    let (state, _effects) = status_at(state, ContentStatus::CheckingForAnnotations, 0);
    let (state, effects) = status_at(state, ContentStatus::NoVideo, STATE_CHANGE_DEBOUNCE_MS + 1);
    assert!(effects.is_empty());
    assert_eq!(state.view().visual, PopupVisual::NoVideo);
}

#[test]
fn timer_elapse_without_pending_transition_is_a_noop() {
    let state = PopupState::new();
    let (state, _effects) = status_at(state, ContentStatus::NoVideo, 0);

    let (mut state, effects) = update(state, Msg::TransitionTimerElapsed { at_ms: 400 });
    assert!(effects.is_empty());
    assert_eq!(state.view().visual, PopupVisual::NoVideo);
    // Applying the first status left the state dirty; the stray timer must not.
    assert!(state.consume_dirty());
    let (mut state, _effects) = update(state, Msg::TransitionTimerElapsed { at_ms: 500 });
    assert!(!state.consume_dirty());
}
