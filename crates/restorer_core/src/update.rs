use crate::{ContentStatus, Effect, Msg, PopupState, PopupVisual};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PopupState, msg: Msg) -> (PopupState, Vec<Effect>) {
    let mut effects = Vec::new();
    match msg {
        Msg::StatusReceived { status, at_ms } => match status {
            ContentStatus::NoVideo => {
                state.request_visual(PopupVisual::NoVideo, at_ms, &mut effects);
            }
            ContentStatus::NoAnnotations(payload) => {
                state.set_video_id(payload.video_id);
                state.request_visual(PopupVisual::NoAnnotations, at_ms, &mut effects);
            }
            ContentStatus::CheckingForAnnotations => {
                state.request_visual(PopupVisual::CheckingAnnotations, at_ms, &mut effects);
            }
            ContentStatus::AnnotationsLoaded(payload) => {
                state.set_video_id(payload.video_id);
                state.set_annotations(payload.annotations);
                state.request_visual(PopupVisual::Video, at_ms, &mut effects);
            }
        },
        Msg::TransitionTimerElapsed { at_ms } => {
            state.timer_elapsed(at_ms);
        }
        Msg::DownloadClicked => {
            // Nothing to download until a status carrying a video id arrived.
            if let Some(video_id) = state.video_id().cloned() {
                effects.push(Effect::ResolveDownload { video_id });
            }
        }
        Msg::TimeClicked { seconds } => {
            effects.push(Effect::SeekTo { seconds });
        }
        Msg::ManageCacheClicked => {
            effects.push(Effect::OpenCacheManager);
        }
        Msg::NoContentAgent | Msg::NoOp => {}
    }

    (state, effects)
}
