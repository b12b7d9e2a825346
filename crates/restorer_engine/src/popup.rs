use std::time::Duration;

use restorer_core::{update, ContentStatus, Effect, Millis, Msg, PopupState, PopupViewModel};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::download::{dispatch_download, open_cache_manager, DownloadHost};
use crate::messaging::{AgentPush, AgentReply, AgentRequest, ContentChannel};
use crate::TabId;

/// Input feeding one popup session: unsolicited status pushes from the
/// content agent plus the user's actions on the popup surface.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupInput {
    /// An unsolicited `content_status` push.
    Status(ContentStatus),
    DownloadClicked,
    TimeClicked { seconds: f64 },
    ManageCacheClicked,
}

/// Drives one popup session against the active tab's content agent.
///
/// On open the session pulls `get_popup_data`; a missing responder leaves
/// the popup in its initial unset visual. It then stays subscribed to
/// `inputs` for the popup's lifetime; closing the sender disposes the
/// session. The core's debounce timer effects are realized as a single
/// cancellable deadline here. `on_view` observes every dirty view
/// snapshot. Returns the final state, mainly for inspection in tests.
pub async fn run_popup_session(
    channel: &dyn ContentChannel,
    host: &dyn DownloadHost,
    archive_endpoint: &str,
    active_tab: TabId,
    mut inputs: mpsc::Receiver<PopupInput>,
    mut on_view: impl FnMut(&PopupViewModel),
) -> PopupState {
    let started = Instant::now();
    let mut state = PopupState::new();
    let mut deadline: Option<Instant> = None;

    let initial = match channel.request(active_tab, AgentRequest::GetPopupData).await {
        Ok(AgentReply::PopupData(Some(status))) => Msg::StatusReceived {
            status,
            at_ms: elapsed_ms(started),
        },
        // May not be any content agent running in the active tab.
        _ => Msg::NoContentAgent,
    };
    state = apply(
        channel,
        host,
        archive_endpoint,
        active_tab,
        state,
        initial,
        &mut deadline,
        &mut on_view,
    )
    .await;

    loop {
        let msg = tokio::select! {
            input = inputs.recv() => match input {
                Some(PopupInput::Status(status)) => Msg::StatusReceived {
                    status,
                    at_ms: elapsed_ms(started),
                },
                Some(PopupInput::DownloadClicked) => Msg::DownloadClicked,
                Some(PopupInput::TimeClicked { seconds }) => Msg::TimeClicked { seconds },
                Some(PopupInput::ManageCacheClicked) => Msg::ManageCacheClicked,
                None => break,
            },
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                deadline = None;
                Msg::TransitionTimerElapsed {
                    at_ms: elapsed_ms(started),
                }
            }
        };

        state = apply(
            channel,
            host,
            archive_endpoint,
            active_tab,
            state,
            msg,
            &mut deadline,
            &mut on_view,
        )
        .await;
    }

    state
}

#[allow(clippy::too_many_arguments)]
async fn apply(
    channel: &dyn ContentChannel,
    host: &dyn DownloadHost,
    archive_endpoint: &str,
    active_tab: TabId,
    state: PopupState,
    msg: Msg,
    deadline: &mut Option<Instant>,
    on_view: &mut impl FnMut(&PopupViewModel),
) -> PopupState {
    let (mut state, effects) = update(state, msg);
    for effect in effects {
        match effect {
            Effect::ScheduleTransition { delay_ms } => {
                *deadline = Some(Instant::now() + Duration::from_millis(delay_ms));
            }
            Effect::CancelScheduledTransition => {
                *deadline = None;
            }
            Effect::SeekTo { seconds } => {
                let _ = channel
                    .push(active_tab, AgentPush::SeekTo { seconds })
                    .await;
            }
            Effect::ResolveDownload { video_id } => {
                dispatch_download(host, archive_endpoint, &video_id).await;
            }
            Effect::OpenCacheManager => {
                open_cache_manager(host).await;
            }
        }
    }

    if state.consume_dirty() {
        on_view(&state.view());
    }
    state
}

fn elapsed_ms(started: Instant) -> Millis {
    started.elapsed().as_millis() as Millis
}
