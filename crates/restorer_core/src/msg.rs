use crate::{ContentStatus, Millis};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Status delivered by the content agent, either as the reply to the
    /// popup's initial `get_popup_data` pull or as an unsolicited
    /// `content_status` push.
    StatusReceived { status: ContentStatus, at_ms: Millis },
    /// The `get_popup_data` pull found no content agent in the active tab;
    /// the popup stays in its initial unset visual.
    NoContentAgent,
    /// The deferred visual-transition timer fired.
    TransitionTimerElapsed { at_ms: Millis },
    /// User clicked the download button.
    DownloadClicked,
    /// User clicked a row's time cell.
    TimeClicked { seconds: f64 },
    /// User clicked the cache-manager link.
    ManageCacheClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
