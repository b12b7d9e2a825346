use crate::{Millis, VideoId};

/// Side effects requested by the popup state machine and executed by the
/// host (the core never performs IO or arms timers itself).
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Arm the single deferred visual-transition timer.
    ScheduleTransition { delay_ms: Millis },
    /// Cancel the deferred visual-transition timer.
    CancelScheduledTransition,
    /// Ask the active tab's content agent to seek playback.
    SeekTo { seconds: f64 },
    /// Resolve and dispatch the annotation archive download for a video.
    ResolveDownload { video_id: VideoId },
    /// Open the cache-manager page in a new tab.
    OpenCacheManager,
}
