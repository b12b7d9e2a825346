use serde::{Deserialize, Serialize};

use crate::annotations::{annotation_rows, AnnotationRecord};
use crate::effect::Effect;
use crate::video_id::VideoId;
use crate::view_model::{count_label, PopupViewModel};

/// Milliseconds on the host's monotonic clock.
pub type Millis = u64;

/// Minimum spacing between applied visual transitions. Requests arriving
/// faster than this are coalesced into a single deferred transition,
/// bounding visual churn to at most four updates per second.
pub const STATE_CHANGE_DEBOUNCE_MS: Millis = 250;

/// Status payload attached to `no_annotations` and `annotations_loaded`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPayload {
    #[serde(rename = "videoId")]
    pub video_id: VideoId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationRecord>,
}

/// Status pushed or pulled across the popup/content-agent boundary
/// (`get_popup_data` replies and unsolicited `content_status` pushes share
/// this shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ContentStatus {
    NoVideo,
    NoAnnotations(StatusPayload),
    CheckingForAnnotations,
    AnnotationsLoaded(StatusPayload),
}

/// Visual state of the popup surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupVisual {
    /// Initial state before any status has been delivered.
    #[default]
    Unset,
    NoVideo,
    NoAnnotations,
    CheckingAnnotations,
    Video,
}

impl PopupVisual {
    /// `data-state` attribute value rendered into the popup's root element.
    pub fn as_attr(self) -> &'static str {
        match self {
            PopupVisual::Unset => "",
            PopupVisual::NoVideo => "no-video",
            PopupVisual::NoAnnotations => "no-annotations",
            PopupVisual::CheckingAnnotations => "checking-annotations",
            PopupVisual::Video => "video",
        }
    }
}

/// The single deferred transition slot and the applied-transition clock.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct DebounceState {
    last_applied_at: Option<Millis>,
    pending: Option<PopupVisual>,
}

/// Explicit popup controller state. All transitions are driven by pushed or
/// pulled status messages; the controller never infers them itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopupState {
    visual: PopupVisual,
    video_id: Option<VideoId>,
    annotations: Vec<AnnotationRecord>,
    debounce: DebounceState,
    dirty: bool,
}

impl PopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PopupViewModel {
        PopupViewModel {
            visual: self.visual,
            video_id: self.video_id.clone(),
            annotation_count_label: count_label(self.annotations.len()),
            rows: annotation_rows(&self.annotations),
        }
    }

    /// Takes the dirty flag, returning whether a re-render is due.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn video_id(&self) -> Option<&VideoId> {
        self.video_id.as_ref()
    }

    pub(crate) fn set_video_id(&mut self, video_id: VideoId) {
        self.video_id = Some(video_id);
        self.dirty = true;
    }

    pub(crate) fn set_annotations(&mut self, annotations: Vec<AnnotationRecord>) {
        self.annotations = annotations;
        self.dirty = true;
    }

    /// Requests a visual transition at time `now`. Inside the debounce
    /// window the transition is parked in the single pending slot
    /// (replacing any earlier one and re-arming the timer); outside it the
    /// transition applies immediately.
    pub(crate) fn request_visual(
        &mut self,
        visual: PopupVisual,
        now: Millis,
        effects: &mut Vec<Effect>,
    ) {
        if self.debounce.pending.take().is_some() {
            effects.push(Effect::CancelScheduledTransition);
        }

        let within_window = self
            .debounce
            .last_applied_at
            .is_some_and(|applied| now.saturating_sub(applied) <= STATE_CHANGE_DEBOUNCE_MS);

        if within_window {
            self.debounce.pending = Some(visual);
            effects.push(Effect::ScheduleTransition {
                delay_ms: STATE_CHANGE_DEBOUNCE_MS,
            });
        } else {
            self.apply_visual(visual, now);
        }
    }

    /// Applies the pending transition once its timer has elapsed.
    pub(crate) fn timer_elapsed(&mut self, now: Millis) {
        if let Some(visual) = self.debounce.pending.take() {
            self.apply_visual(visual, now);
        }
    }

    fn apply_visual(&mut self, visual: PopupVisual, now: Millis) {
        self.visual = visual;
        self.debounce.last_applied_at = Some(now);
        self.dirty = true;
    }
}
