//! Restorer core: pure popup state machine and view-model helpers.
mod annotations;
mod effect;
mod msg;
mod state;
mod update;
mod video_id;
mod view_model;

pub use annotations::{
    annotation_rows, format_seconds, parse_annotation_list, AnnotationRecord, AnnotationRowView,
};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    ContentStatus, Millis, PopupState, PopupVisual, StatusPayload, STATE_CHANGE_DEBOUNCE_MS,
};
pub use update::update;
pub use video_id::{InvalidVideoId, VideoId};
pub use view_model::PopupViewModel;
