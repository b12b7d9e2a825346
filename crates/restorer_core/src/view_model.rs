use crate::annotations::AnnotationRowView;
use crate::{PopupVisual, VideoId};

/// Snapshot of everything a popup renderer needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopupViewModel {
    pub visual: PopupVisual,
    pub video_id: Option<VideoId>,
    /// Pluralized count, e.g. "1 Annotation" / "3 Annotations".
    pub annotation_count_label: String,
    pub rows: Vec<AnnotationRowView>,
}

pub(crate) fn count_label(count: usize) -> String {
    let noun = if count == 1 { "Annotation" } else { "Annotations" };
    format!("{count} {noun}")
}
