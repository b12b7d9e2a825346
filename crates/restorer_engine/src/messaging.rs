//! Abstract request/response and push channel between the coordinator or
//! popup and the content agent injected into a page.
//!
//! The wire-level `type` tags are a cross-context contract and must stay
//! verbatim. "No responder" (no content agent in the tab, or no such tab)
//! is a representable outcome rather than a silent success; callers decide
//! whether to swallow it.

use serde::{Deserialize, Serialize};

use restorer_core::{ContentStatus, VideoId};

use crate::TabId;

/// Pull-style message sent into a tab; each has a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentRequest {
    /// Ask for the identifier of the currently playing video.
    VideoChange,
    /// Ask whether the page description already embeds annotations.
    CheckDescriptionForAnnotations,
    /// Ask for the current popup status and payload.
    GetPopupData,
}

/// Reply to an [`AgentRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum AgentReply {
    /// Identifier of the playing video, absent when no video is on the page.
    CurrentVideo(Option<VideoId>),
    DescriptionChecked { found_annotations: bool },
    /// Current status, or `None` when the agent has nothing to report.
    PopupData(Option<ContentStatus>),
}

/// Push-style message sent into a tab; no reply expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentPush {
    /// Clear any previously rendered annotation overlays (idempotent).
    RemoveRendererAnnotations,
    /// Raw annotation payload, forwarded unmodified.
    AnnotationsReceived { xml: String },
    /// No annotation data exists for the current video.
    AnnotationsUnavailable,
    /// Seek playback to the given position.
    SeekTo { seconds: f64 },
}

/// The tab had no content agent listening.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no content agent responded in tab {tab_id}")]
pub struct NoResponder {
    pub tab_id: TabId,
}

/// Asynchronous channel to the content agents of browser tabs.
#[async_trait::async_trait]
pub trait ContentChannel: Send + Sync {
    async fn request(&self, tab_id: TabId, request: AgentRequest)
        -> Result<AgentReply, NoResponder>;

    async fn push(&self, tab_id: TabId, push: AgentPush) -> Result<(), NoResponder>;
}
