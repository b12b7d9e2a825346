use std::sync::Arc;

use restorer_core::VideoId;
use restorer_logging::{restorer_debug, restorer_info};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::messaging::{AgentPush, AgentReply, AgentRequest, ContentChannel};
use crate::{AnnotationSource, TabId};

/// Tab update event as observed from the browser host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabEvent {
    pub tab_id: TabId,
    pub status: TabStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabStatus {
    Loading,
    Complete,
}

/// Bridges tab navigation events to the annotation source and the page's
/// content agent.
pub struct TabCoordinator {
    source: Arc<dyn AnnotationSource>,
    channel: Arc<dyn ContentChannel>,
}

impl TabCoordinator {
    pub fn new(source: Arc<dyn AnnotationSource>, channel: Arc<dyn ContentChannel>) -> Self {
        Self { source, channel }
    }

    /// Subscribes the coordinator to a feed of tab events. Each event is
    /// handled on its own task, so concurrent tab updates are independent
    /// and unordered. Dropping the sender ends the subscription and the
    /// returned task.
    pub fn spawn(self, mut events: mpsc::Receiver<TabEvent>) -> JoinHandle<()> {
        let coordinator = Arc::new(self);
        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                let coordinator = Arc::clone(&coordinator);
                tokio::spawn(async move {
                    coordinator.on_tab_event(event).await;
                });
            }
        })
    }

    /// Handles one tab update event end to end.
    pub async fn on_tab_event(&self, event: TabEvent) {
        if event.status != TabStatus::Complete {
            return;
        }

        let video_id = match self
            .channel
            .request(event.tab_id, AgentRequest::VideoChange)
            .await
        {
            Ok(AgentReply::CurrentVideo(Some(video_id))) => video_id,
            Ok(_) => return,
            // No content agent listening in this tab.
            Err(err) => {
                restorer_debug!("Skipping tab {}: {err}", event.tab_id);
                return;
            }
        };

        self.handle_video_update(event.tab_id, video_id).await;
    }

    async fn handle_video_update(&self, tab_id: TabId, video_id: VideoId) {
        // Idempotent reset of any overlays left over from the previous video.
        let _ = self
            .channel
            .push(tab_id, AgentPush::RemoveRendererAnnotations)
            .await;

        if self.description_has_annotations(tab_id).await {
            restorer_info!("Annotations found in description ({video_id})");
            return;
        }

        match self.source.fetch(video_id.as_str()).await {
            Ok(payload) => {
                restorer_info!("Received annotations for {video_id} from server");
                let _ = self
                    .channel
                    .push(tab_id, AgentPush::AnnotationsReceived { xml: payload })
                    .await;
            }
            Err(err) => {
                restorer_info!("Annotation data is unavailable for this video ({video_id}): {err}");
                let _ = self
                    .channel
                    .push(tab_id, AgentPush::AnnotationsUnavailable)
                    .await;
            }
        }
    }

    /// Awaited description check. A missing agent or an unexpected reply
    /// counts as "not found" so the fetch still runs.
    async fn description_has_annotations(&self, tab_id: TabId) -> bool {
        match self
            .channel
            .request(tab_id, AgentRequest::CheckDescriptionForAnnotations)
            .await
        {
            Ok(AgentReply::DescriptionChecked { found_annotations }) => found_annotations,
            _ => false,
        }
    }
}
