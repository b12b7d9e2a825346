use std::sync::{Mutex, Once};
use std::time::Duration;

use restorer_core::{ContentStatus, PopupVisual, StatusPayload, VideoId};
use restorer_engine::{
    run_popup_session, AgentPush, AgentReply, AgentRequest, ContentChannel, DownloadHost,
    NoResponder, PopupInput, TabId, CACHE_MANAGER_PAGE, DEFAULT_ARCHIVE_ENDPOINT,
};
use tokio::sync::mpsc;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(restorer_logging::initialize_for_tests);
}

/// Content agent double for the popup side of the channel.
struct PopupChannel {
    popup_data: Option<ContentStatus>,
    agent_present: bool,
    pushes: Mutex<Vec<AgentPush>>,
}

impl PopupChannel {
    fn with_status(status: ContentStatus) -> Self {
        Self {
            popup_data: Some(status),
            agent_present: true,
            pushes: Mutex::new(Vec::new()),
        }
    }

    fn absent() -> Self {
        Self {
            popup_data: None,
            agent_present: false,
            pushes: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ContentChannel for PopupChannel {
    async fn request(
        &self,
        tab_id: TabId,
        request: AgentRequest,
    ) -> Result<AgentReply, NoResponder> {
        if !self.agent_present {
            return Err(NoResponder { tab_id });
        }
        Ok(match request {
            AgentRequest::GetPopupData => AgentReply::PopupData(self.popup_data.clone()),
            AgentRequest::VideoChange => AgentReply::CurrentVideo(None),
            AgentRequest::CheckDescriptionForAnnotations => AgentReply::DescriptionChecked {
                found_annotations: false,
            },
        })
    }

    async fn push(&self, tab_id: TabId, push: AgentPush) -> Result<(), NoResponder> {
        if !self.agent_present {
            return Err(NoResponder { tab_id });
        }
        self.pushes.lock().unwrap().push(push);
        Ok(())
    }
}

/// Download host double that grants every permission prompt.
#[derive(Default)]
struct GrantingHost {
    downloads: Mutex<Vec<(String, String)>>,
    opened_tabs: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl DownloadHost for GrantingHost {
    async fn has_download_permission(&self) -> bool {
        true
    }

    async fn request_download_permission(&self) -> bool {
        true
    }

    async fn start_download(&self, url: &str, filename: &str) {
        self.downloads
            .lock()
            .unwrap()
            .push((url.to_owned(), filename.to_owned()));
    }

    async fn open_in_tab(&self, url: &str) {
        self.opened_tabs.lock().unwrap().push(url.to_owned());
    }
}

fn loaded_status(id: &str) -> ContentStatus {
    ContentStatus::AnnotationsLoaded(StatusPayload {
        video_id: VideoId::parse(id).unwrap(),
        annotations: Vec::new(),
    })
}

#[tokio::test]
async fn initial_pull_drives_the_first_render() {
    init_logging();
    let channel = PopupChannel::with_status(loaded_status("dQw4w9WgXcQ"));
    let host = GrantingHost::default();
    let (inputs_tx, inputs_rx) = mpsc::channel(4);
    drop(inputs_tx);

    let mut views = Vec::new();
    let state = run_popup_session(
        &channel,
        &host,
        DEFAULT_ARCHIVE_ENDPOINT,
        1,
        inputs_rx,
        |view| views.push(view.clone()),
    )
    .await;

    assert_eq!(state.view().visual, PopupVisual::Video);
    assert_eq!(views.len(), 1);
    assert_eq!(
        views[0].video_id,
        Some(VideoId::parse("dQw4w9WgXcQ").unwrap())
    );
}

#[tokio::test]
async fn missing_content_agent_never_renders() {
    init_logging();
    let channel = PopupChannel::absent();
    let host = GrantingHost::default();
    let (inputs_tx, inputs_rx) = mpsc::channel(4);
    drop(inputs_tx);

    let mut views = Vec::new();
    let state = run_popup_session(
        &channel,
        &host,
        DEFAULT_ARCHIVE_ENDPOINT,
        1,
        inputs_rx,
        |view| views.push(view.clone()),
    )
    .await;

    assert_eq!(state.view().visual, PopupVisual::Unset);
    assert!(views.is_empty());
}

#[tokio::test]
async fn user_actions_reach_the_channel_and_the_host() {
    init_logging();
    let channel = PopupChannel::with_status(loaded_status("aB3xY7z9abc"));
    let host = GrantingHost::default();
    let (inputs_tx, inputs_rx) = mpsc::channel(4);

    let session = run_popup_session(
        &channel,
        &host,
        DEFAULT_ARCHIVE_ENDPOINT,
        1,
        inputs_rx,
        |_| {},
    );
    let driver = async {
        inputs_tx
            .send(PopupInput::TimeClicked { seconds: 45.9 })
            .await
            .unwrap();
        inputs_tx.send(PopupInput::DownloadClicked).await.unwrap();
        inputs_tx
            .send(PopupInput::ManageCacheClicked)
            .await
            .unwrap();
        drop(inputs_tx);
    };
    let (_state, ()) = tokio::join!(session, driver);

    assert_eq!(
        channel.pushes.lock().unwrap().as_slice(),
        &[AgentPush::SeekTo { seconds: 45.9 }]
    );
    let downloads = host.downloads.lock().unwrap();
    assert_eq!(downloads.len(), 1);
    assert!(downloads[0].0.ends_with("/a/aB3/aB3xY7z9abc.xml.gz"));
    assert_eq!(downloads[0].1, "annotations_aB3xY7z9abc.xml");
    assert_eq!(
        host.opened_tabs.lock().unwrap().as_slice(),
        &[CACHE_MANAGER_PAGE.to_owned()]
    );
}

#[tokio::test(start_paused = true)]
async fn rapid_status_push_defers_until_the_timer_fires() {
    init_logging();
    let channel = PopupChannel::with_status(ContentStatus::CheckingForAnnotations);
    let host = GrantingHost::default();
    let (inputs_tx, inputs_rx) = mpsc::channel(4);

    let mut views = Vec::new();
    let session = run_popup_session(
        &channel,
        &host,
        DEFAULT_ARCHIVE_ENDPOINT,
        1,
        inputs_rx,
        |view| views.push(view.clone()),
    );
    let driver = async {
        // Pushed right after the initial applied transition: deferred.
        inputs_tx
            .send(PopupInput::Status(ContentStatus::NoVideo))
            .await
            .unwrap();
        // Keep the popup open past the debounce window.
        tokio::time::sleep(Duration::from_millis(400)).await;
        drop(inputs_tx);
    };
    let (state, ()) = tokio::join!(session, driver);

    assert_eq!(state.view().visual, PopupVisual::NoVideo);
    let visuals: Vec<PopupVisual> = views.iter().map(|view| view.visual).collect();
    assert_eq!(
        visuals,
        vec![PopupVisual::CheckingAnnotations, PopupVisual::NoVideo]
    );
}
