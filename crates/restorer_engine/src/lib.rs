//! Restorer engine: IO layer for annotation fetching, tab coordination and
//! archive download dispatch.
mod archive;
mod coordinator;
mod download;
mod fetch;
mod messaging;
mod popup;
mod types;

pub use archive::{archive_filename, archive_url, DEFAULT_ARCHIVE_ENDPOINT};
pub use coordinator::{TabCoordinator, TabEvent, TabStatus};
pub use download::{
    dispatch_download, open_cache_manager, DownloadHost, DownloadOutcome, CACHE_MANAGER_PAGE,
};
pub use fetch::{AnnotationSource, FetchSettings, HttpAnnotationSource, DEFAULT_ANNOTATIONS_ENDPOINT};
pub use messaging::{AgentPush, AgentReply, AgentRequest, ContentChannel, NoResponder};
pub use popup::{run_popup_session, PopupInput};
pub use types::{FailureKind, FetchError, TabId};
