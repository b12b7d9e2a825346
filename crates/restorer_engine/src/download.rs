use restorer_core::VideoId;
use restorer_logging::restorer_info;

use crate::archive::{archive_filename, archive_url};

/// Host-side download capabilities (permission dialog, download manager,
/// tab opening). The popup never talks to the OS directly.
#[async_trait::async_trait]
pub trait DownloadHost: Send + Sync {
    async fn has_download_permission(&self) -> bool;
    /// Prompts the user; returns whether the permission was granted.
    async fn request_download_permission(&self) -> bool;
    async fn start_download(&self, url: &str, filename: &str);
    async fn open_in_tab(&self, url: &str);
}

/// Location of the companion cache-manager page. Its internals live
/// outside this workspace; the popup only opens it.
pub const CACHE_MANAGER_PAGE: &str = "/pages/cache_manager.html";

/// Opens the companion cache-manager page in a new tab.
pub async fn open_cache_manager(host: &dyn DownloadHost) {
    host.open_in_tab(CACHE_MANAGER_PAGE).await;
}

/// How a download request was ultimately served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Downloaded,
    OpenedInTab,
}

/// Resolves the archive URL for `video_id` and dispatches it through the
/// host: existing or freshly granted permission starts a download, a denied
/// permission falls back to opening the URL in a new tab.
pub async fn dispatch_download(
    host: &dyn DownloadHost,
    archive_base: &str,
    video_id: &VideoId,
) -> DownloadOutcome {
    let url = archive_url(archive_base, video_id);

    let granted =
        host.has_download_permission().await || host.request_download_permission().await;

    if granted {
        restorer_info!("Downloading annotation archive for {video_id}");
        host.start_download(&url, &archive_filename(video_id)).await;
        DownloadOutcome::Downloaded
    } else {
        restorer_info!("Download permission denied, opening archive for {video_id} in a tab");
        host.open_in_tab(&url).await;
        DownloadOutcome::OpenedInTab
    }
}
