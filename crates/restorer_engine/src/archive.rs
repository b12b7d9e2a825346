use restorer_core::VideoId;

/// Default base URL of the annotation archive bucket.
pub const DEFAULT_ARCHIVE_ENDPOINT: &str =
    "https://storage.googleapis.com/biggest_bucket/annotations";

/// Resolves the direct-file URL of a video's archived annotation track.
///
/// The archive shards by identifier prefix: the first character selects the
/// top-level directory and the first three characters the second level.
/// Identifiers starting with `-` were misplaced in the bucket, so that top
/// shard is remapped to `-/ar-`.
pub fn archive_url(base: &str, video_id: &VideoId) -> String {
    let id = video_id.as_str();
    let first = id.chars().next().unwrap_or_default();
    let top_shard = if first == '-' {
        "-/ar-".to_string()
    } else {
        first.to_string()
    };
    let prefix: String = id.chars().take(3).collect();

    format!(
        "{}/{top_shard}/{prefix}/{id}.xml.gz",
        base.trim_end_matches('/')
    )
}

/// Local filename suggested for a downloaded annotation file.
pub fn archive_filename(video_id: &VideoId) -> String {
    format!("annotations_{video_id}.xml")
}
