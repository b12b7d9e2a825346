mod config;
mod render;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use restorer_core::{
    parse_annotation_list, update, ContentStatus, Msg, PopupState, StatusPayload, VideoId,
};
use restorer_engine::{archive_url, AnnotationSource, FetchSettings, HttpAnnotationSource};
use restorer_logging::LogDestination;

#[derive(Parser)]
#[command(
    name = "annotation-restorer",
    about = "Fetches archived video-annotation data and renders annotation tables."
)]
struct Cli {
    /// Path to a RON config file (defaults to ./restorer.ron).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Also write logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the raw annotation payload for a video and print it.
    Fetch { video_id: String },
    /// Print the sharded archive URL of a video's annotation file.
    ArchiveUrl { video_id: String },
    /// Render the annotation table for a JSON annotation list (file or stdin).
    Render {
        video_id: String,
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.log_file {
        Some(path) => restorer_logging::initialize(LogDestination::FileAndTerminal(path.as_path())),
        None => restorer_logging::initialize(LogDestination::Terminal),
    }
    let config = config::AppConfig::load(cli.config.as_deref());

    match cli.command {
        Command::Fetch { video_id } => {
            let source = HttpAnnotationSource::new(FetchSettings {
                endpoint: config.annotations_endpoint,
            })?;
            let payload = source
                .fetch(&video_id)
                .await
                .context("annotation fetch failed")?;
            println!("{payload}");
        }
        Command::ArchiveUrl { video_id } => {
            let video_id = VideoId::parse(&video_id)?;
            println!("{}", archive_url(&config.archive_endpoint, &video_id));
        }
        Command::Render { video_id, file } => {
            let video_id = VideoId::parse(&video_id)?;
            let json = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading annotation list from {path:?}"))?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("reading annotation list from stdin")?;
                    buffer
                }
            };
            let annotations =
                parse_annotation_list(&json).context("parsing annotation list")?;
            let status = ContentStatus::AnnotationsLoaded(StatusPayload {
                video_id,
                annotations,
            });
            let (state, _effects) =
                update(PopupState::new(), Msg::StatusReceived { status, at_ms: 0 });
            print!("{}", render::render(&state.view()));
        }
    }

    Ok(())
}
