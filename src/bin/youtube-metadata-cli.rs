use eyre::Context;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_metadata::{
    Credential, FetchSelection, PlaylistRecord, VideoRecord, YouTubeClient, export_filename,
    fetch_metadata,
};

const USAGE: &str = "\
Fetch a YouTube channel's playlist and video metadata and export it as JSON.

Credentials come from the environment: either YOUTUBE_API_KEY together with
YOUTUBE_CHANNEL_ID, or YOUTUBE_ACCESS_TOKEN for the authenticated user's own
channel.

Options:
  --no-playlists            skip the playlists listing
  --no-videos               skip the videos listing
  --playlist-descriptions   include playlist descriptions
  --video-descriptions      include video descriptions
  --descriptions            include both kinds of descriptions
  --exclude-shorts          drop videos of 60 seconds or less
  --output <path>           where to write the JSON export
                            (default: youtube-metadata-<date>.json)
  --help                    show this help";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let mut selection = FetchSelection::default();
    let mut output: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-playlists" => selection.playlists = false,
            "--no-videos" => selection.videos = false,
            "--playlist-descriptions" => selection.playlist_descriptions = true,
            "--video-descriptions" => selection.video_descriptions = true,
            "--descriptions" => {
                selection.playlist_descriptions = true;
                selection.video_descriptions = true;
            }
            "--exclude-shorts" => selection.include_shorts = false,
            "--output" => {
                let path = args
                    .next()
                    .ok_or_else(|| eyre::eyre!("--output requires a path"))?;
                output = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            other => eyre::bail!("unrecognized argument: {other} (try --help)"),
        }
    }

    if !selection.playlists && !selection.videos {
        eyre::bail!("nothing to fetch: both playlists and videos are disabled");
    }

    let credential = Credential::resolve(
        std::env::var("YOUTUBE_API_KEY").ok(),
        std::env::var("YOUTUBE_CHANNEL_ID").ok(),
        std::env::var("YOUTUBE_ACCESS_TOKEN").ok(),
    )
    .context("resolve credentials from the environment")?;

    let client = YouTubeClient::new(credential);
    let results = fetch_metadata(&client, selection)
        .await
        .context("fetch channel metadata")?;

    if results.is_empty() {
        eprintln!("no results found");
    } else {
        print_playlists(&results.playlists);
        print_videos(&results.videos);
    }

    let path = output
        .unwrap_or_else(|| PathBuf::from(export_filename(jiff::Timestamp::now())));
    results
        .write_json(&path)
        .await
        .with_context(|| format!("write JSON export to {}", path.display()))?;
    eprintln!("wrote {}", path.display());

    Ok(())
}

fn print_playlists(playlists: &[PlaylistRecord]) {
    if playlists.is_empty() {
        return;
    }

    println!("Playlists");
    let id_width = column_width("ID", playlists.iter().map(|p| p.id.len()));
    let title_width = column_width("Title", playlists.iter().map(|p| p.title.len()));
    // Per the result-set invariant, the first record tells us whether any
    // record carries a description.
    let with_descriptions = playlists[0].description.is_some();

    print!("  {:<id_width$}  {:<title_width$}  {:>10}", "ID", "Title", "Item Count");
    println!("{}", if with_descriptions { "  Description" } else { "" });
    for playlist in playlists {
        print!(
            "  {:<id_width$}  {:<title_width$}  {:>10}",
            playlist.id, playlist.title, playlist.item_count
        );
        match &playlist.description {
            Some(description) => println!("  {description}"),
            None => println!(),
        }
    }
    println!();
}

fn print_videos(videos: &[VideoRecord]) {
    if videos.is_empty() {
        return;
    }

    println!("Videos");
    let id_width = column_width("ID", videos.iter().map(|v| v.id.len()));
    let title_width = column_width("Title", videos.iter().map(|v| v.title.len()));
    let with_descriptions = videos[0].description.is_some();

    print!("  {:<id_width$}  {:<title_width$}  {:<20}", "ID", "Title", "Published At");
    println!("{}", if with_descriptions { "  Description" } else { "" });
    for video in videos {
        let published_at = video.published_at.to_string();
        print!(
            "  {:<id_width$}  {:<title_width$}  {:<20}",
            video.id, video.title, published_at
        );
        match &video.description {
            Some(description) => println!("  {description}"),
            None => println!(),
        }
    }
    println!();
}

fn column_width(header: &str, lengths: impl Iterator<Item = usize>) -> usize {
    lengths.chain(std::iter::once(header.len())).max().unwrap_or(0)
}
