//! Media file downloading.

use std::path::{Path, PathBuf};

use futures::{Stream, StreamExt};
use indicatif::ProgressBar;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::SiteClient;
use crate::config::Config;
use crate::download::state::DownloadState;
use crate::error::{Error, Result};
use crate::fs::{
    ensure_media_dirs, filename_from_url, get_media_folder, get_profile_folder, hidden_filename,
};
use crate::media::Post;
use crate::output::create_download_bar;

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Download every post's media below `destination_root/<profile>/`, in order.
///
/// Files already present under their final name are skipped without any request.
pub async fn download_all(
    api: &SiteClient,
    config: &Config,
    state: &mut DownloadState,
    posts: &[Post],
    destination_root: &Path,
) -> Result<()> {
    let profile_folder = get_profile_folder(destination_root, &state.profile)?;
    ensure_media_dirs(&profile_folder).await?;
    state.profile_folder = profile_folder.clone();

    tracing::info!(
        "Downloading {} items to {}",
        posts.len(),
        profile_folder.display()
    );

    for post in posts {
        download_media_item(api, config, state, post, &profile_folder).await?;
    }

    tracing::info!(
        "Download complete: {} images, {} videos, {} skipped",
        state.image_count,
        state.video_count,
        state.skipped_count
    );

    Ok(())
}

/// Download the media of one post into its kind's folder.
///
/// Returns the final path, or `None` when the file already existed.
pub async fn download_media_item(
    api: &SiteClient,
    config: &Config,
    state: &mut DownloadState,
    post: &Post,
    profile_folder: &Path,
) -> Result<Option<PathBuf>> {
    let folder = get_media_folder(profile_folder, post.kind());
    let filename = filename_from_url(post.media_url())?;
    let output_path = folder.join(&filename);

    if output_path.exists() {
        state.increment_skipped();
        if config.options.show_skipped_downloads {
            tracing::info!("File already exists: {}", output_path.display());
        } else {
            tracing::debug!("File already exists: {}", output_path.display());
        }
        return Ok(None);
    }

    if config.options.show_downloads {
        tracing::info!("Downloading {}", output_path.display());
    }

    let response = api.download_file(post.media_url()).await?;

    let progress = match response.content_length() {
        Some(length) if config.options.show_downloads && length > PROGRESS_THRESHOLD => {
            Some(create_download_bar(length))
        }
        _ => None,
    };

    write_stream_atomically(response.bytes_stream(), &output_path, progress.as_ref()).await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    state.record_download(post.kind());

    Ok(Some(output_path))
}

/// Stream chunks into a hidden file next to `output_path`, then rename it into place.
///
/// Nothing is ever visible under `output_path` until every chunk has been written.
pub async fn write_stream_atomically<S, B, E>(
    stream: S,
    output_path: &Path,
    progress: Option<&ProgressBar>,
) -> Result<()>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<Error>,
{
    let filename = output_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::InvalidFilename(output_path.display().to_string()))?;
    let hidden_path = output_path.with_file_name(hidden_filename(filename));

    let mut file = File::create(&hidden_path).await?;
    let mut stream = std::pin::pin!(stream);
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(Into::<Error>::into)?;
        let bytes = chunk.as_ref();
        file.write_all(bytes).await?;
        downloaded += bytes.len() as u64;

        if let Some(pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;
    file.sync_all().await?;
    drop(file);

    tokio::fs::rename(&hidden_path, output_path).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SessionConfig;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, SiteClient, Vec<Post>) {
        let server = MockServer::start().await;
        let session = SessionConfig {
            session_token: "token".to_string(),
            user_agent: "TestAgent/1.0".to_string(),
            base_url: Url::parse(&format!("{}/", server.uri())).unwrap(),
        };
        let client = SiteClient::new(&session).unwrap();

        Mock::given(method("GET"))
            .and(path("/files/photo.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpeg-bytes".to_vec()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/files/clip.mp4"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"mp4-bytes".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let posts = vec![
            Post::image(
                "1",
                "creator",
                "",
                format!("{}/files/photo.jpg?Expires=1", server.uri()),
            ),
            Post::video(
                "2",
                "creator",
                "clip",
                format!("{}/files/clip.mp4", server.uri()),
                format!("{}/files/clip.jpg", server.uri()),
            ),
        ];

        (server, client, posts)
    }

    #[tokio::test]
    async fn test_download_all_sorts_by_kind() {
        let (server, client, posts) = setup().await;
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();

        let mut state = DownloadState::new("creator".into());
        download_all(&client, &config, &mut state, &posts, dir.path())
            .await
            .unwrap();

        let root = dir.path().join("creator");
        assert_eq!(
            std::fs::read(root.join("images/photo.jpg")).unwrap(),
            b"jpeg-bytes"
        );
        assert_eq!(
            std::fs::read(root.join("videos/clip.mp4")).unwrap(),
            b"mp4-bytes"
        );
        assert!(!root.join("images/.photo.jpg").exists());
        assert_eq!(state.image_count, 1);
        assert_eq!(state.video_count, 1);
        assert_eq!(state.profile_folder, root);

        server.verify().await;
    }

    #[tokio::test]
    async fn test_second_run_transfers_nothing() {
        let (server, client, posts) = setup().await;
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();

        let mut first = DownloadState::new("creator".into());
        download_all(&client, &config, &mut first, &posts, dir.path())
            .await
            .unwrap();
        assert_eq!(first.total_downloaded(), 2);

        let requests_after_first = server.received_requests().await.unwrap().len();

        let mut second = DownloadState::new("creator".into());
        download_all(&client, &config, &mut second, &posts, dir.path())
            .await
            .unwrap();

        assert_eq!(second.total_downloaded(), 0);
        assert_eq!(second.skipped_count, 2);
        assert_eq!(
            server.received_requests().await.unwrap().len(),
            requests_after_first
        );

        server.verify().await;
    }

    #[tokio::test]
    async fn test_double_dot_filename_is_downloaded() {
        let server = MockServer::start().await;
        let session = SessionConfig {
            session_token: "token".to_string(),
            user_agent: "TestAgent/1.0".to_string(),
            base_url: Url::parse(&format!("{}/", server.uri())).unwrap(),
        };
        let client = SiteClient::new(&session).unwrap();
        for (file, body) in [("/files/shot..final.jpg", "first"), ("/files/ok.jpg", "second")] {
            Mock::given(method("GET"))
                .and(path(file))
                .respond_with(ResponseTemplate::new(200).set_body_string(body))
                .expect(1)
                .mount(&server)
                .await;
        }

        let dir = tempfile::tempdir().unwrap();
        let posts = vec![
            Post::image("1", "creator", "", format!("{}/files/shot..final.jpg", server.uri())),
            Post::image("2", "creator", "", format!("{}/files/ok.jpg", server.uri())),
        ];
        let mut state = DownloadState::new("creator".into());

        download_all(&client, &Config::default(), &mut state, &posts, dir.path())
            .await
            .unwrap();

        let images = dir.path().join("creator/images");
        assert_eq!(
            std::fs::read_to_string(images.join("shot..final.jpg")).unwrap(),
            "first"
        );
        assert_eq!(std::fs::read_to_string(images.join("ok.jpg")).unwrap(), "second");
        assert_eq!(state.image_count, 2);

        server.verify().await;
    }

    #[tokio::test]
    async fn test_interrupted_stream_leaves_no_final_file() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("clip.mp4");

        let chunks: Vec<std::result::Result<Vec<u8>, Error>> = vec![
            Ok(b"partial".to_vec()),
            Err(Error::Download("connection reset".into())),
            Ok(b"never written".to_vec()),
        ];
        let result =
            write_stream_atomically(futures::stream::iter(chunks), &output_path, None).await;

        assert!(matches!(result, Err(Error::Download(_))));
        assert!(!output_path.exists());
        assert_eq!(
            std::fs::read(dir.path().join(".clip.mp4")).unwrap(),
            b"partial"
        );
    }

    #[tokio::test]
    async fn test_complete_stream_is_renamed() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("photo.jpg");

        let chunks: Vec<std::result::Result<Vec<u8>, Error>> =
            vec![Ok(b"ab".to_vec()), Ok(b"cd".to_vec())];
        write_stream_atomically(futures::stream::iter(chunks), &output_path, None)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&output_path).unwrap(), b"abcd");
        assert!(!dir.path().join(".photo.jpg").exists());
    }

    #[tokio::test]
    async fn test_failed_transfer_aborts() {
        let server = MockServer::start().await;
        let session = SessionConfig {
            session_token: "token".to_string(),
            user_agent: "TestAgent/1.0".to_string(),
            base_url: Url::parse(&format!("{}/", server.uri())).unwrap(),
        };
        let client = SiteClient::new(&session).unwrap();
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let posts = vec![Post::image(
            "1",
            "creator",
            "",
            format!("{}/files/broken.jpg", server.uri()),
        )];
        let mut state = DownloadState::new("creator".into());

        let result =
            download_all(&client, &Config::default(), &mut state, &posts, dir.path()).await;

        assert!(matches!(result, Err(Error::Download(_))));
        assert!(!dir.path().join("creator/images/broken.jpg").exists());
    }
}
