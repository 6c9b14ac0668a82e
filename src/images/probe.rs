/// Screenshot probes
///
/// A probe answers one question for one candidate: does it load? The
/// production probe reads local files relative to the site root (or
/// fetches http(s) URLs) and decodes them, so a loaded candidate comes
/// back as a ready-to-draw iced image handle.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use iced::widget::image::Handle;
use reqwest::header::CACHE_CONTROL;

use crate::error::{PortfolioError, Result};

const USER_AGENT: &str = "PortfolioViewer/0.1.0";

/// Upper bound for a single HTTP probe; the resolver's own deadline is
/// usually much shorter
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Checks whether a single candidate loads
pub trait Probe: Send + Sync + 'static {
    /// What a successful probe yields
    type Image: Clone + Send + 'static;

    fn probe(&self, candidate: &str) -> impl Future<Output = Result<Self::Image>> + Send;
}

/// Is this candidate a remote URL rather than a site-relative path?
pub fn is_http_url(candidate: &str) -> bool {
    let lower = candidate.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Probes candidates of one portfolio site
#[derive(Debug, Clone)]
pub struct SiteProbe {
    root: PathBuf,
    client: reqwest::Client,
}

impl SiteProbe {
    /// Create a probe resolving relative candidates against `root`
    pub fn new(root: PathBuf) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self { root, client })
    }

    /// Local file a relative candidate points at
    pub fn locate(&self, candidate: &str) -> PathBuf {
        self.root.join(candidate.trim_start_matches('/'))
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::Status(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl Probe for SiteProbe {
    type Image = Handle;

    fn probe(&self, candidate: &str) -> impl Future<Output = Result<Handle>> + Send {
        async move {
            let bytes = if is_http_url(candidate) {
                self.fetch(candidate.trim()).await?
            } else {
                tokio::fs::read(self.locate(candidate)).await?
            };
            decode(bytes).await
        }
    }
}

/// Decode on the blocking pool; only bytes that decode count as loaded
async fn decode(bytes: Vec<u8>) -> Result<Handle> {
    tokio::task::spawn_blocking(move || -> Result<Handle> {
        image::load_from_memory(&bytes)?;
        Ok(Handle::from_bytes(bytes))
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_png(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        image::RgbImage::from_pixel(4, 3, image::Rgb([200, 40, 40]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://drive.google.com/file/d/abc/view"));
        assert!(is_http_url("HTTP://example.com/a.png"));
        assert!(!is_http_url("images/projects/qr1.png"));
        assert!(!is_http_url("httpdocs/a.png"));
    }

    #[test]
    fn test_locate_is_relative_to_root() {
        let probe = SiteProbe::new(PathBuf::from("/srv/site")).unwrap();
        assert_eq!(
            probe.locate("images/projects/qr1.png"),
            PathBuf::from("/srv/site/images/projects/qr1.png")
        );
        assert_eq!(probe.locate("/images/a.png"), PathBuf::from("/srv/site/images/a.png"));
    }

    #[tokio::test]
    async fn test_existing_image_loads() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("images/projects/qr1.png"));

        let probe = SiteProbe::new(dir.path().to_path_buf()).unwrap();
        assert!(probe.probe("images/projects/qr1.png").await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_image_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let probe = SiteProbe::new(dir.path().to_path_buf()).unwrap();

        match probe.probe("images/projects/qr99.png").await {
            Err(PortfolioError::Io(_)) => {}
            other => panic!("Expected PortfolioError::Io, got: {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_undecodable_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not an image at all").unwrap();

        let probe = SiteProbe::new(dir.path().to_path_buf()).unwrap();
        match probe.probe("broken.png").await {
            Err(PortfolioError::Image(_)) => {}
            other => panic!("Expected PortfolioError::Image, got: {:?}", other.map(|_| ())),
        }
    }
}
