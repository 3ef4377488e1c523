// SPDX-License-Identifier: MPL-2.0
//! Site content: page copy and the item lists the carousels rotate through.
//!
//! Content is described by a TOML manifest. A default manifest is compiled
//! into the binary; `--content` or `[content] manifest` points at another
//! one. Image file names in the manifest resolve against an asset directory.

use crate::config::ContentConfig;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Manifest compiled into the binary.
pub const EMBEDDED_MANIFEST: &str = include_str!("../../assets/content/site.toml");

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Speaker {
    pub name: String,
    /// Used in "Book Jacob" style labels. Falls back to `name`.
    #[serde(default)]
    pub short_name: Option<String>,
    pub booking_email: String,
    #[serde(default)]
    pub portrait: Option<String>,
}

impl Speaker {
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.booking_email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct About {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub video: Option<VideoDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Keynote {
    pub title: String,
    pub description: String,
}

/// A YouTube video shown by the slideshow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoDescriptor {
    pub id: String,
    pub title: String,
}

impl VideoDescriptor {
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("{YOUTUBE_WATCH_URL}{}", self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Community {
    #[serde(default)]
    pub quote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallToAction {
    pub heading: String,
    pub body: String,
}

/// Everything the page renders.
///
/// List fields default to empty so a manifest can omit them; an empty list
/// then makes the matching carousel fail to mount instead of failing the
/// whole manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub speaker: Speaker,
    pub hero: Hero,
    #[serde(default)]
    pub logos: Vec<String>,
    pub about: About,
    #[serde(default)]
    pub keynotes: Vec<Keynote>,
    #[serde(default)]
    pub videos: Vec<VideoDescriptor>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub community: Community,
    #[serde(default)]
    pub testimonials: Vec<String>,
    pub cta: CallToAction,
}

impl SiteContent {
    /// Parses a manifest.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| Error::Content(err.to_string()))
    }

    /// The manifest compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED_MANIFEST)
    }

    /// Reads and parses a manifest file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|err| Error::Content(format!("{}: {err}", path.display())))?;
        Self::from_toml(&source)
    }

    /// Async variant of [`SiteContent::load_from_path`], used for reloads.
    pub async fn load_from_path_async(path: PathBuf) -> Result<Self> {
        let source = tokio::fs::read_to_string(&path)
            .await
            .map_err(|err| Error::Content(format!("{}: {err}", path.display())))?;
        Self::from_toml(&source)
    }
}

/// An image referenced by the manifest, resolved against the asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub name: String,
    pub path: PathBuf,
    /// Whether the file existed when the reference was resolved.
    pub available: bool,
}

/// Where content is read from and where its images live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSource {
    manifest: Option<PathBuf>,
    asset_dir: PathBuf,
}

impl ContentSource {
    /// Combines the `--content` flag with the `[content]` settings.
    ///
    /// The CLI manifest wins over the configured one. Images resolve against
    /// the configured asset directory, else the manifest's directory, else
    /// the working directory.
    #[must_use]
    pub fn resolve(cli_manifest: Option<PathBuf>, config: &ContentConfig) -> Self {
        let manifest = cli_manifest.or_else(|| config.manifest.clone());
        let asset_dir = config
            .asset_dir
            .clone()
            .or_else(|| {
                manifest
                    .as_deref()
                    .and_then(Path::parent)
                    .map(Path::to_path_buf)
            })
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            manifest,
            asset_dir,
        }
    }

    #[must_use]
    pub fn manifest(&self) -> Option<&Path> {
        self.manifest.as_deref()
    }

    #[must_use]
    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    /// Loads content synchronously (startup path).
    pub fn load(&self) -> Result<SiteContent> {
        match &self.manifest {
            Some(path) => SiteContent::load_from_path(path),
            None => SiteContent::embedded(),
        }
    }

    /// Loads content without blocking the UI thread (reload path).
    pub async fn load_async(self) -> Result<SiteContent> {
        match self.manifest {
            Some(path) => SiteContent::load_from_path_async(path).await,
            None => SiteContent::embedded(),
        }
    }

    #[must_use]
    pub fn image(&self, name: &str) -> ImageRef {
        let path = crate::app::paths::resolve_asset(&self.asset_dir, name);
        let available = path.is_file();
        ImageRef {
            name: name.to_string(),
            path,
            available,
        }
    }

    #[must_use]
    pub fn images(&self, names: &[String]) -> Vec<ImageRef> {
        names.iter().map(|name| self.image(name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn embedded_manifest_has_expected_item_counts() {
        let content = SiteContent::embedded().expect("embedded manifest parses");
        assert_eq!(content.gallery.len(), 11);
        assert_eq!(content.videos.len(), 2);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.keynotes.len(), 3);
        assert_eq!(content.logos.len(), 3);
    }

    #[test]
    fn embedded_manifest_speaker_details() {
        let content = SiteContent::embedded().expect("embedded manifest parses");
        assert_eq!(content.speaker.short_name(), "Jacob");
        assert_eq!(content.speaker.mailto(), "mailto:book@jacobrobinson.com");
        assert_eq!(
            content.videos[0].watch_url(),
            "https://www.youtube.com/watch?v=Q61c6mxmggE"
        );
    }

    #[test]
    fn omitted_lists_default_to_empty() {
        let source = r#"
            [speaker]
            name = "Ada"
            booking_email = "ada@example.com"

            [hero]
            headline = "HELLO"
            tagline = "Hi"

            [about]
            heading = "About"

            [cta]
            heading = "Book"
            body = "Now"
        "#;
        let content = SiteContent::from_toml(source).expect("minimal manifest parses");
        assert!(content.gallery.is_empty());
        assert!(content.videos.is_empty());
        assert_eq!(content.speaker.short_name(), "Ada");
    }

    #[test]
    fn malformed_manifest_is_a_content_error() {
        match SiteContent::from_toml("[speaker\nname = 1") {
            Err(Error::Content(_)) => {}
            other => panic!("expected Content error, got {:?}", other),
        }
    }

    #[test]
    fn missing_manifest_file_is_a_content_error() {
        let temp_dir = tempdir().expect("temp dir");
        let result = SiteContent::load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Content(_))));
    }

    #[test]
    fn source_prefers_cli_manifest_and_its_directory() {
        let config = ContentConfig {
            manifest: Some(PathBuf::from("/etc/podium/site.toml")),
            asset_dir: None,
        };
        let source = ContentSource::resolve(Some(PathBuf::from("/srv/site/site.toml")), &config);
        assert_eq!(source.manifest(), Some(Path::new("/srv/site/site.toml")));
        assert_eq!(source.asset_dir(), Path::new("/srv/site"));
    }

    #[test]
    fn configured_asset_dir_wins() {
        let config = ContentConfig {
            manifest: Some(PathBuf::from("/srv/site/site.toml")),
            asset_dir: Some(PathBuf::from("/srv/photos")),
        };
        let source = ContentSource::resolve(None, &config);
        assert_eq!(source.asset_dir(), Path::new("/srv/photos"));
    }

    #[test]
    fn image_availability_reflects_disk() {
        let temp_dir = tempdir().expect("temp dir");
        std::fs::write(temp_dir.path().join("present.jpeg"), b"jpeg").expect("write image");
        let config = ContentConfig {
            manifest: None,
            asset_dir: Some(temp_dir.path().to_path_buf()),
        };
        let source = ContentSource::resolve(None, &config);

        assert!(source.image("present.jpeg").available);
        assert!(!source.image("absent.jpeg").available);
    }

    #[tokio::test]
    async fn async_load_reads_manifest_from_disk() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("site.toml");
        std::fs::write(&path, EMBEDDED_MANIFEST).expect("write manifest");

        let source = ContentSource::resolve(Some(path), &ContentConfig::default());
        let content = source.load_async().await.expect("manifest loads");
        assert_eq!(content, SiteContent::embedded().expect("embedded parses"));
    }
}
