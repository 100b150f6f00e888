use std::path::{Path, PathBuf};

use rand::Rng;
use tokio::fs;
use tracing::info;

use crate::config::UploadConfig;
use crate::constants::uploads::{ALLOWED_IMAGE_EXTENSIONS, MAX_UPLOAD_BYTES};

/// Destination bucket for an uploaded image. Each variant maps to a fixed
/// directory under the upload root; the tag is validated before any path
/// is built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Article,
    Skin,
}

impl UploadKind {
    /// Parse the `uploadType` form tag. An absent tag means article.
    #[must_use]
    pub fn parse(tag: Option<&str>) -> Option<Self> {
        match tag {
            None | Some("article") => Some(Self::Article),
            Some("skin") => Some(Self::Skin),
            Some(_) => None,
        }
    }

    #[must_use]
    pub const fn directory(self) -> &'static str {
        match self {
            Self::Article => "articles/img",
            Self::Skin => "skins/img",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Only image files are allowed")]
    UnsupportedType,

    #[error("File exceeds the {} byte limit", MAX_UPLOAD_BYTES)]
    TooLarge,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub filename: String,

    /// Path relative to the upload root, as stored on entity records.
    pub path: String,
}

pub struct UploadService {
    root: PathBuf,
}

impl UploadService {
    #[must_use]
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            root: PathBuf::from(&config.root_path),
        }
    }

    /// Create the per-kind upload directories if they do not exist yet.
    pub async fn ensure_dirs(&self) -> std::io::Result<()> {
        for kind in [UploadKind::Article, UploadKind::Skin] {
            fs::create_dir_all(self.root.join(kind.directory())).await?;
        }
        Ok(())
    }

    /// Persist one uploaded image under the kind's directory.
    ///
    /// The client-supplied filename contributes only its extension; the
    /// stored name is a timestamp plus a random suffix so concurrent
    /// uploads cannot collide.
    pub async fn save(
        &self,
        kind: UploadKind,
        original_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<StoredUpload, UploadError> {
        let extension = allowed_extension(original_name).ok_or(UploadError::UnsupportedType)?;

        if !is_allowed_content_type(content_type) {
            return Err(UploadError::UnsupportedType);
        }

        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge);
        }

        let filename = generate_filename(extension);
        let relative = format!("{}/{}", kind.directory(), filename);
        let target = self.root.join(kind.directory()).join(&filename);

        fs::write(&target, bytes).await?;

        info!(path = %target.display(), size = bytes.len(), "Stored uploaded image");

        Ok(StoredUpload {
            filename,
            path: relative,
        })
    }
}

/// Extract the extension and check it against the image allow-list.
fn allowed_extension(original_name: &str) -> Option<&str> {
    let extension = Path::new(original_name).extension()?.to_str()?;

    ALLOWED_IMAGE_EXTENSIONS
        .iter()
        .find(|allowed| allowed.eq_ignore_ascii_case(extension))
        .copied()
}

/// The declared content type must itself resolve to an allowed image
/// format; a valid extension with a mismatched type is rejected.
fn is_allowed_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return false;
    };

    ALLOWED_IMAGE_EXTENSIONS.iter().any(|ext| {
        mime_guess::from_ext(ext)
            .first()
            .is_some_and(|mime| mime.essence_str().eq_ignore_ascii_case(content_type))
    })
}

fn generate_filename(extension: &str) -> String {
    let timestamp = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);

    format!("{timestamp}-{suffix:09}.{extension}")
}
