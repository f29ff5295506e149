//! Upload storage for the media collection.
//!
//! Source files are copied into a static directory; the database row only
//! keeps the stored file name, MIME type, size and public URL.

use std::path::{Path, PathBuf};

use mime_guess::mime;
use tokio::fs;

use common::{AppError, AppResult, MediaConfig};
use domain::MEDIA_URL_PREFIX;

/// Metadata of a file copied into the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub filename: String,
    pub mime_type: String,
    pub filesize: i64,
    pub url: String,
}

/// Filesystem-backed upload directory.
#[derive(Debug, Clone)]
pub struct MediaStorage {
    static_dir: PathBuf,
    server_url: Option<String>,
}

impl MediaStorage {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            static_dir: config.static_dir.clone(),
            server_url: config
                .server_url
                .as_deref()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        }
    }

    /// Copy an image into the upload directory.
    ///
    /// Only `image/*` files are accepted. When the name is already taken a
    /// numeric suffix is appended (`photo-1.gif`, `photo-2.gif`, ...).
    pub async fn store(&self, source: &Path) -> AppResult<StoredFile> {
        let original = source
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::validation("upload source has no file name"))?;

        let mime_type = mime_guess::from_path(source)
            .first()
            .filter(|m| m.type_() == mime::IMAGE)
            .ok_or_else(|| {
                AppError::validation(format!("{} is not an accepted image type", original))
            })?;

        fs::create_dir_all(&self.static_dir).await?;
        let filename = self.available_name(original).await?;
        let filesize = fs::copy(source, self.static_dir.join(&filename)).await?;

        tracing::debug!(filename = %filename, bytes = filesize, "Stored upload");

        Ok(StoredFile {
            url: self.url_for(&filename),
            filename,
            mime_type: mime_type.essence_str().to_string(),
            filesize: i64::try_from(filesize)
                .map_err(|_| AppError::validation("upload is too large"))?,
        })
    }

    /// Remove a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, filename: &str) -> AppResult<()> {
        match fs::remove_file(self.static_dir.join(filename)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(filename, "Stored upload was already missing");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn url_for(&self, filename: &str) -> String {
        match &self.server_url {
            Some(base) => format!("{}{}/{}", base, MEDIA_URL_PREFIX, filename),
            None => format!("{}/{}", MEDIA_URL_PREFIX, filename),
        }
    }

    async fn available_name(&self, original: &str) -> AppResult<String> {
        if !fs::try_exists(self.static_dir.join(original)).await? {
            return Ok(original.to_string());
        }

        let path = Path::new(original);
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(original);
        let extension = path.extension().and_then(|e| e.to_str());

        for n in 1.. {
            let candidate = match extension {
                Some(ext) => format!("{}-{}.{}", stem, n, ext),
                None => format!("{}-{}", stem, n),
            };
            if !fs::try_exists(self.static_dir.join(&candidate)).await? {
                return Ok(candidate);
            }
        }

        Err(AppError::internal("no free upload file name"))
    }
}
