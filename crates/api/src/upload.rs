//! Local-disk storage for uploaded and generated files.
//!
//! Files are written under `{root}/{category}/` and addressed publicly as
//! `/uploads/{category}/{filename}`, matching the static mount in the router.

use std::path::{Path, PathBuf};

use restro3d_core::types::DbId;
use restro3d_core::uploads::{self, UploadCategory, GLB_EXTENSION};

use crate::error::{AppError, AppResult};
use crate::form::FileUpload;

/// Writes uploads beneath a root directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root and every category subdirectory if missing.
    pub async fn ensure_dirs(&self) -> std::io::Result<()> {
        for category in UploadCategory::ALL {
            tokio::fs::create_dir_all(self.root.join(category.dir_name())).await?;
        }
        Ok(())
    }

    /// Filesystem path for `filename` in `category`.
    pub fn path_for(&self, category: UploadCategory, filename: &str) -> PathBuf {
        self.root.join(category.dir_name()).join(filename)
    }

    /// Write `data` to `category/filename`, replacing any existing file.
    /// Returns the public URL.
    pub async fn write(
        &self,
        category: UploadCategory,
        filename: &str,
        data: &[u8],
    ) -> AppResult<String> {
        let path = self.path_for(category, filename);
        tokio::fs::write(&path, data).await.map_err(|e| {
            AppError::InternalError(format!("Failed to write {}: {e}", path.display()))
        })?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "Stored upload");
        Ok(uploads::public_url(category, filename))
    }

    /// Store an image (logo or menu item photo) under a generated name that
    /// keeps the client's extension. Returns the public URL.
    pub async fn store_image(&self, file: &FileUpload) -> AppResult<String> {
        let ext = uploads::file_extension(&file.filename);
        let filename = uploads::unique_filename(&ext);
        self.write(UploadCategory::Images, &filename, &file.data).await
    }

    /// Store a 3D model. Rejects anything not named `*.glb`. Returns the
    /// public URL.
    pub async fn store_glb(&self, file: &FileUpload) -> AppResult<String> {
        uploads::validate_glb_filename(&file.filename)?;
        let filename = uploads::unique_filename(GLB_EXTENSION);
        self.write(UploadCategory::Glb, &filename, &file.data).await
    }

    /// Store a restaurant's QR code PNG, replacing any earlier one.
    /// Returns the public URL.
    pub async fn store_qr_code(&self, restaurant_id: DbId, png: &[u8]) -> AppResult<String> {
        let filename = uploads::qr_filename(restaurant_id);
        self.write(UploadCategory::QrCodes, &filename, png).await
    }

    /// Filesystem path of a restaurant's QR code PNG (which may not exist).
    pub fn qr_code_path(&self, restaurant_id: DbId) -> PathBuf {
        self.path_for(UploadCategory::QrCodes, &uploads::qr_filename(restaurant_id))
    }
}
