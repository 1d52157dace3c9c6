//! Upload categories, filename generation, and public URL construction.
//!
//! Every uploaded file lands in `{UPLOAD_DIR}/{category}/{filename}` and is
//! exposed verbatim at `/uploads/{category}/{filename}`. Filenames are
//! generated from a random UUID so client-supplied names never reach the
//! filesystem; only a sanitized extension survives.

use uuid::Uuid;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// URL prefix under which the upload directory is mounted.
pub const UPLOADS_MOUNT: &str = "/uploads";

/// Extension required for 3D model uploads.
pub const GLB_EXTENSION: &str = "glb";

/// Filename suffix a 3D model upload must carry.
const GLB_SUFFIX: &str = ".glb";

/// Extension used when a client filename yields no usable extension.
pub const FALLBACK_EXTENSION: &str = "bin";

/// Longest extension kept from a client filename.
const MAX_EXTENSION_LEN: usize = 16;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Subdirectory of the upload root a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadCategory {
    /// 3D models for AR rendering.
    Glb,
    /// Restaurant logos and menu item photos.
    Images,
    /// Generated menu QR codes.
    QrCodes,
}

impl UploadCategory {
    /// Every category, in the order the directories are created at startup.
    pub const ALL: [UploadCategory; 3] = [Self::Glb, Self::Images, Self::QrCodes];

    /// Directory name relative to the upload root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Glb => "glb",
            Self::Images => "images",
            Self::QrCodes => "qr_codes",
        }
    }
}

// ---------------------------------------------------------------------------
// Filenames
// ---------------------------------------------------------------------------

/// Ensure a client filename names a `.glb` model. The suffix is matched
/// exactly, so `model.GLB` is rejected.
pub fn validate_glb_filename(filename: &str) -> Result<(), CoreError> {
    if filename.ends_with(GLB_SUFFIX) {
        Ok(())
    } else {
        Err(CoreError::Validation("Only GLB files are supported".to_string()))
    }
}

/// Extract the extension to keep for a stored upload.
///
/// Takes the text after the last `.` (the whole name when there is no dot),
/// keeps only ASCII alphanumerics, and lowercases it. Falls back to
/// [`FALLBACK_EXTENSION`] when nothing usable remains.
pub fn file_extension(filename: &str) -> String {
    let raw = filename.rsplit('.').next().unwrap_or("");
    let ext: String = raw
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_EXTENSION_LEN)
        .collect::<String>()
        .to_ascii_lowercase();

    if ext.is_empty() {
        FALLBACK_EXTENSION.to_string()
    } else {
        ext
    }
}

/// Generate a collision-resistant filename: `{uuid-v4}.{ext}`.
pub fn unique_filename(extension: &str) -> String {
    format!("{}.{extension}", Uuid::new_v4())
}

/// Deterministic QR code filename for a restaurant. Regenerating overwrites.
pub fn qr_filename(restaurant_id: DbId) -> String {
    format!("qr_{restaurant_id}.png")
}

/// Public URL for a stored file.
pub fn public_url(category: UploadCategory, filename: &str) -> String {
    format!("{UPLOADS_MOUNT}/{}/{filename}", category.dir_name())
}
