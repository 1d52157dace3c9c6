use std::sync::Arc;

use crate::config::ServerConfig;
use crate::pages::PageTemplates;
use crate::upload::UploadStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: restro3d_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upload directory writer.
    pub uploads: Arc<UploadStore>,
    /// Compiled HTML page templates.
    pub templates: Arc<PageTemplates>,
}

impl AppState {
    /// Assemble state from a pool and configuration, compiling templates.
    pub fn new(pool: restro3d_db::DbPool, config: ServerConfig) -> Result<Self, handlebars::TemplateError> {
        let uploads = UploadStore::new(config.upload_dir.clone());
        Ok(Self {
            pool,
            config: Arc::new(config),
            uploads: Arc::new(uploads),
            templates: Arc::new(PageTemplates::new()?),
        })
    }
}
