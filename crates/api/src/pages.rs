//! Server-rendered HTML pages.
//!
//! Templates are compiled into the binary with `include_str!` and registered
//! once at startup; handlers only render.

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Application name shown in page titles.
pub const APP_NAME: &str = "Restro3D";

pub const LANDING_TEMPLATE: &str = "index";
pub const ADMIN_TEMPLATE: &str = "admin";
pub const MENU_TEMPLATE: &str = "menu";

/// Registry of the landing, admin, and customer menu templates.
pub struct PageTemplates {
    engine: Handlebars<'static>,
}

impl PageTemplates {
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(true);

        engine.register_template_string(LANDING_TEMPLATE, include_str!("../templates/index.hbs"))?;
        engine.register_template_string(ADMIN_TEMPLATE, include_str!("../templates/admin.hbs"))?;
        engine.register_template_string(MENU_TEMPLATE, include_str!("../templates/menu.hbs"))?;

        Ok(Self { engine })
    }

    /// Render a registered template. Values are HTML-escaped.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<String> {
        self.engine
            .render(name, data)
            .map_err(|e| AppError::InternalError(format!("Template '{name}' failed: {e}")))
    }
}
