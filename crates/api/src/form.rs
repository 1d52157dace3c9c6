//! Multipart form collection for the create/update endpoints.
//!
//! Browsers submit restaurant and menu item forms as `multipart/form-data`
//! with a mix of text fields and file parts. [`MultipartForm::collect`]
//! drains the stream once, keeping text values and file bytes by field
//! name, so handlers can then pull typed values in any order.

use std::collections::HashMap;
use std::str::FromStr;

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::error::{AppError, AppResult};

/// A file part received from the client.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Filename as sent by the client. Never used as a storage path.
    pub filename: String,
    pub data: Bytes,
}

/// Text fields and file parts from a multipart request, keyed by field name.
///
/// When a field name repeats, the last value wins.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, FileUpload>,
}

impl MultipartForm {
    /// Drain every part of `multipart` into memory.
    ///
    /// Parts carrying a filename are treated as files; a file part with an
    /// empty filename (an untouched `<input type="file">`) is skipped.
    pub async fn collect(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or("").to_string();
            if name.is_empty() {
                continue;
            }

            match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let data = field.bytes().await?;
                    if filename.is_empty() {
                        continue;
                    }
                    form.files.insert(name, FileUpload { filename, data });
                }
                None => {
                    let text = field.text().await?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    /// Optional text field, treating an empty value as absent.
    pub fn non_empty_text(&self, name: &str) -> Option<String> {
        self.fields.get(name).filter(|v| !v.is_empty()).cloned()
    }

    /// Required, non-empty text field.
    pub fn required_text(&self, name: &str) -> AppResult<String> {
        self.non_empty_text(name)
            .ok_or_else(|| AppError::BadRequest(format!("Missing required field '{name}'")))
    }

    /// Optional field parsed with [`FromStr`]. Empty values count as absent.
    pub fn parsed<T: FromStr>(&self, name: &str) -> AppResult<Option<T>> {
        match self.fields.get(name).map(|v| v.trim()) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("Invalid value for '{name}': {raw}"))),
        }
    }

    /// Optional finite float. Rejects `NaN` and infinities.
    pub fn float(&self, name: &str) -> AppResult<Option<f64>> {
        match self.parsed::<f64>(name)? {
            Some(v) if !v.is_finite() => Err(AppError::BadRequest(format!(
                "Invalid value for '{name}': must be a finite number"
            ))),
            other => Ok(other),
        }
    }

    /// Required finite float.
    pub fn required_float(&self, name: &str) -> AppResult<f64> {
        self.float(name)?
            .ok_or_else(|| AppError::BadRequest(format!("Missing required field '{name}'")))
    }

    /// Optional boolean accepting `true/false`, `1/0`, `yes/no`, `on/off`
    /// (case-insensitive).
    pub fn boolean(&self, name: &str) -> AppResult<Option<bool>> {
        match self.fields.get(name).map(|v| v.trim()) {
            None | Some("") => Ok(None),
            Some(raw) => parse_bool(raw)
                .map(Some)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid boolean for '{name}': {raw}"))),
        }
    }

    /// Remove and return a file part.
    pub fn take_file(&mut self, name: &str) -> Option<FileUpload> {
        self.files.remove(name)
    }

    #[cfg(test)]
    fn with_fields(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: HashMap::new(),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
