//! Request extractors whose rejections render as [`AppError`] JSON.
//!
//! Drop-in replacements for axum's `Path` and `Query`, so a malformed id or
//! query string yields the same `{error, code}` body as every other 400.

use axum::extract::FromRequestParts;

use crate::error::AppError;

/// [`axum::extract::Path`] rejecting with [`AppError::BadRequest`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// [`axum::extract::Query`] rejecting with [`AppError::BadRequest`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);
