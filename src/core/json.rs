//! Estrattore JSON che trasforma i rifiuti di axum in `AppError`

use crate::core::AppError;
use axum_macros::FromRequest;

/// Same as `axum::Json`, but a body that fails to decode becomes a
/// `400` with the usual `{error, details}` body instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
