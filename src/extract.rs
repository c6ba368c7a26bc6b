use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections rendered as `AppError::BadRequest`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
