// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::models::time_window::WindowParseError;
use crate::infrastructure::registry::RegistryError;

/// 请求层错误
#[derive(Debug, Error)]
pub enum RequestError {
    /// 请求体不合法
    #[error("Validation error: {0}")]
    Validation(String),
    /// 作业ID无法识别
    #[error("Job not found")]
    UnknownJob,
}

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<RegistryError>() {
            return match err {
                RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
                RegistryError::Finished(_) | RegistryError::Overflow(..) => StatusCode::CONFLICT,
            };
        }
        if let Some(err) = self.0.downcast_ref::<RequestError>() {
            return match err {
                RequestError::Validation(_) => StatusCode::BAD_REQUEST,
                RequestError::UnknownJob => StatusCode::NOT_FOUND,
            };
        }
        if self.0.downcast_ref::<WindowParseError>().is_some() {
            return StatusCode::BAD_REQUEST;
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
