use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::errors::Error;

/// API错误类型
pub struct AppError(pub anyhow::Error);

pub type Result<T, E = AppError> = std::result::Result<T, E>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 上传本身的问题返回 400，只拒绝当前请求；其余按服务端错误处理
        let status = match self.0.downcast_ref::<Error>() {
            Some(Error::UnreadableImage(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, format!("Something went wrong: {}", self.0)).into_response()
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
