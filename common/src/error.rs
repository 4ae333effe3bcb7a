//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTPレスポンスが成功ステータスでなかった
    #[error("HTTP status {0}")]
    Status(u16),

    /// リクエスト自体が送れなかった（ネットワーク断など）
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_status() {
        let error = Error::Status(500);
        assert_eq!(format!("{}", error), "HTTP status 500");
    }

    #[test]
    fn test_error_display_transport() {
        let error = Error::Transport("connection refused".to_string());
        assert_eq!(format!("{}", error), "Transport error: connection refused");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Status(404);
        let debug = format!("{:?}", error);
        assert!(debug.contains("Status"));
        assert!(debug.contains("404"));
    }
}
