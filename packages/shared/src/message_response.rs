//! # メッセージレスポンス
//!
//! フォーム受付 API の統一レスポンス形式 `{ "message": ..., "error"?: ... }` を提供する。
//!
//! ## 設計
//!
//! - 成功時・バリデーションエラー時は `message` のみを返す
//! - 配送失敗時は `error` に送信基盤のエラー詳細をそのまま載せる
//! - axum の `IntoResponse` 変換は各サービスの責務（shared に axum 依存を入れない）

use serde::{Deserialize, Serialize};

/// フォーム受付 API のレスポンス型
///
/// ## 使用例
///
/// ```
/// use formrelay_shared::MessageResponse;
///
/// let response = MessageResponse::new("Contact message sent successfully!");
/// assert!(response.error.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// 利用者向けのメッセージ
    pub message: String,
    /// 失敗時のエラー詳細
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:   Option<String>,
}

impl MessageResponse {
    /// メッセージのみのレスポンスを作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error:   None,
        }
    }

    /// エラー詳細付きのレスポンスを作成する
    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error:   Some(error.into()),
        }
    }
}
