//! # Form Intake エラー定義
//!
//! フォーム受付で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー種別 | HTTP ステータス | レスポンス |
//! |-----------|----------------|-----------|
//! | `Validation` | 400 Bad Request | `{ "message" }` |
//! | `Delivery` | 500 Internal Server Error | `{ "message", "error" }` |
//! | `Rendering` | 500 Internal Server Error | `{ "message", "error" }` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use formrelay_domain::{DomainError, inquiry::InquiryKind};
use formrelay_shared::{MessageResponse, event_log::error};
use thiserror::Error;

/// 配送失敗時にクライアントへ返すメッセージ
pub fn delivery_failure_message(kind: InquiryKind) -> &'static str {
    match kind {
        InquiryKind::Consultation => "Failed to send consultation request.",
        InquiryKind::ContactMessage => "Failed to send contact message.",
    }
}

/// Form Intake で発生するエラー
#[derive(Debug, Error)]
pub enum IntakeError {
    /// 必須項目の欠落
    #[error("{0}")]
    Validation(String),

    /// メール送信基盤がエラーを返した
    #[error("{kind} の配送に失敗: {detail}")]
    Delivery { kind: InquiryKind, detail: String },

    /// メール本文の生成に失敗
    #[error("{kind} のメール生成に失敗: {detail}")]
    Rendering { kind: InquiryKind, detail: String },
}

impl From<DomainError> for IntakeError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation(message) => Self::Validation(message),
        }
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            IntakeError::Validation(message) => {
                // 利用者の入力ミスでありサーバー障害ではない
                tracing::debug!(%message, "入力検証に失敗");
                (StatusCode::BAD_REQUEST, MessageResponse::new(message))
            }
            IntakeError::Delivery { kind, detail } => {
                tracing::error!(
                    error.category = error::category::EXTERNAL_SERVICE,
                    error.kind = error::kind::MAIL_DELIVERY,
                    inquiry.kind = %kind,
                    error = %detail,
                    "メール送信に失敗"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageResponse::with_error(delivery_failure_message(kind), detail),
                )
            }
            IntakeError::Rendering { kind, detail } => {
                tracing::error!(
                    error.category = error::category::INTERNAL,
                    error.kind = error::kind::TEMPLATE,
                    inquiry.kind = %kind,
                    error = %detail,
                    "メール本文の生成に失敗"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageResponse::with_error(delivery_failure_message(kind), detail),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
