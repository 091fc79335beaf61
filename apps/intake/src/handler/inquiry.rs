//! # 問い合わせハンドラ
//!
//! Web サイトのフォーム送信を受け付ける。
//!
//! ## エンドポイント
//!
//! - `POST /api/book-consultation` - 相談予約
//! - `POST /api/send-contact-message` - お問い合わせ
//!
//! ## 処理の流れ
//!
//! 検証 → メール生成 → 送信 → レスポンス。分岐は検証の 1 箇所、
//! 外部呼び出しは送信の 1 回だけ。

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use formrelay_domain::inquiry::{ConsultationRequest, ContactMessageRequest};
use formrelay_shared::MessageResponse;
use serde::Deserialize;

use crate::{error::IntakeError, usecase::InquiryUseCaseImpl};

/// 問い合わせ API の共有状態
pub struct InquiryState {
    pub usecase: InquiryUseCaseImpl,
}

// --- リクエスト型 ---

/// 相談予約フォーム
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookConsultationBody {
    pub full_name:          Option<String>,
    pub email_address:      Option<String>,
    pub interested_service: Option<String>,
}

/// お問い合わせフォーム
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendContactMessageBody {
    pub full_name:          Option<String>,
    pub email_address:      Option<String>,
    pub interested_service: Option<String>,
    pub message:            Option<String>,
}

/// JSON として読めないボディは必須項目の欠落と同じ扱いにする
fn unreadable_body(rejection: &JsonRejection, message: &str) -> IntakeError {
    tracing::debug!(rejection = %rejection.body_text(), "リクエストボディを解釈できません");
    IntakeError::Validation(message.to_string())
}

// --- ハンドラ ---

/// POST /api/book-consultation
///
/// 相談予約を受け付け、固定の宛先へメールで中継する。
pub async fn book_consultation(
    State(state): State<Arc<InquiryState>>,
    body: Result<Json<BookConsultationBody>, JsonRejection>,
) -> Result<impl IntoResponse, IntakeError> {
    let Json(body) = body.map_err(|rejection| {
        unreadable_body(&rejection, ConsultationRequest::MISSING_FIELDS_MESSAGE)
    })?;

    let request =
        ConsultationRequest::new(body.full_name, body.email_address, body.interested_service)?;

    state.usecase.book_consultation(&request).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new(
            "Consultation request sent successfully!",
        )),
    ))
}

/// POST /api/send-contact-message
///
/// お問い合わせを受け付け、固定の宛先へメールで中継する。
/// 希望サービスは任意項目。
pub async fn send_contact_message(
    State(state): State<Arc<InquiryState>>,
    body: Result<Json<SendContactMessageBody>, JsonRejection>,
) -> Result<impl IntoResponse, IntakeError> {
    let Json(body) = body.map_err(|rejection| {
        unreadable_body(&rejection, ContactMessageRequest::MISSING_FIELDS_MESSAGE)
    })?;

    let request = ContactMessageRequest::new(
        body.full_name,
        body.email_address,
        body.interested_service,
        body.message,
    )?;

    state.usecase.send_contact_message(&request).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Contact message sent successfully!")),
    ))
}
