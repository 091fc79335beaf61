//! # 問い合わせユースケース
//!
//! 検証済みの問い合わせ → メール生成 → 送信 を 1 本の流れで実行する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: `NotificationSender` は trait オブジェクトで受け取り、テストでモックに差し替える
//! - **再送しない**: 送信失敗はそのまま `IntakeError::Delivery` として返す
//! - **冪等でない**: 同じ内容を 2 回受け付ければ 2 通送信する

use std::sync::Arc;

use formrelay_domain::{
    inquiry::{ConsultationRequest, ContactMessageRequest, InquiryKind},
    notification::{EmailMessage, NotificationError},
};
use formrelay_infra::NotificationSender;
use formrelay_shared::{event_log::event, log_business_event};

use super::TemplateRenderer;
use crate::{config::MailRouting, error::IntakeError};

/// 問い合わせユースケース
pub struct InquiryUseCaseImpl {
    sender:   Arc<dyn NotificationSender>,
    renderer: TemplateRenderer,
    routing:  MailRouting,
}

impl InquiryUseCaseImpl {
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        renderer: TemplateRenderer,
        routing: MailRouting,
    ) -> Self {
        Self {
            sender,
            renderer,
            routing,
        }
    }

    /// 相談予約をメールで中継する
    pub async fn book_consultation(&self, request: &ConsultationRequest) -> Result<(), IntakeError> {
        let kind = InquiryKind::Consultation;
        let email = self
            .renderer
            .render_consultation(request, &self.routing)
            .map_err(|e| rendering_error(kind, e))?;

        self.deliver(kind, &email).await
    }

    /// お問い合わせをメールで中継する
    pub async fn send_contact_message(
        &self,
        request: &ContactMessageRequest,
    ) -> Result<(), IntakeError> {
        let kind = InquiryKind::ContactMessage;
        let email = self
            .renderer
            .render_contact_message(request, &self.routing)
            .map_err(|e| rendering_error(kind, e))?;

        self.deliver(kind, &email).await
    }

    async fn deliver(&self, kind: InquiryKind, email: &EmailMessage) -> Result<(), IntakeError> {
        let kind_str: &str = kind.into();

        match self.sender.send_email(email).await {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::INQUIRY,
                    event.action = event::action::INQUIRY_DELIVERED,
                    event.result = event::result::SUCCESS,
                    inquiry.kind = kind_str,
                    inquiry.recipients = email.to.len(),
                    "問い合わせメール送信成功"
                );
                Ok(())
            }
            Err(e) => {
                log_business_event!(
                    event.category = event::category::INQUIRY,
                    event.action = event::action::INQUIRY_DELIVERY_FAILED,
                    event.result = event::result::FAILURE,
                    inquiry.kind = kind_str,
                    error = %e,
                    "問い合わせメール送信失敗"
                );
                Err(IntakeError::Delivery {
                    kind,
                    detail: delivery_detail(e),
                })
            }
        }
    }
}

fn rendering_error(kind: InquiryKind, error: NotificationError) -> IntakeError {
    IntakeError::Rendering {
        kind,
        detail: error.to_string(),
    }
}

/// クライアントへ返すエラー詳細
///
/// `SendFailed` は送信基盤のエラー内容をそのまま返す。
fn delivery_detail(error: NotificationError) -> String {
    match error {
        NotificationError::SendFailed(detail) => detail,
        other => other.to_string(),
    }
}
