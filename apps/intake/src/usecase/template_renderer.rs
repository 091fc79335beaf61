//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで問い合わせメールを HTML/plaintext 両形式で生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **HTML エスケープ**: `.html` テンプレートは tera の autoescape で入力値をエスケープする
//! - **改行の変換**: メッセージの改行は `<br>` に置き換える
//! - **入力値は加工しない**: HTML テンプレートは改行なしの 1 行で書き、レンダリング後の
//!   本文には手を加えない

use formrelay_domain::{
    inquiry::{ConsultationRequest, ContactMessageRequest},
    notification::{EmailMessage, NotificationError},
};
use tera::{Context, Tera};

use crate::config::MailRouting;

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、問い合わせから `EmailMessage` を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    "consultation.html",
                    include_str!("../../templates/consultation.html").trim_end(),
                ),
                (
                    "consultation.txt",
                    include_str!("../../templates/consultation.txt"),
                ),
                (
                    "contact_message.html",
                    include_str!("../../templates/contact_message.html").trim_end(),
                ),
                (
                    "contact_message.txt",
                    include_str!("../../templates/contact_message.txt"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 相談予約メールを生成する
    pub fn render_consultation(
        &self,
        request: &ConsultationRequest,
        routing: &MailRouting,
    ) -> Result<EmailMessage, NotificationError> {
        let mut context = Context::new();
        context.insert("full_name", request.full_name());
        context.insert("email_address", request.email_address());
        context.insert("interested_service", request.interested_service());

        self.render(
            "consultation",
            format!("New Consultation Request from {}", request.full_name()),
            &context,
            routing,
        )
    }

    /// お問い合わせメールを生成する
    pub fn render_contact_message(
        &self,
        request: &ContactMessageRequest,
        routing: &MailRouting,
    ) -> Result<EmailMessage, NotificationError> {
        let mut context = Context::new();
        context.insert("full_name", request.full_name());
        context.insert("email_address", request.email_address());
        context.insert("interested_service", request.interested_service());
        context.insert("message", request.message());
        context.insert("message_lines", &request.message_lines());

        self.render(
            "contact_message",
            format!("New Contact Message from {} (Website)", request.full_name()),
            &context,
            routing,
        )
    }

    fn render(
        &self,
        template_name: &str,
        subject: String,
        context: &Context,
        routing: &MailRouting,
    ) -> Result<EmailMessage, NotificationError> {
        let html_body = self
            .engine
            .render(&format!("{template_name}.html"), context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let text_body = self
            .engine
            .render(&format!("{template_name}.txt"), context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            from: routing.from.clone(),
            to: routing.recipients.clone(),
            subject,
            html_body,
            text_body,
        })
    }
}
