//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! リレー（例: `smtp.gmail.com:465`）にユーザー名・パスワードで認証して接続する。
//! ポート 587 は STARTTLS、それ以外は接続直後から TLS を使う。

use std::fmt;

use async_trait::async_trait;
use formrelay_domain::notification::{EmailMessage, NotificationError};
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Mailbox, Message, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use super::NotificationSender;

/// SMTP 接続設定
#[derive(Clone)]
pub struct SmtpSettings {
    /// リレーホスト名
    pub host:     String,
    /// リレーポート番号
    pub port:     u16,
    /// 認証ユーザー名（送信元アドレスを兼ねる）
    pub username: String,
    /// 認証パスワード
    pub password: String,
}

// パスワードをログに出さない
impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// STARTTLS で接続するサブミッションポート
const STARTTLS_PORT: u16 = 587;

fn uses_starttls(port: u16) -> bool {
    port == STARTTLS_PORT
}

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// トランスポートは内部で接続を管理しており、複数リクエストから同時に使用できる。
pub struct SmtpNotificationSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// 接続はこの時点では確立しない（最初の送信時に接続する）。
    pub fn new(settings: &SmtpSettings) -> Result<Self, NotificationError> {
        let builder = if uses_starttls(settings.port) {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
        };

        let transport = builder
            .map_err(|e| NotificationError::Build(format!("SMTP リレー設定に失敗: {e}")))?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Self { transport })
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotificationError> {
    address
        .parse()
        .map_err(|e| NotificationError::InvalidAddress(format!("{address}: {e}")))
}

/// `EmailMessage` を lettre の `Message` に変換する
///
/// 宛先はすべて `To` ヘッダーに並べる。本文は plain / HTML の multipart/alternative。
fn build_message(email: &EmailMessage) -> Result<Message, NotificationError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(&email.from)?)
        .subject(&email.subject);

    for to in &email.to {
        builder = builder.to(parse_mailbox(to)?);
    }

    builder
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(email.text_body.clone()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(email.html_body.clone()),
                ),
        )
        .map_err(|e| NotificationError::Build(e.to_string()))
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let message = build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

        tracing::debug!(
            code = %response.code(),
            "SMTP サーバーがメールを受理しました"
        );

        Ok(())
    }
}
