//! # 通知送信
//!
//! メール送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **2 つの実装**: SMTP（本番）、Noop（ローカル開発）
//! - **環境変数切替**: `NOTIFICATION_BACKEND` でランタイム選択

mod noop;
mod smtp;

use async_trait::async_trait;
use formrelay_domain::notification::{EmailMessage, NotificationError};
pub use noop::NoopNotificationSender;
pub use smtp::{SmtpNotificationSender, SmtpSettings};

/// メール送信トレイト
///
/// 起動時に 1 つだけ生成され、`Arc` で全リクエストから共有される。
/// 実装は並行呼び出しに対して安全でなければならない。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    ///
    /// 送信が完了するか失敗するまで待つ。再送はしない。
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}
