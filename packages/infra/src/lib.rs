//! # FormRelay インフラ層
//!
//! 外部システムとの通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **メール送信**: SMTP リレー経由のメール配送（[`notification`]）
//!
//! ## 依存関係
//!
//! ```text
//! intake → infra → domain
//! ```
//!
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## テスト用モック
//!
//! `test-utils` feature を有効にすると [`mock`] モジュールが公開される。
//!
//! ```toml
//! [dev-dependencies]
//! formrelay-infra = { workspace = true, features = ["test-utils"] }
//! ```

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod notification;

pub use notification::{
    NoopNotificationSender,
    NotificationSender,
    SmtpNotificationSender,
    SmtpSettings,
};
