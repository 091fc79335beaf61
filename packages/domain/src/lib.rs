//! # FormRelay ドメイン層
//!
//! Web サイトのフォーム送信（相談予約・お問い合わせ）と、それを中継する
//! メールのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! intake → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（メール送信基盤）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`inquiry`] - 相談予約・お問い合わせのリクエストと必須項目検証
//! - [`notification`] - 送信メールと送信エラー
//!
//! ## 使用例
//!
//! ```rust
//! use formrelay_domain::inquiry::ConsultationRequest;
//!
//! let request = ConsultationRequest::new(
//!     Some("Jane Doe".to_string()),
//!     Some("jane@example.com".to_string()),
//!     Some("Coaching".to_string()),
//! )
//! .unwrap();
//! assert_eq!(request.full_name(), "Jane Doe");
//! ```

pub mod error;
pub mod inquiry;
pub mod notification;

pub use error::DomainError;
