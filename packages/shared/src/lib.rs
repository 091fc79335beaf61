//! # FormRelay 共有ユーティリティ
//!
//! このクレートは、FormRelay
//! プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, intake）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える（HTTP / tracing 関連は
//!   `observability` feature の背後に置く）

pub mod event_log;
pub mod health;
pub mod message_response;
pub mod observability;

pub use health::HealthResponse;
pub use message_response::MessageResponse;
