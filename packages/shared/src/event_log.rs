//! # ビジネスイベントログの構造化ヘルパー
//!
//! `jq` でフィルタしやすいよう、ログフィールドの命名規約とヘルパーマクロを提供する。
//!
//! [`log_business_event!`] マクロで出力したログには `event.kind = "business_event"`
//! マーカーが自動付与され、`jq 'select(.["event.kind"] == "business_event")'` で
//! 抽出できる。
//!
//! フィールド名はドット記法（`event.category`、`inquiry.kind`）を使用する。
//! JSON 出力ではフラットなキーになる。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: イベントカテゴリ（[`event::category`] の定数を使用）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.result`: 結果（[`event::result`] の定数を使用）
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const INQUIRY: &str = "inquiry";
    }

    /// イベントアクション
    pub mod action {
        pub const INQUIRY_DELIVERED: &str = "inquiry.delivered";
        pub const INQUIRY_DELIVERY_FAILED: &str = "inquiry.delivery_failed";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// エラーコンテキストフィールドの定数
///
/// `tracing::error!` に `error.category` + `error.kind` フィールドとして付与する。
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// 外部サービス呼び出し（メール送信基盤）
        pub const EXTERNAL_SERVICE: &str = "external_service";
        /// アプリケーション内部
        pub const INTERNAL: &str = "internal";
    }

    /// エラー種別
    pub mod kind {
        pub const MAIL_DELIVERY: &str = "mail_delivery";
        pub const TEMPLATE: &str = "template";
    }
}
