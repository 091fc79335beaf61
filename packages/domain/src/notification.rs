//! # 通知
//!
//! 問い合わせを中継するメールのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **送信方法からの分離**: メールの中身だけを表現し、送信は infra 層の
//!   `NotificationSender` に委ねる
//! - **再送しない**: 送信失敗はそのまま呼び出し元へ返す（再送はフォーム利用者が行う）

use thiserror::Error;

/// 通知送信エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// メールアドレスの形式が不正
    #[error("メールアドレスが不正です: {0}")]
    InvalidAddress(String),

    /// メッセージの組み立てに失敗
    #[error("メッセージの構築に失敗: {0}")]
    Build(String),

    /// 送信基盤がエラーを返した（ネットワーク、認証、受信拒否など）
    ///
    /// 保持する文字列は送信基盤のエラー内容そのもの。
    #[error("{0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。`NotificationSender` に渡される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信元メールアドレス
    pub from:      String,
    /// 送信先メールアドレス（複数可）
    pub to:        Vec<String>,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
    /// プレーンテキスト本文
    pub text_body: String,
}
