//! # ドメイン層エラー定義
//!
//! 入力がビジネスルールに違反していることを表現するエラー型。
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 必須項目の欠落 |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 保持する文字列はそのままクライアントへ返すメッセージになる。
    #[error("{0}")]
    Validation(String),
}
