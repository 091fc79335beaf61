//! # Form Intake ライブラリ
//!
//! Web サイトのフォーム送信（相談予約・お問い合わせ）を受け付け、
//! メールとして固定の宛先へ中継するサービス。
//!
//! ```text
//! client → POST /api/... → 検証 → メール生成 → SMTP 送信 → レスポンス
//! ```
//!
//! 状態は持たない。送信基盤のクライアントだけが起動時に作られ、全リクエストで共有される。
//!
//! ## モジュール構成
//!
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - メール生成と送信
//! - [`app_builder`] - 依存の組み立てとルーター構築

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
