//! # Form Intake サーバー
//!
//! Web サイトのフォーム送信をメールで中継する API サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `EMAIL_USER` | **Yes**（smtp 時） | 送信元アドレス兼 SMTP 認証ユーザー |
//! | `EMAIL_PASS` | **Yes**（smtp 時） | SMTP 認証パスワード |
//! | `SMTP_HOST` | No | SMTP リレーホスト（デフォルト: `smtp.gmail.com`） |
//! | `SMTP_PORT` | No | SMTP リレーポート（デフォルト: `465`。`587` は STARTTLS） |
//! | `NOTIFICATION_BACKEND` | No | `smtp` または `noop`（デフォルト: `smtp`） |
//! | `STATIC_DIR` | No | 静的ファイルのディレクトリ（デフォルト: `public`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（メールを送信しない）
//! NOTIFICATION_BACKEND=noop cargo run -p formrelay-intake
//!
//! # 本番環境
//! EMAIL_USER=... EMAIL_PASS=... cargo run -p formrelay-intake --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use formrelay_intake::{
    app_builder::{build_app, build_notification_sender},
    config::IntakeConfig,
    handler::InquiryState,
    usecase::{InquiryUseCaseImpl, TemplateRenderer},
};
use formrelay_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Form Intake サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. 送信基盤・ユースケースの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("intake");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing_config.app_span().entered();

    let config = IntakeConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Form Intake サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let sender = build_notification_sender(&config.notification)
        .context("送信基盤の初期化に失敗しました")?;
    let renderer = TemplateRenderer::new().context("メールテンプレートの読み込みに失敗しました")?;
    let usecase = InquiryUseCaseImpl::new(sender, renderer, config.mail_routing());
    let state = Arc::new(InquiryState { usecase });

    let app = build_app(state, &config.static_dir);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Form Intake サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
