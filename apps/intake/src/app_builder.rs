//! # アプリケーション構築
//!
//! DI（送信基盤・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use formrelay_domain::notification::NotificationError;
use formrelay_infra::{
    NoopNotificationSender,
    NotificationSender,
    SmtpNotificationSender,
    SmtpSettings,
};
use formrelay_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    config::{NotificationBackend, NotificationConfig},
    handler::{InquiryState, book_consultation, health_check, send_contact_message},
};

/// 設定に応じた送信基盤を作成する
///
/// 起動時に 1 度だけ呼ばれ、全リクエストで共有される。
pub fn build_notification_sender(
    config: &NotificationConfig,
) -> Result<Arc<dyn NotificationSender>, NotificationError> {
    match config.backend {
        NotificationBackend::Smtp => {
            let sender = SmtpNotificationSender::new(&SmtpSettings {
                host:     config.smtp_host.clone(),
                port:     config.smtp_port,
                username: config.email_user.clone(),
                password: config.email_pass.clone(),
            })?;
            tracing::info!(
                host = %config.smtp_host,
                port = config.smtp_port,
                "SMTP 送信基盤を使用します"
            );
            Ok(Arc::new(sender))
        }
        NotificationBackend::Noop => {
            tracing::warn!("Noop 送信基盤を使用します（メールは送信されません）");
            Ok(Arc::new(NoopNotificationSender))
        }
    }
}

/// ルーターを構築する
///
/// API 以外のパスは `static_dir` から静的ファイルとして配信する。
pub fn build_app(state: Arc<InquiryState>, static_dir: &Path) -> Router {
    // レイヤー順序: 下に書いたものが外側
    // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
    // 2. TraceLayer: request_id をスパンに記録
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    // 4. CorsLayer: すべてのオリジンを許可
    Router::new()
        .route("/health", get(health_check))
        .route("/api/book-consultation", post(book_consultation))
        .route("/api/send-contact-message", post(send_contact_message))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
