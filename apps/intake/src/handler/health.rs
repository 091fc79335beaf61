//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0"
//! }
//! ```

use axum::Json;
use formrelay_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// メール送信基盤への接続は確認せず、プロセスの起動状態のみを返す。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
