//! # テスト用モック
//!
//! ユースケース・ハンドラのテストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use formrelay_domain::notification::{EmailMessage, NotificationError};

use crate::notification::NotificationSender;

// ===== MockNotificationSender =====

/// 送信要求を記録するモック
///
/// `clone()` したインスタンス同士は記録を共有する。テストでは片方を
/// アプリケーションに渡し、もう片方で送信内容を検査する。
#[derive(Debug, Clone, Default)]
pub struct MockNotificationSender {
    sent:    Arc<Mutex<Vec<EmailMessage>>>,
    failure: Option<String>,
}

impl MockNotificationSender {
    /// 常に送信成功するモックを作成する
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に `SendFailed(detail)` を返すモックを作成する
    ///
    /// 失敗した送信要求も記録される。
    pub fn failing(detail: impl Into<String>) -> Self {
        Self {
            sent:    Arc::default(),
            failure: Some(detail.into()),
        }
    }

    /// 送信要求されたメールの一覧
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// 送信要求の回数
    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        self.sent.lock().unwrap().push(email.clone());

        match &self.failure {
            Some(detail) => Err(NotificationError::SendFailed(detail.clone())),
            None => Ok(()),
        }
    }
}
