//! # Form Intake 設定
//!
//! 環境変数からフォーム受付サーバーの設定を読み込む。
//!
//! 起動時に一度だけ読み込み、[`IntakeConfig`] としてルーター構築に渡す。
//! グローバル変数は使わない。

use std::{env, fmt, path::PathBuf};

use thiserror::Error;

/// 問い合わせメールの宛先（固定）
pub const INQUIRY_RECIPIENTS: [&str; 2] = [
    "inquiries@formrelay.example.com",
    "owner@formrelay.example.com",
];

/// Noop バックエンドで `EMAIL_USER` が未設定のときの送信元
const NOOP_FROM_ADDRESS: &str = "noreply@formrelay.example.com";

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 環境変数の値が不正
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// フォーム受付サーバーの設定
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// 静的ファイルの配信ディレクトリ
    pub static_dir:   PathBuf,
    /// 通知設定
    pub notification: NotificationConfig,
}

/// 送信バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationBackend {
    /// SMTP リレー経由で送信
    Smtp,
    /// 送信しない（ログ出力のみ）
    Noop,
}

/// 通知機能の設定
#[derive(Clone)]
pub struct NotificationConfig {
    /// 送信バックエンド
    pub backend:    NotificationBackend,
    /// SMTP リレーホスト
    pub smtp_host:  String,
    /// SMTP リレーポート
    pub smtp_port:  u16,
    /// 送信元アドレス兼 SMTP 認証ユーザー
    pub email_user: String,
    /// SMTP 認証パスワード
    pub email_pass: String,
}

impl fmt::Debug for NotificationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationConfig")
            .field("backend", &self.backend)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("email_user", &self.email_user)
            .field("email_pass", &"********")
            .finish()
    }
}

/// 送信元と宛先の組
///
/// ユースケースに注入される。テストでは任意の宛先に差し替えられる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRouting {
    /// 送信元アドレス
    pub from:       String,
    /// 宛先アドレス
    pub recipients: Vec<String>,
}

impl MailRouting {
    /// 固定の宛先 [`INQUIRY_RECIPIENTS`] を使うルーティングを作成する
    pub fn inquiries(from: impl Into<String>) -> Self {
        Self {
            from:       from.into(),
            recipients: INQUIRY_RECIPIENTS.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl IntakeConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の読み込み関数から設定を構築する
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host:         lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port:         parse_port(&lookup, "PORT", 3000)?,
            static_dir:   lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            notification: NotificationConfig::from_lookup(&lookup)?,
        })
    }

    /// 問い合わせメールのルーティングを返す
    pub fn mail_routing(&self) -> MailRouting {
        MailRouting::inquiries(self.notification.email_user.clone())
    }
}

impl NotificationConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend = match lookup("NOTIFICATION_BACKEND").as_deref() {
            None | Some("smtp") => NotificationBackend::Smtp,
            Some("noop") => NotificationBackend::Noop,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name:  "NOTIFICATION_BACKEND",
                    value: other.to_string(),
                });
            }
        };

        let (email_user, email_pass) = match backend {
            NotificationBackend::Smtp => (
                lookup("EMAIL_USER").ok_or(ConfigError::Missing("EMAIL_USER"))?,
                lookup("EMAIL_PASS").ok_or(ConfigError::Missing("EMAIL_PASS"))?,
            ),
            NotificationBackend::Noop => (
                lookup("EMAIL_USER").unwrap_or_else(|| NOOP_FROM_ADDRESS.to_string()),
                lookup("EMAIL_PASS").unwrap_or_default(),
            ),
        };

        Ok(Self {
            backend,
            smtp_host: lookup("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
            smtp_port: parse_port(lookup, "SMTP_PORT", 465)?,
            email_user,
            email_pass,
        })
    }
}

fn parse_port(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: u16,
) -> Result<u16, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn 認証情報のみでデフォルト値が使われる() {
        let config = IntakeConfig::from_lookup(lookup_from(&[
            ("EMAIL_USER", "sender@example.com"),
            ("EMAIL_PASS", "app-password"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.notification.backend, NotificationBackend::Smtp);
        assert_eq!(config.notification.smtp_host, "smtp.gmail.com");
        assert_eq!(config.notification.smtp_port, 465);
        assert_eq!(config.notification.email_user, "sender@example.com");
    }

    #[test]
    fn portを環境変数で上書きできる() {
        let config = IntakeConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("EMAIL_USER", "sender@example.com"),
            ("EMAIL_PASS", "app-password"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
    }

    #[test]
    fn 数値でないportはエラー() {
        let result = IntakeConfig::from_lookup(lookup_from(&[
            ("PORT", "abc"),
            ("EMAIL_USER", "sender@example.com"),
            ("EMAIL_PASS", "app-password"),
        ]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::Invalid {
                name:  "PORT",
                value: "abc".to_string(),
            }
        );
    }

    #[test]
    fn smtpバックエンドでemail_userが未設定ならエラー() {
        let result = IntakeConfig::from_lookup(lookup_from(&[("EMAIL_PASS", "app-password")]));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("EMAIL_USER"));
    }

    #[test]
    fn smtpバックエンドでemail_passが未設定ならエラー() {
        let result =
            IntakeConfig::from_lookup(lookup_from(&[("EMAIL_USER", "sender@example.com")]));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("EMAIL_PASS"));
    }

    #[test]
    fn noopバックエンドは認証情報なしで起動できる() {
        let config =
            IntakeConfig::from_lookup(lookup_from(&[("NOTIFICATION_BACKEND", "noop")])).unwrap();

        assert_eq!(config.notification.backend, NotificationBackend::Noop);
        assert_eq!(config.notification.email_user, "noreply@formrelay.example.com");
    }

    #[test]
    fn 不明なバックエンドはエラー() {
        let result = IntakeConfig::from_lookup(lookup_from(&[("NOTIFICATION_BACKEND", "ses")]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::Invalid {
                name:  "NOTIFICATION_BACKEND",
                value: "ses".to_string(),
            }
        );
    }

    #[test]
    fn mail_routingは固定の2宛先を返す() {
        let config = IntakeConfig::from_lookup(lookup_from(&[
            ("EMAIL_USER", "sender@example.com"),
            ("EMAIL_PASS", "app-password"),
        ]))
        .unwrap();

        let routing = config.mail_routing();

        assert_eq!(routing.from, "sender@example.com");
        assert_eq!(routing.recipients.len(), 2);
        assert_eq!(routing.recipients, INQUIRY_RECIPIENTS.to_vec());
    }

    #[test]
    fn notification_configのdebug出力はパスワードを隠す() {
        let config = IntakeConfig::from_lookup(lookup_from(&[
            ("EMAIL_USER", "sender@example.com"),
            ("EMAIL_PASS", "app-password"),
        ]))
        .unwrap();

        assert!(!format!("{config:?}").contains("app-password"));
    }
}
