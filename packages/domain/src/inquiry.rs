//! # 問い合わせ
//!
//! Web サイトのフォームから送られてくる 2 種類の問い合わせを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 必須項目 |
//! |---|------------|---------|
//! | [`ConsultationRequest`] | 相談予約 | 氏名、メールアドレス、希望サービス |
//! | [`ContactMessageRequest`] | お問い合わせ | 氏名、メールアドレス、メッセージ |
//!
//! ## 設計方針
//!
//! - **生成時検証**: コンストラクタで必須項目を検証し、不正な値の存在を型レベルで排除
//! - **空文字は未入力扱い**: `None` と `Some("")` を区別しない
//! - **永続化しない**: 1 リクエストの間だけ存在し、メールに変換されたら破棄される

use strum::IntoStaticStr;

use crate::DomainError;

/// 希望サービスが未入力のときに表示する文言
pub const SERVICE_NOT_SPECIFIED: &str = "Not specified";

/// 問い合わせ種別
///
/// ログの `inquiry.kind` フィールドに出力される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum InquiryKind {
    /// 相談予約
    Consultation,
    /// お問い合わせ
    ContactMessage,
}

/// 空文字を未入力として扱う
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// 相談予約リクエスト
///
/// # 不変条件
///
/// - 氏名、メールアドレス、希望サービスがすべて空でない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationRequest {
    full_name:          String,
    email_address:      String,
    interested_service: String,
}

impl ConsultationRequest {
    /// 必須項目が欠けている場合のメッセージ
    pub const MISSING_FIELDS_MESSAGE: &'static str = "Missing required consultation fields.";

    /// 必須項目を検証して相談予約を作成する
    ///
    /// # エラー
    ///
    /// いずれかの項目が未入力または空文字の場合は `DomainError::Validation` を返す。
    pub fn new(
        full_name: Option<String>,
        email_address: Option<String>,
        interested_service: Option<String>,
    ) -> Result<Self, DomainError> {
        match (
            present(full_name),
            present(email_address),
            present(interested_service),
        ) {
            (Some(full_name), Some(email_address), Some(interested_service)) => Ok(Self {
                full_name,
                email_address,
                interested_service,
            }),
            _ => Err(DomainError::Validation(
                Self::MISSING_FIELDS_MESSAGE.to_string(),
            )),
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    pub fn interested_service(&self) -> &str {
        &self.interested_service
    }
}

/// お問い合わせリクエスト
///
/// # 不変条件
///
/// - 氏名、メールアドレス、メッセージが空でない
/// - 希望サービスは任意（未入力なら [`SERVICE_NOT_SPECIFIED`] を表示する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageRequest {
    full_name:          String,
    email_address:      String,
    interested_service: Option<String>,
    message:            String,
}

impl ContactMessageRequest {
    /// 必須項目が欠けている場合のメッセージ
    pub const MISSING_FIELDS_MESSAGE: &'static str =
        "Missing required contact form fields (Name, Email, Message).";

    /// 必須項目を検証してお問い合わせを作成する
    ///
    /// # エラー
    ///
    /// 氏名、メールアドレス、メッセージのいずれかが未入力または空文字の場合は
    /// `DomainError::Validation` を返す。
    pub fn new(
        full_name: Option<String>,
        email_address: Option<String>,
        interested_service: Option<String>,
        message: Option<String>,
    ) -> Result<Self, DomainError> {
        match (present(full_name), present(email_address), present(message)) {
            (Some(full_name), Some(email_address), Some(message)) => Ok(Self {
                full_name,
                email_address,
                interested_service: present(interested_service),
                message,
            }),
            _ => Err(DomainError::Validation(
                Self::MISSING_FIELDS_MESSAGE.to_string(),
            )),
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }

    /// 希望サービス（未入力なら [`SERVICE_NOT_SPECIFIED`]）
    pub fn interested_service(&self) -> &str {
        self.interested_service
            .as_deref()
            .unwrap_or(SERVICE_NOT_SPECIFIED)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// メッセージを改行で分割した行
    ///
    /// `\r\n`、単独の `\r`、`\n` をそれぞれ 1 つの改行として扱う。
    /// 戻り値の要素数は改行数 + 1 になる。
    pub fn message_lines(&self) -> Vec<&str> {
        self.message
            .split("\r\n")
            .flat_map(|chunk| chunk.split(['\r', '\n']))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn 相談予約は全項目が揃えば作成できる() {
        let request = ConsultationRequest::new(s("Jane Doe"), s("jane@x.com"), s("Coaching"))
            .unwrap();

        assert_eq!(request.full_name(), "Jane Doe");
        assert_eq!(request.email_address(), "jane@x.com");
        assert_eq!(request.interested_service(), "Coaching");
    }

    #[rstest]
    #[case(None, s("jane@x.com"), s("Coaching"))]
    #[case(s("Jane"), None, s("Coaching"))]
    #[case(s("Jane"), s("jane@x.com"), None)]
    #[case(s(""), s("jane@x.com"), s("Coaching"))]
    #[case(s("Jane"), s(""), s("Coaching"))]
    #[case(s("Jane"), s("jane@x.com"), s(""))]
    fn 相談予約は必須項目が欠けるとバリデーションエラー(
        #[case] full_name: Option<String>,
        #[case] email_address: Option<String>,
        #[case] interested_service: Option<String>,
    ) {
        let result = ConsultationRequest::new(full_name, email_address, interested_service);

        assert_eq!(
            result,
            Err(DomainError::Validation(
                "Missing required consultation fields.".to_string()
            ))
        );
    }

    #[rstest]
    #[case(None, s("jane@x.com"), s("Hi"))]
    #[case(s("Jane"), None, s("Hi"))]
    #[case(s("Jane"), s("jane@x.com"), None)]
    #[case(s(""), s("jane@x.com"), s("Hi"))]
    #[case(s("Jane"), s("jane@x.com"), s(""))]
    fn お問い合わせは必須項目が欠けるとバリデーションエラー(
        #[case] full_name: Option<String>,
        #[case] email_address: Option<String>,
        #[case] message: Option<String>,
    ) {
        let result = ContactMessageRequest::new(full_name, email_address, s("Coaching"), message);

        assert_eq!(
            result,
            Err(DomainError::Validation(
                "Missing required contact form fields (Name, Email, Message).".to_string()
            ))
        );
    }

    #[rstest]
    #[case(None)]
    #[case(s(""))]
    fn お問い合わせの希望サービス未入力はnot_specifiedになる(
        #[case] interested_service: Option<String>,
    ) {
        let request =
            ContactMessageRequest::new(s("Jane"), s("jane@x.com"), interested_service, s("Hi"))
                .unwrap();

        assert_eq!(request.interested_service(), "Not specified");
    }

    #[test]
    fn お問い合わせの希望サービスは入力値を返す() {
        let request =
            ContactMessageRequest::new(s("Jane"), s("jane@x.com"), s("Yoga"), s("Hi")).unwrap();

        assert_eq!(request.interested_service(), "Yoga");
    }

    #[test]
    fn 空白のみの値は入力ありとして扱う() {
        let result = ConsultationRequest::new(s(" "), s("jane@x.com"), s("Coaching"));

        assert!(result.is_ok());
    }

    #[rstest]
    #[case("Hi", vec!["Hi"])]
    #[case("a\nb", vec!["a", "b"])]
    #[case("a\r\nb\r\n", vec!["a", "b", ""])]
    #[case("\n\n", vec!["", "", ""])]
    #[case("line1\rline2", vec!["line1", "line2"])]
    #[case("a\r\rb\n", vec!["a", "", "b", ""])]
    fn message_linesは改行で分割する(#[case] message: &str, #[case] expected: Vec<&str>) {
        let request =
            ContactMessageRequest::new(s("Jane"), s("jane@x.com"), None, s(message)).unwrap();

        assert_eq!(request.message_lines(), expected);
    }

    #[test]
    fn inquiry_kindの文字列表現はsnake_case() {
        assert_eq!(InquiryKind::Consultation.to_string(), "consultation");
        let kind: &str = InquiryKind::ContactMessage.into();
        assert_eq!(kind, "contact_message");
    }
}
