//! # ユースケース層
//!
//! フォーム受付のアプリケーションロジックを実装する。
//!
//! - [`inquiry`] - 検証済みの問い合わせをメールに変換して送信する
//! - [`template_renderer`] - tera テンプレートによるメール生成

pub mod inquiry;
pub mod template_renderer;

pub use inquiry::InquiryUseCaseImpl;
pub use template_renderer::TemplateRenderer;
