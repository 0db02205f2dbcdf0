//! 操作後的回饋區塊（成功 / 錯誤訊息）

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusState {
    #[default]
    Hidden,
    Error(String),
    Success(String),
}

/// 頁面上唯一的狀態區塊，同一時間只會處於一種狀態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRegion {
    state: StatusState,
}

impl StatusRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide(&mut self) {
        self.state = StatusState::Hidden;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.state = StatusState::Error(message.into());
    }

    pub fn show_result(&mut self, message: impl Into<String>) {
        self.state = StatusState::Success(message.into());
    }

    pub fn state(&self) -> &StatusState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.state, StatusState::Hidden)
    }

    pub fn has_error_class(&self) -> bool {
        matches!(self.state, StatusState::Error(_))
    }

    /// 隱藏時仍回傳空字串
    pub fn content(&self) -> &str {
        match &self.state {
            StatusState::Hidden => "",
            StatusState::Error(message) | StatusState::Success(message) => message,
        }
    }

    /// 訊息一律視為純文字，插入前先跳脫
    pub fn render_html(&self) -> String {
        match &self.state {
            StatusState::Hidden => r#"<div id="status" hidden></div>"#.to_string(),
            StatusState::Error(message) => format!(
                r#"<div id="status" class="error">{}</div>"#,
                escape_html(message)
            ),
            StatusState::Success(message) => {
                format!(r#"<div id="status">{}</div>"#, escape_html(message))
            }
        }
    }
}

impl fmt::Display for StatusRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            StatusState::Hidden => Ok(()),
            StatusState::Error(message) => write!(f, "❌ {}", message),
            StatusState::Success(message) => write!(f, "✅ {}", message),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_region_is_hidden() {
        let region = StatusRegion::new();
        assert!(!region.is_visible());
        assert!(!region.has_error_class());
        assert_eq!(region.content(), "");
    }

    #[test]
    fn test_hide_then_show_error() {
        let mut region = StatusRegion::new();
        region.hide();
        region.show_error("x");

        assert!(region.is_visible());
        assert!(region.has_error_class());
        assert_eq!(region.content(), "x");
    }

    #[test]
    fn test_show_result_clears_error_class() {
        let mut region = StatusRegion::new();
        region.show_error("bad");
        region.show_result("saved");

        assert!(region.is_visible());
        assert!(!region.has_error_class());
        assert_eq!(region.state(), &StatusState::Success("saved".to_string()));
    }

    #[test]
    fn test_hide_clears_error_class() {
        let mut region = StatusRegion::new();
        region.show_error("bad");
        region.hide();

        assert!(!region.is_visible());
        assert!(!region.has_error_class());
    }

    #[test]
    fn test_render_html_escapes_message() {
        let mut region = StatusRegion::new();
        region.show_error("<b>User & \"friends\"</b>");

        assert_eq!(
            region.render_html(),
            r#"<div id="status" class="error">&lt;b&gt;User &amp; &quot;friends&quot;&lt;/b&gt;</div>"#
        );

        region.hide();
        assert_eq!(region.render_html(), r#"<div id="status" hidden></div>"#);
    }
}
