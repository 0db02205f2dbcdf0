//! 金額輸入欄位的格式化
//!
//! 輸入時只保留數字與小數點；離開欄位時轉成 `$<整數>.<兩位小數>`，
//! 沒有任何數字或沒有小數點且全為 0 時清成空字串。

/// 輸入事件：去掉數字與 `.` 以外的字元，保留 "12." 這類未完成的輸入
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// 離開欄位事件：轉成標準金額字串
///
/// 小數超過兩位時直接截斷（`"0.005"` → `"$0.00"`），第二個 `.` 之後的內容捨棄。
pub fn canonicalize(text: &str) -> String {
    let cleaned = sanitize(text);

    if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
        return String::new();
    }

    let value = cleaned.trim_start_matches('0');

    match value.split_once('.') {
        Some((integer, rest)) => {
            let fraction = rest.split_once('.').map_or(rest, |(first, _)| first);
            format!("${}.{}", integer_part(integer), fraction_part(fraction))
        }
        // 全部是 0 時去掉前導零後就沒有內容了
        None if value.is_empty() => String::new(),
        None => format!("${}.00", value),
    }
}

fn integer_part(digits: &str) -> &str {
    if digits.is_empty() {
        "0"
    } else {
        digits
    }
}

fn fraction_part(digits: &str) -> String {
    match digits.len() {
        0 => "00".to_string(),
        1 => format!("{}0", digits),
        2 => digits.to_string(),
        // 只含 ASCII 數字，可以直接用位元組切
        _ => digits[..2].to_string(),
    }
}

/// 金額欄位送出前去掉 `$` 並 trim
pub fn clean_amount(raw: &str) -> String {
    raw.replace('$', "").trim().to_string()
}

/// 綁定在金額欄位上的輸入狀態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyInput {
    value: String,
}

impl CurrencyInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// 模擬使用者輸入後離開欄位
    pub fn from_raw(text: &str) -> Self {
        let mut input = Self::new();
        input.on_input(text);
        input.on_blur();
        input
    }

    pub fn on_input(&mut self, text: &str) {
        self.value = sanitize(text);
    }

    pub fn on_blur(&mut self) {
        self.value = canonicalize(&self.value);
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// 送到後端的金額：去掉 `$` 並 trim
    pub fn amount(&self) -> String {
        clean_amount(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use regex::Regex;

    const SAMPLES: &[&str] = &[
        "",
        "abc",
        "0",
        "000",
        "5",
        "12.",
        "012.3",
        "0.005",
        ".5",
        ".",
        "..",
        "1.2.3",
        "$1,234.567",
        "  42 ",
        "0.1",
        "100",
        "1e5",
        "-7.25",
        "$12.30",
    ];

    #[test]
    fn test_sanitize_keeps_partial_input() {
        assert_eq!(sanitize("12."), "12.");
        assert_eq!(sanitize("$1,234.5a"), "1234.5");
        assert_eq!(sanitize("abc"), "");
    }

    #[test]
    fn test_canonicalize_examples() {
        assert_eq!(canonicalize("012.3"), "$12.30");
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("abc"), "");
        assert_eq!(canonicalize("5"), "$5.00");
        assert_eq!(canonicalize("12."), "$12.00");
        assert_eq!(canonicalize("12.34"), "$12.34");
        assert_eq!(canonicalize("$1,234.567"), "$1234.56");
    }

    #[test]
    fn test_canonicalize_truncates_extra_fraction_digits() {
        assert_eq!(canonicalize("0.005"), "$0.00");
        assert_eq!(canonicalize("3.999"), "$3.99");
    }

    #[test]
    fn test_canonicalize_all_zeros_and_missing_integer() {
        assert_eq!(canonicalize("0"), "");
        assert_eq!(canonicalize("000"), "");
        assert_eq!(canonicalize("0.5"), "$0.50");
        assert_eq!(canonicalize("00."), "$0.00");
        assert_eq!(canonicalize(".5"), "$0.50");
        assert_eq!(canonicalize("."), "");
    }

    #[test]
    fn test_canonicalize_drops_after_second_separator() {
        assert_eq!(canonicalize("1.2.3"), "$1.20");
    }

    #[test]
    fn test_canonical_shape() {
        let shape = canonical_shape();
        for sample in SAMPLES {
            let out = canonicalize(sample);
            assert!(shape.is_match(&out), "{:?} -> {:?}", sample, out);
        }
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        for sample in SAMPLES {
            let once = canonicalize(sample);
            assert_eq!(canonicalize(&once), once, "input {:?}", sample);
        }
    }

    fn canonical_shape() -> Regex {
        Regex::new(r"^$|^\$\d+\.\d{2}$").unwrap()
    }

    proptest! {
        #[test]
        fn canonicalize_shape_holds_for_any_text(text in any::<String>()) {
            let out = canonicalize(&text);
            prop_assert!(canonical_shape().is_match(&out), "{:?} -> {:?}", text, out);
        }

        #[test]
        fn canonicalize_shape_holds_for_amount_like_text(text in "[0-9.$a-z,]*") {
            let out = canonicalize(&text);
            prop_assert!(canonical_shape().is_match(&out), "{:?} -> {:?}", text, out);
        }

        #[test]
        fn canonicalize_is_idempotent_for_any_text(text in any::<String>()) {
            let once = canonicalize(&text);
            prop_assert_eq!(canonicalize(&once), once);
        }

        #[test]
        fn canonicalize_is_idempotent_for_amount_like_text(text in "[0-9.$a-z,]*") {
            let once = canonicalize(&text);
            prop_assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn test_currency_input_events() {
        let mut input = CurrencyInput::new();
        input.on_input("$12.3x");
        assert_eq!(input.value(), "12.3");
        input.on_blur();
        assert_eq!(input.value(), "$12.30");
        assert_eq!(input.amount(), "12.30");

        let blank = CurrencyInput::from_raw("   ");
        assert!(blank.is_empty());
        assert_eq!(blank.amount(), "");
    }
}
