use once_cell::sync::Lazy;
use regex::Regex;

static CONTROL_WS: Lazy<Regex> = Lazy::new(|| Regex::new("[\t\r\u{000B}\u{000C}]").unwrap());
static WS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

// Canonical text form: single spaces, straight quotes, no surrounding
// whitespace. Idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    let text = text.replace(['\u{00A0}', '\u{202F}'], " ");
    let text = CONTROL_WS.replace_all(&text, " ");
    let text = WS_RUN.replace_all(&text, " ");
    let text = text.replace(['\u{201C}', '\u{201D}'], "\"");
    let text = text.replace(['\u{2018}', '\u{2019}'], "'");
    text.trim().to_string()
}
