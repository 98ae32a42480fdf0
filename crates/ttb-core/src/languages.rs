//! Static language-code → display-name table used in translation replies.

pub const ENGLISH: &str = "en";

/// Label used when detection fails and we still translate.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("bn", "Bengali"),
    ("hi", "Hindi"),
    ("ar", "Arabic"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
    ("it", "Italian"),
    ("ur", "Urdu"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("mr", "Marathi"),
    ("tr", "Turkish"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("id", "Indonesian"),
    ("vi", "Vietnamese"),
    ("fa", "Persian"),
    ("uk", "Ukrainian"),
];

/// Human-readable name for a language code, or the upper-cased code when unknown.
pub fn display_name(code: &str) -> String {
    LANGUAGE_NAMES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

pub fn supported_count() -> usize {
    LANGUAGE_NAMES.len()
}
