//! Formatting utilities for Telegram HTML replies.

use crate::languages;

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Truncate to `max_chars` characters, appending `...` when something was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Body of the reply posted under a translated message.
pub fn translation_reply(
    source_code: &str,
    translated: &str,
    original: &str,
    preview_len: usize,
) -> String {
    let lang_name = languages::display_name(source_code);
    format!(
        "🌐 <b>Translation</b>\n\n<b>{} → English:</b>\n{}\n\n<i>Original: {}</i>",
        escape_html(&lang_name),
        escape_html(translated),
        escape_html(&truncate_chars(original, preview_len)),
    )
}
