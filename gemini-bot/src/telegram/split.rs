//! Splitting of long replies to fit Telegram's message length limit.

/// Telegram's maximum text length for one message.
pub const TELEGRAM_MAX_LEN: usize = 4096;

/// Splits `text` into chunks of at most `max_len` characters, preferring to break at the last
/// newline inside the window. The newline at a break is dropped. Never splits a code point.
pub fn split_message(text: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    let mut chunks = Vec::new();
    let mut remaining = text;

    while remaining.chars().count() > max_len {
        // Byte offset just past the first `max_len` chars.
        let window_end = remaining
            .char_indices()
            .nth(max_len)
            .map(|(i, _)| i)
            .unwrap_or(remaining.len());
        let window = &remaining[..window_end];

        match window.rfind('\n').filter(|&i| i > 0) {
            Some(newline) => {
                chunks.push(remaining[..newline].to_string());
                remaining = &remaining[newline + 1..];
            }
            None => {
                chunks.push(window.to_string());
                remaining = &remaining[window_end..];
            }
        }
    }

    if !remaining.is_empty() || chunks.is_empty() {
        chunks.push(remaining.to_string());
    }
    chunks
}
