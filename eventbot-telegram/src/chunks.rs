//! Splitting of long replies to fit Telegram's per-message limit.

/// Maximum text length of a single Telegram message.
pub const TELEGRAM_MAX_MESSAGE_CHARS: usize = 4096;

/// Splits `text` into pieces of at most `max_chars` characters, preferring line boundaries.
/// A single line longer than the limit is cut at character boundaries.
pub fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split_inclusive('\n') {
        let line_len = line.chars().count();

        if current_len + line_len > max_chars && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len > max_chars {
            let chars: Vec<char> = line.chars().collect();
            for piece in chars.chunks(max_chars) {
                let piece: String = piece.iter().collect();
                if piece.chars().count() == max_chars {
                    chunks.push(piece);
                } else {
                    current_len = piece.chars().count();
                    current = piece;
                }
            }
        } else {
            current.push_str(line);
            current_len += line_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
