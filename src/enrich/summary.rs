//! Sentence-aware summary truncation.

pub const DEFAULT_MAX_LENGTH: usize = 200;

const SENTENCE_DELIMITER: &str = ". ";
const ELLIPSIS: &str = "...";

/// Shorten an extract to at most `max_length` characters of whole sentences.
///
/// Sentences are accumulated while `accumulated + sentence <= max_length`.
/// If the result is still too long, or not even the first sentence fits, the
/// text is hard-cut at `max_length`, backed off to the last space, and
/// suffixed with `"..."`. Lengths count `char`s, not bytes.
pub fn truncate_summary(extract: &str, max_length: usize) -> String {
    if extract.trim().is_empty() {
        return String::new();
    }

    let mut summary = String::new();
    let mut summary_len = 0;

    for sentence in extract.split(SENTENCE_DELIMITER) {
        let sentence_len = sentence.chars().count();
        if summary_len + sentence_len > max_length {
            break;
        }
        summary.push_str(sentence);
        // The last sentence usually carries its own full stop.
        if !sentence.ends_with('.') {
            summary.push('.');
            summary_len += 1;
        }
        summary.push(' ');
        summary_len += sentence_len + 1;
    }

    let summary = summary.trim_end();
    if summary.is_empty() {
        return hard_truncate(extract, max_length);
    }
    if summary.chars().count() > max_length {
        return hard_truncate(summary, max_length);
    }
    summary.to_string()
}

fn hard_truncate(text: &str, max_length: usize) -> String {
    let cut: String = text.chars().take(max_length).collect();
    let kept = match cut.rsplit_once(' ') {
        Some((head, _)) => head,
        None => cut.as_str(),
    };
    format!("{}{}", kept.trim_end(), ELLIPSIS)
}
