//! Paragraph reflow
//!
//! Re-wraps plain paragraph text to a target width while leaving every structural line
//! (headings, list items, table rows, block quotes, thematic breaks) and everything inside
//! fenced code blocks exactly as it was.
//!
//! Wrapping is greedy over whitespace-separated words. A word that would read as block
//! syntax at the start of a line (`#`, `>`, `-`, `1.`, `|`, a fence, a row of `=`) is never
//! moved to the start of a new line; it stays glued to the previous word even if that line
//! then runs past the width. If a paragraph still wraps into something a reader would not
//! take as plain text, it is emitted unchanged. Both measures keep
//! `reflow(reflow(x, w), w) == reflow(x, w)`.

use super::classify::{
    classify_with_next, closes_fence, fence_run, is_blank, is_setext_underline, LineKind,
};

/// Re-wrap plain paragraphs in `text` to `width` columns. A width of zero is a no-op.
pub fn reflow(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut paragraph: Vec<&str> = Vec::new();
    let mut open_fence: Option<(char, usize)> = None;

    for (i, &line) in lines.iter().enumerate() {
        if let Some((fence, run)) = open_fence {
            if closes_fence(line, fence, run) {
                open_fence = None;
            }
            out.push(line.to_string());
            continue;
        }

        let kind = classify_with_next(line, lines.get(i + 1).copied());
        if kind == LineKind::FenceDelimiter {
            flush(&mut paragraph, width, &mut out);
            open_fence = fence_run(line);
            out.push(line.to_string());
        } else if is_blank(line) || kind.is_structural() || is_setext_underline(line) {
            flush(&mut paragraph, width, &mut out);
            out.push(line.to_string());
        } else {
            paragraph.push(line);
        }
    }
    flush(&mut paragraph, width, &mut out);

    out.join("\n")
}

fn flush(paragraph: &mut Vec<&str>, width: usize, out: &mut Vec<String>) {
    if paragraph.is_empty() {
        return;
    }

    let words: Vec<&str> = paragraph
        .iter()
        .flat_map(|line| line.split_whitespace())
        .collect();
    let wrapped = wrap_words(&words, width);

    if reads_as_plain(&wrapped) {
        out.extend(wrapped);
    } else {
        out.extend(paragraph.iter().map(|line| line.to_string()));
    }
    paragraph.clear();
}

fn wrap_words(words: &[&str], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in words {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else if can_start_line(word) {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else if let Some(at) = carry_point(&current) {
            // Carry the previous word down so the marker never leads a line.
            let carried = current.split_off(at + 1);
            current.pop();
            lines.push(std::mem::take(&mut current));
            current = carried;
            current.push(' ');
            current.push_str(word);
            current_len = current.chars().count();
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Byte offset of the space before the last word of `line`, when that word may lead a line.
fn carry_point(line: &str) -> Option<usize> {
    line.rfind(' ').filter(|&at| can_start_line(&line[at + 1..]))
}

/// Whether `word` is safe as the first word of a continuation line.
fn can_start_line(word: &str) -> bool {
    if word.starts_with(['#', '>', '|']) || word.starts_with("```") || word.starts_with("~~~") {
        return false;
    }
    if matches!(word, "-" | "*" | "+") {
        return false;
    }
    if let Some(number) = word.strip_suffix('.') {
        if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
    }
    !word
        .chars()
        .all(|c| matches!(c, '-' | '|' | ':' | '=' | '*' | '_'))
}

fn reads_as_plain(lines: &[String]) -> bool {
    lines.iter().enumerate().all(|(i, line)| {
        let next = lines.get(i + 1).map(String::as_str);
        classify_with_next(line, next) == LineKind::Plain && !is_setext_underline(line)
    })
}
