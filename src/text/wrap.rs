//! Greedy column-count word wrapping.
//!
//! Widths are counted in Unicode scalar values, not pixels: the body face is a monospaced
//! typewriter font, so characters are a faithful proxy for horizontal extent.

const TAB_STOP: usize = 8;

fn is_wrap_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Expand tabs to the next tab stop and turn every other wrap whitespace character into a space.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut col = 0usize;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_STOP - (col % TAB_STOP);
                out.extend(std::iter::repeat_n(' ', pad));
                col += pad;
            }
            c if is_wrap_space(c) => {
                out.push(' ');
                col += 1;
            }
            c => {
                out.push(c);
                col += 1;
            }
        }
    }
    out
}

/// Split into alternating runs of spaces and non-spaces.
fn split_chunks(text: &str) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_is_space = false;
    for c in text.chars() {
        let is_space = c == ' ';
        if !current.is_empty() && is_space != current_is_space {
            chunks.push(std::mem::take(&mut current));
        }
        current_is_space = is_space;
        current.push(c);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_blank(s: &str) -> bool {
    s.chars().all(|c| c == ' ')
}

/// Wrap a single paragraph (no embedded newlines) to at most `width` characters per line.
///
/// Lines break at whitespace. Whitespace at the edges of produced lines is dropped, except
/// leading whitespace on the first line when text follows it. A word longer than `width` fills
/// whatever room the current line has left and continues on the next. Blank input yields no
/// lines.
pub fn wrap_paragraph(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = split_chunks(&normalize_whitespace(text));
    chunks.reverse();

    let mut lines = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<String> = Vec::new();
        let mut line_len = 0usize;

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.last() {
            let len = char_len(chunk);
            if line_len + len > width {
                break;
            }
            line_len += len;
            if let Some(chunk) = chunks.pop() {
                line.push(chunk);
            }
        }

        // A full line leaves no room; the long word then starts the next line.
        if let Some(chunk) = chunks.last_mut()
            && char_len(chunk) > width
            && line_len < width
        {
            let space_left = width - line_len;
            let split_at = chunk
                .char_indices()
                .nth(space_left)
                .map_or(chunk.len(), |(i, _)| i);
            let rest = chunk.split_off(split_at);
            line.push(std::mem::replace(chunk, rest));
        }

        if line.last().is_some_and(|c| is_blank(c)) {
            line.pop();
        }

        if !line.is_empty() {
            lines.push(line.concat());
        }
    }
    lines
}

/// Wrap each newline-separated paragraph independently and rejoin all lines with `\n`.
///
/// An empty paragraph contributes one empty line, so blank lines in the source survive.
pub fn wrap_response(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|paragraph| wrap_paragraph(paragraph, width).join("\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
