use super::*;

#[test]
fn short_paragraph_is_one_line() {
    assert_eq!(wrap_paragraph("Thank you!", 45), vec!["Thank you!"]);
}

#[test]
fn greedy_breaks_at_whitespace() {
    let lines = wrap_paragraph(
        "The quick brown fox jumps over the lazy dog and keeps running far away",
        20,
    );
    assert_eq!(
        lines,
        vec![
            "The quick brown fox",
            "jumps over the lazy",
            "dog and keeps",
            "running far away"
        ]
    );
    assert!(lines.iter().all(|l| l.chars().count() <= 20));
}

#[test]
fn long_word_fills_remaining_space_then_continues() {
    assert_eq!(wrap_paragraph("hi abcdefgh", 5), vec!["hi ab", "cdefg", "h"]);
}

#[test]
fn long_word_after_exactly_full_line_starts_fresh() {
    let text = format!("{} {}", "a".repeat(44), "b".repeat(50));
    let lines = wrap_paragraph(&text, 45);
    assert_eq!(lines, vec!["a".repeat(44), "b".repeat(45), "b".repeat(5)]);
    assert!(lines.iter().all(|l| l.chars().count() <= 45));
}

#[test]
fn long_word_never_overfills_any_line() {
    for lead in 40..=46 {
        let text = format!("{} {} tail", "a".repeat(lead), "b".repeat(97));
        for line in wrap_paragraph(&text, WIDTH) {
            assert!(line.chars().count() <= WIDTH, "{lead}: {line:?}");
        }
    }
}

#[test]
fn edge_whitespace_dropped_except_first_line_indent() {
    assert_eq!(
        wrap_paragraph("  lead  two  spaces here", 10),
        vec!["  lead", "two", "spaces", "here"]
    );
}

#[test]
fn hyphenated_words_stay_whole() {
    assert_eq!(
        wrap_paragraph("a well-known self-evident truth that", 20),
        vec!["a well-known", "self-evident truth", "that"]
    );
}

#[test]
fn tabs_expand_to_tab_stops() {
    assert_eq!(wrap_paragraph("a\tb", 20), vec!["a       b"]);
}

#[test]
fn blank_paragraph_yields_no_lines() {
    assert!(wrap_paragraph("", 45).is_empty());
    assert!(wrap_paragraph("    ", 45).is_empty());
}

#[test]
fn width_counts_characters_not_bytes() {
    let text = "caf\u{e9} na\u{ef}ve r\u{e9}sum\u{e9}";
    assert_eq!(wrap_paragraph(text, 11), vec!["caf\u{e9} na\u{ef}ve", "r\u{e9}sum\u{e9}"]);
}

#[test]
fn response_paragraphs_wrap_independently() {
    let response = "You made math fun for the whole class this year.\nThanks!";
    let wrapped = wrap_response(response, 45);
    let lines: Vec<&str> = wrapped.split('\n').collect();
    assert_eq!(
        lines,
        vec!["You made math fun for the whole class this", "year.", "Thanks!"]
    );
}

#[test]
fn blank_lines_in_response_survive() {
    assert_eq!(wrap_response("a\n\nb", 45), "a\n\nb");
}

#[test]
fn wrapping_is_idempotent() {
    let samples = [
        "Thank you for always believing in me, even when I did not believe in myself.",
        "Short\nand sweet\n\nwith a gap",
        "Supercalifragilisticexpialidociousandthensomemoreletters after",
        "  indented start with    several   spaces between words in the middle of it",
    ];
    let exact_fill = format!("{} {}", "a".repeat(44), "b".repeat(50));
    for s in samples.into_iter().chain([exact_fill.as_str()]) {
        let once = wrap_response(s, WIDTH);
        let twice = wrap_response(&once, WIDTH);
        assert_eq!(once, twice, "wrap not idempotent for {s:?}");
    }
}

const WIDTH: usize = 45;
