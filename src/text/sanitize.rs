use std::ops::RangeInclusive;

/// Code point ranges removed before text is measured or drawn.
///
/// The body fonts carry no color glyph tables, so anything in these blocks would render as a
/// missing-glyph box and skew the measured width. The final range is intentionally wide: it
/// starts at U+24C2 and runs into the supplementary planes.
pub const STRIPPED_RANGES: [RangeInclusive<u32>; 11] = [
    0x1F600..=0x1F64F, // emoticons
    0x1F300..=0x1F5FF, // symbols & pictographs
    0x1F680..=0x1F6FF, // transport & map
    0x1F700..=0x1F77F, // alchemical symbols
    0x1F780..=0x1F7FF, // geometric shapes extended
    0x1F800..=0x1F8FF, // supplemental arrows-c
    0x1F900..=0x1F9FF, // supplemental symbols & pictographs
    0x1FA00..=0x1FA6F, // chess symbols
    0x1FA70..=0x1FAFF, // symbols & pictographs extended-a
    0x2702..=0x27B0,   // dingbats
    0x24C2..=0x1F251,  // enclosed characters
];

/// Whether `c` falls inside one of [`STRIPPED_RANGES`].
pub fn is_stripped_char(c: char) -> bool {
    let cp = u32::from(c);
    STRIPPED_RANGES.iter().any(|r| r.contains(&cp))
}

/// Remove emoji and pictograph code points, keeping everything else (newlines included) in order.
pub fn strip_emoji(text: &str) -> String {
    text.chars().filter(|&c| !is_stripped_char(c)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/sanitize.rs"]
mod tests;
