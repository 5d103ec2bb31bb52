//! Unicode remapper - ASCII letters and digits into a styled alphabet

use crate::symbols::{is_special, DIGIT_THRESHOLD};

/// Map every ASCII letter (and, for high alphabets, digit) of `text` into the
/// alphabet whose capital `A` sits at `start`. Other characters pass through.
///
/// For the enclosed and squared alphabets lowercase letters land on the
/// capital codepoints, so `remap("a", ENCLOSED_START) == "Ⓐ"`.
pub fn remap(text: &str, start: u32) -> String {
    let special = is_special(start);
    text.chars().map(|c| remap_char(c, start, special)).collect()
}

fn remap_char(c: char, start: u32, special: bool) -> char {
    let target = match c {
        'A'..='Z' => start.checked_add(c as u32 - 'A' as u32),
        'a'..='z' if special => start.checked_add(c as u32 - 'a' as u32),
        'a'..='z' => start.checked_add(26 + (c as u32 - 'a' as u32)),
        '0'..='9' if start > DIGIT_THRESHOLD => start.checked_add(c as u32 - '0' as u32),
        _ => None,
    };

    target.and_then(char::from_u32).unwrap_or(c)
}
