//! Unicode alphabets used by the remapper.
//!
//! Each entry is the codepoint of the alphabet's capital `A`. Blocks in the
//! Mathematical Alphanumeric Symbols plane store `A..Z` followed by `a..z`.

/// Circled Latin capitals (Ⓐ). Lowercase shares the capital range.
pub const ENCLOSED_START: u32 = 0x24B6;

/// Negative squared Latin capitals (🄰). Lowercase shares the capital range.
pub const SQUARED_START: u32 = 0x1F130;

/// Digits are only remapped for alphabets starting above this codepoint.
pub const DIGIT_THRESHOLD: u32 = 0x1D7CE;

/// Built-in alphabets, in rotation order.
pub const STYLES: &[(&str, u32)] = &[
    ("Bold", 0x1D400),
    ("Italic", 0x1D434),
    ("Bold Italic", 0x1D468),
    ("Script", 0x1D49C),
    ("Bold Script", 0x1D4D0),
    ("Fraktur", 0x1D504),
    ("Double-Struck", 0x1D538),
    ("Bold Fraktur", 0x1D56C),
    ("Sans-Serif", 0x1D5A0),
    ("Sans-Serif Bold", 0x1D5D4),
    ("Sans-Serif Italic", 0x1D608),
    ("Sans-Serif Bold Italic", 0x1D63C),
    ("Monospace", 0x1D670),
    ("Enclosed", ENCLOSED_START),
    ("Squared", SQUARED_START),
];

/// Whether `start` names one of the uppercase-only alphabets
pub fn is_special(start: u32) -> bool {
    start == ENCLOSED_START || start == SQUARED_START
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_style_is_bold() {
        assert_eq!(STYLES[0], ("Bold", 0x1D400));
    }

    #[test]
    fn test_special_detection() {
        assert!(is_special(0x24B6));
        assert!(is_special(0x1F130));
        assert!(!is_special(0x1D400));
    }

    #[test]
    fn test_math_blocks_fit_below_digits() {
        for (name, start) in STYLES.iter().filter(|(_, s)| !is_special(*s)) {
            assert!(start + 51 < DIGIT_THRESHOLD, "{} overlaps the digit block", name);
        }
    }
}
