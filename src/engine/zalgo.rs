//! Glitch composer - stacks random combining marks after every character

use rand::seq::SliceRandom;
use rand::Rng;

/// Marks appended after each character
pub const MARKS_PER_CHAR: usize = 2;

/// Glitch `text` using the thread-local random source.
pub fn glitch(text: &str, marks: &[char]) -> String {
    glitch_with_rng(text, marks, &mut rand::thread_rng())
}

/// Glitch `text` drawing marks from `rng`. Returns the input unchanged when
/// `marks` is empty.
pub fn glitch_with_rng<R: Rng + ?Sized>(text: &str, marks: &[char], rng: &mut R) -> String {
    if marks.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() * (1 + MARKS_PER_CHAR * 2));
    for c in text.chars() {
        out.push(c);
        for _ in 0..MARKS_PER_CHAR {
            if let Some(&mark) = marks.choose(rng) {
                out.push(mark);
            }
        }
    }
    out
}
