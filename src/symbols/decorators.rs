//! Flanking symbols placed around styled text.

pub const DECORATORS: &[&str] = &[
    "★", "☆", "✦", "✧", "✪", "✯", "❖", "✿", "❀", "❁", "♛", "♕", "♚", "♔",
    "☯", "☾", "☽", "♡", "♥", "❤", "💖", "💎", "🔥", "⚡", "🌟", "✨", "👑", "🎀",
    "🌸", "🦋", "🍀", "🌙", "☠", "⚔", "🗡", "🎵", "♪", "♫", "☘", "⚜", "❦", "❧",
    "•", "°", "¤", "×", "»", "«", "~", "彡", "ミ", "꧁", "꧂", "ஜ", "۩", "๖",
];
