//! ASCII and emoji templates. Every entry carries [`PLACEHOLDER`] once.

use serde::{Deserialize, Serialize};

/// Marker replaced by the styled text
pub const PLACEHOLDER: &str = "{{text}}";

/// Catalog grouping for templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Weapons,
    Emotions,
    Nature,
    Borders,
    Music,
}

impl TemplateCategory {
    /// Declaration order; the generator flattens templates in this order.
    pub const ALL: [TemplateCategory; 5] = [
        TemplateCategory::Weapons,
        TemplateCategory::Emotions,
        TemplateCategory::Nature,
        TemplateCategory::Borders,
        TemplateCategory::Music,
    ];

    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            TemplateCategory::Weapons => WEAPONS,
            TemplateCategory::Emotions => EMOTIONS,
            TemplateCategory::Nature => NATURE,
            TemplateCategory::Borders => BORDERS,
            TemplateCategory::Music => MUSIC,
        }
    }
}

impl std::fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateCategory::Weapons => write!(f, "weapons"),
            TemplateCategory::Emotions => write!(f, "emotions"),
            TemplateCategory::Nature => write!(f, "nature"),
            TemplateCategory::Borders => write!(f, "borders"),
            TemplateCategory::Music => write!(f, "music"),
        }
    }
}

pub const WEAPONS: &[&str] = &[
    "▬▬ι═══════ﺤ {{text}} -═══════ι▬▬",
    "︻デ═一 {{text}}",
    "🗡️ {{text}} 🗡️",
    "⚔️ {{text}} ⚔️",
    "━╤デ╦︻ {{text}} ︻╦デ╤━",
    "(҂`_´) {{text}} ︻╦̵̵̿╤──",
    "🏹 {{text}} ➳",
    "o()xxxx[{::::::::: {{text}} :::::::::}]xxxx()o",
];

pub const EMOTIONS: &[&str] = &[
    "(づ｡◕‿‿◕｡)づ {{text}}",
    "ʕ•ᴥ•ʔ {{text}} ʕ•ᴥ•ʔ",
    "(ﾉ◕ヮ◕)ﾉ*:･ﾟ✧ {{text}}",
    "¯_(ツ)_/¯ {{text}}",
    "(╯°□°)╯︵ {{text}}",
    "♥‿♥ {{text}} ♥‿♥",
    "(◕‿◕✿) {{text}}",
    "ಠ_ಠ {{text}} ಠ_ಠ",
    "(っ◔◡◔)っ ♥ {{text}} ♥",
];

pub const NATURE: &[&str] = &[
    "🌸 {{text}} 🌸",
    "🍃 {{text}} 🍂",
    "🌙 {{text}} ⭐",
    "🌊 {{text}} 🌊",
    "🌵 {{text}} 🌵",
    "❀ ✿ {{text}} ✿ ❀",
    "🌻🌼 {{text}} 🌼🌻",
    "☁️ {{text}} ☀️",
];

pub const BORDERS: &[&str] = &[
    "╔═══ {{text}} ═══╗",
    "【 {{text}} 】",
    "▁ ▂ ▄ ▅ ▆ ▇ █ {{text}} █ ▇ ▆ ▅ ▄ ▂ ▁",
    "•°¯`•• {{text}} ••´¯°•",
    "꧁༒☬ {{text}} ☬༒꧂",
    "·.¸¸.·♩♪♫ {{text}} ♫♪♩·.¸¸.·",
    "▓▒░ {{text}} ░▒▓",
    "〖 {{text}} 〗",
    "┊┊┊ {{text}} ┊┊┊",
    "▀▄▀▄▀▄ {{text}} ▄▀▄▀▄▀",
];

pub const MUSIC: &[&str] = &[
    "♪♫ {{text}} ♫♪",
    "🎧 {{text}} 🎶",
    "🎸 {{text}} 🥁",
    "♬ ♩ {{text}} ♩ ♬",
    "🎤 {{text}} 🎼",
    "ılılı {{text}} ılılı",
];
