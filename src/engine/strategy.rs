//! The twelve composition strategies

use rand::Rng;

use super::zalgo::glitch_with_rng;
use crate::symbols::PLACEHOLDER;
use crate::types::Category;

const HEAVY_RULE: &str = "────────";
const SPARKLE_LEFT: &str = "˜”*°•.˜”*°•";
const SPARKLE_RIGHT: &str = "•°*”˜.•°*”˜";

/// How one iteration assembles its final string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Plain,
    Template,
    Flanked,
    DoubleFlanked,
    GlitchRaw,
    FlankedTemplate,
    Compact,
    /// Same output as [`Strategy::Flanked`]; keeps its own slot in the rotation.
    FlankedAlt,
    HeavyRule,
    Sparkle,
    Bracket,
    GlitchTemplate,
}

/// Inputs one strategy may draw from
#[derive(Debug, Clone, Copy)]
pub struct Parts<'a> {
    pub input: &'a str,
    pub styled: &'a str,
    pub template: &'a str,
    pub decorator: &'a str,
    pub marks: &'a [char],
}

impl Strategy {
    pub const COUNT: usize = 12;

    /// Rotation order; `ALL[i % 12]` is the strategy for iteration `i`.
    pub const ALL: [Strategy; Strategy::COUNT] = [
        Strategy::Plain,
        Strategy::Template,
        Strategy::Flanked,
        Strategy::DoubleFlanked,
        Strategy::GlitchRaw,
        Strategy::FlankedTemplate,
        Strategy::Compact,
        Strategy::FlankedAlt,
        Strategy::HeavyRule,
        Strategy::Sparkle,
        Strategy::Bracket,
        Strategy::GlitchTemplate,
    ];

    pub fn for_index(index: u64) -> Self {
        Self::ALL[(index % Self::COUNT as u64) as usize]
    }

    /// Position of this strategy in the rotation (0..12)
    pub fn number(&self) -> usize {
        *self as usize
    }

    pub fn category(&self) -> Category {
        match self {
            Strategy::Template => Category::Art,
            _ => Category::Style,
        }
    }

    /// Whether the output depends on the random source
    pub fn is_random(&self) -> bool {
        matches!(self, Strategy::GlitchRaw | Strategy::GlitchTemplate)
    }

    pub fn compose<R: Rng + ?Sized>(&self, parts: &Parts<'_>, rng: &mut R) -> String {
        let Parts {
            input,
            styled,
            template,
            decorator: d,
            marks,
        } = *parts;

        match self {
            Strategy::Plain => styled.to_string(),
            Strategy::Template => inject(template, styled),
            Strategy::Flanked | Strategy::FlankedAlt => format!("{d} {styled} {d}"),
            Strategy::DoubleFlanked => format!("{d} {d} {styled} {d} {d}"),
            Strategy::GlitchRaw => glitch_with_rng(input, marks, rng),
            Strategy::FlankedTemplate => inject(template, &format!("{d} {styled} {d}")),
            Strategy::Compact => format!("{d}{styled}{d}"),
            Strategy::HeavyRule => format!("{HEAVY_RULE} {styled} {HEAVY_RULE}"),
            Strategy::Sparkle => format!("{SPARKLE_LEFT} {styled} {SPARKLE_RIGHT}"),
            Strategy::Bracket => format!("『 {styled} 』"),
            Strategy::GlitchTemplate => inject(template, &glitch_with_rng(styled, marks, rng)),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Plain => "plain",
            Strategy::Template => "template",
            Strategy::Flanked => "flanked",
            Strategy::DoubleFlanked => "double-flanked",
            Strategy::GlitchRaw => "glitch",
            Strategy::FlankedTemplate => "flanked-template",
            Strategy::Compact => "compact",
            Strategy::FlankedAlt => "flanked-alt",
            Strategy::HeavyRule => "heavy-rule",
            Strategy::Sparkle => "sparkle",
            Strategy::Bracket => "bracket",
            Strategy::GlitchTemplate => "glitch-template",
        };
        write!(f, "{}", name)
    }
}

/// Replace the first placeholder of `template` with `content`.
fn inject(template: &str, content: &str) -> String {
    template.replacen(PLACEHOLDER, content, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parts<'a>() -> Parts<'a> {
        Parts {
            input: "hi",
            styled: "HI",
            template: "【 {{text}} 】",
            decorator: "★",
            marks: &['\u{0301}'],
        }
    }

    fn run(strategy: Strategy) -> String {
        strategy.compose(&parts(), &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_rotation() {
        assert_eq!(Strategy::for_index(0), Strategy::Plain);
        assert_eq!(Strategy::for_index(1), Strategy::Template);
        assert_eq!(Strategy::for_index(11), Strategy::GlitchTemplate);
        assert_eq!(Strategy::for_index(12), Strategy::Plain);
        for (i, s) in Strategy::ALL.iter().enumerate() {
            assert_eq!(s.number(), i);
        }
    }

    #[test]
    fn test_only_template_is_art() {
        let art: Vec<_> = Strategy::ALL
            .iter()
            .filter(|s| s.category() == Category::Art)
            .collect();
        assert_eq!(art, vec![&Strategy::Template]);
    }

    #[test]
    fn test_compositions() {
        assert_eq!(run(Strategy::Plain), "HI");
        assert_eq!(run(Strategy::Template), "【 HI 】");
        assert_eq!(run(Strategy::Flanked), "★ HI ★");
        assert_eq!(run(Strategy::DoubleFlanked), "★ ★ HI ★ ★");
        assert_eq!(run(Strategy::GlitchRaw), "h\u{0301}\u{0301}i\u{0301}\u{0301}");
        assert_eq!(run(Strategy::FlankedTemplate), "【 ★ HI ★ 】");
        assert_eq!(run(Strategy::Compact), "★HI★");
        assert_eq!(run(Strategy::FlankedAlt), run(Strategy::Flanked));
        assert_eq!(run(Strategy::HeavyRule), "──────── HI ────────");
        assert_eq!(run(Strategy::Bracket), "『 HI 』");
        assert_eq!(
            run(Strategy::GlitchTemplate),
            "【 H\u{0301}\u{0301}I\u{0301}\u{0301} 】"
        );
    }

    #[test]
    fn test_sparkle_frames_both_sides() {
        let out = run(Strategy::Sparkle);
        assert!(out.starts_with(SPARKLE_LEFT));
        assert!(out.ends_with(SPARKLE_RIGHT));
        assert!(out.contains(" HI "));
    }

    #[test]
    fn test_random_flags() {
        let random: Vec<usize> = Strategy::ALL
            .iter()
            .filter(|s| s.is_random())
            .map(|s| s.number())
            .collect();
        assert_eq!(random, vec![4, 11]);
    }
}
