//! Combining marks stacked by the glitch composer.

/// Combining diacritics from U+0300..U+036F. Each renders on top of or under
/// the character it follows.
pub const GLITCH_MARKS: &[char] = &[
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0304}', '\u{0305}',
    '\u{0306}', '\u{0307}', '\u{0308}', '\u{0309}', '\u{030A}', '\u{030B}',
    '\u{030C}', '\u{030D}', '\u{030E}', '\u{030F}', '\u{0310}', '\u{0311}',
    '\u{0312}', '\u{0313}', '\u{0314}', '\u{0315}', '\u{031A}', '\u{031B}',
    '\u{033D}', '\u{033E}', '\u{033F}', '\u{0340}', '\u{0341}', '\u{0342}',
    '\u{0343}', '\u{0344}', '\u{0346}', '\u{034A}', '\u{034B}', '\u{034C}',
    '\u{0350}', '\u{0351}', '\u{0352}', '\u{0357}', '\u{035B}', '\u{0363}',
    '\u{0316}', '\u{0317}', '\u{0318}', '\u{0319}', '\u{031C}', '\u{031D}',
    '\u{031E}', '\u{031F}', '\u{0320}', '\u{0324}', '\u{0325}', '\u{0326}',
    '\u{0329}', '\u{032A}', '\u{032B}', '\u{032C}', '\u{032D}', '\u{032E}',
    '\u{032F}', '\u{0330}', '\u{0331}', '\u{0332}', '\u{0333}', '\u{0339}',
    '\u{033A}', '\u{033B}', '\u{033C}', '\u{0345}', '\u{0347}', '\u{0348}',
    '\u{0349}', '\u{034D}', '\u{034E}', '\u{0353}', '\u{0354}', '\u{0355}',
    '\u{0356}', '\u{0359}', '\u{035A}', '\u{0334}', '\u{0335}', '\u{0336}',
    '\u{0337}', '\u{0338}',
];

/// Whether `c` lies in the Combining Diacritical Marks block
pub fn is_combining(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
