//! Letter ↔ dot pattern correspondence (Grade 1, no contractions).

use once_cell::sync::Lazy;

use crate::Dots;

/// Marker letter stored in front of a digit's letter cell.
pub const NUMBER_SIGN: char = '#';

/// Canonical patterns. The order matters: when several letters are equally
/// close to a pattern the earlier entry wins.
pub static LETTER_TABLE: [(char, Dots); 36] = [
    ('a', Dots::pattern(&[1])),
    ('b', Dots::pattern(&[1, 2])),
    ('c', Dots::pattern(&[1, 4])),
    ('d', Dots::pattern(&[1, 4, 5])),
    ('e', Dots::pattern(&[1, 5])),
    ('f', Dots::pattern(&[1, 2, 4])),
    ('g', Dots::pattern(&[1, 2, 4, 5])),
    ('h', Dots::pattern(&[1, 2, 5])),
    ('i', Dots::pattern(&[2, 4])),
    ('j', Dots::pattern(&[2, 4, 5])),
    ('k', Dots::pattern(&[1, 3])),
    ('l', Dots::pattern(&[1, 2, 3])),
    ('m', Dots::pattern(&[1, 3, 4])),
    ('n', Dots::pattern(&[1, 3, 4, 5])),
    ('o', Dots::pattern(&[1, 3, 5])),
    ('p', Dots::pattern(&[1, 2, 3, 4])),
    ('q', Dots::pattern(&[1, 2, 3, 4, 5])),
    ('r', Dots::pattern(&[1, 2, 3, 5])),
    ('s', Dots::pattern(&[2, 3, 4])),
    ('t', Dots::pattern(&[2, 3, 4, 5])),
    ('u', Dots::pattern(&[1, 3, 6])),
    ('v', Dots::pattern(&[1, 2, 3, 6])),
    ('w', Dots::pattern(&[2, 4, 5, 6])),
    ('x', Dots::pattern(&[1, 3, 4, 6])),
    ('y', Dots::pattern(&[1, 3, 4, 5, 6])),
    ('z', Dots::pattern(&[1, 3, 5, 6])),
    (' ', Dots::empty()),
    ('.', Dots::pattern(&[2, 5, 6])),
    (',', Dots::pattern(&[2])),
    ('?', Dots::pattern(&[2, 6])),
    ('!', Dots::pattern(&[2, 3, 5])),
    (';', Dots::pattern(&[2, 3])),
    (':', Dots::pattern(&[2, 5])),
    ('-', Dots::pattern(&[3, 6])),
    (NUMBER_SIGN, Dots::pattern(&[3, 4, 5, 6])),
    ('⠿', Dots::all()),
];

static NEAREST_LETTER: Lazy<[char; 64]> = Lazy::new(|| {
    let mut lookup = [' '; 64];
    for (bits, slot) in lookup.iter_mut().enumerate() {
        *slot = nearest_letter(Dots::from_bits_truncate(bits as u8));
    }
    lookup
});

fn nearest_letter(dots: Dots) -> char {
    if let Some((ch, _)) = LETTER_TABLE.iter().find(|(_, pattern)| *pattern == dots) {
        return *ch;
    }
    let mut best = ' ';
    let mut best_distance = u32::MAX;
    for (ch, pattern) in &LETTER_TABLE {
        let distance = pattern.distance(dots);
        if distance < best_distance {
            best_distance = distance;
            best = *ch;
        }
    }
    best
}

/// Canonical pattern of `ch`, case-insensitive. Unknown characters have no dots.
pub fn letter_to_dots(ch: char) -> Dots {
    let ch = ch.to_ascii_lowercase();
    LETTER_TABLE.iter().find(|(c, _)| *c == ch).map_or(Dots::empty(), |(_, dots)| *dots)
}

/// The letter whose pattern is closest to `dots`.
pub fn dots_to_letter(dots: Dots) -> char {
    NEAREST_LETTER[dots.bits() as usize & 0x3F]
}

pub fn is_known_letter(ch: char) -> bool {
    let ch = ch.to_ascii_lowercase();
    LETTER_TABLE.iter().any(|(c, _)| *c == ch)
}

/// Uppercase is not encoded in the dots; this is a hint for front ends only.
pub fn is_uppercase_hint(ch: char) -> bool {
    ch.is_uppercase()
}

/// Maps `'1'..='9'` to `'a'..='i'` and `'0'` to `'j'`.
pub fn digit_to_letter(ch: char) -> Option<char> {
    match ch {
        '0' => Some('j'),
        '1'..='9' => Some((b'a' + (ch as u8 - b'1')) as char),
        _ => None,
    }
}
