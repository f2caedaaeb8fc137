//! # Deterministic Machine Colors
//!
//! Every machine gets a display color derived from its equipment group
//! (the first letter of its code) and its rank within that group. The
//! derivation is a pure function of the full key set: keys are sorted by
//! a natural, numeric-aware comparison before ranks are assigned, so the
//! result is invariant under permutation of the input and toggling the
//! display order can never change a machine's color.
//!
//! The first machine of a group keeps the group's base color; subsequent
//! machines shift the base lightness by `±8 × ceil(rank / 2)` percentage
//! points with alternating sign (odd ranks lighter first), clamped to
//! [20, 85], with hue and saturation unchanged.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Lightness shift per alternation step, in percentage points.
const LIGHTNESS_STEP: i32 = 8;

/// Lightness clamp range, in percent.
const LIGHTNESS_MIN: i32 = 20;
const LIGHTNESS_MAX: i32 = 85;

/// Base color for group letters without a palette entry.
const FALLBACK_BASE: (u16, u8, i32) = (0, 0, 55);

/// Closed base palette: (hue, saturation %, lightness %) per group letter.
fn group_base(letter: char) -> (u16, u8, i32) {
    match letter {
        'A' => (210, 70, 50),
        'B' => (0, 72, 52),
        'C' => (130, 55, 42),
        'D' => (30, 85, 52),
        'E' => (275, 60, 55),
        'F' => (180, 60, 40),
        'G' => (50, 80, 48),
        'H' => (330, 65, 55),
        _ => FALLBACK_BASE,
    }
}

/// Group letter of a machine key: its first character, uppercased.
pub fn group_letter(key: &str) -> char {
    key.chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

/// Natural string comparison: digit runs compare by numeric value, so
/// "A10" sorts after "A9" instead of after "A1". Non-digit characters
/// compare case-insensitively.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let na = take_digits(&mut ca);
                let nb = take_digits(&mut cb);
                match cmp_digit_runs(&na, &nb) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(x), Some(y)) => {
                let lx = x.to_ascii_lowercase();
                let ly = y.to_ascii_lowercase();
                if lx != ly {
                    return lx.cmp(&ly);
                }
                ca.next();
                cb.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(*c);
        chars.next();
    }
    run
}

/// Compare two digit runs numerically without overflow: strip leading
/// zeros, then a longer run is larger, equal lengths compare as text.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Derive a color for every machine key, as an `hsl(h, s%, l%)` string.
///
/// Pure in the key set: the same keys in any order produce the same
/// mapping. Group ranks are recomputed from scratch on every call, so the
/// derivation never depends on earlier passes.
pub fn assign_colors<S: AsRef<str>>(keys: &[S]) -> HashMap<String, String> {
    let mut sorted: Vec<&str> = keys.iter().map(AsRef::as_ref).collect();
    sorted.sort_by(|a, b| natural_cmp(a, b));
    sorted.dedup();

    // Per-pass group state: machines seen so far per group letter.
    let mut seen: HashMap<char, u32> = HashMap::new();
    let mut colors = HashMap::with_capacity(sorted.len());

    for key in sorted {
        let letter = group_letter(key);
        let rank = seen.entry(letter).or_insert(0);
        let (hue, saturation, base_lightness) = group_base(letter);
        let lightness = shifted_lightness(base_lightness, *rank);
        *rank += 1;

        colors.insert(
            key.to_string(),
            format!("hsl({hue}, {saturation}%, {lightness}%)"),
        );
    }

    colors
}

/// Lightness for a group-local rank: rank 0 keeps the base, odd ranks
/// lighten, even ranks darken, magnitude grows every second rank.
fn shifted_lightness(base: i32, rank: u32) -> i32 {
    if rank == 0 {
        return base;
    }
    let rank = rank as i32;
    let magnitude = LIGHTNESS_STEP * ((rank + 1) / 2);
    let shift = if rank % 2 == 1 { magnitude } else { -magnitude };
    (base + shift).clamp(LIGHTNESS_MIN, LIGHTNESS_MAX)
}
