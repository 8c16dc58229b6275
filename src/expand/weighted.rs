//! Weighted alternative resolution over the `RANDOM` delimiter.
//!
//! `a RANDOM :2b RANDOM c` offers three alternatives; the `:2` prefix gives
//! `b` twice the weight of the others. One alternative is drawn and its
//! text replaces the whole string.

use std::cmp::Ordering;

use super::rng::RandomSource;

/// The delimiter literal separating weighted alternatives
pub const DELIMITER: &str = "RANDOM";

/// One `RANDOM`-delimited segment with its parsed weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedAlternative {
    /// Relative selection weight (defaults to 1.0)
    pub weight: f64,
    /// Segment text with any weight annotation stripped
    pub text: String,
}

/// Resolve a `RANDOM`-delimited string to a single weighted pick.
///
/// Strings without at least one delimiter are returned unchanged. A string
/// beginning with `RANDOM` (whitespace-only leading fragment) drops that
/// fragment so the delimiter can mark the very first alternative. Each
/// fragment may start with `:<digit>` or `:<digit>.<digits>` to set its
/// weight; anything else (including a malformed annotation) leaves the
/// fragment at weight 1.0 with its text intact.
///
/// Every fragment's selection probability is `weight / total`, regardless
/// of the ascending-weight iteration order used for the draw.
pub fn split_weighted(input: &str, rng: &mut dyn RandomSource) -> String {
    let mut fragments: Vec<&str> = input.split(DELIMITER).collect();
    if fragments.len() <= 1 {
        return input.to_string();
    }

    // A leading empty fragment means the string starts with the delimiter
    if fragments[0].trim().is_empty() {
        fragments.remove(0);
    }

    let mut alternatives: Vec<WeightedAlternative> =
        fragments.iter().map(|f| parse_alternative(f)).collect();
    let total: f64 = alternatives.iter().map(|a| a.weight).sum();

    // Stable ascending sort: equal weights keep their textual order
    alternatives.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    let sample = rng.next_f64();
    let mut cumulative = 0.0;
    let mut result = input.to_string();
    for alternative in &alternatives {
        cumulative += alternative.weight;
        result = alternative.text.clone();
        if sample < cumulative / total {
            break;
        }
    }

    result
}

/// Parse one fragment into (weight, text), consuming a leading
/// `:<digit>(.<digits>)?` annotation when present.
pub fn parse_alternative(fragment: &str) -> WeightedAlternative {
    if let Some((weight, rest)) = consume_weight(fragment) {
        WeightedAlternative {
            weight,
            text: rest.to_string(),
        }
    } else {
        WeightedAlternative {
            weight: 1.0,
            text: fragment.to_string(),
        }
    }
}

/// Match `:<digit>(.<digits>)?` at the start of `fragment`, ignoring the
/// whitespace that splitting on ` RANDOM ` leaves in front of it.
///
/// The integer part is a single digit, matching the annotation grammar; a
/// fractional part requires at least one digit after the dot or is not
/// consumed.
fn consume_weight(fragment: &str) -> Option<(f64, &str)> {
    let rest = fragment.trim_start().strip_prefix(':')?;

    let digit = rest.chars().next()?;
    if !digit.is_ascii_digit() {
        return None;
    }
    let mut end = 1;

    // Optional fraction: '.' followed by one or more digits
    let tail = &rest[end..];
    if let Some(fraction) = tail.strip_prefix('.') {
        let digits = fraction.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0 {
            end += 1 + digits;
        }
    }

    let weight: f64 = rest[..end].parse().ok()?;
    Some((weight, &rest[end..]))
}
