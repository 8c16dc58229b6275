//! Serialization-time prompt resolution.
//!
//! The raw stored value runs through three stages, in order:
//!
//! 1. [`strip_comment_lines`]: drop `//` comment lines
//! 2. [`expand_braces`]: resolve `{a|b|c}` random-choice groups
//! 3. [`split_weighted`]: resolve `RANDOM`-delimited weighted alternatives
//!
//! The result is the single concrete string handed to the persistence
//! collaborator. All randomness flows through a [`RandomSource`] so hosts
//! and tests control the draws.

mod brace;
mod comment;
mod rng;
mod weighted;

pub use brace::expand_braces;
pub use comment::strip_comment_lines;
pub use rng::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use weighted::{parse_alternative, split_weighted, WeightedAlternative};

/// Resolve a raw prompt through the full pipeline.
pub fn resolve_prompt(raw: &str, rng: &mut dyn RandomSource) -> String {
    let stripped = strip_comment_lines(raw);
    let expanded = expand_braces(&stripped, rng);
    split_weighted(&expanded, rng)
}

/// [`resolve_prompt`] with the thread-local random source.
pub fn resolve_prompt_default(raw: &str) -> String {
    resolve_prompt(raw, &mut ThreadRandom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_order_comments_first() {
        // The commented-out alternative line never reaches the grammar
        let mut rng = ScriptedRandom::new(vec![0.0]);
        let out = resolve_prompt("// {a|b}\nplain", &mut rng);
        assert_eq!(out, "plain");
    }

    #[test]
    fn test_pipeline_braces_then_weights() {
        // Brace draw picks "x RANDOM y", weighted draw picks the second
        let mut rng = ScriptedRandom::new(vec![0.0, 0.9]);
        let out = resolve_prompt("{x RANDOM y|z}", &mut rng);
        assert_eq!(out, " y");
    }

    #[test]
    fn test_plain_prompt_passes_through() {
        let mut rng = ScriptedRandom::new(vec![0.5]);
        assert_eq!(resolve_prompt("a cat, sitting", &mut rng), "a cat, sitting");
    }
}
