//! Prompt resolution tests - the full serialization pipeline

use promptpad::expand::{
    expand_braces, resolve_prompt, split_weighted, strip_comment_lines, RandomSource,
    ScriptedRandom, SeededRandom, ThreadRandom,
};

// ========================================================================
// Comment stripping
// ========================================================================

#[test]
fn test_strip_comment_lines() {
    assert_eq!(
        strip_comment_lines("// hidden\nkeep\n// also hidden"),
        "keep"
    );
}

// ========================================================================
// Brace groups
// ========================================================================

#[test]
fn test_brace_expansion_structure_is_deterministic() {
    let mut rng = ThreadRandom;
    for _ in 0..200 {
        let out = expand_braces("a{b|c}d", &mut rng);
        assert!(out == "abd" || out == "acd", "unexpected result: {out}");
    }
}

#[test]
fn test_brace_expansion_terminates_on_unbalanced_input() {
    let mut rng = ThreadRandom;
    for input in ["{", "}", "a{b", "a}b{", "{{{", "{a|b", "x{y|{z}"] {
        // Termination is the property under test
        let _ = expand_braces(input, &mut rng);
    }
}

#[test]
fn test_nested_groups_resolve_completely() {
    let mut rng = SeededRandom::new(1234);
    for _ in 0..100 {
        let out = expand_braces("{a|{b|{c|d}}}{e|f}", &mut rng);
        assert!(
            !out.contains('{') && !out.contains('}'),
            "unresolved braces in {out}"
        );
    }
}

#[test]
fn test_escaped_braces_survive_resolution() {
    let mut rng = ScriptedRandom::new(vec![0.0]);
    let out = expand_braces("\\{keep\\} {a|b}", &mut rng);
    assert_eq!(out, "\\{keep\\} a");
}

// ========================================================================
// Weighted alternatives
// ========================================================================

#[test]
fn test_weighted_no_delimiter_unchanged() {
    let mut rng = ThreadRandom;
    assert_eq!(split_weighted("no random here", &mut rng), "no random here");
}

#[test]
fn test_weighted_ratio_over_seeded_trials() {
    let input = "x RANDOM :1y RANDOM :3z";
    let mut rng = SeededRandom::new(99);

    let mut hits = std::collections::HashMap::new();
    let trials = 20_000;
    for _ in 0..trials {
        *hits.entry(split_weighted(input, &mut rng)).or_insert(0usize) += 1;
    }

    let y = hits.get("y ").copied().unwrap_or(0) as f64;
    let z = hits.get("z").copied().unwrap_or(0) as f64;
    let x = hits.get("x ").copied().unwrap_or(0) as f64;

    // Expected proportions 1/5, 1/5, 3/5 within a generous tolerance
    assert!((x / trials as f64 - 0.2).abs() < 0.02, "x proportion {x}");
    assert!((y / trials as f64 - 0.2).abs() < 0.02, "y proportion {y}");
    assert!((z / trials as f64 - 0.6).abs() < 0.02, "z proportion {z}");

    // And the headline property: z drawn ~3x as often as y
    let ratio = z / y;
    assert!((2.6..=3.4).contains(&ratio), "z/y ratio {ratio}");
}

// ========================================================================
// Full pipeline
// ========================================================================

#[test]
fn test_pipeline_strips_then_expands_then_weights() {
    let raw = "// disabled {x|y}\n{a|b} RANDOM c";
    let mut rng = ScriptedRandom::new(vec![0.0, 0.0]);

    // Comment line removed; brace picks "a"; weighted picks first fragment
    assert_eq!(resolve_prompt(raw, &mut rng), "a ");
}

#[test]
fn test_pipeline_plain_text_is_identity() {
    let mut rng = ThreadRandom;
    let raw = "a cat sitting on a mat, watercolor";
    assert_eq!(resolve_prompt(raw, &mut rng), raw);
}

#[test]
fn test_pipeline_seeded_runs_are_reproducible() {
    let raw = "{a|b|c} RANDOM {d|e} RANDOM f";
    let first = resolve_prompt(raw, &mut SeededRandom::new(5));
    let second = resolve_prompt(raw, &mut SeededRandom::new(5));
    assert_eq!(first, second);
}

// ========================================================================
// Custom random sources
// ========================================================================

struct AlwaysZero;

impl RandomSource for AlwaysZero {
    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

#[test]
fn test_injected_source_controls_every_draw() {
    let mut rng = AlwaysZero;
    assert_eq!(expand_braces("{first|second}{1|2}", &mut rng), "first1");
}
