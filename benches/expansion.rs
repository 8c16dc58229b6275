//! Benchmarks for prompt resolution and tokenization
//!
//! Run with: cargo bench expansion

use promptpad::expand::{expand_braces, resolve_prompt, split_weighted, SeededRandom};
use promptpad::tokenizer::tokenize;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn sample_prompt(groups: usize) -> String {
    let mut prompt = String::from("masterpiece, best quality, ");
    for i in 0..groups {
        prompt.push_str(&format!("{{option{i}a|option{i}b|option{i}c}}, "));
    }
    prompt.push_str("detailed background");
    prompt
}

// ============================================================================
// Brace expansion
// ============================================================================

#[divan::bench(args = [1, 16, 64])]
fn expand_flat_groups(groups: usize) {
    let prompt = sample_prompt(groups);
    let mut rng = SeededRandom::new(7);
    divan::black_box(expand_braces(&prompt, &mut rng));
}

#[divan::bench(args = [4, 8, 16])]
fn expand_nested_groups(depth: usize) {
    let mut prompt = String::from("x");
    for _ in 0..depth {
        prompt = format!("{{a|{prompt}|b}}");
    }
    let mut rng = SeededRandom::new(7);
    divan::black_box(expand_braces(&prompt, &mut rng));
}

// ============================================================================
// Weighted splitting
// ============================================================================

#[divan::bench(args = [2, 8, 32])]
fn weighted_split(alternatives: usize) {
    let input = (0..alternatives)
        .map(|i| format!(":{} option{}", i % 10, i))
        .collect::<Vec<_>>()
        .join(" RANDOM ");
    let mut rng = SeededRandom::new(7);
    divan::black_box(split_weighted(&input, &mut rng));
}

// ============================================================================
// Tokenization
// ============================================================================

#[divan::bench(args = [10, 100, 1_000])]
fn tokenize_prompt(fragments: usize) {
    let input = (0..fragments)
        .map(|i| format!("token number {i}"))
        .collect::<Vec<_>>()
        .join(", ");
    divan::black_box(tokenize(&input));
}

// ============================================================================
// Full pipeline
// ============================================================================

#[divan::bench]
fn resolve_typical_prompt() {
    let raw = "// sketch pass\nportrait of {a wizard|a knight|a bard}, \
               {oil painting|watercolor} RANDOM :2 photographic RANDOM cinematic";
    let mut rng = SeededRandom::new(7);
    divan::black_box(resolve_prompt(raw, &mut rng));
}
