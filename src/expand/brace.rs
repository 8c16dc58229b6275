//! Random-choice brace group resolution.
//!
//! `{a|b|c}` groups collapse to one alternative picked uniformly at random.
//! Resolution is a left-to-right rewrite loop, intentionally not a
//! recursive parser: only a group with no unescaped `{` before its closing
//! `}` is resolvable, so nested groups resolve innermost-first as each
//! rewrite removes a brace pair and the scan restarts.

use super::rng::RandomSource;

/// Resolve every completable `{...}` group in `prompt`.
///
/// A brace is a delimiter only when unescaped (not preceded by `\`);
/// escaped braces pass through untouched (unescaping is the caller's
/// concern). An unterminated `{` with no unescaped `}` after it stops the
/// loop and leaves the rest of the string as-is. Alternatives may be empty:
/// `{}` and `{|}` splice in the empty string.
pub fn expand_braces(prompt: &str, rng: &mut dyn RandomSource) -> String {
    let mut prompt = prompt.to_string();

    // Byte offset to resume scanning from; braces are ASCII so the +1
    // arithmetic stays on char boundaries.
    let mut offset = 0;
    while let Some(open) = find_unescaped(&prompt, '{', offset) {
        offset = open + 1;

        let Some(close) = find_unescaped(&prompt, '}', offset) else {
            // No unescaped closer anywhere ahead: nothing can complete
            break;
        };

        // Another opener before the closer means this group is not yet
        // completable; keep scanning and come back once the inner group
        // has been rewritten away.
        if let Some(next_open) = find_unescaped(&prompt, '{', offset) {
            if next_open < close {
                continue;
            }
        }

        let body = &prompt[open + 1..close];
        let alternatives: Vec<&str> = body.split('|').collect();
        let choice = alternatives[rng.pick_index(alternatives.len())];

        prompt = format!("{}{}{}", &prompt[..open], choice, &prompt[close + 1..]);
        offset = 0;
    }

    prompt
}

/// Find the next occurrence of `needle` at or after byte offset `from`
/// whose preceding character is not `\`.
fn find_unescaped(haystack: &str, needle: char, from: usize) -> Option<usize> {
    let mut search = from;
    while let Some(found) = haystack[search..].find(needle).map(|i| i + search) {
        let escaped = haystack[..found].chars().next_back() == Some('\\');
        if !escaped {
            return Some(found);
        }
        search = found + needle.len_utf8();
    }
    None
}
