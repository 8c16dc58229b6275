//! Offset-accurate token splitting for prompt text.
//!
//! Prompts are loosely structured lists: fragments separated by commas,
//! brackets, pipes, and newlines. The tokenizer recovers those fragments
//! together with their exact character spans in the original string, which
//! is what tab navigation selects through.

/// Characters that terminate a token.
///
/// Whitespace other than newline is *not* a delimiter: a fragment like
/// `"masterpiece, best quality"` splits into two tokens, but `"best
/// quality"` stays one.
pub const DELIMITERS: [char; 9] = [',', '(', ')', '[', ']', '{', '}', '|', '\n'];

/// Check if a character separates tokens
#[inline]
pub fn is_delimiter(ch: char) -> bool {
    matches!(ch, ',' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '\n')
}

/// A fragment of prompt text with its span in the original string.
///
/// `start`/`end` are half-open character offsets into the string that was
/// tokenized, covering exactly `value` (surrounding whitespace is excluded
/// from both the value and the span).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The trimmed fragment text
    pub value: String,
    /// Character offset of the first character of `value`
    pub start: usize,
    /// Character offset one past the last character of `value`
    pub end: usize,
}

impl Token {
    /// Length of the token in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-length tokens (never produced by [`tokenize`])
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `input` into ordered, offset-tagged tokens.
///
/// The lexer advances a character cursor and records spans directly, so
/// repeated identical fragments resolve to their own positions. Fragments
/// that trim to nothing are dropped. Tokens are returned in ascending,
/// non-overlapping span order.
///
/// Operates on the whole string each call; callers re-tokenize after every
/// buffer mutation.
pub fn tokenize(input: &str) -> Vec<Token> {
    // Trim a raw delimiter-free run and record the span of what remains.
    fn flush(run: &mut Vec<(usize, char)>, tokens: &mut Vec<Token>) {
        if let Some(first) = run.iter().position(|(_, c)| !c.is_whitespace()) {
            let last = run.iter().rposition(|(_, c)| !c.is_whitespace()).unwrap();
            let start = run[first].0;
            let end = run[last].0 + 1;
            let value: String = run[first..=last].iter().map(|(_, c)| *c).collect();
            tokens.push(Token { value, start, end });
        }
        run.clear();
    }

    let mut tokens = Vec::new();
    let mut run: Vec<(usize, char)> = Vec::new();

    for (offset, ch) in input.chars().enumerate() {
        if is_delimiter(ch) {
            flush(&mut run, &mut tokens);
        } else {
            run.push((offset, ch));
        }
    }
    flush(&mut run, &mut tokens);

    tokens
}
