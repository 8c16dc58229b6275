//! Token-aware tab navigation.

use crate::editable::Selection;
use crate::tokenizer::{tokenize, Token};

/// Navigation direction for tab traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Tab: towards the end of the buffer
    Forward,
    /// Shift+Tab: towards the start of the buffer
    Backward,
}

/// Select the next or previous token relative to the current selection.
///
/// When the selection exactly covers a token, the adjacent token in the
/// travel direction is selected, wrapping around at either end. Otherwise
/// the first token whose span contains or follows the selection start is
/// selected (going backward: contains or precedes). Returns `None` when
/// the buffer has no tokens.
pub fn tab_navigate(content: &str, selection: Selection, direction: Direction) -> Option<Selection> {
    let tokens = tokenize(content);
    if tokens.is_empty() {
        return None;
    }

    let target = match direction {
        Direction::Forward => next_token(&tokens, selection),
        Direction::Backward => prev_token(&tokens, selection),
    };
    Some(Selection::new(target.start, target.end))
}

fn next_token<'a>(tokens: &'a [Token], selection: Selection) -> &'a Token {
    for (i, token) in tokens.iter().enumerate() {
        if token.start == selection.start && token.end == selection.end {
            // Exactly on a token: advance, wrapping to the first
            return tokens.get(i + 1).unwrap_or(&tokens[0]);
        }
        if (token.start <= selection.start && token.end >= selection.start)
            || token.start > selection.start
        {
            return token;
        }
    }
    &tokens[0]
}

fn prev_token<'a>(tokens: &'a [Token], selection: Selection) -> &'a Token {
    for (i, token) in tokens.iter().enumerate().rev() {
        if token.start == selection.start && token.end == selection.end {
            // Exactly on a token: step back, wrapping to the last
            return if i > 0 {
                &tokens[i - 1]
            } else {
                &tokens[tokens.len() - 1]
            };
        }
        if (token.start <= selection.start && token.end >= selection.start)
            || token.end < selection.start
        {
            return token;
        }
    }
    &tokens[tokens.len() - 1]
}
