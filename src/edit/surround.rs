//! Bracket wrapping around the current selection.

use crate::editable::Selection;

use super::EditOutcome;

/// The closing counterpart for a wrapping key, or `None` for keys that
/// don't wrap.
pub fn bracket_pair(open: char) -> Option<(char, char)> {
    match open {
        '(' => Some(('(', ')')),
        '{' => Some(('{', '}')),
        '[' => Some(('[', ']')),
        '<' => Some(('<', '>')),
        '"' => Some(('"', '"')),
        '\'' => Some(('\'', '\'')),
        '`' => Some(('`', '`')),
        _ => None,
    }
}

/// Wrap the selection in the bracket pair for `key`.
///
/// The new selection covers exactly the original inner content, shifted
/// right past the inserted opening bracket; an empty selection becomes an
/// empty caret immediately after the opening character.
pub fn wrap_brackets(content: &str, selection: Selection, key: char) -> Option<EditOutcome> {
    let (opening, closing) = bracket_pair(key)?;

    let chars: Vec<char> = content.chars().collect();
    let selection = selection.clamp(chars.len());

    let left: String = chars[..selection.start].iter().collect();
    let center: String = chars[selection.start..selection.end].iter().collect();
    let right: String = chars[selection.end..].iter().collect();

    let new_start = selection.start + 1;
    let new_end = new_start + selection.len();

    Some(EditOutcome {
        content: format!("{left}{opening}{center}{closing}{right}"),
        selection: Selection::new(new_start, new_end),
    })
}
