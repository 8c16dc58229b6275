//! Line-comment toggling for the lines intersecting a selection.

use crate::editable::Selection;

use super::EditOutcome;

/// Toggle `//` line comments on every line the selection touches.
///
/// If *all* touched lines already start with `//`, the marker (plus one
/// optional following space) is stripped from each; otherwise every touched
/// line is prefixed with `// `. The selection start shifts by the first
/// line's character delta and the selection end by the cumulative delta, so
/// the same semantic span stays selected.
///
/// Returns `None` when the selection touches no line (empty buffer, or a
/// caret on the zero-length line after a trailing newline).
pub fn toggle_comment(content: &str, selection: Selection) -> Option<EditOutcome> {
    // Split into lines, keeping the newline on every line but the last so
    // that concatenating the lines reproduces the content exactly.
    let mut lines: Vec<String> = content.split('\n').map(String::from).collect();
    let last = lines.len() - 1;
    for line in &mut lines[..last] {
        line.push('\n');
    }

    // A line is touched when its inclusive character span [start, end]
    // overlaps the selection.
    let mut touched = Vec::new();
    let mut offset = 0isize;
    for (i, line) in lines.iter().enumerate() {
        let len = line.chars().count() as isize;
        let start = offset;
        let end = offset + len - 1;
        offset += len;

        if start > selection.end as isize || end < selection.start as isize {
            continue;
        }
        touched.push(i);
    }

    if touched.is_empty() {
        return None;
    }

    let all_commented = touched.iter().all(|&i| lines[i].starts_with("//"));

    let mut deltas = Vec::with_capacity(touched.len());
    for &i in &touched {
        let before = lines[i].chars().count() as isize;
        lines[i] = if all_commented {
            strip_marker(&lines[i])
        } else {
            format!("// {}", lines[i])
        };
        deltas.push(lines[i].chars().count() as isize - before);
    }

    let new_content = lines.concat();
    let new_len = new_content.chars().count() as isize;

    let first_delta = deltas[0];
    let total_delta: isize = deltas.iter().sum();
    let new_start = (selection.start as isize + first_delta).clamp(0, new_len) as usize;
    let new_end = (selection.end as isize + total_delta).clamp(new_start as isize, new_len) as usize;

    Some(EditOutcome {
        content: new_content,
        selection: Selection::new(new_start, new_end),
    })
}

/// Strip a leading `//` and at most one following space
fn strip_marker(line: &str) -> String {
    let rest = line.strip_prefix("//").unwrap_or(line);
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    rest.to_string()
}
