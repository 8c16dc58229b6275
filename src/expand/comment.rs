//! Comment-line removal applied before grammar expansion.

/// Drop every line that starts with exactly `//`.
///
/// There is no leading-whitespace tolerance: an indented `  // note` line
/// survives. Applied once to the raw stored value, before brace and
/// weighted resolution, so commented-out prompt fragments never reach the
/// grammar.
pub fn strip_comment_lines(input: &str) -> String {
    input
        .split('\n')
        .filter(|line| !line.starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}
