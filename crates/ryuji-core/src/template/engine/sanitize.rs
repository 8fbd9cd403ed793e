//! Output post-processing helpers

/// Escape `<` and `>` in interpolated text
///
/// Only the angle brackets are replaced; `&` and quotes pass through.
pub(crate) fn sanitize(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Drop lines that are empty or contain only whitespace
///
/// Lines are rejoined with `\n`; a trailing newline is not preserved.
pub fn strip_blank_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
