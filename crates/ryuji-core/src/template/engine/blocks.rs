//! Block matching utilities (finding the closing directive of a block)

use super::scan::{Directive, DirectiveKind};
use crate::template::error::TemplateError;

/// Find the index of the directive closing the block opened at `start`
///
/// # Nesting
///
/// Blocks of the same kind nested inside are skipped: every `open` seen
/// after `start` must be closed before a `close` can match.
///
/// # Errors
///
/// `UnterminatedBlock` when the directives run out first.
pub(crate) fn find_matching_close(
    directives: &[Directive],
    start: usize,
    open: DirectiveKind,
    close: DirectiveKind,
) -> Result<usize, TemplateError> {
    let mut depth = 0;

    for (index, directive) in directives.iter().enumerate().skip(start + 1) {
        if directive.kind == open {
            depth += 1;
        } else if directive.kind == close {
            if depth == 0 {
                return Ok(index);
            }
            depth -= 1;
        }
    }

    let opener = &directives[start];
    Err(TemplateError::UnterminatedBlock {
        kind: opener.keyword.clone(),
        line: opener.line,
    })
}
