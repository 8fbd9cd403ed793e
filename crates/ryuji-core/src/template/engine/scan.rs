//! Directive scanning
//!
//! Splits template text into `[[ body ]]` directives with forward-only
//! scanning. A candidate that is not exactly `[[`, one space, a body of
//! `[A-Za-z0-9.:_-]+`, one space, `]]` is left alone as literal text.

use serde::Serialize;

use crate::template::error::TemplateError;

const OPEN: &str = "[[ ";
const CLOSE: &str = " ]]";

/// Directive classification, taken from the first `:` segment of the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
    /// `[[ component:name ]]`
    Component,
    /// `[[ for:items ]]` or `[[ for:items:item ]]`
    For,
    /// `[[ endfor ]]`
    EndFor,
    /// `[[ if:flag ]]`
    If,
    /// `[[ endif ]]`
    EndIf,
    /// `[[ html:var ]]`
    Html,
    /// `[[ var ]]` or `[[ nested.var ]]`
    Variable,
}

impl DirectiveKind {
    fn classify(keyword: &str) -> Self {
        match keyword {
            "component" => DirectiveKind::Component,
            "for" => DirectiveKind::For,
            "endfor" => DirectiveKind::EndFor,
            "if" => DirectiveKind::If,
            "endif" => DirectiveKind::EndIf,
            "html" => DirectiveKind::Html,
            _ => DirectiveKind::Variable,
        }
    }
}

/// A single `[[ ... ]]` occurrence with position and classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    /// Classification of `keyword`
    pub kind: DirectiveKind,
    /// First `:` segment (the variable name for bare interpolation)
    pub keyword: String,
    /// Remaining `:` segments, in order
    pub args: Vec<String>,
    /// Byte offset of `[[`
    pub start: usize,
    /// Byte offset just past `]]`
    pub end: usize,
    /// Line number of `[[` (1-based)
    pub line: usize,
}

impl Directive {
    fn parse(body: &str, start: usize, end: usize, line: usize) -> Self {
        let mut parts = body.split(':');
        let keyword = parts.next().unwrap_or_default().to_string();
        Self {
            kind: DirectiveKind::classify(&keyword),
            keyword,
            args: parts.map(str::to_string).collect(),
            start,
            end,
            line,
        }
    }

    /// Argument at `index`; empty segments count as absent
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.args
            .get(index)
            .map(String::as_str)
            .filter(|arg| !arg.is_empty())
    }

    /// Argument at `index`, or `MissingArgument` naming this directive
    pub fn required_argument(&self, index: usize) -> Result<&str, TemplateError> {
        self.argument(index)
            .ok_or_else(|| TemplateError::MissingArgument {
                kind: self.keyword.clone(),
                line: self.line,
            })
    }
}

fn is_body_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b':' | b'_' | b'-')
}

/// Iterator over directives in template text, in source order
pub(crate) struct DirectiveScanner<'a> {
    text: &'a str,
    /// Next byte to search from
    pos: usize,
    /// Line number at `line_pos`
    line: usize,
    /// Offset up to which newlines have been counted
    line_pos: usize,
}

impl<'a> DirectiveScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            line_pos: 0,
        }
    }

    /// End offset of a directive starting at `start`, if one starts there
    fn match_at(&self, start: usize) -> Option<usize> {
        let bytes = self.text.as_bytes();
        let body_start = start + OPEN.len();
        let body_len = bytes[body_start..]
            .iter()
            .take_while(|b| is_body_byte(**b))
            .count();
        if body_len == 0 {
            return None;
        }

        let body_end = body_start + body_len;
        bytes[body_end..]
            .starts_with(CLOSE.as_bytes())
            .then_some(body_end + CLOSE.len())
    }

    /// Line number of `offset`; offsets must be requested in increasing order
    fn line_at(&mut self, offset: usize) -> usize {
        self.line += self.text.as_bytes()[self.line_pos..offset]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        self.line_pos = offset;
        self.line
    }
}

impl Iterator for DirectiveScanner<'_> {
    type Item = Directive;

    fn next(&mut self) -> Option<Directive> {
        while self.pos < self.text.len() {
            let start = self.pos + self.text[self.pos..].find(OPEN)?;

            match self.match_at(start) {
                Some(end) => {
                    let line = self.line_at(start);
                    let body = &self.text[start + OPEN.len()..end - CLOSE.len()];
                    self.pos = end;
                    return Some(Directive::parse(body, start, end, line));
                }
                // Not a directive here; a later `[[ ` may still overlap this one
                None => self.pos = start + 1,
            }
        }
        None
    }
}

/// Scan `text` for directives
///
/// Returns an empty vector (not an error) when the text has none.
pub fn scan(text: &str) -> Vec<Directive> {
    DirectiveScanner::new(text).collect()
}
