//! Brace-depth block scanner and body tokenizer for schema text
//!
//! Blocks are located by counting braces rather than by pattern matching, so
//! nested braces inside a body are matched correctly and an unclosed block is
//! reported instead of silently swallowing the rest of the file. String
//! literals and `//` comments never contribute braces.

use crate::error::SchemaError;

/// Block keywords recognized at the top level of a schema
const BLOCK_KEYWORDS: &[&str] = &["model", "enum", "type", "view", "datasource", "generator"];

/// A top-level `<keyword> <Name> { ... }` block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Block keyword (`model`, `enum`, ...)
    pub kind: &'a str,
    /// Declared block name
    pub name: &'a str,
    /// Text between the outer braces, exclusive
    pub body: &'a str,
    /// Byte offset of the keyword in the source text
    pub offset: usize,
}

/// Scan `text` for top-level blocks
///
/// Text outside of recognized blocks is skipped. A keyword that is not
/// followed by a name and an opening brace is treated as ordinary text.
///
/// # Errors
///
/// Returns [`SchemaError::UnterminatedBlock`] when a block's opening brace has
/// no matching closing brace.
pub fn blocks(text: &str) -> Result<Vec<Block<'_>>, SchemaError> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];

        if b == b'"' {
            pos = skip_string(bytes, pos);
            continue;
        }
        if starts_comment(bytes, pos) {
            pos = skip_line(bytes, pos);
            continue;
        }
        if !is_ident_byte(b) {
            pos += 1;
            continue;
        }

        let word_start = pos;
        let word_end = ident_end(bytes, pos);
        pos = word_end;

        let kind = &text[word_start..word_end];
        if !BLOCK_KEYWORDS.contains(&kind) {
            continue;
        }

        let name_start = skip_whitespace(bytes, word_end);
        let name_end = ident_end(bytes, name_start);
        if name_end == name_start {
            continue;
        }

        let open = skip_whitespace(bytes, name_end);
        if bytes.get(open) != Some(&b'{') {
            continue;
        }

        let name = &text[name_start..name_end];
        let close = matching_brace(bytes, open).ok_or_else(|| SchemaError::UnterminatedBlock {
            kind: kind.to_string(),
            name: name.to_string(),
            offset: word_start,
        })?;

        found.push(Block {
            kind,
            name,
            body: &text[open + 1..close],
            offset: word_start,
        });
        pos = close + 1;
    }

    Ok(found)
}

/// Split a block body into whitespace separated tokens
///
/// Parenthesised, bracketed and braced runs and string literals are kept
/// whole, so `@relation(fields: [authorId], references: [id])` is a single
/// token. An `@` at depth zero also starts a new token, so `Post[]@relation(..)`
/// splits into a type and an attribute. `//` comments are dropped.
#[must_use]
pub fn tokens(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut out = Vec::new();
    let mut start: Option<usize> = None;
    let mut depth = 0usize;
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];

        if b == b'"' {
            start.get_or_insert(pos);
            pos = skip_string(bytes, pos);
            continue;
        }

        if depth == 0 && starts_comment(bytes, pos) {
            if let Some(s) = start.take() {
                out.push(&body[s..pos]);
            }
            pos = skip_line(bytes, pos);
            continue;
        }

        match b {
            b'@' if depth == 0 && start.is_some_and(|s| s < pos) && bytes[pos - 1] != b'@' => {
                if let Some(s) = start.replace(pos) {
                    out.push(&body[s..pos]);
                }
            }
            b'(' | b'[' | b'{' => {
                start.get_or_insert(pos);
                depth += 1;
            }
            b')' | b']' | b'}' => {
                start.get_or_insert(pos);
                depth = depth.saturating_sub(1);
            }
            _ if b.is_ascii_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    out.push(&body[s..pos]);
                }
            }
            _ if b.is_ascii_whitespace() => {}
            _ => {
                start.get_or_insert(pos);
            }
        }
        pos += 1;
    }

    if let Some(s) = start {
        out.push(&body[s..]);
    }

    out
}

/// Index of the `}` closing the brace at `open`, if any
fn matching_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = open;

    while pos < bytes.len() {
        match bytes[pos] {
            b'"' => {
                pos = skip_string(bytes, pos);
                continue;
            }
            b'/' if starts_comment(bytes, pos) => {
                pos = skip_line(bytes, pos);
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
            _ => {}
        }
        pos += 1;
    }

    None
}

const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn ident_end(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len() && is_ident_byte(bytes[pos]) {
        pos += 1;
    }
    pos
}

fn skip_whitespace(bytes: &[u8], start: usize) -> usize {
    let mut pos = start;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn starts_comment(bytes: &[u8], pos: usize) -> bool {
    bytes[pos] == b'/' && bytes.get(pos + 1) == Some(&b'/')
}

/// Position of the newline ending the line at `pos` (or end of input)
fn skip_line(bytes: &[u8], pos: usize) -> usize {
    bytes[pos..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |offset| pos + offset)
}

/// Position just past the string literal opening at `pos`
///
/// An unclosed string runs to the end of input.
fn skip_string(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}
