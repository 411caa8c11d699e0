//! Statement-level reader for SCSS sources.

use super::{AtRule, Declaration, Node, RuleBlock, Stylesheet};
use std::ops::Range;
use thiserror::Error;

/// Errors produced while reading a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `/*` without a matching `*/`.
    #[error("unterminated comment starting at byte {offset}")]
    UnterminatedComment {
        /// Byte offset of the opening `/*`.
        offset: usize,
    },

    /// A quoted string that never closes.
    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// `#{` without a matching `}`.
    #[error("unterminated interpolation starting at byte {offset}")]
    UnterminatedInterpolation {
        /// Byte offset of the `#`.
        offset: usize,
    },

    /// `{` without a matching `}`.
    #[error("unclosed block starting at byte {offset}")]
    UnclosedBlock {
        /// Byte offset of the opening `{`.
        offset: usize,
    },

    /// `}` at the top level.
    #[error("unexpected `}}` at byte {offset}")]
    UnexpectedCloseBrace {
        /// Byte offset of the stray `}`.
        offset: usize,
    },
}

/// Parses SCSS source into a [`Stylesheet`].
///
/// # Errors
///
/// Returns an error for unterminated comments, strings, interpolations or
/// blocks, and for stray closing braces.
pub fn parse(source: &str) -> Result<Stylesheet, ParseError> {
    let mut reader = Reader {
        src: source,
        bytes: source.as_bytes(),
        pos: 0,
    };
    let nodes = reader.block(None)?;
    Ok(Stylesheet {
        source: source.to_string(),
        nodes,
    })
}

struct Reader<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl Reader<'_> {
    fn peek_at(&self, i: usize) -> Option<u8> {
        self.bytes.get(i).copied()
    }

    /// Reads statements until the closing brace of `open`, or EOF at top level.
    fn block(&mut self, open: Option<usize>) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();

        loop {
            self.skip_trivia()?;

            let Some(byte) = self.peek_at(self.pos) else {
                return match open {
                    Some(offset) => Err(ParseError::UnclosedBlock { offset }),
                    None => Ok(nodes),
                };
            };

            match byte {
                b'}' => {
                    if open.is_none() {
                        return Err(ParseError::UnexpectedCloseBrace { offset: self.pos });
                    }
                    self.pos += 1;
                    return Ok(nodes);
                }
                b';' => self.pos += 1,
                b'@' => nodes.push(self.at_rule()?),
                _ => {
                    if let Some(node) = self.statement()? {
                        nodes.push(node);
                    }
                }
            }
        }
    }

    fn at_rule(&mut self) -> Result<Node, ParseError> {
        let start = self.pos;
        let name_start = start + 1;
        let mut name_end = name_start;
        while self
            .peek_at(name_end)
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            name_end += 1;
        }

        let (end, terminator, code_end) = self.scan_statement(name_end)?;
        let params_span = self.trimmed(name_end..code_end);

        let nodes = if terminator == Some(b'{') {
            self.pos = end + 1;
            Some(self.block(Some(end))?)
        } else {
            self.pos = if terminator == Some(b';') { end + 1 } else { end };
            None
        };

        Ok(Node::AtRule(AtRule::new(
            self.src,
            start..end,
            name_start..name_end,
            params_span,
            nodes,
        )))
    }

    fn statement(&mut self) -> Result<Option<Node>, ParseError> {
        let start = self.pos;
        let (end, terminator, code_end) = self.scan_statement(start)?;
        let span = self.trimmed(start..code_end);

        if terminator == Some(b'{') {
            self.pos = end + 1;
            let nodes = self.block(Some(end))?;
            return Ok(Some(Node::Rule(RuleBlock {
                selector: self.src[span.clone()].to_string(),
                nodes,
                span,
            })));
        }

        self.pos = if terminator == Some(b';') { end + 1 } else { end };

        let raw = &self.src[span.clone()];
        let Some(colon) = raw.find(':') else {
            return Ok(None);
        };
        let prop = raw[..colon].trim_end();
        if prop.is_empty() {
            return Ok(None);
        }
        let mut value_span = self.trimmed(span.start + colon + 1..span.end);
        let important = match important_suffix(&self.src[value_span.clone()]) {
            Some(cut) => {
                value_span = self.trimmed(value_span.start..value_span.start + cut);
                true
            }
            None => false,
        };

        Ok(Some(Node::Declaration(Declaration::new(
            self.src, span, prop, value_span, important,
        ))))
    }

    /// Finds the end of a statement: the first `;`, `{` or `}` outside of
    /// strings, comments, parentheses and interpolation.
    ///
    /// Also returns the end of the last code byte, so trailing whitespace and
    /// comments stay out of the statement.
    fn scan_statement(&self, from: usize) -> Result<(usize, Option<u8>, usize), ParseError> {
        let mut i = from;
        let mut code_end = from;
        let mut parens = 0usize;

        while let Some(byte) = self.peek_at(i) {
            match byte {
                b'/' if self.peek_at(i + 1) == Some(b'*') => {
                    i = self.skip_comment(i)?;
                    continue;
                }
                b'/' if self.peek_at(i + 1) == Some(b'/') && self.line_comment_at(i, parens) => {
                    i = self.line_end(i);
                    continue;
                }
                _ if byte.is_ascii_whitespace() => {
                    i += 1;
                    continue;
                }
                b';' | b'{' | b'}' if parens == 0 => return Ok((i, Some(byte), code_end)),
                b'"' | b'\'' => i = self.skip_string(i)?,
                b'#' if self.peek_at(i + 1) == Some(b'{') => i = self.skip_interpolation(i)?,
                b'\\' => i = (i + 2).min(self.bytes.len()),
                b'(' => {
                    parens += 1;
                    i += 1;
                }
                b')' => {
                    parens = parens.saturating_sub(1);
                    i += 1;
                }
                _ => i += 1,
            }
            code_end = i;
        }

        Ok((self.bytes.len(), None, code_end))
    }

    /// Whether `//` at `i` opens a line comment. Inside parentheses it must
    /// follow whitespace, so `url(http://x)` and `url(//cdn/x)` stay intact.
    fn line_comment_at(&self, i: usize, parens: usize) -> bool {
        parens == 0 || i == 0 || self.bytes[i - 1].is_ascii_whitespace()
    }

    /// Offset of the newline ending the line that contains `i`, or EOF.
    fn line_end(&self, i: usize) -> usize {
        self.src[i..].find('\n').map_or(self.bytes.len(), |n| i + n)
    }

    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            while self.peek_at(self.pos).is_some_and(|b| b.is_ascii_whitespace()) {
                self.pos += 1;
            }
            match (self.peek_at(self.pos), self.peek_at(self.pos + 1)) {
                (Some(b'/'), Some(b'*')) => self.pos = self.skip_comment(self.pos)?,
                (Some(b'/'), Some(b'/')) => self.pos = self.line_end(self.pos),
                _ => return Ok(()),
            }
        }
    }

    fn skip_comment(&self, start: usize) -> Result<usize, ParseError> {
        self.src[start + 2..]
            .find("*/")
            .map(|n| start + 2 + n + 2)
            .ok_or(ParseError::UnterminatedComment { offset: start })
    }

    fn skip_string(&self, start: usize) -> Result<usize, ParseError> {
        let quote = self.bytes[start];
        let mut i = start + 1;
        while let Some(byte) = self.peek_at(i) {
            if byte == b'\\' {
                i += 2;
            } else if byte == quote {
                return Ok(i + 1);
            } else {
                i += 1;
            }
        }
        Err(ParseError::UnterminatedString { offset: start })
    }

    fn skip_interpolation(&self, start: usize) -> Result<usize, ParseError> {
        let mut depth = 1usize;
        let mut i = start + 2;
        while let Some(byte) = self.peek_at(i) {
            match byte {
                b'"' | b'\'' => {
                    i = self.skip_string(i)?;
                    continue;
                }
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(i + 1);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        Err(ParseError::UnterminatedInterpolation { offset: start })
    }

    /// Narrows `range` to exclude leading and trailing whitespace.
    fn trimmed(&self, range: Range<usize>) -> Range<usize> {
        let raw = &self.src[range.clone()];
        let start = range.start + (raw.len() - raw.trim_start().len());
        start..start + raw.trim().len()
    }
}

/// Byte offset of a trailing `!important` flag in a declaration value.
fn important_suffix(value: &str) -> Option<usize> {
    const FLAG: &str = "important";
    let split = value.len().checked_sub(FLAG.len())?;
    if !value.is_char_boundary(split) || !value[split..].eq_ignore_ascii_case(FLAG) {
        return None;
    }
    let head = value[..split].trim_end();
    head.strip_suffix('!').map(str::len)
}
