use crate::extract::error::{ExtractError, PathSyntaxError};
use serde_json::Value;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// One step of a compiled field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// `.name` or `['name']`
    Member(String),
    /// `[3]`, or `[-1]` counting from the end
    Index(i64),
}

/// A compiled field path.
///
/// Supported syntax is the subset of JSONPath that selects a single value:
///
/// - `$` for the document root
/// - `.name` for object members
/// - `['name']` / `["name"]` for members whose names contain `.` or `[`
/// - `[n]` for array elements, negative indices counting from the end
///
/// An expression that does not start with `$` is taken relative to the root,
/// so `request.path` and `$.request.path` are the same path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    expression: String,
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn parse(expression: &str) -> Result<Self, PathSyntaxError> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Err(PathSyntaxError::new(expression, 0, "empty expression"));
        }

        let absolute = if trimmed.starts_with('$') {
            trimmed.to_string()
        } else if trimmed.starts_with('[') {
            format!("${trimmed}")
        } else {
            format!("$.{trimmed}")
        };

        let segments = Parser::new(&absolute).parse()?;

        Ok(Self {
            expression: absolute,
            segments,
        })
    }

    /// Compiles `path` below `namespace`.
    ///
    /// Absolute paths (starting with `$`) are left alone, and an empty
    /// namespace is the same as no namespace.
    pub fn with_namespace(namespace: &str, path: &str) -> Result<Self, PathSyntaxError> {
        let namespace = namespace.trim();
        let path = path.trim();

        if namespace.is_empty() || path.starts_with('$') {
            return Self::parse(path);
        }

        let joined = if path.starts_with('[') {
            format!("{namespace}{path}")
        } else {
            format!("{namespace}.{path}")
        };

        Self::parse(&joined)
    }

    pub fn as_str(&self) -> &str {
        &self.expression
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Walks the document and returns the selected value.
    pub fn resolve<'a>(&self, document: &'a Value) -> Result<&'a Value, ExtractError> {
        let mut current = document;

        for segment in &self.segments {
            let next = match segment {
                Segment::Member(name) => current.as_object().and_then(|o| o.get(name)),
                Segment::Index(index) => current.as_array().and_then(|items| {
                    let len = items.len() as i64;
                    let at = if *index < 0 { len + index } else { *index };
                    usize::try_from(at).ok().and_then(|at| items.get(at))
                }),
            };

            current = next.ok_or_else(|| ExtractError::not_found(&self.expression))?;
        }

        Ok(current)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn parse(mut self) -> Result<Vec<Segment>, PathSyntaxError> {
        match self.chars.next() {
            Some((_, '$')) => {}
            _ => return Err(self.error(0, "path must start with $")),
        }

        let mut segments = Vec::new();

        while let Some((pos, ch)) = self.chars.next() {
            let segment = match ch {
                '.' => self.parse_member(pos)?,
                '[' => self.parse_bracket(pos)?,
                other => {
                    return Err(self.error(pos, format!("unexpected character '{other}'")));
                }
            };
            segments.push(segment);
        }

        Ok(segments)
    }

    fn parse_member(&mut self, dot: usize) -> Result<Segment, PathSyntaxError> {
        let mut name = String::new();

        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                '.' | '[' => break,
                ']' => return Err(self.error(pos, "unexpected ']'")),
                '*' => return Err(self.error(pos, "wildcards are not supported")),
                _ => {
                    name.push(ch);
                    self.chars.next();
                }
            }
        }

        if name.is_empty() {
            return Err(self.error(dot, "expected a member name after '.'"));
        }

        Ok(Segment::Member(name))
    }

    fn parse_bracket(&mut self, open: usize) -> Result<Segment, PathSyntaxError> {
        let segment = match self.chars.peek().copied() {
            Some((_, quote @ ('\'' | '"'))) => {
                self.chars.next();
                Segment::Member(self.parse_quoted(open, quote)?)
            }
            Some((_, c)) if c == '-' || c.is_ascii_digit() => Segment::Index(self.parse_index()?),
            Some((pos, '*')) => return Err(self.error(pos, "wildcards are not supported")),
            Some((pos, c)) => return Err(self.error(pos, format!("unexpected character '{c}'"))),
            None => return Err(self.error(open, "unterminated '['")),
        };

        match self.chars.next() {
            Some((_, ']')) => Ok(segment),
            Some((pos, c)) => Err(self.error(pos, format!("expected ']', found '{c}'"))),
            None => Err(self.error(open, "unterminated '['")),
        }
    }

    fn parse_quoted(&mut self, open: usize, quote: char) -> Result<String, PathSyntaxError> {
        let mut out = String::new();

        loop {
            match self.chars.next() {
                Some((_, '\\')) => match self.chars.next() {
                    Some((_, c)) => out.push(c),
                    None => return Err(self.error(open, "unterminated string")),
                },
                Some((_, c)) if c == quote => return Ok(out),
                Some((_, c)) => out.push(c),
                None => return Err(self.error(open, "unterminated string")),
            }
        }
    }

    fn parse_index(&mut self) -> Result<i64, PathSyntaxError> {
        let start = self.chars.peek().map(|(pos, _)| *pos).unwrap_or(self.input.len());
        let mut digits = String::new();

        if let Some((_, '-')) = self.chars.peek() {
            digits.push('-');
            self.chars.next();
        }

        while let Some(&(_, ch)) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.chars.next();
        }

        digits
            .parse::<i64>()
            .map_err(|_| self.error(start, format!("invalid array index '{digits}'")))
    }

    fn error(&self, position: usize, message: impl Into<String>) -> PathSyntaxError {
        PathSyntaxError::new(self.input, position, message)
    }
}
