//! Path string parser.

use super::ast::{JsonPath, Segment};
use super::error::JsonPathError;

/// Parser for path strings like `$.store.book[0]['title']`.
pub struct Parser {
    input: String,
    position: usize,
}

impl Parser {
    /// Creates a new parser for the given path string.
    pub fn new(query: &str) -> Self {
        Self {
            input: query.to_string(),
            position: 0,
        }
    }

    /// Parses the path string into a JsonPath.
    pub fn parse(query: &str) -> Result<JsonPath, JsonPathError> {
        let mut parser = Parser::new(query);
        parser.parse_path()
    }

    fn parse_path(&mut self) -> Result<JsonPath, JsonPathError> {
        let mut segments = Vec::new();

        self.skip_whitespace();

        // Expect root ($)
        if self.peek() != Some('$') {
            return Err(JsonPathError::InvalidSyntax {
                message: "path must start with '$'".to_string(),
            });
        }
        self.next();

        // Parse remaining segments
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('.') => {
                    self.next();
                    let name = self.parse_identifier()?;
                    segments.push(Segment::Key(name));
                }
                Some('[') => {
                    segments.push(self.parse_bracket_expression()?);
                }
                Some(ch) => {
                    return Err(JsonPathError::UnexpectedToken {
                        position: self.position,
                        found: ch.to_string(),
                        expected: "'.' or '['".to_string(),
                    });
                }
                None => break,
            }
        }

        Ok(JsonPath::new(segments))
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the next character and advances position.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.next();
            } else {
                break;
            }
        }
    }

    /// Expects a specific character and advances, or returns an error.
    fn expect(&mut self, expected: char) -> Result<(), JsonPathError> {
        self.skip_whitespace();
        let pos = self.position;
        match self.next() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(JsonPathError::UnexpectedToken {
                position: pos,
                found: ch.to_string(),
                expected: format!("'{}'", expected),
            }),
            None => Err(JsonPathError::UnexpectedEnd {
                expected: format!("'{}'", expected),
            }),
        }
    }

    /// Parses an identifier (property name).
    fn parse_identifier(&mut self) -> Result<String, JsonPathError> {
        self.skip_whitespace();
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' || ch == '-' {
                name.push(ch);
                self.next();
            } else {
                break;
            }
        }
        if name.is_empty() {
            Err(JsonPathError::InvalidSyntax {
                message: "expected identifier".to_string(),
            })
        } else {
            Ok(name)
        }
    }

    /// Parses a bracket expression: `[index]` or `['key']`.
    fn parse_bracket_expression(&mut self) -> Result<Segment, JsonPathError> {
        self.expect('[')?;
        self.skip_whitespace();

        let segment = match self.peek() {
            Some('\'') | Some('"') => {
                let key = self.parse_bracket_string()?;
                self.skip_whitespace();
                self.expect(']')?;
                Segment::Key(key)
            }
            Some('0'..='9') => {
                let idx = self.parse_bracket_number()?;
                self.skip_whitespace();
                self.expect(']')?;
                Segment::Index(idx)
            }
            _ => {
                return Err(JsonPathError::InvalidSyntax {
                    message: "invalid bracket expression".to_string(),
                })
            }
        };

        Ok(segment)
    }

    /// Parses a quoted string inside brackets.
    fn parse_bracket_string(&mut self) -> Result<String, JsonPathError> {
        let quote = match self.peek() {
            Some('\'') | Some('"') => self.next().unwrap(),
            _ => {
                return Err(JsonPathError::InvalidSyntax {
                    message: "expected quoted string".to_string(),
                })
            }
        };

        let mut value = String::new();
        loop {
            match self.next() {
                Some(ch) if ch == quote => break,
                Some('\\') => match self.next() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some('\\') => value.push('\\'),
                    Some('\'') => value.push('\''),
                    Some('"') => value.push('"'),
                    Some(_) | None => {
                        return Err(JsonPathError::InvalidSyntax {
                            message: "invalid escape sequence".to_string(),
                        })
                    }
                },
                Some(ch) => value.push(ch),
                None => {
                    return Err(JsonPathError::UnexpectedEnd {
                        expected: format!("closing quote '{}'", quote),
                    })
                }
            }
        }
        Ok(value)
    }

    /// Parses a non-negative array index.
    fn parse_bracket_number(&mut self) -> Result<usize, JsonPathError> {
        let mut num = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num.push(ch);
                self.next();
            } else {
                break;
            }
        }
        num.parse::<usize>().map_err(|_| JsonPathError::InvalidSyntax {
            message: format!("invalid index: {}", num),
        })
    }
}
