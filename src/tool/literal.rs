// ABOUTME: Restricted recursive-descent parser for tool-call argument literals.
// ABOUTME: Accepts numbers, quoted strings, booleans and lists; nothing is evaluated.

use super::Value;
use crate::error::LiteralError;

/// Deepest list nesting accepted before the literal is rejected.
pub const MAX_NESTING: usize = 64;

/// Cursor over literal source text.
///
/// Grammar:
///
/// ```text
/// args    := ε | literal ("," literal)* ","?
/// literal := number | string | list | bool
/// list    := "[" (literal ("," literal)* ","?)? "]"
/// bool    := "True" | "False" | "true" | "false"
/// ```
pub struct LiteralParser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> LiteralParser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self::at(src, 0)
    }

    /// Start parsing at byte offset `pos`.
    pub fn at(src: &'a str, pos: usize) -> Self {
        Self { src, pos, depth: 0 }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn error(&self, message: impl Into<String>) -> LiteralError {
        LiteralError::new(self.pos, message)
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    /// Parse a call's argument list. The opening `(` must already be
    /// consumed; the closing `)` is consumed on success.
    pub fn parse_arguments(&mut self) -> Result<Vec<Value>, LiteralError> {
        let mut args = Vec::new();
        self.skip_whitespace();
        if self.eat(')') {
            return Ok(args);
        }

        loop {
            args.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                    self.skip_whitespace();
                    if self.eat(')') {
                        return Ok(args);
                    }
                }
                Some(')') => {
                    self.bump();
                    return Ok(args);
                }
                Some(c) => return Err(self.error(format!("expected ',' or ')', found '{}'", c))),
                None => return Err(self.error("missing closing ')'")),
            }
        }
    }

    /// Parse one literal, skipping leading whitespace.
    pub fn parse_value(&mut self) -> Result<Value, LiteralError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error("expected a literal, found end of input")),
            Some('"') | Some('\'') => self.parse_string().map(Value::Str),
            Some('[') => self.parse_list(),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.parse_number(),
            Some(c) if c.is_alphabetic() || c == '_' => self.parse_word(),
            Some(c) => Err(self.error(format!("unexpected character '{}'", c))),
        }
    }

    fn parse_list(&mut self) -> Result<Value, LiteralError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error("list nesting too deep"));
        }
        self.depth += 1;
        let list = self.parse_list_items();
        self.depth -= 1;
        list
    }

    fn parse_list_items(&mut self) -> Result<Value, LiteralError> {
        self.bump();
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.eat(']') {
            return Ok(Value::List(items));
        }

        loop {
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                    self.skip_whitespace();
                    if self.eat(']') {
                        return Ok(Value::List(items));
                    }
                }
                Some(']') => {
                    self.bump();
                    return Ok(Value::List(items));
                }
                Some(c) => return Err(self.error(format!("expected ',' or ']', found '{}'", c))),
                None => return Err(self.error("unterminated list literal")),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, LiteralError> {
        let start = self.pos;
        let quote = self.bump().unwrap_or('"');
        let mut out = String::new();

        loop {
            match self.bump() {
                None | Some('\n') => {
                    return Err(LiteralError::new(start, "unterminated string literal"));
                }
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some('0') => out.push('\0'),
                    Some(c @ ('\\' | '\'' | '"')) => out.push(c),
                    Some(c) => {
                        out.push('\\');
                        out.push(c);
                    }
                    None => return Err(LiteralError::new(start, "unterminated string literal")),
                },
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        let mut is_float = false;

        if matches!(self.peek(), Some('-' | '+')) {
            self.bump();
        }
        let int_digits = self.digits();
        if self.eat('.') {
            is_float = true;
            let frac_digits = self.digits();
            if int_digits == 0 && frac_digits == 0 {
                return Err(LiteralError::new(start, "invalid number literal"));
            }
        } else if int_digits == 0 {
            return Err(LiteralError::new(start, "invalid number literal"));
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek(), Some('-' | '+')) {
                self.bump();
            }
            if self.digits() == 0 {
                return Err(LiteralError::new(start, "invalid exponent in number literal"));
            }
        }

        if matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            return Err(self.error("invalid character in number literal"));
        }

        let text = &self.src[start..self.pos];
        if is_float {
            text.parse::<f64>()
                .map(Value::Float)
                .map_err(|_| LiteralError::new(start, format!("invalid float literal '{}'", text)))
        } else {
            text.parse::<i64>().map(Value::Int).map_err(|_| {
                LiteralError::new(start, format!("integer literal '{}' out of range", text))
            })
        }
    }

    fn digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
            count += 1;
        }
        count
    }

    fn parse_word(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.bump();
        }
        match &self.src[start..self.pos] {
            "True" | "true" => Ok(Value::Bool(true)),
            "False" | "false" => Ok(Value::Bool(false)),
            word => Err(LiteralError::new(
                start,
                format!("'{}' is not a literal; only numbers, strings, booleans and lists are allowed", word),
            )),
        }
    }
}

/// Parse a complete literal; trailing input is an error.
pub fn parse_literal(src: &str) -> Result<Value, LiteralError> {
    let mut parser = LiteralParser::new(src);
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if !parser.is_at_end() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(value)
}
