//! Recursive-descent JSON parser.

use dotjson_tree::{JsonArray, JsonObject, JsonValue, MAX_NESTING, TreeError};
use tracing::debug;

use crate::{Error, Result, escape, number};

mod comments;
mod cursor;

use cursor::Cursor;

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse one JSON value from text.
///
/// An optional UTF-8 byte-order mark is skipped. Text after the first
/// complete value is ignored.
pub fn parse_str(input: &str) -> Result<JsonValue> {
    debug!(len = input.len(), "parsing document");
    let mut cur = Cursor::new(input);
    if cur.rest_starts_with(BOM) {
        cur.advance(BOM.len());
    }
    parse_value(&mut cur, 0)
}

/// Parse text that may contain `//` and `/* */` comments.
///
/// Comments are blanked out on a private copy first, so the input itself is
/// untouched and error positions still refer to the original text.
pub fn parse_str_with_comments(input: &str) -> Result<JsonValue> {
    let mut buf = input.as_bytes().to_vec();
    comments::strip(&mut buf);
    // Blanking replaces whole characters with ASCII spaces, so the copy is
    // still valid UTF-8.
    parse_str(std::str::from_utf8(&buf)?)
}

/// Parse raw bytes: validates UTF-8, then parses.
pub fn parse_slice(input: &[u8]) -> Result<JsonValue> {
    parse_str(std::str::from_utf8(input)?)
}

fn parse_value(cur: &mut Cursor<'_>, nesting: usize) -> Result<JsonValue> {
    if nesting > MAX_NESTING {
        return Err(Error::NestingTooDeep);
    }
    cur.skip_whitespace();
    match cur.peek() {
        Some(b'{') => parse_object(cur, nesting + 1),
        Some(b'[') => parse_array(cur, nesting + 1),
        Some(b'"') => Ok(JsonValue::String(parse_string(cur)?)),
        Some(b'-' | b'0'..=b'9') => parse_number(cur),
        Some(b't') => parse_literal(cur, "true").map(|()| JsonValue::Bool(true)),
        Some(b'f') => parse_literal(cur, "false").map(|()| JsonValue::Bool(false)),
        Some(b'n') => parse_literal(cur, "null").map(|()| JsonValue::Null),
        _ => Err(Error::syntax(cur.pos(), "expected a JSON value")),
    }
}

fn parse_object(cur: &mut Cursor<'_>, nesting: usize) -> Result<JsonValue> {
    cur.bump();
    cur.skip_whitespace();
    let mut obj = JsonObject::new();
    if cur.eat(b'}') {
        return Ok(JsonValue::Object(obj));
    }
    loop {
        if cur.peek() != Some(b'"') {
            return Err(Error::syntax(cur.pos(), "expected object key"));
        }
        let key_pos = cur.pos();
        let name = parse_string(cur)?;
        cur.skip_whitespace();
        if !cur.eat(b':') {
            return Err(Error::syntax(cur.pos(), "expected ':' after object key"));
        }
        let value = parse_value(cur, nesting)?;
        obj.add(name, value).map_err(|err| match err {
            TreeError::DuplicateKey(name) => {
                Error::syntax(key_pos, format!("duplicate object key {name:?}"))
            }
            other => Error::Tree(other),
        })?;
        cur.skip_whitespace();
        if !cur.eat(b',') {
            break;
        }
        cur.skip_whitespace();
    }
    if !cur.eat(b'}') {
        return Err(Error::syntax(cur.pos(), "expected ',' or '}'"));
    }
    obj.shrink_to_fit();
    Ok(JsonValue::Object(obj))
}

fn parse_array(cur: &mut Cursor<'_>, nesting: usize) -> Result<JsonValue> {
    cur.bump();
    cur.skip_whitespace();
    let mut arr = JsonArray::new();
    if cur.eat(b']') {
        return Ok(JsonValue::Array(arr));
    }
    loop {
        arr.push(parse_value(cur, nesting)?);
        cur.skip_whitespace();
        if !cur.eat(b',') {
            break;
        }
    }
    if !cur.eat(b']') {
        return Err(Error::syntax(cur.pos(), "expected ',' or ']'"));
    }
    arr.shrink_to_fit();
    Ok(JsonValue::Array(arr))
}

/// Parse a quoted string starting at the opening quote. The raw content is
/// located with an escape-aware scan, then handed to the escape decoder.
fn parse_string(cur: &mut Cursor<'_>) -> Result<String> {
    let open = cur.pos();
    cur.bump();
    let bytes = cur.bytes();
    let start = cur.pos();
    let mut i = start;
    loop {
        match bytes.get(i) {
            None => return Err(Error::syntax(open, "unterminated string")),
            Some(b'"') => break,
            // A backslash exempts the next byte from the quote check.
            Some(b'\\') => i += 2,
            Some(_) => i += 1,
        }
    }
    let decoded = escape::decode_string(cur.slice(start, i), start)?;
    cur.set_pos(i + 1);
    Ok(decoded)
}

fn parse_number(cur: &mut Cursor<'_>) -> Result<JsonValue> {
    let start = cur.pos();
    let bytes = cur.bytes();
    let mut end = start;
    while let Some(&b) = bytes.get(end) {
        if matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E' | b'x' | b'X') {
            end += 1;
        } else {
            break;
        }
    }
    let text = cur.slice(start, end);
    let value = number::parse_f64(text)
        .ok_or_else(|| Error::syntax(start, format!("malformed number {text:?}")))?;
    cur.set_pos(end);
    Ok(JsonValue::Number(value))
}

fn parse_literal(cur: &mut Cursor<'_>, literal: &'static str) -> Result<()> {
    if cur.rest_starts_with(literal.as_bytes()) {
        cur.advance(literal.len());
        Ok(())
    } else {
        Err(Error::syntax(cur.pos(), "invalid literal"))
    }
}
