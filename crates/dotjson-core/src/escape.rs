//! JSON string escape decoding and encoding.

use crate::serializer::Sink;
use crate::{Error, Result};

/// Decode the raw text between a string's quotes.
///
/// `base` is the byte offset of `raw` inside the original document, used
/// for error positions. The decoded output is never longer than the input.
pub(crate) fn decode_string(raw: &str, base: usize) -> Result<String> {
    let bytes = raw.as_bytes();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            i += 1;
            let esc = bytes
                .get(i)
                .copied()
                .ok_or_else(|| Error::syntax(base + i, "truncated escape sequence"))?;
            i += 1;
            match esc {
                b'"' => out.push('"'),
                b'\\' => out.push('\\'),
                b'/' => out.push('/'),
                b'b' => out.push('\u{0008}'),
                b'f' => out.push('\u{000C}'),
                b'n' => out.push('\n'),
                b'r' => out.push('\r'),
                b't' => out.push('\t'),
                b'u' => out.push(decode_unicode_escape(bytes, &mut i, base)?),
                _ => return Err(Error::syntax(base + i - 1, "unknown escape character")),
            }
        } else {
            // Copy everything up to the next escape in one slice.
            let stop = memchr::memchr(b'\\', &bytes[i..]).map_or(bytes.len(), |at| i + at);
            if let Some(bad) = bytes[i..stop].iter().position(|&b| b < 0x20) {
                return Err(Error::syntax(base + i + bad, "unescaped control character"));
            }
            out.push_str(&raw[i..stop]);
            i = stop;
        }
    }
    out.shrink_to_fit();
    Ok(out)
}

fn hex4(bytes: &[u8], at: usize) -> Option<u16> {
    if at + 4 > bytes.len() {
        return None;
    }
    let mut acc: u32 = 0;
    for &b in &bytes[at..at + 4] {
        acc = acc * 16 + (b as char).to_digit(16)?;
    }
    Some(acc as u16)
}

/// Decode a `\uXXXX` escape, consuming a trail surrogate when the first
/// unit is a lead surrogate. `i` points just past the `u` on entry and
/// past the last consumed hex digit on exit.
fn decode_unicode_escape(bytes: &[u8], i: &mut usize, base: usize) -> Result<char> {
    let unit = hex4(bytes, *i).ok_or_else(|| Error::syntax(base + *i, "invalid \\u escape"))?;
    *i += 4;
    match unit {
        0xD800..=0xDBFF => {
            if bytes.get(*i) != Some(&b'\\') || bytes.get(*i + 1) != Some(&b'u') {
                return Err(Error::syntax(base + *i, "lead surrogate without a trail"));
            }
            let trail = hex4(bytes, *i + 2)
                .ok_or_else(|| Error::syntax(base + *i + 2, "invalid \\u escape"))?;
            if !(0xDC00..=0xDFFF).contains(&trail) {
                return Err(Error::syntax(base + *i + 2, "invalid trail surrogate"));
            }
            *i += 6;
            let cp = ((u32::from(unit - 0xD800) << 10) | u32::from(trail - 0xDC00)) + 0x10000;
            // Supplementary-plane code points are always valid chars.
            char::from_u32(cp).ok_or_else(|| Error::syntax(base + *i, "invalid code point"))
        }
        0xDC00..=0xDFFF => Err(Error::syntax(base + *i - 4, "trail surrogate without a lead")),
        scalar => char::from_u32(u32::from(scalar))
            .ok_or_else(|| Error::syntax(base + *i - 4, "invalid code point")),
    }
}

/// Write `text` as a quoted JSON string into the sink.
///
/// Control bytes without a named escape become lowercase `\u00xx`; the
/// forward slash is escaped only when `escape_slashes` is set. The rest of
/// the text passes through untouched, UTF-8 included.
pub(crate) fn encode_string_into(text: &str, sink: &mut Sink<'_>, escape_slashes: bool) {
    sink.put("\"");
    let bytes = text.as_bytes();
    let mut flushed = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let named: Option<&str> = match b {
            b'"' => Some("\\\""),
            b'\\' => Some("\\\\"),
            0x08 => Some("\\b"),
            0x0C => Some("\\f"),
            b'\n' => Some("\\n"),
            b'\r' => Some("\\r"),
            b'\t' => Some("\\t"),
            b'/' if escape_slashes => Some("\\/"),
            _ => None,
        };
        if let Some(esc) = named {
            sink.put(&text[flushed..i]);
            sink.put(esc);
            flushed = i + 1;
        } else if b < 0x20 {
            sink.put(&text[flushed..i]);
            sink.put(&format!("\\u{b:04x}"));
            flushed = i + 1;
        }
    }
    sink.put(&text[flushed..]);
    sink.put("\"");
}
