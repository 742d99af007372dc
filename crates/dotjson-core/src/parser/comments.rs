//! Comment-stripping pre-pass.
//!
//! Runs before parsing on a private mutable copy of the input. Comment
//! tokens and their contents are overwritten with spaces in place, so every
//! byte position (and thus every error position) survives the pass.

use memchr::memmem;
use tracing::trace;

/// Blank out `/* ... */` and `// ... \n` comments.
pub(crate) fn strip(buf: &mut [u8]) {
    blank_comments(buf, b"/*", b"*/");
    blank_comments(buf, b"//", b"\n");
    trace!(len = buf.len(), "stripped comments");
}

fn blank_comments(buf: &mut [u8], start_token: &[u8], end_token: &[u8]) {
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;
    while i < buf.len() {
        let b = buf[i];
        if escaped {
            escaped = false;
            i += 1;
            continue;
        }
        if b == b'\\' {
            escaped = true;
            i += 1;
            continue;
        }
        if b == b'"' {
            in_string = !in_string;
            i += 1;
            continue;
        }
        if !in_string && buf[i..].starts_with(start_token) {
            let content = i + start_token.len();
            match memmem::find(&buf[content..], end_token) {
                // No end token: stop here and leave the remainder as-is.
                None => {
                    buf[i..content].fill(b' ');
                    return;
                }
                Some(at) => {
                    let stop = content + at + end_token.len();
                    buf[i..stop].fill(b' ');
                    i = stop;
                    continue;
                }
            }
        }
        i += 1;
    }
}
