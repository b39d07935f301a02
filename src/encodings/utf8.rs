// encodings/utf8.rs - UTF-8 (RFC 3629 range: U+0000 - U+10FFFF).
// Overlong forms, surrogates and truncated sequences are rejected; the error
// offset is the lead byte of the offending sequence.

use super::DecodeStep;

// === Sequence length by lead byte (0 = never a lead) ===

static ENC_LEN_UTF8: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

#[inline]
fn is_tail(b: u8) -> bool {
    (b & 0xC0) == 0x80
}

#[inline]
pub(crate) fn decode(bytes: &[u8], pos: usize) -> DecodeStep {
    let b0 = bytes[pos];
    if b0 < 0x80 {
        return Ok((b0 as u32, 1));
    }
    let len = ENC_LEN_UTF8[b0 as usize] as usize;
    if len == 0 || pos + len > bytes.len() {
        return Err(pos);
    }
    // The second byte carries the overlong / surrogate / max-range checks.
    let b1 = bytes[pos + 1];
    let (lo, hi) = match b0 {
        0xE0 => (0xA0, 0xBF),
        0xED => (0x80, 0x9F),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    };
    if b1 < lo || b1 > hi {
        return Err(pos);
    }
    let mut cp = (b0 as u32 & (0x7F >> len)) << 6 | (b1 & 0x3F) as u32;
    for &b in &bytes[pos + 2..pos + len] {
        if !is_tail(b) {
            return Err(pos);
        }
        cp = (cp << 6) | (b & 0x3F) as u32;
    }
    Ok((cp, len))
}

pub(crate) fn decode_prev(bytes: &[u8], pos: usize) -> DecodeStep {
    let mut head = pos - 1;
    while head > 0 && pos - head < 4 && is_tail(bytes[head]) {
        head -= 1;
    }
    let (cp, len) = decode(bytes, head)?;
    if head + len == pos {
        Ok((cp, len))
    } else {
        // A stray tail byte after a complete character.
        Err(head + len)
    }
}

pub(crate) fn encode(cp: u32, out: &mut Vec<u8>) -> bool {
    match char::from_u32(cp) {
        Some(c) => {
            let mut buf = [0u8; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            true
        }
        None => false,
    }
}

#[inline]
pub(crate) fn is_char_boundary(bytes: &[u8], pos: usize) -> bool {
    pos >= bytes.len() || !is_tail(bytes[pos])
}

/// Validates the whole buffer, returning the offset of the first bad sequence.
pub(crate) fn validate(bytes: &[u8]) -> Result<(), usize> {
    std::str::from_utf8(bytes).map(|_| ()).map_err(|e| e.valid_up_to())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_all_lengths() {
        let s = "a\u{e9}\u{3042}\u{1F600}";
        let b = s.as_bytes();
        assert_eq!(decode(b, 0), Ok((0x61, 1)));
        assert_eq!(decode(b, 1), Ok((0xE9, 2)));
        assert_eq!(decode(b, 3), Ok((0x3042, 3)));
        assert_eq!(decode(b, 6), Ok((0x1F600, 4)));
    }

    #[test]
    fn rejects_overlong_and_surrogates() {
        assert_eq!(decode(b"\xC0\xAF", 0), Err(0));
        assert_eq!(decode(b"\xE0\x80\xAF", 0), Err(0));
        assert_eq!(decode(b"\xED\xA0\x80", 0), Err(0));
        assert_eq!(decode(b"\xF4\x90\x80\x80", 0), Err(0));
    }

    #[test]
    fn truncated_sequence_reports_lead() {
        assert_eq!(decode(b"ab\xE3\x81", 2), Err(2));
        assert_eq!(validate(b"ab\xE3\x81"), Err(2));
        assert_eq!(validate(b"ab\xFFcd"), Err(2));
    }

    #[test]
    fn steps_backwards() {
        let b = "x\u{3042}".as_bytes();
        assert_eq!(decode_prev(b, 4), Ok((0x3042, 3)));
        assert_eq!(decode_prev(b, 1), Ok((0x78, 1)));
        assert_eq!(decode_prev(b"a\x80", 2), Err(1));
    }

    #[test]
    fn boundaries() {
        let b = "\u{e9}a".as_bytes();
        assert!(is_char_boundary(b, 0));
        assert!(!is_char_boundary(b, 1));
        assert!(is_char_boundary(b, 2));
        assert!(is_char_boundary(b, 3));
    }
}
