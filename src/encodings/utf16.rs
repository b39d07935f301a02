// encodings/utf16.rs - UTF-16, both byte orders.
// Unpaired surrogates and a dangling odd byte are invalid.

use super::DecodeStep;

#[inline]
fn unit(bytes: &[u8], pos: usize, big_endian: bool) -> u32 {
    let pair = [bytes[pos], bytes[pos + 1]];
    if big_endian {
        u16::from_be_bytes(pair) as u32
    } else {
        u16::from_le_bytes(pair) as u32
    }
}

#[inline]
fn is_high(u: u32) -> bool {
    (0xD800..=0xDBFF).contains(&u)
}

#[inline]
fn is_low(u: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&u)
}

#[inline]
pub(crate) fn decode(bytes: &[u8], pos: usize, big_endian: bool) -> DecodeStep {
    if pos + 2 > bytes.len() {
        return Err(pos);
    }
    let u = unit(bytes, pos, big_endian);
    if is_high(u) {
        if pos + 4 > bytes.len() {
            return Err(pos);
        }
        let low = unit(bytes, pos + 2, big_endian);
        if !is_low(low) {
            return Err(pos);
        }
        Ok((0x10000 + (((u - 0xD800) << 10) | (low - 0xDC00)), 4))
    } else if is_low(u) {
        Err(pos)
    } else {
        Ok((u, 2))
    }
}

pub(crate) fn decode_prev(bytes: &[u8], pos: usize, big_endian: bool) -> DecodeStep {
    if pos < 2 {
        return Err(0);
    }
    let u = unit(bytes, pos - 2, big_endian);
    if is_low(u) {
        if pos >= 4 && is_high(unit(bytes, pos - 4, big_endian)) {
            return decode(bytes, pos - 4, big_endian);
        }
        Err(pos - 2)
    } else if is_high(u) {
        Err(pos - 2)
    } else {
        Ok((u, 2))
    }
}

pub(crate) fn encode(cp: u32, out: &mut Vec<u8>, big_endian: bool) -> bool {
    let Some(c) = char::from_u32(cp) else {
        return false;
    };
    let mut buf = [0u16; 2];
    for u in c.encode_utf16(&mut buf) {
        if big_endian {
            out.extend_from_slice(&u.to_be_bytes());
        } else {
            out.extend_from_slice(&u.to_le_bytes());
        }
    }
    true
}

pub(crate) fn is_char_boundary(bytes: &[u8], pos: usize, big_endian: bool) -> bool {
    if pos % 2 != 0 {
        return false;
    }
    if pos < 2 || pos + 2 > bytes.len() {
        return true;
    }
    !(is_low(unit(bytes, pos, big_endian)) && is_high(unit(bytes, pos - 2, big_endian)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le(s: &str) -> Vec<u8> {
        s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
    }

    #[test]
    fn surrogate_pairs() {
        let b = le("a\u{1F600}");
        assert_eq!(decode(&b, 0, false), Ok((0x61, 2)));
        assert_eq!(decode(&b, 2, false), Ok((0x1F600, 4)));
        assert_eq!(decode_prev(&b, 6, false), Ok((0x1F600, 4)));
        assert!(!is_char_boundary(&b, 4, false));
        assert!(is_char_boundary(&b, 6, false));
    }

    #[test]
    fn unpaired_surrogates_are_errors() {
        let b = [0x3D, 0xD8, 0x41, 0x00];
        assert_eq!(decode(&b, 0, false), Err(0));
        let lone_low = [0x41, 0x00, 0x00, 0xDC];
        assert_eq!(decode(&lone_low, 2, false), Err(2));
        assert_eq!(decode_prev(&lone_low, 4, false), Err(2));
    }

    #[test]
    fn big_endian_round_trip() {
        let mut out = Vec::new();
        assert!(encode(0x3042, &mut out, true));
        assert_eq!(out, vec![0x30, 0x42]);
        assert_eq!(decode(&out, 0, true), Ok((0x3042, 2)));
    }

    #[test]
    fn odd_trailing_byte() {
        assert_eq!(decode(&[0x41, 0x00, 0x42], 2, false), Err(2));
    }
}
