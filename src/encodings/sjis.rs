// encodings/sjis.rs - Shift_JIS (JIS X 0201 single bytes + JIS X 0208).
//
// Code points are Unicode: double-byte characters go through the JIS X 0208
// row/cell table. Backward stepping is ambiguous in Shift_JIS because trail
// bytes overlap lead bytes, so `decode_prev` re-synchronises from the last
// byte that cannot be a lead.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::jis0208_data::JIS0208_TO_UNICODE;
use super::DecodeStep;

const CELLS: usize = 94;

#[inline]
fn is_lead(b: u8) -> bool {
    matches!(b, 0x81..=0x9F | 0xE0..=0xFC)
}

/// Structural length of the character starting at `pos`, ignoring validity.
#[inline]
fn structural_len(bytes: &[u8], pos: usize) -> usize {
    if is_lead(bytes[pos]) && pos + 1 < bytes.len() {
        2
    } else {
        1
    }
}

fn row_cell(lead: u8, trail: u8) -> Option<(usize, usize)> {
    let base = match lead {
        0x81..=0x9F => (lead - 0x81) as usize * 2,
        0xE0..=0xEF => (lead - 0xC1) as usize * 2,
        _ => return None,
    };
    match trail {
        0x40..=0x7E => Some((base, (trail - 0x40) as usize)),
        0x80..=0x9E => Some((base, (trail - 0x41) as usize)),
        0x9F..=0xFC => Some((base + 1, (trail - 0x9F) as usize)),
        _ => None,
    }
}

#[inline]
pub(crate) fn decode(bytes: &[u8], pos: usize) -> DecodeStep {
    let b = bytes[pos];
    match b {
        0x00..=0x7F => Ok((b as u32, 1)),
        0xA1..=0xDF => Ok((0xFF61 + (b - 0xA1) as u32, 1)),
        0x81..=0x9F | 0xE0..=0xEF => {
            let trail = *bytes.get(pos + 1).ok_or(pos)?;
            let (row, cell) = row_cell(b, trail).ok_or(pos)?;
            match JIS0208_TO_UNICODE[row * CELLS + cell] {
                0 => Err(pos),
                u => Ok((u as u32, 2)),
            }
        }
        _ => Err(pos),
    }
}

/// Start of a run that is known to begin on a character boundary and reaches
/// at least up to `pos`.
fn sync_point(bytes: &[u8], pos: usize) -> usize {
    let mut p = pos;
    while p > 0 && is_lead(bytes[p - 1]) {
        p -= 1;
    }
    p
}

pub(crate) fn decode_prev(bytes: &[u8], pos: usize) -> DecodeStep {
    let last = pos - 1;
    let mut head = sync_point(bytes, last);
    loop {
        let len = structural_len(bytes, head);
        if head + len > last {
            break;
        }
        head += len;
    }
    let (cp, len) = decode(bytes, head)?;
    if head + len == pos {
        Ok((cp, len))
    } else {
        Err(head)
    }
}

pub(crate) fn is_char_boundary(bytes: &[u8], pos: usize) -> bool {
    if pos == 0 || pos >= bytes.len() {
        return true;
    }
    let mut p = sync_point(bytes, pos);
    while p < pos {
        p += structural_len(bytes, p);
    }
    p == pos
}

fn reverse_table() -> &'static HashMap<u16, u16> {
    static REVERSE: OnceLock<HashMap<u16, u16>> = OnceLock::new();
    REVERSE.get_or_init(|| {
        JIS0208_TO_UNICODE
            .iter()
            .enumerate()
            .filter(|&(_, &u)| u != 0)
            .map(|(i, &u)| (u, i as u16))
            .collect()
    })
}

pub(crate) fn encode(cp: u32, out: &mut Vec<u8>) -> bool {
    if cp < 0x80 {
        out.push(cp as u8);
        return true;
    }
    if (0xFF61..=0xFF9F).contains(&cp) {
        out.push((cp - 0xFF61) as u8 + 0xA1);
        return true;
    }
    let Ok(u) = u16::try_from(cp) else {
        return false;
    };
    let Some(&index) = reverse_table().get(&u) else {
        return false;
    };
    let (row, cell) = (index as usize / CELLS, index as usize % CELLS);
    let lead = (row >> 1) + if row < 62 { 0x81 } else { 0xC1 };
    let trail = if row & 1 == 1 {
        cell + 0x9F
    } else if cell < 63 {
        cell + 0x40
    } else {
        cell + 0x41
    };
    out.push(lead as u8);
    out.push(trail as u8);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_kana_and_ascii() {
        // "aあｱ" : 'a', HIRAGANA A (0x82A0), HALFWIDTH KATAKANA A (0xB1)
        let b = [0x61, 0x82, 0xA0, 0xB1];
        assert_eq!(decode(&b, 0), Ok((0x61, 1)));
        assert_eq!(decode(&b, 1), Ok((0x3042, 2)));
        assert_eq!(decode(&b, 3), Ok((0xFF71, 1)));
    }

    #[test]
    fn steps_back_over_ambiguous_trail() {
        // 0x82 0xA0 is one character; 0xA0 alone is not a valid single byte.
        let b = [0x82, 0xA0, 0x82, 0xA2];
        assert_eq!(decode_prev(&b, 4), Ok((0x3044, 2)));
        assert_eq!(decode_prev(&b, 2), Ok((0x3042, 2)));
        assert!(!is_char_boundary(&b, 1));
        assert!(!is_char_boundary(&b, 3));
        assert!(is_char_boundary(&b, 2));
    }

    #[test]
    fn trail_byte_that_looks_like_ascii() {
        // U+8868 is 0x95 0x5C in Shift_JIS; the 0x5C must not be read as '\'.
        let b = [0x95, 0x5C, 0x41];
        assert_eq!(decode(&b, 0), Ok((0x8868, 2)));
        assert_eq!(decode_prev(&b, 2), Ok((0x8868, 2)));
        assert!(!is_char_boundary(&b, 1));
    }

    #[test]
    fn invalid_lead_and_truncation() {
        assert_eq!(decode(&[0x80], 0), Err(0));
        assert_eq!(decode(&[0x41, 0x82], 1), Err(1));
        assert_eq!(decode(&[0xF0, 0x40], 0), Err(0));
    }

    #[test]
    fn encode_matches_decode() {
        let mut out = Vec::new();
        assert!(encode(0x3042, &mut out));
        assert!(encode(0x8868, &mut out));
        assert!(encode(0xFF71, &mut out));
        assert_eq!(out, vec![0x82, 0xA0, 0x95, 0x5C, 0xB1]);
        assert!(!encode(0x1F600, &mut out));
    }
}
