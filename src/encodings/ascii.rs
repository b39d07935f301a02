// encodings/ascii.rs - US-ASCII (7-bit). Bytes >= 0x80 are invalid.

use super::DecodeStep;

#[inline]
pub(crate) fn decode(bytes: &[u8], pos: usize) -> DecodeStep {
    let b = bytes[pos];
    if b < 0x80 {
        Ok((b as u32, 1))
    } else {
        Err(pos)
    }
}

#[inline]
pub(crate) fn decode_prev(bytes: &[u8], pos: usize) -> DecodeStep {
    decode(bytes, pos - 1)
}

pub(crate) fn encode(cp: u32, out: &mut Vec<u8>) -> bool {
    if cp < 0x80 {
        out.push(cp as u8);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_high_bytes() {
        assert_eq!(decode(b"a\xC3", 0), Ok((0x61, 1)));
        assert_eq!(decode(b"a\xC3", 1), Err(1));
        assert_eq!(decode_prev(b"ab", 2), Ok((0x62, 1)));
    }

    #[test]
    fn encode_only_seven_bit() {
        let mut out = Vec::new();
        assert!(encode(0x7F, &mut out));
        assert!(!encode(0xE9, &mut out));
        assert_eq!(out, vec![0x7F]);
    }
}
