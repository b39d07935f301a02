// encodings/utf32.rs - UTF-32, both byte orders.

use super::DecodeStep;

#[inline]
pub(crate) fn decode(bytes: &[u8], pos: usize, big_endian: bool) -> DecodeStep {
    if pos + 4 > bytes.len() {
        return Err(pos);
    }
    let quad = [bytes[pos], bytes[pos + 1], bytes[pos + 2], bytes[pos + 3]];
    let cp = if big_endian {
        u32::from_be_bytes(quad)
    } else {
        u32::from_le_bytes(quad)
    };
    if char::from_u32(cp).is_some() {
        Ok((cp, 4))
    } else {
        Err(pos)
    }
}

#[inline]
pub(crate) fn decode_prev(bytes: &[u8], pos: usize, big_endian: bool) -> DecodeStep {
    if pos < 4 {
        return Err(0);
    }
    decode(bytes, pos - 4, big_endian)
}

pub(crate) fn encode(cp: u32, out: &mut Vec<u8>, big_endian: bool) -> bool {
    if char::from_u32(cp).is_none() {
        return false;
    }
    if big_endian {
        out.extend_from_slice(&cp.to_be_bytes());
    } else {
        out.extend_from_slice(&cp.to_le_bytes());
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(decode(&0x11_0000u32.to_le_bytes(), 0, false), Err(0));
        assert_eq!(decode(&0xD800u32.to_be_bytes(), 0, true), Err(0));
        assert_eq!(decode(&0x1F600u32.to_be_bytes(), 0, true), Ok((0x1F600, 4)));
    }

    #[test]
    fn short_tail_is_error() {
        let mut b = 0x41u32.to_le_bytes().to_vec();
        b.extend_from_slice(&[0x42, 0x00]);
        assert_eq!(decode(&b, 4, false), Err(4));
        assert_eq!(decode_prev(&b, 4, false), Ok((0x41, 4)));
    }
}
