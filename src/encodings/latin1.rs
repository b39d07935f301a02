// encodings/latin1.rs - ISO-8859-1. Every byte is its own code point.

use super::DecodeStep;

#[inline]
pub(crate) fn decode(bytes: &[u8], pos: usize) -> DecodeStep {
    Ok((bytes[pos] as u32, 1))
}

#[inline]
pub(crate) fn decode_prev(bytes: &[u8], pos: usize) -> DecodeStep {
    decode(bytes, pos - 1)
}

pub(crate) fn encode(cp: u32, out: &mut Vec<u8>) -> bool {
    if cp <= 0xFF {
        out.push(cp as u8);
        true
    } else {
        false
    }
}
