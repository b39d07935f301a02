// encodings/mod.rs - Per-encoding primitives behind `regenc::Encoding`.
//
// Every module exposes the same free functions:
//   decode(bytes, pos)      -> Ok((code point, byte length)) | Err(bad offset)
//   decode_prev(bytes, pos) -> the character that ends at `pos`
//   encode(cp, out)         -> false when `cp` has no representation
//   is_char_boundary(bytes, pos)
// The closed dispatch over them lives in regenc.rs.

pub(crate) mod ascii;
pub(crate) mod latin1;
pub(crate) mod sjis;
pub(crate) mod utf16;
pub(crate) mod utf32;
pub(crate) mod utf8;

mod jis0208_data;

/// Result of a single decode step: `(code point, byte length)` or the offset
/// of the first byte that cannot start a valid character.
pub(crate) type DecodeStep = Result<(u32, usize), usize>;
