// regenc.rs - Subject encodings and the character decoder.
//
// `Encoding` is a closed set: the matcher dispatches with a `match` on the
// tag instead of a trait object, so every decode step is a direct call.
// All encodings decode to Unicode scalar values, which is what compiled
// programs are written in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encodings::{ascii, latin1, sjis, utf16, utf32, utf8};
use crate::error::RegexError;
use crate::regdefs::CodePoint;

/// A supported byte encoding for patterns and subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Encoding {
    Ascii,
    Latin1,
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
    ShiftJis,
}

pub const ALL_ENCODINGS: [Encoding; 8] = [
    Encoding::Ascii,
    Encoding::Latin1,
    Encoding::Utf8,
    Encoding::Utf16Le,
    Encoding::Utf16Be,
    Encoding::Utf32Le,
    Encoding::Utf32Be,
    Encoding::ShiftJis,
];

/// Malformed input: `offset` is the first byte that does not start a valid
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("invalid {} byte sequence at offset {offset}", .encoding.name())]
pub struct DecodeError {
    pub encoding: Encoding,
    pub offset: usize,
}

impl From<DecodeError> for RegexError {
    fn from(err: DecodeError) -> Self {
        RegexError::InvalidEncoding { encoding: err.encoding, offset: err.offset }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encoding name {0:?}")]
pub struct UnknownEncoding(pub String);

impl Encoding {
    /// Canonical (IANA-style) name.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Ascii => "US-ASCII",
            Encoding::Latin1 => "ISO-8859-1",
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf32Le => "UTF-32LE",
            Encoding::Utf32Be => "UTF-32BE",
            Encoding::ShiftJis => "Shift_JIS",
        }
    }

    /// Shortest encoded character in bytes.
    pub fn min_len(self) -> usize {
        match self {
            Encoding::Utf16Le | Encoding::Utf16Be => 2,
            Encoding::Utf32Le | Encoding::Utf32Be => 4,
            _ => 1,
        }
    }

    /// Longest encoded character in bytes.
    pub fn max_len(self) -> usize {
        match self {
            Encoding::Ascii | Encoding::Latin1 => 1,
            Encoding::ShiftJis => 2,
            Encoding::Utf8 | Encoding::Utf16Le | Encoding::Utf16Be => 4,
            Encoding::Utf32Le | Encoding::Utf32Be => 4,
        }
    }

    pub fn is_single_byte(self) -> bool {
        matches!(self, Encoding::Ascii | Encoding::Latin1)
    }

    /// Decodes the character starting at `pos`. `pos` must be `< bytes.len()`.
    #[inline]
    pub fn decode(self, bytes: &[u8], pos: usize) -> Result<(CodePoint, usize), DecodeError> {
        let step = match self {
            Encoding::Ascii => ascii::decode(bytes, pos),
            Encoding::Latin1 => latin1::decode(bytes, pos),
            Encoding::Utf8 => utf8::decode(bytes, pos),
            Encoding::Utf16Le => utf16::decode(bytes, pos, false),
            Encoding::Utf16Be => utf16::decode(bytes, pos, true),
            Encoding::Utf32Le => utf32::decode(bytes, pos, false),
            Encoding::Utf32Be => utf32::decode(bytes, pos, true),
            Encoding::ShiftJis => sjis::decode(bytes, pos),
        };
        step.map_err(|offset| DecodeError { encoding: self, offset })
    }

    /// Decodes the character that ends at `pos`. `pos` must be `> 0`.
    #[inline]
    pub fn decode_prev(self, bytes: &[u8], pos: usize) -> Result<(CodePoint, usize), DecodeError> {
        let step = match self {
            Encoding::Ascii => ascii::decode_prev(bytes, pos),
            Encoding::Latin1 => latin1::decode_prev(bytes, pos),
            Encoding::Utf8 => utf8::decode_prev(bytes, pos),
            Encoding::Utf16Le => utf16::decode_prev(bytes, pos, false),
            Encoding::Utf16Be => utf16::decode_prev(bytes, pos, true),
            Encoding::Utf32Le => utf32::decode_prev(bytes, pos, false),
            Encoding::Utf32Be => utf32::decode_prev(bytes, pos, true),
            Encoding::ShiftJis => sjis::decode_prev(bytes, pos),
        };
        step.map_err(|offset| DecodeError { encoding: self, offset })
    }

    /// Appends the encoding of `cp`; returns false if it is not representable.
    pub fn encode(self, cp: CodePoint, out: &mut Vec<u8>) -> bool {
        match self {
            Encoding::Ascii => ascii::encode(cp, out),
            Encoding::Latin1 => latin1::encode(cp, out),
            Encoding::Utf8 => utf8::encode(cp, out),
            Encoding::Utf16Le => utf16::encode(cp, out, false),
            Encoding::Utf16Be => utf16::encode(cp, out, true),
            Encoding::Utf32Le => utf32::encode(cp, out, false),
            Encoding::Utf32Be => utf32::encode(cp, out, true),
            Encoding::ShiftJis => sjis::encode(cp, out),
        }
    }

    /// Encodes a whole code point sequence, or `None` if any is unrepresentable.
    pub fn encode_all(self, cps: &[CodePoint]) -> Option<Vec<u8>> {
        let mut out = Vec::with_capacity(cps.len() * self.min_len());
        cps.iter().all(|&cp| self.encode(cp, &mut out)).then_some(out)
    }

    /// True if `pos` does not split a character. Offsets at or past the end count.
    pub fn is_char_boundary(self, bytes: &[u8], pos: usize) -> bool {
        match self {
            Encoding::Ascii | Encoding::Latin1 => true,
            Encoding::Utf8 => utf8::is_char_boundary(bytes, pos),
            Encoding::Utf16Le => utf16::is_char_boundary(bytes, pos, false),
            Encoding::Utf16Be => utf16::is_char_boundary(bytes, pos, true),
            Encoding::Utf32Le | Encoding::Utf32Be => pos % 4 == 0,
            Encoding::ShiftJis => sjis::is_char_boundary(bytes, pos),
        }
    }

    /// Checks the whole buffer.
    pub fn validate(self, bytes: &[u8]) -> Result<(), DecodeError> {
        match self {
            Encoding::Latin1 => Ok(()),
            Encoding::Utf8 => {
                utf8::validate(bytes).map_err(|offset| DecodeError { encoding: self, offset })
            }
            _ => self.decoder(bytes).try_for_each(|c| c.map(|_| ())),
        }
    }

    /// A decoding cursor over `bytes`, positioned at the start.
    pub fn decoder(self, bytes: &[u8]) -> Decoder<'_> {
        Decoder::new(self, bytes)
    }

    /// Decodes all of `bytes` into code points.
    pub fn decode_all(self, bytes: &[u8]) -> Result<Vec<CodePoint>, DecodeError> {
        self.decoder(bytes).map(|c| c.map(|c| c.code_point)).collect()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let enc = match key.as_str() {
            "ascii" | "usascii" => Encoding::Ascii,
            "latin1" | "iso88591" => Encoding::Latin1,
            "utf8" => Encoding::Utf8,
            "utf16le" => Encoding::Utf16Le,
            "utf16be" | "utf16" => Encoding::Utf16Be,
            "utf32le" => Encoding::Utf32Le,
            "utf32be" | "utf32" => Encoding::Utf32Be,
            "shiftjis" | "sjis" => Encoding::ShiftJis,
            _ => return Err(UnknownEncoding(s.to_string())),
        };
        Ok(enc)
    }
}

/// One decoded character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedChar {
    pub code_point: CodePoint,
    /// Byte offset of the first byte.
    pub offset: usize,
    /// Encoded length in bytes.
    pub len: usize,
}

/// A restartable, double-ended cursor yielding characters of a byte buffer.
///
/// After an error the cursor is exhausted; `seek` restarts it at any
/// character boundary.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    encoding: Encoding,
    bytes: &'a [u8],
    front: usize,
    back: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(encoding: Encoding, bytes: &'a [u8]) -> Self {
        Decoder { encoding, bytes, front: 0, back: bytes.len() }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Byte offset of the next character returned by `next`.
    pub fn position(&self) -> usize {
        self.front
    }

    /// Restarts the cursor so that it covers `pos..len`.
    pub fn seek(&mut self, pos: usize) {
        self.front = pos.min(self.bytes.len());
        self.back = self.bytes.len();
    }

    pub fn peek(&self) -> Option<Result<DecodedChar, DecodeError>> {
        self.clone().next()
    }

    fn fail(&mut self, err: DecodeError) -> Option<Result<DecodedChar, DecodeError>> {
        self.front = self.back;
        Some(Err(err))
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<DecodedChar, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        match self.encoding.decode(&self.bytes[..self.back], self.front) {
            Ok((code_point, len)) => {
                let offset = self.front;
                self.front += len;
                Some(Ok(DecodedChar { code_point, offset, len }))
            }
            Err(err) => self.fail(err),
        }
    }
}

impl DoubleEndedIterator for Decoder<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back <= self.front {
            return None;
        }
        match self.encoding.decode_prev(&self.bytes[..self.back], self.back) {
            Ok((code_point, len)) if self.back - len >= self.front => {
                self.back -= len;
                Some(Ok(DecodedChar { code_point, offset: self.back, len }))
            }
            Ok(_) => {
                let offset = self.front;
                self.fail(DecodeError { encoding: self.encoding, offset })
            }
            Err(err) => self.fail(err),
        }
    }
}

impl std::iter::FusedIterator for Decoder<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_backward_agree() {
        for enc in ALL_ENCODINGS {
            let text = [0x41, 0x42, 0x7A];
            let bytes = enc.encode_all(&text).unwrap();
            let forward: Vec<_> = enc.decoder(&bytes).map(|c| c.unwrap().code_point).collect();
            let mut backward: Vec<_> =
                enc.decoder(&bytes).rev().map(|c| c.unwrap().code_point).collect();
            backward.reverse();
            assert_eq!(forward, text, "{}", enc);
            assert_eq!(backward, text, "{}", enc);
        }
    }

    #[test]
    fn malformed_utf8_reports_offset() {
        let err = Encoding::Utf8.validate(b"abc\xFFdef").unwrap_err();
        assert_eq!(err.offset, 3);
        let mut dec = Encoding::Utf8.decoder(b"ab\xC3");
        assert_eq!(dec.next().unwrap().unwrap().code_point, 0x61);
        assert_eq!(dec.next().unwrap().unwrap().code_point, 0x62);
        assert_eq!(dec.next().unwrap().unwrap_err().offset, 2);
        assert!(dec.next().is_none());
    }

    #[test]
    fn decoder_is_restartable() {
        let bytes = "h\u{e9}llo".as_bytes();
        let mut dec = Encoding::Utf8.decoder(bytes);
        let first: Vec<_> = dec.by_ref().map(|c| c.unwrap().offset).collect();
        dec.seek(0);
        let again: Vec<_> = dec.map(|c| c.unwrap().offset).collect();
        assert_eq!(first, vec![0, 1, 3, 4, 5]);
        assert_eq!(first, again);
    }

    #[test]
    fn names_parse_loosely() {
        assert_eq!("utf-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("UTF-16LE".parse::<Encoding>().unwrap(), Encoding::Utf16Le);
        assert_eq!("Shift_JIS".parse::<Encoding>().unwrap(), Encoding::ShiftJis);
        assert_eq!("ISO-8859-1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert!("ebcdic".parse::<Encoding>().is_err());
    }

    #[test]
    fn ascii_rejects_eight_bit() {
        let err = Encoding::Ascii.validate(b"ok\x80").unwrap_err();
        assert_eq!(err, DecodeError { encoding: Encoding::Ascii, offset: 2 });
        let err: RegexError = err.into();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidEncoding);
    }
}
