// compat_encodings.rs - Patterns and subjects in encodings other than UTF-8.
//
// Both sides are transcoded from `&str` with `Encoding::encode`, so offsets
// are byte offsets in the target encoding.

use ferrex::error::RegexError;
use ferrex::regcomp::{compile, CompileLimits};
use ferrex::regdefs::Options;
use ferrex::regenc::{Encoding, ALL_ENCODINGS};
use ferrex::regerror::SyntaxErrorKind;
use ferrex::regexec::{search, MatchParam};
use ferrex::region::Region;
use ferrex::regint::RegexType;
use ferrex::regsyntax::SYNTAX_ONIGURUMA;

fn enc(encoding: Encoding, s: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for c in s.chars() {
        assert!(encoding.encode(c as u32, &mut out), "{c:?} is not representable in {encoding}");
    }
    out
}

fn compile_in(encoding: Encoding, pattern: &str) -> RegexType {
    compile(
        &enc(encoding, pattern),
        encoding,
        Options::empty(),
        &SYNTAX_ONIGURUMA,
        &CompileLimits::default(),
    )
    .unwrap_or_else(|e| panic!("compile failed for {pattern:?} in {encoding}: {e}"))
}

fn search_raw(encoding: Encoding, pattern: &str, subject: &[u8]) -> Result<Option<Region>, RegexError> {
    let reg = compile_in(encoding, pattern);
    search(&reg, subject, encoding, 0, subject.len(), Options::empty(), &MatchParam::default())
}

fn x2(encoding: Encoding, pattern: &str, input: &str, from: usize, to: usize) {
    let region = search_raw(encoding, pattern, &enc(encoding, input))
        .unwrap_or_else(|e| panic!("x2: search failed for {pattern:?} in {encoding}: {e}"))
        .unwrap_or_else(|| panic!("x2: expected match for {pattern:?} against {input:?} in {encoding}"));
    assert_eq!(
        (region.start(), region.end()),
        (from, to),
        "x2: wrong span for {pattern:?} against {input:?} in {encoding}"
    );
}

fn x3(encoding: Encoding, pattern: &str, input: &str, from: usize, to: usize, mem: usize) {
    let region = search_raw(encoding, pattern, &enc(encoding, input))
        .unwrap_or_else(|e| panic!("x3: search failed for {pattern:?} in {encoding}: {e}"))
        .unwrap_or_else(|| panic!("x3: expected match for {pattern:?} against {input:?} in {encoding}"));
    let span = region
        .get(mem)
        .unwrap_or_else(|| panic!("x3: group {mem} unset for {pattern:?} in {encoding}"));
    assert_eq!((span.start, span.end), (from, to), "x3: wrong span for {pattern:?} in {encoding}");
}

fn n(encoding: Encoding, pattern: &str, input: &str) {
    let found = search_raw(encoding, pattern, &enc(encoding, input))
        .unwrap_or_else(|e| panic!("n: search failed for {pattern:?} in {encoding}: {e}"));
    assert!(found.is_none(), "n: expected no match for {pattern:?} against {input:?} in {encoding}");
}

fn invalid(encoding: Encoding, pattern: &str, subject: &[u8], offset: usize) {
    let err = search_raw(encoding, pattern, subject).unwrap_err();
    assert_eq!(err, RegexError::InvalidEncoding { encoding, offset });
}

#[test]
fn ascii_text_in_every_encoding() {
    for e in ALL_ENCODINGS {
        let w = e.min_len();
        x2(e, "b+c", "abbbcd", w, 5 * w);
        x3(e, "(\\w+)\\s(\\w+)", "say hi", 4 * w, 6 * w, 2);
        x2(e, "(?i)HELLO", "oh hello", 3 * w, 8 * w);
        n(e, "^b", "ab");
        x2(e, "", "", 0, 0);
    }
}

#[test]
fn ascii() {
    x2(Encoding::Ascii, "[[:punct:]]+", "ab!?c", 2, 4);
    x2(Encoding::Ascii, "\\x41", "zA", 1, 2);
    invalid(Encoding::Ascii, "z", b"ab\x80z", 2);
}

#[test]
fn ascii_pattern_must_be_seven_bit() {
    let err = compile(b"a\xE9", Encoding::Ascii, Options::empty(), &SYNTAX_ONIGURUMA, &CompileLimits::default())
        .unwrap_err();
    assert_eq!(err, RegexError::Syntax { kind: SyntaxErrorKind::InvalidPatternEncoding, offset: 1 });
}

#[test]
fn latin1() {
    let e = Encoding::Latin1;
    x2(e, "é+", "caféé!", 3, 5);
    x2(e, "(?i)É", "café", 3, 4);
    x2(e, "\\w+", " naïve ", 1, 6);
    x2(e, "[à-ÿ]", "Zürich", 1, 2);
    x2(e, "\\xFF", "aÿ", 1, 2);
    // every byte is valid
    let all: Vec<u8> = (0..=255u8).collect();
    let found = search_raw(e, "ÿ$", &all).unwrap().unwrap();
    assert_eq!((found.start(), found.end()), (255, 256));
}

#[test]
fn utf16() {
    for e in [Encoding::Utf16Le, Encoding::Utf16Be] {
        x2(e, "b", "aあb", 4, 6);
        x2(e, "x.y", "x😀y", 0, 8);
        x2(e, "😀+", "a😀😀", 2, 10);
        x2(e, "\\bcat\\b", "a cat", 4, 10);
        x2(e, "(?<=あ)b", "bあb", 4, 6);
        x2(e, "(?i)straße", "STRASSE", 0, 14);
        x3(e, "(\\p{Hiragana}+)", "カタかな", 4, 8, 1);
        n(e, "\\p{Han}", "ひらがな");
    }
}

#[test]
fn utf16_byte_order_matters() {
    let subject = enc(Encoding::Utf16Be, "あ");
    let reg = compile_in(Encoding::Utf16Le, "あ");
    let found = search(&reg, &subject, Encoding::Utf16Le, 0, subject.len(), Options::empty(), &MatchParam::default())
        .unwrap();
    assert!(found.is_none());
}

#[test]
fn utf16_invalid_sequences() {
    // odd trailing byte
    invalid(Encoding::Utf16Le, "a", b"a\x00b", 2);
    // unpaired high surrogate followed by 'A'
    invalid(Encoding::Utf16Le, "A", &[0x41, 0x00, 0x3D, 0xD8, 0x41, 0x00], 2);
    // lone low surrogate, big-endian
    invalid(Encoding::Utf16Be, "A", &[0xDC, 0x00, 0x00, 0x41], 0);
}

#[test]
fn utf32() {
    for e in [Encoding::Utf32Le, Encoding::Utf32Be] {
        x2(e, "本", "日本語", 4, 8);
        x2(e, "語$", "日本語", 8, 12);
        x2(e, "[^日]+", "日本語", 4, 12);
        x2(e, ".😀", "ab😀", 4, 12);
    }
    let mut subject = enc(Encoding::Utf32Le, "a");
    subject.extend_from_slice(&0x11_0000u32.to_le_bytes());
    invalid(Encoding::Utf32Le, "a", &subject, 4);
    invalid(Encoding::Utf32Be, "a", &[0, 0, 0, 0x61, 0, 0], 4);
}

#[test]
fn shift_jis() {
    let e = Encoding::ShiftJis;
    assert_eq!(enc(e, "あ猫"), [0x82, 0xA0, 0x94, 0x4C]);
    x2(e, "猫", "吾輩は猫である", 6, 8);
    x2(e, "は.で", "吾輩は猫である", 4, 10);
    x2(e, "ｱ+", "xｱｱ", 1, 3);
    x3(e, "(\\p{Katakana}+)", "あカナ", 2, 6, 1);
}

#[test]
fn shift_jis_trail_bytes_are_not_characters() {
    let e = Encoding::ShiftJis;
    // 表 is 0x95 0x5C; its trail byte is the ASCII backslash.
    assert_eq!(enc(e, "表"), [0x95, 0x5C]);
    n(e, "\\\\", "表");
    x2(e, "\\\\", "表\\", 2, 3);
    // ソ is 0x83 0x5C
    x2(e, "ソ$", "aソ", 1, 3);
    x2(e, "(?<=ソ)x", "ソx", 2, 3);
}

#[test]
fn shift_jis_invalid_sequences() {
    invalid(Encoding::ShiftJis, "a", b"a\x82", 1);
    invalid(Encoding::ShiftJis, "a", b"ab\xFDa", 2);
}

#[test]
fn encoding_names_parse() {
    for e in ALL_ENCODINGS {
        assert_eq!(e.name().parse::<Encoding>().unwrap(), e);
        assert_eq!(e.to_string(), e.name());
    }
    assert_eq!("sjis".parse::<Encoding>().unwrap(), Encoding::ShiftJis);
    assert_eq!("utf_16le".parse::<Encoding>().unwrap(), Encoding::Utf16Le);
    assert!("ebcdic".parse::<Encoding>().is_err());
}

#[test]
fn decode_all_reports_first_bad_offset() {
    let err = Encoding::Utf16Le.decode_all(&[0x41, 0x00, 0x00, 0xDC]).unwrap_err();
    assert_eq!(err.offset, 2);
    let cps = Encoding::ShiftJis.decode_all(&[0x82, 0xA0, 0x41]).unwrap();
    assert_eq!(cps, ['あ' as u32, 'A' as u32]);
}
