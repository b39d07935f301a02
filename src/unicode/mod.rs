// unicode/mod.rs - Unicode property table and case folding.
//
// The tables in property_data.rs / fold_data.rs are plain statics, so every
// lookup here is a lock-free binary search. Derived sets (POSIX classes, the
// reverse fold map) are computed once on first use behind `OnceLock`.

mod fold_data;
mod property_data;

use std::collections::HashMap;
use std::sync::OnceLock;

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::regdefs::{CodePoint, MAX_CODE_POINT};
use crate::regint::CodeRanges;
use fold_data::{FULL_FOLD_TABLE, SIMPLE_FOLD_TABLE};
use property_data::*;

pub use property_data::{Script, UNICODE_VERSION};

// === General Category ===

/// Unicode General_Category values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralCategory {
    Lu, Ll, Lt, Lm, Lo,
    Mn, Mc, Me,
    Nd, Nl, No,
    Pc, Pd, Ps, Pe, Pi, Pf, Po,
    Sm, Sc, Sk, So,
    Zs, Zl, Zp,
    Cc, Cf, Cs, Co, Cn,
}

/// First letter of a general category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorCategory {
    Letter,
    Mark,
    Number,
    Punctuation,
    Symbol,
    Separator,
    Other,
}

use GeneralCategory as Gc;

static CATEGORY_NAMES: &[(GeneralCategory, &str, &str)] = &[
    (Gc::Lu, "Lu", "Uppercase_Letter"),
    (Gc::Ll, "Ll", "Lowercase_Letter"),
    (Gc::Lt, "Lt", "Titlecase_Letter"),
    (Gc::Lm, "Lm", "Modifier_Letter"),
    (Gc::Lo, "Lo", "Other_Letter"),
    (Gc::Mn, "Mn", "Nonspacing_Mark"),
    (Gc::Mc, "Mc", "Spacing_Mark"),
    (Gc::Me, "Me", "Enclosing_Mark"),
    (Gc::Nd, "Nd", "Decimal_Number"),
    (Gc::Nl, "Nl", "Letter_Number"),
    (Gc::No, "No", "Other_Number"),
    (Gc::Pc, "Pc", "Connector_Punctuation"),
    (Gc::Pd, "Pd", "Dash_Punctuation"),
    (Gc::Ps, "Ps", "Open_Punctuation"),
    (Gc::Pe, "Pe", "Close_Punctuation"),
    (Gc::Pi, "Pi", "Initial_Punctuation"),
    (Gc::Pf, "Pf", "Final_Punctuation"),
    (Gc::Po, "Po", "Other_Punctuation"),
    (Gc::Sm, "Sm", "Math_Symbol"),
    (Gc::Sc, "Sc", "Currency_Symbol"),
    (Gc::Sk, "Sk", "Modifier_Symbol"),
    (Gc::So, "So", "Other_Symbol"),
    (Gc::Zs, "Zs", "Space_Separator"),
    (Gc::Zl, "Zl", "Line_Separator"),
    (Gc::Zp, "Zp", "Paragraph_Separator"),
    (Gc::Cc, "Cc", "Control"),
    (Gc::Cf, "Cf", "Format"),
    (Gc::Cs, "Cs", "Surrogate"),
    (Gc::Co, "Co", "Private_Use"),
    (Gc::Cn, "Cn", "Unassigned"),
];

impl GeneralCategory {
    pub fn major(self) -> MajorCategory {
        match self {
            Gc::Lu | Gc::Ll | Gc::Lt | Gc::Lm | Gc::Lo => MajorCategory::Letter,
            Gc::Mn | Gc::Mc | Gc::Me => MajorCategory::Mark,
            Gc::Nd | Gc::Nl | Gc::No => MajorCategory::Number,
            Gc::Pc | Gc::Pd | Gc::Ps | Gc::Pe | Gc::Pi | Gc::Pf | Gc::Po => {
                MajorCategory::Punctuation
            }
            Gc::Sm | Gc::Sc | Gc::Sk | Gc::So => MajorCategory::Symbol,
            Gc::Zs | Gc::Zl | Gc::Zp => MajorCategory::Separator,
            Gc::Cc | Gc::Cf | Gc::Cs | Gc::Co | Gc::Cn => MajorCategory::Other,
        }
    }

    pub fn short_name(self) -> &'static str {
        CATEGORY_NAMES[self as usize].1
    }

    pub fn long_name(self) -> &'static str {
        CATEGORY_NAMES[self as usize].2
    }

    pub fn is_cased_letter(self) -> bool {
        matches!(self, Gc::Lu | Gc::Ll | Gc::Lt)
    }
}

bitflags! {
    /// Binary Unicode properties carried by the table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CharFlags: u16 {
        const ALPHABETIC  = 1;
        const LOWERCASE   = 1 << 1;
        const UPPERCASE   = 1 << 2;
        const WHITE_SPACE = 1 << 3;
        const MATH        = 1 << 4;
        const HEX_DIGIT   = 1 << 5;
        const IDEOGRAPHIC = 1 << 6;
    }
}

fn flag_table(flag: CharFlags) -> &'static [(u32, u32)] {
    if flag == CharFlags::ALPHABETIC {
        ALPHABETIC_TABLE
    } else if flag == CharFlags::LOWERCASE {
        LOWERCASE_TABLE
    } else if flag == CharFlags::UPPERCASE {
        UPPERCASE_TABLE
    } else if flag == CharFlags::WHITE_SPACE {
        WHITE_SPACE_TABLE
    } else if flag == CharFlags::MATH {
        MATH_TABLE
    } else if flag == CharFlags::HEX_DIGIT {
        HEX_DIGIT_TABLE
    } else {
        IDEOGRAPHIC_TABLE
    }
}

/// Everything the table knows about one code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodePointProperties {
    pub category: GeneralCategory,
    pub script: Script,
    pub flags: CharFlags,
}

// === Lookups ===

#[inline]
fn in_table(table: &[(u32, u32)], cp: CodePoint) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

fn find_in<T: Copy>(table: &[(u32, u32, T)], cp: CodePoint) -> Option<T> {
    let idx = table.partition_point(|&(_, hi, _)| hi < cp);
    match table.get(idx) {
        Some(&(lo, _, value)) if lo <= cp => Some(value),
        _ => None,
    }
}

pub fn general_category(cp: CodePoint) -> GeneralCategory {
    find_in(GENERAL_CATEGORY_TABLE, cp).unwrap_or(Gc::Cn)
}

pub fn script(cp: CodePoint) -> Script {
    find_in(SCRIPT_TABLE, cp).unwrap_or(Script::Unknown)
}

pub fn has_flag(cp: CodePoint, flag: CharFlags) -> bool {
    in_table(flag_table(flag), cp)
}

/// The property lookup: category, script and binary properties of `cp`.
pub fn properties_of(cp: CodePoint) -> CodePointProperties {
    let mut flags = CharFlags::empty();
    for flag in CharFlags::all().iter() {
        if has_flag(cp, flag) {
            flags |= flag;
        }
    }
    CodePointProperties { category: general_category(cp), script: script(cp), flags }
}

// === Named Properties ===

/// POSIX bracket classes, also usable as `\p{Name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosixClass {
    Alpha,
    Digit,
    Alnum,
    Upper,
    Lower,
    Space,
    Blank,
    Punct,
    Cntrl,
    Graph,
    Print,
    XDigit,
    Word,
    Ascii,
}

const POSIX_CLASS_COUNT: usize = 14;

impl PosixClass {
    pub fn from_name(name: &str) -> Option<PosixClass> {
        Some(match name {
            "alpha" => PosixClass::Alpha,
            "digit" => PosixClass::Digit,
            "alnum" => PosixClass::Alnum,
            "upper" => PosixClass::Upper,
            "lower" => PosixClass::Lower,
            "space" => PosixClass::Space,
            "blank" => PosixClass::Blank,
            "punct" => PosixClass::Punct,
            "cntrl" => PosixClass::Cntrl,
            "graph" => PosixClass::Graph,
            "print" => PosixClass::Print,
            "xdigit" => PosixClass::XDigit,
            "word" => PosixClass::Word,
            "ascii" => PosixClass::Ascii,
            _ => return None,
        })
    }
}

/// A resolved `\p{...}` name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Any,
    Assigned,
    Category(GeneralCategory),
    Major(MajorCategory),
    CasedLetter,
    Script(Script),
    Binary(CharFlags),
    Posix(PosixClass),
}

fn normalize_name(name: &str) -> Option<String> {
    let mut key = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            ' ' | '-' | '_' => {}
            c if c.is_ascii() => key.push(c.to_ascii_lowercase()),
            _ => return None,
        }
    }
    Some(key)
}

fn lookup_normalized(key: &str) -> Option<Property> {
    let prop = match key {
        "any" => Property::Any,
        "assigned" => Property::Assigned,
        "l" | "letter" => Property::Major(MajorCategory::Letter),
        "m" | "mark" | "combiningmark" => Property::Major(MajorCategory::Mark),
        "n" | "number" => Property::Major(MajorCategory::Number),
        "p" | "punctuation" => Property::Major(MajorCategory::Punctuation),
        "s" | "symbol" => Property::Major(MajorCategory::Symbol),
        "z" | "separator" => Property::Major(MajorCategory::Separator),
        "c" | "other" => Property::Major(MajorCategory::Other),
        "lc" | "l&" | "casedletter" => Property::CasedLetter,
        "alphabetic" => Property::Binary(CharFlags::ALPHABETIC),
        "lowercase" => Property::Binary(CharFlags::LOWERCASE),
        "uppercase" => Property::Binary(CharFlags::UPPERCASE),
        "whitespace" | "wspace" => Property::Binary(CharFlags::WHITE_SPACE),
        "math" => Property::Binary(CharFlags::MATH),
        "hexdigit" | "hex" => Property::Binary(CharFlags::HEX_DIGIT),
        "ideographic" | "ideo" => Property::Binary(CharFlags::IDEOGRAPHIC),
        _ => {
            if let Some(class) = PosixClass::from_name(key) {
                return Some(Property::Posix(class));
            }
            let category = CATEGORY_NAMES.iter().find(|(_, short, long)| {
                short.eq_ignore_ascii_case(key)
                    || normalize_name(long).is_some_and(|l| l == key)
            });
            if let Some(&(gc, _, _)) = category {
                return Some(Property::Category(gc));
            }
            let script = SCRIPT_NAMES.iter().find(|(long, short, _)| {
                short.eq_ignore_ascii_case(key)
                    || normalize_name(long).is_some_and(|l| l == key)
            });
            return script.map(|&(_, _, sc)| Property::Script(sc));
        }
    };
    Some(prop)
}

/// Resolves a property name the way `\p{...}` does: case, spaces, hyphens and
/// underscores are ignored; an `Is` prefix is accepted.
pub fn lookup_property(name: &str) -> Option<Property> {
    let key = normalize_name(name)?;
    if key.is_empty() {
        return None;
    }
    lookup_normalized(&key).or_else(|| key.strip_prefix("is").and_then(lookup_normalized))
}

// === Code Ranges for Properties ===

fn category_ranges(pred: impl Fn(GeneralCategory) -> bool) -> CodeRanges {
    let assigned = GENERAL_CATEGORY_TABLE.iter().filter(|&&(_, _, gc)| pred(gc));
    let mut ranges = CodeRanges::from_ranges(assigned.map(|&(lo, hi, _)| (lo, hi)));
    if pred(Gc::Cn) {
        ranges.union_with(&assigned_ranges().complement());
    }
    ranges
}

fn assigned_ranges() -> CodeRanges {
    CodeRanges::from_ranges(GENERAL_CATEGORY_TABLE.iter().map(|&(lo, hi, _)| (lo, hi)))
}

fn table_ranges(table: &[(u32, u32)]) -> CodeRanges {
    CodeRanges::from_ranges(table.iter().copied())
}

fn posix_ranges_unicode(class: PosixClass) -> CodeRanges {
    match class {
        PosixClass::Alpha => table_ranges(ALPHABETIC_TABLE),
        PosixClass::Digit => category_ranges(|gc| gc == Gc::Nd),
        PosixClass::Alnum => {
            let mut r = table_ranges(ALPHABETIC_TABLE);
            r.union_with(&category_ranges(|gc| gc == Gc::Nd));
            r
        }
        PosixClass::Upper => table_ranges(UPPERCASE_TABLE),
        PosixClass::Lower => table_ranges(LOWERCASE_TABLE),
        PosixClass::Space => table_ranges(WHITE_SPACE_TABLE),
        PosixClass::Blank => {
            let mut r = category_ranges(|gc| gc == Gc::Zs);
            r.add(0x09);
            r
        }
        PosixClass::Punct => {
            let mut r = category_ranges(|gc| gc.major() == MajorCategory::Punctuation);
            for &c in b"$+<=>^`|~" {
                r.add(c as CodePoint);
            }
            r
        }
        PosixClass::Cntrl => category_ranges(|gc| gc == Gc::Cc),
        PosixClass::Graph => {
            let mut blank = table_ranges(WHITE_SPACE_TABLE);
            blank.union_with(&category_ranges(|gc| matches!(gc, Gc::Cc | Gc::Cs | Gc::Cn)));
            blank.complement()
        }
        PosixClass::Print => {
            let mut r = posix_ranges(PosixClass::Graph, false).clone();
            r.union_with(&category_ranges(|gc| gc == Gc::Zs));
            r
        }
        PosixClass::XDigit => {
            CodeRanges::from_ranges([(0x30, 0x39), (0x41, 0x46), (0x61, 0x66)])
        }
        PosixClass::Word => {
            let mut r = table_ranges(ALPHABETIC_TABLE);
            r.union_with(&category_ranges(|gc| {
                gc.major() == MajorCategory::Mark || gc == Gc::Nd || gc == Gc::Pc
            }));
            r
        }
        PosixClass::Ascii => CodeRanges::from_ranges([(0x00, 0x7F)]),
    }
}

fn posix_ranges_ascii(class: PosixClass) -> CodeRanges {
    let set: &[(u32, u32)] = match class {
        PosixClass::Alpha => &[(0x41, 0x5A), (0x61, 0x7A)],
        PosixClass::Digit => &[(0x30, 0x39)],
        PosixClass::Alnum => &[(0x30, 0x39), (0x41, 0x5A), (0x61, 0x7A)],
        PosixClass::Upper => &[(0x41, 0x5A)],
        PosixClass::Lower => &[(0x61, 0x7A)],
        PosixClass::Space => &[(0x09, 0x0D), (0x20, 0x20)],
        PosixClass::Blank => &[(0x09, 0x09), (0x20, 0x20)],
        PosixClass::Punct => &[(0x21, 0x2F), (0x3A, 0x40), (0x5B, 0x60), (0x7B, 0x7E)],
        PosixClass::Cntrl => &[(0x00, 0x1F), (0x7F, 0x7F)],
        PosixClass::Graph => &[(0x21, 0x7E)],
        PosixClass::Print => &[(0x20, 0x7E)],
        PosixClass::XDigit => &[(0x30, 0x39), (0x41, 0x46), (0x61, 0x66)],
        PosixClass::Word => &[(0x30, 0x39), (0x41, 0x5A), (0x5F, 0x5F), (0x61, 0x7A)],
        PosixClass::Ascii => &[(0x00, 0x7F)],
    };
    CodeRanges::from_ranges(set.iter().copied())
}

/// Code ranges of a POSIX class, cached per class and mode.
pub fn posix_ranges(class: PosixClass, ascii_only: bool) -> &'static CodeRanges {
    static UNICODE: [OnceLock<CodeRanges>; POSIX_CLASS_COUNT] =
        [const { OnceLock::new() }; POSIX_CLASS_COUNT];
    static ASCII: [OnceLock<CodeRanges>; POSIX_CLASS_COUNT] =
        [const { OnceLock::new() }; POSIX_CLASS_COUNT];
    let idx = class as usize;
    if ascii_only {
        ASCII[idx].get_or_init(|| posix_ranges_ascii(class))
    } else {
        UNICODE[idx].get_or_init(|| posix_ranges_unicode(class))
    }
}

/// The set of code points having `prop`.
pub fn property_ranges(prop: Property) -> CodeRanges {
    match prop {
        Property::Any => CodeRanges::from_ranges([(0, MAX_CODE_POINT)]),
        Property::Assigned => assigned_ranges(),
        Property::Category(gc) => category_ranges(|c| c == gc),
        Property::Major(major) => category_ranges(|c| c.major() == major),
        Property::CasedLetter => category_ranges(GeneralCategory::is_cased_letter),
        Property::Script(sc) => CodeRanges::from_ranges(
            SCRIPT_TABLE.iter().filter(|&&(_, _, s)| s == sc).map(|&(lo, hi, _)| (lo, hi)),
        ),
        Property::Binary(flag) => table_ranges(flag_table(flag)),
        Property::Posix(class) => posix_ranges(class, false).clone(),
    }
}

/// Word character test used by `\b`, `\<`, `\>`.
#[inline]
pub fn is_word_char(cp: CodePoint, ascii_only: bool) -> bool {
    if cp < 0x80 {
        let b = cp as u8;
        return b.is_ascii_alphanumeric() || b == b'_';
    }
    !ascii_only && posix_ranges(PosixClass::Word, false).contains(cp)
}

// === Case Folding ===

/// Simple (one to one) case fold.
#[inline]
pub fn fold_simple(cp: CodePoint) -> CodePoint {
    if cp < 0x80 {
        return (cp as u8).to_ascii_lowercase() as CodePoint;
    }
    match SIMPLE_FOLD_TABLE.binary_search_by_key(&cp, |&(from, _)| from) {
        Ok(i) => SIMPLE_FOLD_TABLE[i].1,
        Err(_) => cp,
    }
}

#[inline]
pub fn fold_ascii(cp: CodePoint) -> CodePoint {
    if cp < 0x80 {
        (cp as u8).to_ascii_lowercase() as CodePoint
    } else {
        cp
    }
}

/// Full case fold, appended to `out` (one to three code points).
pub fn fold_full(cp: CodePoint, out: &mut SmallVec<[CodePoint; 8]>) {
    if cp >= 0x80 {
        if let Ok(i) = FULL_FOLD_TABLE.binary_search_by_key(&cp, |&(from, _)| from) {
            out.extend_from_slice(FULL_FOLD_TABLE[i].1);
            return;
        }
    }
    out.push(fold_simple(cp));
}

fn fold_orbits() -> &'static HashMap<CodePoint, SmallVec<[CodePoint; 4]>> {
    static ORBITS: OnceLock<HashMap<CodePoint, SmallVec<[CodePoint; 4]>>> = OnceLock::new();
    ORBITS.get_or_init(|| {
        let mut map: HashMap<CodePoint, SmallVec<[CodePoint; 4]>> = HashMap::new();
        for &(from, to) in SIMPLE_FOLD_TABLE {
            map.entry(to).or_insert_with(|| SmallVec::from_slice(&[to])).push(from);
        }
        map
    })
}

/// Every code point that simple-folds together with `cp`, `cp` included.
pub fn case_equivalents(cp: CodePoint) -> SmallVec<[CodePoint; 4]> {
    let folded = fold_simple(cp);
    match fold_orbits().get(&folded) {
        Some(orbit) => orbit.clone(),
        None => SmallVec::from_slice(&[cp]),
    }
}

/// Adds the case closure of `ranges` (simple folding) to it.
pub fn add_case_closure(ranges: &mut CodeRanges, ascii_only: bool) {
    let mut extra = Vec::new();
    if ascii_only {
        for (lo, hi, delta) in [(0x41u32, 0x5Au32, 0x20u32), (0x61, 0x7A, 0)] {
            for c in lo..=hi {
                let lower = c + delta;
                let upper = lower - 0x20;
                if ranges.contains(lower) || ranges.contains(upper) {
                    extra.push((lower, lower));
                    extra.push((upper, upper));
                }
            }
        }
    } else {
        for orbit in fold_orbits().values() {
            if orbit.iter().any(|&c| ranges.contains(c)) {
                extra.extend(orbit.iter().map(|&c| (c, c)));
            }
        }
    }
    ranges.union_with(&CodeRanges::from_ranges(extra));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(general_category('A' as u32), Gc::Lu);
        assert_eq!(general_category('a' as u32), Gc::Ll);
        assert_eq!(general_category('5' as u32), Gc::Nd);
        assert_eq!(general_category(0x3042), Gc::Lo);
        assert_eq!(general_category(0x0378), Gc::Cn);
        assert_eq!(Gc::Zs.major(), MajorCategory::Separator);
        assert_eq!(Gc::Pd.long_name(), "Dash_Punctuation");
    }

    #[test]
    fn scripts() {
        assert_eq!(script('a' as u32), Script::Latin);
        assert_eq!(script(0x3042), Script::Hiragana);
        assert_eq!(script(0x30A2), Script::Katakana);
        assert_eq!(script(0x0391), Script::Greek);
        assert_eq!(script('1' as u32), Script::Common);
    }

    #[test]
    fn properties_of_combines_tables() {
        let p = properties_of(0x00C9);
        assert_eq!(p.category, Gc::Lu);
        assert_eq!(p.script, Script::Latin);
        assert!(p.flags.contains(CharFlags::ALPHABETIC | CharFlags::UPPERCASE));
        assert!(!p.flags.contains(CharFlags::LOWERCASE));
        assert!(properties_of(0x3000).flags.contains(CharFlags::WHITE_SPACE));
    }

    #[test]
    fn property_names() {
        assert_eq!(lookup_property("Lu"), Some(Property::Category(Gc::Lu)));
        assert_eq!(lookup_property("Uppercase Letter"), Some(Property::Category(Gc::Lu)));
        assert_eq!(lookup_property("L"), Some(Property::Major(MajorCategory::Letter)));
        assert_eq!(lookup_property("Hiragana"), Some(Property::Script(Script::Hiragana)));
        assert_eq!(lookup_property("hira"), Some(Property::Script(Script::Hiragana)));
        assert_eq!(lookup_property("Old_Italic"), Some(Property::Script(Script::OldItalic)));
        assert_eq!(lookup_property("IsGreek"), Some(Property::Script(Script::Greek)));
        assert_eq!(lookup_property("Alpha"), Some(Property::Posix(PosixClass::Alpha)));
        assert_eq!(
            lookup_property("White_Space"),
            Some(Property::Binary(CharFlags::WHITE_SPACE))
        );
        assert_eq!(lookup_property("NoSuchThing"), None);
        assert_eq!(lookup_property(""), None);
    }

    #[test]
    fn posix_classes() {
        let word = posix_ranges(PosixClass::Word, false);
        assert!(word.contains('_' as u32));
        assert!(word.contains(0x00E9));
        assert!(word.contains(0x0661)); // ARABIC-INDIC DIGIT ONE
        assert!(!word.contains('-' as u32));
        let ascii_word = posix_ranges(PosixClass::Word, true);
        assert!(!ascii_word.contains(0x00E9));
        let punct = posix_ranges(PosixClass::Punct, false);
        assert!(punct.contains('$' as u32));
        assert!(punct.contains('!' as u32));
        assert!(!posix_ranges(PosixClass::Graph, false).contains(' ' as u32));
        assert!(posix_ranges(PosixClass::Print, false).contains(' ' as u32));
    }

    #[test]
    fn folding() {
        assert_eq!(fold_simple('A' as u32), 'a' as u32);
        assert_eq!(fold_simple(0x0130), 0x0130);
        assert_eq!(fold_simple(0x03A3), 0x03C3);
        let mut out = SmallVec::new();
        fold_full(0x00DF, &mut out);
        assert_eq!(out.as_slice(), &[0x73, 0x73]);
        let eq = case_equivalents('k' as u32);
        assert!(eq.contains(&('K' as u32)));
        assert!(eq.contains(&0x212A)); // KELVIN SIGN
    }

    #[test]
    fn closure_adds_other_cases() {
        let mut r = CodeRanges::from_ranges([(0x61, 0x63)]);
        add_case_closure(&mut r, false);
        assert!(r.contains('B' as u32));
        let mut sigma = CodeRanges::from_ranges([(0x03C3, 0x03C3)]);
        add_case_closure(&mut sigma, false);
        assert!(sigma.contains(0x03A3));
        assert!(sigma.contains(0x03C2));
        let mut k = CodeRanges::from_ranges([(0x6B, 0x6B)]);
        add_case_closure(&mut k, true);
        assert!(k.contains('K' as u32));
        assert!(!k.contains(0x212A));
    }
}
