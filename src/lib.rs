//! # ferrex
//!
//! Pure-Rust backtracking regex engine with Oniguruma-style syntax dialects,
//! full Unicode properties and case folding, and pluggable subject encodings.
//! Literal prefixes are located with [`memchr`](https://crates.io/crates/memchr).
//!
//! A pattern compiles once into an immutable program that can be shared
//! across threads and run against subjects in any supported encoding.
//! "No match" is `Ok(None)`; failures of the attempt itself (malformed
//! subject bytes, exhausted budgets, bad offsets) are `Err`.
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrex::prelude::*;
//!
//! let re = Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap();
//! let m = re.find("Date: 2026-02-12").unwrap().unwrap();
//! assert_eq!(m.as_str(), Some("2026-02-12"));
//! assert_eq!(m.start(), 6);
//! ```
//!
//! For fine-grained control, use [`RegexBuilder`](api::RegexBuilder):
//!
//! ```rust
//! use ferrex::prelude::*;
//!
//! let re = Regex::builder(r"hello")
//!     .case_insensitive(true)
//!     .dialect(SyntaxDialect::Ruby)
//!     .retry_limit_in_match(100_000)
//!     .build()
//!     .unwrap();
//! assert!(re.is_match("Hello World").unwrap());
//! ```
//!
//! ## Low-Level API
//!
//! The compiler and executor are usable directly:
//!
//! ```rust
//! use ferrex::regcomp::{compile, CompileLimits};
//! use ferrex::regexec::{search, MatchParam};
//! use ferrex::regdefs::Options;
//! use ferrex::regenc::Encoding;
//! use ferrex::regsyntax::SYNTAX_ONIGURUMA;
//!
//! let reg = compile(
//!     br"\d{4}-\d{2}-\d{2}",
//!     Encoding::Utf8,
//!     Options::empty(),
//!     &SYNTAX_ONIGURUMA,
//!     &CompileLimits::default(),
//! ).unwrap();
//!
//! let input = b"Date: 2026-02-12";
//! let region = search(
//!     &reg, input, Encoding::Utf8, 0, input.len(),
//!     Options::empty(), &MatchParam::default(),
//! ).unwrap().unwrap();
//! assert_eq!(region.start(), 6);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`regparse`] | Pattern parser |
//! | [`regcomp`] | AST analysis and lowering to the VM program |
//! | [`regexec`] | Backtracking VM, search and match-time limits |
//! | [`regint`] | Opcodes and the compiled program |
//! | [`region`] | Match spans and capture history |
//! | [`regenc`] | Subject/pattern encodings |
//! | [`unicode`] | Property tables and case folding |
//! | [`regsyntax`] | Syntax dialect definitions |
//! | [`regset`] | Multi-regex search (RegSet) |
//! | [`scanner`] | Highlighter-oriented multi-pattern scanner |
//! | [`regerror`] | Syntax error catalogue |
//! | [`regtrav`] | Capture tree traversal |

pub mod api;
pub mod encodings;
pub mod error;
pub mod prelude;
pub mod regcomp;
pub mod regdefs;
pub mod regenc;
pub mod regerror;
pub mod regexec;
pub mod regint;
pub mod region;
pub mod regparse;
pub mod regparse_types;
pub mod regset;
pub mod regsyntax;
pub mod regtrav;
pub mod regversion;
pub mod scanner;
pub mod unicode;

pub use regversion::{copyright, version};
