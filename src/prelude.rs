// prelude.rs - Convenient re-exports for the idiomatic API.
//
//! # Prelude
//!
//! ```
//! use ferrex::prelude::*;
//!
//! let re = Regex::new(r"\d+").unwrap();
//! let m = re.find("answer: 42").unwrap().unwrap();
//! assert_eq!(m.as_str(), Some("42"));
//! ```

pub use crate::api::{Captures, CapturesIter, FindIter, Match, Regex, RegexBuilder};
pub use crate::error::{ErrorKind, RegexError};
pub use crate::regdefs::Options;
pub use crate::regenc::Encoding;
pub use crate::region::{Region, Span};
pub use crate::regsyntax::SyntaxDialect;
