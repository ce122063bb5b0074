//! # Identified Enum Cases
//!
//! Gives every enum a companion identifier enum: one fieldless, string-backed
//! variant per variant of the original, plus an `id()` accessor mapping each
//! value to its identifier.
//!
//! ## Features
//!
//! - **Payload-free identifiers**: `Message::Write(String)` maps to `MessageId::Write`
//! - **String-backed**: identifiers print, parse and `as_str()` as their variant name
//! - **Enumerable**: `ALL`, `iter()`, and the strum `EnumCount`, `VariantArray`
//!   and `VariantNames` traits
//! - **Never out of sync**: the accessor is an exhaustive match generated from
//!   the same variant list as the identifier enum
//!
//! ## Quick Start
//!
//! ```
//! use identified_enum_cases::prelude::*;
//!
//! #[identified_enum_cases]
//! pub enum Message {
//!     Quit,
//!     Move { x: i32, y: i32 },
//!     Write(String),
//! }
//!
//! let message = Message::Move { x: 1, y: 2 };
//! assert_eq!(message.id(), MessageId::Move);
//! assert_eq!(message.id().to_string(), "Move");
//! assert_eq!("Quit".parse::<MessageId>(), Ok(MessageId::Quit));
//! assert_eq!(MessageId::COUNT, 3);
//! assert_eq!(
//!     MessageId::iter().map(|id| id.as_str()).collect::<Vec<_>>(),
//!     ["Quit", "Move", "Write"]
//! );
//! ```
//!
//! ## Visibility
//!
//! `#[identified_enum_cases(public)]`, `(private)` and `(internal)` emit
//! `pub`, no qualifier and `pub(crate)` on everything generated. Without an
//! argument the generated items take the visibility of the annotated enum.
//!
//! The same generator is available as `#[derive(IdentifiedEnumCases)]`, with
//! the visibility given by an `#[identified(..)]` helper attribute.

extern crate self as identified_enum_cases;

pub mod prelude;

pub use identified_enum_cases_macros::{IdentifiedEnumCases, identified_enum_cases};
pub use strum::{EnumCount, ParseError, VariantArray, VariantNames};

#[doc(hidden)]
pub mod __private {
    //! Dependencies referenced by generated code. Do not use directly.

    pub use strum;
}
