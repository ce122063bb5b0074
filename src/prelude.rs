//! Prelude module for convenient imports.
//!
//! ```rust
//! use identified_enum_cases::prelude::*;
//! ```
//!
//! Brings in both macro forms and the strum traits implemented by every
//! generated identifier enum. `VariantArray` and `VariantNames` both declare
//! a `VARIANTS` constant, so only `VariantArray` is included here; use
//! `<Id as VariantNames>::VARIANTS` for the names.

pub use crate::{EnumCount, IdentifiedEnumCases, ParseError, VariantArray, identified_enum_cases};
