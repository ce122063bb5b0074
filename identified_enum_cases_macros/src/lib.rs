use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Item, parse_macro_input};

use crate::{
    expand::{expand, render},
    parse::{Declaration, Visibility},
};

mod errors;
mod expand;
mod generators;
mod item_info;
mod parse;
mod visitors;


/// Generates an identifier enum for an enum's variants and an `id()` accessor.
///
/// For an enum `Color`, this attribute keeps the enum as written and adds:
/// - `ColorId`: a fieldless enum with one variant per variant of `Color`, in
///   declaration order. It is `Copy`, `Eq`, `Ord` and `Hash`, is backed by the
///   variant names (`as_str`, `Display`, `FromStr`) and is enumerable
///   (`ColorId::ALL`, `ColorId::iter()`, `strum::EnumCount`,
///   `strum::VariantArray`, `strum::VariantNames`).
/// - `Color::id(&self) -> ColorId`: an exhaustive match mapping each variant to
///   its identifier. Variant payloads are ignored.
///
/// `#[cfg]` and doc attributes on variants are carried over to the identifiers.
///
/// # Visibility
///
/// The optional argument sets the visibility of everything generated:
///
/// | Argument | Emitted qualifier |
/// |---|---|
/// | *(none)* | same as the annotated enum |
/// | `public` | `pub` |
/// | `private` | *(none)* |
/// | `internal` | `pub(crate)` |
///
/// The argument may also be a string literal (`"public"`). Unrecognized values
/// are ignored.
///
/// # Examples
///
/// ```rust,ignore
/// use identified_enum_cases::identified_enum_cases;
///
/// #[identified_enum_cases(public)]
/// pub enum Shape {
///     Circle { radius: f64 },
///     Square(f64),
///     Point,
/// }
///
/// let shape = Shape::Square(2.0);
/// assert_eq!(shape.id(), ShapeId::Square);
/// assert_eq!(shape.id().as_str(), "Square");
/// assert_eq!(ShapeId::ALL, &[ShapeId::Circle, ShapeId::Square, ShapeId::Point]);
/// ```
///
/// # Errors
///
/// Applying the attribute to anything but an enum, or to an enum without
/// variants, reports a compile error at the attribute and generates nothing.
#[proc_macro_attribute]
pub fn identified_enum_cases(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as Item);
    let visibility = Visibility::from_tokens(args.into());
    let generated = render(expand(
        &Declaration::from_item(&item),
        visibility,
        Span::call_site(),
    ));

    quote! {
        #item
        #generated
    }
    .into()
}

/// Derive form of [`macro@identified_enum_cases`].
///
/// The visibility is read from the optional `#[identified(..)]` helper attribute.
///
/// ```rust,ignore
/// use identified_enum_cases::IdentifiedEnumCases;
///
/// #[derive(IdentifiedEnumCases)]
/// #[identified(internal)]
/// enum Token {
///     Ident(String),
///     Number(i64),
///     Eof,
/// }
///
/// assert_eq!(Token::Eof.id().to_string(), "Eof");
/// assert_eq!("Number".parse::<TokenId>(), Ok(TokenId::Number));
/// ```
#[proc_macro_derive(IdentifiedEnumCases, attributes(identified))]
pub fn identified_enum_cases_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let visibility = Visibility::from_attributes(&input.attrs);

    render(expand(
        &Declaration::from_derive_input(&input),
        visibility,
        Span::call_site(),
    ))
    .into()
}
