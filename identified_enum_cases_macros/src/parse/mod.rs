//! Input side of the generator.
//!
//! Both host entry points (the attribute on a `syn::Item` and the derive on a
//! `syn::DeriveInput`) are reduced to a [`Declaration`], a closed view of the
//! annotated item that the validation flow matches on exhaustively.

use syn::{
    Data, DeriveInput, Generics, Ident, Item, Variant, punctuated::Punctuated,
    token::Comma,
};

pub mod visibility;

pub use visibility::Visibility;

/// The annotated declaration, classified by kind.
#[derive(Debug)]
pub enum Declaration<'ast> {
    Enum(EnumDeclaration<'ast>),
    Struct,
    Union,
    /// Any other item the attribute was placed on (`fn`, `impl`, `mod`, ...).
    Other,
}

/// Borrowed parts of an `enum` needed to generate its identifier type.
#[derive(Debug)]
pub struct EnumDeclaration<'ast> {
    pub vis: &'ast syn::Visibility,
    pub ident: &'ast Ident,
    pub generics: &'ast Generics,
    pub variants: &'ast Punctuated<Variant, Comma>,
}

impl<'ast> Declaration<'ast> {
    pub fn from_item(item: &'ast Item) -> Self {
        match item {
            Item::Enum(item) => Declaration::Enum(EnumDeclaration {
                vis: &item.vis,
                ident: &item.ident,
                generics: &item.generics,
                variants: &item.variants,
            }),
            Item::Struct(_) => Declaration::Struct,
            Item::Union(_) => Declaration::Union,
            _ => Declaration::Other,
        }
    }

    pub fn from_derive_input(input: &'ast DeriveInput) -> Self {
        match &input.data {
            Data::Enum(data) => Declaration::Enum(EnumDeclaration {
                vis: &input.vis,
                ident: &input.ident,
                generics: &input.generics,
                variants: &data.variants,
            }),
            Data::Struct(_) => Declaration::Struct,
            Data::Union(_) => Declaration::Union,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Declaration::Enum(_) => "enum",
            Declaration::Struct => "struct",
            Declaration::Union => "union",
            Declaration::Other => "item",
        }
    }
}
