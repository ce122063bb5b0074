//! Output side of the generator.
//!
//! Declarations are assembled as `syn` trees and rendered through
//! [`ToTokens`], so the two generated declarations always come out of the same
//! case list and render identically for identical input.

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident};
use syn::{Ident, ItemEnum, ItemImpl, Path, ext::IdentExt, parse_quote};

use crate::{item_info::case::Case, parse::EnumDeclaration};

pub mod accessor;
pub mod id_type;

/// Path through which generated code reaches its runtime dependencies.
pub fn private_path() -> Path {
    parse_quote!(::identified_enum_cases::__private)
}

/// `Color` -> `ColorId`
pub fn id_type_ident(enum_ident: &Ident) -> Ident {
    format_ident!("{}Id", enum_ident.unraw())
}

/// The identifier enum plus the impls that make it string-backed and enumerable.
#[derive(Debug, Clone)]
pub struct IdTypeDeclaration {
    pub item: ItemEnum,
    pub impls: Vec<ItemImpl>,
}

impl ToTokens for IdTypeDeclaration {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.item.to_tokens(tokens);
        self.impls.iter().for_each(|i| i.to_tokens(tokens));
    }
}

/// Inherent impl on the annotated enum holding `fn id(&self)`.
#[derive(Debug, Clone)]
pub struct AccessorDeclaration {
    pub item: ItemImpl,
}

impl ToTokens for AccessorDeclaration {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.item.to_tokens(tokens);
    }
}

/// Both declarations of one successful expansion.
#[derive(Debug, Clone)]
pub struct Generated {
    pub id_type: IdTypeDeclaration,
    pub accessor: AccessorDeclaration,
}

impl ToTokens for Generated {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.id_type.to_tokens(tokens);
        self.accessor.to_tokens(tokens);
    }
}

pub struct Synthesizer<'a, 'ast> {
    declaration: &'a EnumDeclaration<'ast>,
    cases: &'a [Case<'ast>],
    vis: syn::Visibility,
    id_ident: Ident,
}

impl<'a, 'ast> Synthesizer<'a, 'ast> {
    /// `cases` must not be empty.
    pub fn new(
        declaration: &'a EnumDeclaration<'ast>,
        cases: &'a [Case<'ast>],
        vis: syn::Visibility,
    ) -> Self {
        debug_assert!(!cases.is_empty(), "synthesizing an identifier type without cases");
        Self {
            declaration,
            cases,
            vis,
            id_ident: id_type_ident(declaration.ident),
        }
    }

    pub fn synthesize(&self) -> Generated {
        Generated {
            id_type: self.generate_id_type(),
            accessor: self.generate_accessor(),
        }
    }
}
