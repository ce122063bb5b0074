//! The generator's single configuration value.
//!
//! The argument of `#[identified_enum_cases(..)]` (or of the `#[identified(..)]`
//! helper on the derive) carries at most one visibility token. Tokens are
//! accepted as bare identifiers (`public`) or string literals (`"public"`);
//! the first recognized one wins and anything else leaves the visibility
//! unspecified.

use proc_macro2::{TokenStream, TokenTree};
use quote::ToTokens;
use strum::EnumString;
use syn::{Attribute, Meta, parse_quote};

/// Name of the helper attribute read by `#[derive(IdentifiedEnumCases)]`.
pub const HELPER_ATTRIBUTE: &str = "identified";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    /// `pub`
    Public,
    /// No qualifier, private to the enclosing module.
    Private,
    /// `pub(crate)`
    Internal,
    /// Nothing configured: the generated items share the annotated enum's visibility.
    #[default]
    #[strum(disabled)]
    Inherited,
}

impl Visibility {
    pub fn from_tokens(tokens: TokenStream) -> Self {
        let visibility = tokens
            .into_iter()
            .find_map(|token| Self::from_token(&token))
            .unwrap_or_default();
        log::trace!("configured visibility: {visibility:?}");
        visibility
    }

    fn from_token(token: &TokenTree) -> Option<Self> {
        match token {
            TokenTree::Ident(ident) => ident.to_string().parse().ok(),
            TokenTree::Literal(literal) => match syn::Lit::new(literal.clone()) {
                syn::Lit::Str(text) => text.value().parse().ok(),
                _ => None,
            },
            TokenTree::Group(group) => group
                .stream()
                .into_iter()
                .find_map(|token| Self::from_token(&token)),
            TokenTree::Punct(_) => None,
        }
    }

    /// Reads the `#[identified(..)]` helper attribute, if any.
    pub fn from_attributes(attrs: &[Attribute]) -> Self {
        let Some(attr) = attrs.iter().find(|a| a.path().is_ident(HELPER_ATTRIBUTE)) else {
            return Self::default();
        };
        match &attr.meta {
            Meta::Path(_) => Self::default(),
            Meta::List(list) => Self::from_tokens(list.tokens.clone()),
            Meta::NameValue(name_value) => Self::from_tokens(name_value.value.to_token_stream()),
        }
    }

    /// The Rust qualifier emitted on every generated item.
    pub fn resolve(self, inherited: &syn::Visibility) -> syn::Visibility {
        match self {
            Visibility::Public => parse_quote!(pub),
            Visibility::Private => syn::Visibility::Inherited,
            Visibility::Internal => parse_quote!(pub(crate)),
            Visibility::Inherited => inherited.clone(),
        }
    }
}
