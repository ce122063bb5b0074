//! One expansion of the generator: check the kind, extract the cases,
//! synthesize. Every call ends in exactly one outcome, either both generated
//! declarations or a single diagnostic.

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;

use crate::{
    errors::{Diagnostic, DiagnosticKind},
    generators::{Generated, Synthesizer},
    parse::{Declaration, Visibility},
    visitors::case_visitor::extract,
};

/// Runs the generator on `declaration`. `site` is where diagnostics are attached.
pub fn expand(
    declaration: &Declaration<'_>,
    visibility: Visibility,
    site: Span,
) -> Result<Generated, Diagnostic> {
    let Declaration::Enum(decl) = declaration else {
        let kind = DiagnosticKind::MustBeEnum;
        log::debug!("{}: rejecting {}", kind.id(), declaration.kind_name());
        return Err(Diagnostic::new(kind, site));
    };

    let cases = extract(decl);
    if cases.is_empty() {
        let kind = DiagnosticKind::MustHaveCases;
        log::debug!("{}: rejecting enum {}", kind.id(), decl.ident);
        return Err(Diagnostic::new(kind, site));
    }

    log::trace!(
        "generating identifier type for {} with {} cases, visibility {visibility:?}",
        decl.ident,
        cases.len()
    );
    let vis = visibility.resolve(decl.vis);
    Ok(Synthesizer::new(decl, &cases, vis).synthesize())
}

/// Renders an expansion the way the host expects it: generated items, or a `compile_error!`.
pub fn render(expansion: Result<Generated, Diagnostic>) -> TokenStream {
    match expansion {
        Ok(generated) => generated.into_token_stream(),
        Err(diagnostic) => syn::Error::from(diagnostic).to_compile_error(),
    }
}
