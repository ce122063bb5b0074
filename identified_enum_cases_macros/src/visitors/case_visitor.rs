use syn::{Variant, visit::Visit};

use crate::{item_info::case::Case, parse::EnumDeclaration};

/// Collects the variants of an enum in source order.
#[derive(Default)]
pub struct CaseVisitor<'ast> {
    pub cases: Vec<Case<'ast>>,
}

impl<'a> Visit<'a> for CaseVisitor<'a> {
    // Variant payloads are never descended into; only the variant itself introduces a case.
    fn visit_variant(&mut self, i: &'a Variant) {
        self.cases.push(Case::from_variant(i));
    }
}

/// Ordered cases of `declaration`, possibly empty.
pub fn extract<'ast>(declaration: &EnumDeclaration<'ast>) -> Vec<Case<'ast>> {
    let mut visitor = CaseVisitor::default();
    declaration
        .variants
        .iter()
        .for_each(|variant| visitor.visit_variant(variant));
    visitor.cases
}
