use proc_macro2::Span;
use strum::IntoStaticStr;
use thiserror::Error;

/// Domain prefix of every diagnostic id emitted by this crate.
pub const DIAGNOSTIC_DOMAIN: &str = "IdentifiedEnumCases";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum DiagnosticKind {
    #[error("`#[identified_enum_cases]` can only be applied to an `enum`")]
    MustBeEnum,
    #[error("`#[identified_enum_cases]` can only be applied to an `enum` with variants")]
    MustHaveCases,
}

impl DiagnosticKind {
    /// Stable id, e.g. `IdentifiedEnumCases.mustBeEnum`.
    pub fn id(self) -> String {
        let kind: &'static str = self.into();
        format!("{DIAGNOSTIC_DOMAIN}.{kind}")
    }

    pub fn severity(self) -> Severity {
        Severity::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

/// A rejected expansion, attached to the site of the generator attribute.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    /// Human-readable text followed by the stable id, e.g. `... [IdentifiedEnumCases.mustBeEnum]`.
    pub fn message(&self) -> String {
        format!("{} [{}]", self.kind, self.kind.id())
    }
}

impl From<Diagnostic> for syn::Error {
    fn from(diagnostic: Diagnostic) -> Self {
        match diagnostic.severity() {
            Severity::Error => syn::Error::new(diagnostic.span, diagnostic.message()),
        }
    }
}
