use syn::{Attribute, Fields, Ident, Variant, ext::IdentExt};

/// Attributes carried from a source variant onto the generated code.
const FORWARDED_ATTRIBUTES: [&str; 2] = ["cfg", "doc"];

/// Payload layout of a variant, used to build a pattern that ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseShape {
    Unit,
    Tuple,
    Struct,
}

impl From<&Fields> for CaseShape {
    fn from(fields: &Fields) -> Self {
        match fields {
            Fields::Unit => CaseShape::Unit,
            Fields::Unnamed(_) => CaseShape::Tuple,
            Fields::Named(_) => CaseShape::Struct,
        }
    }
}

/// One variant of the annotated enum.
#[derive(Debug, Clone)]
pub struct Case<'ast> {
    pub ident: &'ast Ident,
    pub shape: CaseShape,
    pub forwarded_attrs: Vec<&'ast Attribute>,
}

impl<'ast> Case<'ast> {
    pub fn from_variant(variant: &'ast Variant) -> Self {
        Self {
            ident: &variant.ident,
            shape: CaseShape::from(&variant.fields),
            forwarded_attrs: variant
                .attrs
                .iter()
                .filter(|attr| {
                    FORWARDED_ATTRIBUTES
                        .iter()
                        .any(|name| attr.path().is_ident(name))
                })
                .collect(),
        }
    }

    /// The string value of the identifier: the variant name without any `r#` prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Only the `#[cfg]` attributes, which must gate match arms as well as variants.
    pub fn cfg_attrs(&self) -> impl Iterator<Item = &&'ast Attribute> {
        self.forwarded_attrs
            .iter()
            .filter(|attr| attr.path().is_ident("cfg"))
    }
}
