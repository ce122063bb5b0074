use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_quote;

use super::{AccessorDeclaration, Synthesizer};
use crate::item_info::case::{Case, CaseShape};

/// Pattern matching `case` on the annotated enum while ignoring its payload.
fn case_pattern(case: &Case<'_>) -> TokenStream {
    let ident = case.ident;
    match case.shape {
        CaseShape::Unit => quote! { Self::#ident },
        CaseShape::Tuple => quote! { Self::#ident(..) },
        CaseShape::Struct => quote! { Self::#ident { .. } },
    }
}

impl<'a, 'ast> Synthesizer<'a, 'ast> {
    /// Generate `fn id(&self)` as an exhaustive match with one arm per case and no fallback.
    ///
    /// The match is on `*self`: the patterns bind nothing, and a dereferenced scrutinee stays
    /// exhaustive when `#[cfg]` removes every variant.
    pub fn generate_accessor(&self) -> AccessorDeclaration {
        let vis = &self.vis;
        let id_ident = &self.id_ident;
        let enum_ident = self.declaration.ident;
        let (impl_generics, ty_generics, where_clause) =
            self.declaration.generics.split_for_impl();

        let arms = self.cases.iter().map(|case| {
            let cfg = case.cfg_attrs();
            let pattern = case_pattern(case);
            let ident = case.ident;
            quote! { #(#cfg)* #pattern => #id_ident::#ident }
        });

        AccessorDeclaration {
            item: parse_quote! {
                impl #impl_generics #enum_ident #ty_generics #where_clause {
                    /// The identifier of this variant.
                    #[must_use]
                    #vis fn id(&self) -> #id_ident {
                        match *self {
                            #(#arms,)*
                        }
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse::Declaration, visitors::case_visitor::extract};
    use quote::ToTokens;
    use syn::{ImplItem, Item};

    fn accessor_code(item: Item) -> String {
        let Declaration::Enum(decl) = Declaration::from_item(&item) else {
            panic!("test input must be an enum");
        };
        let cases = extract(&decl);
        Synthesizer::new(&decl, &cases, syn::Visibility::Inherited)
            .generate_accessor()
            .to_token_stream()
            .to_string()
    }

    #[test]
    fn test_arms_follow_declaration_order() {
        let code = accessor_code(parse_quote!(enum Color { Red, Green, Blue }));
        let red = code.find("Self :: Red => ColorId :: Red").unwrap();
        let green = code.find("Self :: Green => ColorId :: Green").unwrap();
        let blue = code.find("Self :: Blue => ColorId :: Blue").unwrap();
        assert!(red < green && green < blue);
        assert!(!code.contains("_ =>"));
    }

    #[test]
    fn test_payloads_are_ignored() {
        let code = accessor_code(parse_quote! {
            enum Message {
                Quit,
                Write(String),
                Move { x: i32, y: i32 },
            }
        });
        assert!(code.contains("Self :: Quit => MessageId :: Quit"));
        assert!(code.contains("Self :: Write (..) => MessageId :: Write"));
        assert!(code.contains("Self :: Move { .. } => MessageId :: Move"));
    }

    #[test]
    fn test_generic_enum_impl_header() {
        let code = accessor_code(parse_quote! {
            enum Either<L, R: Clone> where L: Copy {
                Left(L),
                Right(R),
            }
        });
        assert!(code.starts_with("impl < L , R : Clone > Either < L , R > where L : Copy"));
        assert!(code.contains("fn id (& self) -> EitherId"));
    }

    #[test]
    fn test_cfg_gates_arm() {
        let code = accessor_code(parse_quote! {
            enum Transport {
                Tcp,
                #[cfg(unix)]
                Unix(std::path::PathBuf),
            }
        });
        assert!(code.contains("# [cfg (unix)] Self :: Unix (..) => TransportId :: Unix"));
    }

    #[test]
    fn test_accessor_is_single_fn() {
        let item: Item = parse_quote!(enum Color { Red });
        let Declaration::Enum(decl) = Declaration::from_item(&item) else {
            unreachable!()
        };
        let cases = extract(&decl);
        let accessor =
            Synthesizer::new(&decl, &cases, parse_quote!(pub)).generate_accessor();
        let [ImplItem::Fn(id)] = accessor.item.items.as_slice() else {
            panic!("expected exactly one fn");
        };
        assert_eq!(id.sig.ident, "id");
        assert!(matches!(id.vis, syn::Visibility::Public(_)));
    }

    #[test]
    fn test_match_on_dereferenced_self() {
        let code = accessor_code(parse_quote! {
            enum OnlyDisabled {
                #[cfg(any())]
                Gone(String),
            }
        });
        assert!(code.contains("match * self { # [cfg (any ())] Self :: Gone (..) => OnlyDisabledId :: Gone , }"));
    }
}
