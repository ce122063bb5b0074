use proc_macro2::TokenStream;
use quote::quote;
use syn::{ItemEnum, ItemImpl, parse_quote};

use super::{IdTypeDeclaration, Synthesizer, private_path};

impl<'a, 'ast> Synthesizer<'a, 'ast> {
    /// Generate `enum <Enum>Id` with one unit variant per case, in order.
    pub fn generate_id_type(&self) -> IdTypeDeclaration {
        IdTypeDeclaration {
            item: self.generate_id_enum(),
            impls: vec![
                self.generate_inherent_impl(),
                self.generate_as_ref_impl(),
                self.generate_display_impl(),
                self.generate_from_str_impl(),
                self.generate_enum_count_impl(),
                self.generate_variant_array_impl(),
                self.generate_variant_names_impl(),
            ],
        }
    }

    fn generate_id_enum(&self) -> ItemEnum {
        let vis = &self.vis;
        let id_ident = &self.id_ident;
        let doc = format!(
            " Identifies a variant of [`{}`] without its data.",
            self.declaration.ident
        );
        let variants = self.cases.iter().map(|case| {
            let attrs = &case.forwarded_attrs;
            let ident = case.ident;
            quote! { #(#attrs)* #ident }
        });

        parse_quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            #vis enum #id_ident {
                #(#variants),*
            }
        }
    }

    /// `cfg`-gated `Self::Variant` paths, one per case.
    fn variant_paths(&self) -> Vec<TokenStream> {
        self.cases
            .iter()
            .map(|case| {
                let cfg = case.cfg_attrs();
                let ident = case.ident;
                quote! { #(#cfg)* Self::#ident }
            })
            .collect()
    }

    /// `cfg`-gated case names as string literals.
    fn variant_names(&self) -> Vec<TokenStream> {
        self.cases
            .iter()
            .map(|case| {
                let cfg = case.cfg_attrs();
                let name = case.name();
                quote! { #(#cfg)* #name }
            })
            .collect()
    }

    /// `ALL` is left out when a case already owns that name.
    fn has_case_named(&self, name: &str) -> bool {
        self.cases.iter().any(|case| case.name() == name)
    }

    fn generate_inherent_impl(&self) -> ItemImpl {
        let vis = &self.vis;
        let id_ident = &self.id_ident;
        let private = private_path();
        let as_str_arms = self.cases.iter().map(|case| {
            let cfg = case.cfg_attrs();
            let ident = case.ident;
            let name = case.name();
            quote! { #(#cfg)* Self::#ident => #name }
        });
        let all = (!self.has_case_named("ALL")).then(|| {
            quote! {
                /// Every identifier, in declaration order.
                #vis const ALL: &'static [Self] = <Self as #private::strum::VariantArray>::VARIANTS;
            }
        });

        parse_quote! {
            impl #id_ident {
                #all

                /// The variant name this identifier stands for.
                #vis const fn as_str(&self) -> &'static str {
                    match *self {
                        #(#as_str_arms,)*
                    }
                }

                /// Iterates over every identifier, in declaration order.
                #vis fn iter() -> impl ::core::iter::Iterator<Item = Self> + ::core::clone::Clone {
                    <Self as #private::strum::VariantArray>::VARIANTS.iter().copied()
                }
            }
        }
    }

    fn generate_as_ref_impl(&self) -> ItemImpl {
        let id_ident = &self.id_ident;
        parse_quote! {
            impl ::core::convert::AsRef<str> for #id_ident {
                fn as_ref(&self) -> &str {
                    self.as_str()
                }
            }
        }
    }

    fn generate_display_impl(&self) -> ItemImpl {
        let id_ident = &self.id_ident;
        parse_quote! {
            impl ::core::fmt::Display for #id_ident {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        }
    }

    fn generate_from_str_impl(&self) -> ItemImpl {
        let id_ident = &self.id_ident;
        let private = private_path();
        let arms = self.cases.iter().map(|case| {
            let cfg = case.cfg_attrs();
            let ident = case.ident;
            let name = case.name();
            quote! { #(#cfg)* #name => ::core::result::Result::Ok(Self::#ident) }
        });

        parse_quote! {
            impl ::core::str::FromStr for #id_ident {
                type Err = #private::strum::ParseError;

                fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                    match s {
                        #(#arms,)*
                        _ => ::core::result::Result::Err(#private::strum::ParseError::VariantNotFound),
                    }
                }
            }
        }
    }

    fn generate_enum_count_impl(&self) -> ItemImpl {
        let id_ident = &self.id_ident;
        let private = private_path();
        parse_quote! {
            impl #private::strum::EnumCount for #id_ident {
                const COUNT: usize = <Self as #private::strum::VariantArray>::VARIANTS.len();
            }
        }
    }

    fn generate_variant_array_impl(&self) -> ItemImpl {
        let id_ident = &self.id_ident;
        let private = private_path();
        let paths = self.variant_paths();
        parse_quote! {
            impl #private::strum::VariantArray for #id_ident {
                const VARIANTS: &'static [Self] = &[#(#paths),*];
            }
        }
    }

    fn generate_variant_names_impl(&self) -> ItemImpl {
        let id_ident = &self.id_ident;
        let private = private_path();
        let names = self.variant_names();
        parse_quote! {
            impl #private::strum::VariantNames for #id_ident {
                const VARIANTS: &'static [&'static str] = &[#(#names),*];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse::Declaration, visitors::case_visitor::extract};
    use quote::ToTokens;
    use syn::Item;

    fn with_id_type<R>(item: Item, vis: syn::Visibility, f: impl FnOnce(IdTypeDeclaration) -> R) -> R {
        let Declaration::Enum(decl) = Declaration::from_item(&item) else {
            panic!("test input must be an enum");
        };
        let cases = extract(&decl);
        f(Synthesizer::new(&decl, &cases, vis).generate_id_type())
    }

    #[test]
    fn test_id_enum_variants() {
        let item: Item = parse_quote!(enum Color { Red, Green(u8), Blue { level: u8 } });
        with_id_type(item, syn::Visibility::Inherited, |id_type| {
            assert_eq!(id_type.item.ident, "ColorId");
            let variants: Vec<String> = id_type
                .item
                .variants
                .iter()
                .map(|v| v.ident.to_string())
                .collect();
            assert_eq!(variants, ["Red", "Green", "Blue"]);
            assert!(id_type.item.variants.iter().all(|v| v.fields.is_empty()));
        });
    }

    #[test]
    fn test_string_backing() {
        let item: Item = parse_quote!(enum Color { Red, Green });
        with_id_type(item, syn::Visibility::Inherited, |id_type| {
            let code = id_type.to_token_stream().to_string();
            assert!(code.contains("Self :: Red => \"Red\""));
            assert!(code.contains("\"Green\" => :: core :: result :: Result :: Ok (Self :: Green)"));
            assert!(code.contains("strum :: ParseError :: VariantNotFound"));
            assert!(code.contains(":: core :: fmt :: Display for ColorId"));
        });
    }

    #[test]
    fn test_enumerability() {
        let item: Item = parse_quote!(enum Color { Red, Green, Blue });
        with_id_type(item, syn::Visibility::Inherited, |id_type| {
            let code = id_type.to_token_stream().to_string();
            assert!(code.contains("const VARIANTS : & 'static [Self] = & [Self :: Red , Self :: Green , Self :: Blue]"));
            assert!(code.contains("const ALL : & 'static [Self] = < Self as :: identified_enum_cases :: __private :: strum :: VariantArray > :: VARIANTS"));
            assert!(code.contains("const COUNT : usize = < Self as :: identified_enum_cases :: __private :: strum :: VariantArray > :: VARIANTS . len ()"));
            assert!(code.contains("strum :: EnumCount for ColorId"));
            assert!(code.contains("strum :: VariantArray for ColorId"));
            assert!(code.contains("& [\"Red\" , \"Green\" , \"Blue\"]"));
        });
    }

    #[test]
    fn test_raw_identifiers() {
        let item: Item = parse_quote!(enum r#Keyword { r#match, Plain });
        with_id_type(item, syn::Visibility::Inherited, |id_type| {
            assert_eq!(id_type.item.ident, "KeywordId");
            let code = id_type.to_token_stream().to_string();
            assert!(code.contains("Self :: r#match => \"match\""));
        });
    }

    #[test]
    fn test_cfg_and_docs_forwarded() {
        let item: Item = parse_quote! {
            enum Transport {
                /// TCP socket.
                Tcp,
                #[cfg(unix)]
                Unix,
            }
        };
        with_id_type(item, syn::Visibility::Inherited, |id_type| {
            let tcp = &id_type.item.variants[0];
            assert!(tcp.attrs.iter().any(|a| a.path().is_ident("doc")));
            let unix = &id_type.item.variants[1];
            assert!(unix.attrs.iter().any(|a| a.path().is_ident("cfg")));

            let code = id_type.to_token_stream().to_string();
            assert!(code.contains("# [cfg (unix)] Self :: Unix => \"Unix\""));
        });
    }

    #[test]
    fn test_visibility_on_every_inherent_item() {
        let item: Item = parse_quote!(enum Color { Red });
        with_id_type(item, parse_quote!(pub(crate)), |id_type| {
            let code = id_type.to_token_stream().to_string();
            assert!(code.contains("pub (crate) enum ColorId"));
            assert!(code.contains("pub (crate) const ALL"));
            assert!(code.contains("pub (crate) const fn as_str"));
            assert!(code.contains("pub (crate) fn iter"));
        });
    }

    #[test]
    fn test_case_named_all_keeps_its_name() {
        let item: Item = parse_quote!(enum Scope { NONE, ALL });
        with_id_type(item, syn::Visibility::Inherited, |id_type| {
            let code = id_type.to_token_stream().to_string();
            assert!(!code.contains("const ALL"));
            assert!(!code.contains("Self :: ALL . len ()"));
            assert!(code.contains("const VARIANTS : & 'static [Self] = & [Self :: NONE , Self :: ALL]"));
            assert!(code.contains("Self :: ALL => \"ALL\""));
        });
    }

    #[test]
    fn test_as_str_matches_on_value() {
        let item: Item = parse_quote!(enum Color { Red });
        with_id_type(item, syn::Visibility::Inherited, |id_type| {
            let code = id_type.to_token_stream().to_string();
            assert!(code.contains("match * self { Self :: Red => \"Red\" , }"));
        });
    }
}
