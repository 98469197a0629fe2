//! `CatalogEnum` derive macro implementation

use darling::{ast, FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use crate::utils::{normalize_name, screaming_snake_case};

/// Receiver for the enum that derives `CatalogEnum`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(catalog), supports(enum_unit))]
pub struct CatalogEnumReceiver {
    /// The enum identifier
    ident: syn::Ident,
    /// The enum variants
    data: ast::Data<CatalogVariantReceiver, ()>,
}

/// Receiver for a single unit variant
#[derive(Debug, FromVariant)]
#[darling(attributes(catalog))]
pub struct CatalogVariantReceiver {
    /// The variant identifier
    ident: syn::Ident,
    /// Explicit canonical name, overriding the derived one
    #[darling(default)]
    name: Option<String>,
    /// Additional spellings accepted by `from_name`
    #[darling(multiple)]
    alias: Vec<String>,
}

impl CatalogVariantReceiver {
    fn canonical_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| screaming_snake_case(&self.ident.to_string()))
    }
}

/// Process the `CatalogEnum` derive macro
pub fn process_derive_catalog_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let receiver = match CatalogEnumReceiver::from_derive_input(&input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors().into(),
    };

    let ast::Data::Enum(variants) = &receiver.data else {
        unreachable!("Darling ensures this is an enum")
    };

    TokenStream::from(generate_catalog_enum_impl(&receiver.ident, variants))
}

fn generate_catalog_enum_impl(
    enum_name: &syn::Ident,
    variants: &[CatalogVariantReceiver],
) -> proc_macro2::TokenStream {
    let idents: Vec<_> = variants.iter().map(|v| &v.ident).collect();
    let names: Vec<String> = variants
        .iter()
        .map(CatalogVariantReceiver::canonical_name)
        .collect();
    let spellings: Vec<Vec<String>> = variants
        .iter()
        .map(|v| {
            let mut spellings = vec![normalize_name(&v.canonical_name())];
            for alias in v.alias.iter().map(|a| normalize_name(a)) {
                if !spellings.contains(&alias) {
                    spellings.push(alias);
                }
            }
            spellings
        })
        .collect();

    quote! {
        impl #enum_name {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[#(Self::#idents),*];

            /// Canonical upper-case name of the variant
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    #(Self::#idents => #names,)*
                }
            }

            /// Look up a variant by name or alias
            ///
            /// Case is ignored, surrounding whitespace is trimmed and `-` or
            /// inner whitespace match `_`, so `all-season` finds `ALL_SEASON`.
            #[must_use]
            pub fn from_name(value: &str) -> ::std::option::Option<Self> {
                let value: ::std::string::String = value
                    .trim()
                    .chars()
                    .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
                    .collect();
                #(
                    if [#(#spellings),*].iter().any(|s| value.eq_ignore_ascii_case(s)) {
                        return ::std::option::Option::Some(Self::#idents);
                    }
                )*
                ::std::option::Option::None
            }
        }

        impl ::std::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    }
}
