//! Expansion of `#[derive(Record)]`
//!
//! For a struct `Name` with named fields the derive emits a `NameShape` struct
//! holding one boxed generator per field, an `Arbitrary<Name>` impl that samples
//! every field once, and a `Record` impl linking the two.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, Result, parse_macro_input};

/// Main entry point for the Record derive macro
pub fn derive_record_impl(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_record_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_record_impl(input: &DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let vis = &input.vis;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "Record derive does not support generic types; use the record! macro instead",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(Error::new_spanned(
                    input,
                    "Record derive requires a struct with named fields",
                ));
            }
        },
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                input,
                "Record derive is not supported for enums",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                input,
                "Record derive is not supported for unions",
            ));
        }
    };

    let shape_name = format_ident!("{}Shape", name);
    let field_names: Vec<_> = fields.iter().filter_map(|f| f.ident.as_ref()).collect();
    let field_types: Vec<_> = fields.iter().map(|f| &f.ty).collect();
    let shape_doc = format!(
        "One generator per field of [`{}`], sampled in declaration order.",
        name
    );

    Ok(quote! {
        #[doc = #shape_doc]
        #[derive(Debug, Clone)]
        #[allow(dead_code)]
        #vis struct #shape_name {
            #(pub #field_names: quickprop::BoxedArbitrary<#field_types>,)*
        }

        #[allow(dead_code)]
        impl #shape_name {
            /// Build a shape from one generator per field, in declaration order
            #[allow(clippy::too_many_arguments)]
            pub fn new(
                #(#field_names: impl quickprop::Arbitrary<#field_types> + Send + Sync + 'static,)*
            ) -> Self {
                Self {
                    #(#field_names: quickprop::BoxedArbitrary::new(#field_names),)*
                }
            }
        }

        impl quickprop::Arbitrary<#name> for #shape_name {
            fn sample(&self, rng: &mut dyn quickprop::RngCore) -> #name {
                #name {
                    #(#field_names: quickprop::Arbitrary::sample(&self.#field_names, rng),)*
                }
            }
        }

        impl quickprop::Record for #name {
            type Shape = #shape_name;
        }
    })
}
