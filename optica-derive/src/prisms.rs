//! Expansion of `#[derive(Prisms)]`.
//!
//! Every variant shape maps onto an owned payload: `()` for unit variants,
//! the field type for single-field tuple variants, and a tuple of the field
//! types otherwise. Extraction clones the payload out of a borrowed value.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            generate_enum_prisms(name, generics, data_enum.variants.iter())
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_enum_prisms<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let prism_methods: Vec<TokenStream2> = variants.map(generate_variant_prism).collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

/// How a variant is matched, built, and what it carries.
struct VariantShape {
    focus_type: TokenStream2,
    pattern: TokenStream2,
    payload: TokenStream2,
    construct: TokenStream2,
    field_types: Vec<Type>,
}

fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));
    let doc = format!("Returns a prism focusing on the `{variant_name}` variant.");

    let VariantShape {
        focus_type,
        pattern,
        payload,
        construct,
        field_types,
    } = variant_shape(variant);

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::optica::optics::Prism<Self, #focus_type> + ::core::clone::Clone
        where
            #(for<'__optica> #field_types: ::core::clone::Clone,)*
        {
            ::optica::optics::FunctionPrism::new(
                |source: &Self| match source {
                    #pattern => ::core::option::Option::Some(#payload),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
                |value: #focus_type| #construct,
            )
        }
    }
}

fn variant_shape(variant: &Variant) -> VariantShape {
    let variant_name = &variant.ident;

    match &variant.fields {
        Fields::Unit => VariantShape {
            focus_type: quote! { () },
            pattern: quote! { Self::#variant_name },
            payload: quote! { () },
            construct: quote! {{
                let () = value;
                Self::#variant_name
            }},
            field_types: Vec::new(),
        },

        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            VariantShape {
                focus_type: quote! { #field_type },
                pattern: quote! { Self::#variant_name(field) },
                payload: quote! { ::core::clone::Clone::clone(field) },
                construct: quote! { Self::#variant_name(value) },
                field_types: vec![field_type.clone()],
            }
        }

        Fields::Unnamed(fields) => {
            let field_types: Vec<Type> = fields.unnamed.iter().map(|field| field.ty.clone()).collect();
            let bindings: Vec<Ident> = (0..field_types.len())
                .map(|index| format_ident!("field{}", index))
                .collect();

            VariantShape {
                focus_type: quote! { (#(#field_types,)*) },
                pattern: quote! { Self::#variant_name(#(#bindings),*) },
                payload: quote! { (#(::core::clone::Clone::clone(#bindings),)*) },
                construct: quote! {{
                    let (#(#bindings,)*) = value;
                    Self::#variant_name(#(#bindings),*)
                }},
                field_types,
            }
        }

        Fields::Named(fields) => {
            let field_names: Vec<&Ident> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let field_types: Vec<Type> = fields.named.iter().map(|field| field.ty.clone()).collect();

            VariantShape {
                focus_type: quote! { (#(#field_types,)*) },
                pattern: quote! { Self::#variant_name { #(#field_names),* } },
                payload: quote! { (#(::core::clone::Clone::clone(#field_names),)*) },
                construct: quote! {{
                    let (#(#field_names,)*) = value;
                    Self::#variant_name { #(#field_names),* }
                }},
                field_types,
            }
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase) {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
