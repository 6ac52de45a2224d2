use crate::{
    emit::emit_copy_constructor,
    input::{ContainerOpts, DeriveClass},
};
use copyctor_core::generate;
use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use syn::{Data, DeriveInput};

// derive_copy_constructor
pub fn derive_copy_constructor(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(input: &DeriveInput) -> Result<TokenStream, darling::Error> {
    if matches!(input.data, Data::Union(_)) {
        return Err(darling::Error::custom("CopyConstructor can only be derived for structs")
            .with_span(&input.ident));
    }

    // darling's shape errors arrive without a span
    let opts = ContainerOpts::from_derive_input(input).map_err(|e| e.with_span(&input.ident))?;
    let class = DeriveClass::from_opts(opts)?;

    let generated = generate(Some(&class)).map_err(darling::Error::custom)?;

    // Errors only: Rust structs cannot produce the engine's warnings.
    let mut errors = darling::Error::accumulator();
    for diagnostic in class.misplaced.iter().chain(generated.diagnostics.errors()) {
        errors.push(class.to_error(diagnostic));
    }
    errors.finish()?;

    Ok(generated
        .plan
        .map(|plan| emit_copy_constructor(&class, &plan))
        .unwrap_or_default())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn expand_str(tokens: TokenStream) -> String {
        derive_copy_constructor(tokens).to_string()
    }

    #[test]
    fn emits_copy_from_for_named_struct() {
        let out = expand_str(quote! {
            struct Point {
                x: i32,
                #[copy_constructor(exclude)]
                y: i32,
            }
        });

        assert!(out.contains("pub fn copy_from (point : & Self) -> Self"));
        assert!(out.contains("x : :: core :: clone :: Clone :: clone (& point . x)"));
        assert!(out.contains("y : :: core :: default :: Default :: default ()"));
        assert!(!out.contains("compile_error"));
    }

    #[test]
    fn copy_fields_call_the_named_copier() {
        let out = expand_str(quote! {
            struct Bag {
                #[copy_constructor(copy(using = "crate::Cloner"))]
                items: Vec<u8>,
            }
        });

        assert!(out.contains("< crate :: Cloner > :: copy (& bag . items)"));
    }

    #[test]
    fn enums_are_rejected() {
        let out = expand_str(quote! {
            enum Color { Red, Green }
        });

        assert!(out.contains("compile_error"));
        assert!(out.contains("CopyConstructor can only be derived for structs"));
        assert!(!out.contains("copy_from"));
    }

    #[test]
    fn conflicting_annotations_are_rejected() {
        let out = expand_str(quote! {
            struct Bag {
                #[copy_constructor(reference, copy(using = "Cloner"))]
                items: Vec<u8>,
            }
        });

        assert!(out.contains("a field takes at most one copy policy"));
        assert!(!out.contains("copy_from"));
    }

    #[test]
    fn one_depth_is_rejected() {
        let out = expand_str(quote! {
            #[copy_constructor(depth = "One")]
            struct Tree { left: u8 }
        });

        assert!(out.contains("the `One` copy depth is reserved and not supported yet"));
    }

    #[test]
    fn misplaced_options_are_reported() {
        let out = expand_str(quote! {
            #[copy_constructor(exclude)]
            struct Wrong {
                #[copy_constructor(depth = "Reference")]
                value: u8,
            }
        });

        assert!(out.contains("`#[copy_constructor(exclude)]` is only supported on a field"));
        assert!(out.contains("is only supported on the struct, not on a field"));
        assert!(!out.contains('@'));
    }

    #[test]
    fn unions_are_rejected() {
        let out = expand_str(quote! {
            union Bits { int: u32, float: f32 }
        });

        assert!(out.contains("CopyConstructor can only be derived for structs"));
        assert!(!out.contains("copy_from"));
    }

    #[test]
    fn tuple_structs_are_rejected() {
        let out = expand_str(quote! {
            struct Meters(f64);
        });

        assert!(out.contains("structs with named fields"));
    }

    #[test]
    fn generic_structs_gain_field_bounds() {
        let out = expand_str(quote! {
            struct Wrapper<T> {
                inner: T,
                #[copy_constructor(exclude)]
                cache: Option<T>,
            }
        });

        assert!(out.contains("T : :: core :: clone :: Clone"));
        assert!(out.contains("Option < T > : :: core :: default :: Default"));
    }
}
