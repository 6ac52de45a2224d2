use crate::{input::DeriveClass, util::where_clause_with_bounds};
use copyctor_core::{
    source::FieldSource,
    synth::{ConstructorPlan, InitValue},
};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Ident, WherePredicate, parse_quote};

/// Render a constructor plan as an inherent `copy_from` constructor.
///
/// Every field the plan does not initialize falls back to `Default`.
pub fn emit_copy_constructor(class: &DeriveClass, plan: &ConstructorPlan) -> TokenStream {
    let ident = &class.ident;
    let param = parameter_ident(&plan.parameter.name);
    let is_generic = class.generics.type_params().next().is_some();

    let mut bounds: Vec<WherePredicate> = Vec::new();
    let mut inits = Vec::with_capacity(class.fields.len());

    for field in &class.fields {
        let name = &field.ident;
        let ty = &field.ty;
        let op = plan.get(field.name()).map(|op| &op.value);

        let expr = match (op, &field.copy_using) {
            (Some(InitValue::Accessor { .. }), _) => {
                bounds.push(parse_quote!(#ty: ::core::clone::Clone));
                quote!(::core::clone::Clone::clone(&#param.#name))
            }
            (Some(InitValue::CopyCall { .. }), Some(using)) => {
                quote!(<#using>::copy(&#param.#name))
            }
            _ => {
                bounds.push(parse_quote!(#ty: ::core::default::Default));
                quote!(::core::default::Default::default())
            }
        };

        inits.push(quote!(#name: #expr));
    }

    // concrete field types are checked directly at the use site
    if !is_generic {
        bounds.clear();
    }

    let (impl_generics, ty_generics, _) = class.generics.split_for_impl();
    let where_clause = where_clause_with_bounds(&class.generics, &bounds);
    let lints = plan
        .is_synthesized
        .then(|| quote!(#[allow(clippy::all, clippy::pedantic, clippy::nursery)]));

    quote! {
        #lints
        impl #impl_generics #ident #ty_generics #where_clause {
            /// Copy constructor generated by `#[derive(CopyConstructor)]`.
            #[must_use]
            #[allow(non_snake_case, unused_variables)]
            pub fn copy_from(#param: &Self) -> Self {
                Self {
                    #(#inits),*
                }
            }
        }
    }
}

// keywords and other non-identifiers cannot name the parameter
fn parameter_ident(name: &str) -> Ident {
    syn::parse_str::<Ident>(name).unwrap_or_else(|_| format_ident!("source"))
}
