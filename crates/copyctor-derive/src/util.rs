use proc_macro2::TokenStream;
use quote::quote;
use syn::{Generics, WherePredicate};

// Extend the where clause with `bounds`, keeping any user predicates first.
pub fn where_clause_with_bounds(generics: &Generics, bounds: &[WherePredicate]) -> TokenStream {
    let user = generics.where_clause.as_ref().map(|wc| &wc.predicates);

    match (user, bounds.is_empty()) {
        (None, true) => quote!(),
        (Some(preds), true) => quote!(where #preds),
        (None, false) => quote!(where #(#bounds),*),
        (Some(preds), false) if preds.empty_or_trailing() => quote!(where #preds #(#bounds),*),
        (Some(preds), false) => quote!(where #preds, #(#bounds),*),
    }
}
