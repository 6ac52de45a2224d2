use proc_macro::TokenStream;

mod copy_constructor;
mod emit;
mod input;
mod message;
mod util;

/// Generates `pub fn copy_from(source: &Self) -> Self`.
///
/// Container option: `#[copy_constructor(depth = "Reference" | "One")]`.
/// Field options: `exclude`, `reference`, `copy(using = "path::Copier")`.
#[proc_macro_derive(CopyConstructor, attributes(copy_constructor))]
pub fn derive_copy_constructor(input: TokenStream) -> TokenStream {
    copy_constructor::derive_copy_constructor(input.into()).into()
}
