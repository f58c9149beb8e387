//! The mocker procedural macro.

#![forbid(unsafe_code)]

mod mockgen;

extern crate proc_macro;

///
/// Generate a registry-backed mock type for a trait.
/// Re-exported by `mocker`, it is documented there.
///
#[proc_macro_attribute]
pub fn mockgen(
    attr: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attr = syn::parse_macro_input!(attr as mockgen::Attr);
    let item_trait = syn::parse_macro_input!(input as syn::ItemTrait);

    let output = match mockgen::generate(attr, item_trait) {
        Ok(stream) => stream,
        Err(err) => err.to_compile_error(),
    };

    proc_macro::TokenStream::from(output)
}
