use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::spanned::Spanned;

mod attr;
mod method;

pub use attr::Attr;
use method::{MockMethod, Results};

pub fn generate(attr: Attr, item_trait: syn::ItemTrait) -> syn::Result<TokenStream> {
    if let Some(lifetime) = item_trait.generics.lifetimes().next() {
        return Err(syn::Error::new(
            lifetime.span(),
            "Traits with lifetime parameters cannot be mocked",
        ));
    }

    let methods = method::extract_methods(&item_trait)?;

    let prefix = &attr.prefix;
    let vis = &item_trait.vis;
    let trait_ident = &item_trait.ident;
    let mock_ident = attr
        .name
        .clone()
        .unwrap_or_else(|| format_ident!("{}MockImpl", trait_ident));

    let generics = with_static_type_params(&item_trait.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let (_, trait_ty_generics, _) = item_trait.generics.split_for_impl();

    let type_params = item_trait
        .generics
        .type_params()
        .map(|param| &param.ident)
        .collect::<Vec<_>>();
    let (marker_field, marker_init) = if type_params.is_empty() {
        (None, None)
    } else {
        (
            Some(quote! {
                marker: ::core::marker::PhantomData<fn() -> (#(#type_params,)*)>,
            }),
            Some(quote! {
                marker: ::core::marker::PhantomData,
            }),
        )
    };

    let doc_string = format!("Registry-backed mock of [{trait_ident}].");
    let doc_lit_str = syn::LitStr::new(&doc_string, proc_macro2::Span::call_site());

    let builders = methods
        .iter()
        .map(|method| def_builder(method, prefix, vis));
    let forwarders = methods.iter().map(|method| def_forwarder(method, prefix));

    Ok(quote! {
        #item_trait

        #[doc = #doc_lit_str]
        #vis struct #mock_ident #impl_generics #where_clause {
            registry: ::std::sync::Arc<#prefix::Registry>,
            #marker_field
        }

        impl #impl_generics #mock_ident #ty_generics #where_clause {
            /// Create a mock that dispatches through `registry`.
            #vis fn new(registry: ::std::sync::Arc<#prefix::Registry>) -> Self {
                Self {
                    registry,
                    #marker_init
                }
            }

            /// The registry this mock dispatches through.
            #vis fn registry(&self) -> &::std::sync::Arc<#prefix::Registry> {
                &self.registry
            }

            #(#builders)*
        }

        impl #impl_generics #trait_ident #trait_ty_generics for #mock_ident #ty_generics #where_clause {
            #(#forwarders)*
        }
    })
}

/// Mock types are keyed by `TypeId`, so every type parameter needs `'static`.
fn with_static_type_params(generics: &syn::Generics) -> syn::Generics {
    let mut generics = generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote! { 'static });
        param.eq_token = None;
        param.default = None;
    }
    generics
}

fn def_builder(method: &MockMethod, prefix: &syn::Path, vis: &syn::Visibility) -> TokenStream {
    let builder_ident = &method.builder_ident;
    let ident_lit = &method.ident_lit;
    let mocker_type = method.mocker_type(prefix);

    let doc_string = format!(
        "Register a new provider for `{}`.",
        method.method.sig.ident
    );

    quote! {
        #[doc = #doc_string]
        #vis fn #builder_ident(&self) -> #mocker_type {
            #prefix::Mocker::new(
                &self.registry,
                #prefix::SubjectKey::of::<Self>(#ident_lit),
            )
        }
    }
}

fn def_forwarder(method: &MockMethod, prefix: &syn::Path) -> TokenStream {
    let sig = method.forwarding_sig();
    let ident_lit = &method.ident_lit;
    let arg_idents = method.args.iter().map(|arg| &arg.ident);

    let result_tys = method.results.types();
    let unbox_ident = format_ident!("unbox{}", result_tys.len());
    let result_idents = (0..result_tys.len())
        .map(|index| format_ident!("r{}", index))
        .collect::<Vec<_>>();
    let result_checks = result_idents.iter().enumerate().map(|(slot, ident)| {
        quote! {
            let #ident = match #ident {
                Some(value) => value,
                None => panic!(
                    "{}",
                    #prefix::MockError::MissingResult {
                        subject: key.type_name(),
                        method: key.method(),
                        slot: #slot,
                    }
                ),
            };
        }
    });
    let output = match &method.results {
        Results::Single(_) => quote! { r0 },
        Results::Spread(_) => quote! { (#(#result_idents),*) },
    };

    quote! {
        #sig {
            let key = #prefix::SubjectKey::of::<Self>(#ident_lit);
            let ret = match #prefix::invoke(
                Some(&*self.registry),
                key,
                #prefix::envelope![#(#arg_idents),*],
            ) {
                Ok(ret) => ret,
                Err(error) => panic!("{}", error),
            };
            let (#(#result_idents,)*) = #prefix::#unbox_ident::<#(#result_tys),*>(ret);
            #(#result_checks)*
            #output
        }
    }
}
