use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::spanned::Spanned;

// Mirrors `mocker::MAX_PARAM_COUNT` and `mocker::MAX_RESULT_COUNT`.
const MAX_PARAM_COUNT: usize = 5;
const MAX_RESULT_COUNT: usize = 5;

/// A trait method, analyzed for mocking.
pub struct MockMethod<'t> {
    pub method: &'t syn::TraitItemFn,
    pub ident_lit: syn::LitStr,
    pub builder_ident: syn::Ident,
    pub args: Vec<MockArg<'t>>,
    pub results: Results,
}

pub struct MockArg<'t> {
    pub ident: syn::Ident,
    pub ty: &'t syn::Type,
}

/// How the method's return type maps onto result slots.
pub enum Results {
    /// One slot holding the whole return type (`()` when there is none).
    Single(syn::Type),
    /// A tuple return, one slot per element.
    Spread(Vec<syn::Type>),
}

impl Results {
    fn from_output(output: &syn::ReturnType) -> syn::Result<Self> {
        let ty = match output {
            syn::ReturnType::Default => return Ok(Self::Single(syn::parse_quote! { () })),
            syn::ReturnType::Type(_, ty) => ty.as_ref(),
        };

        let results = match ty {
            syn::Type::Tuple(tuple) if (2..=MAX_RESULT_COUNT).contains(&tuple.elems.len()) => {
                Self::Spread(tuple.elems.iter().cloned().collect())
            }
            other => Self::Single(other.clone()),
        };

        for ty in results.types() {
            if let syn::Type::ImplTrait(_) = ty {
                return Err(syn::Error::new(
                    ty.span(),
                    "`impl Trait` return types cannot be mocked",
                ));
            }
        }

        Ok(results)
    }

    pub fn types(&self) -> Vec<&syn::Type> {
        match self {
            Self::Single(ty) => vec![ty],
            Self::Spread(types) => types.iter().collect(),
        }
    }
}

pub fn extract_methods(item_trait: &syn::ItemTrait) -> syn::Result<Vec<MockMethod<'_>>> {
    item_trait
        .items
        .iter()
        .map(|item| match item {
            syn::TraitItem::Fn(method) => MockMethod::analyze(method),
            other => Err(syn::Error::new(
                other.span(),
                "Only methods can be mocked, associated items are not supported",
            )),
        })
        .collect()
}

impl<'t> MockMethod<'t> {
    fn analyze(method: &'t syn::TraitItemFn) -> syn::Result<Self> {
        let sig = &method.sig;

        if sig.asyncness.is_some() {
            return Err(syn::Error::new(
                sig.asyncness.span(),
                "async methods cannot be mocked",
            ));
        }
        if !sig.generics.params.is_empty() {
            return Err(syn::Error::new(
                sig.generics.span(),
                "Generic methods cannot be mocked",
            ));
        }
        if sig.receiver().is_none() {
            return Err(syn::Error::new(
                sig.span(),
                "Mocked methods must take a `self` receiver",
            ));
        }

        let args = sig
            .inputs
            .iter()
            .filter_map(|fn_arg| match fn_arg {
                syn::FnArg::Receiver(_) => None,
                syn::FnArg::Typed(pat_type) => Some(pat_type),
            })
            .enumerate()
            .map(|(index, pat_type)| MockArg::analyze(index, pat_type))
            .collect::<syn::Result<Vec<_>>>()?;

        if args.len() > MAX_PARAM_COUNT {
            return Err(syn::Error::new(
                sig.inputs.span(),
                format!("Mocked methods take at most {MAX_PARAM_COUNT} arguments"),
            ));
        }

        let ident = &sig.ident;
        Ok(Self {
            method,
            ident_lit: syn::LitStr::new(&ident.to_string(), ident.span()),
            builder_ident: format_ident!("mock_{}", ident),
            args,
            results: Results::from_output(&sig.output)?,
        })
    }

    /// `Mocker<(A1, A2,), (R1,)>`
    pub fn mocker_type(&self, prefix: &syn::Path) -> TokenStream {
        let arg_tys = self.args.iter().map(|arg| arg.ty);
        let result_tys = self.results.types();

        quote! {
            #prefix::Mocker<(#(#arg_tys,)*), (#(#result_tys,)*)>
        }
    }

    /// The trait method signature with arguments renamed to generated idents.
    pub fn forwarding_sig(&self) -> syn::Signature {
        let mut sig = self.method.sig.clone();
        let mut args = self.args.iter();

        for fn_arg in sig.inputs.iter_mut() {
            if let syn::FnArg::Typed(pat_type) = fn_arg {
                if let Some(arg) = args.next() {
                    let ident = &arg.ident;
                    *pat_type.pat = syn::parse_quote! { #ident };
                }
            }
        }

        sig
    }
}

impl<'t> MockArg<'t> {
    fn analyze(index: usize, pat_type: &'t syn::PatType) -> syn::Result<Self> {
        match pat_type.ty.as_ref() {
            syn::Type::Reference(_) => Err(syn::Error::new(
                pat_type.ty.span(),
                "Mocked arguments must be owned, 'static types",
            )),
            syn::Type::ImplTrait(_) => Err(syn::Error::new(
                pat_type.ty.span(),
                "`impl Trait` arguments cannot be mocked",
            )),
            ty => Ok(Self {
                ident: format_ident!("arg{}", index),
                ty,
            }),
        }
    }
}
