use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Generics, Ident, Result, visit::Visit};

use crate::{
    ast::{Body, Input, Shape, Slot, Variant},
    attr::CauseKind,
};

pub fn derive(input: &syn::DeriveInput) -> Result<TokenStream> {
    let input = Input::from_syn(input)?;

    let mut generics = input.generics.clone();
    let mut bounds = BoundsTracker::new(&generics);
    let shapes: Vec<&Shape> = match &input.body {
        Body::Struct(shape) => vec![shape],
        Body::Enum(variants) => variants.iter().map(|variant| &variant.shape).collect(),
    };
    for shape in shapes {
        if let Some((slot, kind)) = &shape.cause {
            bounds.collect(slot.ty, *kind);
        }
    }
    bounds.apply(&mut generics);

    let (stack_trace, next) = match &input.body {
        Body::Struct(shape) => struct_bodies(shape),
        Body::Enum(variants) => enum_bodies(variants),
    };

    let ident = input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::stack_printer::StackError for #ident #ty_generics #where_clause {
            fn stack_trace(&self) -> ::core::option::Option<&::stack_printer::StackTrace> {
                #stack_trace
            }

            fn next<'a>(&'a self) -> ::core::option::Option<::stack_printer::ErrorChain<'a>> {
                #next
            }
        }
    })
}

fn struct_bodies(shape: &Shape) -> (TokenStream, TokenStream) {
    let stack_trace = match &shape.stack_trace {
        Some(slot) => {
            let member = &slot.member;
            stack_trace_body(quote!(&self.#member))
        }
        None => quote! { ::core::option::Option::None },
    };
    let next = match &shape.cause {
        Some((slot, kind)) => {
            let member = &slot.member;
            next_body(quote!(self.#member), *kind)
        }
        None => quote! { ::core::option::Option::None },
    };
    (stack_trace, next)
}

fn enum_bodies(variants: &[Variant]) -> (TokenStream, TokenStream) {
    let binding = format_ident!("__stack_printer_field");

    let stack_arms = variants.iter().map(|variant| {
        let ident = variant.ident;
        match &variant.shape.stack_trace {
            Some(slot) => {
                let pattern = bind_pattern(&variant.shape, slot, &binding);
                let body = stack_trace_body(quote!(#binding));
                quote! { Self::#ident #pattern => #body }
            }
            None => {
                let pattern = wildcard_pattern(&variant.shape);
                quote! { Self::#ident #pattern => ::core::option::Option::None }
            }
        }
    });

    let next_arms = variants.iter().map(|variant| {
        let ident = variant.ident;
        match &variant.shape.cause {
            Some((slot, kind)) => {
                let pattern = bind_pattern(&variant.shape, slot, &binding);
                let body = next_body(quote!(#binding), *kind);
                quote! { Self::#ident #pattern => #body }
            }
            None => {
                let pattern = wildcard_pattern(&variant.shape);
                quote! { Self::#ident #pattern => ::core::option::Option::None }
            }
        }
    });

    let stack_trace = quote! {
        match self {
            #(#stack_arms,)*
        }
    };
    let next = quote! {
        match self {
            #(#next_arms,)*
        }
    };
    (stack_trace, next)
}

fn stack_trace_body(field: TokenStream) -> TokenStream {
    quote! {
        ::stack_printer::__private::AsStackTrace::as_stack_trace(#field)
    }
}

fn next_body(field: TokenStream, kind: CauseKind) -> TokenStream {
    match kind {
        CauseKind::Stacked => quote! {
            {
                use ::stack_printer::__private::AsDynStackError as _;
                ::core::option::Option::Some(::stack_printer::ErrorChain::Stacked(
                    #field.as_dyn_stack_error(),
                ))
            }
        },
        CauseKind::Std => quote! {
            {
                use ::stack_printer::__private::AsDynStdError as _;
                ::core::option::Option::Some(::stack_printer::ErrorChain::Std(
                    #field.as_dyn_std_error(),
                ))
            }
        },
    }
}

/// `{ field: binding, .. }` or `(_, binding, _)`
fn bind_pattern(shape: &Shape, target: &Slot, binding: &Ident) -> TokenStream {
    if shape.named {
        let member = &target.member;
        quote! { { #member: #binding, .. } }
    } else {
        let patterns = (0..shape.len).map(|index| {
            if index == target.index {
                quote! { #binding }
            } else {
                quote! { _ }
            }
        });
        quote! { ( #(#patterns),* ) }
    }
}

fn wildcard_pattern(shape: &Shape) -> TokenStream {
    if shape.named {
        quote! { { .. } }
    } else {
        quote! { (..) }
    }
}

/// Adds `StackError` or `core::error::Error` bounds to the type parameters a cause field mentions.
struct BoundsTracker {
    params: BTreeSet<String>,
    needs_error: BTreeSet<String>,
    needs_stack: BTreeSet<String>,
}

impl BoundsTracker {
    fn new(generics: &Generics) -> Self {
        BoundsTracker {
            params: generics
                .type_params()
                .map(|param| param.ident.to_string())
                .collect(),
            needs_error: BTreeSet::new(),
            needs_stack: BTreeSet::new(),
        }
    }

    fn collect(&mut self, ty: &syn::Type, kind: CauseKind) {
        let mut visitor = TypeParamCollector {
            params: &self.params,
            found: BTreeSet::new(),
        };
        visitor.visit_type(ty);

        for name in visitor.found {
            match kind {
                CauseKind::Stacked => self.needs_stack.insert(name),
                CauseKind::Std => self.needs_error.insert(name),
            };
        }
    }

    fn apply(&self, generics: &mut Generics) {
        for param in generics.type_params_mut() {
            let name = param.ident.to_string();
            if self.needs_stack.contains(&name) {
                param
                    .bounds
                    .push(syn::parse_quote!(::stack_printer::StackError));
            } else if self.needs_error.contains(&name) {
                param.bounds.push(syn::parse_quote!(::core::error::Error));
            }
        }
    }
}

struct TypeParamCollector<'a> {
    params: &'a BTreeSet<String>,
    found: BTreeSet<String>,
}

impl<'ast> Visit<'ast> for TypeParamCollector<'_> {
    fn visit_type_path(&mut self, type_path: &'ast syn::TypePath) {
        if type_path.qself.is_none()
            && let Some(segment) = type_path.path.segments.first()
        {
            let name = segment.ident.to_string();
            if self.params.contains(&name) {
                self.found.insert(name);
            }
        }

        syn::visit::visit_type_path(self, type_path);
    }
}
