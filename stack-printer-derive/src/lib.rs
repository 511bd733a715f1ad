use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod ast;
mod attr;
mod expand;

/// Derives `stack_printer::StackError`.
///
/// - The stack trace is the field marked `#[stack_trace]`, or the field named `stack`. Its type must be
///   `StackTrace` or `Option<StackTrace>`. Without one the error carries no stack trace.
/// - The cause is the field marked `#[source]` or `#[stack_error(stacked)]` (a `StackError`), the field
///   marked `#[stack_error(end)]` or `#[stack_error(std)]` (a plain `core::error::Error`), or the field
///   named `source` (a `StackError`). Without one the error ends the chain.
#[proc_macro_derive(StackError, attributes(source, stack_error, stack_trace))]
pub fn derive_stack_error(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::derive(&input)
        .unwrap_or_else(|err| err.into_compile_error())
        .into()
}
