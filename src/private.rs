//! Helpers called by `#[derive(StackError)]` output.

use crate::{StackError, StackTrace};

/// Views a cause field as a plain error link.
///
/// Implemented for sized errors and for `dyn Error + Send + Sync`, so `Box<dyn Error + Send + Sync>`
/// fields are reached through auto-deref.
#[doc(hidden)]
pub trait AsDynStdError<'a> {
    fn as_dyn_std_error(&self) -> &(dyn core::error::Error + 'a);
}

impl<'a, T: core::error::Error + 'a> AsDynStdError<'a> for T {
    #[inline]
    fn as_dyn_std_error(&self) -> &(dyn core::error::Error + 'a) {
        self
    }
}

impl<'a> AsDynStdError<'a> for dyn core::error::Error + Send + Sync + 'a {
    #[inline]
    fn as_dyn_std_error(&self) -> &(dyn core::error::Error + 'a) {
        self
    }
}

/// Views a cause field as a stack-aware link.
#[doc(hidden)]
pub trait AsDynStackError<'a> {
    fn as_dyn_stack_error(&self) -> &(dyn StackError + 'a);
}

impl<'a, T: StackError + 'a> AsDynStackError<'a> for T {
    #[inline]
    fn as_dyn_stack_error(&self) -> &(dyn StackError + 'a) {
        self
    }
}

/// Field types accepted as a stack trace.
#[doc(hidden)]
pub trait AsStackTrace {
    fn as_stack_trace(&self) -> Option<&StackTrace>;
}

impl AsStackTrace for StackTrace {
    #[inline]
    fn as_stack_trace(&self) -> Option<&StackTrace> {
        Some(self)
    }
}

impl AsStackTrace for Option<StackTrace> {
    #[inline]
    fn as_stack_trace(&self) -> Option<&StackTrace> {
        self.as_ref()
    }
}
