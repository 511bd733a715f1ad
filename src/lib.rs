#![no_std]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod frame;
mod message;
mod printer;
mod private;
mod suffix;
mod verbose;
mod walk;

#[doc(hidden)]
pub mod __private {
    pub use crate::private::*;
}

use alloc::{boxed::Box, string::String};

pub use frame::{Frame, Frames, StackTrace};
pub use message::local_message;
pub use printer::{
    print_single_stack, print_single_stack_with, print_stack_with_messages,
    print_stack_with_messages_with,
};
#[cfg(feature = "derive")]
pub use stack_printer_derive::StackError;
pub use suffix::{is_suffix_of, overlap};
pub use verbose::{Verbose, verbose};

/// One link in a chain of errors.
#[derive(Debug, Clone, Copy)]
pub enum ErrorChain<'a> {
    /// An error that may carry a stack trace and knows its cause as another [ErrorChain].
    Stacked(&'a dyn StackError),
    /// A [core::error::Error]. Its cause is [core::error::Error::source] and it never carries a stack trace.
    Std(&'a dyn core::error::Error),
}

impl<'a> ErrorChain<'a> {
    /// Returns the lower-level error, if any.
    pub fn next(&self) -> Option<ErrorChain<'a>> {
        match *self {
            ErrorChain::Stacked(stack_error) => stack_error.next(),
            ErrorChain::Std(error) => error.source().map(ErrorChain::Std),
        }
    }

    /// Returns `true` if this link has a lower-level error.
    pub fn has_cause(&self) -> bool {
        self.next().is_some()
    }

    /// Returns the captured stack trace of this link, if it recorded one.
    pub fn stack_trace(&self) -> Option<&'a StackTrace> {
        match *self {
            ErrorChain::Stacked(stack_error) => stack_error.stack_trace(),
            ErrorChain::Std(_) => None,
        }
    }

    /// Into the iterator
    pub const fn into_iter(self) -> Iter<'a> {
        Iter { chain: Some(self) }
    }

    /// Returns the underlying error for this link.
    pub fn inner(&self) -> &'a dyn core::error::Error {
        match *self {
            ErrorChain::Stacked(stack_error) => stack_error,
            ErrorChain::Std(error) => error,
        }
    }
}

impl core::fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(self.inner(), f)
    }
}

impl core::error::Error for ErrorChain<'_> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.inner().source()
    }
}

impl<'a, E> From<&'a E> for ErrorChain<'a>
where
    E: StackError + Sized,
{
    fn from(stack_error: &'a E) -> Self {
        ErrorChain::Stacked(stack_error)
    }
}

/// Error types that take part in a chain whose links may carry stack traces.
///
/// Both facets are optional: an error may record a stack trace, know its cause, both or neither.
pub trait StackError: core::error::Error {
    /// Returns the stack trace captured when this error was created.
    fn stack_trace(&self) -> Option<&StackTrace>;
    /// Returns the next (lower-level) error in the chain.
    fn next<'a>(&'a self) -> Option<ErrorChain<'a>>;
    /// Creates an iterator over this error's chain, starting with the error itself.
    fn iter<'a>(&'a self) -> Iter<'a>
    where
        Self: Sized,
    {
        Iter::new(self)
    }
}

impl<T> StackError for Box<T>
where
    T: StackError,
{
    fn stack_trace(&self) -> Option<&StackTrace> {
        (**self).stack_trace()
    }

    fn next<'a>(&'a self) -> Option<ErrorChain<'a>> {
        (**self).next()
    }
}

/// Iterator over the links of an error chain, outermost first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    chain: Option<ErrorChain<'a>>,
}

impl<'a> Iter<'a> {
    const fn new<E>(source: &'a E) -> Self
    where
        E: StackError,
    {
        Iter {
            chain: Some(ErrorChain::Stacked(source)),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = ErrorChain<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.chain.take() {
            Some(link) => {
                self.chain = link.next();
                Some(link)
            }
            None => None,
        }
    }
}

/// Wrapper that attaches a [StackTrace] to any `core::error::Error` and exposes it as a [StackError].
///
/// The message is the wrapped error's message, so the wrapper adds a stack but no text.
///
/// A chain only sees stack traces through [StackError] links. Once it passes a plain error, every
/// deeper link is read through [core::error::Error::source], so a `Traced` sitting behind, say, a
/// thiserror `#[source]` wrapper is never reached. Derive [StackError] on such message wrappers as
/// well.
///
/// # Examples
/// ```
/// # extern crate std;
/// use stack_printer::{Frame, StackError, StackTrace, Traced};
///
/// let error = Traced::new(
///     std::io::Error::other("disk full"),
///     StackTrace::new([Frame::caller("app::save"), Frame::caller("app::main")]),
/// );
///
/// assert_eq!(error.to_string(), "disk full");
/// assert_eq!(error.stack_trace().map(|s| s.frames().len()), Some(2));
/// ```
#[derive(Debug)]
pub struct Traced<E> {
    source: E,
    stack: StackTrace,
}

impl<E> Traced<E> {
    /// Wraps `source` together with `stack`.
    pub fn new(source: E, stack: StackTrace) -> Self {
        Traced { source, stack }
    }

    /// Returns the inner value
    pub fn into_inner(self) -> E {
        self.source
    }
}

impl<E> core::fmt::Display for Traced<E>
where
    E: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.source, f)
    }
}

impl<E> core::error::Error for Traced<E>
where
    E: core::error::Error,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source.source()
    }
}

impl<E> StackError for Traced<E>
where
    E: core::error::Error,
{
    fn stack_trace(&self) -> Option<&StackTrace> {
        Some(&self.stack)
    }

    fn next<'a>(&'a self) -> Option<ErrorChain<'a>> {
        self.source.source().map(ErrorChain::Std)
    }
}

/// Convenience helpers for types implementing [StackError].
pub trait StackErrorExt: StackError + Sized {
    /// Renders this error with [print_single_stack].
    ///
    /// ## Example
    ///
    /// ```text
    /// EOF
    /// failed to open foo
    /// failed to parse file
    /// failed to load config
    /// app::open_file
    ///     src/main.rs:12
    /// app::parse_file
    ///     src/main.rs:20
    /// app::main
    ///     src/main.rs:30
    /// ```
    fn single_stack(&self) -> String {
        print_single_stack(self)
    }

    /// Renders this error with [print_stack_with_messages].
    ///
    /// ## Example
    ///
    /// ```text
    /// EOF
    /// failed to open foo
    /// app::open_file
    ///     src/main.rs:12
    /// failed to parse file
    /// app::parse_file
    ///     src/main.rs:20
    /// failed to load config
    /// app::main
    ///     src/main.rs:30
    /// ```
    fn stack_with_messages(&self) -> String {
        print_stack_with_messages(self)
    }

    /// Returns the fallback rendering of the whole chain. See [verbose].
    fn verbose<'a>(&'a self) -> Verbose<'a> {
        verbose(self)
    }

    /// Returns the deepest link in the chain.
    fn root<'a>(&'a self) -> ErrorChain<'a> {
        self.iter().last().unwrap_or(ErrorChain::from(self))
    }
}

impl<E: StackError> StackErrorExt for E {}
