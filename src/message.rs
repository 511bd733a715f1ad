use alloc::string::{String, ToString};
use core::fmt::Display;

/// Returns the part of `current`'s message that `current` itself contributes.
///
/// Wrapping errors are commonly rendered as `"<context>: <cause>"`. If the message of `current` ends
/// with `": "` followed by the message of `next`, that suffix is stripped. Otherwise the message is
/// returned unchanged.
///
/// ```
/// use stack_printer::local_message;
///
/// assert_eq!(local_message(&"failed to open foo: EOF", &"EOF"), "failed to open foo");
/// assert_eq!(local_message(&"failed to open foo", &"EOF"), "failed to open foo");
/// ```
pub fn local_message<C, N>(current: &C, next: &N) -> String
where
    C: Display + ?Sized,
    N: Display + ?Sized,
{
    let message = current.to_string();
    let next = next.to_string();

    match message
        .strip_suffix(next.as_str())
        .and_then(|rest| rest.strip_suffix(": "))
    {
        Some(local) => local.to_string(),
        None => message,
    }
}
