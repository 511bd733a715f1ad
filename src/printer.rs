use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use crate::{ErrorChain, Frames, overlap, suffix::is_suffix_of, verbose, walk::Walk};

/// Renders `error` as all of its messages followed by a single stack trace.
///
/// This works when every stack trace in the chain lies on one call stack, that is, the stack of each
/// enclosing error is a suffix of the stack of the error it wraps. The messages are printed from the
/// root cause outwards, each reduced to the text it adds to its cause, and then the innermost (longest)
/// stack trace is printed once.
///
/// If the chain has no stack trace, or its stack traces are unrelated (e.g. one was captured on
/// another thread), the result of [verbose] is returned instead.
pub fn print_single_stack<'a>(error: impl Into<ErrorChain<'a>>) -> String {
    print_single_stack_with(error, |error| verbose(error).to_string())
}

/// Like [print_single_stack], but calls `fallback` for chains it cannot coalesce.
pub fn print_single_stack_with<'a, F>(error: impl Into<ErrorChain<'a>>, fallback: F) -> String
where
    F: FnOnce(ErrorChain<'a>) -> String,
{
    let error = error.into();
    let walk = Walk::new(error);

    let Some(innermost) = walk.layers.last() else {
        tracing::debug!("no stack trace in error chain, falling back to verbose output");
        return fallback(error);
    };

    let contiguous = walk
        .layers
        .windows(2)
        .rev()
        .all(|pair| is_suffix_of(pair[0].frames, pair[1].frames));
    if !contiguous {
        tracing::debug!(
            layers = walk.layers.len(),
            "stack traces are not on a single stack, falling back to verbose output"
        );
        return fallback(error);
    }

    let messages = walk.local_messages();
    let lines: Vec<String> = walk
        .root_line(&messages)
        .into_iter()
        .chain(messages.into_iter().rev())
        .collect();

    format!("{}{}", lines.join("\n"), Frames(innermost.frames))
}

/// Renders `error` with every message placed directly above the part of the stack it belongs to.
///
/// This works when the chain alternates between errors with a stack trace and errors without one,
/// starting with a stack-bearing error (the root cause is exempt). Frames an enclosing error already
/// shows are removed from the stack of the error it wraps, so each frame is printed once and the
/// messages are interleaved at their position in the stack.
///
/// If the chain does not alternate or has no stack trace, the result of [verbose] is returned instead.
pub fn print_stack_with_messages<'a>(error: impl Into<ErrorChain<'a>>) -> String {
    print_stack_with_messages_with(error, |error| verbose(error).to_string())
}

/// Like [print_stack_with_messages], but calls `fallback` for chains it cannot render.
pub fn print_stack_with_messages_with<'a, F>(
    error: impl Into<ErrorChain<'a>>,
    fallback: F,
) -> String
where
    F: FnOnce(ErrorChain<'a>) -> String,
{
    let error = error.into();
    let Some(walk) = Walk::alternating(error) else {
        tracing::debug!(
            "error chain does not alternate between stack traces and messages, falling back to verbose output"
        );
        return fallback(error);
    };

    if walk.layers.is_empty() {
        tracing::debug!("no stack trace in error chain, falling back to verbose output");
        return fallback(error);
    }

    // each layer keeps only the frames its enclosing layer does not show
    let mut frames: Vec<_> = walk.layers.iter().map(|layer| layer.frames).collect();
    for i in (1..walk.layers.len()).rev() {
        let inner = walk.layers[i].frames;
        if let Some(shared) = overlap(walk.layers[i - 1].frames, inner) {
            tracing::trace!(layer = i, shared, "trimming frames shown by the enclosing error");
            frames[i] = &inner[..inner.len() - shared];
        }
    }

    let messages = walk.local_messages();
    let blocks: Vec<String> = walk
        .root_line(&messages)
        .into_iter()
        .chain(
            messages
                .iter()
                .zip(&frames)
                .rev()
                .map(|(message, frames)| format!("{}{}", message, Frames(frames))),
        )
        .collect();

    blocks.join("\n")
}
