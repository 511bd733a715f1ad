use alloc::{string::ToString, vec::Vec};

use crate::{ErrorChain, local_message};

/// Returns a [Verbose] writer over the chain starting at `error`.
pub fn verbose<'a>(error: impl Into<ErrorChain<'a>>) -> Verbose<'a> {
    Verbose {
        chain: error.into(),
    }
}

/// Helper for displaying a whole error chain with every stack trace it carries.
///
/// The chain is written from the root cause outwards. Each link prints the text it adds to its cause
/// (nothing, if its message is just the cause's message) followed by its own full stack trace, if it
/// recorded one. Nothing is coalesced, which makes this the rendering of last resort.
///
/// ## Example
///
/// ```text
/// EOF
/// failed to open foo
/// app::open_file
///     src/main.rs:12
/// app::main
///     src/main.rs:30
/// failed to load config
/// app::main
///     src/main.rs:30
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Verbose<'a> {
    chain: ErrorChain<'a>,
}

impl core::fmt::Display for Verbose<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let links: Vec<_> = self.chain.into_iter().collect();
        let Some(root) = links.last() else {
            return Ok(());
        };

        write!(f, "{}", root)?;
        if let Some(stack) = root.stack_trace() {
            write!(f, "{}", stack)?;
        }

        for pair in links.windows(2).rev() {
            let (link, cause) = (&pair[0], &pair[1]);
            let message = local_message(link, cause);
            if message != cause.to_string() {
                write!(f, "\n{}", message)?;
            }
            if let Some(stack) = link.stack_trace() {
                write!(f, "{}", stack)?;
            }
        }

        Ok(())
    }
}
