use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::{ErrorChain, Frame, local_message};

/// A stack-bearing link of a chain.
#[derive(Debug, Clone)]
pub(crate) struct StackLayer<'a> {
    pub error: ErrorChain<'a>,
    pub frames: &'a [Frame],
}

/// Stack-bearing links, outermost first, plus the deepest link of the chain.
#[derive(Debug, Clone)]
pub(crate) struct Walk<'a> {
    pub layers: Vec<StackLayer<'a>>,
    pub root: ErrorChain<'a>,
}

impl<'a> Walk<'a> {
    /// Collects every link that exposes a stack trace.
    pub fn new(head: ErrorChain<'a>) -> Self {
        let mut layers = Vec::new();
        let mut root = head;

        for link in head.into_iter() {
            if let Some(stack) = link.stack_trace() {
                layers.push(StackLayer {
                    error: link,
                    frames: stack.frames(),
                });
            }
            root = link;
        }

        Walk { layers, root }
    }

    /// Like [Walk::new], but requires stack-bearing and plain links to alternate, starting with a
    /// stack-bearing one. The deepest link is exempt. Returns `None` when the chain breaks that pattern.
    pub fn alternating(head: ErrorChain<'a>) -> Option<Self> {
        let mut layers = Vec::new();
        let mut root = head;
        let mut expect_stack = true;

        for link in head.into_iter() {
            let stack = link.stack_trace();
            if let Some(stack) = stack {
                layers.push(StackLayer {
                    error: link,
                    frames: stack.frames(),
                });
            }
            if link.has_cause() && stack.is_some() != expect_stack {
                return None;
            }
            root = link;
            expect_stack = !expect_stack;
        }

        Some(Walk { layers, root })
    }

    /// Returns what each layer adds to the message of the layer below it, outermost first.
    ///
    /// The innermost layer is compared with the root of the chain.
    pub fn local_messages(&self) -> Vec<String> {
        let nexts = self
            .layers
            .iter()
            .skip(1)
            .map(|layer| &layer.error)
            .chain(core::iter::once(&self.root));

        self.layers
            .iter()
            .zip(nexts)
            .map(|(layer, next)| local_message(&layer.error, next))
            .collect()
    }

    /// Returns the root's message when it is not already the innermost layer's message.
    pub fn root_line(&self, messages: &[String]) -> Option<String> {
        let root = self.root.to_string();
        match messages.last() {
            Some(innermost) if *innermost == root => None,
            _ => Some(root),
        }
    }
}
