use stack_printer::{StackError, StackTrace};

#[derive(Debug, StackError)]
struct MaybeTraced {
    message: &'static str,
    stack: Option<StackTrace>,
}

impl core::fmt::Display for MaybeTraced {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message)
    }
}

impl core::error::Error for MaybeTraced {}

fn main() {
    let error = MaybeTraced {
        message: "plain",
        stack: None,
    };
    assert!(error.stack_trace().is_none());
    assert!(error.next().is_none());
}
