use stack_printer::{Frame, StackError, StackTrace};

#[derive(Debug, StackError)]
struct Inner {
    #[stack_error(std)]
    source: std::io::Error,
    stack: Option<StackTrace>,
}

impl core::fmt::Display for Inner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "inner")
    }
}

impl core::error::Error for Inner {}

#[derive(Debug, StackError)]
struct Outer {
    #[source]
    inner: std::boxed::Box<Inner>,
    #[stack_trace]
    trace: StackTrace,
}

impl core::fmt::Display for Outer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "outer")
    }
}

impl core::error::Error for Outer {}

fn main() {
    let error = Outer {
        inner: std::boxed::Box::new(Inner {
            source: std::io::Error::other("oh"),
            stack: None,
        }),
        trace: StackTrace::new([Frame::caller("main")]),
    };
    let chain: Vec<_> = error.iter().map(|link| link.stack_trace().is_some()).collect();
    assert_eq!(chain, [true, false, false]);
}
