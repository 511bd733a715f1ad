use stack_printer::{StackError, StackTrace};

#[derive(Debug, StackError)]
struct BoxError {
    #[stack_error(end)]
    source: Box<dyn core::error::Error + Send + Sync>,
    stack: StackTrace,
}

impl core::fmt::Display for BoxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "boxed")
    }
}

impl core::error::Error for BoxError {}

fn main() {
    let error = BoxError {
        source: Box::new(std::io::Error::other("oh")),
        stack: StackTrace::default(),
    };
    assert!(error.next().is_some());
    assert!(error.stack_trace().is_some());
}
