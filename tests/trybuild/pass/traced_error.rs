use stack_printer::{StackError, StackTrace, Traced};

#[derive(Debug, StackError)]
enum A {
    TupleAttribute(#[source] Traced<std::io::Error>),
    StructNamed { source: Traced<std::io::Error> },
}

impl core::fmt::Display for A {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "A")
    }
}

impl core::error::Error for A {}

#[derive(Debug, StackError)]
struct B(#[source] Traced<std::io::Error>, #[stack_trace] StackTrace);

impl core::fmt::Display for B {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "B")
    }
}

impl core::error::Error for B {}

fn main() {
    let a = A::StructNamed {
        source: Traced::new(std::io::Error::other("oh"), StackTrace::default()),
    };
    assert!(a.next().is_some_and(|next| next.stack_trace().is_some()));
}
