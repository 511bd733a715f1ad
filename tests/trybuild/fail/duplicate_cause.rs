use stack_printer::{StackError, StackTrace};

#[derive(StackError)]
pub struct TwoCauses {
    #[source]
    first: std::io::Error,
    #[stack_error(end)]
    second: std::io::Error,
    stack: StackTrace,
}

fn main() {}
