use stack_printer::{StackError, StackTrace};

#[derive(StackError)]
pub struct TwoStacks {
    #[stack_trace]
    first: StackTrace,
    #[stack_trace]
    second: StackTrace,
}

fn main() {}
