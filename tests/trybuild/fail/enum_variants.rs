use stack_printer::{StackError, StackTrace};

#[derive(StackError)]
pub enum Broken {
    Empty,
    Stacks {
        #[stack_trace]
        first: StackTrace,
        #[stack_trace]
        second: StackTrace,
    },
}

fn main() {}
