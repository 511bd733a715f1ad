use stack_printer::{StackError, StackTrace};

#[derive(StackError)]
pub struct Both {
    #[stack_trace]
    #[source]
    both: StackTrace,
}

fn main() {}
