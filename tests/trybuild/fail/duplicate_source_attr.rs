use stack_printer::StackError;

#[derive(StackError)]
pub struct Twice {
    #[source]
    #[source]
    source: std::io::Error,
}

fn main() {}
