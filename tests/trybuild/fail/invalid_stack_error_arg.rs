use stack_printer::StackError;

#[derive(StackError)]
pub struct BadArg {
    #[stack_error(foo)]
    source: std::io::Error,
}

fn main() {}
