use stack_printer::StackError;

#[derive(StackError)]
pub struct Marker;

fn main() {}
