use stack_printer::StackError;

#[derive(StackError)]
pub union Bits {
    int: u32,
    float: f32,
}

fn main() {}
