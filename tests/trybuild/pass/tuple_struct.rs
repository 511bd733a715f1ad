use stack_printer::{StackError, StackTrace};

#[derive(Debug, StackError)]
struct Tuple(&'static str, #[stack_trace] StackTrace);

impl core::fmt::Display for Tuple {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

impl core::error::Error for Tuple {}

fn main() {}
