use stack_printer::StackError;
use stack_printer::StackError as StackErrorTrait;
use stack_printer::StackTrace;

#[derive(Debug, StackError)]
pub struct TerminalError {
    #[stack_error(end)]
    source: std::io::Error,
    #[stack_trace]
    trace: StackTrace,
}

impl core::fmt::Display for TerminalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "terminal")
    }
}

impl core::error::Error for TerminalError {}

#[derive(Debug, StackError)]
pub enum EnumError {
    StructVariant {
        #[source]
        inner: TerminalError,
        #[stack_trace]
        trace: StackTrace,
    },
    TupleVariant(#[source] TerminalError, #[stack_trace] StackTrace),
    MessageOnly(#[source] TerminalError),
    Leaf {
        stack: StackTrace,
    },
}

impl core::fmt::Display for EnumError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EnumError::StructVariant { .. } => write!(f, "enum-struct"),
            EnumError::TupleVariant(..) => write!(f, "enum-tuple"),
            EnumError::MessageOnly(..) => write!(f, "enum-message"),
            EnumError::Leaf { .. } => write!(f, "enum-leaf"),
        }
    }
}

impl core::error::Error for EnumError {}

fn assert_stack_error<T: StackErrorTrait>() {}

pub fn smoke() {
    assert_stack_error::<TerminalError>();
    assert_stack_error::<EnumError>();
}

fn main() {}
