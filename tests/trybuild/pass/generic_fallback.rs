use stack_printer::StackError;
use stack_printer::StackError as StackErrorTrait;
use stack_printer::StackTrace;

#[derive(Debug, StackError)]
pub struct LeafError {
    #[stack_error(end)]
    source: std::io::Error,
    stack: StackTrace,
}

impl LeafError {
    pub fn new() -> Self {
        Self {
            source: std::io::Error::from_raw_os_error(2),
            stack: StackTrace::default(),
        }
    }
}

impl core::fmt::Display for LeafError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "leaf")
    }
}

impl core::error::Error for LeafError {}

#[derive(Debug, StackError)]
pub struct GenericWrapper<T> {
    source: T,
    stack: StackTrace,
}

impl<T> GenericWrapper<T>
where
    T: StackErrorTrait,
{
    pub fn new(source: T) -> Self {
        Self {
            source,
            stack: StackTrace::default(),
        }
    }
}

impl<T> core::fmt::Display for GenericWrapper<T>
where
    T: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "generic")
    }
}

impl<T> core::error::Error for GenericWrapper<T> where
    T: StackErrorTrait + core::fmt::Display + core::fmt::Debug
{
}

#[derive(Debug, StackError)]
pub struct GenericEnd<E> {
    #[stack_error(end)]
    source: E,
}

impl<E: core::fmt::Display> core::fmt::Display for GenericEnd<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "generic end: {}", self.source)
    }
}

impl<E: core::error::Error> core::error::Error for GenericEnd<E> {}

#[derive(Debug, StackError)]
pub enum MixedEnum {
    NoSource {
        stack: StackTrace,
    },
    WithSource {
        #[source]
        inner: GenericWrapper<LeafError>,
    },
}

impl core::fmt::Display for MixedEnum {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MixedEnum::NoSource { .. } => write!(f, "no-source"),
            MixedEnum::WithSource { .. } => write!(f, "with-source"),
        }
    }
}

impl core::error::Error for MixedEnum {}

fn assert_stack_error<T: StackErrorTrait>() {}

pub fn smoke() {
    let wrapper = GenericWrapper::new(LeafError::new());
    let with_source = MixedEnum::WithSource { inner: wrapper };
    assert_stack_error::<GenericWrapper<LeafError>>();
    assert_stack_error::<GenericEnd<std::io::Error>>();
    assert_stack_error::<MixedEnum>();
    assert_eq!(with_source.iter().count(), 4);
}

fn main() {
    smoke();
}
