//! Every layer adds a message and records the stack it was created on.
//!
//! Run with `RUST_LOG=stack_printer=debug` to see when a renderer falls back.

use stack_printer::{Frame, StackError, StackErrorExt, StackTrace};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[track_caller]
fn enter(function: &'static str, caller: &[Frame]) -> Vec<Frame> {
    let mut frames = vec![Frame::caller(function)];
    frames.extend_from_slice(caller);
    frames
}

#[derive(Debug, Error)]
#[error("EOF")]
struct Eof;

#[derive(Debug, Error, StackError)]
#[error("failed to open foo: {source}")]
struct OpenError {
    #[stack_error(end)]
    source: Eof,
    stack: StackTrace,
}

#[derive(Debug, Error, StackError)]
#[error("failed to parse file: {source}")]
struct ParseError {
    source: OpenError,
    stack: StackTrace,
}

#[derive(Debug, Error, StackError)]
#[error("failed to load config: {source}")]
struct ConfigError {
    source: ParseError,
    stack: StackTrace,
}

fn load_config(caller: &[Frame]) -> Result<(), ConfigError> {
    let frames = enter("wrapped::load_config", caller);
    parse_file(&frames).map_err(|source| ConfigError {
        source,
        stack: StackTrace::new(frames.iter().copied()),
    })
}

fn parse_file(caller: &[Frame]) -> Result<(), ParseError> {
    let frames = enter("wrapped::parse_file", caller);
    open_file(&frames).map_err(|source| ParseError {
        source,
        stack: StackTrace::new(frames.iter().copied()),
    })
}

fn open_file(caller: &[Frame]) -> Result<(), OpenError> {
    let frames = enter("wrapped::open_file", caller);
    Err(OpenError {
        source: Eof,
        stack: frames.into(),
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let main = enter("wrapped::main", &[]);
    if let Err(error) = load_config(&main) {
        println!("Display: {error}");
        println!();
        println!("single stack:");
        println!("{}", error.single_stack());
        println!();
        println!("verbose:");
        println!("{}", error.verbose());
    }
}
