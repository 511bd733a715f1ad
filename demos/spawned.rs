//! The innermost error is created on another thread, so its stack has nothing in common with the
//! stacks recorded by the caller. Both renderers fall back to the verbose output.
//!
//! Run with `RUST_LOG=stack_printer=debug` to see why.

use stack_printer::{Frame, StackError, StackErrorExt, StackTrace, Traced};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[track_caller]
fn enter(function: &'static str, caller: &[Frame]) -> Vec<Frame> {
    let mut frames = vec![Frame::caller(function)];
    frames.extend_from_slice(caller);
    frames
}

#[derive(Debug, Error)]
enum WorkerError {
    #[error("EOF")]
    Eof,
    #[error("failed to open foo in worker: {0}")]
    Open(#[source] Box<WorkerError>),
}

fn open_file_in_worker() -> Traced<WorkerError> {
    std::thread::spawn(|| {
        let frames = enter("spawned::open_file_in_worker::{{closure}}", &[]);
        Traced::new(
            WorkerError::Open(Box::new(WorkerError::Eof)),
            StackTrace::from(frames),
        )
    })
    .join()
    .expect("worker thread panicked")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let main = enter("spawned::main", &[]);
    let load = enter("spawned::load_config", &main);
    let error = LoadError {
        source: open_file_in_worker(),
        stack: StackTrace::from(load),
    };

    println!("single stack:");
    println!("{}", error.single_stack());
    println!();
    println!("stack with messages:");
    println!("{}", error.stack_with_messages());
}

#[derive(Debug, Error, StackError)]
#[error("failed to load config: {source}")]
struct LoadError {
    source: Traced<WorkerError>,
    stack: StackTrace,
}
