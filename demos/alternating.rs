//! Messages and stacks are attached by separate wrappers, so the chain alternates between the two.

use stack_printer::{Frame, StackError, StackErrorExt, StackTrace};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[track_caller]
fn enter(function: &'static str, caller: &[Frame]) -> Vec<Frame> {
    let mut frames = vec![Frame::caller(function)];
    frames.extend_from_slice(caller);
    frames
}

#[derive(Debug, Error, StackError)]
enum AppError {
    #[error("EOF")]
    Eof {},
    #[error("{context}: {source}")]
    Message {
        context: &'static str,
        source: Box<AppError>,
    },
    #[error("{source}")]
    Traced {
        source: Box<AppError>,
        stack: StackTrace,
    },
}

impl AppError {
    fn wrap(self, context: &'static str, frames: Vec<Frame>) -> Self {
        let message = AppError::Message {
            context,
            source: Box::new(self),
        };
        AppError::Traced {
            source: Box::new(message),
            stack: frames.into(),
        }
    }
}

fn load_config(caller: &[Frame]) -> Result<(), AppError> {
    let frames = enter("alternating::load_config", caller);
    parse_file(&frames).map_err(|error| error.wrap("failed to load config", frames))
}

fn parse_file(caller: &[Frame]) -> Result<(), AppError> {
    let frames = enter("alternating::parse_file", caller);
    open_file(&frames).map_err(|error| error.wrap("failed to parse file", frames))
}

fn open_file(caller: &[Frame]) -> Result<(), AppError> {
    let frames = enter("alternating::open_file", caller);
    Err(AppError::Eof {}.wrap("failed to open foo", frames))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let main = enter("alternating::main", &[]);
    if let Err(error) = load_config(&main) {
        println!("stack with messages:");
        println!("{}", error.stack_with_messages());
        println!();
        println!("single stack:");
        println!("{}", error.single_stack());
    }
}
