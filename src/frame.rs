use alloc::vec::Vec;
use core::panic::Location;

/// One entry of a captured call stack.
///
/// Two frames are equal when they name the same function at the same source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    function: &'static str,
    location: &'static Location<'static>,
}

impl Frame {
    /// Creates a frame for `function` at `location`.
    pub const fn new(function: &'static str, location: &'static Location<'static>) -> Self {
        Frame { function, location }
    }

    /// Creates a frame for `function` at the caller's source location.
    #[track_caller]
    pub fn caller(function: &'static str) -> Self {
        Frame::new(function, Location::caller())
    }

    /// Returns the function name.
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Returns the source location.
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl core::fmt::Display for Frame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}\n\t{}:{}",
            self.function,
            self.location.file(),
            self.location.line()
        )
    }
}

/// A captured call stack. Index 0 is the deepest frame, the last index is the program entry.
///
/// The [Display](core::fmt::Display) output prefixes every frame with a newline so it can be written
/// directly after a message:
///
/// ```text
/// failed to open foo
/// app::open_file
///     src/main.rs:12
/// app::main
///     src/main.rs:30
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StackTrace {
    frames: Vec<Frame>,
}

impl StackTrace {
    /// Creates a stack trace from frames ordered deepest first.
    pub fn new<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Frame>,
    {
        StackTrace {
            frames: frames.into_iter().collect(),
        }
    }

    /// Returns the frames, deepest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns a [Frames] writer over this trace.
    pub fn display(&self) -> Frames<'_> {
        Frames(&self.frames)
    }
}

impl From<Vec<Frame>> for StackTrace {
    fn from(frames: Vec<Frame>) -> Self {
        StackTrace { frames }
    }
}

impl FromIterator<Frame> for StackTrace {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        StackTrace::new(iter)
    }
}

impl core::fmt::Display for StackTrace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.display(), f)
    }
}

/// Helper for displaying a borrowed run of frames, e.g. a trimmed part of a [StackTrace].
#[derive(Debug, Clone, Copy)]
pub struct Frames<'a>(pub &'a [Frame]);

impl core::fmt::Display for Frames<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for frame in self.0 {
            write!(f, "\n{}", frame)?;
        }
        Ok(())
    }
}
