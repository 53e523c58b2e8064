//! Value Pipelines
//!
//! Threads a value through a chain of functions, left to right.

/// A value waiting for the next stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe<T>(T);

impl<T> Pipe<T> {
    pub fn new(value: T) -> Self {
        Pipe(value)
    }

    /// Feed the value to `func`
    pub fn pipe<R, F>(self, func: F) -> Pipe<R>
    where
        F: FnOnce(T) -> R,
    {
        Pipe(func(self.0))
    }

    /// Value at the end of the chain
    pub fn value(self) -> T {
        self.0
    }
}
