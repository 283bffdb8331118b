use thiserror::Error;

/// Errors produced by queue operations.
///
/// The only recoverable failure a min-heap can hit is asking for the minimum
/// of an empty queue. A failed dequeue leaves the queue untouched: still
/// empty, still usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("cannot dequeue from an empty queue")]
    Empty,
}
