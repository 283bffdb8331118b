//! A minimum-oriented priority queue backed by a binary heap.
//!
//! [`MinHeap`] keeps its elements in a contiguous `Vec` encoding a complete
//! binary tree, repaired after every mutation by a sift-up or sift-down walk.
//! It is a plain single-threaded container: no locking, no persistence, no
//! decrease-key. Callers that need sharing wrap it in a mutex themselves.
//!
//! ```
//! use minpq::MinHeap;
//!
//! let mut pq = MinHeap::new();
//! pq.enqueue(5);
//! pq.enqueue(3);
//! pq.enqueue(8);
//!
//! assert_eq!(pq.peek(), Some(&3));
//! assert_eq!(pq.dequeue(), Ok(3));
//! assert_eq!(pq.dequeue(), Ok(5));
//! assert_eq!(pq.dequeue(), Ok(8));
//! assert!(pq.dequeue().is_err());
//! ```

mod error;
mod min_heap;

pub use error::HeapError;
pub use min_heap::MinHeap;
