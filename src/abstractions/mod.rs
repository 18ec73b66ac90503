/*!

Low-level helpers that the sample code is built on: manual heap ownership, threshold-filtered logging, and string
joining.

*/

mod heap;
mod string_join;

// Logging
pub mod log;

// Raw allocation macros and the owning handle built on them.
pub use heap::{heap_construct, heap_destroy, AllocationLedger, HeapCell};

// Join sequences with a separator
pub use string_join::join_string;
