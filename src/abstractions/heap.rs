/*!

# Heap Ownership

The samples this crate models each put exactly one point on the heap. In the C-like samples that allocation is made
and given back by hand; here the same pairing is expressed twice:

- **`heap_construct!` / `heap_destroy!`:** raw, C-style allocation and release of a boxed value through a `*mut T`.
  They are the primitives; nothing stops a caller from leaking or double-freeing with them.
- **`HeapCell<T>`:** the sole owning handle of one allocation made with `heap_construct!`. Dropping the handle, or
  calling `HeapCell::release`, runs `heap_destroy!` exactly once. There is no path through which the allocation can
  be left unreclaimed.

An optional `AllocationLedger` can be attached to a `HeapCell` to count allocations and releases. The ledger is how
the entry sequence and the tests check that every allocation is paired with exactly one release.

```
use point_samples::abstractions::{AllocationLedger, HeapCell};

let ledger = AllocationLedger::new();
{
  let cell = HeapCell::tracked(42, &ledger);
  assert_eq!(*cell, 42);
  assert_eq!(ledger.outstanding(), 1);
}
assert!(ledger.is_balanced());
```

*/

use std::{
  cell::Cell,
  fmt::{Debug, Formatter},
  marker::PhantomData,
  mem::ManuallyDrop,
  ops::{Deref, DerefMut},
  ptr::NonNull
};

#[cfg(feature = "heap_debug")]
use crate::log::trace;


/// Construct a new mutable pointer to a new heap allocated object. It is up to the
/// caller to destroy the object with `heap_destroy!`, or to hand the pointer to a
/// `HeapCell`, which does so on drop.
#[macro_export]
macro_rules! heap_construct {
    ($expr:expr) => {{
        // Ownership leaves the `Box` here; nothing frees the value automatically.
        Box::into_raw(Box::new($expr))
    }};
}
pub use heap_construct;


/// Destroy a heap allocated object pointed to by a mutable pointer returned by
/// `heap_construct!`. The caller guarantees the pointer is live, unaliased, and
/// destroyed at most once.
#[macro_export]
macro_rules! heap_destroy {
    ($ptr:expr) => {{
        // Only raw mutable pointers are accepted.
        let ptr: *mut _ = $ptr;
        drop(unsafe { Box::from_raw(ptr) });
    }};
}
pub use heap_destroy;


/// Counts allocations made and released through `HeapCell`s attached to it.
#[derive(Default)]
pub struct AllocationLedger {
  allocations: Cell<usize>,
  releases   : Cell<usize>,
}

impl AllocationLedger {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn allocations(&self) -> usize {
    self.allocations.get()
  }

  pub fn releases(&self) -> usize {
    self.releases.get()
  }

  /// Allocations not yet released.
  pub fn outstanding(&self) -> usize {
    self.allocations.get() - self.releases.get()
  }

  /// True when every allocation recorded so far has been released exactly once.
  pub fn is_balanced(&self) -> bool {
    self.allocations.get() == self.releases.get()
  }

  fn record_allocation(&self) {
    self.allocations.set(self.allocations.get() + 1);
  }

  fn record_release(&self) {
    // A release without a matching allocation would mean a double free.
    debug_assert!(self.releases.get() < self.allocations.get());
    self.releases.set(self.releases.get() + 1);
  }
}

impl Debug for AllocationLedger {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "AllocationLedger {{ allocations: {}, releases: {} }}", self.allocations(), self.releases())
  }
}


/// Owning handle to a single heap allocation. The allocation is released exactly once: either explicitly through
/// `HeapCell::release`, or when the handle is dropped.
pub struct HeapCell<'l, T> {
  ptr   : NonNull<T>,
  ledger: Option<&'l AllocationLedger>,
  _owns : PhantomData<T>,
}

impl<T> HeapCell<'static, T> {
  /// Moves `value` to the heap without tracking.
  pub fn new(value: T) -> Self {
    HeapCell::allocate(value, None)
  }
}

impl<'l, T> HeapCell<'l, T> {
  /// Moves `value` to the heap and records the allocation in `ledger`.
  pub fn tracked(value: T, ledger: &'l AllocationLedger) -> Self {
    HeapCell::allocate(value, Some(ledger))
  }

  fn allocate(value: T, ledger: Option<&'l AllocationLedger>) -> Self {
    let raw: *mut T = heap_construct!(value);
    // `Box::into_raw` never returns null.
    let ptr = unsafe { NonNull::new_unchecked(raw) };

    if let Some(ledger) = ledger {
      ledger.record_allocation();
    }
    #[cfg(feature = "heap_debug")]
    trace!(4, "heap_construct: {} bytes at {:p}", std::mem::size_of::<T>(), raw);

    HeapCell { ptr, ledger, _owns: PhantomData }
  }

  /// Frees the allocation now, handing the value back to the caller. This is the counterpart of C++'s `delete`.
  pub fn release(self) -> T {
    let this  = ManuallyDrop::new(self);
    let boxed = unsafe { Box::from_raw(this.ptr.as_ptr()) };
    this.note_release();
    *boxed
  }

  fn note_release(&self) {
    if let Some(ledger) = self.ledger {
      ledger.record_release();
    }
    #[cfg(feature = "heap_debug")]
    trace!(4, "heap_destroy: {:p}", self.ptr.as_ptr());
  }
}

impl<T> Drop for HeapCell<'_, T> {
  fn drop(&mut self) {
    heap_destroy!(self.ptr.as_ptr());
    self.note_release();
  }
}

impl<T> Deref for HeapCell<'_, T> {
  type Target = T;

  fn deref(&self) -> &T {
    unsafe { self.ptr.as_ref() }
  }
}

impl<T> DerefMut for HeapCell<'_, T> {
  fn deref_mut(&mut self) -> &mut T {
    unsafe { self.ptr.as_mut() }
  }
}

impl<T: Debug> Debug for HeapCell<'_, T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_tuple("HeapCell").field(&**self).finish()
  }
}
