/*!

The entry sequence every sample shares: build `a` on the stack, put `b` on the heap, add them, print the sum on one
line, and release `b`.

```
use point_samples::api::{run_sample, Sample};
use point_samples::abstractions::AllocationLedger;

let ledger = AllocationLedger::new();
let mut out = Vec::new();
let report = run_sample(Sample::Cpp, &mut out, Some(&ledger)).unwrap();

assert_eq!(out, b"{.x = 5, .y = 5}\n");
assert_eq!(report.allocations, 1);
assert_eq!(report.releases, 1);
```

*/

use std::{
  error::Error,
  fmt::{Debug, Display, Formatter},
  io::Write
};

use crate::{
  abstractions::{AllocationLedger, HeapCell},
  api::sample::{Sample, HEAP_OPERAND, STACK_OPERAND},
  core::{Formattable, Point, PointError},
  log::{debug, info, warning}
};


/// What a run produced.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RunReport {
  pub sample     : Sample,
  pub sum        : Point,
  /// Allocations made during the run.
  pub allocations: usize,
  /// Releases made during the run.
  pub releases   : usize,
}

impl RunReport {
  pub fn is_balanced(&self) -> bool {
    self.allocations == self.releases
  }
}

/// Runs `sample`, writing its single result line to `out`.
///
/// If `ledger` is given, the heap allocation is recorded in it. The report counts only this run's events.
pub fn run_sample<W: Write>(
  sample: Sample,
  out   : &mut W,
  ledger: Option<&AllocationLedger>,
) -> Result<RunReport, SampleError> {
  for finding in sample.audit() {
    warning!(1, "{}; releasing it anyway", finding);
  }
  info!(2, "running the {} sample", sample);

  let local  = AllocationLedger::new();
  let ledger = ledger.unwrap_or(&local);
  let (allocations_before, releases_before) = (ledger.allocations(), ledger.releases());

  let sum = run_with_ledger(sample, out, ledger)?;
  debug!(3, "{} sample finished: {:?}", sample, ledger);

  Ok(RunReport {
    sample,
    sum,
    allocations: ledger.allocations() - allocations_before,
    releases   : ledger.releases() - releases_before,
  })
}

fn run_with_ledger<W: Write>(sample: Sample, out: &mut W, ledger: &AllocationLedger) -> Result<Point, SampleError> {
  let a = STACK_OPERAND;
  let b = HeapCell::tracked(HEAP_OPERAND, ledger);

  // On error, `b` is released when it goes out of scope.
  let c = a.checked_add(*b)?;
  writeln!(out, "{}", c.repr(sample.format_style()))?;
  out.flush()?;

  b.release();
  Ok(c)
}


pub enum SampleError {
  Point(PointError),
  Io(std::io::Error),
}

impl Display for SampleError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      SampleError::Point(e) => write!(f, "could not add the sample's points: {}", e),
      SampleError::Io(e)    => write!(f, "could not write the sample's result: {}", e),
    }
  }
}

impl Debug for SampleError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for SampleError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      SampleError::Point(e) => Some(e),
      SampleError::Io(e)    => Some(e),
    }
  }
}

impl From<PointError> for SampleError {
  fn from(e: PointError) -> Self {
    SampleError::Point(e)
  }
}

impl From<std::io::Error> for SampleError {
  fn from(e: std::io::Error) -> Self {
    SampleError::Io(e)
  }
}
