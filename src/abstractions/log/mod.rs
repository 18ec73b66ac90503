/*!

# Overview

The `log` module provides leveled logging filtered by a numeric verbosity threshold. The level says what _kind_ of
message is logged; the threshold says how _verbose_ the logger must be for the message to appear.

```
use point_samples::log::*;

// Only messages logged at threshold 1 or below are emitted.
set_global_logging_threshold(1);

warning!(2, "sample C never frees its allocation"); // Not emitted
info!(1, "running sample C++");                      // Emitted
debug!("a + b computed");                            // Emitted, threshold 0
```

## Threshold

The global logging threshold is a single number shared by all levels. A message logged at threshold `t` is emitted
only when `t <= get_global_logging_threshold()`. A message with threshold 0 is always emitted. The default threshold
is 1: the entry sequence reports what it is doing, and per-allocation tracing (threshold 4) stays quiet unless asked
for with `--verbosity`.

## Levels

Critical, Error, Warning, Info, Debug, Trace. Each message is prefixed with its level. Critical messages are
emitted at the error level and tagged `[CRITICAL]`.

## Output

Messages go to stderr. Stdout belongs to the sample's single result line.

# Macros

```ignore
level!(threshold, "format string", args...);
level!("format string", args...); // threshold 0
```

The logger is initialized lazily by the first macro invocation.

*/
mod formatter;
mod threshold_filter;
mod macros;

use std::{
  io::IsTerminal,
  sync::{
    atomic::{AtomicU8, Ordering},
    LazyLock
  }
};

use tracing::Subscriber;
use tracing_subscriber::{
  fmt::{self, MakeWriter},
  layer::SubscriberExt,
  Registry
};

use threshold_filter::ThresholdFilterLayer;
use formatter::MessageFormatter;
pub use macros::*;

/// Threshold used until `set_global_logging_threshold` is called.
pub const DEFAULT_LOGGING_THRESHOLD: u8 = 1;

static INIT_LOGGER: LazyLock<()> = LazyLock::new(|| {
  let subscriber = build_subscriber(std::io::stderr, std::io::stderr().is_terminal());

  // Another subscriber may already be installed by an embedding program; in that case it wins.
  let _ = tracing::subscriber::set_global_default(subscriber);
});

/// The threshold filter and message formatter in front of `make_writer`. Colour codes are written only when `ansi`.
pub(crate) fn build_subscriber<W>(make_writer: W, ansi: bool) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
  Registry::default()
      .with(ThresholdFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(MessageFormatter)
            .with_target(false)
            .without_time()
            .with_ansi(ansi)
            .with_writer(make_writer),
      )
}

/// This does not need to be called directly. Initializes the logging system.
pub fn init_logger() {
  LazyLock::force(&INIT_LOGGER);
}

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(DEFAULT_LOGGING_THRESHOLD);

/// Sets the global threshold. May be called before or after the logger is initialized.
pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

/// Retrieves the global threshold.
pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}


/// Test helpers: output capture, and a lock for tests that change the global threshold.
#[cfg(test)]
pub(crate) mod capture {
  use std::{
    io,
    sync::{Arc, Mutex, MutexGuard}
  };

  static THRESHOLD_LOCK: Mutex<()> = Mutex::new(());

  /// Held by any test that changes the global threshold.
  pub(crate) fn lock_threshold() -> MutexGuard<'static, ()> {
    THRESHOLD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  #[derive(Clone, Default)]
  struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

  impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  /// Runs `f` with this thread's events going to a buffer, without colour, and returns what was written.
  pub(crate) fn captured_output(f: impl FnOnce()) -> String {
    let buffer     = SharedBuffer::default();
    let writer     = buffer.clone();
    let subscriber = super::build_subscriber(move || writer.clone(), false);

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
  }
}
