use std::fmt::Debug;
use tracing::{
  field::{Field, Visit},
  Event,
  Subscriber
};
use tracing_subscriber::{
  Layer,
  layer::Context,
  registry::LookupSpan
};

use super::get_global_logging_threshold;

/// A layer that drops every event whose `threshold` field exceeds the global logging threshold. Events without a
/// `threshold` field, e.g. from dependencies logging through `tracing` directly, are treated as threshold 0.
pub(crate) struct ThresholdFilterLayer;

impl<S> Layer<S> for ThresholdFilterLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
  fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
    let mut visitor = ThresholdVisitor { threshold: None };
    event.record(&mut visitor);

    visitor.threshold.unwrap_or(0) <= get_global_logging_threshold()
  }
}

/// Extracts the `threshold` field from an event. The logging macros only pass integer literals, which arrive as
/// `i64` (or `u64` when suffixed unsigned); anything else is a misuse of the macros.
struct ThresholdVisitor {
  threshold: Option<u8>,
}

impl ThresholdVisitor {
  fn accept(&mut self, value: impl TryInto<u8> + Debug + Copy) {
    match value.try_into() {
      Ok(threshold) => self.threshold = Some(threshold),
      Err(_)        => panic!("Invalid threshold value supplied to the logger: {:?}", value),
    }
  }
}

impl Visit for ThresholdVisitor {
  fn record_i64(&mut self, field: &Field, value: i64) {
    if field.name() == "threshold" {
      self.accept(value);
    }
  }

  fn record_u64(&mut self, field: &Field, value: u64) {
    if field.name() == "threshold" {
      self.accept(value);
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
    if field.name() == "threshold" {
      panic!("Invalid threshold value supplied to the logger: {:?}", value);
    }
  }
}
