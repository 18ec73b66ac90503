use tracing::field::{Field, Visit};
use tracing_subscriber::{
  field::RecordFields,
  fmt::{
    format::Writer,
    FormatFields
  }
};

/// Writes an event as its message followed by any extra `name=value` fields. The `threshold` field is bookkeeping
/// for `ThresholdFilterLayer` and is never written; `critical = true` becomes a `[CRITICAL]` tag before the message.
pub(crate) struct MessageFormatter;

impl<'writer> FormatFields<'writer> for MessageFormatter {
  fn format_fields<R: RecordFields>(
    &self,
    writer: Writer<'writer>,
    fields: R,
  ) -> std::fmt::Result {
    let mut visitor = MessageVisitor { writer };
    fields.record(&mut visitor);
    Ok(())
  }
}

// Integer fields reach `record_debug` through the default `record_i64`/`record_u64`.
struct MessageVisitor<'writer> {
  writer: Writer<'writer>,
}

impl<'writer> Visit for MessageVisitor<'writer> {
  fn record_bool(&mut self, field: &Field, value: bool) {
    match field.name() {
      "critical" if value => { let _ = write!(self.writer, "[CRITICAL] "); }
      "critical"          => {}
      name                => { let _ = write!(self.writer, "{}={} ", name, value); }
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
    match field.name() {
      "message"   => { let _ = write!(self.writer, "{:?}", value); }
      "threshold" => {}
      name        => { let _ = write!(self.writer, "{}={:?} ", name, value); }
    }
  }
}
