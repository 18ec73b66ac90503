/*!

Slide-deck samples contrasting how a handful of languages define a 2D point, put one on the heap, add two points, and
print the sum `{.x = 5, .y = 5}`.

```
use point_samples::{api::Sample, run_sample};

let mut out = Vec::new();
run_sample(Sample::C, &mut out, None).unwrap();
assert_eq!(String::from_utf8(out).unwrap(), "{.x = 5, .y = 5}\n");
```

*/

pub mod api;
pub mod abstractions;
pub mod core;

// We re-export abstractions that are meant to be used publicly.
pub use abstractions::log;
pub use crate::core::{FormatStyle, Formattable, OverflowPolicy, Point, PointError};
pub use api::run_sample;
