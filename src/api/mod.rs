/*!

The public API of the library: the samples and the entry sequence that runs them.

*/

pub mod sample;
pub mod runner;

pub use sample::{
  LifecycleFinding,
  ReleaseDiscipline,
  Sample,
  SampleFeature,
  SampleFeatures,
  UnknownSample,
  HEAP_OPERAND,
  STACK_OPERAND
};
pub use runner::{run_sample, RunReport, SampleError};
