/*!

The presentation samples, described as data. Every sample builds `a = (1, 2)`, heap-allocates `b = (4, 3)`, prints
`a + b`, and is supposed to give `b` back. They differ in syntax, in how (or whether) the allocation is released, and
in what the printed line looks like.

`Sample::audit` reports what a sample's release discipline gets wrong. The C sample `malloc`s without a `free`; that
gap is reported as `LifecycleFinding::UnreleasedAllocation` rather than reproduced. When a sample is run through
`run_sample`, its allocation is always released.

*/

use std::{
  fmt::{Display, Formatter},
  str::FromStr
};

use enumflags2::{bitflags, make_bitflags, BitFlags};

use crate::core::{FormatStyle, Point};

/// The stack-resident operand every sample starts from.
pub const STACK_OPERAND: Point = Point::new(1, 2);
/// The operand every sample places on the heap.
pub const HEAP_OPERAND : Point = Point::new(4, 3);


#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Sample {
  C,
  Cpp,
  Go,
  Rust,
}

/// Language features a sample puts on its slide.
#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SampleFeature {
  /// A constructor initializes the point (`point(int, int)`).
  Constructor,
  /// Addition is a method on the point rather than a free function.
  Method,
  /// The second operand lives on the heap.
  HeapAllocation,
  /// The source releases the allocation itself (`delete`).
  ExplicitRelease,
  /// A garbage collector reclaims the allocation.
  GarbageCollected,
  /// An owning box frees the allocation when it goes out of scope.
  OwnedBox,
}

pub type SampleFeatures = BitFlags<SampleFeature>;

impl SampleFeature {
  //	Conjunctions
  #![allow(non_upper_case_globals)]

  /// Any one of these means the allocation is given back.
  pub const Reclaiming: SampleFeatures = make_bitflags!(
    SampleFeature::{
      ExplicitRelease
      | GarbageCollected
      | OwnedBox
    }
  );
}

/// How a sample gives back its heap allocation.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ReleaseDiscipline {
  /// The source frees the allocation by hand.
  Explicit,
  /// The source allocates and never frees.
  Omitted,
  /// A garbage collector reclaims the allocation.
  Collected,
  /// Scope exit frees the allocation.
  Owned,
}

/// Something a sample's memory handling gets wrong.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LifecycleFinding {
  /// The sample allocates and exits without releasing.
  UnreleasedAllocation { sample: Sample },
}

impl Display for LifecycleFinding {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      LifecycleFinding::UnreleasedAllocation { sample } => {
        write!(f, "the {} sample allocates its second point and never releases it", sample)
      }
    }
  }
}

impl Sample {
  pub const ALL: [Sample; 4] = [Sample::C, Sample::Cpp, Sample::Go, Sample::Rust];

  pub fn name(self) -> &'static str {
    match self {
      Sample::C    => "C",
      Sample::Cpp  => "C++",
      Sample::Go   => "Go",
      Sample::Rust => "Rust",
    }
  }

  pub fn features(self) -> SampleFeatures {
    match self {
      Sample::C    => make_bitflags!(SampleFeature::{HeapAllocation}),
      Sample::Cpp  => make_bitflags!(SampleFeature::{Constructor | Method | HeapAllocation | ExplicitRelease}),
      Sample::Go   => make_bitflags!(SampleFeature::{Method | HeapAllocation | GarbageCollected}),
      Sample::Rust => make_bitflags!(SampleFeature::{Method | HeapAllocation | OwnedBox}),
    }
  }

  pub fn release_discipline(self) -> ReleaseDiscipline {
    let features = self.features();
    if features.contains(SampleFeature::ExplicitRelease) {
      ReleaseDiscipline::Explicit
    } else if features.contains(SampleFeature::GarbageCollected) {
      ReleaseDiscipline::Collected
    } else if features.contains(SampleFeature::OwnedBox) {
      ReleaseDiscipline::Owned
    } else {
      ReleaseDiscipline::Omitted
    }
  }

  pub fn format_style(self) -> FormatStyle {
    match self {
      Sample::C | Sample::Cpp => FormatStyle::Designated,
      Sample::Go              => FormatStyle::Go,
      Sample::Rust            => FormatStyle::Debug,
    }
  }

  /// Findings about this sample's memory handling. Empty when every allocation is reclaimed.
  pub fn audit(self) -> Vec<LifecycleFinding> {
    let features = self.features();
    let mut findings = Vec::new();

    if features.contains(SampleFeature::HeapAllocation) && !features.intersects(SampleFeature::Reclaiming) {
      findings.push(LifecycleFinding::UnreleasedAllocation { sample: self });
    }

    findings
  }
}

impl Display for Sample {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// Returned when a sample name is not recognized.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnknownSample(pub String);

impl Display for UnknownSample {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "unknown sample \"{}\"; expected one of c, cpp, go, rust", self.0)
  }
}

impl std::error::Error for UnknownSample {}

impl FromStr for Sample {
  type Err = UnknownSample;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "c"                 => Ok(Sample::C),
      "cpp" | "c++"       => Ok(Sample::Cpp),
      "go"                => Ok(Sample::Go),
      "rust" | "rs"       => Ok(Sample::Rust),
      _                   => Err(UnknownSample(s.to_string())),
    }
  }
}
