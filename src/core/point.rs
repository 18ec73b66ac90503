/*!

A `Point` is an ordered pair of `i32` coordinates with a pairwise sum.

## Overflow

The samples this crate reproduces never say what happens when a coordinate sum overflows. Here the policy is explicit:

 - `Point::checked_add` (and `Point::add_with(.., OverflowPolicy::Checked)`) reports `PointError::Overflow`, naming the
   axis and operands. This is what the entry sequence uses.
 - `Point::wrapping_add` and `Point::saturating_add` mirror the `i32` methods of the same name.
 - The `+` operator wraps, in debug and release builds alike. It never panics.

None of these mutate their operands; `Point` is `Copy`, so operands are taken by value.

*/

use std::{
  error::Error,
  fmt::{Debug, Display, Formatter},
  ops::Add
};

use crate::{
  abstractions::join_string,
  core::format::{FormatStyle, Formattable}
};


#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Point {
  pub x: i32,
  pub y: i32,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Axis {
  X,
  Y,
}

impl Display for Axis {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Axis::X => write!(f, "x"),
      Axis::Y => write!(f, "y"),
    }
  }
}

/// How `Point::add_with` treats a coordinate sum that does not fit in an `i32`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum OverflowPolicy {
  #[default]
  Checked,
  Wrapping,
  Saturating,
}

impl Point {
  pub const ORIGIN: Point = Point::new(0, 0);

  pub const fn new(x: i32, y: i32) -> Self {
    Point { x, y }
  }

  /// Pairwise sum, or `PointError::Overflow` for the first axis that overflows.
  pub fn checked_add(self, other: Point) -> Result<Point, PointError> {
    let x = self.x.checked_add(other.x).ok_or(PointError::Overflow {
      axis: Axis::X,
      lhs : self.x,
      rhs : other.x,
    })?;
    let y = self.y.checked_add(other.y).ok_or(PointError::Overflow {
      axis: Axis::Y,
      lhs : self.y,
      rhs : other.y,
    })?;

    Ok(Point { x, y })
  }

  pub fn wrapping_add(self, other: Point) -> Point {
    Point::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
  }

  pub fn saturating_add(self, other: Point) -> Point {
    Point::new(self.x.saturating_add(other.x), self.y.saturating_add(other.y))
  }

  /// Pairwise sum under the given overflow policy. Only `OverflowPolicy::Checked` can fail.
  pub fn add_with(self, other: Point, policy: OverflowPolicy) -> Result<Point, PointError> {
    match policy {
      OverflowPolicy::Checked    => self.checked_add(other),
      OverflowPolicy::Wrapping   => Ok(self.wrapping_add(other)),
      OverflowPolicy::Saturating => Ok(self.saturating_add(other)),
    }
  }
}

impl Add for Point {
  type Output = Point;

  fn add(self, rhs: Point) -> Point {
    self.wrapping_add(rhs)
  }
}

impl<'a> Add<&'a Point> for &'a Point {
  type Output = Point;

  fn add(self, rhs: &'a Point) -> Point {
    self.wrapping_add(*rhs)
  }
}

impl From<(i32, i32)> for Point {
  fn from((x, y): (i32, i32)) -> Self {
    Point::new(x, y)
  }
}

impl Formattable for Point {
  fn repr(&self, style: FormatStyle) -> String {
    match style {

      FormatStyle::Designated => {
        let fields = [format!(".x = {}", self.x), format!(".y = {}", self.y)];
        format!("{{{}}}", join_string(fields.iter(), ", "))
      }

      FormatStyle::Go => {
        format!("{{{}}}", join_string([self.x, self.y].iter(), " "))
      }

      FormatStyle::Debug => {
        format!("{:?}", self)
      }

    }
  }
}

impl Display for Point {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.repr(FormatStyle::Designated))
  }
}


pub enum PointError {
  Overflow {
    axis: Axis,
    lhs : i32,
    rhs : i32,
  }
}

impl Display for PointError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      PointError::Overflow { axis, lhs, rhs } => {
        write!(f, "{} coordinate overflowed: {} + {} does not fit in an i32", axis, lhs, rhs)
      }
    }
  }
}

impl Debug for PointError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for PointError {}


#[cfg(test)]
mod tests {
  use rand::Rng;
  use super::*;

  fn random_point(rng: &mut impl Rng, bound: i32) -> Point {
    Point::new(rng.gen_range(-bound..=bound), rng.gen_range(-bound..=bound))
  }

  #[test]
  fn sum_is_pairwise() {
    let a = Point::new(1, 2);
    let b = Point::new(4, 3);
    assert_eq!(a.checked_add(b).unwrap(), Point::new(5, 5));
    assert_eq!(a + b, Point::new(5, 5));
    assert_eq!(&a + &b, Point::new(5, 5));
    // Operands are untouched.
    assert_eq!(a, Point::new(1, 2));
    assert_eq!(b, Point::new(4, 3));
  }

  #[test]
  fn random_sums_are_pairwise_commutative_and_associative() {
    let mut rng = rand::thread_rng();
    // A third of i32::MAX keeps every sum of three in range.
    let bound = i32::MAX / 3;

    for _ in 0..1000 {
      let a = random_point(&mut rng, bound);
      let b = random_point(&mut rng, bound);
      let c = random_point(&mut rng, bound);

      let ab = a.checked_add(b).unwrap();
      assert_eq!(ab, Point::new(a.x + b.x, a.y + b.y));
      assert_eq!(ab, b.checked_add(a).unwrap());
      assert_eq!(
        ab.checked_add(c).unwrap(),
        a.checked_add(b.checked_add(c).unwrap()).unwrap()
      );
      assert_eq!(a.checked_add(Point::ORIGIN).unwrap(), a);
    }
  }

  #[test]
  fn checked_overflow_names_the_axis() {
    let a = Point::new(1, i32::MAX);
    let b = Point::new(1, 1);
    match a.checked_add(b) {
      Err(PointError::Overflow { axis, lhs, rhs }) => {
        assert_eq!(axis, Axis::Y);
        assert_eq!(lhs, i32::MAX);
        assert_eq!(rhs, 1);
      }
      Ok(p) => panic!("expected overflow, got {}", p),
    }

    let err = Point::new(i32::MIN, 0).checked_add(Point::new(-1, 0)).unwrap_err();
    assert_eq!(
      err.to_string(),
      "x coordinate overflowed: -2147483648 + -1 does not fit in an i32"
    );
  }

  #[test]
  fn operator_wraps_instead_of_panicking() {
    let max = Point::new(i32::MAX, 0);
    let min = Point::new(0, i32::MIN);
    let one = Point::new(1, 0);
    let neg = Point::new(0, -1);

    let sum = std::panic::catch_unwind(|| max + one);
    assert_eq!(sum.ok(), Some(Point::new(i32::MIN, 0)));
    assert_eq!(&max + &one, Point::new(i32::MIN, 0));

    let sum = std::panic::catch_unwind(|| min + neg);
    assert_eq!(sum.ok(), Some(Point::new(0, i32::MAX)));
    assert_eq!(&min + &neg, Point::new(0, i32::MAX));

    // The operator agrees with the explicit wrapping policy.
    assert_eq!(max + one, max.add_with(one, OverflowPolicy::Wrapping).unwrap());
  }

  #[test]
  fn overflow_policies() {
    let a = Point::new(i32::MAX, i32::MIN);
    let b = Point::new(1, -1);

    assert!(a.add_with(b, OverflowPolicy::Checked).is_err());
    assert_eq!(a.add_with(b, OverflowPolicy::Wrapping).unwrap(), Point::new(i32::MIN, i32::MAX));
    assert_eq!(a.add_with(b, OverflowPolicy::Saturating).unwrap(), Point::new(i32::MAX, i32::MIN));
    assert_eq!(OverflowPolicy::default(), OverflowPolicy::Checked);
  }

  #[test]
  fn representations() {
    let p = Point::new(5, 5);
    assert_eq!(p.repr(FormatStyle::Designated), "{.x = 5, .y = 5}");
    assert_eq!(p.repr(FormatStyle::Go), "{5 5}");
    assert_eq!(p.repr(FormatStyle::Debug), "Point { x: 5, y: 5 }");
    assert_eq!(p.to_string(), "{.x = 5, .y = 5}");

    let q = Point::from((-3, 12));
    assert_eq!(q.repr(FormatStyle::Designated), "{.x = -3, .y = 12}");
    assert_eq!(q.repr(FormatStyle::Go), "{-3 12}");
    assert_eq!((&q as &dyn Formattable).to_string(), "{.x = -3, .y = 12}");
  }
}
