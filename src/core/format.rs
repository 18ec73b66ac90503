/*!

Each sample prints its point the way its own language's standard output facilities would. This module provides a
unified API for choosing between those representations.

*/


use std::fmt::Display;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum FormatStyle {
  #[default]
  Designated, // C designated-initializer form: `{.x = 5, .y = 5}`
  Go,         // Go's `fmt.Println` of a struct: `{5 5}`
  Debug,      // Rust's `{:?}`: `Point { x: 5, y: 5 }`
}

pub trait Formattable {
  /// Writes a text representation of `self` according to the given `FormatStyle`.
  /// Use `format!` and friends to create a string.
  fn repr(&self, style: FormatStyle) -> String;
}

/**
Any type that implements `Formattable` can trivially implement `Display` as in this example:

```ignore
impl Display for Point {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.repr(FormatStyle::Designated))
  }
}
```
*/
impl Display for dyn Formattable {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", Formattable::repr(self, FormatStyle::default()))
  }
}
