use std::fmt::{Display, Write};

/// Join a list of things that can be displayed with a given separator, e.g. the fields of a point:
///
///     # use point_samples::abstractions::join_string;
///     assert_eq!(join_string([".x = 5", ".y = 5"].iter(), ", "), ".x = 5, .y = 5");
pub fn join_string<T: Display>(mut iter: impl Iterator<Item = T>, sep: &str) -> String {
  let mut joined = String::new();

  if let Some(first) = iter.next() {
    let _ = write!(joined, "{}", first);
    for item in iter {
      let _ = write!(joined, "{}{}", sep, item);
    }
  }

  joined
}

#[cfg(test)]
mod tests {
  use crate::abstractions::string_join::join_string;

  #[test]
  fn join_string_test() {
    assert_eq!(join_string([5, 5].iter(), " "), "5 5");
    assert_eq!(join_string([-3].iter(), ", "), "-3");
    assert_eq!(join_string(std::iter::empty::<i32>(), ", "), "");
  }
}
