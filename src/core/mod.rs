/*!

The point type and the ways of printing it.

*/

pub mod format;
pub mod point;

pub use format::{FormatStyle, Formattable};
pub use point::{Axis, OverflowPolicy, Point, PointError};
