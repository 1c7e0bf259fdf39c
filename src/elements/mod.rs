//! The element constructors.
//!
//! One builder per element kind. A builder starts out with nothing set,
//! records every explicitly supplied option, and produces the finished
//! [`Element`][crate::element::Element] through its `finish` method, which
//! fills in the defaults for everything the caller left out. Some defaults
//! depend on other options of the same element and are computed after all
//! explicit values are known.

pub use self::attributes::{
    mouse_coordinates, Compass, Credits, Logo, Minimap, ScaleBar
};
pub use self::facets::Facets;
pub use self::grid::Grid;
pub use self::labs::AxisLabel;

mod attributes;
mod facets;
mod grid;
mod labs;

use crate::element::Element;
use crate::value::Value;


//------------ Helpers -------------------------------------------------------

/// Stores one option, falling back to its default.
///
/// An explicitly supplied value is recorded in the element's call list
/// under the option's canonical name.
fn apply<V: Into<Value>, D: Into<Value>>(
    element: &mut Element, name: &str, explicit: Option<V>, default: D,
) {
    match explicit {
        Some(value) => {
            element.insert(name, value);
            element.mark_called(name);
        }
        None => element.insert(name, default),
    }
}
