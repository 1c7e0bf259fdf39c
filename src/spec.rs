//! Composed map specifications.
//!
//! A map specification is an ordered sequence of [`Element`]s. The order is
//! significant: it is the draw order, with later elements drawn on top.
//! Nothing is merged or deduplicated; two grids stay two grids.
//!
//! Specifications are combined with [`MapSpec::stack`]. The operator is a
//! plain concatenation except for specifications carrying the quick-map
//! marker, which are dropped from the result.

use serde::{Deserialize, Serialize};
use crate::element::Element;
use crate::options::Options;


//------------ MapSpec -------------------------------------------------------

/// An ordered sequence of elements representing a composed map.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MapSpec {
    /// The elements in draw order.
    elements: Vec<Element>,

    /// Was this specification produced by the quick-map entry point?
    ///
    /// Quick maps carry no explicit data layer. The marker only affects
    /// stacking and never survives it.
    #[serde(default)]
    shortcut: bool,
}

impl MapSpec {
    /// Creates an empty specification.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates an empty specification carrying the quick-map marker.
    ///
    /// Used by simplified entry points that produce a map without an
    /// explicit data layer.
    pub fn quick() -> Self {
        MapSpec { elements: Vec::new(), shortcut: true }
    }

    /// Returns whether the specification carries the quick-map marker.
    pub fn is_quick(&self) -> bool {
        self.shortcut
    }

    /// Stacks another element or specification on top of this one.
    ///
    /// If either operand carries the quick-map marker, it is discarded and
    /// the other operand returned, with an advisory warning if enabled.
    /// Otherwise the result is the concatenation of the two sequences. The
    /// result never carries the marker.
    pub fn stack(
        self, other: impl Into<MapSpec>, options: &Options
    ) -> MapSpec {
        let other = other.into();
        if self.shortcut {
            options.warn(
                "stacking onto a quick map: the quick map is discarded"
            );
            return MapSpec { shortcut: false, .. other }
        }
        if other.shortcut {
            options.warn(
                "stacking a quick map: the quick map is discarded"
            );
            return MapSpec { shortcut: false, .. self }
        }
        let mut elements = self.elements;
        elements.extend(other.elements);
        MapSpec { elements, shortcut: false }
    }

    /// Returns the elements of the specification in draw order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the specification contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl From<Element> for MapSpec {
    fn from(element: Element) -> Self {
        MapSpec { elements: vec![element], shortcut: false }
    }
}

impl FromIterator<Element> for MapSpec {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        MapSpec {
            elements: iter.into_iter().collect(),
            shortcut: false,
        }
    }
}

impl IntoIterator for MapSpec {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a MapSpec {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}


//============ Tests =========================================================
