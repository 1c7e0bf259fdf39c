//! Map elements.
//!
//! An element is one tagged configuration fragment of a map: a grid, a
//! compass, a credits text, and so on. Its payload is a mapping from option
//! name to [`Value`] in which every key carries the element kind's short
//! prefix. The prefix keeps keys globally unique when the rendering stage
//! later flattens a whole specification into one namespace.
//!
//! Besides the payload an element records which options the caller supplied
//! explicitly. The rendering stage needs this to tell a user override from
//! a defaulted value; this crate only carries the list along.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use crate::value::Value;


//------------ ElementKind ---------------------------------------------------

/// The kind of a map element.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize
)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Small multiples of the map.
    Facets,

    /// Coordinate grid lines and labels.
    Grid,

    /// A credits text.
    Credits,

    /// A logo image.
    Logo,

    /// A scale bar.
    ScaleBar,

    /// A compass rose.
    Compass,

    /// The label of the x axis.
    Xlab,

    /// The label of the y axis.
    Ylab,

    /// A minimap in interactive display.
    Minimap,

    /// Mouse coordinate read-out in interactive display.
    MouseCoordinates,
}

impl ElementKind {
    /// Returns the prefix for the element's option keys.
    ///
    /// The prefix includes the trailing dot.
    pub fn prefix(self) -> &'static str {
        match self {
            ElementKind::Facets => "facets.",
            ElementKind::Grid => "grid.",
            ElementKind::Credits => "credits.",
            ElementKind::Logo => "logo.",
            ElementKind::ScaleBar => "scale.",
            ElementKind::Compass => "compass.",
            ElementKind::Xlab => "xlab.",
            ElementKind::Ylab => "ylab.",
            ElementKind::Minimap => "minimap.",
            ElementKind::MouseCoordinates => "mouse.",
        }
    }
}


//------------ Element -------------------------------------------------------

/// One tagged, namespaced configuration fragment of a map.
///
/// Elements are produced by the constructors in [`crate::elements`] and are
/// immutable afterwards. They are combined into a [`MapSpec`] via stacking.
///
/// [`MapSpec`]: crate::spec::MapSpec
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Element {
    /// The kind of the element.
    kind: ElementKind,

    /// The options of the element, keys prefixed with the kind's prefix.
    options: IndexMap<String, Value>,

    /// The canonical names of the options the caller supplied explicitly.
    called: SmallVec<[String; 8]>,
}

impl Element {
    /// Creates a new, empty element of the given kind.
    pub(crate) fn new(kind: ElementKind) -> Self {
        Element {
            kind,
            options: IndexMap::new(),
            called: SmallVec::new(),
        }
    }

    /// Inserts an option under its canonical, unprefixed name.
    pub(crate) fn insert(
        &mut self, name: &str, value: impl Into<Value>
    ) {
        self.options.insert(
            format!("{}{}", self.kind.prefix(), name), value.into()
        );
    }

    /// Records that the caller supplied the named option explicitly.
    pub(crate) fn mark_called(&mut self, name: &str) {
        if !self.was_called(name) {
            self.called.push(name.into())
        }
    }

    /// Returns the kind of the element.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Returns an option's value under its canonical, unprefixed name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.options.get(
            format!("{}{}", self.kind.prefix(), name).as_str()
        )
    }

    /// Returns the full, prefixed payload of the element.
    pub fn options(&self) -> &IndexMap<String, Value> {
        &self.options
    }

    /// Returns the canonical names of the explicitly supplied options.
    pub fn called(&self) -> &[String] {
        &self.called
    }

    /// Returns whether the named option was supplied explicitly.
    pub fn was_called(&self, name: &str) -> bool {
        self.called.iter().any(|item| item == name)
    }
}


//============ Tests =========================================================
