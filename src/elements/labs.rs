//! Axis labels.

use crate::element::{Element, ElementKind};
use crate::options::Options;
use super::apply;


//------------ AxisLabel -----------------------------------------------------

/// Builds an axis label element.
///
/// The same builder serves both axes; [`x`][Self::x] and [`y`][Self::y]
/// pick which one.
#[derive(Clone, Debug)]
pub struct AxisLabel {
    kind: ElementKind,
    text: Option<String>,
    size: Option<f64>,
    rotation: Option<f64>,
    space: Option<f64>,
}

impl AxisLabel {
    /// Creates a label builder for the x axis.
    pub fn x() -> Self {
        Self::new(ElementKind::Xlab)
    }

    /// Creates a label builder for the y axis.
    pub fn y() -> Self {
        Self::new(ElementKind::Ylab)
    }

    fn new(kind: ElementKind) -> Self {
        AxisLabel {
            kind,
            text: None,
            size: None,
            rotation: None,
            space: None,
        }
    }

    /// Sets the label text.
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.text = Some(value.into());
        self
    }

    /// Sets the size of the label.
    pub fn size(mut self, value: f64) -> Self {
        self.size = Some(value);
        self
    }

    /// Sets the rotation of the label in degrees.
    pub fn rotation(mut self, value: f64) -> Self {
        self.rotation = Some(value);
        self
    }

    /// Sets the extra space reserved for the label.
    pub fn space(mut self, value: f64) -> Self {
        self.space = Some(value);
        self
    }

    /// Finishes the builder into an axis label element.
    pub fn finish(self, _options: &Options) -> Element {
        let mut element = Element::new(self.kind);
        apply(&mut element, "text", self.text, "");
        apply(&mut element, "size", self.size, 0.8);
        apply(&mut element, "rotation", self.rotation, 0.);
        apply(&mut element, "space", self.space, 0.);
        element
    }
}


//============ Tests =========================================================
