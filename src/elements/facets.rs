//! Small multiples.

use crate::element::{Element, ElementKind};
use crate::options::Options;
use crate::value::Value;
use super::apply;


//------------ Facets --------------------------------------------------------

/// The per-aesthetic free-scale switches, in canonical order.
const FREE_SCALES: &[&str] = &[
    "free.scales.fill",
    "free.scales.symbol.col",
    "free.scales.symbol.size",
    "free.scales.line.col",
    "free.scales.line.lwd",
    "free.scales.raster",
    "free.scales.text.col",
];

/// Builds a facets element.
///
/// Facets split the map into small multiples along a grouping variable.
/// The free-scale switches control whether each facet gets its own scale
/// per aesthetic; the master switch [`free_scales`][Self::free_scales]
/// stands in for all of them.
#[derive(Clone, Debug, Default)]
pub struct Facets {
    by: Option<String>,
    ncol: Option<i64>,
    nrow: Option<i64>,
    free_coords: Option<bool>,
    drop_units: Option<bool>,
    drop_empty_facets: Option<bool>,
    drop_na_facets: Option<bool>,
    sync: Option<bool>,
    show_na: Option<bool>,
    text_na: Option<String>,
    free_scales: Option<bool>,
    free_scales_fill: Option<bool>,
    free_scales_symbol_col: Option<bool>,
    free_scales_symbol_size: Option<bool>,
    free_scales_line_col: Option<bool>,
    free_scales_line_lwd: Option<bool>,
    free_scales_raster: Option<bool>,
    free_scales_text_col: Option<bool>,
    along: Option<String>,
    inside_original_bbox: Option<bool>,
    scale_factor: Option<f64>,
    zindex: Option<i64>,
}

impl Facets {
    /// Creates a facets builder with nothing set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the grouping variable to facet by.
    pub fn by(mut self, value: impl Into<String>) -> Self {
        self.by = Some(value.into());
        self
    }

    /// Sets the number of facet columns.
    pub fn ncol(mut self, value: i64) -> Self {
        self.ncol = Some(value);
        self
    }

    /// Sets the number of facet rows.
    pub fn nrow(mut self, value: i64) -> Self {
        self.nrow = Some(value);
        self
    }

    /// Sets whether each facet uses its own coordinate range.
    pub fn free_coords(mut self, value: bool) -> Self {
        self.free_coords = Some(value);
        self
    }

    /// Sets whether unused spatial units are dropped per facet.
    pub fn drop_units(mut self, value: bool) -> Self {
        self.drop_units = Some(value);
        self
    }

    /// Sets whether facets without data are dropped.
    pub fn drop_empty_facets(mut self, value: bool) -> Self {
        self.drop_empty_facets = Some(value);
        self
    }

    /// Sets whether the facet of missing group values is dropped.
    pub fn drop_na_facets(mut self, value: bool) -> Self {
        self.drop_na_facets = Some(value);
        self
    }

    /// Sets whether facets are navigated in sync in interactive display.
    pub fn sync(mut self, value: bool) -> Self {
        self.sync = Some(value);
        self
    }

    /// Sets whether missing values get their own facet.
    pub fn show_na(mut self, value: bool) -> Self {
        self.show_na = Some(value);
        self
    }

    /// Sets the facet label for missing group values.
    pub fn text_na(mut self, value: impl Into<String>) -> Self {
        self.text_na = Some(value.into());
        self
    }

    /// Sets the free-scales master switch.
    ///
    /// Supplying the master switch counts as supplying every
    /// per-aesthetic switch as well; their values are left alone.
    pub fn free_scales(mut self, value: bool) -> Self {
        self.free_scales = Some(value);
        self
    }

    /// Sets whether each facet gets its own fill scale.
    pub fn free_scales_fill(mut self, value: bool) -> Self {
        self.free_scales_fill = Some(value);
        self
    }

    /// Sets whether each facet gets its own symbol color scale.
    pub fn free_scales_symbol_col(mut self, value: bool) -> Self {
        self.free_scales_symbol_col = Some(value);
        self
    }

    /// Sets whether each facet gets its own symbol size scale.
    pub fn free_scales_symbol_size(mut self, value: bool) -> Self {
        self.free_scales_symbol_size = Some(value);
        self
    }

    /// Sets whether each facet gets its own line color scale.
    pub fn free_scales_line_col(mut self, value: bool) -> Self {
        self.free_scales_line_col = Some(value);
        self
    }

    /// Sets whether each facet gets its own line width scale.
    pub fn free_scales_line_lwd(mut self, value: bool) -> Self {
        self.free_scales_line_lwd = Some(value);
        self
    }

    /// Sets whether each facet gets its own raster scale.
    pub fn free_scales_raster(mut self, value: bool) -> Self {
        self.free_scales_raster = Some(value);
        self
    }

    /// Sets whether each facet gets its own text color scale.
    pub fn free_scales_text_col(mut self, value: bool) -> Self {
        self.free_scales_text_col = Some(value);
        self
    }

    /// Sets the variable to create a facet animation along.
    pub fn along(mut self, value: impl Into<String>) -> Self {
        self.along = Some(value.into());
        self
    }

    /// Sets whether facets stay inside the original bounding box.
    pub fn inside_original_bbox(mut self, value: bool) -> Self {
        self.inside_original_bbox = Some(value);
        self
    }

    /// Sets the scale factor of facet content.
    pub fn scale_factor(mut self, value: f64) -> Self {
        self.scale_factor = Some(value);
        self
    }

    /// Sets the z index of the element.
    pub fn zindex(mut self, value: i64) -> Self {
        self.zindex = Some(value);
        self
    }

    /// Finishes the builder into a facets element.
    pub fn finish(self, _options: &Options) -> Element {
        let master = self.free_scales.is_some();

        let mut element = Element::new(ElementKind::Facets);
        apply(&mut element, "by", self.by, Value::Auto);
        apply(&mut element, "ncol", self.ncol, Value::Auto);
        apply(&mut element, "nrow", self.nrow, Value::Auto);
        apply(&mut element, "free.coords", self.free_coords, true);
        apply(&mut element, "drop.units", self.drop_units, true);
        apply(
            &mut element, "drop.empty.facets",
            self.drop_empty_facets, true
        );
        apply(&mut element, "drop.NA.facets", self.drop_na_facets, false);
        apply(&mut element, "sync", self.sync, Value::Auto);
        apply(&mut element, "showNA", self.show_na, Value::Auto);
        apply(&mut element, "textNA", self.text_na, "Missing");
        apply(&mut element, "free.scales", self.free_scales, Value::Auto);
        apply(
            &mut element, "free.scales.fill",
            self.free_scales_fill, Value::Auto
        );
        apply(
            &mut element, "free.scales.symbol.col",
            self.free_scales_symbol_col, Value::Auto
        );
        apply(
            &mut element, "free.scales.symbol.size",
            self.free_scales_symbol_size, Value::Auto
        );
        apply(
            &mut element, "free.scales.line.col",
            self.free_scales_line_col, Value::Auto
        );
        apply(
            &mut element, "free.scales.line.lwd",
            self.free_scales_line_lwd, Value::Auto
        );
        apply(
            &mut element, "free.scales.raster",
            self.free_scales_raster, Value::Auto
        );
        apply(
            &mut element, "free.scales.text.col",
            self.free_scales_text_col, Value::Auto
        );
        apply(&mut element, "along", self.along, Value::Auto);
        apply(
            &mut element, "inside.original.bbox",
            self.inside_original_bbox, false
        );
        apply(&mut element, "scale.factor", self.scale_factor, 2.);
        apply(&mut element, "zindex", self.zindex, Value::Auto);

        // The master switch propagates presence, not value: downstream
        // default resolution treats the per-aesthetic switches as
        // user-supplied without their stored values changing.
        if master {
            for name in FREE_SCALES {
                element.mark_called(name);
            }
        }
        element
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let element = Facets::new().finish(&Default::default());

        assert_eq!(element.kind(), ElementKind::Facets);
        assert!(element.called().is_empty());
        assert!(
            element.options().keys().all(|key| {
                key.starts_with("facets.")
            })
        );
        assert_eq!(element.get("free.coords"), Some(&Value::Bool(true)));
        assert_eq!(
            element.get("textNA"), Some(&Value::Text("Missing".into()))
        );
        assert_eq!(element.get("free.scales"), Some(&Value::Auto));
    }

    #[test]
    fn test_free_scales_propagates_presence() {
        let element = Facets::new().free_scales(true).finish(
            &Default::default()
        );

        assert!(element.was_called("free.scales"));
        for name in FREE_SCALES {
            assert!(element.was_called(name), "{} not called", name);
            // Values stay untouched.
            assert_eq!(element.get(name), Some(&Value::Auto));
        }
    }

    #[test]
    fn test_free_scales_false_still_propagates() {
        let element = Facets::new().free_scales(false).finish(
            &Default::default()
        );
        for name in FREE_SCALES {
            assert!(element.was_called(name));
        }
    }

    #[test]
    fn test_sub_switch_value_survives_master() {
        let element = Facets::new()
            .free_scales(true)
            .free_scales_fill(false)
            .finish(&Default::default());
        assert_eq!(
            element.get("free.scales.fill"), Some(&Value::Bool(false))
        );
        assert!(element.was_called("free.scales.fill"));
    }

    #[test]
    fn test_no_master_no_propagation() {
        let element = Facets::new().ncol(2).finish(&Default::default());
        assert!(element.was_called("ncol"));
        for name in FREE_SCALES {
            assert!(!element.was_called(name));
        }
    }
}
