//! Coordinate grid lines and labels.

use crate::element::{Element, ElementKind};
use crate::options::Options;
use crate::value::{LabelFormat, Value};
use super::apply;


//------------ Grid ----------------------------------------------------------

/// Builds a coordinate grid element.
///
/// The grid draws coordinate lines over the map with labels along the
/// frame. By default the lines follow the map's own projection; setting a
/// projection draws the grid in that projection instead. The
/// [`graticules`][Self::graticules] entry point pre-configures the builder
/// for longitude/latitude graticules.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    x: Option<Vec<f64>>,
    y: Option<Vec<f64>>,
    n_x: Option<i64>,
    n_y: Option<i64>,
    projection: Option<i64>,
    col: Option<String>,
    lwd: Option<f64>,
    alpha: Option<f64>,
    labels_show: Option<bool>,
    labels_size: Option<f64>,
    labels_col: Option<String>,
    labels_rot: Option<(f64, f64)>,
    labels_format: Option<LabelFormat>,
    labels_cardinal: Option<bool>,
    labels_margin_x: Option<f64>,
    labels_margin_y: Option<f64>,
    labels_space_x: Option<f64>,
    labels_space_y: Option<f64>,
    labels_inside_frame: Option<bool>,
    ticks: Option<bool>,
    lines: Option<bool>,
    ndiscr: Option<i64>,
    zindex: Option<i64>,
}

impl Grid {
    /// Creates a grid builder with nothing set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates a grid builder pre-configured for graticules.
    ///
    /// Graticules are a longitude/latitude grid: the projection is fixed
    /// to EPSG code 4326, labels carry a degree suffix and cardinal
    /// directions. Everything else behaves exactly like a grid; the
    /// pre-set options count as explicitly supplied.
    pub fn graticules() -> Self {
        Self::new()
            .projection(4326)
            .labels_cardinal(true)
            .labels_format(LabelFormat::degrees())
    }

    /// Sets the x coordinates of the grid lines.
    pub fn x(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.x = Some(values.into_iter().collect());
        self
    }

    /// Sets the y coordinates of the grid lines.
    pub fn y(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.y = Some(values.into_iter().collect());
        self
    }

    /// Sets the preferred number of grid lines in x.
    pub fn n_x(mut self, value: i64) -> Self {
        self.n_x = Some(value);
        self
    }

    /// Sets the preferred number of grid lines in y.
    pub fn n_y(mut self, value: i64) -> Self {
        self.n_y = Some(value);
        self
    }

    /// Sets the projection of the grid as an EPSG code.
    pub fn projection(mut self, value: i64) -> Self {
        self.projection = Some(value);
        self
    }

    /// Sets the color of the grid lines.
    pub fn col(mut self, value: impl Into<String>) -> Self {
        self.col = Some(value.into());
        self
    }

    /// Sets the line width of the grid lines.
    pub fn lwd(mut self, value: f64) -> Self {
        self.lwd = Some(value);
        self
    }

    /// Sets the opacity of the grid lines.
    pub fn alpha(mut self, value: f64) -> Self {
        self.alpha = Some(value);
        self
    }

    /// Sets whether coordinate labels are shown.
    pub fn labels_show(mut self, value: bool) -> Self {
        self.labels_show = Some(value);
        self
    }

    /// Sets the size of the coordinate labels.
    pub fn labels_size(mut self, value: f64) -> Self {
        self.labels_size = Some(value);
        self
    }

    /// Sets the color of the coordinate labels.
    pub fn labels_col(mut self, value: impl Into<String>) -> Self {
        self.labels_col = Some(value.into());
        self
    }

    /// Sets the rotation of the x and y labels in degrees.
    pub fn labels_rot(mut self, x: f64, y: f64) -> Self {
        self.labels_rot = Some((x, y));
        self
    }

    /// Sets the format of the coordinate labels.
    pub fn labels_format(mut self, value: LabelFormat) -> Self {
        self.labels_format = Some(value);
        self
    }

    /// Sets whether labels carry cardinal directions instead of signs.
    pub fn labels_cardinal(mut self, value: bool) -> Self {
        self.labels_cardinal = Some(value);
        self
    }

    /// Sets the margin between frame and x labels.
    pub fn labels_margin_x(mut self, value: f64) -> Self {
        self.labels_margin_x = Some(value);
        self
    }

    /// Sets the margin between frame and y labels.
    pub fn labels_margin_y(mut self, value: f64) -> Self {
        self.labels_margin_y = Some(value);
        self
    }

    /// Sets the space reserved for the x labels.
    pub fn labels_space_x(mut self, value: f64) -> Self {
        self.labels_space_x = Some(value);
        self
    }

    /// Sets the space reserved for the y labels.
    pub fn labels_space_y(mut self, value: f64) -> Self {
        self.labels_space_y = Some(value);
        self
    }

    /// Sets whether labels are drawn inside the frame.
    pub fn labels_inside_frame(mut self, value: bool) -> Self {
        self.labels_inside_frame = Some(value);
        self
    }

    /// Sets whether tick marks are drawn at the labels.
    ///
    /// Defaults to drawing ticks whenever labels are shown outside the
    /// frame.
    pub fn ticks(mut self, value: bool) -> Self {
        self.ticks = Some(value);
        self
    }

    /// Sets whether the grid lines themselves are drawn.
    pub fn lines(mut self, value: bool) -> Self {
        self.lines = Some(value);
        self
    }

    /// Sets the number of points to discretize a grid line over.
    pub fn ndiscr(mut self, value: i64) -> Self {
        self.ndiscr = Some(value);
        self
    }

    /// Sets the z index of the element.
    pub fn zindex(mut self, value: i64) -> Self {
        self.zindex = Some(value);
        self
    }

    /// Finishes the builder into a grid element.
    pub fn finish(self, _options: &Options) -> Element {
        // The ticks default depends on the label options, so work it out
        // before the fields are consumed.
        let ticks_default =
            self.labels_show.unwrap_or(true)
            && !self.labels_inside_frame.unwrap_or(false);

        let mut element = Element::new(ElementKind::Grid);
        apply(
            &mut element, "x",
            self.x.map(Value::list), Value::Auto
        );
        apply(
            &mut element, "y",
            self.y.map(Value::list), Value::Auto
        );
        apply(&mut element, "n.x", self.n_x, Value::Auto);
        apply(&mut element, "n.y", self.n_y, Value::Auto);
        apply(&mut element, "projection", self.projection, Value::Auto);
        apply(&mut element, "col", self.col, Value::Auto);
        apply(&mut element, "lwd", self.lwd, 1.);
        apply(&mut element, "alpha", self.alpha, Value::Auto);
        apply(&mut element, "labels.show", self.labels_show, true);
        apply(&mut element, "labels.size", self.labels_size, 0.6);
        apply(&mut element, "labels.col", self.labels_col, Value::Auto);
        apply(
            &mut element, "labels.rot",
            self.labels_rot.map(|(x, y)| Value::list([x, y])),
            Value::list([0., 0.])
        );
        apply(
            &mut element, "labels.format", self.labels_format,
            LabelFormat::with_big_mark(",")
        );
        apply(
            &mut element, "labels.cardinal", self.labels_cardinal, false
        );
        apply(
            &mut element, "labels.margin.x", self.labels_margin_x, 0.
        );
        apply(
            &mut element, "labels.margin.y", self.labels_margin_y, 0.
        );
        apply(
            &mut element, "labels.space.x", self.labels_space_x,
            Value::Auto
        );
        apply(
            &mut element, "labels.space.y", self.labels_space_y,
            Value::Auto
        );
        apply(
            &mut element, "labels.inside.frame",
            self.labels_inside_frame, false
        );
        apply(&mut element, "ticks", self.ticks, ticks_default);
        apply(&mut element, "lines", self.lines, true);
        apply(&mut element, "ndiscr", self.ndiscr, 100);
        apply(&mut element, "zindex", self.zindex, Value::Auto);
        element
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let element = Grid::new().finish(&Default::default());

        assert_eq!(element.kind(), ElementKind::Grid);
        assert!(element.called().is_empty());
        assert!(
            element.options().keys().all(|key| key.starts_with("grid."))
        );
        assert_eq!(element.get("lwd"), Some(&Value::Float(1.)));
        assert_eq!(element.get("labels.show"), Some(&Value::Bool(true)));
        assert_eq!(element.get("projection"), Some(&Value::Auto));
        assert_eq!(element.get("ndiscr"), Some(&Value::Int(100)));
    }

    #[test]
    fn test_ticks_follow_labels() {
        let options = Default::default();

        // Shown labels outside the frame get ticks.
        let element = Grid::new().finish(&options);
        assert_eq!(element.get("ticks"), Some(&Value::Bool(true)));

        // Hidden labels suppress them.
        let element = Grid::new().labels_show(false).finish(&options);
        assert_eq!(element.get("ticks"), Some(&Value::Bool(false)));

        // As do labels inside the frame.
        let element = Grid::new().labels_inside_frame(true).finish(
            &options
        );
        assert_eq!(element.get("ticks"), Some(&Value::Bool(false)));

        // An explicit value wins either way.
        let element = Grid::new().labels_show(false).ticks(true).finish(
            &options
        );
        assert_eq!(element.get("ticks"), Some(&Value::Bool(true)));
        assert!(element.was_called("ticks"));
    }

    #[test]
    fn test_explicit_call_list() {
        let element = Grid::new().lwd(2.).labels_show(true).finish(
            &Default::default()
        );
        assert!(element.was_called("lwd"));
        assert!(element.was_called("labels.show"));
        assert!(!element.was_called("col"));
    }

    #[test]
    fn test_graticules() {
        let options = Default::default();
        assert_eq!(
            Grid::graticules().finish(&options),
            Grid::new()
                .projection(4326)
                .labels_cardinal(true)
                .labels_format(LabelFormat::degrees())
                .finish(&options)
        );
    }
}
