//! Map attribute elements.
//!
//! The small decorations of a map: credits text, logos, the scale bar,
//! the compass, and the two interactive-only elements, minimap and mouse
//! coordinate read-out.

use crate::element::{Element, ElementKind};
use crate::options::Options;
use crate::value::Value;
use super::apply;


//------------ Credits -------------------------------------------------------

/// Builds a credits text element.
#[derive(Clone, Debug, Default)]
pub struct Credits {
    text: Option<String>,
    size: Option<f64>,
    fontface: Option<String>,
    fontfamily: Option<String>,
    col: Option<String>,
    alpha: Option<f64>,
    align: Option<String>,
    bg_color: Option<String>,
    bg_alpha: Option<f64>,
    position: Option<(String, String)>,
    width: Option<f64>,
    just: Option<String>,
    zindex: Option<i64>,
}

impl Credits {
    /// Creates a credits builder with nothing set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the credits text.
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.text = Some(value.into());
        self
    }

    /// Sets the size of the text.
    pub fn size(mut self, value: f64) -> Self {
        self.size = Some(value);
        self
    }

    /// Sets the font face of the text.
    pub fn fontface(mut self, value: impl Into<String>) -> Self {
        self.fontface = Some(value.into());
        self
    }

    /// Sets the font family of the text.
    pub fn fontfamily(mut self, value: impl Into<String>) -> Self {
        self.fontfamily = Some(value.into());
        self
    }

    /// Sets the color of the text.
    pub fn col(mut self, value: impl Into<String>) -> Self {
        self.col = Some(value.into());
        self
    }

    /// Sets the opacity of the text.
    pub fn alpha(mut self, value: f64) -> Self {
        self.alpha = Some(value);
        self
    }

    /// Sets the alignment of multi-line text.
    pub fn align(mut self, value: impl Into<String>) -> Self {
        self.align = Some(value.into());
        self
    }

    /// Sets the background color.
    pub fn bg_color(mut self, value: impl Into<String>) -> Self {
        self.bg_color = Some(value.into());
        self
    }

    /// Sets the background opacity.
    pub fn bg_alpha(mut self, value: f64) -> Self {
        self.bg_alpha = Some(value);
        self
    }

    /// Sets the position of the element on the map.
    pub fn position(
        mut self, horizontal: impl Into<String>,
        vertical: impl Into<String>,
    ) -> Self {
        self.position = Some((horizontal.into(), vertical.into()));
        self
    }

    /// Sets the width of the element.
    pub fn width(mut self, value: f64) -> Self {
        self.width = Some(value);
        self
    }

    /// Sets the justification of the element.
    pub fn just(mut self, value: impl Into<String>) -> Self {
        self.just = Some(value.into());
        self
    }

    /// Sets the z index of the element.
    pub fn zindex(mut self, value: i64) -> Self {
        self.zindex = Some(value);
        self
    }

    /// Finishes the builder into a credits element.
    pub fn finish(self, _options: &Options) -> Element {
        let mut element = Element::new(ElementKind::Credits);
        apply(&mut element, "text", self.text, "");
        apply(&mut element, "size", self.size, 0.7);
        apply(&mut element, "fontface", self.fontface, Value::Auto);
        apply(&mut element, "fontfamily", self.fontfamily, Value::Auto);
        apply(&mut element, "col", self.col, Value::Auto);
        apply(&mut element, "alpha", self.alpha, Value::Auto);
        apply(&mut element, "align", self.align, "left");
        apply(&mut element, "bg.color", self.bg_color, Value::Auto);
        apply(&mut element, "bg.alpha", self.bg_alpha, Value::Auto);
        apply(
            &mut element, "position",
            self.position.map(|(h, v)| Value::list([h, v])),
            Value::Auto
        );
        apply(&mut element, "width", self.width, Value::Auto);
        apply(&mut element, "just", self.just, Value::Auto);
        apply(&mut element, "zindex", self.zindex, Value::Auto);
        element
    }
}


//------------ Logo ----------------------------------------------------------

/// Builds a logo element.
#[derive(Clone, Debug, Default)]
pub struct Logo {
    file: Option<String>,
    height: Option<f64>,
    halign: Option<String>,
    margin: Option<f64>,
    position: Option<(String, String)>,
    just: Option<String>,
    zindex: Option<i64>,
}

impl Logo {
    /// Creates a logo builder with nothing set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the path or URL of the logo image.
    pub fn file(mut self, value: impl Into<String>) -> Self {
        self.file = Some(value.into());
        self
    }

    /// Sets the height of the logo in text line heights.
    pub fn height(mut self, value: f64) -> Self {
        self.height = Some(value);
        self
    }

    /// Sets the horizontal alignment when logos are stacked.
    pub fn halign(mut self, value: impl Into<String>) -> Self {
        self.halign = Some(value.into());
        self
    }

    /// Sets the margin around the logo.
    pub fn margin(mut self, value: f64) -> Self {
        self.margin = Some(value);
        self
    }

    /// Sets the position of the element on the map.
    pub fn position(
        mut self, horizontal: impl Into<String>,
        vertical: impl Into<String>,
    ) -> Self {
        self.position = Some((horizontal.into(), vertical.into()));
        self
    }

    /// Sets the justification of the element.
    pub fn just(mut self, value: impl Into<String>) -> Self {
        self.just = Some(value.into());
        self
    }

    /// Sets the z index of the element.
    pub fn zindex(mut self, value: i64) -> Self {
        self.zindex = Some(value);
        self
    }

    /// Finishes the builder into a logo element.
    pub fn finish(self, _options: &Options) -> Element {
        let mut element = Element::new(ElementKind::Logo);
        apply(&mut element, "file", self.file, Value::Auto);
        apply(&mut element, "height", self.height, 3.);
        apply(&mut element, "halign", self.halign, "left");
        apply(&mut element, "margin", self.margin, 0.2);
        apply(
            &mut element, "position",
            self.position.map(|(h, v)| Value::list([h, v])),
            Value::Auto
        );
        apply(&mut element, "just", self.just, Value::Auto);
        apply(&mut element, "zindex", self.zindex, Value::Auto);
        element
    }
}


//------------ ScaleBar ------------------------------------------------------

/// Builds a scale bar element.
#[derive(Clone, Debug, Default)]
pub struct ScaleBar {
    breaks: Option<Vec<f64>>,
    width: Option<f64>,
    text_size: Option<f64>,
    text_color: Option<String>,
    color_dark: Option<String>,
    color_light: Option<String>,
    lwd: Option<f64>,
    position: Option<(String, String)>,
    bg_color: Option<String>,
    bg_alpha: Option<f64>,
    just: Option<String>,
    zindex: Option<i64>,
    legacy_size: Option<f64>,
}

impl ScaleBar {
    /// Creates a scale bar builder with nothing set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the break points of the scale bar.
    pub fn breaks(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.breaks = Some(values.into_iter().collect());
        self
    }

    /// Sets the width of the scale bar.
    pub fn width(mut self, value: f64) -> Self {
        self.width = Some(value);
        self
    }

    /// Sets the size of the break labels.
    pub fn text_size(mut self, value: f64) -> Self {
        self.text_size = Some(value);
        self
    }

    /// Sets the color of the break labels.
    pub fn text_color(mut self, value: impl Into<String>) -> Self {
        self.text_color = Some(value.into());
        self
    }

    /// Sets the color of the dark segments.
    pub fn color_dark(mut self, value: impl Into<String>) -> Self {
        self.color_dark = Some(value.into());
        self
    }

    /// Sets the color of the light segments.
    pub fn color_light(mut self, value: impl Into<String>) -> Self {
        self.color_light = Some(value.into());
        self
    }

    /// Sets the line width of the segment outlines.
    pub fn lwd(mut self, value: f64) -> Self {
        self.lwd = Some(value);
        self
    }

    /// Sets the position of the element on the map.
    pub fn position(
        mut self, horizontal: impl Into<String>,
        vertical: impl Into<String>,
    ) -> Self {
        self.position = Some((horizontal.into(), vertical.into()));
        self
    }

    /// Sets the background color.
    pub fn bg_color(mut self, value: impl Into<String>) -> Self {
        self.bg_color = Some(value.into());
        self
    }

    /// Sets the background opacity.
    pub fn bg_alpha(mut self, value: f64) -> Self {
        self.bg_alpha = Some(value);
        self
    }

    /// Sets the justification of the element.
    pub fn just(mut self, value: impl Into<String>) -> Self {
        self.just = Some(value.into());
        self
    }

    /// Sets the z index of the element.
    pub fn zindex(mut self, value: i64) -> Self {
        self.zindex = Some(value);
        self
    }

    /// Sets the size of the break labels.
    ///
    /// Legacy name of [`text_size`][Self::text_size]. If supplied, its
    /// value replaces `text.size` and a deprecation advisory is emitted.
    pub fn size(mut self, value: f64) -> Self {
        self.legacy_size = Some(value);
        self
    }

    /// Finishes the builder into a scale bar element.
    pub fn finish(self, options: &Options) -> Element {
        let mut text_size = self.text_size;
        if let Some(value) = self.legacy_size {
            options.warn(
                "the size option of the scale bar is deprecated; \
                 use text.size instead"
            );
            text_size = Some(value);
        }

        let mut element = Element::new(ElementKind::ScaleBar);
        apply(
            &mut element, "breaks",
            self.breaks.map(Value::list), Value::Auto
        );
        apply(&mut element, "width", self.width, Value::Auto);
        apply(&mut element, "text.size", text_size, 0.5);
        apply(&mut element, "text.color", self.text_color, Value::Auto);
        apply(&mut element, "color.dark", self.color_dark, "black");
        apply(&mut element, "color.light", self.color_light, "white");
        apply(&mut element, "lwd", self.lwd, 1.);
        apply(
            &mut element, "position",
            self.position.map(|(h, v)| Value::list([h, v])),
            Value::Auto
        );
        apply(&mut element, "bg.color", self.bg_color, Value::Auto);
        apply(&mut element, "bg.alpha", self.bg_alpha, Value::Auto);
        apply(&mut element, "just", self.just, Value::Auto);
        apply(&mut element, "zindex", self.zindex, Value::Auto);
        element
    }
}


//------------ Compass -------------------------------------------------------

/// Builds a compass element.
#[derive(Clone, Debug, Default)]
pub struct Compass {
    north: Option<f64>,
    kind: Option<String>,
    text_size: Option<f64>,
    size: Option<f64>,
    show_labels: Option<i64>,
    cardinal_directions: Option<Vec<String>>,
    text_color: Option<String>,
    color_dark: Option<String>,
    color_light: Option<String>,
    position: Option<(String, String)>,
    bg_color: Option<String>,
    bg_alpha: Option<f64>,
    just: Option<String>,
    zindex: Option<i64>,
    legacy_fontsize: Option<f64>,
}

impl Compass {
    /// Creates a compass builder with nothing set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the bearing of north in degrees.
    pub fn north(mut self, value: f64) -> Self {
        self.north = Some(value);
        self
    }

    /// Sets the type of the compass rose.
    ///
    /// Recorded under the canonical name `type`.
    pub fn kind(mut self, value: impl Into<String>) -> Self {
        self.kind = Some(value.into());
        self
    }

    /// Sets the size of the direction labels.
    pub fn text_size(mut self, value: f64) -> Self {
        self.text_size = Some(value);
        self
    }

    /// Sets the size of the compass in text line heights.
    pub fn size(mut self, value: f64) -> Self {
        self.size = Some(value);
        self
    }

    /// Sets how many direction labels are shown.
    ///
    /// 0 shows none, 1 only north, 2 north and south, 4 all.
    pub fn show_labels(mut self, value: i64) -> Self {
        self.show_labels = Some(value);
        self
    }

    /// Sets the direction label texts.
    pub fn cardinal_directions<I, T>(mut self, values: I) -> Self
    where I: IntoIterator<Item = T>, T: Into<String> {
        self.cardinal_directions = Some(
            values.into_iter().map(Into::into).collect()
        );
        self
    }

    /// Sets the color of the direction labels.
    pub fn text_color(mut self, value: impl Into<String>) -> Self {
        self.text_color = Some(value.into());
        self
    }

    /// Sets the dark color of the rose.
    pub fn color_dark(mut self, value: impl Into<String>) -> Self {
        self.color_dark = Some(value.into());
        self
    }

    /// Sets the light color of the rose.
    pub fn color_light(mut self, value: impl Into<String>) -> Self {
        self.color_light = Some(value.into());
        self
    }

    /// Sets the position of the element on the map.
    pub fn position(
        mut self, horizontal: impl Into<String>,
        vertical: impl Into<String>,
    ) -> Self {
        self.position = Some((horizontal.into(), vertical.into()));
        self
    }

    /// Sets the background color.
    pub fn bg_color(mut self, value: impl Into<String>) -> Self {
        self.bg_color = Some(value.into());
        self
    }

    /// Sets the background opacity.
    pub fn bg_alpha(mut self, value: f64) -> Self {
        self.bg_alpha = Some(value);
        self
    }

    /// Sets the justification of the element.
    pub fn just(mut self, value: impl Into<String>) -> Self {
        self.just = Some(value.into());
        self
    }

    /// Sets the z index of the element.
    pub fn zindex(mut self, value: i64) -> Self {
        self.zindex = Some(value);
        self
    }

    /// Sets the size of the direction labels.
    ///
    /// Legacy name of [`text_size`][Self::text_size]. If supplied, its
    /// value replaces `text.size` and a deprecation advisory is emitted.
    pub fn fontsize(mut self, value: f64) -> Self {
        self.legacy_fontsize = Some(value);
        self
    }

    /// Finishes the builder into a compass element.
    pub fn finish(self, options: &Options) -> Element {
        let mut text_size = self.text_size;
        if let Some(value) = self.legacy_fontsize {
            options.warn(
                "the fontsize option of the compass is deprecated; \
                 use text.size instead"
            );
            text_size = Some(value);
        }

        let mut element = Element::new(ElementKind::Compass);
        apply(&mut element, "north", self.north, 0.);
        apply(&mut element, "type", self.kind, Value::Auto);
        apply(&mut element, "text.size", text_size, 0.8);
        apply(&mut element, "size", self.size, Value::Auto);
        apply(&mut element, "show.labels", self.show_labels, 1);
        apply(
            &mut element, "cardinal.directions",
            self.cardinal_directions.map(Value::list),
            Value::list(["N", "E", "S", "W"])
        );
        apply(&mut element, "text.color", self.text_color, Value::Auto);
        apply(&mut element, "color.dark", self.color_dark, Value::Auto);
        apply(&mut element, "color.light", self.color_light, Value::Auto);
        apply(
            &mut element, "position",
            self.position.map(|(h, v)| Value::list([h, v])),
            Value::Auto
        );
        apply(&mut element, "bg.color", self.bg_color, Value::Auto);
        apply(&mut element, "bg.alpha", self.bg_alpha, Value::Auto);
        apply(&mut element, "just", self.just, Value::Auto);
        apply(&mut element, "zindex", self.zindex, Value::Auto);
        element
    }
}


//------------ Minimap -------------------------------------------------------

/// Builds a minimap element for interactive display.
#[derive(Clone, Debug, Default)]
pub struct Minimap {
    server: Option<String>,
    toggle: Option<bool>,
    position: Option<(String, String)>,
    zindex: Option<i64>,
}

impl Minimap {
    /// Creates a minimap builder with nothing set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the tile server providing the minimap imagery.
    pub fn server(mut self, value: impl Into<String>) -> Self {
        self.server = Some(value.into());
        self
    }

    /// Sets whether the minimap can be collapsed.
    pub fn toggle(mut self, value: bool) -> Self {
        self.toggle = Some(value);
        self
    }

    /// Sets the position of the minimap.
    pub fn position(
        mut self, horizontal: impl Into<String>,
        vertical: impl Into<String>,
    ) -> Self {
        self.position = Some((horizontal.into(), vertical.into()));
        self
    }

    /// Sets the z index of the element.
    pub fn zindex(mut self, value: i64) -> Self {
        self.zindex = Some(value);
        self
    }

    /// Finishes the builder into a minimap element.
    pub fn finish(self, _options: &Options) -> Element {
        let mut element = Element::new(ElementKind::Minimap);
        apply(&mut element, "server", self.server, Value::Auto);
        apply(&mut element, "toggle", self.toggle, true);
        apply(
            &mut element, "position",
            self.position.map(|(h, v)| Value::list([h, v])),
            Value::list(["left", "bottom"])
        );
        apply(&mut element, "zindex", self.zindex, Value::Auto);
        element
    }
}


//------------ mouse_coordinates ---------------------------------------------

/// Creates the mouse coordinate read-out element.
///
/// The element has no options; it merely switches the read-out on in
/// interactive display.
pub fn mouse_coordinates() -> Element {
    let mut element = Element::new(ElementKind::MouseCoordinates);
    element.insert("show", true);
    element
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn quiet() -> Options {
        Options { show_warnings: false, .. Default::default() }
    }

    #[test]
    fn test_credits_defaults() {
        let element = Credits::new().finish(&quiet());
        assert_eq!(element.kind(), ElementKind::Credits);
        assert!(element.called().is_empty());
        assert!(
            element.options().keys().all(|key| {
                key.starts_with("credits.")
            })
        );
        assert_eq!(element.get("size"), Some(&Value::Float(0.7)));
        assert_eq!(element.get("align"), Some(&Value::Text("left".into())));
    }

    #[test]
    fn test_logo_defaults() {
        let element = Logo::new().finish(&quiet());
        assert!(element.called().is_empty());
        assert!(
            element.options().keys().all(|key| key.starts_with("logo."))
        );
        assert_eq!(element.get("height"), Some(&Value::Float(3.)));
    }

    #[test]
    fn test_scale_bar_legacy_size() {
        let element = ScaleBar::new().size(2.).finish(&quiet());
        assert_eq!(element.get("text.size"), Some(&Value::Float(2.)));
        assert_eq!(element.get("size"), None);
        assert!(!element.options().contains_key("scale.size"));
        assert!(element.was_called("text.size"));
    }

    #[test]
    fn test_scale_bar_legacy_overrides_canonical() {
        let element = ScaleBar::new().text_size(1.).size(2.).finish(
            &quiet()
        );
        assert_eq!(element.get("text.size"), Some(&Value::Float(2.)));
    }

    #[test]
    fn test_scale_bar_defaults() {
        let element = ScaleBar::new().finish(&quiet());
        assert!(element.called().is_empty());
        assert!(
            element.options().keys().all(|key| key.starts_with("scale."))
        );
        assert_eq!(element.get("text.size"), Some(&Value::Float(0.5)));
        assert_eq!(
            element.get("color.dark"), Some(&Value::Text("black".into()))
        );
    }

    #[test]
    fn test_compass_legacy_fontsize() {
        let element = Compass::new().fontsize(1.5).finish(&quiet());
        assert_eq!(element.get("text.size"), Some(&Value::Float(1.5)));
        assert_eq!(element.get("fontsize"), None);
        assert!(element.was_called("text.size"));
    }

    #[test]
    fn test_compass_defaults() {
        let element = Compass::new().finish(&quiet());
        assert!(element.called().is_empty());
        assert!(
            element.options().keys().all(|key| {
                key.starts_with("compass.")
            })
        );
        assert_eq!(element.get("north"), Some(&Value::Float(0.)));
        assert_eq!(
            element.get("cardinal.directions"),
            Some(&Value::list(["N", "E", "S", "W"]))
        );
    }

    #[test]
    fn test_minimap_defaults() {
        let element = Minimap::new().finish(&quiet());
        assert!(element.called().is_empty());
        assert!(
            element.options().keys().all(|key| {
                key.starts_with("minimap.")
            })
        );
        assert_eq!(element.get("toggle"), Some(&Value::Bool(true)));
        assert_eq!(
            element.get("position"),
            Some(&Value::list(["left", "bottom"]))
        );
    }

    #[test]
    fn test_mouse_coordinates() {
        let element = mouse_coordinates();
        assert_eq!(element.kind(), ElementKind::MouseCoordinates);
        assert!(element.called().is_empty());
        assert_eq!(element.options().len(), 1);
        assert_eq!(element.get("show"), Some(&Value::Bool(true)));
    }
}
