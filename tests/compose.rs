//! Composing a complete specification end to end.

use thematic::{ElementKind, Expr, MapSpec, Options, Session, Value};
use thematic::elements::{
    mouse_coordinates, AxisLabel, Compass, Credits, Facets, Grid, Logo,
    Minimap, ScaleBar,
};

fn quiet() -> Options {
    Options { show_warnings: false, .. Default::default() }
}

#[test]
fn full_specification() {
    let options = quiet();
    let spec: MapSpec = [
        Facets::new().by("region").ncol(3).finish(&options),
        Grid::graticules().finish(&options),
        Credits::new().text("Data: Natural Earth").finish(&options),
        Logo::new().file("logo.png").finish(&options),
        ScaleBar::new().breaks([0., 100., 200.]).finish(&options),
        Compass::new().kind("arrow").finish(&options),
        AxisLabel::x().text("longitude").finish(&options),
        AxisLabel::y().text("latitude").finish(&options),
        Minimap::new().finish(&options),
        mouse_coordinates(),
    ].into_iter().collect();

    let kinds: Vec<_> = spec.elements().iter().map(
        |item| item.kind()
    ).collect();
    assert_eq!(
        kinds,
        [
            ElementKind::Facets, ElementKind::Grid, ElementKind::Credits,
            ElementKind::Logo, ElementKind::ScaleBar, ElementKind::Compass,
            ElementKind::Xlab, ElementKind::Ylab, ElementKind::Minimap,
            ElementKind::MouseCoordinates,
        ]
    );

    // Every key of the flattened specification is unique thanks to the
    // per-element prefixes.
    let mut keys = Vec::new();
    for element in &spec {
        let prefix = element.kind().prefix();
        for key in element.options().keys() {
            assert!(key.starts_with(prefix), "unprefixed key {}", key);
            keys.push(key.clone());
        }
    }
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn stacking_equals_collecting() {
    let options = quiet();
    let stacked = MapSpec::from(
        Grid::new().finish(&options)
    ).stack(
        Compass::new().finish(&options), &options
    ).stack(
        ScaleBar::new().finish(&options), &options
    );
    let collected: MapSpec = [
        Grid::new().finish(&options),
        Compass::new().finish(&options),
        ScaleBar::new().finish(&options),
    ].into_iter().collect();
    assert_eq!(stacked, collected);
}

#[test]
fn session_workflow() {
    let options = quiet();
    let mut session = Session::new();

    // Nothing finalized yet.
    assert!(session.last_map(&options).is_none());

    // A quick map is discarded when stacked upon.
    let expr = session.stack(
        MapSpec::quick(), Grid::new().finish(&options)
    );
    session.finalize();
    let first = session.last_map(&options).unwrap();
    assert_eq!(first, expr.eval(&options));
    assert_eq!(first.len(), 1);
    assert!(!first.is_quick());

    // Extend the previous map through a last-map reference.
    session.stack(Expr::LastMap, Compass::new().finish(&options));
    session.finalize();
    let second = session.last_map(&options).unwrap();
    assert_eq!(
        second,
        first.stack(Compass::new().finish(&options), &options)
    );
}

#[test]
fn serde_round_trip() {
    let options = quiet();
    let spec: MapSpec = [
        Grid::graticules().lwd(2.).finish(&options),
        ScaleBar::new().position("right", "bottom").finish(&options),
    ].into_iter().collect();

    let json = serde_json::to_string(&spec).unwrap();
    let back: MapSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, spec);

    // Element order and payload key order survive.
    let keys: Vec<_> = spec.elements()[0].options().keys().collect();
    let back_keys: Vec<_> = back.elements()[0].options().keys().collect();
    assert_eq!(keys, back_keys);
    assert_eq!(
        back.elements()[1].get("position"),
        Some(&Value::list(["right", "bottom"]))
    );
}
