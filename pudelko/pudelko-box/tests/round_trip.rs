//! Rendering and parsing work as inverses across units and styles.

use pudelko_box::{FormatStyle, Pudelko, UnitOfMeasure};

#[test]
fn meter_rendering_round_trips() {
    let p = Pudelko::new(1.0, 2.5, 0.125, UnitOfMeasure::Meter).unwrap();
    assert_eq!(p.to_string(), "1.000 m × 2.500 m × 0.125 m");

    let parsed = Pudelko::parse(&p.to_string()).unwrap();
    assert_eq!(parsed, p);
}

#[test]
fn centimeter_rendering_round_trips() {
    let p = Pudelko::new(12.5, 40.0, 7.5, UnitOfMeasure::Centimeter).unwrap();
    let rendered = p.render(FormatStyle::Centimeters);
    assert_eq!(rendered, "12.5 cm × 40.0 cm × 7.5 cm");

    let parsed = Pudelko::parse(&rendered).unwrap();
    assert_eq!(parsed, p);
}

#[test]
fn millimeter_rendering_round_trips() {
    let p = Pudelko::from_millimeter_triple(5, 320, 10_000).unwrap();
    let rendered = p.render(FormatStyle::Millimeters);
    assert_eq!(rendered, "5 mm × 320 mm × 10000 mm");

    let parsed = Pudelko::parse(&rendered).unwrap();
    assert_eq!(parsed, p);
}

#[test]
fn mixed_unit_text_normalizes_to_meters() {
    let p = Pudelko::parse("1.000 m × 1.0 cm × 1 mm").unwrap();
    assert_eq!(p.to_string(), "1.000 m × 0.010 m × 0.001 m");
}

#[test]
fn default_cube_renders_in_all_styles() {
    let cube = Pudelko::default();
    assert_eq!(cube.render(FormatStyle::Meters), "0.100 m × 0.100 m × 0.100 m");
    assert_eq!(cube.render(FormatStyle::Centimeters), "10.0 cm × 10.0 cm × 10.0 cm");
    assert_eq!(cube.render(FormatStyle::Millimeters), "100 mm × 100 mm × 100 mm");
}
