//! Box Lab — pudelko walk-through
//!
//! Exercises construction, rendering, equality, sorting, combination, and
//! parsing of unit-tagged boxes.

use pudelko_box::{volume_area_edges_ordering, FormatStyle, Pudelko, UnitOfMeasure};

fn main() -> anyhow::Result<()> {
    println!("=== Rendering styles ===");
    let cube = Pudelko::default();
    println!("{cube}");
    println!("{}", cube.render(FormatStyle::Meters));
    println!("{}", cube.render(FormatStyle::Centimeters));
    println!("{}", cube.render(FormatStyle::Millimeters));
    println!();

    println!("=== Equality ===");
    let tenth = Pudelko::new(0.1, 0.1, 0.1, UnitOfMeasure::Meter)?;
    println!("default == 0.1 m cube: {}", cube == tenth);

    let in_cm = Pudelko::new(10.0, 15.0, 20.0, UnitOfMeasure::Centimeter)?;
    let in_mm = Pudelko::new(100.0, 150.0, 200.0, UnitOfMeasure::Millimeter)?;
    println!("cm box == mm box: {}", in_cm == in_mm);

    let ordered = Pudelko::new(10.0, 15.0, 20.0, UnitOfMeasure::Centimeter)?;
    let shuffled = Pudelko::new(20.0, 15.0, 10.0, UnitOfMeasure::Centimeter)?;
    println!("permuted edges: {}", ordered == shuffled);
    println!();

    println!("=== Sorting ===");
    let slab = Pudelko::new(1.0, 2.0, 3.0, UnitOfMeasure::Meter)?;
    let compressed = slab.compress()?;
    let mut boxes = vec![in_cm, in_mm, ordered, shuffled, slab, cube, compressed];

    println!("--- unsorted ---");
    for b in &boxes {
        println!("{b}");
    }

    boxes.sort_by(volume_area_edges_ordering);

    println!("--- sorted ---");
    for b in &boxes {
        println!("{b}");
    }
    println!();

    println!("=== Combination ===");
    for (p, q) in [
        (
            Pudelko::new(1.0, 1.0, 1.0, UnitOfMeasure::Meter)?,
            Pudelko::new(1.0, 1.0, 1.0, UnitOfMeasure::Meter)?,
        ),
        (
            Pudelko::new(1.0, 1.0, 1.0, UnitOfMeasure::Meter)?,
            Pudelko::new(0.5, 0.5, 0.5, UnitOfMeasure::Meter)?,
        ),
        (
            Pudelko::new(0.4, 0.5, 0.6, UnitOfMeasure::Meter)?,
            Pudelko::new(0.1, 0.2, 0.3, UnitOfMeasure::Meter)?,
        ),
    ] {
        let combined = p.combine(&q)?;
        println!("{p}  +  {q}  =  {combined}");
    }
    println!();

    println!("=== Parsing ===");
    let mixed = Pudelko::parse("1.000 m × 1.0 cm × 1 mm")?;
    println!("mixed units: {mixed}");
    let uniform = Pudelko::parse("1.000 m × 1.000 m × 1.000 m")?;
    println!("all meters:  {uniform}");

    Ok(())
}
