//! Thinwall example - sectorial properties of an open channel profile
//!
//! Builds a cold-formed channel from 33 wall-centerline samples (flanges at
//! y = ±25 mm reaching from x = 32 mm to the web at x = 0) and prints the
//! summary section properties.

use thinwall::prelude::*;

const THICKNESS: f64 = 4.4;

fn channel_nodes() -> Vec<Node> {
    let samples = [
        // Bottom flange, tip to web
        (32.0, -25.0),
        (28.44, -25.0),
        (24.89, -25.0),
        (21.33, -25.0),
        (17.78, -25.0),
        (14.22, -25.0),
        (10.67, -25.0),
        (7.11, -25.0),
        (3.56, -25.0),
        (0.0, -25.0),
        // Web
        (0.0, -21.15),
        (0.0, -17.31),
        (0.0, -13.46),
        (0.0, -9.62),
        (0.0, -5.77),
        (0.0, -1.92),
        (0.0, 0.0),
        (0.0, 1.92),
        (0.0, 5.77),
        (0.0, 9.62),
        (0.0, 13.46),
        (0.0, 17.31),
        (0.0, 21.15),
        (0.0, 25.0),
        // Top flange, web to tip
        (3.56, 25.0),
        (7.11, 25.0),
        (10.67, 25.0),
        (14.22, 25.0),
        (17.78, 25.0),
        (21.33, 25.0),
        (24.89, 25.0),
        (28.44, 25.0),
        (32.0, 25.0),
    ];

    samples
        .iter()
        .map(|&(x, y)| Node::new(x, y, THICKNESS))
        .collect()
}

fn run() -> SectionResult<()> {
    let mut section = CrossSection::new(channel_nodes())?;

    let gc = section.gravity_center()?;
    let rc = section.rigidity_center()?;
    let inertia = section.inertia_moment()?;

    println!("** Sectorial properties:");
    println!("-- Section area (F): {:.2} mm^2", section.section_area());
    println!("-- Center of gravity (x, y): ({:.2}, {:.2}) mm", gc.x, gc.y);
    println!("-- Center of rigidity (x, y): ({:.2}, {:.2}) mm", rc.x, rc.y);
    println!(
        "-- Main moments of inertia (Ix, Iy): ({:.2}, {:.2}) mm^4",
        inertia.x, inertia.y
    );
    println!(
        "-- Polar moment of inertia (Ip): {:.2} mm^4",
        section.polar_inertia_moment()?
    );
    println!(
        "-- Sectorial moment of inertia (Iw): {:.2} mm^6",
        section.sectorial_inertia_moment()?
    );

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
