use aerobat::components::HeightGrid;

/// Flat plateau of the given height everywhere outside a small airport clearing.
pub fn create_plateau(height: f64) -> HeightGrid {
    HeightGrid::with_default_extent(move |x, z| {
        if x.hypot(z) < 700.0 {
            0.0
        } else {
            height
        }
    })
}

/// Gentle rolling hills, zero over the airport.
pub fn create_hills() -> HeightGrid {
    HeightGrid::with_default_extent(|x, z| {
        if x.hypot(z) < 700.0 {
            0.0
        } else {
            60.0 + 40.0 * (x / 900.0).sin() * (z / 1_300.0).cos()
        }
    })
}
