use super::round_to;
use crate::config::MaterialNorms;
use crate::model::{MaterialQuantities, WallType};

/// Rough material takeoff from the converted and usable floor areas.
#[must_use]
pub fn material_quantities(
    total_converted_area: f64,
    total_floor_area: f64,
    wall_type: WallType,
    norms: &MaterialNorms,
) -> MaterialQuantities {
    let effective_wall_area = total_floor_area * norms.wall_density;

    MaterialQuantities {
        bricks: (effective_wall_area * norms.bricks(wall_type)).round(),
        sand: round_to(total_converted_area * norms.sand, 1),
        stone: round_to(total_converted_area * norms.stone, 1),
        cement: (total_converted_area * norms.cement).round(),
        steel: (total_converted_area * norms.steel).round(),
        paint: (total_floor_area * norms.paint).round(),
    }
}
