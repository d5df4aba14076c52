use crate::{
    encode::bitstream::Bitstream,
    foundation::core::{Point, Vec2},
    layout::grid::GridLayout,
    path::command::{PathCommand, PathDescription},
};

/// Build the full figure for `bits` laid out on `grid`: the border first, then one connector
/// per bit in stream order.
///
/// `bits.len()` is expected to equal `grid.rows * grid.columns / 2`.
pub fn build_path(bits: &Bitstream, grid: &GridLayout) -> PathDescription {
    let mut out = Vec::with_capacity(border_command_count(grid) + 4 * bits.len());
    push_border(&mut out, grid);
    for (i, bit) in bits.bits().enumerate() {
        push_connector(&mut out, grid.cell_origin(i), bit, grid.tile);
    }
    PathDescription::from_commands(out)
}

fn border_command_count(grid: &GridLayout) -> usize {
    let half = grid.bits_per_row();
    let rows = grid.rows as usize;
    4 + 2 * (2 * half + rows / 2 + rows.div_ceil(2))
}

/// Dashed outline around the grid.
///
/// Horizontal edges carry `columns / 2` dashes, the left edge `floor(rows / 2)` and the right
/// edge `ceil(rows / 2)`, each one tile long and one tile apart. The bottom edge
/// starts a tile further left when `rows` is even and the right edge starts a tile above the
/// grid, so the dash phase meets the braid on every side.
fn push_border(out: &mut Vec<PathCommand>, grid: &GridLayout) {
    let t = grid.tile;
    let m = grid.margin;
    let half = grid.bits_per_row();
    let rows = grid.rows as usize;
    let grid_w = f64::from(grid.columns) * t;
    let grid_h = f64::from(grid.rows) * t;

    // top
    out.push(PathCommand::MoveTo(Point::new(m, m)));
    push_dashes(out, Vec2::new(t, 0.0), half);

    // left
    out.push(PathCommand::MoveTo(Point::new(m, m)));
    push_dashes(out, Vec2::new(0.0, t), rows / 2);

    // bottom
    let bottom_x = if rows % 2 == 0 { m - t } else { m };
    out.push(PathCommand::MoveTo(Point::new(bottom_x, m + grid_h)));
    push_dashes(out, Vec2::new(t, 0.0), half);

    // right
    out.push(PathCommand::MoveTo(Point::new(m + grid_w, m - t)));
    push_dashes(out, Vec2::new(0.0, t), rows.div_ceil(2));
}

fn push_dashes(out: &mut Vec<PathCommand>, step: Vec2, count: usize) {
    for _ in 0..count {
        out.push(PathCommand::MoveBy(step));
        out.push(PathCommand::LineBy(step));
    }
}

/// The two bit glyphs, drawn from the cell's top-left corner.
///
/// `1` draws the cell's left and right sides, `0` its top and bottom.
fn push_connector(out: &mut Vec<PathCommand>, origin: Point, bit: bool, t: f64) {
    out.push(PathCommand::MoveTo(origin));
    if bit {
        out.push(PathCommand::LineBy(Vec2::new(0.0, t)));
        out.push(PathCommand::MoveBy(Vec2::new(t, 0.0)));
        out.push(PathCommand::LineBy(Vec2::new(0.0, -t)));
    } else {
        out.push(PathCommand::LineBy(Vec2::new(t, 0.0)));
        out.push(PathCommand::MoveBy(Vec2::new(0.0, t)));
        out.push(PathCommand::LineBy(Vec2::new(-t, 0.0)));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/builder.rs"]
mod tests;
