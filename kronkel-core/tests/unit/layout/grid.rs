use std::collections::HashSet;

use super::*;

#[test]
fn reference_message_is_six_by_six() {
    let grid = layout(18, 6, 8.0, 24.0).unwrap();
    assert_eq!(grid.rows, 6);
    assert_eq!(grid.bits_per_row(), 3);
    assert_eq!(
        grid.canvas,
        CanvasSize {
            width: 96.0,
            height: 96.0
        }
    );
}

#[test]
fn empty_stream_has_zero_rows() {
    let grid = layout(0, 10, 8.0, 24.0).unwrap();
    assert_eq!(grid.rows, 0);
    assert_eq!(grid.canvas.height, 48.0);
    assert_eq!(grid.canvas.width, 48.0 + 80.0);
}

#[test]
fn canvas_follows_formula() {
    for (len, columns, tile, margin) in [(12, 4, 8.0, 24.0), (30, 10, 5.5, 3.0), (7, 2, 1.0, 0.0)]
    {
        let grid = layout(len, columns, tile, margin).unwrap();
        assert_eq!(
            grid.rows as usize * grid.bits_per_row(),
            len,
            "rows must be exact"
        );
        assert_eq!(grid.canvas.width, 2.0 * margin + f64::from(columns) * tile);
        assert_eq!(grid.canvas.height, 2.0 * margin + f64::from(grid.rows) * tile);
    }
}

#[test]
fn rejects_bad_columns_and_unaligned_lengths() {
    assert!(matches!(
        layout(4, 0, 8.0, 24.0),
        Err(KronkelError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        layout(4, 6, 8.0, 24.0),
        Err(KronkelError::InvalidConfiguration(_))
    ));
}

#[test]
fn cells_interleave_even_and_odd_columns() {
    let grid = layout(12, 6, 8.0, 24.0).unwrap();
    let cells: Vec<_> = (0..12).map(|i| grid.cell(i)).collect();
    assert_eq!(
        cells,
        vec![
            (0, 0),
            (2, 0),
            (4, 0),
            (1, 1),
            (3, 1),
            (5, 1),
            (0, 2),
            (2, 2),
            (4, 2),
            (1, 3),
            (3, 3),
            (5, 3),
        ]
    );
}

#[test]
fn cell_mapping_is_injective_and_in_bounds() {
    for columns in (2..=24).step_by(2) {
        let half = columns as usize / 2;
        for rows in 0..=9usize {
            let len = half * rows;
            let grid = layout(len, columns, 8.0, 24.0).unwrap();
            let mut seen = HashSet::new();
            for i in 0..len {
                let (x, y) = grid.cell(i);
                assert!(x < columns as usize, "x={x} columns={columns}");
                assert!(y < rows, "y={y} rows={rows}");
                assert!(seen.insert((x, y)), "collision at bit {i}");
            }
        }
    }
}

#[test]
fn cell_origin_is_in_pixels() {
    let grid = layout(12, 6, 8.0, 24.0).unwrap();
    assert_eq!(grid.cell_origin(0), Point::new(24.0, 24.0));
    assert_eq!(grid.cell_origin(4), Point::new(24.0 + 3.0 * 8.0, 24.0 + 8.0));
}
