//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::grid::TileRange;

/// Column-major iterator over the tiles of a `TileRange`
pub struct TileIterator {
    x: u32,
    y: u32,
    range: TileRange,
    finished: bool,
}

impl TileIterator {
    pub fn new(range: TileRange) -> TileIterator {
        if range.minx <= range.maxx && range.miny <= range.maxy {
            TileIterator {
                x: range.minx,
                y: range.miny,
                range,
                finished: false,
            }
        } else {
            // Return "empty" iterator for inverted ranges
            TileIterator {
                x: 0,
                y: 0,
                range,
                finished: true,
            }
        }
    }
}

impl Iterator for TileIterator {
    /// Current tile index `(x, y)`
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = (self.x, self.y);
        if self.y < self.range.maxy {
            self.y += 1;
        } else if self.x < self.range.maxx {
            self.x += 1;
            self.y = self.range.miny;
        } else {
            self.finished = true;
        }
        Some(current)
    }
}

/// Column-major iterator over the `(column, row)` cells of a grid of output images
pub struct WindowIterator {
    columns: u32,
    rows: u32,
    index: u64,
}

impl WindowIterator {
    pub fn new(columns: u32, rows: u32) -> WindowIterator {
        WindowIterator {
            columns,
            rows,
            index: 0,
        }
    }
    fn cell_count(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }
}

impl Iterator for WindowIterator {
    /// Current cell `(column, row)`
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.cell_count() {
            return None;
        }
        let column = (self.index / self.rows as u64) as u32;
        let row = (self.index % self.rows as u64) as u32;
        self.index += 1;
        Some((column, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.cell_count() - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowIterator {}

#[test]
fn test_tile_iter() {
    let range = TileRange {
        minx: 3,
        miny: 5,
        maxx: 4,
        maxy: 7,
    };
    let tiles = range.tiles().collect::<Vec<_>>();
    assert_eq!(
        tiles,
        vec![(3, 5), (3, 6), (3, 7), (4, 5), (4, 6), (4, 7)]
    );

    let single = TileRange {
        minx: 0,
        miny: 0,
        maxx: 0,
        maxy: 0,
    };
    assert_eq!(single.tiles().collect::<Vec<_>>(), vec![(0, 0)]);
}

#[test]
fn test_bad_range() {
    let inverted = TileRange {
        minx: 2,
        miny: 0,
        maxx: 1,
        maxy: 0,
    };
    assert_eq!(TileIterator::new(inverted).count(), 0);
}

#[test]
fn test_window_iter() {
    let cells = WindowIterator::new(2, 3).collect::<Vec<_>>();
    assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);

    assert_eq!(WindowIterator::new(2, 3).len(), 6);
    assert_eq!(WindowIterator::new(0, 3).count(), 0);
    assert_eq!(WindowIterator::new(3, 0).count(), 0);
}
