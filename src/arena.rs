//! Diamond arena geometry and the per-cell occupancy grid.
//!
//! The arena is a diamond embedded in a 28x28 grid: row `y` in the lower half
//! spans columns `13 - y ..= 14 + y`, mirrored in the upper half. The four
//! diagonal sides are the deploy edges for mobile units.

use crate::constants::*;
use crate::location::*;
use bitflags::*;
use itertools::iproduct;

bitflags! {
    /// Unit occupancy of a single cell, as reported by the engine snapshot.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct OccupancyFlags: u8 {
        const NONE = 0;
        const STATIONARY = 1;
        const MOBILE = 2;
    }
}

/// One of the four diagonal arena sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Whether `(x, y)` lies inside the diamond arena.
pub fn in_arena_bounds(x: u8, y: u8) -> bool {
    if x >= ARENA_SIZE || y >= ARENA_SIZE {
        return false;
    }
    let (x, y) = (x as i16, y as i16);
    if y < HALF_ARENA as i16 {
        x + y >= 13 && x - y <= 14
    } else {
        y - x <= 14 && x + y <= 41
    }
}

/// The cells of one diagonal edge, corner outward, `EDGE_LENGTH` cells each.
pub fn edge_locations(edge: Edge) -> Vec<Location> {
    (0..EDGE_LENGTH as u8)
        .map(|n| match edge {
            Edge::TopLeft => Location::from_xy(HALF_ARENA - 1 - n, ARENA_SIZE - 1 - n),
            Edge::TopRight => Location::from_xy(HALF_ARENA + n, ARENA_SIZE - 1 - n),
            Edge::BottomLeft => Location::from_xy(HALF_ARENA - 1 - n, n),
            Edge::BottomRight => Location::from_xy(HALF_ARENA + n, n),
        })
        .collect()
}

/// All in-bounds cells of our half of the arena, column-major.
pub fn own_half_locations() -> Vec<Location> {
    iproduct!(0..ARENA_SIZE, 0..HALF_ARENA)
        .filter(|&(x, y)| in_arena_bounds(x, y))
        .map(|(x, y)| Location::from_xy(x, y))
        .collect()
}

/// Dense per-cell occupancy for the whole grid.
///
/// Built by the embedder from the engine's frame data; the decision layers
/// only read it through [`ArenaOccupancy::is_stationary`].
#[derive(Clone)]
pub struct ArenaOccupancy {
    buffer: Vec<u8>,
}

impl Default for ArenaOccupancy {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaOccupancy {
    /// An empty occupancy grid.
    pub fn new() -> Self {
        ArenaOccupancy {
            buffer: vec![0; ARENA_SIZE as usize * ARENA_SIZE as usize],
        }
    }

    pub fn get(&self, loc: Location) -> OccupancyFlags {
        self.get_xy(loc.x(), loc.y())
    }

    pub fn get_xy(&self, x: u8, y: u8) -> OccupancyFlags {
        let index = (y as usize * ARENA_SIZE as usize) + (x as usize);
        OccupancyFlags::from_bits_truncate(self.buffer[index])
    }

    pub fn insert(&mut self, loc: Location, flags: OccupancyFlags) {
        let index = (loc.y() as usize * ARENA_SIZE as usize) + (loc.x() as usize);
        self.buffer[index] |= flags.bits();
    }

    /// Whether the cell holds a stationary unit.
    pub fn is_stationary(&self, loc: Location) -> bool {
        self.get(loc).contains(OccupancyFlags::STATIONARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_the_diamond() {
        // Lower-half corners of row 0 and row 13.
        assert!(in_arena_bounds(13, 0));
        assert!(in_arena_bounds(14, 0));
        assert!(!in_arena_bounds(12, 0));
        assert!(in_arena_bounds(0, 13));
        assert!(!in_arena_bounds(0, 12));
        // Upper half mirrors the lower half.
        assert!(in_arena_bounds(0, 14));
        assert!(in_arena_bounds(13, 27));
        assert!(in_arena_bounds(27, 14));
        assert!(!in_arena_bounds(12, 27));
        assert!(!in_arena_bounds(28, 14));
    }

    #[test]
    fn edges_have_fourteen_cells_inside_the_arena() {
        for edge in [
            Edge::TopLeft,
            Edge::TopRight,
            Edge::BottomLeft,
            Edge::BottomRight,
        ] {
            let cells = edge_locations(edge);
            assert_eq!(cells.len(), EDGE_LENGTH);
            for cell in cells {
                assert!(in_arena_bounds(cell.x(), cell.y()), "{cell:?} out of bounds");
            }
        }
        assert_eq!(edge_locations(Edge::BottomLeft)[0], Location::from_xy(13, 0));
        assert_eq!(edge_locations(Edge::BottomRight)[0], Location::from_xy(14, 0));
    }

    #[test]
    fn own_half_covers_the_lower_diamond() {
        let cells = own_half_locations();
        // Row y holds 2 * (y + 1) cells: 2 + 4 + ... + 28 = 210.
        assert_eq!(cells.len(), 210);
        assert!(cells.iter().all(|c| c.y() < HALF_ARENA));
    }

    #[test]
    fn occupancy_flags_roundtrip() {
        let mut occupancy = ArenaOccupancy::new();
        let loc = Location::from_xy(13, 0);
        assert!(!occupancy.is_stationary(loc));
        occupancy.insert(loc, OccupancyFlags::STATIONARY);
        assert!(occupancy.is_stationary(loc));
        occupancy.insert(loc, OccupancyFlags::MOBILE);
        assert_eq!(
            occupancy.get(loc),
            OccupancyFlags::STATIONARY | OccupancyFlags::MOBILE
        );
    }
}
