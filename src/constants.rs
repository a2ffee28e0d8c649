/// Width and height of the square grid the diamond arena is embedded in.
pub const ARENA_SIZE: u8 = 28;

/// Row index separating the two players' halves. Rows `0..HALF_ARENA` belong
/// to us; rows `HALF_ARENA..ARENA_SIZE` belong to the enemy.
pub const HALF_ARENA: u8 = 14;

/// Number of cells on each diagonal arena edge.
pub const EDGE_LENGTH: usize = HALF_ARENA as usize;
