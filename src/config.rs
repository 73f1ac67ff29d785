/// Width and height of the square playing grid.
pub const BOARD_SIZE: usize = 3;
