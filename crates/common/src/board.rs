pub const WIDTH: usize = 8;
pub const HEIGHT: usize = 8;
pub const CELLS: usize = WIDTH * HEIGHT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece {
    Light,
    Dark,
}

/// One square of the display grid. Derived from its index, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardCell {
    pub index: usize,
    pub shade: Shade,
    pub piece: Option<Piece>,
}

impl BoardCell {
    pub fn new(index: usize) -> Self {
        let shade = if (index / WIDTH + index) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        };
        let piece = match index {
            i if i < 2 * WIDTH => Some(Piece::Light),
            i if i >= CELLS - 2 * WIDTH => Some(Piece::Dark),
            _ => None,
        };
        BoardCell {
            index,
            shade,
            piece,
        }
    }

    pub fn row(&self) -> usize {
        self.index / WIDTH
    }

    pub fn col(&self) -> usize {
        self.index % WIDTH
    }
}

pub fn cells() -> impl Iterator<Item = BoardCell> {
    (0..CELLS).map(BoardCell::new)
}
