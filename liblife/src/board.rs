use itertools::Itertools;

use crate::{error::LifeError, pos::Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    width: usize,
    height: usize,
    pub(crate) tiles: Vec<TileState>,
}

impl GameBoard {
    /// Creates a board with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let tile_count = Self::tile_count(width, height)?;

        let mut tiles = Vec::new();
        tiles
            .try_reserve_exact(tile_count)
            .map_err(|_| LifeError::BoardTooLarge { width, height })?;
        tiles.resize(tile_count, TileState::default());

        Self::with_tiles(width, height, tiles)
    }

    pub fn with_tiles(width: usize, height: usize, tiles: Vec<TileState>) -> Result<Self, LifeError> {
        let expected = Self::tile_count(width, height)?;
        if tiles.len() != expected {
            return Err(LifeError::TileCountMismatch {
                expected,
                actual: tiles.len(),
            });
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    fn tile_count(width: usize, height: usize) -> Result<usize, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::EmptyBoard { width, height });
        }

        width
            .checked_mul(height)
            .ok_or(LifeError::BoardTooLarge { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileState] {
        &self.tiles
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    pub fn is_alive<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        self.tile(pos).is_some_and(|tile| tile.is_alive())
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn alive_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_alive()).count()
    }

    pub fn clear(&mut self) {
        self.tiles.fill(TileState::Dead);
    }

    /// Counts the live cells among the 8 neighbors of `pos`, wrapping around the edges.
    pub fn alive_neighbor_count(&self, pos: Position) -> usize {
        (-1..=1isize)
            .cartesian_product(-1..=1isize)
            .filter(|&offset| offset != (0, 0))
            .map(|(dx, dy)| pos.wrapping_offset(dx, dy, self.width, self.height))
            .filter(|&neighbor| self.is_alive(neighbor))
            .count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    pub(crate) fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}
