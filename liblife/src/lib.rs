use std::mem;

use board::{GameBoard, TileState};

pub mod board;
pub mod color;
pub mod error;
pub mod framebuffer;
pub mod pattern;
pub mod place;
pub mod pos;
pub mod rule;

pub use color::Color;
pub use error::LifeError;
pub use framebuffer::Framebuffer;
pub use pattern::Pattern;
pub use pos::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: GameBoard,
    pub generation: u64,
    // Receives the next generation before being swapped with the board tiles.
    next_tiles: Vec<TileState>,
}

impl Game {
    pub fn new(board: GameBoard) -> Self {
        let next_tiles = vec![TileState::Dead; board.tiles.len()];

        Self {
            board,
            generation: 0,
            next_tiles,
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Advances the board by one generation.
    ///
    /// Every cell is computed from the current tiles into a separate buffer, and only then are the
    /// buffers swapped, so no cell ever sees a partially updated neighborhood.
    pub fn step(&mut self) {
        // The swap below hands the scratch vector to the board, so it must cover every tile.
        self.next_tiles.resize(self.board.tiles.len(), TileState::Dead);

        let board = &self.board;

        for (next_tile, (tile_pos, tile)) in self.next_tiles.iter_mut().zip(board.enumerate_tiles()) {
            *next_tile = rule::next_state(*tile, board.alive_neighbor_count(tile_pos));
        }

        mem::swap(&mut self.board.tiles, &mut self.next_tiles);
        self.generation += 1;
    }

    pub fn step_n(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Game {
        let mut board = GameBoard::new(width, height).unwrap();
        for &cell in alive {
            *board.tile_mut(cell).unwrap() = TileState::Alive;
        }
        Game::new(board)
    }

    fn alive_cells(game: &Game) -> Vec<(usize, usize)> {
        game.board()
            .enumerate_tiles()
            .filter(|(_, tile)| tile.is_alive())
            .map(|(pos, _)| (pos.x, pos.y))
            .collect()
    }

    #[test]
    fn block_is_still() {
        let block = [(3, 3), (4, 3), (3, 4), (4, 4)];
        let mut game = game_with(8, 8, &block);

        game.step();

        assert_eq!(alive_cells(&game), block.to_vec());
        assert_eq!(game.generation, 1);
    }

    #[test]
    fn blinker_has_period_two() {
        let horizontal = [(2, 3), (3, 3), (4, 3)];
        let mut game = game_with(7, 7, &horizontal);
        let start = game.board().clone();

        game.step();
        assert_eq!(alive_cells(&game), vec![(3, 2), (3, 3), (3, 4)]);

        game.step();
        assert_eq!(game.board(), &start);
    }

    #[test]
    fn step_is_deterministic() {
        let cells = [(1, 1), (2, 1), (2, 2), (5, 5), (6, 5), (7, 5), (0, 7)];
        let mut first = game_with(9, 9, &cells);
        let mut second = first.clone();

        first.step();
        second.step();

        assert_eq!(first.board(), second.board());
    }

    #[test]
    fn step_reads_only_the_previous_generation() {
        // An L of three cells gives birth to the fourth corner and keeps all three alive. An
        // in-place update would already count the newborn while visiting later cells.
        let mut game = game_with(6, 6, &[(1, 1), (2, 1), (1, 2)]);
        game.step();
        assert_eq!(alive_cells(&game), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn blinker_across_the_seam_survives() {
        // Horizontal blinker centred on column 0 so its ends sit on opposite edges.
        let mut game = game_with(6, 6, &[(5, 2), (0, 2), (1, 2)]);
        game.step();
        assert_eq!(alive_cells(&game), vec![(0, 1), (0, 2), (0, 3)]);
        game.step();
        assert_eq!(alive_cells(&game), vec![(0, 2), (1, 2), (5, 2)]);
    }

    #[test]
    fn glider_returns_home_on_torus() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let mut game = game_with(8, 8, &glider);
        let start = game.board().clone();

        // A glider moves one cell diagonally every 4 generations.
        game.step_n(4 * 8);

        assert_eq!(game.board(), &start);
        assert_eq!(game.generation, 32);
    }

    #[test]
    fn step_covers_a_replaced_board() {
        let mut game = game_with(4, 4, &[]);

        let mut board = GameBoard::new(10, 10).unwrap();
        for cell in [(6, 6), (7, 6), (6, 7), (7, 7)] {
            *board.tile_mut(cell).unwrap() = TileState::Alive;
        }
        game.board = board;

        game.step();

        assert_eq!(game.board().tiles().len(), 100);
        assert_eq!(
            alive_cells(&game),
            vec![(6, 6), (7, 6), (6, 7), (7, 7)]
        );
    }

    #[test]
    fn dimensions_survive_many_steps() {
        let mut game = game_with(7, 5, &[(1, 1), (2, 1), (3, 1)]);
        game.step_n(9);

        assert_eq!((game.board().width(), game.board().height()), (7, 5));
        assert_eq!(game.board().tiles().len(), 35);
    }

    #[test]
    fn lonely_cell_dies() {
        let mut game = game_with(4, 4, &[(2, 2)]);
        game.step();
        assert_eq!(game.board().alive_count(), 0);
    }
}
