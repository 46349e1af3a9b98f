use liblife::{Color, Framebuffer, Game};

/// One board plus the pixels it is drawn into. Each frame steps the board and repaints.
pub struct Simulation {
    pub game: Game,
    pub framebuffer: Framebuffer,
    pub foreground: Color,
    pub background: Color,
}

impl Simulation {
    pub fn new(game: Game, display_width: usize, display_height: usize, foreground: Color, background: Color) -> Self {
        let mut framebuffer = Framebuffer::new(display_width, display_height);
        framebuffer.render(game.board(), foreground, background);

        Self {
            game,
            framebuffer,
            foreground,
            background,
        }
    }

    /// Advances one generation and repaints the framebuffer from the settled board.
    pub fn advance(&mut self) -> &Framebuffer {
        self.game.step();
        self.framebuffer
            .render(self.game.board(), self.foreground, self.background);

        &self.framebuffer
    }
}

#[cfg(test)]
mod tests {
    use liblife::{Position, board::GameBoard, pattern::library::BLINKER, place::place};

    use super::*;

    fn blinker_simulation(display: usize) -> Simulation {
        let mut board = GameBoard::new(5, 5).unwrap();
        place(&mut board, Position::new(1, 2), &BLINKER);

        Simulation::new(Game::new(board), display, display, Color::RED, Color::BLUE)
    }

    #[test]
    fn initial_frame_shows_seeded_board() {
        let simulation = blinker_simulation(5);

        assert_eq!(simulation.framebuffer.pixel(1, 2), Some(Color::RED));
        assert_eq!(simulation.framebuffer.pixel(2, 1), Some(Color::BLUE));
    }

    #[test]
    fn advance_steps_then_repaints() {
        let mut simulation = blinker_simulation(5);

        let frame = simulation.advance();

        assert_eq!(frame.pixel(2, 1), Some(Color::RED));
        assert_eq!(frame.pixel(2, 3), Some(Color::RED));
        assert_eq!(frame.pixel(1, 2), Some(Color::BLUE));
        assert_eq!(simulation.game.generation, 1);
    }

    #[test]
    fn scaled_display() {
        let mut simulation = blinker_simulation(10);
        simulation.advance();

        let lit = simulation
            .framebuffer
            .pixels()
            .iter()
            .filter(|&&pixel| pixel == Color::RED)
            .count();
        assert_eq!(lit, 3 * 4);
    }
}
