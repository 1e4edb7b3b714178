use std::io::{BufRead, Write};

use anyhow::Result;
use chess_rules::{
    move_to_coord, outcome, parse_coord_move, Color, Engine, Move, Outcome, Position,
};
use tracing::info;

/// What the human asked for on their turn.
#[derive(Debug)]
pub enum PlayerAction {
    Play(Move),
    Resign,
}

/// Interpret one line of input on the human's turn. Returns None for input
/// that is malformed or not a legal move here; the caller re-prompts and the
/// position is left untouched.
pub fn interpret_input(pos: &Position, line: &str) -> Option<PlayerAction> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("resign") {
        return Some(PlayerAction::Resign);
    }
    parse_coord_move(pos, trimmed).map(PlayerAction::Play)
}

/// One interactive game: human moves alternate with engine replies at a
/// fixed search depth until the game ends or the human resigns.
pub struct GameSession {
    position: Position,
    engine: Box<dyn Engine>,
    depth: u8,
    human: Color,
}

impl GameSession {
    pub fn new(position: Position, engine: Box<dyn Engine>, depth: u8, human: Color) -> Self {
        Self {
            position,
            engine,
            depth,
            human,
        }
    }

    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Playing against {} at depth {}.", self.engine.name(), self.depth)?;
        writeln!(out, "Enter moves in coordinate notation (e2e4); 'quit' resigns.")?;

        loop {
            writeln!(out)?;
            writeln!(out, "{}", self.position)?;

            if let Some(end) = outcome(&self.position) {
                match end {
                    Outcome::Checkmate { winner } => writeln!(out, "Checkmate. {winner} wins.")?,
                    Outcome::Stalemate => writeln!(out, "Stalemate. Draw.")?,
                }
                return Ok(());
            }
            if self.position.in_check(self.position.side_to_move) {
                writeln!(out, "{} is in check.", self.position.side_to_move)?;
            }

            if self.position.side_to_move == self.human {
                match self.human_turn(input, out)? {
                    Some(PlayerAction::Play(mv)) => {
                        self.position.make_move(mv);
                    }
                    Some(PlayerAction::Resign) => {
                        writeln!(out, "{} resigns. {} wins.", self.human, self.human.other())?;
                        return Ok(());
                    }
                    // Input closed; end the session quietly.
                    None => return Ok(()),
                }
            } else {
                let report = self.engine.search(&self.position, self.depth);
                let Some(mv) = report.best_move else {
                    // The outcome check above makes this unreachable.
                    return Ok(());
                };
                info!(score = report.score, nodes = report.nodes, "engine move");
                writeln!(out, "{} plays {}", self.engine.name(), move_to_coord(mv))?;
                self.position.make_move(mv);
            }
        }
    }

    fn human_turn(
        &self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<Option<PlayerAction>> {
        loop {
            write!(out, "your move> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match interpret_input(&self.position, &line) {
                Some(action) => return Ok(Some(action)),
                None => writeln!(out, "Illegal or malformed move; try something like e2e4.")?,
            }
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
