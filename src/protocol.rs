use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use log::{debug, info};

use crate::board::Board;
use crate::engine::Engine;
use crate::game::Game;
use crate::square::{file_index, Piece};

/// One side of the runner's line protocol: a move-text line per turn in each
/// direction, preceded by the gap-file handshake. Generic over the reader
/// and writer so tests can drive it with in-memory buffers.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    color: Piece,
    engine: Engine,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, color: Piece, engine: Engine) -> Session<R, W> {
        Session {
            reader,
            writer,
            color,
            engine,
        }
    }

    /// Plays one full match against the runner on the other end of the
    /// pipes and returns the winner. As Black we offer `chosen_gaps` first;
    /// either way the runner's verified gap pair decides the board.
    pub fn play(&mut self, chosen_gaps: &str) -> Result<Option<Piece>> {
        if self.color == Piece::Black {
            writeln!(self.writer, "{chosen_gaps}")?;
            self.writer.flush()?;
        }
        let verified = self.read_line()?;
        let (white_gap, black_gap) =
            parse_gaps(&verified).context("runner sent malformed gap files")?;
        let mut game = Game::new(Board::new(white_gap, black_gap), Piece::White);
        info!("match started, we play {} with gaps {verified}", self.color);

        if self.color == Piece::White {
            self.play_own_move(&mut game)?;
        }
        while !game.is_over() {
            self.play_opponent_move(&mut game)?;
            if game.is_over() {
                break;
            }
            self.play_own_move(&mut game)?;
        }
        debug!("final position:\n{}", game.board());
        Ok(game.winner())
    }

    fn play_own_move(&mut self, game: &mut Game) -> Result<()> {
        if let Some(mv) = self.engine.pick_move(game) {
            game.apply_move(mv);
            writeln!(self.writer, "{mv}")?;
            self.writer.flush()?;
            info!("played {mv}");
        }
        Ok(())
    }

    /// Reads lines until one names a legal move for the opponent; anything
    /// unparsable or illegal is skipped without touching the game state.
    fn play_opponent_move(&mut self, game: &mut Game) -> Result<()> {
        loop {
            let line = self.read_line()?;
            if let Some(mv) = game.parse_move(&line) {
                game.apply_move(mv);
                info!("opponent played {mv}");
                return Ok(());
            }
            info!("ignoring unparsable move {line:?}");
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            bail!("runner closed the connection");
        }
        Ok(line.trim().to_string())
    }
}

/// "ah" means White is missing the a-file pawn and Black the h-file pawn.
/// Case-insensitive, like move text.
pub fn parse_gaps(text: &str) -> Option<(u8, u8)> {
    let mut chars = text.trim().chars();
    let white = file_index(chars.next()?)?;
    let black = file_index(chars.next()?)?;
    if chars.next().is_some() {
        return None;
    }
    Some((white, black))
}
