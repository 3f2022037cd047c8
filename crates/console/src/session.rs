//! The game loop.
//!
//! Generic over its input and output so tests can script a whole game.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use chess_core::{Color, DrawReason, Engine, GameStatus, MovePolicy, Square};
use tracing::{debug, info, warn};

use crate::command::{parse_command, Command, HELP};
use crate::config::{ConsoleConfig, Mode};
use crate::error::ConsoleError;
use crate::record::{GameRecord, RecordedMove};
use crate::render::render_board;

/// Why [`Session::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Checkmate, stalemate or a draw.
    GameOver(GameStatus),
    /// Self-play reached its ply cap.
    PlyLimit,
    /// The policy produced no playable move for this side.
    Resigned(Color),
    Quit,
    /// Input closed before the game finished.
    EndOfInput,
}

impl SessionEnd {
    pub fn describe(self) -> String {
        match self {
            SessionEnd::GameOver(status) => {
                status_message(status).unwrap_or_else(|| "Game in progress".to_string())
            }
            SessionEnd::PlyLimit => "Unfinished: ply limit reached".to_string(),
            SessionEnd::Resigned(color) => format!("{color} resigned"),
            SessionEnd::Quit => "Unfinished: quit".to_string(),
            SessionEnd::EndOfInput => "Unfinished: input closed".to_string(),
        }
    }
}

/// The line shown under the board for `status`; nothing while play is routine.
pub fn status_message(status: GameStatus) -> Option<String> {
    let msg = match status {
        GameStatus::InProgress => return None,
        GameStatus::Check(color) => format!("{color} is in check!"),
        GameStatus::Checkmate { winner } => format!("Checkmate! {winner} wins!"),
        GameStatus::Stalemate => "Stalemate! The game is a draw.".to_string(),
        GameStatus::Draw(DrawReason::FiftyMoveRule) => "Draw by fifty-move rule.".to_string(),
        GameStatus::Draw(DrawReason::InsufficientMaterial) => {
            "Draw by insufficient material.".to_string()
        }
    };
    Some(msg)
}

pub struct Session {
    engine: Engine,
    policy: Box<dyn MovePolicy>,
    config: ConsoleConfig,
}

impl Session {
    pub fn new(config: ConsoleConfig, policy: Box<dyn MovePolicy>) -> Self {
        Self::with_engine(config, policy, Engine::new())
    }

    /// Continue from an existing game instead of the starting position.
    pub fn with_engine(config: ConsoleConfig, policy: Box<dyn MovePolicy>, engine: Engine) -> Self {
        Self {
            engine,
            policy,
            config,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn record(&self, end: SessionEnd) -> GameRecord {
        GameRecord::new(self.config.mode, end.describe(), self.engine.history())
    }

    /// Play until the game ends, the player quits, or `input` runs dry.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
    ) -> Result<SessionEnd, ConsoleError> {
        info!(mode = ?self.config.mode, policy = self.policy.name(), "session started");
        let mut lines = input.lines();
        self.show_board(out, &BTreeSet::new())?;

        loop {
            let status = self.engine.status();
            if status.is_terminal() {
                if let Some(msg) = status_message(status) {
                    writeln!(out, "{msg}")?;
                }
                info!(?status, plies = self.engine.history().len(), "game over");
                return Ok(SessionEnd::GameOver(status));
            }

            let mover = self.engine.turn();
            if self.config.is_ai(mover) {
                if self.config.mode == Mode::SelfPlay
                    && self.engine.history().len() >= self.config.max_plies as usize
                {
                    writeln!(out, "Stopping after {} plies.", self.config.max_plies)?;
                    return Ok(SessionEnd::PlyLimit);
                }
                if !self.play_ai(out)? {
                    writeln!(out, "{mover} resigns.")?;
                    return Ok(SessionEnd::Resigned(mover));
                }
                continue;
            }

            write!(out, "{mover} to move> ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(out)?;
                return Ok(SessionEnd::EndOfInput);
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(Command::Quit) => return Ok(SessionEnd::Quit),
                Ok(cmd) => {
                    debug!(?cmd, "command");
                    self.execute(cmd, out)?;
                }
                Err(err) => writeln!(out, "{err}")?,
            }
        }
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), ConsoleError> {
        match cmd {
            Command::Move(from, to) => self.try_human_move(from, to, out),
            Command::Moves(sq) => self.show_moves(sq, out),
            Command::Undo => self.undo(out),
            Command::New => {
                self.engine.new_game();
                self.policy.new_game();
                writeln!(out, "New game.")?;
                self.show_board(out, &BTreeSet::new())
            }
            Command::History => self.show_history(out),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                Ok(())
            }
            // Handled by the loop.
            Command::Quit => Ok(()),
        }
    }

    fn try_human_move<W: Write>(
        &mut self,
        from: Square,
        to: Square,
        out: &mut W,
    ) -> Result<(), ConsoleError> {
        let mover = self.engine.turn();
        if self.engine.make_move(from, to) {
            return self.after_ply(mover, from, to, out);
        }
        match self.engine.piece_at(from) {
            None => writeln!(out, "There is no piece on {from}.")?,
            Some(pc) if pc.color != mover => {
                writeln!(out, "The {} on {from} is not yours; {mover} to move.", pc)?
            }
            Some(_) => writeln!(out, "{from} → {to} is not a legal move.")?,
        }
        Ok(())
    }

    /// Let the policy move. False when it has nothing playable.
    fn play_ai<W: Write>(&mut self, out: &mut W) -> Result<bool, ConsoleError> {
        let mover = self.engine.turn();
        let Some((from, to)) = self.policy.choose_move(&self.engine) else {
            warn!(policy = self.policy.name(), "no move from policy in a live position");
            return Ok(false);
        };
        if !self.engine.make_move(from, to) {
            warn!(policy = self.policy.name(), %from, %to, "policy chose an illegal move");
            return Ok(false);
        }
        self.after_ply(mover, from, to, out)?;
        Ok(true)
    }

    fn after_ply<W: Write>(
        &mut self,
        mover: Color,
        from: Square,
        to: Square,
        out: &mut W,
    ) -> Result<(), ConsoleError> {
        writeln!(out, "{mover} plays {from} → {to}")?;
        self.show_board(out, &BTreeSet::new())?;
        if let status @ GameStatus::Check(_) = self.engine.status() {
            if let Some(msg) = status_message(status) {
                writeln!(out, "{msg}")?;
            }
        }
        Ok(())
    }

    fn show_moves<W: Write>(&mut self, sq: Square, out: &mut W) -> Result<(), ConsoleError> {
        let dests = self.engine.get_legal_moves(sq);
        self.show_board(out, &dests)?;
        if dests.is_empty() {
            writeln!(out, "No legal moves from {sq}.")?;
        } else {
            let list: Vec<String> = dests.iter().map(|d| d.to_notation()).collect();
            writeln!(out, "Legal moves from {sq}: {}", list.join(" "))?;
        }
        Ok(())
    }

    /// Against the computer, keep taking back until it is the human's turn again.
    fn undo<W: Write>(&mut self, out: &mut W) -> Result<(), ConsoleError> {
        let mut undone = 0;
        while self.engine.undo_last_move().is_some() {
            undone += 1;
            if self.config.mode != Mode::VsAi || !self.config.is_ai(self.engine.turn()) {
                break;
            }
        }
        if undone == 0 {
            writeln!(out, "No moves to undo!")?;
            return Ok(());
        }
        writeln!(out, "Took back {undone} ply(s).")?;
        self.show_board(out, &BTreeSet::new())
    }

    fn show_history<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        let history = self.engine.history();
        if history.is_empty() {
            writeln!(out, "No moves yet.")?;
        }
        for (i, rec) in history.iter().enumerate() {
            writeln!(out, "{}", RecordedMove::new(i + 1, rec).history_line())?;
        }
        Ok(())
    }

    fn show_board<W: Write>(
        &self,
        out: &mut W,
        highlights: &BTreeSet<Square>,
    ) -> Result<(), ConsoleError> {
        write!(
            out,
            "{}",
            render_board(self.engine.board(), highlights, self.config.glyphs)
        )?;
        writeln!(out, "{} to move", self.engine.turn())?;
        Ok(())
    }
}
