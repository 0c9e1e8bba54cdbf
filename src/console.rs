//! Line-oriented text protocol for driving the engine.
//!
//! The console plays the part of the external caller: it owns an
//! [`EngineState`], applies moves, asks the engine for computer moves and
//! persists games to files. The framing follows GTP: every response starts
//! with `=` (success) or `?` (failure), optionally followed by the numeric id
//! of the request, and ends with a blank line. When the computer owns the
//! first move, it is played before any command is read and announced as a
//! response without an id (`= H8`).
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `list_commands`, `known_command <cmd>`, `quit`
//! - `boardsize <n>` - Start a new game on an `n` x `n` board
//! - `clear_board` / `reset` - Start over with the same size and mode
//! - `mode hvh` / `mode hvc [x|o]` - Switch mode (`x|o` is the computer's colour)
//! - `difficulty <easy|normal|hard>` - Set the computer's strength
//! - `play <coord>` - Play a human move; in `hvc` mode the reply is returned
//! - `genmove` - Let the computer play for the side to move
//! - `undo` - Take back a move (or a move pair against the computer)
//! - `winner` - `X`, `O` or `none`
//! - `showboard` - Print the board
//! - `save <path>` / `load <path>` - Persist or restore the game

use std::fs;
use std::io::{self, BufRead, Write};

use fastrand::Rng;
use tracing::{info, warn};

use crate::board::{Player, parse_coord, str_coord};
use crate::difficulty::Difficulty;
use crate::error::{Error, Result};
use crate::game::{EngineState, GameMode};
use crate::snapshot::{deserialize, serialize};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "difficulty",
    "genmove",
    "known_command",
    "list_commands",
    "load",
    "mode",
    "name",
    "play",
    "quit",
    "reset",
    "save",
    "showboard",
    "undo",
    "version",
    "winner",
];

/// Console session state.
pub struct Console {
    state: EngineState,
    difficulty: Difficulty,
    rng: Rng,
}

impl Console {
    /// Create a console with a new game.
    pub fn new(size: usize, mode: GameMode, difficulty: Difficulty, rng: Rng) -> Result<Self> {
        Ok(Self {
            state: EngineState::new_game(size, mode)?,
            difficulty,
            rng,
        })
    }

    /// Current game.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Read commands from `input` and write responses to `output` until
    /// `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        // The computer may own the first move
        if let Some(mv) = self.computer_reply() {
            info!(cell = %mv, "computer opened");
            writeln!(output, "= {mv}\n")?;
            output.flush()?;
        }

        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match self.dispatch(command, args) {
            Ok(message) => (true, message),
            Err(message) => (false, message),
        }
    }

    fn dispatch(&mut self, command: &str, args: &[&str]) -> std::result::Result<String, String> {
        let arg = |i: usize| args.get(i).copied().ok_or("missing argument");

        match command {
            "name" => Ok(env!("CARGO_PKG_NAME").to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let known = KNOWN_COMMANDS.contains(&arg(0)?.to_lowercase().as_str());
                Ok(known.to_string())
            }

            "quit" => Ok(String::new()),

            "boardsize" => {
                let size: usize = arg(0)?.parse().map_err(|_| "invalid size")?;
                self.state =
                    EngineState::new_game(size, self.state.mode()).map_err(|e| e.to_string())?;
                Ok(self.computer_reply().unwrap_or_default())
            }

            "clear_board" | "reset" => {
                self.state = self.state.reset();
                Ok(self.computer_reply().unwrap_or_default())
            }

            "mode" => {
                let mode = match arg(0)?.to_lowercase().as_str() {
                    "hvh" => GameMode::HumanVsHuman,
                    "hvc" => {
                        let computer = match args.get(1) {
                            Some(p) => p.parse().map_err(|e: Error| e.to_string())?,
                            None => Player::White,
                        };
                        GameMode::HumanVsComputer { computer }
                    }
                    other => return Err(format!("unknown mode: {other}")),
                };
                self.state =
                    EngineState::new_game(self.state.size(), mode).map_err(|e| e.to_string())?;
                Ok(self.computer_reply().unwrap_or_default())
            }

            "difficulty" => {
                self.difficulty = arg(0)?.parse().map_err(|e: Error| e.to_string())?;
                Ok(self.difficulty.to_string())
            }

            "play" => {
                let index = parse_coord(arg(0)?, self.state.size()).map_err(|e| e.to_string())?;
                self.state = self
                    .state
                    .apply_human_move(index)
                    .map_err(|e| e.to_string())?;
                Ok(self.computer_reply().unwrap_or_default())
            }

            "genmove" => {
                if let Some(winner) = self.state.winner() {
                    return Err(format!("game over, {winner} won"));
                }
                match self.state.compute_ai_move(self.difficulty, &mut self.rng) {
                    Some(index) => {
                        self.state = self.state.apply_move(index).map_err(|e| e.to_string())?;
                        Ok(str_coord(index, self.state.size()))
                    }
                    None => Ok("pass".to_string()),
                }
            }

            "undo" => {
                self.state = self.state.undo();
                Ok(self.computer_reply().unwrap_or_default())
            }

            "winner" => Ok(self
                .state
                .winner()
                .map_or_else(|| "none".to_string(), |p| p.to_string())),

            "showboard" => Ok(format!("\n{}", self.state.board())),

            "save" => {
                let path = arg(0)?;
                let blob = serialize(&self.state).map_err(|e| e.to_string())?;
                fs::write(path, blob).map_err(|e| format!("failed to save {path}: {e}"))?;
                Ok(String::new())
            }

            "load" => {
                let path = arg(0)?;
                let blob =
                    fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
                match deserialize(&blob) {
                    Ok(state) => {
                        self.state = state;
                        Ok(String::new())
                    }
                    Err(e) => {
                        warn!(%path, error = %e, "rejected saved game");
                        Err(e.to_string())
                    }
                }
            }

            _ => Err(format!("unknown command: {command}")),
        }
    }

    /// If the computer is to move and the game is still open, play its move.
    ///
    /// Returns the coordinate played, or `"pass"` if it found nothing.
    fn computer_reply(&mut self) -> Option<String> {
        if !self.state.is_computer_turn() || self.state.is_over() {
            return None;
        }
        let reply = match self.state.compute_ai_move(self.difficulty, &mut self.rng) {
            Some(index) => match self.state.apply_move(index) {
                Ok(next) => {
                    self.state = next;
                    str_coord(index, self.state.size())
                }
                Err(e) => {
                    warn!(error = %e, "computer move rejected");
                    return None;
                }
            },
            None => "pass".to_string(),
        };
        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(mode: GameMode) -> Console {
        Console::new(15, mode, Difficulty::Easy, Rng::with_seed(21)).unwrap()
    }

    fn hvc() -> GameMode {
        GameMode::HumanVsComputer {
            computer: Player::White,
        }
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = Console::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = Console::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_name_command() {
        let mut c = console(GameMode::HumanVsHuman);
        assert_eq!(c.execute("name", &[]), (true, "gomoku-rollout".to_string()));
    }

    #[test]
    fn test_known_command() {
        let mut c = console(GameMode::HumanVsHuman);
        assert_eq!(c.execute("known_command", &["undo"]), (true, "true".into()));
        assert_eq!(c.execute("known_command", &["komi"]), (true, "false".into()));
        assert!(!c.execute("known_command", &[]).0);
    }

    #[test]
    fn test_play_human_vs_human() {
        let mut c = console(GameMode::HumanVsHuman);
        assert_eq!(c.execute("play", &["H8"]), (true, String::new()));
        assert_eq!(c.execute("play", &["I8"]), (true, String::new()));
        assert_eq!(c.state().moves_of(Player::Black), &[112]);
        assert_eq!(c.state().moves_of(Player::White), &[113]);

        let (ok, msg) = c.execute("play", &["H8"]);
        assert!(!ok);
        assert!(msg.contains("occupied"), "{msg}");
        assert!(!c.execute("play", &["Z99"]).0);

        c.execute("undo", &[]);
        assert_eq!(c.state().move_count(), 1);
    }

    #[test]
    fn test_play_against_computer_gets_reply() {
        let mut c = console(hvc());
        let (ok, reply) = c.execute("play", &["H8"]);
        assert!(ok);
        let reply_index = parse_coord(&reply, 15).unwrap();
        assert_eq!(c.state().moves_of(Player::White), &[reply_index]);
        assert_eq!(c.state().turn(), Player::Black);

        c.execute("undo", &[]);
        assert_eq!(c.state().move_count(), 0);
    }

    #[test]
    fn test_computer_as_black_opens_in_center() {
        let mut c = console(GameMode::HumanVsHuman);
        let (ok, reply) = c.execute("mode", &["hvc", "x"]);
        assert!(ok);
        assert_eq!(reply, "H8");
        assert_eq!(c.state().turn(), Player::White);
    }

    #[test]
    fn test_genmove_and_winner() {
        let mut c = console(GameMode::HumanVsHuman);
        for mv in ["A1", "A15", "B1", "B15", "C1", "C15", "D1"] {
            assert!(c.execute("play", &[mv]).0);
        }
        // White must block at E1
        assert_eq!(c.execute("genmove", &[]), (true, "E1".to_string()));
        assert_eq!(c.execute("winner", &[]), (true, "none".to_string()));
    }

    #[test]
    fn test_difficulty_and_boardsize() {
        let mut c = console(GameMode::HumanVsHuman);
        assert_eq!(c.execute("difficulty", &["hard"]), (true, "hard".into()));
        assert!(!c.execute("difficulty", &["impossible"]).0);
        assert!(c.execute("boardsize", &["9"]).0);
        assert_eq!(c.state().size(), 9);
        assert!(!c.execute("boardsize", &["2"]).0);
        assert_eq!(c.state().size(), 9);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("gomoku-console-{}.json", std::process::id()));
        let path_str = path.to_str().unwrap();

        let mut c = console(GameMode::HumanVsHuman);
        c.execute("play", &["H8"]);
        c.execute("play", &["H9"]);
        assert!(c.execute("save", &[path_str]).0);
        let saved = c.state().clone();

        c.execute("reset", &[]);
        assert_eq!(c.state().move_count(), 0);
        assert!(c.execute("load", &[path_str]).0);
        assert_eq!(c.state(), &saved);

        fs::write(&path, "{\"version\":1}").unwrap();
        assert!(!c.execute("load", &[path_str]).0);
        assert_eq!(c.state(), &saved);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_undo_after_human_win_lets_human_play_again() {
        let mut c = console(hvc());
        let mut state = c.state().clone();
        for mv in [0, 195, 1, 196, 2, 197, 3, 198] {
            state = state.apply_move(mv).unwrap();
        }
        c.state = state;
        assert_eq!(c.execute("play", &["E15"]), (true, String::new()));
        assert_eq!(c.execute("winner", &[]), (true, "X".to_string()));

        assert_eq!(c.execute("undo", &[]), (true, String::new()));
        assert_eq!(c.execute("winner", &[]), (true, "none".to_string()));
        assert_eq!(c.state().turn(), Player::Black);

        let (ok, reply) = c.execute("play", &["A14"]);
        assert!(ok, "{reply}");
        assert!(parse_coord(&reply, 15).is_ok(), "{reply}");
    }

    #[test]
    fn test_run_announces_computer_opening() {
        let mode = GameMode::HumanVsComputer {
            computer: Player::Black,
        };
        let mut c = console(mode);
        let mut out = Vec::new();
        c.run(&b"1 showboard\n"[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("= H8\n\n=1 "), "{text}");
        assert_eq!(c.state().moves_of(Player::Black), &[112]);
    }

    #[test]
    fn test_run_loop() {
        let mut c = console(GameMode::HumanVsHuman);
        let input = b"1 name\nplay H8\n# comment\n\nbogus\nquit\nplay A1\n";
        let mut out = Vec::new();
        c.run(&input[..], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("=1 gomoku-rollout\n\n"));
        assert!(text.contains("? unknown command: bogus\n\n"));
        // Nothing after quit is executed
        assert_eq!(c.state().move_count(), 1);
    }
}
