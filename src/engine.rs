//! Engine state management.
//!
//! Holds the current game snapshot, the die source, the most recent move
//! event, and engine options. Every roll and move goes through the pure
//! transitions in [`crate::resolve`]; the engine swaps in the returned
//! state wholesale.

use std::collections::HashMap;
use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::board::{Color, GameState, Phase, Token, TokenId};
use crate::dice::{DiceSource, FixedDice, RngDice};
use crate::movegen::movable_tokens;
use crate::protocol::notation::{parse_rolls, parse_seed, NotationError};
use crate::protocol::snapshot::{Snapshot, Topology};
use crate::resolve::{apply_move, apply_roll, MoveEvent, DIE_MAX, DIE_MIN};

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    state: GameState,
    last_event: Option<MoveEvent>,
    sequence: u64,
    dice: Box<dyn DiceSource>,
    pub options: HashMap<String, String>,
}

impl Engine {
    /// Creates an engine with a fresh game and an entropy-seeded die.
    pub fn new() -> Self {
        Engine::with_dice(RngDice::from_entropy())
    }

    /// Creates an engine with a fresh game and the given die source.
    pub fn with_dice(dice: impl DiceSource + 'static) -> Self {
        Engine {
            state: GameState::new(),
            last_event: None,
            sequence: 0,
            dice: Box::new(dice),
            options: HashMap::new(),
        }
    }

    /// Replaces the die source without touching the game.
    pub fn set_dice(&mut self, dice: impl DiceSource + 'static) {
        self.dice = Box::new(dice);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn active_color(&self) -> Color {
        self.state.active_color()
    }

    pub fn dice_value(&self) -> Option<u8> {
        self.state.dice_value
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn winner(&self) -> Option<Color> {
        self.state.winner
    }

    pub fn tokens(&self) -> &[Token] {
        &self.state.tokens
    }

    /// Returns the tokens that may move right now.
    pub fn movable_tokens(&self) -> Vec<TokenId> {
        movable_tokens(&self.state)
    }

    /// Returns the event from the most recent successful move.
    pub fn last_event(&self) -> Option<&MoveEvent> {
        self.last_event.as_ref()
    }

    /// Starts a new game. The event sequence keeps counting so stamps stay
    /// monotonic across games in one session.
    pub fn reset_game(&mut self) {
        self.state = GameState::new();
        self.last_event = None;
        debug!("game reset");
    }

    /// Rolls the die for the active color.
    ///
    /// Returns `None` without drawing when the game is not waiting for a
    /// roll. Otherwise returns the value, including rolls that forfeit the
    /// turn because nothing can move.
    pub fn roll_dice(&mut self) -> Option<u8> {
        if self.state.phase != Phase::Rolling || self.state.dice_value.is_some() {
            debug!(phase = self.state.phase.name(), "roll ignored");
            return None;
        }
        let color = self.state.active_color();
        let value = self.dice.next_in_range(DIE_MIN, DIE_MAX);
        let result = apply_roll(&self.state, value)?;
        self.state = result.state;
        if result.forfeited {
            let next = self.state.active_color();
            debug!(%color, value, %next, "no legal move, turn resolved");
        } else {
            debug!(%color, value, "rolled");
        }
        Some(result.value)
    }

    /// Moves a token by the pending die value.
    ///
    /// Ignored unless the token is in the movable set. On success the new
    /// event is returned and also kept as [`Engine::last_event`].
    pub fn move_token(&mut self, id: TokenId) -> Option<&MoveEvent> {
        let (next, event) = match apply_move(&self.state, id, self.sequence + 1) {
            Some(applied) => applied,
            None => {
                debug!(token = %id, "move ignored");
                return None;
            }
        };
        self.sequence = event.sequence;
        self.state = next;

        for capture in &event.captured {
            debug!(token = %id, captured = %capture.token, "capture");
        }
        debug!(token = %id, roll = event.roll, extra_turn = event.extra_turn, "moved");
        if let Some(winner) = event.winner {
            info!(%winner, "game won");
        }

        self.last_event = Some(event);
        self.last_event.as_ref()
    }

    /// Sets an engine option, applying the ones the engine understands.
    ///
    /// `Seed` reseeds the die and `Rolls` installs a scripted die. Other
    /// names are stored as-is.
    pub fn set_option(&mut self, name: String, value: Option<String>) -> Result<(), NotationError> {
        let raw = value.unwrap_or_default();
        match name.as_str() {
            "Seed" => {
                let seed = parse_seed(&raw)?;
                self.set_dice(RngDice::seeded(seed));
            }
            "Rolls" => {
                let rolls = parse_rolls(&raw)?;
                self.set_dice(FixedDice::new(rolls));
            }
            _ => {}
        }
        self.options.insert(name, raw);
        Ok(())
    }

    /// Handles the handshake: writes id, options, protocol_version, and ludook.
    pub fn handle_hello<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name ludo")?;
        writeln!(out, "id author polite-betrayal")?;
        writeln!(out, "option name Seed type string default <entropy>")?;
        writeln!(out, "option name Rolls type string default <none>")?;
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "ludook")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles `setoption`, reporting bad values as warnings.
    pub fn handle_setoption(&mut self, name: String, value: Option<String>) {
        if let Err(e) = self.set_option(name.clone(), value) {
            warn!(option = %name, error = %e, "invalid option value");
        }
    }

    /// Handles the `roll` command.
    pub fn handle_roll<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.roll_dice() {
            Some(value) => writeln!(out, "rolled {}", value)?,
            None => writeln!(out, "rolled none")?,
        }
        out.flush()
    }

    /// Handles the `move` command. A rejected move writes nothing.
    pub fn handle_move<W: Write>(&mut self, id: TokenId, out: &mut W) -> io::Result<()> {
        if let Some(event) = self.move_token(id) {
            let json = serde_json::to_string(event)?;
            writeln!(out, "event {}", json)?;
            out.flush()?;
        }
        Ok(())
    }

    /// Handles the `state` command.
    pub fn handle_state<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let snapshot = Snapshot::new(&self.state, self.last_event.as_ref());
        writeln!(out, "state {}", serde_json::to_string(&snapshot)?)?;
        out.flush()
    }

    /// Handles the `movable` command.
    pub fn handle_movable<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "movable")?;
        for id in self.movable_tokens() {
            write!(out, " {}", id)?;
        }
        writeln!(out)?;
        out.flush()
    }

    /// Handles the `topology` command.
    pub fn handle_topology<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "topology {}", serde_json::to_string(&Topology::new())?)?;
        out.flush()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Placement, TokenStatus};

    fn scripted(rolls: &[u8]) -> Engine {
        Engine::with_dice(FixedDice::new(rolls.to_vec()))
    }

    fn output_of(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn new_engine_starts_fresh() {
        let engine = Engine::new();
        assert_eq!(engine.active_color(), Color::Red);
        assert_eq!(engine.phase(), Phase::Rolling);
        assert_eq!(engine.dice_value(), None);
        assert_eq!(engine.winner(), None);
        assert!(engine.last_event().is_none());
        assert!(engine.movable_tokens().is_empty());
        assert!(engine.tokens().iter().all(|t| t.status() == TokenStatus::Base));
    }

    #[test]
    fn roll_while_moving_is_ignored() {
        let mut engine = scripted(&[6, 3]);
        assert_eq!(engine.roll_dice(), Some(6));
        let before = *engine.state();
        assert_eq!(engine.roll_dice(), None);
        assert_eq!(*engine.state(), before);
    }

    #[test]
    fn ignored_roll_does_not_consume_die() {
        let mut engine = scripted(&[6, 2]);
        engine.roll_dice();
        engine.roll_dice();
        engine.move_token(TokenId::new(Color::Red, 0));
        assert_eq!(engine.roll_dice(), Some(2));
    }

    #[test]
    fn move_stamps_increasing_sequence() {
        let mut engine = scripted(&[6]);
        engine.roll_dice();
        let first = engine.move_token(TokenId::new(Color::Red, 0)).unwrap().sequence;
        engine.roll_dice();
        let second = engine.move_token(TokenId::new(Color::Red, 0)).unwrap().sequence;
        assert!(second > first);
        assert_eq!(engine.last_event().unwrap().sequence, second);
    }

    #[test]
    fn rejected_move_leaves_state_and_event() {
        let mut engine = scripted(&[6]);
        engine.roll_dice();
        let before = *engine.state();
        assert!(engine.move_token(TokenId::new(Color::Blue, 0)).is_none());
        assert_eq!(*engine.state(), before);
        assert!(engine.last_event().is_none());
    }

    #[test]
    fn out_of_range_token_is_ignored() {
        let mut engine = scripted(&[6]);
        engine.roll_dice();
        let before = *engine.state();

        assert_eq!(TokenId::try_new(Color::Blue, 4), None);
        assert!(engine.move_token(TokenId::new(Color::Blue, 4)).is_none());
        assert_eq!(*engine.state(), before);

        let text = output_of(|out| engine.handle_move(TokenId::new(Color::Blue, 200), out));
        assert!(text.is_empty());
        assert_eq!(*engine.state(), before);
        assert!(engine.last_event().is_none());
    }

    #[test]
    fn reset_clears_game_but_not_sequence() {
        let mut engine = scripted(&[6]);
        engine.roll_dice();
        engine.move_token(TokenId::new(Color::Red, 0));
        engine.reset_game();
        assert_eq!(*engine.state(), GameState::new());
        assert!(engine.last_event().is_none());

        engine.roll_dice();
        let seq = engine.move_token(TokenId::new(Color::Red, 1)).unwrap().sequence;
        assert_eq!(seq, 2);
    }

    #[test]
    fn set_option_rolls_installs_script() {
        let mut engine = Engine::new();
        engine.set_option("Rolls".into(), Some("6 4".into())).unwrap();
        assert_eq!(engine.roll_dice(), Some(6));
        engine.move_token(TokenId::new(Color::Red, 0));
        assert_eq!(engine.roll_dice(), Some(4));
        let red = engine.state().token(TokenId::new(Color::Red, 0));
        assert_eq!(red.placement, Placement::Track(0));
        assert_eq!(engine.options.get("Rolls"), Some(&"6 4".to_string()));
    }

    #[test]
    fn set_option_rejects_bad_values() {
        let mut engine = Engine::new();
        assert!(engine.set_option("Rolls".into(), Some("9".into())).is_err());
        assert!(engine.set_option("Seed".into(), None).is_err());
        assert!(engine.options.is_empty());
        assert!(engine.set_option("Theme".into(), Some("dark".into())).is_ok());
    }

    #[test]
    fn seeded_sessions_repeat() {
        let mut a = Engine::new();
        let mut b = Engine::new();
        a.set_option("Seed".into(), Some("11".into())).unwrap();
        b.set_option("Seed".into(), Some("11".into())).unwrap();
        for _ in 0..20 {
            assert_eq!(a.roll_dice(), b.roll_dice());
            if let Some(id) = a.movable_tokens().first().copied() {
                a.move_token(id);
                b.move_token(id);
            }
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn handle_hello_outputs_handshake() {
        let engine = Engine::new();
        let text = output_of(|out| engine.handle_hello(out));
        assert!(text.contains("id name ludo"));
        assert!(text.contains("protocol_version 1"));
        assert_eq!(text.lines().last(), Some("ludook"));
    }

    #[test]
    fn handle_roll_and_move_output() {
        let mut engine = scripted(&[6]);
        assert_eq!(output_of(|out| engine.handle_roll(out)), "rolled 6\n");
        assert_eq!(output_of(|out| engine.handle_roll(out)), "rolled none\n");
        assert_eq!(
            output_of(|out| engine.handle_movable(out)),
            "movable red-0 red-1 red-2 red-3\n"
        );

        let text = output_of(|out| engine.handle_move(TokenId::new(Color::Red, 2), out));
        assert!(text.starts_with("event {"));
        assert!(text.contains("\"token\":\"red-2\""));

        let rejected = output_of(|out| engine.handle_move(TokenId::new(Color::Red, 2), out));
        assert!(rejected.is_empty());
        assert_eq!(output_of(|out| engine.handle_movable(out)), "movable\n");
    }

    #[test]
    fn handle_state_outputs_json() {
        let engine = Engine::new();
        let text = output_of(|out| engine.handle_state(out));
        let payload = text.trim().strip_prefix("state ").unwrap();
        let json: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(json["phase"], "rolling");
        assert_eq!(json["last_event"], serde_json::Value::Null);
    }
}
