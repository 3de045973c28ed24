//! Runtime module - in-process driver for the JSON boundary
//!
//! Owns one game session and turns inbound command lines into outbound
//! reply lines: an ack, zero or more milestone events, and a fresh
//! observation. Hosts supply the timestamp with every call; the runtime
//! never reads a clock.

use anyhow::{Context, Result};

use phonics_play_core::{GameSnapshot, GameState};

use crate::protocol::{
    AckMessage, AckStatus, AckType, CommandMessage, ErrorCode, ErrorMessage, ErrorType,
    EventMessage, EventType, ObservationMessage,
};

/// One game session behind the line protocol.
#[derive(Debug)]
pub struct Runtime {
    game: GameState,
    snapshot: GameSnapshot,
    seq: u64,
}

impl Runtime {
    pub fn word_builder(seed: u32) -> Self {
        Self::new(GameState::word_builder(seed))
    }

    pub fn phoneme_blender(seed: u32) -> Self {
        Self::new(GameState::phoneme_blender(seed))
    }

    pub fn new(game: GameState) -> Self {
        Self {
            game,
            snapshot: GameSnapshot::new(),
            seq: 0,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Handle one inbound line. Malformed lines produce an error reply
    /// rather than failing the session; only serialization failures bubble
    /// up as errors.
    pub fn handle_line(&mut self, line: &str, now_ms: u64) -> Result<Vec<String>> {
        let message: CommandMessage = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(err) => {
                return Ok(vec![self.error_line(ErrorCode::BadJson, &err.to_string(), now_ms)?]);
            }
        };

        let command = match message.parse() {
            Ok(command) => command,
            Err(err) => {
                return Ok(vec![self.error_line(
                    ErrorCode::BadCommand,
                    &err.to_string(),
                    now_ms,
                )?]);
            }
        };

        let changed = self.game.apply(command, now_ms);

        let mut lines = Vec::with_capacity(4);
        let ack = AckMessage {
            msg_type: AckType::Ack,
            seq: self.next_seq(),
            ts: now_ms,
            status: if changed {
                AckStatus::Accepted
            } else {
                AckStatus::Ignored
            },
        };
        lines.push(serde_json::to_string(&ack).context("serialize ack")?);

        if let Some(event) = self.game.take_last_event() {
            let mut names = vec!["word_completed"];
            if event.level_up {
                names.push("level_up");
            }
            if event.game_complete {
                names.push("game_complete");
            }
            for name in names {
                let message = EventMessage {
                    msg_type: EventType::Event,
                    seq: self.next_seq(),
                    ts: now_ms,
                    name: name.to_string(),
                    word: event.word.to_string(),
                    points: event.points,
                    streak: event.streak,
                };
                lines.push(serde_json::to_string(&message).context("serialize event")?);
            }
        }

        lines.push(self.observation_line(now_ms)?);
        Ok(lines)
    }

    /// Serialize the current state as one observation line.
    pub fn observation_line(&mut self, now_ms: u64) -> Result<String> {
        self.game.snapshot_into(&mut self.snapshot);
        let seq = self.next_seq();
        let message = ObservationMessage::from_snapshot(&self.snapshot, seq, now_ms);
        serde_json::to_string(&message).context("serialize observation")
    }

    fn error_line(&mut self, code: ErrorCode, message: &str, now_ms: u64) -> Result<String> {
        let reply = ErrorMessage {
            msg_type: ErrorType::Error,
            seq: self.next_seq(),
            ts: now_ms,
            code,
            message: message.to_string(),
        };
        serde_json::to_string(&reply).context("serialize error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parsed(lines: &[String]) -> Vec<Value> {
        lines
            .iter()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    fn command_line(name: &str) -> String {
        format!(r#"{{"type":"command","seq":1,"ts":0,"name":"{name}"}}"#)
    }

    /// Place the current target in order, entirely over the wire.
    fn place_target(runtime: &mut Runtime) {
        let target: Vec<String> = runtime
            .game()
            .current_entry()
            .target
            .iter()
            .map(|t| t.as_str().to_string())
            .collect();
        for (slot, value) in target.iter().enumerate() {
            let id = runtime
                .game()
                .tokens()
                .iter()
                .find(|t| !t.placed && t.value.as_str() == value.as_str())
                .map(|t| t.id)
                .unwrap();
            let line = format!(
                r#"{{"type":"command","seq":1,"ts":0,"name":"place_token","token":{id},"slot":{slot}}}"#
            );
            runtime.handle_line(&line, 0).unwrap();
        }
    }

    /// Event names carried by a reply batch, in order.
    fn event_names(replies: &[Value]) -> Vec<String> {
        replies
            .iter()
            .filter(|r| r["type"] == "event")
            .map(|r| r["name"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_bad_json_gets_error_reply() {
        let mut runtime = Runtime::word_builder(1);
        let lines = runtime.handle_line("not json", 0).unwrap();
        let replies = parsed(&lines);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["type"], "error");
        assert_eq!(replies[0]["code"], "bad_json");
    }

    #[test]
    fn test_unknown_command_gets_error_reply() {
        let mut runtime = Runtime::word_builder(1);
        let lines = runtime.handle_line(&command_line("warp"), 0).unwrap();
        let replies = parsed(&lines);
        assert_eq!(replies[0]["type"], "error");
        assert_eq!(replies[0]["code"], "bad_command");
    }

    #[test]
    fn test_noop_command_acks_ignored() {
        let mut runtime = Runtime::word_builder(1);
        // Word builder starts in a round; start_level is a no-op there.
        let lines = runtime.handle_line(&command_line("start_level"), 0).unwrap();
        let replies = parsed(&lines);
        assert_eq!(replies[0]["type"], "ack");
        assert_eq!(replies[0]["status"], "ignored");
        assert_eq!(replies.last().unwrap()["type"], "observation");
    }

    #[test]
    fn test_place_command_reflected_in_observation() {
        let mut runtime = Runtime::word_builder(1);
        let line = r#"{"type":"command","seq":1,"ts":0,"name":"place_token","token":0,"slot":0}"#;
        let lines = runtime.handle_line(line, 10).unwrap();
        let replies = parsed(&lines);

        assert_eq!(replies[0]["status"], "accepted");
        let obs = replies.last().unwrap();
        assert_eq!(obs["type"], "observation");
        assert!(obs["slots"][0].is_string());
        assert_eq!(obs["tokens"][0]["placed"], true);
    }

    #[test]
    fn test_solve_emits_word_completed_event() {
        let mut runtime = Runtime::word_builder(12345);

        let obs: Value =
            serde_json::from_str(&runtime.observation_line(0).unwrap()).unwrap();
        let pool_size = obs["tokens"].as_array().unwrap().len();
        let slot_count = obs["slots"].as_array().unwrap().len();
        assert_eq!(pool_size, slot_count, "easy tier has no decoys");

        place_target(&mut runtime);
        let lines = runtime.handle_line(&command_line("submit"), 100).unwrap();
        let replies = parsed(&lines);
        assert_eq!(replies[0]["status"], "accepted");

        let event = &replies[1];
        assert_eq!(event["type"], "event");
        assert_eq!(event["name"], "word_completed");
        assert_eq!(event["points"], 10);
        assert_eq!(event["streak"], 1);

        let obs = replies.last().unwrap();
        assert_eq!(obs["phase"], "celebration");
        assert_eq!(obs["score"], 10);
    }

    #[test]
    fn test_level_final_solve_emits_level_up_event() {
        let mut runtime = Runtime::word_builder(12345);
        for _ in 0..7 {
            place_target(&mut runtime);
            runtime.handle_line(&command_line("submit"), 0).unwrap();
            runtime.handle_line(&command_line("advance"), 0).unwrap();
        }

        place_target(&mut runtime);
        let replies = parsed(&runtime.handle_line(&command_line("submit"), 0).unwrap());
        assert_eq!(event_names(&replies), ["word_completed", "level_up"]);

        // Both events carry the same solve payload.
        let events: Vec<&Value> = replies.iter().filter(|r| r["type"] == "event").collect();
        assert_eq!(events[0]["word"], events[1]["word"]);
        assert_eq!(events[0]["points"], events[1]["points"]);

        let obs = replies.last().unwrap();
        assert_eq!(obs["level_transition"], true);
        assert_eq!(obs["game_complete"], false);

        let replies = parsed(&runtime.handle_line(&command_line("advance"), 0).unwrap());
        let obs = replies.last().unwrap();
        assert_eq!(obs["level_index"], 1);
        assert_eq!(obs["phase"], "round_active");
    }

    #[test]
    fn test_game_final_solve_emits_game_complete_event() {
        let mut runtime = Runtime::word_builder(777);
        for _ in 0..23 {
            place_target(&mut runtime);
            runtime.handle_line(&command_line("submit"), 0).unwrap();
            runtime.handle_line(&command_line("advance"), 0).unwrap();
        }

        place_target(&mut runtime);
        let replies = parsed(&runtime.handle_line(&command_line("submit"), 0).unwrap());
        assert_eq!(event_names(&replies), ["word_completed", "game_complete"]);

        let obs = replies.last().unwrap();
        assert_eq!(obs["game_complete"], true);
        assert_eq!(obs["phase"], "celebration");

        let replies = parsed(&runtime.handle_line(&command_line("advance"), 0).unwrap());
        assert_eq!(replies.last().unwrap()["phase"], "complete");
    }

    #[test]
    fn test_seq_is_monotonic_across_replies() {
        let mut runtime = Runtime::word_builder(1);
        let mut last = 0;
        for _ in 0..3 {
            let lines = runtime.handle_line(&command_line("reset"), 0).unwrap();
            for reply in parsed(&lines) {
                let seq = reply["seq"].as_u64().unwrap();
                assert!(seq > last);
                last = seq;
            }
        }
    }

    #[test]
    fn test_reset_returns_fresh_observation() {
        let mut runtime = Runtime::word_builder(42);
        let before: Value =
            serde_json::from_str(&runtime.observation_line(0).unwrap()).unwrap();

        let line = r#"{"type":"command","seq":1,"ts":0,"name":"place_token","token":0,"slot":0}"#;
        runtime.handle_line(line, 0).unwrap();
        let lines = runtime.handle_line(&command_line("reset"), 0).unwrap();
        let after = parsed(&lines).pop().unwrap();

        assert_eq!(after["tokens"], before["tokens"]);
        assert_eq!(after["score"], 0);
    }
}
