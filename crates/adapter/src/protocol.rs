//! Protocol module - JSON message types for the observation boundary
//!
//! Line-delimited JSON for embedding hosts and automated drivers.
//! All messages have: type, seq (sequence number), ts (timestamp in ms)

use serde::{Deserialize, Serialize};

use phonics_play_core::{token_class, GameSnapshot};
use phonics_play_types::GameCommand;

// ============== Host -> Game Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandType {
    #[serde(rename = "command")]
    Command,
}

impl Default for CommandType {
    fn default() -> Self {
        Self::Command
    }
}

/// Inbound command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: CommandType,
    pub seq: u64,
    pub ts: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<u8>,
}

impl CommandMessage {
    /// Resolve the wire name and arguments into a game command.
    pub fn parse(&self) -> Result<GameCommand, ProtocolError> {
        match self.name.as_str() {
            "start_level" => Ok(GameCommand::StartLevel),
            "place_token" => match (self.token, self.slot) {
                (Some(token), Some(slot)) => Ok(GameCommand::PlaceToken { token, slot }),
                _ => Err(ProtocolError::MissingField("token, slot")),
            },
            "remove_token" => match self.slot {
                Some(slot) => Ok(GameCommand::RemoveToken { slot }),
                None => Err(ProtocolError::MissingField("slot")),
            },
            "submit" => Ok(GameCommand::Submit),
            "animation_complete" => Ok(GameCommand::AnimationComplete),
            "advance" => Ok(GameCommand::Advance),
            "reset" => Ok(GameCommand::Reset),
            _ => Err(ProtocolError::UnknownCommand),
        }
    }
}

/// Why an inbound line could not be turned into a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    UnknownCommand,
    MissingField(&'static str),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand => write!(f, "unknown command name"),
            Self::MissingField(fields) => write!(f, "missing field(s): {fields}"),
        }
    }
}

impl std::error::Error for ProtocolError {}

// ============== Game -> Host Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

impl Default for ObservationType {
    fn default() -> Self {
        Self::Observation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "event")]
    Event,
}

impl Default for EventType {
    fn default() -> Self {
        Self::Event
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AckType {
    #[serde(rename = "ack")]
    Ack,
}

impl Default for AckType {
    fn default() -> Self {
        Self::Ack
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

impl Default for ErrorType {
    fn default() -> Self {
        Self::Error
    }
}

/// One pool token on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolTokenMessage {
    pub value: String,
    pub id: u8,
    pub placed: bool,
    pub class: String,
}

/// One worked example on a lesson screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonExampleMessage {
    pub word: String,
    pub tokens: Vec<String>,
}

/// Lesson copy on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonMessage {
    pub title: String,
    pub description: String,
    pub examples: Vec<LessonExampleMessage>,
}

/// Full state observation (sent after each accepted command)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub ts: u64,
    pub variant: String,
    pub phase: String,
    #[serde(rename = "level_index")]
    pub level_index: usize,
    #[serde(rename = "entry_index")]
    pub entry_index: usize,
    #[serde(rename = "level_name")]
    pub level_name: String,
    #[serde(rename = "level_label")]
    pub level_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson: Option<LessonMessage>,
    pub emoji: String,
    pub hint: String,
    pub tokens: Vec<PoolTokenMessage>,
    pub slots: Vec<Option<String>>,
    #[serde(rename = "slot_feedback")]
    pub slot_feedback: Vec<String>,
    #[serde(rename = "last_submit")]
    pub last_submit: String,
    pub score: u32,
    pub streak: u32,
    #[serde(rename = "last_points")]
    pub last_points: u32,
    #[serde(rename = "level_transition")]
    pub level_transition: bool,
    #[serde(rename = "game_complete")]
    pub game_complete: bool,
    pub seed: u32,
    #[serde(rename = "round_start_ms")]
    pub round_start_ms: u64,
}

impl ObservationMessage {
    pub fn from_snapshot(snapshot: &GameSnapshot, seq: u64, ts: u64) -> Self {
        Self {
            msg_type: ObservationType::Observation,
            seq,
            ts,
            variant: snapshot
                .variant
                .map(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            phase: snapshot.phase.map(|p| p.as_str()).unwrap_or("").to_string(),
            level_index: snapshot.level_index,
            entry_index: snapshot.entry_index,
            level_name: snapshot.level_name.to_string(),
            level_label: snapshot.level_label.to_string(),
            lesson: snapshot.lesson.map(|l| LessonMessage {
                title: l.title.to_string(),
                description: l.description.to_string(),
                examples: l
                    .examples
                    .iter()
                    .map(|e| LessonExampleMessage {
                        word: e.word.to_string(),
                        tokens: e.tokens.iter().map(|t| t.as_str().to_string()).collect(),
                    })
                    .collect(),
            }),
            emoji: snapshot.emoji.to_string(),
            hint: snapshot.hint.to_string(),
            tokens: snapshot
                .tokens
                .iter()
                .map(|t| PoolTokenMessage {
                    value: t.value.as_str().to_string(),
                    id: t.id,
                    placed: t.placed,
                    class: token_class(t.value).as_str().to_string(),
                })
                .collect(),
            slots: snapshot
                .slots
                .iter()
                .map(|s| s.map(|t| t.as_str().to_string()))
                .collect(),
            slot_feedback: snapshot
                .slot_feedback
                .iter()
                .map(|f| f.as_str().to_string())
                .collect(),
            last_submit: snapshot.last_submit.as_str().to_string(),
            score: snapshot.score,
            streak: snapshot.streak,
            last_points: snapshot.last_points,
            level_transition: snapshot.level_transition,
            game_complete: snapshot.game_complete,
            seed: snapshot.seed,
            round_start_ms: snapshot.round_start_ms,
        }
    }
}

/// Milestone notification (word solved, level up, game complete)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: EventType,
    pub seq: u64,
    pub ts: u64,
    pub name: String,
    pub word: String,
    pub points: u32,
    pub streak: u32,
}

/// Acknowledgment for command receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: AckType,
    pub seq: u64,
    pub ts: u64,
    pub status: AckStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AckStatus {
    /// The command changed the state.
    #[serde(rename = "accepted")]
    Accepted,
    /// The command was valid but a no-op in the current phase.
    #[serde(rename = "ignored")]
    Ignored,
}

/// Error reply for lines that could not be handled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub ts: u64,
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "bad_json")]
    BadJson,
    #[serde(rename = "bad_command")]
    BadCommand,
}
