//! JSON observation boundary for embedding hosts and automated drivers.
//!
//! Line-delimited JSON, one message per line, all messages carrying
//! `type`, `seq`, and `ts` fields. The runtime is strictly in-process:
//! hosts push command lines in and read reply lines out.

pub mod protocol;
pub mod runtime;

pub use phonics_play_core as core;
pub use phonics_play_types as types;

pub use protocol::{
    AckMessage, AckStatus, CommandMessage, ErrorCode, ErrorMessage, EventMessage,
    LessonExampleMessage, LessonMessage, ObservationMessage, PoolTokenMessage, ProtocolError,
};
pub use runtime::Runtime;
