pub mod builder;
pub mod core;
pub mod drive;
pub mod subsequence;
mod timers;

pub use builder::{SequencerBuilder, SequencerInit};
pub use core::Sequencer;
pub use drive::SequencerCommand;
pub use subsequence::SubSequence;
