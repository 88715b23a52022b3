// src/sequencer/mod.rs
pub mod delay;
pub mod machine;
pub mod plugin;
pub mod systems;
pub mod timer;
pub mod types;

pub use delay::DelayCurve;
pub use machine::Sequencer;
pub use plugin::SequencerPlugin;
pub use timer::StepTimer;
pub use types::{OutroStage, Phase, SequenceTiming, SequencerState};
