pub mod contact;
pub mod pacing;
pub mod parallax;
pub mod particles;
pub mod scroll;
pub mod sequence;
pub mod state;
pub mod transform;
pub mod tuning;
pub mod updater;

pub use contact::{ripple_at, ContactAction, Ripple, RIPPLE_KEYFRAMES};
pub use pacing::{FpsMeter, FrameGate};
pub use particles::{burst_schedule, ParticleSpec, ParticleTuning};
pub use sequence::{stagger_delay, StepSequence, TypeStep, Typewriter, CURSOR_HTML};
pub use state::{InputSnapshot, PointerState, Rect, ScrollOffset};
pub use transform::{Presentation, Transform, TransformOp};
pub use tuning::Tuning;
pub use updater::{Category, TargetSink, TransformUpdater};
