//! lesson-core: Motor de secuenciación reversible para lecciones guiadas.
//!
//! El núcleo es un autómata ordenado e invertible sobre una lista de pasos
//! por pantalla: cada paso sabe aplicar, reaplicar y des-aplicar una mutación
//! sobre un modelo externo, puede programar sub-revelados diferidos dentro
//! del paso y puede declarar un auto-avance con timeout. El `Sequencer`
//! garantiza la invariante central: volver atrás restaura exactamente el
//! estado observable que existía antes de avanzar.
pub mod clock;
pub mod constants;
pub mod hashing;
pub mod sequencer;
pub mod step;
pub mod testkit;

pub use clock::{Clock, ManualClock, SystemClock};
pub use sequencer::{Sequencer, SequencerBuilder, SequencerCommand, SequencerInit, SubSequence};
pub use step::{DelayedSubStep, StepDefinition, StepNode, StepSlot, StepStatus};
