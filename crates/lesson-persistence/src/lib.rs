//! lesson-persistence: Colaboradores externos del motor.
//!
//! El núcleo sólo consume interfaces: un almacén clave-valor de progreso
//! (get/set), la reanudación en frío por replay de `next()`, y un sumidero
//! de analítica fire-and-forget. Las pantallas completadas se marcan con la
//! etiqueta del paso y el hash de definición de la secuencia; un hash que no
//! coincide significa contenido de lección cambiado y el progreso guardado
//! se descarta.
pub mod analytics;
pub mod resume;
pub mod store;

pub use analytics::{AnalyticsEvent, AnalyticsSink, MemorySink, NoopSink};
pub use resume::{resume_sequencer, save_progress, ProgressMarker, ResumeOutcome};
pub use store::{InMemoryProgressStore, ProgressStore, StoreError};
