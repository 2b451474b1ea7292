//! Fuente de tiempo inyectable.
//!
//! El sequencer nunca consulta `Instant::now()` directamente: recibe un
//! `Clock` en construcción. `SystemClock` es la implementación de producción;
//! `ManualClock` avanza un instante virtual y permite probar los timers de
//! forma determinista sin dormir.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Reloj monótono consultado por el sequencer al activar un paso.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Reloj real del sistema.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Reloj virtual para tests: el tiempo sólo se mueve con `advance`.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { origin: Instant::now(),
               offset: Cell::new(Duration::ZERO) }
    }

    /// Avanza el instante virtual. No dispara nada por sí mismo: el dueño
    /// del sequencer debe llamar a `fire_due` después.
    pub fn advance(&self, delta: Duration) {
        self.offset.set(self.offset.get() + delta);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}
