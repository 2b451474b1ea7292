//! Cola de timers del sequencer.
//!
//! Los timers no corren en ningún hilo: son deadlines encolados que el dueño
//! del sequencer dispara con `fire_due` sobre su propio contexto serializado.
//! La cancelación vacía la cola de forma síncrona; además cada entrada lleva
//! la época de activación con la que fue programada y una entrada con época
//! vieja se descarta en silencio al drenar (guardia contra despertares
//! tardíos del driver).

use std::time::Instant;

pub(crate) enum TimerAction<M> {
    /// Mutación diferida de un `DelayedSubStep` del paso `step_index`.
    SubStep {
        step_index: usize,
        mutation: Option<Box<dyn FnOnce(&mut M)>>,
    },
    /// Auto-avance declarado por el paso `step_index`.
    AutoAdvance { step_index: usize },
}

pub(crate) struct TimerEntry<M> {
    pub deadline: Instant,
    pub epoch: u64,
    pub action: TimerAction<M>,
}

pub(crate) struct TimerQueue<M> {
    entries: Vec<TimerEntry<M>>,
}

impl<M> TimerQueue<M> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn schedule(&mut self, entry: TimerEntry<M>) {
        self.entries.push(entry);
    }

    /// Cancela todo lo pendiente. Síncrono: al volver, ninguna entrada puede
    /// dispararse ya.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Extrae la entrada vencida más temprana (empates en orden de
    /// programación). Las entradas de épocas anteriores se purgan antes.
    pub fn pop_due(&mut self, now: Instant, epoch: u64) -> Option<TimerEntry<M>> {
        self.entries.retain(|e| e.epoch == epoch);
        let mut earliest: Option<usize> = None;
        for (i, e) in self.entries.iter().enumerate() {
            if e.deadline > now {
                continue;
            }
            match earliest {
                Some(j) if self.entries[j].deadline <= e.deadline => {}
                _ => earliest = Some(i),
            }
        }
        earliest.map(|i| self.entries.remove(i))
    }
}
