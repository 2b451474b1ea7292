use std::time::Duration;

/// Par inmutable (mutación one-shot, retardo no negativo) programado
/// relativo a la activación del paso dueño.
///
/// El timer asociado se cancela siempre que el paso se abandona en cualquier
/// dirección o el sequencer se destruye: la mutación jamás debe tocar un
/// modelo que ya avanzó.
pub struct DelayedSubStep<M> {
    delay: Duration,
    mutation: Box<dyn FnOnce(&mut M)>,
}

impl<M> DelayedSubStep<M> {
    /// Programa `mutation` para `delay` después de la activación del paso.
    pub fn after(delay: Duration, mutation: impl FnOnce(&mut M) + 'static) -> Self {
        Self { delay,
               mutation: Box::new(mutation) }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub(crate) fn into_mutation(self) -> Box<dyn FnOnce(&mut M)> {
        self.mutation
    }
}
