//! Paso que delega en una secuencia anidada independiente.
//!
//! Permite incrustar un flujo guiado reutilizable (p. ej. el onboarding)
//! dentro de un flujo padre sin que el padre conozca cuántos pasos tiene.
//! El padre ofrece cada `next()`/`back()` a la secuencia interna y sólo se
//! mueve más allá cuando ésta reporta agotamiento en la dirección pedida.
//!
//! Ciclo de vida de la instancia interna:
//! - Primera entrada hacia adelante: se construye fresca desde la factory.
//! - Retorno hacia atrás desde más allá: se reaplica la instancia retenida
//!   en su última posición, sin reconstruirla.
//! - Re-entrada hacia adelante tras una salida hacia atrás: se reconstruye
//!   fresca y se hace fast-forward hasta el índice más lejano alcanzado, de
//!   modo que los sub-pasos ya completados no se repiten interactivamente
//!   (el mismo mecanismo de replay que usa la reanudación en frío).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use crate::clock::Clock;
use crate::step::StepNode;

use super::core::Sequencer;

pub struct SubSequence<M> {
    label: Option<&'static str>,
    factory: Box<dyn Fn() -> Vec<StepNode<M>>>,
    inner: Option<Sequencer<M>>,
    model: Option<Rc<RefCell<M>>>,
    clock: Option<Rc<dyn Clock>>,
    /// Índice interno más lejano alcanzado (marca de pleamar para el
    /// fast-forward de re-entrada).
    high_water: usize,
}

impl<M> SubSequence<M> {
    /// Crea el paso a partir de una factory de la lista de pasos interna.
    /// La factory debe ser estable: se invoca en cada reconstrucción.
    pub fn new(factory: impl Fn() -> Vec<StepNode<M>> + 'static) -> Self {
        Self { label: None,
               factory: Box::new(factory),
               inner: None,
               model: None,
               clock: None,
               high_water: 0 }
    }

    /// Variante con etiqueta estable (para reanudación y fast-forward).
    pub fn labeled(label: &'static str, factory: impl Fn() -> Vec<StepNode<M>> + 'static) -> Self {
        let mut sub = Self::new(factory);
        sub.label = Some(label);
        sub
    }

    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// Índice actual de la secuencia interna, si ya fue construida.
    pub fn inner_index(&self) -> Option<usize> {
        self.inner.as_ref().map(|s| s.current_index())
    }

    // ---- Hooks invocados por el Sequencer padre ----

    pub(crate) fn enter_first(&mut self, model: &Rc<RefCell<M>>, clock: &Rc<dyn Clock>) {
        self.model = Some(Rc::clone(model));
        self.clock = Some(Rc::clone(clock));
        self.inner = Some(Sequencer::new((self.factory)(), Rc::clone(model), Rc::clone(clock)));
    }

    /// Re-entrada hacia adelante: instancia fresca + fast-forward hasta la
    /// marca de pleamar.
    pub(crate) fn reenter_forward(&mut self) {
        let model = self.model.clone().expect("subsequence re-entered before first activation");
        let clock = self.clock.clone().expect("subsequence re-entered before first activation");
        let mut inner = Sequencer::new((self.factory)(), model, clock);
        while inner.current_index() < self.high_water && inner.next() {}
        self.inner = Some(inner);
    }

    /// Retorno hacia atrás desde más allá del sub-flujo: la instancia
    /// retenida reaplica su paso actual (su último índice).
    pub(crate) fn reenter_backward(&mut self) {
        self.inner
            .as_mut()
            .expect("subsequence re-entered backward before first activation")
            .reapply_current();
    }

    /// Salida hacia atrás del padre: des-aplica el paso interno activo y
    /// retiene la instancia.
    pub(crate) fn exit_backward(&mut self) {
        self.inner
            .as_mut()
            .expect("subsequence exited before first activation")
            .unapply_current();
    }

    /// Ofrece un avance a la secuencia interna. `false` significa
    /// agotamiento interno hacia adelante: el padre toma el control.
    pub(crate) fn delegate_next(&mut self) -> bool {
        let inner = self.inner.as_mut().expect("subsequence driven before activation");
        if inner.next() {
            if inner.current_index() > self.high_water {
                self.high_water = inner.current_index();
            }
            true
        } else {
            false
        }
    }

    /// Ofrece un retroceso a la secuencia interna. `false` significa
    /// agotamiento interno hacia atrás.
    pub(crate) fn delegate_back(&mut self) -> bool {
        self.inner
            .as_mut()
            .expect("subsequence driven before activation")
            .back()
    }

    pub(crate) fn cancel_timers(&mut self) {
        if let Some(inner) = self.inner.as_mut() {
            inner.cancel_all_timers();
        }
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.inner.as_ref().and_then(|s| s.next_deadline())
    }

    pub(crate) fn fire_one(&mut self, now: Instant) -> bool {
        match self.inner.as_mut() {
            Some(inner) => inner.fire_earliest_due(now),
            None => false,
        }
    }
}
