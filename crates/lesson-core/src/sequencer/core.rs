//! Core Sequencer implementation
//!
//! Motor de recorrido determinista e invertible sobre una lista ordenada de
//! pasos. Responsable de:
//! - Mantener el índice actual (invariante: siempre dentro de `0..len`; los
//!   bordes se reportan por callbacks de agotamiento, nunca con un índice
//!   fuera de rango).
//! - Garantizar la invariante de reaplicación: `next()` seguido de `back()`
//!   deja cada campo observable igual que antes del `next()`.
//! - Gestionar el ciclo de vida de timers (sub-revelados diferidos y
//!   auto-avance) con cancelación síncrona al abandonar un paso.
//! - Delegar `next()`/`back()` en la secuencia anidada cuando el paso actual
//!   es un `SubSequence`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use crate::clock::Clock;
use crate::hashing;
use crate::step::{StepNode, StepSlot, StepStatus};

use super::builder::SequencerInit;
use super::timers::{TimerAction, TimerEntry, TimerQueue};

pub struct Sequencer<M> {
    steps: Vec<StepNode<M>>,
    slots: Vec<StepSlot>,
    index: usize,
    model: Rc<RefCell<M>>,
    clock: Rc<dyn Clock>,
    /// Época de activación: se incrementa en cada cancelación, y las
    /// entradas de timer con época vieja se descartan en silencio.
    epoch: u64,
    timers: TimerQueue<M>,
    on_exhausted_forward: Option<Box<dyn FnMut()>>,
    on_exhausted_backward: Option<Box<dyn FnMut()>>,
}

impl<M> Sequencer<M> {
    /// Crea un builder que obliga a declarar el primer paso antes de poder
    /// encadenar el resto.
    #[inline]
    pub fn builder(model: Rc<RefCell<M>>, clock: Rc<dyn Clock>) -> SequencerInit<M> {
        SequencerInit::new(model, clock)
    }

    /// Construye la secuencia y activa el paso 0 (su `apply` corre aquí).
    ///
    /// Una lista vacía es un bug de construcción, no una condición de
    /// runtime: aborta de inmediato.
    pub fn new(steps: Vec<StepNode<M>>, model: Rc<RefCell<M>>, clock: Rc<dyn Clock>) -> Self {
        Self::with_callbacks(steps, model, clock, None, None)
    }

    pub(crate) fn with_callbacks(steps: Vec<StepNode<M>>,
                                 model: Rc<RefCell<M>>,
                                 clock: Rc<dyn Clock>,
                                 on_exhausted_forward: Option<Box<dyn FnMut()>>,
                                 on_exhausted_backward: Option<Box<dyn FnMut()>>)
                                 -> Self {
        assert!(!steps.is_empty(), "a sequence requires at least one step");
        let slots = steps.iter().map(|_| StepSlot::new()).collect();
        let mut seq = Self { steps,
                             slots,
                             index: 0,
                             model,
                             clock,
                             epoch: 0,
                             timers: TimerQueue::new(),
                             on_exhausted_forward,
                             on_exhausted_backward };
        seq.enter_current_forward();
        seq
    }

    /// Avanza un paso. En el último índice no muta nada: invoca
    /// `on_exhausted_forward` y devuelve `false`.
    ///
    /// Si el paso actual es un `SubSequence`, el avance se le ofrece primero
    /// a su secuencia interna; sólo cuando ésta se agota hacia adelante el
    /// padre se mueve más allá de él.
    pub fn next(&mut self) -> bool {
        if let StepNode::Sub(sub) = &mut self.steps[self.index] {
            if sub.delegate_next() {
                return true;
            }
        }
        if self.index + 1 == self.steps.len() {
            tracing::debug!(index = self.index, "forward exhausted");
            if let Some(cb) = self.on_exhausted_forward.as_mut() {
                cb();
            }
            return false;
        }
        // Los avances nunca des-aplican el paso que se abandona: sólo se
        // cancelan sus timers pendientes.
        self.leave_current();
        self.index += 1;
        self.enter_current_forward();
        true
    }

    /// Retrocede un paso. En el índice 0 invoca `on_exhausted_backward` y
    /// devuelve `false`. En caso contrario cancela los timers del paso
    /// actual, lo des-aplica y reaplica el anterior (nunca `apply`: un paso
    /// alcanzado por `back()` ya fue aplicado antes).
    pub fn back(&mut self) -> bool {
        if let StepNode::Sub(sub) = &mut self.steps[self.index] {
            if sub.delegate_back() {
                return true;
            }
        }
        if self.index == 0 {
            tracing::debug!("backward exhausted");
            if let Some(cb) = self.on_exhausted_backward.as_mut() {
                cb();
            }
            return false;
        }
        self.unapply_current();
        self.index -= 1;
        self.enter_current_backward();
        true
    }

    /// Avanza hasta que el predicado sobre el modelo se cumpla. Devuelve
    /// `true` si se cumplió; `false` si el agotamiento hacia adelante cortó
    /// el bucle primero.
    pub fn next_until(&mut self, mut predicate: impl FnMut(&M) -> bool) -> bool {
        loop {
            {
                let model = self.model.borrow();
                if predicate(&model) {
                    return true;
                }
            }
            if !self.next() {
                return false;
            }
        }
    }

    /// Avanza mientras el predicado sobre el modelo se cumpla. Devuelve
    /// `true` si el predicado dejó de cumplirse; `false` si el agotamiento
    /// cortó el bucle primero.
    pub fn next_while(&mut self, mut predicate: impl FnMut(&M) -> bool) -> bool {
        loop {
            {
                let model = self.model.borrow();
                if !predicate(&model) {
                    return true;
                }
            }
            if !self.next() {
                return false;
            }
        }
    }

    /// Fast-forward hasta el paso con la etiqueta dada (mecanismo de
    /// reanudación en frío). `false` si la etiqueta no aparece antes del
    /// agotamiento.
    pub fn next_until_label(&mut self, label: &str) -> bool {
        loop {
            if self.current_label() == Some(label) {
                return true;
            }
            if !self.next() {
                return false;
            }
        }
    }

    // ---- Introspección de sólo lectura ----

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> &StepNode<M> {
        &self.steps[self.index]
    }

    pub fn current_label(&self) -> Option<&'static str> {
        self.steps[self.index].label()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        // Una secuencia construida jamás está vacía; existe por simetría con len().
        self.steps.is_empty()
    }

    /// Referencia fuerte al modelo que esta secuencia muta.
    pub fn model(&self) -> &Rc<RefCell<M>> {
        &self.model
    }

    /// Instante actual según el reloj inyectado.
    pub fn clock_now(&self) -> Instant {
        self.clock.now()
    }

    /// Etiquetas ordenadas de los pasos (los anónimos aportan `None`).
    pub fn labels(&self) -> Vec<Option<&'static str>> {
        self.steps.iter().map(|s| s.label()).collect()
    }

    /// Hash estable de la definición de la secuencia. Los marcadores de
    /// progreso persistidos lo llevan para detectar contenido obsoleto.
    pub fn definition_hash(&self) -> String {
        let labels: Vec<Option<&str>> = self.steps.iter().map(|s| s.label()).collect();
        hashing::definition_hash(&labels)
    }

    pub fn set_on_exhausted_forward(&mut self, callback: impl FnMut() + 'static) {
        self.on_exhausted_forward = Some(Box::new(callback));
    }

    pub fn set_on_exhausted_backward(&mut self, callback: impl FnMut() + 'static) {
        self.on_exhausted_backward = Some(Box::new(callback));
    }

    // ---- Bomba de timers ----

    /// Deadline pendiente más temprano, incluyendo los de la secuencia
    /// anidada activa. `None` si no hay timers vivos.
    pub fn next_deadline(&self) -> Option<Instant> {
        let own = self.timers.next_deadline();
        let nested = match &self.steps[self.index] {
            StepNode::Sub(sub) => sub.next_deadline(),
            StepNode::Leaf(_) => None,
        };
        match (own, nested) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }

    /// Dispara todos los timers vencidos a `now`, reevaluando tras cada uno
    /// porque un auto-avance cambia el conjunto pendiente. Devuelve cuántos
    /// dispararon. Un despertar sin nada vencido es un no-op.
    pub fn fire_due(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while self.fire_earliest_due(now) {
            fired += 1;
        }
        fired
    }

    pub(crate) fn fire_earliest_due(&mut self, now: Instant) -> bool {
        // El tick se delega primero al sub-flujo activo, igual que next()/back().
        if let StepNode::Sub(sub) = &mut self.steps[self.index] {
            if sub.fire_one(now) {
                return true;
            }
        }
        let entry = match self.timers.pop_due(now, self.epoch) {
            Some(e) => e,
            None => return false,
        };
        match entry.action {
            TimerAction::SubStep { step_index, mutation } => {
                // Guardia: el paso dueño debe seguir activo; si no, no-op.
                if step_index == self.index {
                    if let Some(mutation) = mutation {
                        let mut model = self.model.borrow_mut();
                        mutation(&mut model);
                    }
                }
            }
            TimerAction::AutoAdvance { step_index } => {
                if step_index == self.index {
                    tracing::debug!(index = step_index, "auto-advance fired");
                    self.next();
                }
            }
        }
        true
    }

    // ---- Transiciones internas ----

    /// Cancela síncronamente todos los timers propios y los de la secuencia
    /// anidada activa.
    pub(crate) fn cancel_all_timers(&mut self) {
        self.epoch += 1;
        self.timers.cancel_all();
        if let StepNode::Sub(sub) = &mut self.steps[self.index] {
            sub.cancel_timers();
        }
    }

    fn leave_current(&mut self) {
        self.cancel_all_timers();
        self.slots[self.index].status = StepStatus::Visited;
    }

    /// Des-aplica el paso activo (timers cancelados primero). Usado por
    /// `back()` y por el cierre hacia atrás de un `SubSequence` padre.
    pub(crate) fn unapply_current(&mut self) {
        self.cancel_all_timers();
        self.slots[self.index].status = StepStatus::Visited;
        match &mut self.steps[self.index] {
            StepNode::Leaf(step) => {
                let mut model = self.model.borrow_mut();
                step.unapply(&mut model);
            }
            StepNode::Sub(sub) => sub.exit_backward(),
        }
    }

    /// Reaplica el paso activo sin programar timers (re-entrada hacia
    /// atrás). Usado por el retorno a un `SubSequence` retenido.
    pub(crate) fn reapply_current(&mut self) {
        let index = self.index;
        let slot = &mut self.slots[index];
        assert!(slot.activations > 0,
                "reapply requested for a step that was never applied");
        slot.activations += 1;
        slot.status = StepStatus::Active;
        match &mut self.steps[index] {
            StepNode::Leaf(step) => {
                let mut model = self.model.borrow_mut();
                step.reapply(&mut model);
            }
            StepNode::Sub(sub) => sub.reenter_backward(),
        }
    }

    fn enter_current_forward(&mut self) {
        let index = self.index;
        let first = self.slots[index].activations == 0;
        self.slots[index].activations += 1;
        self.slots[index].status = StepStatus::Active;
        match &mut self.steps[index] {
            StepNode::Leaf(step) => {
                {
                    let mut model = self.model.borrow_mut();
                    if first {
                        step.apply(&mut model);
                    } else {
                        step.reapply(&mut model);
                    }
                }
                // Los sub-revelados y el auto-avance se evalúan una vez por
                // activación, contra el modelo en el instante de activación.
                let (substeps, auto) = {
                    let model = self.model.borrow();
                    (step.delayed_substeps(&model), step.auto_advance_delay(&model))
                };
                let now = self.clock.now();
                for sub in substeps {
                    let deadline = now + sub.delay();
                    self.timers.schedule(TimerEntry { deadline,
                                                      epoch: self.epoch,
                                                      action: TimerAction::SubStep { step_index: index,
                                                                                     mutation: Some(sub.into_mutation()) } });
                }
                if let Some(delay) = auto {
                    self.timers.schedule(TimerEntry { deadline: now + delay,
                                                      epoch: self.epoch,
                                                      action: TimerAction::AutoAdvance { step_index: index } });
                }
            }
            StepNode::Sub(sub) => {
                if first {
                    sub.enter_first(&self.model, &self.clock);
                } else {
                    sub.reenter_forward();
                }
            }
        }
        tracing::debug!(index, first, "step activated forward");
    }

    fn enter_current_backward(&mut self) {
        self.reapply_current();
        tracing::debug!(index = self.index, "step reactivated backward");
    }
}
