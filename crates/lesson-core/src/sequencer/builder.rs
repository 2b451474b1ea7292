//! Builder para `Sequencer`.
//!
//! Patrón en dos fases que obliga a declarar el primer paso antes de poder
//! encadenar el resto: una secuencia vacía queda descartada en tiempo de
//! compilación en lugar de abortar en construcción. `build()` consume el
//! builder y activa el paso 0.

use std::cell::RefCell;
use std::rc::Rc;

use crate::clock::Clock;
use crate::step::{StepDefinition, StepNode};

use super::core::Sequencer;
use super::subsequence::SubSequence;

/// Estado inicial del builder: modelo y reloj presentes, ningún paso aún.
pub struct SequencerInit<M> {
    model: Rc<RefCell<M>>,
    clock: Rc<dyn Clock>,
}

impl<M> SequencerInit<M> {
    pub(crate) fn new(model: Rc<RefCell<M>>, clock: Rc<dyn Clock>) -> Self {
        Self { model, clock }
    }

    /// Declara el primer paso y transiciona al builder completo.
    pub fn first_step(self, step: impl StepDefinition<M> + 'static) -> SequencerBuilder<M> {
        SequencerBuilder { model: self.model,
                           clock: self.clock,
                           steps: vec![StepNode::leaf(step)],
                           on_exhausted_forward: None,
                           on_exhausted_backward: None }
    }

    /// Variante: la secuencia arranca directamente con un sub-flujo anidado.
    pub fn first_sub_sequence(self, sub: SubSequence<M>) -> SequencerBuilder<M> {
        SequencerBuilder { model: self.model,
                           clock: self.clock,
                           steps: vec![StepNode::Sub(sub)],
                           on_exhausted_forward: None,
                           on_exhausted_backward: None }
    }
}

/// Builder principal que acumula pasos y callbacks de borde.
pub struct SequencerBuilder<M> {
    model: Rc<RefCell<M>>,
    clock: Rc<dyn Clock>,
    steps: Vec<StepNode<M>>,
    on_exhausted_forward: Option<Box<dyn FnMut()>>,
    on_exhausted_backward: Option<Box<dyn FnMut()>>,
}

impl<M> SequencerBuilder<M> {
    pub fn add_step(mut self, step: impl StepDefinition<M> + 'static) -> Self {
        self.steps.push(StepNode::leaf(step));
        self
    }

    pub fn add_sub_sequence(mut self, sub: SubSequence<M>) -> Self {
        self.steps.push(StepNode::Sub(sub));
        self
    }

    /// Callback invocado cuando `next()` llega al borde final (la navegación
    /// se aborta y el control pasa al flujo contenedor).
    pub fn on_exhausted_forward(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_exhausted_forward = Some(Box::new(callback));
        self
    }

    /// Callback invocado cuando `back()` llega al borde inicial.
    pub fn on_exhausted_backward(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_exhausted_backward = Some(Box::new(callback));
        self
    }

    /// Construye el sequencer final. El paso 0 se activa aquí (su `apply`
    /// corre y sus timers quedan programados).
    pub fn build(self) -> Sequencer<M> {
        Sequencer::with_callbacks(self.steps,
                                  self.model,
                                  self.clock,
                                  self.on_exhausted_forward,
                                  self.on_exhausted_backward)
    }
}
