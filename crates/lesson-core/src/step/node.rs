use super::definition::StepDefinition;
use crate::sequencer::SubSequence;

/// Unión cerrada sobre los dos tipos de paso que una secuencia puede
/// contener. El `Sequencer` hace pattern-match sobre esta enum en lugar de
/// despachar virtualmente: los pasos hoja siguen siendo intercambiables vía
/// el trait `StepDefinition`, y los sub-flujos anidados llevan su propio
/// sequencer interno.
pub enum StepNode<M> {
    /// Paso hoja: una mutación auto-contenida.
    Leaf(Box<dyn StepDefinition<M>>),
    /// Paso que delega en una secuencia anidada independiente.
    Sub(SubSequence<M>),
}

impl<M> StepNode<M> {
    /// Envuelve un paso hoja concreto.
    pub fn leaf(step: impl StepDefinition<M> + 'static) -> Self {
        StepNode::Leaf(Box::new(step))
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            StepNode::Leaf(step) => step.label(),
            StepNode::Sub(sub) => sub.label(),
        }
    }
}

/// Estado de un paso en tiempo de ejecución.
///
/// Transiciones válidas:
/// - `Pending` -> `Active` (primera activación, vía `apply`)
/// - `Active` -> `Visited` (se abandona en cualquier dirección)
/// - `Visited` -> `Active` (retorno, vía `reapply`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Nunca activado.
    Pending,
    /// Es el paso activo de su secuencia.
    Active,
    /// Activado alguna vez, actualmente no activo.
    Visited,
}

/// Contabilidad por paso mantenida por el sequencer.
#[derive(Debug, Clone, Copy)]
pub struct StepSlot {
    pub status: StepStatus,
    /// Activaciones acumuladas (apply + reapply). `apply` corre sólo cuando
    /// vale cero.
    pub activations: u32,
}

impl StepSlot {
    pub(crate) fn new() -> Self {
        Self { status: StepStatus::Pending,
               activations: 0 }
    }
}
