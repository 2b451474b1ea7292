use std::time::Duration;

use super::delayed::DelayedSubStep;

/// Trait que define un paso de lección. Cada implementación describe una
/// mutación auto-contenida sobre el modelo, sin conocer la contabilidad de
/// índices del `Sequencer`.
///
/// Contrato:
/// - `apply` corre exactamente una vez, en la primera activación.
/// - `reapply` corre en cualquier retorno posterior al paso y debe restaurar
///   los mismos campos visibles sin repetir efectos one-shot.
/// - `unapply` es la inversa exacta de los campos visibles que
///   `apply`/`reapply` fijan; suficiente para que un `back()` deje el modelo
///   igual que antes del `next()` correspondiente.
///
/// Los métodos reciben `&mut self` porque el descriptor pertenece en
/// exclusiva a un sequencer y puede llevar flags one-shot propios.
pub trait StepDefinition<M> {
    /// Entra al paso por primera vez.
    fn apply(&mut self, model: &mut M);

    /// Retorna al paso tras una activación previa. Por defecto repite
    /// `apply`; sólo pasos con efectos one-shot necesitan distinguirlo.
    fn reapply(&mut self, model: &mut M) {
        self.apply(model);
    }

    /// Deshace lo que `apply`/`reapply` fijaron, antes de moverse al paso
    /// anterior.
    fn unapply(&mut self, model: &mut M);

    /// Sub-revelados diferidos, evaluados una vez por activación hacia
    /// adelante contra el modelo en el instante de activación.
    fn delayed_substeps(&self, model: &M) -> Vec<DelayedSubStep<M>> {
        let _ = model;
        Vec::new()
    }

    /// Si devuelve `Some`, el sequencer programa un `next()` automático tras
    /// esa duración, cancelado si el paso se abandona antes.
    fn auto_advance_delay(&self, model: &M) -> Option<Duration> {
        let _ = model;
        None
    }

    /// Marcador estable del paso (para reanudar y fast-forward). Opcional.
    fn label(&self) -> Option<&'static str> {
        None
    }
}
