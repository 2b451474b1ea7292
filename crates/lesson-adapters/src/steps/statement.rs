//! Pasos de enunciado: el ladrillo básico de toda lección.
//!
//! `apply` captura el estado previo una sola vez y lo repone exacto en
//! `unapply`; `reapply` repone el enunciado pero no toca los resaltados: si
//! algún sub-revelado disparó antes de abandonar el paso, el `unapply` del
//! paso siguiente ya los dejó como estaban y borrarlos rompería la
//! invariante de reaplicación.

use std::time::Duration;

use lesson_core::{DelayedSubStep, StepDefinition};
use lesson_domain::LessonModel;

struct SavedView {
    statement: Option<String>,
    highlights: Vec<String>,
}

/// Muestra un enunciado y, opcionalmente, resalta términos de la ecuación
/// en diferido (p. ej. enunciado inmediato, término resaltado 1.5s después).
pub struct StatementStep {
    tag: &'static str,
    text: String,
    term_reveals: Vec<(String, Duration)>,
    prev: Option<SavedView>,
}

impl StatementStep {
    pub fn new(tag: &'static str, text: impl Into<String>) -> Self {
        Self { tag,
               text: text.into(),
               term_reveals: Vec::new(),
               prev: None }
    }

    /// Programa el resaltado de `term` para `delay` después de la activación.
    pub fn with_term_reveal(mut self, term: impl Into<String>, delay: Duration) -> Self {
        self.term_reveals.push((term.into(), delay));
        self
    }
}

impl StepDefinition<LessonModel> for StatementStep {
    fn apply(&mut self, model: &mut LessonModel) {
        if self.prev.is_none() {
            self.prev = Some(SavedView { statement: model.statement.clone(),
                                         highlights: model.highlighted_terms.clone() });
        }
        model.statement = Some(self.text.clone());
        model.highlighted_terms.clear();
        tracing::debug!(step = self.tag, "statement shown");
    }

    fn reapply(&mut self, model: &mut LessonModel) {
        model.statement = Some(self.text.clone());
    }

    fn unapply(&mut self, model: &mut LessonModel) {
        let prev = self.prev.as_ref().expect("unapply before apply");
        model.statement = prev.statement.clone();
        model.highlighted_terms = prev.highlights.clone();
    }

    fn delayed_substeps(&self, _model: &LessonModel) -> Vec<DelayedSubStep<LessonModel>> {
        self.term_reveals
            .iter()
            .map(|(term, delay)| {
                let term = term.clone();
                DelayedSubStep::after(*delay, move |m: &mut LessonModel| m.highlight_term(&term))
            })
            .collect()
    }

    fn label(&self) -> Option<&'static str> {
        Some(self.tag)
    }
}

/// Enunciado que avanza solo: tras `delay`, el sequencer ejecuta un `next()`
/// sin entrada del usuario (cancelado si el aprendiz se mueve antes).
pub struct AutoPlayStep {
    inner: StatementStep,
    delay: Duration,
}

impl AutoPlayStep {
    pub fn new(tag: &'static str, text: impl Into<String>, delay: Duration) -> Self {
        Self { inner: StatementStep::new(tag, text),
               delay }
    }
}

impl StepDefinition<LessonModel> for AutoPlayStep {
    fn apply(&mut self, model: &mut LessonModel) {
        self.inner.apply(model);
    }

    fn reapply(&mut self, model: &mut LessonModel) {
        self.inner.reapply(model);
    }

    fn unapply(&mut self, model: &mut LessonModel) {
        self.inner.unapply(model);
    }

    fn auto_advance_delay(&self, _model: &LessonModel) -> Option<Duration> {
        Some(self.delay)
    }

    fn label(&self) -> Option<&'static str> {
        self.inner.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::{Clock, ManualClock, Sequencer, StepNode};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn statement_roundtrip_restores_the_previous_text() {
        let model = Rc::new(RefCell::new(LessonModel::new()));
        let clock = Rc::new(ManualClock::new());
        let mut seq = Sequencer::new(vec![StepNode::leaf(StatementStep::new("a", "first")),
                                          StepNode::leaf(StatementStep::new("b", "second"))],
                                     Rc::clone(&model),
                                     clock);

        assert_eq!(model.borrow().statement.as_deref(), Some("first"));
        seq.next();
        assert_eq!(model.borrow().statement.as_deref(), Some("second"));
        seq.back();
        assert_eq!(model.borrow().statement.as_deref(), Some("first"));
    }

    #[test]
    fn term_reveals_fire_after_their_delay_and_die_with_the_step() {
        let model = Rc::new(RefCell::new(LessonModel::new()));
        let clock = Rc::new(ManualClock::new());
        let step = StatementStep::new("rate", "observa la ley de velocidad")
            .with_term_reveal("k", Duration::from_millis(500))
            .with_term_reveal("[A]", Duration::from_millis(1500));
        let mut seq = Sequencer::new(vec![StepNode::leaf(step),
                                          StepNode::leaf(StatementStep::new("done", "fin"))],
                                     Rc::clone(&model),
                                     Rc::clone(&clock) as Rc<dyn lesson_core::Clock>);

        clock.advance(Duration::from_millis(500));
        seq.fire_due(clock.now());
        assert_eq!(model.borrow().highlighted_terms, vec!["k"]);

        // El aprendiz avanza antes del segundo revelado: no dispara jamás.
        // (El enunciado siguiente descarta los resaltados de su predecesor.)
        seq.next();
        clock.advance(Duration::from_secs(60));
        assert_eq!(seq.fire_due(clock.now()), 0);
        assert!(model.borrow().highlighted_terms.is_empty());

        // Y al volver, el resaltado que sí había disparado reaparece exacto.
        seq.back();
        assert_eq!(model.borrow().highlighted_terms, vec!["k"]);
    }
}
