//! Compuerta del quiz de la unidad.
//!
//! El único paso con asimetría real entre `apply` y `reapply`: el evento de
//! analítica "quiz alcanzado" dispara una sola vez en la primera aplicación
//! y nunca se repite en re-entradas. Los campos visibles se fijan igual por
//! ambos caminos.

use lesson_core::StepDefinition;
use lesson_domain::{InputMode, LessonModel, Question};

struct SavedGate {
    quiz_unlocked: bool,
    active_question: Option<Question>,
    input_mode: InputMode,
}

pub struct QuizGateStep {
    tag: &'static str,
    question: Question,
    on_first_apply: Option<Box<dyn FnMut()>>,
    fired: bool,
    prev: Option<SavedGate>,
}

impl QuizGateStep {
    pub fn new(tag: &'static str, question: Question) -> Self {
        Self { tag,
               question,
               on_first_apply: None,
               fired: false,
               prev: None }
    }

    /// Hook one-shot notificado en la primera aplicación (p. ej. un evento
    /// de analítica fire-and-forget).
    pub fn with_first_apply_hook(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_first_apply = Some(Box::new(hook));
        self
    }

    fn show(&self, model: &mut LessonModel) {
        model.quiz_unlocked = true;
        model.active_question = Some(self.question.clone());
        model.input_mode = InputMode::Choice;
    }
}

impl StepDefinition<LessonModel> for QuizGateStep {
    fn apply(&mut self, model: &mut LessonModel) {
        if self.prev.is_none() {
            self.prev = Some(SavedGate { quiz_unlocked: model.quiz_unlocked,
                                         active_question: model.active_question.clone(),
                                         input_mode: model.input_mode });
        }
        self.show(model);
        if !self.fired {
            self.fired = true;
            if let Some(hook) = self.on_first_apply.as_mut() {
                hook();
            }
            tracing::debug!(step = self.tag, "quiz gate reached for the first time");
        }
    }

    fn reapply(&mut self, model: &mut LessonModel) {
        self.show(model);
    }

    fn unapply(&mut self, model: &mut LessonModel) {
        let prev = self.prev.as_ref().expect("unapply before apply");
        model.quiz_unlocked = prev.quiz_unlocked;
        model.active_question = prev.active_question.clone();
        model.input_mode = prev.input_mode;
    }

    fn label(&self) -> Option<&'static str> {
        Some(self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::{ManualClock, Sequencer, StepNode};
    use lesson_domain::{QuestionRegistry, UnitKind};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn sample_question() -> Question {
        QuestionRegistry::load().questions(UnitKind::ReactionRates)[0].clone()
    }

    #[test]
    fn the_first_apply_hook_never_repeats_across_reentries() {
        let model = Rc::new(RefCell::new(LessonModel::new()));
        let clock = Rc::new(ManualClock::new());
        let hits = Rc::new(Cell::new(0u32));
        let hits_hook = Rc::clone(&hits);
        let gate = QuizGateStep::new("quiz", sample_question())
            .with_first_apply_hook(move || hits_hook.set(hits_hook.get() + 1));

        let mut seq = Sequencer::new(vec![StepNode::leaf(crate::steps::StatementStep::new("intro", "hola")),
                                          StepNode::leaf(gate),
                                          StepNode::leaf(crate::steps::StatementStep::new("done", "fin"))],
                                     Rc::clone(&model),
                                     clock);

        seq.next();
        assert_eq!(hits.get(), 1);
        assert!(model.borrow().quiz_unlocked);

        // Adelante y de vuelta varias veces: el hook no se repite, los
        // campos visibles sí se restauran.
        seq.next();
        seq.back();
        assert_eq!(hits.get(), 1);
        assert!(model.borrow().quiz_unlocked);

        seq.back();
        assert_eq!(hits.get(), 1);
        assert!(!model.borrow().quiz_unlocked);
        assert!(model.borrow().active_question.is_none());

        seq.next();
        assert_eq!(hits.get(), 1, "forward re-entry must not refire the one-shot hook");
        assert!(model.borrow().quiz_unlocked);
    }
}
