//! Cambio del modo de entrada de la pantalla.

use lesson_core::StepDefinition;
use lesson_domain::{InputMode, LessonModel};

/// Activa un modo de entrada recordando el anterior. `reapply` repite
/// `apply` (sin efectos one-shot).
pub struct InputModeStep {
    tag: &'static str,
    mode: InputMode,
    prev: Option<InputMode>,
}

impl InputModeStep {
    pub fn new(tag: &'static str, mode: InputMode) -> Self {
        Self { tag, mode, prev: None }
    }
}

impl StepDefinition<LessonModel> for InputModeStep {
    fn apply(&mut self, model: &mut LessonModel) {
        if self.prev.is_none() {
            self.prev = Some(model.input_mode);
        }
        model.input_mode = self.mode;
    }

    fn unapply(&mut self, model: &mut LessonModel) {
        model.input_mode = self.prev.expect("unapply before apply");
    }

    fn label(&self) -> Option<&'static str> {
        Some(self.tag)
    }
}
