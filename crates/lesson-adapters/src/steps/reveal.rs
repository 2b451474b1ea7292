//! Etapas de revelado de la ecuación y su instalación en el modelo.

use lesson_core::StepDefinition;
use lesson_domain::{Equation, LessonModel};

/// Fija la etapa de revelado de la ecuación (0 = oculta) y, opcionalmente,
/// hace visible la curva. Idempotente: `reapply` repite `apply` sin efectos
/// one-shot, así que el default del trait basta.
pub struct RevealStep {
    tag: &'static str,
    stage: u32,
    show_plot: bool,
    prev: Option<(u32, bool)>,
}

impl RevealStep {
    pub fn new(tag: &'static str, stage: u32) -> Self {
        Self { tag,
               stage,
               show_plot: false,
               prev: None }
    }

    pub fn with_plot(mut self) -> Self {
        self.show_plot = true;
        self
    }
}

impl StepDefinition<LessonModel> for RevealStep {
    fn apply(&mut self, model: &mut LessonModel) {
        if self.prev.is_none() {
            self.prev = Some((model.reveal_stage, model.plot_visible));
        }
        model.reveal_stage = self.stage;
        if self.show_plot {
            model.plot_visible = true;
        }
    }

    fn unapply(&mut self, model: &mut LessonModel) {
        let (stage, plot) = self.prev.expect("unapply before apply");
        model.reveal_stage = stage;
        model.plot_visible = plot;
    }

    fn label(&self) -> Option<&'static str> {
        Some(self.tag)
    }
}

/// Instala una ecuación opaca como campo del modelo. El motor nunca la
/// inspecciona; la UI la evalúa para dibujar.
pub struct EquationStep {
    tag: &'static str,
    equation: Equation,
    prev: Option<Option<Equation>>,
}

impl EquationStep {
    pub fn new(tag: &'static str, equation: Equation) -> Self {
        Self { tag,
               equation,
               prev: None }
    }
}

impl StepDefinition<LessonModel> for EquationStep {
    fn apply(&mut self, model: &mut LessonModel) {
        if self.prev.is_none() {
            self.prev = Some(model.equation.clone());
        }
        model.equation = Some(self.equation.clone());
    }

    fn unapply(&mut self, model: &mut LessonModel) {
        model.equation = self.prev.clone().expect("unapply before apply");
    }

    fn label(&self) -> Option<&'static str> {
        Some(self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::{ManualClock, Sequencer, StepNode};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn reveal_stages_walk_back_exactly() {
        let model = Rc::new(RefCell::new(LessonModel::new()));
        let clock = Rc::new(ManualClock::new());
        let mut seq = Sequencer::new(vec![StepNode::leaf(RevealStep::new("hidden", 0)),
                                          StepNode::leaf(RevealStep::new("lhs", 1)),
                                          StepNode::leaf(RevealStep::new("full", 2).with_plot())],
                                     Rc::clone(&model),
                                     clock);

        seq.next();
        seq.next();
        assert_eq!(model.borrow().reveal_stage, 2);
        assert!(model.borrow().plot_visible);

        seq.back();
        assert_eq!(model.borrow().reveal_stage, 1);
        assert!(!model.borrow().plot_visible);

        seq.back();
        assert_eq!(model.borrow().reveal_stage, 0);
    }

    #[test]
    fn equation_step_swaps_and_restores_the_active_equation() {
        let model = Rc::new(RefCell::new(LessonModel::new()));
        let clock = Rc::new(ManualClock::new());
        let mut seq =
            Sequencer::new(vec![StepNode::leaf(EquationStep::new("rate-law", Equation::first_order_rate(0.5))),
                                StepNode::leaf(EquationStep::new("mass", Equation::mass_conservation(10.0)))],
                           Rc::clone(&model),
                           clock);

        assert_eq!(model.borrow().equation.as_ref().map(|e| e.id()), Some("first_order_rate"));
        seq.next();
        assert_eq!(model.borrow().equation.as_ref().map(|e| e.id()), Some("mass_conservation"));
        seq.back();
        assert_eq!(model.borrow().equation.as_ref().map(|e| e.id()), Some("first_order_rate"));
    }
}
