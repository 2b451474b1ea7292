//! Unidad: ácidos y bases.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lesson_adapters::{EquationStep, InputModeStep, QuizGateStep, RevealStep, StatementStep};
use lesson_core::{Clock, Sequencer};
use lesson_domain::{Equation, InputMode, LessonModel, QuestionRegistry, UnitKind};

use crate::config::CONFIG;

pub fn sequencer(model: Rc<RefCell<LessonModel>>, clock: Rc<dyn Clock>) -> Sequencer<LessonModel> {
    let pacing = &CONFIG.pacing;
    let question = QuestionRegistry::load().questions(UnitKind::AcidsBases)[0].clone();

    Sequencer::builder(model, clock)
        .first_step(StatementStep::new("ab-cover", "Ácidos y bases"))
        .add_step(StatementStep::new("ab-ph-scale", "El pH mide la acidez en escala logarítmica"))
        .add_step(EquationStep::new("ab-hh", Equation::henderson_hasselbalch(4.76)))
        .add_step(RevealStep::new("ab-reveal", 1))
        .add_step(StatementStep::new("ab-buffer", "Un buffer resiste cambios de pH")
                      .with_term_reveal("pKa", pacing.reveal(Duration::from_millis(700)))
                      .with_term_reveal("[A⁻]/[HA]", pacing.reveal(Duration::from_millis(1600))))
        .add_step(RevealStep::new("ab-reveal-full", 2).with_plot())
        .add_step(InputModeStep::new("ab-titrate", InputMode::Slider))
        .add_step(QuizGateStep::new("ab-quiz", question))
        .build()
}
