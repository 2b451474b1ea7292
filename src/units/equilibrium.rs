//! Unidad: equilibrio químico.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lesson_adapters::{AutoPlayStep, EquationStep, InputModeStep, QuizGateStep, RevealStep, StatementStep};
use lesson_core::{Clock, Sequencer};
use lesson_domain::{Equation, InputMode, LessonModel, QuestionRegistry, UnitKind};

use crate::config::CONFIG;

pub fn sequencer(model: Rc<RefCell<LessonModel>>, clock: Rc<dyn Clock>) -> Sequencer<LessonModel> {
    let pacing = &CONFIG.pacing;
    let question = QuestionRegistry::load().questions(UnitKind::Equilibrium)[0].clone();

    Sequencer::builder(model, clock)
        .first_step(StatementStep::new("eq-cover", "Equilibrio químico"))
        .add_step(StatementStep::new("eq-intro", "Las reacciones no siempre llegan al final"))
        .add_step(EquationStep::new("eq-quotient", Equation::equilibrium_quotient(4.0)))
        .add_step(RevealStep::new("eq-reveal-q", 1))
        .add_step(StatementStep::new("eq-compare", "Compara Q con Kc para saber hacia dónde va")
                      .with_term_reveal("Q", pacing.reveal(Duration::from_millis(500)))
                      .with_term_reveal("Kc", pacing.reveal(Duration::from_millis(1300))))
        .add_step(RevealStep::new("eq-reveal-full", 2).with_plot())
        .add_step(AutoPlayStep::new("eq-relax",
                                    "El sistema se relaja hacia el equilibrio",
                                    pacing.auto_advance(Duration::from_secs(5))))
        .add_step(InputModeStep::new("eq-perturb", InputMode::Slider))
        .add_step(QuizGateStep::new("eq-quiz", question))
        .build()
}
