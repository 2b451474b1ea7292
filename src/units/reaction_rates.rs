//! Unidad: velocidad de reacción.
//!
//! La única unidad que incrusta el onboarding como sub-flujo anidado: el
//! resto asume que el aprendiz ya pasó por él.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lesson_adapters::{onboarding_flow, AutoPlayStep, EquationStep, InputModeStep, QuizGateStep,
                      RevealStep, StatementStep};
use lesson_core::{Clock, Sequencer, SubSequence};
use lesson_domain::{Equation, InputMode, LessonModel, QuestionRegistry, UnitKind};

use crate::config::CONFIG;

pub fn sequencer(model: Rc<RefCell<LessonModel>>, clock: Rc<dyn Clock>) -> Sequencer<LessonModel> {
    let pacing = &CONFIG.pacing;
    let question = QuestionRegistry::load().questions(UnitKind::ReactionRates)[0].clone();

    Sequencer::builder(model, clock)
        .first_step(StatementStep::new("rr-cover", "Velocidad de reacción"))
        .add_sub_sequence(SubSequence::labeled("rr-onboarding", onboarding_flow))
        .add_step(EquationStep::new("rr-rate-law", Equation::first_order_rate(0.35)))
        .add_step(RevealStep::new("rr-reveal-lhs", 1))
        .add_step(StatementStep::new("rr-terms", "La velocidad depende de k y de la concentración")
                      .with_term_reveal("k", pacing.reveal(Duration::from_millis(600)))
                      .with_term_reveal("[A]", pacing.reveal(Duration::from_millis(1500))))
        .add_step(RevealStep::new("rr-reveal-full", 2).with_plot())
        .add_step(InputModeStep::new("rr-slider", InputMode::Slider))
        .add_step(AutoPlayStep::new("rr-simulate",
                                    "Observa cómo cae [A] con el tiempo",
                                    pacing.auto_advance(Duration::from_secs(4))))
        .add_step(QuizGateStep::new("rr-quiz", question))
        .build()
}
