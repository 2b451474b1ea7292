//! Unidad: reacciones químicas.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lesson_adapters::{AutoPlayStep, EquationStep, InputModeStep, QuizGateStep, RevealStep, StatementStep};
use lesson_core::{Clock, Sequencer};
use lesson_domain::{Equation, InputMode, LessonModel, QuestionRegistry, UnitKind};

use crate::config::CONFIG;

pub fn sequencer(model: Rc<RefCell<LessonModel>>, clock: Rc<dyn Clock>) -> Sequencer<LessonModel> {
    let pacing = &CONFIG.pacing;
    let question = QuestionRegistry::load().questions(UnitKind::ChemicalReactions)[0].clone();

    Sequencer::builder(model, clock)
        .first_step(StatementStep::new("cr-cover", "Reacciones químicas"))
        .add_step(StatementStep::new("cr-rearrange", "Los átomos se reordenan, no desaparecen"))
        .add_step(EquationStep::new("cr-mass", Equation::mass_conservation(12.0)))
        .add_step(RevealStep::new("cr-reveal", 1))
        .add_step(StatementStep::new("cr-balance", "Balancear ajusta coeficientes, no subíndices")
                      .with_term_reveal("2H₂", pacing.reveal(Duration::from_millis(500)))
                      .with_term_reveal("O₂", pacing.reveal(Duration::from_millis(1100)))
                      .with_term_reveal("2H₂O", pacing.reveal(Duration::from_millis(1700))))
        .add_step(AutoPlayStep::new("cr-combust",
                                    "Mira la combustión paso a paso",
                                    pacing.auto_advance(Duration::from_secs(3))))
        .add_step(InputModeStep::new("cr-choose", InputMode::Choice))
        .add_step(QuizGateStep::new("cr-quiz", question))
        .build()
}
