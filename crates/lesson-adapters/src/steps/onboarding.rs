//! Sub-flujo de onboarding reutilizable.
//!
//! Las unidades lo incrustan como `SubSequence` sin conocer cuántos pasos
//! tiene; la factory se invoca en cada reconstrucción (re-entrada hacia
//! adelante), por lo que debe producir siempre la misma lista.

use std::time::Duration;

use lesson_core::StepNode;
use lesson_domain::{InputMode, LessonModel};

use super::input::InputModeStep;
use super::statement::StatementStep;

/// Flujo guiado de bienvenida: saludo, captura de nombre, listo.
pub fn onboarding_flow() -> Vec<StepNode<LessonModel>> {
    vec![StepNode::leaf(StatementStep::new("onboarding-welcome",
                                           "¡Bienvenido al laboratorio!")
                            .with_term_reveal("⚗", Duration::from_millis(800))),
         StepNode::leaf(InputModeStep::new("onboarding-name", InputMode::FreeText)),
         StepNode::leaf(StatementStep::new("onboarding-ready", "Todo listo. Empecemos."))]
}
