//! lesson-adapters: Capa de adaptación Dominio ↔ Core.
//!
//! Este crate provee:
//! - Los pasos concretos que las unidades componen en secuencias guiadas
//!   (enunciados con revelados diferidos, etapas de ecuación, modos de
//!   entrada, auto-avance y compuerta de quiz).
//! - El sub-flujo de onboarding reutilizable, incrustable como
//!   `SubSequence` en cualquier unidad.
//!
//! Todos los pasos respetan el contrato de reaplicación: capturan el valor
//! previo de cada campo que tocan en su primera aplicación y lo restauran
//! exactos en `unapply`.

pub mod steps;

pub use steps::{onboarding_flow, AutoPlayStep, EquationStep, InputModeStep, QuizGateStep, RevealStep,
                StatementStep};
