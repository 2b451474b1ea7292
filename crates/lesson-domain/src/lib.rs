//! lesson-domain: Modelo de vista de las lecciones de química.
//!
//! Define la estructura mutable que los pasos del motor conducen (enunciado,
//! términos resaltados, etapa de revelado de la ecuación, modo de entrada,
//! compuerta del quiz), las ecuaciones opacas `f(x) -> y` que los pasos
//! instalan como campos del modelo, y el banco de preguntas inmutable de
//! carga única.
pub mod equation;
pub mod errors;
pub mod model;
pub mod question;

pub use equation::Equation;
pub use errors::DomainError;
pub use model::{InputMode, LessonModel, UnitKind};
pub use question::{Question, QuestionRegistry};
