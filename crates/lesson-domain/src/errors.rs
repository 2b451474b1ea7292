//! Errores del dominio (simples por ahora).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("unknown question id: {0}")] UnknownQuestion(String),
    #[error("choice {index} out of range for question {question}")]
    ChoiceOutOfRange { question: String, index: usize },
}
