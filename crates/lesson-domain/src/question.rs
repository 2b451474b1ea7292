//! Banco de preguntas inmutable de carga única.
//!
//! Registro explícito que se pasa por referencia a quien lo necesite; la
//! tabla embebida se construye perezosamente una sola vez por proceso y
//! nunca muta después. Nada de flags estáticos mutables: la carga es
//! idempotente por construcción.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::model::UnitKind;

/// Pregunta de selección múltiple de una unidad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer_index: usize,
}

impl Question {
    /// Comprueba una elección del aprendiz contra la respuesta correcta.
    pub fn check(&self, choice: usize) -> Result<bool, DomainError> {
        if choice >= self.choices.len() {
            return Err(DomainError::ChoiceOutOfRange { question: self.id.clone(),
                                                       index: choice });
        }
        Ok(choice == self.answer_index)
    }
}

/// Banco de preguntas por unidad, con orden de inserción estable.
pub struct QuestionRegistry {
    by_unit: IndexMap<UnitKind, Vec<Question>>,
}

static BUILTIN: Lazy<QuestionRegistry> = Lazy::new(QuestionRegistry::build_builtin);

impl QuestionRegistry {
    /// Registro embebido del proceso. La primera llamada construye la tabla;
    /// las siguientes devuelven la misma referencia.
    pub fn load() -> &'static QuestionRegistry {
        &BUILTIN
    }

    fn build_builtin() -> Self {
        let mut by_unit: IndexMap<UnitKind, Vec<Question>> = IndexMap::new();
        by_unit.insert(UnitKind::ReactionRates, vec![
            question("rr-halving",
                     "Si la concentración de A se reduce a la mitad, ¿qué pasa con la velocidad en rate = k·[A]?",
                     &["Se duplica", "Se reduce a la mitad", "No cambia"],
                     1),
            question("rr-k-meaning",
                     "¿Qué representa k en la ley de velocidad?",
                     &["La concentración inicial", "La constante de velocidad", "El orden de reacción"],
                     1),
        ]);
        by_unit.insert(UnitKind::Equilibrium, vec![
            question("eq-q-vs-k",
                     "Si Q < Kc, ¿hacia dónde se desplaza la reacción?",
                     &["Hacia productos", "Hacia reactivos", "Ya está en equilibrio"],
                     0),
            question("eq-stress",
                     "Al añadir reactivo a un sistema en equilibrio, el sistema…",
                     &["No responde", "Consume parte del reactivo añadido", "Se detiene"],
                     1),
        ]);
        by_unit.insert(UnitKind::AcidsBases, vec![
            question("ab-buffer-mid",
                     "Cuando [A⁻] = [HA], el pH de un buffer vale…",
                     &["7 siempre", "El pKa del ácido", "Cero"],
                     1),
            question("ab-strong-acid",
                     "Un ácido fuerte en agua…",
                     &["Se disocia por completo", "No se disocia", "Sólo se disocia a pH alto"],
                     0),
        ]);
        by_unit.insert(UnitKind::ChemicalReactions, vec![
            question("cr-mass",
                     "En una reacción química, la masa total…",
                     &["Aumenta", "Disminuye", "Se conserva"],
                     2),
            question("cr-balance",
                     "Balancear una ecuación ajusta…",
                     &["Los subíndices", "Los coeficientes", "Los estados de agregación"],
                     1),
        ]);
        Self { by_unit }
    }

    /// Preguntas de una unidad, en orden estable.
    pub fn questions(&self, unit: UnitKind) -> &[Question] {
        self.by_unit.get(&unit).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn question_by_id(&self, id: &str) -> Result<&Question, DomainError> {
        self.by_unit
            .values()
            .flatten()
            .find(|q| q.id == id)
            .ok_or_else(|| DomainError::UnknownQuestion(id.to_string()))
    }

    pub fn total(&self) -> usize {
        self.by_unit.values().map(Vec::len).sum()
    }
}

fn question(id: &str, prompt: &str, choices: &[&str], answer_index: usize) -> Question {
    Question { id: id.to_string(),
               prompt: prompt.to_string(),
               choices: choices.iter().map(|c| c.to_string()).collect(),
               answer_index }
}
