//! Modelo de vista mutable de una pantalla de lección.
//!
//! El motor es genérico sobre el modelo: esta estructura es el consumidor
//! concreto que las cuatro unidades del simulador conducen. La UI observa
//! estos campos y re-renderiza; los pasos son los únicos que los mutan.

use serde::{Deserialize, Serialize};

use crate::equation::Equation;
use crate::question::Question;

/// Unidades del simulador. Cada una construye su propia secuencia guiada
/// sobre el mismo motor parametrizado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    ReactionRates,
    Equilibrium,
    AcidsBases,
    ChemicalReactions,
}

impl UnitKind {
    /// Clave estable usada por persistencia y analítica.
    pub fn key(&self) -> &'static str {
        match self {
            UnitKind::ReactionRates => "reaction_rates",
            UnitKind::Equilibrium => "equilibrium",
            UnitKind::AcidsBases => "acids_bases",
            UnitKind::ChemicalReactions => "chemical_reactions",
        }
    }
}

/// Modo de entrada activo de la pantalla.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InputMode {
    /// Sólo lectura: el aprendiz mira y avanza.
    #[default]
    ReadOnly,
    /// Deslizador sobre la variable independiente de la ecuación activa.
    Slider,
    /// Selección múltiple.
    Choice,
    /// Texto libre (p. ej. pedir un nombre en el onboarding).
    FreeText,
}

/// Estado observable de la pantalla que los pasos mutan.
///
/// Serializable para que las sondas de test y los payloads de analítica
/// puedan tomar instantáneas; la ecuación activa es opaca y se omite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonModel {
    /// Enunciado pedagógico visible.
    pub statement: Option<String>,
    /// Términos de la ecuación actualmente resaltados, en orden de aparición.
    pub highlighted_terms: Vec<String>,
    /// Etapa de revelado de la ecuación (0 = oculta).
    pub reveal_stage: u32,
    pub input_mode: InputMode,
    /// Ecuación activa, opaca para el motor.
    #[serde(skip)]
    pub equation: Option<Equation>,
    /// Si la curva de la ecuación se dibuja.
    pub plot_visible: bool,
    /// Compuerta del quiz de la unidad.
    pub quiz_unlocked: bool,
    pub active_question: Option<Question>,
    /// Nombre capturado en el onboarding (texto libre).
    pub learner_name: Option<String>,
}

impl LessonModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resalta un término si no lo estaba ya. Idempotente: los sub-revelados
    /// diferidos pueden repetirse en re-entradas sin duplicar.
    pub fn highlight_term(&mut self, term: &str) {
        if !self.highlighted_terms.iter().any(|t| t == term) {
            self.highlighted_terms.push(term.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_term_is_idempotent() {
        let mut model = LessonModel::new();
        model.highlight_term("k");
        model.highlight_term("[A]");
        model.highlight_term("k");
        assert_eq!(model.highlighted_terms, vec!["k", "[A]"]);
    }

    #[test]
    fn model_snapshot_skips_the_opaque_equation() {
        let mut model = LessonModel::new();
        model.equation = Some(Equation::first_order_rate(0.3));
        let value = serde_json::to_value(&model).expect("serialize model");
        assert!(value.get("equation").is_none());
        assert_eq!(value["reveal_stage"], 0);
    }

    #[test]
    fn unit_keys_are_stable() {
        assert_eq!(UnitKind::ReactionRates.key(), "reaction_rates");
        assert_eq!(UnitKind::AcidsBases.key(), "acids_bases");
    }
}
