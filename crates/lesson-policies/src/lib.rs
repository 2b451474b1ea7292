//! lesson-policies – Política de admisión de pantallas
//!
//! Provee el contrato y la implementación inicial (sólo-visitadas) para
//! decidir si el aprendiz puede saltar directamente a una pantalla. El motor
//! expone la comparación de índices; la política vive aquí, fuera del core.

use serde::{Deserialize, Serialize};

/// Decisión de admisión, con su razón tipada para auditoría/UI.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GateDecision {
    pub admitted: bool,
    pub target_index: usize,
    pub current_index: usize,
    pub policy_id: String,
}

/// Contrato de políticas de admisión deterministas.
pub trait AdmissionPolicy {
    fn id(&self) -> &'static str;
    fn decide(&self, target_index: usize, current_index: usize) -> GateDecision;

    fn can_enter(&self, target_index: usize, current_index: usize) -> bool {
        self.decide(target_index, current_index).admitted
    }
}

/// Regla única de la app: una pantalla es saltable sii su índice es menor o
/// igual que el índice actual (ya fue visitada).
pub struct VisitedOnlyGate;

impl VisitedOnlyGate {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VisitedOnlyGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AdmissionPolicy for VisitedOnlyGate {
    fn id(&self) -> &'static str {
        "visited_only"
    }

    fn decide(&self, target_index: usize, current_index: usize) -> GateDecision {
        GateDecision { admitted: target_index <= current_index,
                       target_index,
                       current_index,
                       policy_id: self.id().into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visited_screens_are_admitted() {
        let gate = VisitedOnlyGate::new();
        assert!(gate.can_enter(0, 3));
        assert!(gate.can_enter(3, 3));
        assert!(!gate.can_enter(4, 3));
    }

    #[test]
    fn decision_carries_its_rationale() {
        let gate = VisitedOnlyGate::new();
        let d = gate.decide(5, 2);
        assert!(!d.admitted);
        assert_eq!(d.policy_id, "visited_only");
        assert_eq!(d.target_index, 5);
        assert_eq!(d.current_index, 2);

        // Serializable para auditoría.
        let v = serde_json::to_value(&d).expect("serialize decision");
        assert_eq!(v["admitted"], false);
    }
}
