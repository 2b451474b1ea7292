//! Catálogos de las unidades del simulador.
//!
//! El patrón que en el simulador original se repetía con variaciones en
//! cada unidad queda factorizado aquí: cada módulo declara su lista de
//! pasos y la monta sobre el mismo motor parametrizado. La UI construye el
//! sequencer de la pantalla al crear su view-model y lo destruye con él.

pub mod acids_bases;
pub mod chemical_reactions;
pub mod equilibrium;
pub mod reaction_rates;

use std::cell::RefCell;
use std::rc::Rc;

use lesson_core::{Clock, Sequencer};
use lesson_domain::{LessonModel, UnitKind};

/// Construye la secuencia guiada de una unidad sobre el modelo dado.
pub fn build_unit(kind: UnitKind,
                  model: Rc<RefCell<LessonModel>>,
                  clock: Rc<dyn Clock>)
                  -> Sequencer<LessonModel> {
    match kind {
        UnitKind::ReactionRates => reaction_rates::sequencer(model, clock),
        UnitKind::Equilibrium => equilibrium::sequencer(model, clock),
        UnitKind::AcidsBases => acids_bases::sequencer(model, clock),
        UnitKind::ChemicalReactions => chemical_reactions::sequencer(model, clock),
    }
}

/// Resuelve la clave estable de una unidad (la misma que usa persistencia).
pub fn parse_unit(key: &str) -> Option<UnitKind> {
    [UnitKind::ReactionRates,
     UnitKind::Equilibrium,
     UnitKind::AcidsBases,
     UnitKind::ChemicalReactions].into_iter()
                                 .find(|u| u.key() == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_keys_roundtrip() {
        for kind in [UnitKind::ReactionRates,
                     UnitKind::Equilibrium,
                     UnitKind::AcidsBases,
                     UnitKind::ChemicalReactions] {
            assert_eq!(parse_unit(kind.key()), Some(kind));
        }
        assert_eq!(parse_unit("bogus"), None);
    }
}
