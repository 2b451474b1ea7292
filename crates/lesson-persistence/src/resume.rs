//! Reanudación en frío.
//!
//! La posición de pantalla no vive en el motor: este colaborador guarda un
//! marcador (unidad, etiqueta del paso, hash de definición) y, al arrancar,
//! reconstruye la posición re-invocando `next()` contra un sequencer recién
//! construido (`next_until_label`). El callback de agotamiento hacia
//! adelante sólo dispara si el marcador quedó genuinamente más allá del
//! final.

use serde::{Deserialize, Serialize};

use lesson_core::Sequencer;

use crate::store::{ProgressStore, StoreError};

/// Marcador persistido de la última pantalla completada de una unidad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressMarker {
    pub unit: String,
    pub label: String,
    pub definition_hash: String,
}

/// Resultado de intentar reanudar una unidad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeOutcome {
    /// No había marcador: la unidad arranca desde el principio.
    Fresh,
    /// Fast-forward completado hasta la pantalla marcada.
    Resumed { index: usize },
    /// El marcador no es utilizable (contenido de lección cambiado o valor
    /// corrupto): se descarta y la unidad arranca desde el principio.
    Stale,
}

fn progress_key(unit: &str) -> String {
    format!("progress/{unit}")
}

/// Guarda la posición actual como marcador. Los pasos sin etiqueta no son
/// puntos de reanudación: en ese caso no se escribe nada.
pub async fn save_progress<M>(store: &dyn ProgressStore,
                              unit: &str,
                              seq: &Sequencer<M>)
                              -> Result<(), StoreError> {
    let label = match seq.current_label() {
        Some(label) => label,
        None => {
            tracing::debug!(unit, index = seq.current_index(), "unlabeled step, progress not saved");
            return Ok(());
        }
    };
    let marker = ProgressMarker { unit: unit.to_string(),
                                  label: label.to_string(),
                                  definition_hash: seq.definition_hash() };
    let raw = serde_json::to_string(&marker).expect("serialize progress marker");
    store.set(&progress_key(unit), raw).await
}

/// Reanuda un sequencer recién construido desde el marcador persistido.
pub async fn resume_sequencer<M>(seq: &mut Sequencer<M>,
                                 store: &dyn ProgressStore,
                                 unit: &str)
                                 -> Result<ResumeOutcome, StoreError> {
    let raw = match store.get(&progress_key(unit)).await? {
        Some(raw) => raw,
        None => return Ok(ResumeOutcome::Fresh),
    };
    let marker: ProgressMarker = match serde_json::from_str(&raw) {
        Ok(marker) => marker,
        Err(err) => {
            tracing::warn!(unit, %err, "corrupt progress marker discarded");
            return Ok(ResumeOutcome::Stale);
        }
    };
    if marker.definition_hash != seq.definition_hash() {
        tracing::warn!(unit, "lesson content changed, saved progress discarded");
        return Ok(ResumeOutcome::Stale);
    }
    if seq.next_until_label(&marker.label) {
        Ok(ResumeOutcome::Resumed { index: seq.current_index() })
    } else {
        // Hash coincidente pero etiqueta ausente: marcador inutilizable.
        tracing::warn!(unit, label = %marker.label, "marker label not found in sequence");
        Ok(ResumeOutcome::Stale)
    }
}
