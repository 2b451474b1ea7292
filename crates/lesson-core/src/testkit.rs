//! Soporte de tests compartido entre crates.
//!
//! El verificador central recorre una secuencia completa hacia adelante
//! grabando, justo antes de cada `next()`, el valor de cada campo bajo
//! prueba; después la recorre hacia atrás comparando el estado reaplicado
//! contra cada instantánea. Los campos se describen con closures de acceso
//! explícitas por caso de test (nada de reflexión).

use serde_json::Value;

use crate::sequencer::Sequencer;

/// Acceso nombrado a un campo del modelo bajo prueba.
pub struct FieldProbe<M> {
    pub name: &'static str,
    read: Box<dyn Fn(&M) -> Value>,
}

impl<M> FieldProbe<M> {
    pub fn new(name: &'static str, read: impl Fn(&M) -> Value + 'static) -> Self {
        Self { name,
               read: Box::new(read) }
    }

    pub fn read(&self, model: &M) -> Value {
        (self.read)(model)
    }
}

/// Recorre la secuencia hasta el agotamiento y de vuelta, verificando que
/// cada `back()` restaura exactamente el valor que cada campo tenía antes
/// del `next()` correspondiente.
pub fn verify_reapply_roundtrip<M>(seq: &mut Sequencer<M>, probes: &[FieldProbe<M>]) {
    verify_reapply_roundtrip_with(seq, probes, |_| {});
}

/// Variante con un hook de permanencia: `dwell` corre en cada paso antes de
/// tomar la instantánea y avanzar, lo que permite dejar pasar tiempo virtual
/// (y disparar sub-revelados diferidos) "mientras el usuario mira la
/// pantalla". La invariante debe sostenerse sin importar cuántos timers
/// dispararon.
pub fn verify_reapply_roundtrip_with<M>(seq: &mut Sequencer<M>,
                                        probes: &[FieldProbe<M>],
                                        mut dwell: impl FnMut(&mut Sequencer<M>)) {
    let mut snapshots: Vec<Vec<Value>> = Vec::new();
    loop {
        dwell(seq);
        let snapshot: Vec<Value> = {
            let model = seq.model().borrow();
            probes.iter().map(|p| p.read(&model)).collect()
        };
        snapshots.push(snapshot);
        if !seq.next() {
            break;
        }
    }

    for snapshot in snapshots.iter().rev().skip(1) {
        assert!(seq.back(),
                "sequence exhausted backward before every snapshot was replayed");
        let model = seq.model().borrow();
        for (probe, expected) in probes.iter().zip(snapshot) {
            let actual = probe.read(&model);
            assert_eq!(&actual, expected,
                       "field '{}' was not restored by back()", probe.name);
        }
    }
}
