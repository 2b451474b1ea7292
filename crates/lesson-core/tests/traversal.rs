//! Recorrido condicional: next_until / next_while / fast-forward por etiqueta.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use lesson_core::{ManualClock, Sequencer, StepDefinition, StepNode};

#[derive(Default, Debug)]
struct Screen {
    stage: u32,
}

/// Paso que fija `stage` y recuerda el valor previo para poder revertirlo.
struct Stage {
    value: u32,
    tag: &'static str,
    prev: Option<u32>,
}

impl Stage {
    fn new(value: u32, tag: &'static str) -> Self {
        Self { value, tag, prev: None }
    }
}

impl StepDefinition<Screen> for Stage {
    fn apply(&mut self, model: &mut Screen) {
        if self.prev.is_none() {
            self.prev = Some(model.stage);
        }
        model.stage = self.value;
    }

    fn unapply(&mut self, model: &mut Screen) {
        model.stage = self.prev.expect("unapply before apply");
    }

    fn label(&self) -> Option<&'static str> {
        Some(self.tag)
    }
}

fn staged_sequencer() -> Sequencer<Screen> {
    let model = Rc::new(RefCell::new(Screen::default()));
    let clock = Rc::new(ManualClock::new());
    Sequencer::builder(model, clock).first_step(Stage::new(1, "intro"))
                                    .add_step(Stage::new(2, "concept"))
                                    .add_step(Stage::new(3, "practice"))
                                    .add_step(Stage::new(4, "quiz"))
                                    .build()
}

#[test]
fn next_until_stops_exactly_where_the_predicate_holds() {
    let mut seq = staged_sequencer();
    assert!(seq.next_until(|m| m.stage == 3));
    assert_eq!(seq.current_index(), 2);
    assert_eq!(seq.model().borrow().stage, 3);
}

#[test]
fn next_until_does_not_move_when_already_satisfied() {
    let mut seq = staged_sequencer();
    assert!(seq.next_until(|m| m.stage == 1));
    assert_eq!(seq.current_index(), 0);
}

#[test]
fn next_until_halts_on_forward_exhaustion() {
    let mut seq = staged_sequencer();
    let hits = Rc::new(Cell::new(0u32));
    let hits_cb = Rc::clone(&hits);
    seq.set_on_exhausted_forward(move || hits_cb.set(hits_cb.get() + 1));

    assert!(!seq.next_until(|m| m.stage == 99));
    // El agotamiento corta el bucle de inmediato: el callback dispara una vez
    // y el índice queda en el último paso.
    assert_eq!(hits.get(), 1);
    assert_eq!(seq.current_index(), 3);
    assert_eq!(seq.model().borrow().stage, 4);
}

#[test]
fn next_while_advances_while_the_predicate_holds() {
    let mut seq = staged_sequencer();
    assert!(seq.next_while(|m| m.stage < 3));
    assert_eq!(seq.model().borrow().stage, 3);
    assert_eq!(seq.current_index(), 2);
}

#[test]
fn next_while_halts_on_forward_exhaustion() {
    let mut seq = staged_sequencer();
    assert!(!seq.next_while(|m| m.stage < 99));
    assert_eq!(seq.current_index(), 3);
}

#[test]
fn next_until_label_fast_forwards_to_the_marker() {
    let mut seq = staged_sequencer();
    assert!(seq.next_until_label("practice"));
    assert_eq!(seq.current_index(), 2);
    assert_eq!(seq.current_label(), Some("practice"));

    // Etiqueta inexistente: recorre hasta el final y devuelve false.
    assert!(!seq.next_until_label("missing"));
    assert_eq!(seq.current_index(), 3);
}

#[test]
fn labels_and_definition_hash_expose_the_sequence_identity() {
    let seq = staged_sequencer();
    assert_eq!(seq.labels(),
               vec![Some("intro"), Some("concept"), Some("practice"), Some("quiz")]);
    assert_eq!(seq.len(), 4);
    assert_eq!(seq.definition_hash(), staged_sequencer().definition_hash());
}

#[test]
fn current_step_exposes_the_active_node() {
    let mut seq = staged_sequencer();
    seq.next();
    match seq.current_step() {
        StepNode::Leaf(step) => assert_eq!(step.label(), Some("concept")),
        StepNode::Sub(_) => panic!("expected a leaf step"),
    }
}
