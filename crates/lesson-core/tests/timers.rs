//! Ciclo de vida de timers: sub-revelados diferidos y auto-avance con reloj
//! virtual. Ninguno de estos tests duerme: el tiempo sólo se mueve con
//! `ManualClock::advance` y los vencimientos se drenan con `fire_due`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use lesson_core::{Clock, DelayedSubStep, ManualClock, Sequencer, StepDefinition};

#[derive(Default, Debug)]
struct Screen {
    statement: Option<&'static str>,
    highlights: Vec<&'static str>,
}

struct Idle;

impl StepDefinition<Screen> for Idle {
    fn apply(&mut self, _model: &mut Screen) {}
    fn unapply(&mut self, _model: &mut Screen) {}
}

/// Muestra un enunciado y resalta dos términos de la ecuación en diferido
/// (0.5s y 1.5s después de la activación).
struct StagedReveal;

impl StepDefinition<Screen> for StagedReveal {
    fn apply(&mut self, model: &mut Screen) {
        model.statement = Some("rate depends on concentration");
    }

    fn unapply(&mut self, model: &mut Screen) {
        model.statement = None;
        model.highlights.clear();
    }

    fn delayed_substeps(&self, _model: &Screen) -> Vec<DelayedSubStep<Screen>> {
        vec![DelayedSubStep::after(Duration::from_millis(500), |m: &mut Screen| {
                 if !m.highlights.contains(&"k") {
                     m.highlights.push("k");
                 }
             }),
             DelayedSubStep::after(Duration::from_millis(1500), |m: &mut Screen| {
                 if !m.highlights.contains(&"[A]") {
                     m.highlights.push("[A]");
                 }
             })]
    }
}

/// Paso que avanza solo tras dos segundos.
struct AutoPlay;

impl StepDefinition<Screen> for AutoPlay {
    fn apply(&mut self, model: &mut Screen) {
        model.statement = Some("watch the reaction");
    }

    fn unapply(&mut self, model: &mut Screen) {
        model.statement = None;
    }

    fn auto_advance_delay(&self, _model: &Screen) -> Option<Duration> {
        Some(Duration::from_secs(2))
    }
}

fn reveal_sequencer() -> (Sequencer<Screen>, Rc<ManualClock>) {
    let model = Rc::new(RefCell::new(Screen::default()));
    let clock = Rc::new(ManualClock::new());
    let seq = Sequencer::builder(model, Rc::clone(&clock) as Rc<dyn lesson_core::Clock>)
        .first_step(Idle)
        .add_step(StagedReveal)
        .add_step(Idle)
        .build();
    (seq, clock)
}

#[test]
fn delayed_substeps_fire_in_order_at_their_delays() {
    let (mut seq, clock) = reveal_sequencer();
    seq.next();

    // Nada vencido todavía.
    assert_eq!(seq.fire_due(clock.now()), 0);
    assert!(seq.model().borrow().highlights.is_empty());

    clock.advance(Duration::from_millis(500));
    assert_eq!(seq.fire_due(clock.now()), 1);
    assert_eq!(seq.model().borrow().highlights, vec!["k"]);

    clock.advance(Duration::from_millis(1000));
    assert_eq!(seq.fire_due(clock.now()), 1);
    assert_eq!(seq.model().borrow().highlights, vec!["k", "[A]"]);

    // Drenado completo: no queda deadline vivo.
    assert!(seq.next_deadline().is_none());
}

#[test]
fn both_substeps_fire_together_when_the_clock_jumps_past_them() {
    let (mut seq, clock) = reveal_sequencer();
    seq.next();

    clock.advance(Duration::from_secs(10));
    assert_eq!(seq.fire_due(clock.now()), 2);
    // El orden de disparo respeta los retardos declarados.
    assert_eq!(seq.model().borrow().highlights, vec!["k", "[A]"]);
}

#[test]
fn exiting_the_step_before_the_first_delay_silences_every_substep() {
    let (mut seq, clock) = reveal_sequencer();
    seq.next();
    clock.advance(Duration::from_millis(100));

    // Salida hacia adelante antes de que venza d1.
    seq.next();
    assert!(seq.next_deadline().is_none());

    // Aunque el reloj pase de largo d2, nada dispara jamás.
    clock.advance(Duration::from_secs(30));
    assert_eq!(seq.fire_due(clock.now()), 0);
    assert!(seq.model().borrow().highlights.is_empty());
}

#[test]
fn going_back_also_cancels_pending_substeps() {
    let (mut seq, clock) = reveal_sequencer();
    seq.next();
    clock.advance(Duration::from_millis(100));

    seq.back();
    clock.advance(Duration::from_secs(30));
    assert_eq!(seq.fire_due(clock.now()), 0);
    assert!(seq.model().borrow().highlights.is_empty());
    assert_eq!(seq.current_index(), 0);
}

#[test]
fn auto_advance_fires_exactly_once() {
    let model = Rc::new(RefCell::new(Screen::default()));
    let clock = Rc::new(ManualClock::new());
    let mut seq = Sequencer::builder(model, Rc::clone(&clock) as Rc<dyn lesson_core::Clock>)
        .first_step(Idle)
        .add_step(AutoPlay)
        .add_step(Idle)
        .build();

    seq.next();
    assert_eq!(seq.current_index(), 1);

    clock.advance(Duration::from_secs(2));
    assert_eq!(seq.fire_due(clock.now()), 1);
    assert_eq!(seq.current_index(), 2);

    // El timer es one-shot: más tiempo no produce más avances.
    clock.advance(Duration::from_secs(60));
    assert_eq!(seq.fire_due(clock.now()), 0);
    assert_eq!(seq.current_index(), 2);
}

#[test]
fn back_before_the_auto_advance_deadline_cancels_it() {
    let model = Rc::new(RefCell::new(Screen::default()));
    let clock = Rc::new(ManualClock::new());
    let mut seq = Sequencer::builder(model, Rc::clone(&clock) as Rc<dyn lesson_core::Clock>)
        .first_step(Idle)
        .add_step(AutoPlay)
        .add_step(Idle)
        .build();

    seq.next();
    clock.advance(Duration::from_millis(1999));
    seq.back();

    clock.advance(Duration::from_secs(60));
    assert_eq!(seq.fire_due(clock.now()), 0);
    assert_eq!(seq.current_index(), 0);
}

#[test]
fn auto_advance_on_the_last_step_reports_forward_exhaustion() {
    let model = Rc::new(RefCell::new(Screen::default()));
    let clock = Rc::new(ManualClock::new());
    let hits = Rc::new(Cell::new(0u32));
    let hits_cb = Rc::clone(&hits);
    let mut seq = Sequencer::builder(model, Rc::clone(&clock) as Rc<dyn lesson_core::Clock>)
        .first_step(Idle)
        .add_step(AutoPlay)
        .on_exhausted_forward(move || hits_cb.set(hits_cb.get() + 1))
        .build();

    seq.next();
    clock.advance(Duration::from_secs(2));
    assert_eq!(seq.fire_due(clock.now()), 1);
    assert_eq!(hits.get(), 1);
    assert_eq!(seq.current_index(), 1);
}

#[test]
fn a_stale_wakeup_after_cancellation_is_a_noop() {
    let (mut seq, clock) = reveal_sequencer();
    seq.next();
    let deadline = seq.next_deadline().expect("substeps scheduled");

    // El driver pudo haber capturado el deadline antes de la cancelación; su
    // despertar posterior no debe encontrar nada que disparar.
    seq.back();
    clock.advance(Duration::from_secs(5));
    assert!(deadline <= clock.now());
    assert_eq!(seq.fire_due(clock.now()), 0);
    assert!(seq.next_deadline().is_none());
}
