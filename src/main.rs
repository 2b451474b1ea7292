//! Demo de consola del simulador: recorre una unidad completa hacia
//! adelante y de vuelta, y muestra la reanudación en frío contra el almacén
//! en memoria. Uso: `main-core [unit-key]` (por defecto `reaction_rates`).

use std::cell::RefCell;
use std::rc::Rc;

use lesson_core::{Clock, Sequencer, SystemClock};
use lesson_domain::{LessonModel, UnitKind};
use lesson_persistence::{resume_sequencer, save_progress, AnalyticsEvent, AnalyticsSink,
                         InMemoryProgressStore, MemorySink};
use lesson_policies::{AdmissionPolicy, VisitedOnlyGate};
use lessonflow_rust::config::CONFIG;
use lessonflow_rust::units;
use uuid::Uuid;

fn print_screen(seq: &Sequencer<LessonModel>) {
    let model = seq.model().borrow();
    let label = seq.current_label().unwrap_or("(sub-flow)");
    println!("[{:>2}] {:<16} {}", seq.current_index(), label,
             model.statement.as_deref().unwrap_or("—"));
    if !model.highlighted_terms.is_empty() {
        println!("     resaltados: {:?}", model.highlighted_terms);
    }
    if let Some(eq) = &model.equation {
        if model.reveal_stage > 0 {
            println!("     ecuación (etapa {}): {}", model.reveal_stage, eq.display());
        }
    }
}

fn build(kind: UnitKind) -> Sequencer<LessonModel> {
    let model = Rc::new(RefCell::new(LessonModel::new()));
    let clock = Rc::new(SystemClock) as Rc<dyn Clock>;
    units::build_unit(kind, model, clock)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                             .init();

    // 1. Resolver la unidad pedida.
    let args: Vec<String> = std::env::args().collect();
    let key = args.get(1).map(String::as_str).unwrap_or("reaction_rates");
    let kind = match units::parse_unit(key) {
        Some(kind) => kind,
        None => {
            eprintln!("Uso: main-core [reaction_rates|equilibrium|acids_bases|chemical_reactions]");
            std::process::exit(2);
        }
    };

    let sink = MemorySink::new();
    let session = Uuid::new_v4();
    if CONFIG.analytics_enabled {
        sink.record(AnalyticsEvent::new(session, "lesson_started",
                                        serde_json::json!({ "unit": kind.key() })));
    }

    // 2. Recorrido completo hacia adelante.
    println!("== {} ==", kind.key());
    let mut seq = build(kind);
    print_screen(&seq);
    while seq.next() {
        print_screen(&seq);
    }

    // 3. La compuerta de salto sólo admite pantallas ya visitadas.
    let gate = VisitedOnlyGate::new();
    println!("¿saltar a la pantalla 3? {}", gate.can_enter(3, seq.current_index()));
    println!("¿saltar a la pantalla {}? {}", seq.len(),
             gate.can_enter(seq.len(), seq.current_index()));

    // 4. Guardar progreso en la última pantalla y reanudar en frío.
    let store = InMemoryProgressStore::new();
    if let Err(err) = save_progress(&store, kind.key(), &seq).await {
        eprintln!("[persist] no se pudo guardar el progreso: {err}");
        std::process::exit(5);
    }

    let mut resumed = build(kind);
    match resume_sequencer(&mut resumed, &store, kind.key()).await {
        Ok(outcome) => println!("reanudación: {outcome:?}"),
        Err(err) => {
            eprintln!("[persist] reanudación fallida: {err}");
            std::process::exit(5);
        }
    }

    // 5. Camino de vuelta: la invariante de reaplicación en acción.
    while seq.back() {}
    print_screen(&seq);

    if CONFIG.analytics_enabled {
        sink.record(AnalyticsEvent::new(session, "lesson_walked",
                                        serde_json::json!({ "screens": seq.len() })));
        println!("analítica: {} eventos registrados", sink.len());
    }
}
