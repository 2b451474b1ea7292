//! Bucle de conducción asíncrono.
//!
//! Toda mutación del modelo debe quedar serializada en un único contexto
//! lógico (el equivalente al hilo de UI). Este módulo expresa ese contrato
//! con tokio: una sola task `select!`-ea entre los comandos del usuario y el
//! deadline de timer más próximo, y dispara ambos sobre el mismo sequencer.
//! El sequencer usa `Rc` internamente y es deliberadamente `!Send`: el bucle
//! corre en un runtime current-thread (o dentro de un `LocalSet`), que es el
//! contexto serializado.
//!
//! La cancelación de timers ocurre dentro de `next()`/`back()`, en esta
//! misma task, por lo que es síncrona respecto a los disparos: un despertar
//! posterior a una cancelación encuentra la cola vacía y no hace nada.

use tokio::sync::mpsc::UnboundedReceiver;

use super::core::Sequencer;

/// Entrada de usuario aceptada por el bucle de conducción.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerCommand {
    Next,
    Back,
}

fn apply_command<M>(seq: &mut Sequencer<M>, command: SequencerCommand) {
    match command {
        SequencerCommand::Next => {
            seq.next();
        }
        SequencerCommand::Back => {
            seq.back();
        }
    }
}

/// Conduce el sequencer hasta que el canal de comandos se cierra. Los
/// deadlines pendientes se duermen con el reloj de tokio y se drenan con
/// `fire_due` al vencer.
pub async fn drive<M>(seq: &mut Sequencer<M>, commands: &mut UnboundedReceiver<SequencerCommand>) {
    loop {
        match seq.next_deadline() {
            Some(deadline) => {
                let sleep = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline));
                tokio::select! {
                    command = commands.recv() => match command {
                        Some(command) => apply_command(seq, command),
                        None => break,
                    },
                    _ = sleep => {
                        let now = seq.clock_now();
                        seq.fire_due(now);
                    }
                }
            }
            None => match commands.recv().await {
                Some(command) => apply_command(seq, command),
                None => break,
            },
        }
    }
}
