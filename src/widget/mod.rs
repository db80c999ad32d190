//! Controlador do widget de fatos.
//!
//! Um único dono do estado (`busy`, fatos atuais, animação) processa uma
//! mensagem por vez: comandos do host, fim de ciclo e timers vencidos.

mod surface;

pub use surface::{ChannelSurface, MemorySurface, WidgetSurface};

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::config::WidgetConfig;
use crate::error::{FactError, WidgetError};
use crate::model::fact::{FactSet, FACTS_PER_CYCLE};
use crate::model::ui::{
    UiEvent, ALERT_COLOR, ERROR_TEXT, NORMAL_COLOR, PLACEHOLDER_MESSAGE, RETRY_HINT,
};
use crate::services::fact_source::FactSource;
use crate::services::scheduler::Scheduler;
use crate::services::translation::TranslationTable;
use crate::services::typewriter::Typewriter;

#[derive(Debug)]
pub enum WidgetCommand {
    Trigger(oneshot::Sender<bool>),
    Snapshot(oneshot::Sender<WidgetSnapshot>),
    Shutdown,
}

#[derive(Debug)]
enum Event {
    CycleFinished(Result<FactSet, FactError>),
    Timer(Timer),
}

#[derive(Debug)]
enum Timer {
    InitialFetch,
    TypewriterTick,
    RevealSlot { slot: usize, text: String },
    RestoreColors,
}

#[derive(Debug, Default)]
struct WidgetState {
    busy: bool,
    facts: Option<FactSet>,
    // espelho do placeholder do host; a digitação anexa a ele
    hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSnapshot {
    pub busy: bool,
    pub facts: Vec<String>,
}

#[derive(Clone)]
pub struct WidgetHandle {
    tx: mpsc::UnboundedSender<WidgetCommand>,
}

impl WidgetHandle {
    /// Pede um ciclo de busca. `Ok(false)` se já havia um em andamento.
    pub async fn trigger(&self) -> Result<bool, WidgetError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(WidgetCommand::Trigger(reply_tx))
            .map_err(|_| WidgetError::Stopped)?;
        reply_rx.await.map_err(|_| WidgetError::Stopped)
    }

    pub async fn snapshot(&self) -> Result<WidgetSnapshot, WidgetError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(WidgetCommand::Snapshot(reply_tx))
            .map_err(|_| WidgetError::Stopped)?;
        reply_rx.await.map_err(|_| WidgetError::Stopped)
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(WidgetCommand::Shutdown);
    }
}

pub struct FactWidget {
    config: WidgetConfig,
    table: TranslationTable,
    source: Arc<dyn FactSource>,
    surface: Box<dyn WidgetSurface>,
    state: WidgetState,
    typewriter: Typewriter,
    scheduler: Scheduler<Event>,
    commands: mpsc::UnboundedReceiver<WidgetCommand>,
    events_tx: mpsc::UnboundedSender<Event>,
    events: mpsc::UnboundedReceiver<Event>,
    cycle: Option<JoinHandle<()>>,
}

impl FactWidget {
    pub fn new(
        config: WidgetConfig,
        table: TranslationTable,
        source: Arc<dyn FactSource>,
        surface: Box<dyn WidgetSurface>,
    ) -> (Self, WidgetHandle) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let widget = Self {
            config,
            table,
            source,
            surface,
            state: WidgetState::default(),
            typewriter: Typewriter::new(PLACEHOLDER_MESSAGE),
            scheduler: Scheduler::new(events_tx.clone()),
            commands: cmd_rx,
            events_tx,
            events: events_rx,
            cycle: None,
        };

        (widget, WidgetHandle { tx: cmd_tx })
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Roda até `Shutdown` ou até todos os handles serem descartados.
    pub async fn run(mut self) {
        info!(url = %self.config.api_url, "fact widget started");

        self.animate_placeholder();
        self.scheduler.schedule(
            self.config.initial_fetch_delay(),
            Event::Timer(Timer::InitialFetch),
        );

        loop {
            tokio::select! {
                cmd = self.commands.recv() => match cmd {
                    Some(WidgetCommand::Trigger(reply)) => {
                        let started = self.trigger_fetch_cycle();
                        let _ = reply.send(started);
                    }
                    Some(WidgetCommand::Snapshot(reply)) => {
                        let _ = reply.send(self.snapshot());
                    }
                    Some(WidgetCommand::Shutdown) | None => break,
                },
                Some(event) = self.events.recv() => self.handle_event(event),
            }
        }

        self.teardown();
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::CycleFinished(outcome) => self.finish_cycle(outcome),
            Event::Timer(Timer::InitialFetch) => {
                self.trigger_fetch_cycle();
            }
            Event::Timer(Timer::TypewriterTick) => self.type_next_char(),
            Event::Timer(Timer::RevealSlot { slot, text }) => {
                self.surface.apply(UiEvent::SlotText { slot, text });
                self.surface.apply(UiEvent::slot_shown(slot));
            }
            Event::Timer(Timer::RestoreColors) => {
                for slot in 0..FACTS_PER_CYCLE {
                    self.surface.apply(UiEvent::SlotBackground {
                        slot,
                        color: NORMAL_COLOR.to_string(),
                    });
                }
            }
        }
    }

    fn trigger_fetch_cycle(&mut self) -> bool {
        if self.state.busy {
            debug!("fetch cycle already running, trigger ignored");
            return false;
        }

        self.state.busy = true;
        self.show_loading();

        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        self.cycle = Some(tokio::spawn(async move {
            let outcome = fetch_fact_set(source.as_ref()).await;
            let _ = tx.send(Event::CycleFinished(outcome));
        }));

        true
    }

    fn finish_cycle(&mut self, outcome: Result<FactSet, FactError>) {
        match outcome {
            Ok(facts) => {
                info!(count = FACTS_PER_CYCLE, "cat facts updated");
                self.hide_loading();
                self.render_slots(&facts);
                self.state.facts = Some(facts);
            }
            Err(e) => {
                error!(error = %e, "failed to fetch cat facts");
                self.hide_loading();
                self.show_error();
            }
        }

        self.cycle = None;
        self.state.busy = false;
    }

    fn render_slots(&mut self, facts: &FactSet) {
        for (slot, fact) in facts.iter().enumerate() {
            let text = self.table.transform(fact);

            self.surface.apply(UiEvent::slot_hidden(slot));
            self.scheduler.schedule(
                self.config.fade_delay(),
                Event::Timer(Timer::RevealSlot { slot, text }),
            );
        }
    }

    fn show_error(&mut self) {
        for slot in 0..FACTS_PER_CYCLE {
            self.surface.apply(UiEvent::SlotText {
                slot,
                text: ERROR_TEXT.to_string(),
            });
            self.surface.apply(UiEvent::SlotBackground {
                slot,
                color: ALERT_COLOR.to_string(),
            });
        }

        self.set_hint(RETRY_HINT.to_string());

        self.scheduler.schedule(
            self.config.error_restore_delay(),
            Event::Timer(Timer::RestoreColors),
        );
    }

    fn show_loading(&mut self) {
        self.surface
            .apply(UiEvent::LoadingIndicator { visible: true });
        self.surface.apply(UiEvent::trigger_busy());
    }

    fn hide_loading(&mut self) {
        self.surface
            .apply(UiEvent::LoadingIndicator { visible: false });
        self.surface.apply(UiEvent::trigger_ready());
    }

    fn animate_placeholder(&mut self) {
        self.set_hint(String::new());
        self.scheduler.schedule(
            self.config.typewriter_start_delay(),
            Event::Timer(Timer::TypewriterTick),
        );
    }

    fn type_next_char(&mut self) {
        if let Some(ch) = self.typewriter.tick() {
            let mut text = std::mem::take(&mut self.state.hint);
            text.push(ch);
            self.set_hint(text);
        }

        if !self.typewriter.is_done() {
            self.scheduler.schedule(
                self.config.typewriter_interval(),
                Event::Timer(Timer::TypewriterTick),
            );
        }
    }

    fn set_hint(&mut self, text: String) {
        self.state.hint.clone_from(&text);
        self.surface.apply(UiEvent::Hint { text });
    }

    fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            busy: self.state.busy,
            facts: self
                .state
                .facts
                .as_ref()
                .map(|f| f.as_slice().to_vec())
                .unwrap_or_default(),
        }
    }

    fn teardown(&mut self) {
        self.scheduler.cancel_all();
        if let Some(cycle) = self.cycle.take() {
            cycle.abort();
        }
        info!("fact widget stopped");
    }
}

/// Busca os 3 fatos em paralelo. Espera todos terminarem; qualquer falha
/// invalida o ciclo inteiro.
pub async fn fetch_fact_set(source: &dyn FactSource) -> Result<FactSet, FactError> {
    let results = join_all((0..FACTS_PER_CYCLE).map(|_| source.fetch_one_fact())).await;

    let facts = results.into_iter().collect::<Result<Vec<_>, _>>()?;

    FactSet::try_from(facts).map_err(|got| {
        FactError::Parse(format!(
            "expected {FACTS_PER_CYCLE} facts, got {}",
            got.len()
        ))
    })
}
