use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::UnboundedSender;

use crate::model::ui::UiEvent;

/// Lado visual do widget (botão, indicador, 3 cards, input).
pub trait WidgetSurface: Send {
    fn apply(&mut self, event: UiEvent);
}

/// Encaminha eventos para o host (ex.: stdout em JSON lines).
pub struct ChannelSurface {
    tx: UnboundedSender<UiEvent>,
}

impl ChannelSurface {
    pub fn new(tx: UnboundedSender<UiEvent>) -> Self {
        Self { tx }
    }
}

impl WidgetSurface for ChannelSurface {
    fn apply(&mut self, event: UiEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("ui event dropped: host side closed");
        }
    }
}

/// Guarda os eventos em memória; clones compartilham o mesmo buffer.
#[derive(Clone, Default)]
pub struct MemorySurface {
    events: Arc<Mutex<Vec<UiEvent>>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<UiEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl WidgetSurface for MemorySurface {
    fn apply(&mut self, event: UiEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}
