use serde::Serialize;

pub const ERROR_TEXT: &str =
    "Ops! Não foi possível carregar os fatos sobre gatos. Tente novamente em alguns instantes.";
pub const RETRY_HINT: &str = "Erro ao carregar. Clique para tentar novamente...";
pub const PLACEHOLDER_MESSAGE: &str = "Clique para descobrir um fato sobre gatos...";

pub const ALERT_COLOR: &str = "#e74c3c";
pub const NORMAL_COLOR: &str = "#f39c12";

pub const FADE_OFFSET_PX: i32 = 20;
pub const DIMMED_OPACITY: f32 = 0.6;

/// Toda mutação visual que o host precisa aplicar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    LoadingIndicator {
        visible: bool,
    },
    TriggerControl {
        enabled: bool,
        opacity: f32,
        cursor: Cursor,
    },
    SlotTransition {
        slot: usize,
        opacity: f32,
        offset_y_px: i32,
        fade_in: bool,
    },
    SlotText {
        slot: usize,
        text: String,
    },
    SlotBackground {
        slot: usize,
        color: String,
    },
    Hint {
        text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    Pointer,
    NotAllowed,
}

impl UiEvent {
    pub fn trigger_busy() -> Self {
        UiEvent::TriggerControl {
            enabled: false,
            opacity: DIMMED_OPACITY,
            cursor: Cursor::NotAllowed,
        }
    }

    pub fn trigger_ready() -> Self {
        UiEvent::TriggerControl {
            enabled: true,
            opacity: 1.0,
            cursor: Cursor::Pointer,
        }
    }

    pub fn slot_hidden(slot: usize) -> Self {
        UiEvent::SlotTransition {
            slot,
            opacity: 0.0,
            offset_y_px: FADE_OFFSET_PX,
            fade_in: false,
        }
    }

    pub fn slot_shown(slot: usize) -> Self {
        UiEvent::SlotTransition {
            slot,
            opacity: 1.0,
            offset_y_px: 0,
            fade_in: true,
        }
    }
}
