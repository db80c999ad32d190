//! Núcleo do widget "Curious Cats": busca 3 fatos sobre gatos, aplica a
//! tradução por dicionário e dirige os cards do host via eventos de UI.

pub mod config;
pub mod error;
pub mod model;
pub mod protocol;
pub mod services;
pub mod widget;

pub use config::WidgetConfig;
pub use error::{FactError, WidgetError};
pub use model::fact::{Fact, FactSet};
pub use model::ui::UiEvent;
pub use services::fact_source::{FactSource, HttpFactSource};
pub use services::translation::TranslationTable;
pub use widget::{FactWidget, WidgetHandle, WidgetSurface};

use tracing_subscriber::EnvFilter;

/// Logs vão para stderr: stdout é do protocolo.
///
/// `LOG_FORMAT=json` troca para saída JSON; o filtro vem de `RUST_LOG`
/// (padrão `info`).
pub fn init_tracing() -> Result<(), WidgetError> {
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .with_current_span(true)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init(),
    };

    result.map_err(|e| WidgetError::Config(format!("tracing init failed: {e}")))
}
