use thiserror::Error;

/// Falha ao buscar um único fato.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactError {
    /// Requisição não completou ou o status não foi 2xx.
    #[error("network error: {0}")]
    Network(String),

    /// Corpo fora do formato `{ "data": [string, ...] }` ou `data` vazio.
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid translation table: {0}")]
    Translation(#[from] regex::Error),

    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("widget controller stopped")]
    Stopped,
}
