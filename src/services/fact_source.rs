use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{FactError, WidgetError};
use crate::model::fact::{Fact, FactResponse};

/// Origem de um fato isolado. Uma chamada = uma requisição.
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch_one_fact(&self) -> Result<Fact, FactError>;
}

pub struct HttpFactSource {
    client: Client,
    url: String,
}

impl HttpFactSource {
    pub fn new(url: impl Into<String>) -> Result<Self, WidgetError> {
        // Sem timeout explícito: vale o padrão do cliente.
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl FactSource for HttpFactSource {
    async fn fetch_one_fact(&self) -> Result<Fact, FactError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FactError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FactError::Network(format!("HTTP error! status: {}", status.as_u16())));
        }

        // Lê como texto primeiro para distinguir falha de rede de JSON inválido
        let text = resp
            .text()
            .await
            .map_err(|e| FactError::Network(e.to_string()))?;

        let body: FactResponse =
            serde_json::from_str(&text).map_err(|e| FactError::Parse(e.to_string()))?;

        let fact = body
            .into_first()
            .ok_or_else(|| FactError::Parse("missing data[0]".into()))?;

        debug!(len = fact.len(), "fact received");
        Ok(fact)
    }
}
