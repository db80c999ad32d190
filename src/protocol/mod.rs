use serde_json::{json, Value};

use crate::model::ui::UiEvent;
use crate::widget::WidgetHandle;

mod command;
pub use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

/// Linha de saída para um evento de UI (separada das respostas).
pub fn event_line(event: &UiEvent) -> String {
    json!({ "event": event }).to_string()
}

/// Processa uma linha do host. Devolve o comando reconhecido e a resposta.
pub async fn handle(input: &str, widget: &WidgetHandle) -> (Command, String) {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return (
                Command::Unknown,
                json!({
                    "status": "error",
                    "message": "invalid json"
                })
                .to_string(),
            );
        }
    };

    let id = get_id(&req);
    let cmd = Command::from(get_cmd(&req));

    let response = match cmd {
        Command::Ping => ok(id, json!({ "message": "curious-cats-core alive" })),

        Command::Trigger => match widget.trigger().await {
            Ok(started) => ok(id, json!({ "started": started })),
            Err(e) => err(id, e.to_string()),
        },

        Command::State => match widget.snapshot().await {
            Ok(snap) => ok(id, serde_json::to_value(snap).unwrap_or(json!({}))),
            Err(e) => err(id, e.to_string()),
        },

        Command::Shutdown => {
            widget.shutdown();
            ok(id, json!({ "message": "bye" }))
        }

        Command::Unknown => err(id, "unknown command"),
    };

    (cmd, response)
}
