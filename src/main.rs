use std::sync::Arc;

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info};

use curious_cats_core::model::ui::UiEvent;
use curious_cats_core::protocol::{self, Command};
use curious_cats_core::widget::ChannelSurface;
use curious_cats_core::{FactWidget, HttpFactSource, TranslationTable, WidgetConfig, WidgetError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = curious_cats_core::init_tracing();

    if let Err(e) = run().await {
        error!(error = %e, "curious-cats-core failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), WidgetError> {
    let config = WidgetConfig::from_env()?;
    let table = TranslationTable::portuguese()?;
    let source = Arc::new(HttpFactSource::new(config.api_url.clone())?);

    // Respostas e eventos dividem o stdout; um único escritor evita linhas intercaladas.
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<String>();
    let (ui_tx, mut ui_rx) = mpsc::unbounded_channel::<UiEvent>();

    let writer = tokio::spawn(async move {
        let mut stdout = io::stdout();
        while let Some(line) = out_rx.recv().await {
            if stdout.write_all(line.as_bytes()).await.is_err()
                || stdout.write_all(b"\n").await.is_err()
            {
                break;
            }
            let _ = stdout.flush().await;
        }
    });

    let events_out = out_tx.clone();
    let forwarder = tokio::spawn(async move {
        while let Some(event) = ui_rx.recv().await {
            if events_out.send(protocol::event_line(&event)).is_err() {
                break;
            }
        }
    });

    let (widget, handle) = FactWidget::new(
        config,
        table,
        source,
        Box::new(ChannelSurface::new(ui_tx)),
    );
    let widget_task = widget.spawn();

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(l)) => l,
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "failed to read from stdin");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let (cmd, response) = protocol::handle(&line, &handle).await;
        if out_tx.send(response).is_err() || cmd == Command::Shutdown {
            break;
        }
    }

    // EOF ou shutdown: encerra timers pendentes e drena a saída
    handle.shutdown();
    drop(handle);
    let _ = widget_task.await;
    let _ = forwarder.await;
    drop(out_tx);
    let _ = writer.await;

    info!("curious-cats-core exiting");
    Ok(())
}
