use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Callbacks com atraso: cada um vira uma mensagem entregue ao controlador.
pub struct Scheduler<T> {
    tx: UnboundedSender<T>,
    pending: Vec<JoinHandle<()>>,
}

impl<T: Send + 'static> Scheduler<T> {
    pub fn new(tx: UnboundedSender<T>) -> Self {
        Self {
            tx,
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, delay: Duration, msg: T) {
        self.pending.retain(|h| !h.is_finished());

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Controlador já encerrado: nada a fazer
            let _ = tx.send(msg);
        });

        self.pending.push(handle);
    }

    pub fn cancel_all(&mut self) {
        for h in self.pending.drain(..) {
            h.abort();
        }
    }
}

impl<T> Drop for Scheduler<T> {
    fn drop(&mut self) {
        for h in &self.pending {
            h.abort();
        }
    }
}
