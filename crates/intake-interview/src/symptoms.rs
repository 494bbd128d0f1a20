//! Background symptom extraction.
//!
//! Every patient message is handed to a per-session worker task over a
//! bounded channel. The worker extracts symptoms and merges them into the
//! symptom store. Submitting never waits on extraction, and nothing a
//! worker does can fail an interview step.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use intake_classify::SymptomExtractor;
use intake_storage::SymptomStore;

struct Worker {
    sender: mpsc::Sender<String>,
    handle: JoinHandle<()>,
}

pub struct SymptomWorkers {
    extractor: SymptomExtractor,
    store: Arc<dyn SymptomStore>,
    capacity: usize,
    workers: Mutex<HashMap<String, Worker>>,
}

impl SymptomWorkers {
    /// `capacity` bounds the queued messages per session; further messages
    /// are dropped until the worker catches up.
    pub fn new(extractor: SymptomExtractor, store: Arc<dyn SymptomStore>, capacity: usize) -> Self {
        Self {
            extractor,
            store,
            capacity: capacity.max(1),
            workers: Mutex::new(HashMap::new()),
        }
    }

    /// Queue `message` for extraction. Must be called within a tokio runtime.
    pub async fn submit(&self, session_id: &str, message: &str) {
        let mut workers = self.workers.lock().await;

        let message = match workers.get(session_id) {
            Some(worker) => match worker.sender.try_send(message.to_string()) {
                Ok(()) => return,
                Err(TrySendError::Full(_)) => {
                    warn!(session_id, "symptom queue full, dropping message");
                    return;
                }
                Err(TrySendError::Closed(message)) => message,
            },
            None => message.to_string(),
        };

        let worker = self.spawn(session_id);
        if worker.sender.try_send(message).is_err() {
            warn!(session_id, "symptom worker rejected message");
        }
        workers.insert(session_id.to_string(), worker);
    }

    /// Stop the session's worker after it drains its queue.
    pub async fn retire(&self, session_id: &str) {
        let worker = self.workers.lock().await.remove(session_id);
        if let Some(Worker { sender, handle }) = worker {
            drop(sender);
            if let Err(e) = handle.await {
                warn!(session_id, error = %e, "symptom worker ended abnormally");
            }
        }
    }

    fn spawn(&self, session_id: &str) -> Worker {
        let (sender, mut receiver) = mpsc::channel::<String>(self.capacity);
        let extractor = self.extractor.clone();
        let store = Arc::clone(&self.store);
        let session_id = session_id.to_string();

        let handle = tokio::spawn(async move {
            while let Some(message) = receiver.recv().await {
                let symptoms = extractor.extract(&message).await;
                if symptoms.is_empty() {
                    continue;
                }
                let count = symptoms.len();
                match store.upsert_all(&session_id, symptoms).await {
                    Ok(()) => debug!(session_id = %session_id, count, "symptoms recorded"),
                    Err(e) => {
                        warn!(session_id = %session_id, error = %e, "failed to record symptoms")
                    }
                }
            }
            debug!(session_id = %session_id, "symptom worker stopped");
        });

        Worker { sender, handle }
    }
}
