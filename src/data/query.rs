use std::future::Future;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use chrono::{DateTime, Local};
use tokio::runtime::Handle;

use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    /// The background task went away without answering.
    Failed,
}

/// Called from the worker once a result is ready (the GUI uses it to request a repaint).
pub type Notify = Arc<dyn Fn() + Send + Sync>;

/// Tracks one background fetch and keeps the last good result around.
///
/// Each `start` opens a fresh channel and drops the old receiver, so an older
/// request that resolves late has nowhere to deliver and cannot clobber newer data.
pub struct Query<T> {
    label: &'static str,
    rx: Option<Receiver<T>>,
    data: Option<T>,
    status: FetchStatus,
    fetched_at: Option<DateTime<Local>>,
}

impl<T: Send + 'static> Query<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            rx: None,
            data: None,
            status: FetchStatus::Idle,
            fetched_at: None,
        }
    }

    pub fn start<F>(&mut self, runtime: &Handle, fetch: F, notify: Notify)
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        if self.rx.replace(rx).is_some() && DF.log_queries {
            log::info!("[{}] superseding in-flight request", self.label);
        }
        self.status = FetchStatus::Loading;

        runtime.spawn(async move {
            let result = fetch.await;
            // Receiver gone means a newer request took over.
            if tx.send(result).is_ok() {
                notify();
            }
        });
    }

    /// Pull in a finished result, if any. Returns true when new data arrived this call.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.rx else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.data = Some(result);
                self.status = FetchStatus::Success;
                self.fetched_at = Some(Local::now());
                self.rx = None;
                if DF.log_queries {
                    log::info!("[{}] resolved", self.label);
                }
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                log::error!("[{}] fetch task ended without a result", self.label);
                self.status = FetchStatus::Failed;
                self.rx = None;
                false
            }
        }
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// First load only: a refetch keeps showing the previous data.
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading && self.data.is_none()
    }

    pub fn is_fetching(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn fetched_at(&self) -> Option<DateTime<Local>> {
        self.fetched_at
    }
}
