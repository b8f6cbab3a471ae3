//! Bridge between the UI command queue and the projector-owning backend.
//!
//! A dedicated thread runs a tokio runtime that owns the catalog access
//! layer and both projectors. Projector watch channels are forwarded to the
//! UI as [`UiEvent`]s; commands from the UI are spawned as tasks so rapid
//! intents overlap exactly as they would from any other shell.

use std::{sync::Arc, thread};

use catalog::Catalog;
use client_core::{
    CatalogAccess, DetailProjector, InMemoryCatalogAccess, LatencyProfile, ListProjector,
};
use crossbeam_channel::{Receiver, Sender};
use tokio_stream::StreamExt;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, latency: LatencyProfile) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "failed to build backend runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let access: Arc<dyn CatalogAccess> = Arc::new(InMemoryCatalogAccess::new(
                Arc::new(Catalog::seeded()),
                latency,
            ));
            // Eager first load: the list enters Loading and fetches
            // immediately, before any UI intent arrives.
            let list = ListProjector::spawn(Arc::clone(&access));
            let detail = Arc::new(DetailProjector::new(access));

            {
                let ui_tx = ui_tx.clone();
                let mut states = list.state_stream();
                tokio::spawn(async move {
                    while let Some(state) = states.next().await {
                        if ui_tx.send(UiEvent::ListState(state)).is_err() {
                            return;
                        }
                    }
                });
            }
            {
                let ui_tx = ui_tx.clone();
                let mut filters = list.filter_stream();
                tokio::spawn(async move {
                    while let Some(filter) = filters.next().await {
                        if ui_tx.send(UiEvent::FilterChanged(filter)).is_err() {
                            return;
                        }
                    }
                });
            }
            {
                let ui_tx = ui_tx.clone();
                let mut states = detail.state_stream();
                tokio::spawn(async move {
                    while let Some(state) = states.next().await {
                        if ui_tx.send(UiEvent::DetailState(state)).is_err() {
                            return;
                        }
                    }
                });
            }

            // Ends when the UI drops its command sender; dropping the
            // runtime then abandons any in-flight loads.
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SetFilter { category } => {
                        let list = Arc::clone(&list);
                        tokio::spawn(async move { list.set_filter(category).await });
                    }
                    BackendCommand::Reload => {
                        let list = Arc::clone(&list);
                        tokio::spawn(async move { list.reload().await });
                    }
                    BackendCommand::OpenDetail { id } => {
                        let detail = Arc::clone(&detail);
                        tokio::spawn(async move { detail.load(id).await });
                    }
                }
            }
        });
    });
}
