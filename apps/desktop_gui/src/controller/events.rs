//! Backend-to-UI state events for the desktop GUI.

use client_core::{DetailViewState, ListViewState};
use shared::domain::Category;

pub enum UiEvent {
    ListState(ListViewState),
    FilterChanged(Option<Category>),
    DetailState(DetailViewState),
    BackendFailed(String),
}
