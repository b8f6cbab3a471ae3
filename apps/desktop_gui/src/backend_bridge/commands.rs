//! Backend commands queued from UI to the projector-owning worker.

use shared::domain::{Category, ObjectId};

pub enum BackendCommand {
    SetFilter { category: Option<Category> },
    Reload,
    OpenDetail { id: ObjectId },
}
