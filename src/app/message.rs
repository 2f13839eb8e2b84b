// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::designer::{self, ImageTarget};
use crate::ui::events;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::tickets;
use std::path::PathBuf;
use std::time::Instant;

/// Startup options parsed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    pub data_dir: Option<String>,
    pub config_dir: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Designer(designer::Message),
    Events(events::Message),
    Tickets(tickets::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Result from an image pick dialog.
    ImageDialogResult(ImageTarget, Option<PathBuf>),
    /// Result from the export save dialog.
    ExportDialogResult(Option<PathBuf>),
    /// Outcome of a finished export job.
    ExportCompleted(Result<PathBuf, Error>),
}
