// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions (save
//! success, export errors, etc.) without blocking interaction.
//!
//! - [`notification`] - core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - toast widget for rendering notifications
//!
//! Toast duration is ~3s for success/info, ~5s for warnings; errors require
//! manual dismissal. At most 3 toasts are visible, the rest are queued.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
