// SPDX-License-Identifier: MPL-2.0
//! UI components: screens, the live preview, and shared styling.

pub mod design_tokens;
pub mod designer;
pub mod events;
pub mod navbar;
pub mod notifications;
pub mod preview;
pub mod theme;
pub mod tickets;
