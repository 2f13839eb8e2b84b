// SPDX-License-Identifier: MPL-2.0
//! `ticket_studio` is a desktop ticket designer built with the Iced GUI
//! framework.
//!
//! It lets the user describe an event, pick a design or a custom color
//! scheme, rearrange the ticket layout directly on a live preview, export
//! the result as a PNG or JPEG image, and keep a small library of saved
//! events.

#![doc(html_root_url = "https://docs.rs/ticket_studio/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod library;
pub mod ticket;
pub mod ui;
