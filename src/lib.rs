// SPDX-License-Identifier: MPL-2.0
//! `smartcalc` is the desktop shell of the SmartCalc calculator, built with
//! the Iced GUI framework.
//!
//! The shell owns application startup: it resolves the display language
//! from the user's preferred locales, loads the matching Fluent translation
//! resource, constructs the main window, and runs the event loop. The
//! calculator engine itself lives behind the shell and is not part of this
//! crate.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
