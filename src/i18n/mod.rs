// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation resource loading, and string formatting.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or the host's ordered locale list
//! - Loading of `SmartCalc_<locale>.ftl` resources, embedded or from a directory
//! - Runtime language switching
//! - Fallback to the source-language resource when translations are missing

pub mod fluent;
