// SPDX-License-Identifier: MPL-2.0
//! Application root state and startup orchestration.
//!
//! The `App` struct owns the localization context and the active screen,
//! and `run` wires state construction, window settings, and the event loop
//! together. Startup policy (locale resolution order, window geometry,
//! persistence of the language choice) lives here so user-facing behavior
//! stays easy to audit.
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::{home, settings};
use iced::{window, Element, Size, Task, Theme};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Root Iced application state: the localization context plus the screen
/// currently shown in the main window.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
}

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Settings,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("locale", &self.i18n.current_locale().to_string())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    LanguageSelected(LanguageIdentifier),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing `SmartCalc_<locale>.ftl` resources
    /// that replaces the embedded set, for custom builds.
    pub i18n_dir: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings, honoring geometry overrides from the
/// configuration while keeping the window at least the minimum size.
pub fn window_settings(config: &config::Config) -> window::Settings {
    let icon = crate::icon::load_window_icon();
    let width = config
        .window_width
        .unwrap_or(WINDOW_DEFAULT_WIDTH)
        .max(MIN_WINDOW_WIDTH);
    let height = config
        .window_height
        .unwrap_or(WINDOW_DEFAULT_HEIGHT)
        .max(MIN_WINDOW_HEIGHT);

    window::Settings {
        size: Size::new(width, height),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
/// The returned result carries the event loop's termination status.
pub fn run(flags: Flags) -> iced::Result {
    let config = config::load().unwrap_or_default();

    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(&config))
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
        }
    }
}

impl App {
    /// Initializes application state: loads the configuration and builds
    /// the localization context before the first frame is drawn.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        (
            App {
                i18n,
                screen: Screen::Home,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SwitchScreen(screen) => {
                self.screen = screen;
            }
            Message::LanguageSelected(locale) => {
                self.i18n.set_locale(locale.clone());
                if self.i18n.current_locale() == &locale {
                    let mut config = config::load().unwrap_or_default();
                    config.language = Some(locale.to_string());
                    if let Err(err) = config::save(&config) {
                        log::warn!("failed to persist language preference: {}", err);
                    }
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Home => home::view(self),
            Screen::Settings => settings::view(self),
        }
    }

    fn theme(&self) -> Theme {
        <Theme as iced::theme::Base>::default(iced::theme::Mode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_on_home_screen() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn switch_screen_updates_state() {
        let mut app = App::default();
        let _ = app.update(Message::SwitchScreen(Screen::Settings));
        assert_eq!(app.screen, Screen::Settings);
        let _ = app.update(Message::SwitchScreen(Screen::Home));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn title_is_localized_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "SmartCalc");
    }

    #[test]
    fn window_settings_clamp_to_minimum_size() {
        let config = config::Config {
            window_width: Some(100.0),
            window_height: Some(100.0),
            ..config::Config::default()
        };
        let settings = window_settings(&config);
        assert_eq!(settings.size.width, MIN_WINDOW_WIDTH);
        assert_eq!(settings.size.height, MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn window_settings_use_defaults_without_overrides() {
        let settings = window_settings(&config::Config::default());
        assert_eq!(settings.size.width, WINDOW_DEFAULT_WIDTH);
        assert_eq!(settings.size.height, WINDOW_DEFAULT_HEIGHT);
    }
}
