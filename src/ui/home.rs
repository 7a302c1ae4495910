//! Main window contents shown on startup: the application identity and the
//! language currently in effect.

use crate::app::{App, Message, Screen};
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{Button, Column, Container, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn view(app: &App) -> Element<'_, Message> {
    let title = Text::new(app.i18n.tr("app-title")).size(typography::TITLE_LG);
    let version = Text::new(format!("v{APP_VERSION}")).size(typography::CAPTION);
    let tagline = Text::new(app.i18n.tr("home-tagline")).size(typography::BODY_LG);

    // Show the human-readable name of the active language, falling back to
    // the raw locale identifier when no name entry exists.
    let locale = app.i18n.current_locale();
    let name_key = format!("language-name-{}", locale);
    let language_name = app.i18n.tr(&name_key);
    let language_name = if language_name.starts_with("MISSING:") {
        locale.to_string()
    } else {
        language_name
    };
    let language_line = Text::new(format!(
        "{} {}",
        app.i18n.tr("home-language-label"),
        language_name
    ))
    .size(typography::BODY);

    let settings_button = Button::new(
        Text::new(app.i18n.tr("home-open-settings-button")).size(typography::BODY),
    )
    .on_press(Message::SwitchScreen(Screen::Settings));

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(version)
        .push(tagline)
        .push(language_line)
        .push(settings_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
