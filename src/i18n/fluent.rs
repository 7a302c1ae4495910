use crate::config::Config;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Prefix shared by every translation resource, e.g. `SmartCalc_en-US.ftl`.
pub const RESOURCE_PREFIX: &str = "SmartCalc";

const RESOURCE_SUFFIX: &str = ".ftl";

/// Locale whose resource carries the source-language strings.
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Localization context: the loaded translation bundles plus the locale
/// currently in effect. Owned by the application state and passed by
/// reference to the views.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the bundle map from the packaged resources (or `i18n_dir`
    /// when given) and resolves the effective locale. A resource that
    /// fails to load is skipped; exhausting every candidate falls back to
    /// [`DEFAULT_LOCALE`].
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for (name, content) in collect_resources(i18n_dir.as_deref()) {
            let locale = match locale_from_resource_name(&name) {
                Some(locale) => locale,
                None => continue,
            };
            let resource = match parse_resource(content) {
                Ok(resource) => resource,
                Err(err) => {
                    log::warn!("skipping translation resource {}: {}", name, err);
                    continue;
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            if bundle.add_resource(resource).is_err() {
                log::warn!(
                    "skipping translation resource {}: duplicate message identifiers",
                    name
                );
                continue;
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(|locale| locale.to_string());

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches the current locale. Ignored when no bundle exists for it.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Formats the message for the current locale, falling back to the
    /// source-language bundle and finally to a `MISSING:` marker.
    pub fn tr(&self, key: &str) -> String {
        if let Some(value) = self.lookup(&self.current_locale, key) {
            return value;
        }
        if let Ok(fallback) = DEFAULT_LOCALE.parse::<LanguageIdentifier>() {
            if fallback != self.current_locale {
                if let Some(value) = self.lookup(&fallback, key) {
                    return value;
                }
            }
        }
        format!("MISSING: {}", key)
    }

    fn lookup(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }
}

/// Gathers `(file name, contents)` pairs from the override directory when
/// given, otherwise from the embedded assets. I/O failures only drop the
/// affected entry.
fn collect_resources(i18n_dir: Option<&str>) -> Vec<(String, String)> {
    let mut resources = Vec::new();

    if let Some(dir) = i18n_dir {
        let entries = match fs::read_dir(Path::new(dir)) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("cannot read translation directory {}: {}", dir, err);
                return resources;
            }
        };
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(RESOURCE_SUFFIX) {
                continue;
            }
            match fs::read_to_string(entry.path()) {
                Ok(content) => resources.push((name, content)),
                Err(err) => log::warn!("cannot read translation resource {}: {}", name, err),
            }
        }
    } else {
        for file in Asset::iter() {
            let name = file.as_ref().to_string();
            if let Some(content) = Asset::get(&name) {
                resources.push((
                    name,
                    String::from_utf8_lossy(content.data.as_ref()).to_string(),
                ));
            }
        }
    }

    resources
}

/// Extracts the locale from a resource name following the
/// `SmartCalc_<locale>.ftl` convention. Names with a foreign prefix or an
/// unparseable locale yield `None`.
fn locale_from_resource_name(name: &str) -> Option<LanguageIdentifier> {
    let stem = name.strip_suffix(RESOURCE_SUFFIX)?;
    let locale_str = stem.strip_prefix(RESOURCE_PREFIX)?.strip_prefix('_')?;
    locale_str.parse().ok()
}

fn parse_resource(content: String) -> Result<FluentResource> {
    FluentResource::try_new(content)
        .map_err(|(_, errors)| Error::I18n(format!("{} syntax error(s)", errors.len())))
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let mut candidates = Vec::new();
    if let Some(lang) = cli_lang {
        candidates.push(lang);
    }
    if let Some(lang) = &config.language {
        candidates.push(lang.clone());
    }
    candidates.extend(sys_locale::get_locales());

    select_locale(&candidates, available)
}

/// Returns the first candidate for which a resource exists. An exact match
/// wins; a bundle sharing the candidate's primary language still counts, so
/// `fr-CH` can use the `fr-FR` resource. Unparseable candidates are skipped.
pub fn select_locale(
    candidates: &[String],
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    for candidate in candidates {
        let wanted = match candidate.parse::<LanguageIdentifier>() {
            Ok(locale) => locale,
            Err(_) => continue,
        };
        if let Some(found) = available.iter().find(|locale| **locale == wanted) {
            return Some(found.clone());
        }
        if let Some(found) = available
            .iter()
            .find(|locale| locale.language == wanted.language)
        {
            return Some(found.clone());
        }
    }

    None
}
