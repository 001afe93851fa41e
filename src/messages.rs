//! User-facing wording for validation reasons and errors.
//!
//! The validator returns locale-free [`InvalidReason`] values; this module
//! turns them into English or Arabic text. Callers pick the [`Locale`].

use std::fmt;
use std::str::FromStr;

use crate::domain::entities::Country;
use crate::domain::validator::{InvalidReason, display_prefixes, format_length};
use crate::error::AppError;

/// Display language. Arabic is rendered right-to-left by the terminal/browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Switches between English and Arabic.
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Word joining alternatives in a list of prefixes.
    pub fn conjunction(self) -> &'static str {
        match self {
            Self::En => " or ",
            Self::Ar => " أو ",
        }
    }

    /// Country name in this locale.
    pub fn country_name(self, country: &Country) -> &str {
        match self {
            Self::En => &country.name,
            Self::Ar => &country.name_ar,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Ar => write!(f, "ar"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ar" | "arabic" => Ok(Self::Ar),
            other => Err(format!("unsupported locale '{other}', expected 'en' or 'ar'")),
        }
    }
}

/// Renders a validation reason for `country` in `locale`.
pub fn describe(reason: &InvalidReason, country: &Country, locale: Locale) -> String {
    let name = locale.country_name(country);
    match (reason, locale) {
        (InvalidReason::EmptyInput, Locale::En) => "Please enter a phone number".to_string(),
        (InvalidReason::EmptyInput, Locale::Ar) => "الرجاء إدخال رقم الهاتف".to_string(),

        (InvalidReason::NoDigits, Locale::En) => "Number must contain digits".to_string(),
        (InvalidReason::NoDigits, Locale::Ar) => "الرقم يجب أن يحتوي على أرقام فقط".to_string(),

        (InvalidReason::LengthOutOfRange { min, max }, Locale::En) => {
            format!("{name} number must be {} digits", format_length(*min, *max))
        }
        (InvalidReason::LengthOutOfRange { min, max }, Locale::Ar) => {
            format!("رقم {name} يجب أن يتكون من {} أرقام", format_length(*min, *max))
        }

        (InvalidReason::TooShort, Locale::En) => "Number is too short".to_string(),
        (InvalidReason::TooShort, Locale::Ar) => "الرقم قصير جداً".to_string(),

        (InvalidReason::TooLong, Locale::En) => "Number is too long".to_string(),
        (InvalidReason::TooLong, Locale::Ar) => "الرقم طويل جداً".to_string(),

        (InvalidReason::PrefixMismatch { prefixes }, _) => {
            let starts = display_prefixes(prefixes).join(locale.conjunction());
            match locale {
                Locale::En => format!("{name} number should start with {starts}"),
                Locale::Ar => format!("رقم {name} يجب أن يبدأ بـ {starts}"),
            }
        }
    }
}

/// Renders any service error for display, delegating validation reasons to [`describe`].
pub fn describe_error(err: &AppError, country: &Country, locale: Locale) -> String {
    match (err, locale) {
        (AppError::Validation(reason), _) => describe(reason, country, locale),
        (AppError::NoLinkYet, Locale::En) => "Generate a link first".to_string(),
        (AppError::NoLinkYet, Locale::Ar) => "قم بإنشاء الرابط أولاً".to_string(),
        (other, _) => other.to_string(),
    }
}

/// Heading shown above the history table, e.g. `History (3 links generated)`.
pub fn history_heading(count: usize, locale: Locale) -> String {
    match locale {
        Locale::En => format!("History ({count} links generated)"),
        Locale::Ar => format!("السجل ({count} روابط تم إنشاؤها)"),
    }
}

/// Column titles of the history table: number, time, link.
pub fn history_columns(locale: Locale) -> [&'static str; 3] {
    match locale {
        Locale::En => ["Number", "Time", "Link"],
        Locale::Ar => ["الرقم", "الوقت", "الرابط"],
    }
}

pub fn empty_history(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "No History Yet. Links you generate will appear here automatically",
        Locale::Ar => "السجل فارغ. الروابط التي تقوم بإنشائها ستظهر هنا",
    }
}
