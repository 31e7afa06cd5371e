//! Hotel listings: decoding provider text fields and rendering result blocks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A listing as delivered by the provider, with numeric fields still in
/// their localized text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListing {
    pub name: Option<String>,
    pub street_address: String,
    /// Distance text of the first listed landmark, e.g. `"2,3 km"`.
    pub first_landmark_distance: Option<String>,
    /// Current nightly price text, e.g. `"1,234"`.
    pub price: Option<String>,
}

/// Errors decoding a single raw listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingParseError {
    #[error("Listing has no name")]
    MissingName,

    #[error("Listing '{name}' has no price")]
    MissingPrice { name: String },

    #[error("Listing '{name}' has unreadable price '{text}'")]
    InvalidPrice { name: String, text: String },

    #[error("Listing '{name}' has unreadable distance '{text}'")]
    InvalidDistance { name: String, text: String },
}

/// A decoded listing, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    pub address: String,
    /// Kilometres to the first landmark; `None` when the provider lists none.
    pub distance_km: Option<f64>,
    pub price: i64,
}

impl Listing {
    /// Decodes the localized text fields of a raw listing.
    pub fn try_from_raw(raw: RawListing) -> Result<Self, ListingParseError> {
        let name = raw
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ListingParseError::MissingName)?;

        let price_text = raw.price.ok_or_else(|| ListingParseError::MissingPrice {
            name: name.clone(),
        })?;
        let price =
            parse_price_text(&price_text).ok_or_else(|| ListingParseError::InvalidPrice {
                name: name.clone(),
                text: price_text.clone(),
            })?;

        let distance_km = match raw.first_landmark_distance {
            Some(text) => Some(parse_distance_text(&text).ok_or_else(|| {
                ListingParseError::InvalidDistance {
                    name: name.clone(),
                    text: text.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            name,
            address: raw.street_address,
            distance_km,
            price,
        })
    }

    /// Distance used for range comparisons; a missing landmark counts as 0 km.
    pub fn effective_distance(&self) -> f64 {
        self.distance_km.unwrap_or(0.0)
    }

    /// Renders this listing as one Markdown block.
    pub fn render(&self, currency: &str) -> String {
        let distance = match self.distance_km {
            // Debug keeps a trailing `.0` on whole kilometres.
            Some(km) => format!("{:?} km to center", km),
            None => "unknown distance to center".to_string(),
        };
        format!(
            "{}\n{}\n{}\n{} {}",
            bold_markdown(&self.name),
            escape_markdown(&self.address),
            distance,
            self.price,
            currency
        )
    }
}

/// Parses a localized price such as `"1,234"` or `"1,234 RUB"` into 1234.
///
/// Only the first whitespace-separated token is read and thousands
/// separators are stripped.
pub fn parse_price_text(text: &str) -> Option<i64> {
    let token = text.split_whitespace().next()?;
    token.replace(',', "").parse().ok()
}

/// Parses a localized distance such as `"2,3 km"` into 2.3.
pub fn parse_distance_text(text: &str) -> Option<f64> {
    let token = text.split_whitespace().next()?;
    token
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|km| km.is_finite())
}

/// Renders listings as blank-line separated blocks; empty input gives `""`.
pub fn format_listings(listings: &[Listing], currency: &str) -> String {
    listings
        .iter()
        .map(|listing| listing.render(currency))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn is_markup(c: char) -> bool {
    matches!(c, '_' | '*' | '`' | '[')
}

/// Escapes the characters Telegram's legacy Markdown treats as markup.
///
/// Only valid outside an entity; see [`bold_markdown`] for bold text.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if is_markup(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Renders `text` in bold for Telegram's legacy Markdown.
///
/// Escapes are ignored inside an entity, so the bold run is closed before
/// each markup character, the character is escaped, and bold reopens after
/// it: `a*b` becomes `*a*\**b*`.
pub fn bold_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut run = String::new();
    for c in text.chars() {
        if is_markup(c) {
            push_bold(&mut out, &mut run);
            out.push('\\');
            out.push(c);
        } else {
            run.push(c);
        }
    }
    push_bold(&mut out, &mut run);
    out
}

fn push_bold(out: &mut String, run: &mut String) {
    if !run.is_empty() {
        out.push('*');
        out.push_str(run);
        out.push('*');
        run.clear();
    }
}

/// Strips the markup produced by [`bold_markdown`] and [`escape_markdown`].
pub fn markdown_to_plain(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek().copied().is_some_and(is_markup) => {
                if let Some(escaped) = chars.next() {
                    plain.push(escaped);
                }
            }
            '*' => {}
            other => plain.push(other),
        }
    }
    plain
}
