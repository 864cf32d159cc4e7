//! KPSPublic SOAP 1.2 envelope building and response extraction

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{CitizenQuery, IdentityNumber, RegistryOutcome};
use crate::core::ports::RegistryError;

/// Namespace of the `TCKimlikNoDogrula` operation
pub const SERVICE_NAMESPACE: &str = "http://tckimlik.nvi.gov.tr/WS";

static RESULT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<TCKimlikNoDogrulaResult>(.*?)</TCKimlikNoDogrulaResult>")
        .unwrap_or_else(|e| unreachable!("static pattern is valid: {e}"))
});

/// Build the `TCKimlikNoDogrula` request envelope
#[must_use]
pub fn build_request(number: &IdentityNumber, query: &CitizenQuery) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap12:Envelope xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:soap12="http://www.w3.org/2003/05/soap-envelope">
  <soap12:Body>
    <TCKimlikNoDogrula xmlns="{ns}">
      <TCKimlikNo>{number}</TCKimlikNo>
      <Ad>{given_name}</Ad>
      <Soyad>{surname}</Soyad>
      <DogumYili>{birth_year}</DogumYili>
    </TCKimlikNoDogrula>
  </soap12:Body>
</soap12:Envelope>"#,
        ns = SERVICE_NAMESPACE,
        given_name = escape_text(&query.given_name),
        surname = escape_text(&query.surname),
        birth_year = query.birth_year,
    )
}

/// Extract the verification result from a response body
///
/// Only the literal text `true` counts as confirmation.
pub fn parse_response(body: &str) -> Result<RegistryOutcome, RegistryError> {
    let captures = RESULT_TAG
        .captures(body)
        .ok_or(RegistryError::MalformedResponse)?;

    if &captures[1] == "true" {
        Ok(RegistryOutcome::Confirmed)
    } else {
        Ok(RegistryOutcome::NotConfirmed)
    }
}

/// Escape XML text content
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
