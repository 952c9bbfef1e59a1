//! Werte-Parsing: Zahlen, Booleans, Hashes und Attribut-Vektoren.

use crate::core::{Quaternion, Vector3};
use anyhow::{bail, Context, Result};

/// Parst einen Float aus einem Text-Knoten.
pub(super) fn parse_f32(text: &str, field: &str) -> Result<f32> {
    text.trim().parse::<f32>().with_context(|| {
        format!(
            "{}: Wert '{}' ist keine gueltige Zahl",
            field,
            truncate_for_error(text)
        )
    })
}

/// Parst einen Integer aus einem Text-Knoten.
pub(super) fn parse_i32(text: &str, field: &str) -> Result<i32> {
    text.trim().parse::<i32>().with_context(|| {
        format!(
            "{}: Wert '{}' ist keine gueltige Ganzzahl",
            field,
            truncate_for_error(text)
        )
    })
}

/// Parst einen XML-Schema-Boolean (`true`/`false`/`1`/`0`).
pub(super) fn parse_bool(text: &str, field: &str) -> Result<bool> {
    match text.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => bail!(
            "{}: Wert '{}' ist kein gueltiger Boolean",
            field,
            truncate_for_error(other)
        ),
    }
}

/// Parst einen Modell-Hash: `0x`-Hex oder (auch negativer) Dezimalwert.
///
/// Liefert das 32-Bit-Muster; `None` bei leerem oder unlesbarem Text.
pub(super) fn parse_model_hash(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        return u32::from_str_radix(hex, 16).ok();
    }

    text.parse::<i64>()
        .ok()
        .filter(|v| *v >= i32::MIN as i64 && *v <= u32::MAX as i64)
        .map(|v| v as u32)
}

/// Sucht ein Attribut nach Namen.
pub(super) fn attribute<'a>(attributes: &'a [(String, String)], key: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn required_f32(attributes: &[(String, String)], key: &str, element: &str) -> Result<f32> {
    let value = attribute(attributes, key)
        .with_context(|| format!("<{}>: Attribut '{}' fehlt", element, key))?;
    parse_f32(value, &format!("<{} {}>", element, key))
}

/// Liest einen Vektor aus den Attributen `x`, `y`, `z`.
pub(super) fn vector_from_attributes(
    attributes: &[(String, String)],
    element: &str,
) -> Result<Vector3> {
    Ok(Vector3::new(
        required_f32(attributes, "x", element)?,
        required_f32(attributes, "y", element)?,
        required_f32(attributes, "z", element)?,
    ))
}

/// Liest ein Quaternion aus den Attributen `x`, `y`, `z`, `w`.
pub(super) fn quaternion_from_attributes(
    attributes: &[(String, String)],
    element: &str,
) -> Result<Quaternion> {
    Ok(Quaternion::new(
        required_f32(attributes, "x", element)?,
        required_f32(attributes, "y", element)?,
        required_f32(attributes, "z", element)?,
        required_f32(attributes, "w", element)?,
    ))
}

/// Liest das `value`-Attribut als Float.
pub(super) fn value_f32(attributes: &[(String, String)], element: &str) -> Result<f32> {
    required_f32(attributes, "value", element)
}

/// Liest das `value`-Attribut als vorzeichenlose Ganzzahl.
pub(super) fn value_u32(attributes: &[(String, String)], element: &str) -> Result<u32> {
    let value = attribute(attributes, "value")
        .with_context(|| format!("<{}>: Attribut 'value' fehlt", element))?;
    value
        .trim()
        .parse::<u32>()
        .with_context(|| format!("<{}>: Wert '{}' ist ungueltig", element, value))
}

/// Kürzt einen String für Fehlermeldungen auf max. 40 Zeichen
fn truncate_for_error(s: &str) -> &str {
    match s.char_indices().nth(40) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
