//! Spooner-Parsing: `<SpoonerPlacements><Placement>…` in `SpoonerPlacements`.

use super::values::{parse_bool, parse_f32, parse_i32, parse_model_hash};
use super::{path_is, walk_elements, ElementEvent};
use crate::source::{Placement, SpoonerPlacements};
use anyhow::{Context, Result};

const ROOT: &str = "SpoonerPlacements";
const PLACEMENT_PATH: [&str; 2] = [ROOT, "Placement"];

fn set_field(placement: &mut Placement, field: &[String], text: &str) -> Result<()> {
    let names: Vec<&str> = field.iter().map(String::as_str).collect();
    match names.as_slice() {
        ["ModelHash"] => {
            placement.model_hash = parse_model_hash(text);
            placement.model_hash_text = Some(text.to_string()).filter(|raw| !raw.is_empty());
            if placement.model_hash.is_none() && !text.is_empty() {
                log::debug!("ModelHash '{}' ist kein Hash, wird als Name verwendet", text);
            }
        }
        ["HashName"] => {
            placement.hash_name = Some(text.to_string()).filter(|name| !name.is_empty());
        }
        ["Type"] => placement.type_code = parse_i32(text, "Type")?,
        ["Dynamic"] => placement.dynamic = parse_bool(text, "Dynamic")?,
        ["PositionRotation", component] => {
            let value = parse_f32(text, "PositionRotation")?;
            let pr = &mut placement.position_rotation;
            match *component {
                "X" => pr.x = value,
                "Y" => pr.y = value,
                "Z" => pr.z = value,
                "Pitch" => pr.pitch = value,
                "Roll" => pr.roll = value,
                "Yaw" => pr.yaw = value,
                _ => {}
            }
        }
        _ => {}
    }
    Ok(())
}

/// Parsed ein Spooner-Dokument aus einem XML-String.
pub fn parse_spooner(xml_content: &str) -> Result<SpoonerPlacements> {
    let mut document = SpoonerPlacements::default();
    let mut current: Option<Placement> = None;

    walk_elements(xml_content, ROOT, |event| {
        match event {
            ElementEvent::Open { path, .. } => {
                if path_is(path, &PLACEMENT_PATH) {
                    current = Some(Placement::default());
                }
            }
            ElementEvent::Close { path, text } => {
                if path_is(path, &PLACEMENT_PATH) {
                    if let Some(placement) = current.take() {
                        document.placements.push(placement);
                    }
                } else if path.len() > PLACEMENT_PATH.len()
                    && path_is(&path[..PLACEMENT_PATH.len()], &PLACEMENT_PATH)
                {
                    if let Some(placement) = current.as_mut() {
                        let index = document.placements.len() + 1;
                        set_field(placement, &path[PLACEMENT_PATH.len()..], text)
                            .with_context(|| format!("Placement #{}", index))?;
                    }
                }
            }
        }
        Ok(())
    })
    .context("Kein gueltiges Spooner-Dokument")?;

    log::debug!(
        "Spooner-Dokument: {} Platzierungen",
        document.placements.len()
    );
    Ok(document)
}
