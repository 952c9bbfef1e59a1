//! Map-Editor-Parsing: `<Map><Objects><MapObject>…` in `MapEditorMap`.

use super::values::{parse_bool, parse_f32, parse_i32};
use super::{path_is, walk_elements, ElementEvent};
use crate::core::{Quaternion, Vector3};
use crate::source::{MapEditorMap, MapObject, MapObjectType};
use anyhow::{Context, Result};

const ROOT: &str = "Map";
const OBJECT_PATH: [&str; 3] = [ROOT, "Objects", "MapObject"];

/// Sammelt die Felder eines `<MapObject>` bis zum schließenden Tag.
#[derive(Default)]
struct ObjectBuilder {
    object_type: Option<MapObjectType>,
    position: Vector3,
    quaternion: Option<Quaternion>,
    hash: Option<i32>,
    dynamic: bool,
    door: bool,
}

impl ObjectBuilder {
    fn set_field(&mut self, field: &[String], text: &str) -> Result<()> {
        let names: Vec<&str> = field.iter().map(String::as_str).collect();
        match names.as_slice() {
            ["Type"] => self.object_type = Some(MapObjectType::from_text(text)),
            ["Hash"] => self.hash = Some(parse_i32(text, "Hash")?),
            ["Dynamic"] => self.dynamic = parse_bool(text, "Dynamic")?,
            ["Door"] => self.door = parse_bool(text, "Door")?,
            ["Position", axis] => {
                let value = parse_f32(text, "Position")?;
                match *axis {
                    "X" => self.position.x = value,
                    "Y" => self.position.y = value,
                    "Z" => self.position.z = value,
                    _ => {}
                }
            }
            ["Quaternion", axis] => {
                let value = parse_f32(text, "Quaternion")?;
                let q = self
                    .quaternion
                    .get_or_insert(Quaternion::new(0.0, 0.0, 0.0, 0.0));
                match *axis {
                    "X" => q.x = value,
                    "Y" => q.y = value,
                    "Z" => q.z = value,
                    "W" => q.w = value,
                    _ => {}
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn build(self) -> MapObject {
        MapObject {
            object_type: self
                .object_type
                .unwrap_or_else(|| MapObjectType::Other(String::new())),
            position: self.position,
            quaternion: self.quaternion.unwrap_or(Quaternion::IDENTITY),
            hash: self.hash,
            dynamic: self.dynamic,
            door: self.door,
        }
    }
}

/// Parsed ein Map-Editor-Dokument aus einem XML-String.
pub fn parse_map_editor(xml_content: &str) -> Result<MapEditorMap> {
    let mut map = MapEditorMap::default();
    let mut current: Option<ObjectBuilder> = None;

    walk_elements(xml_content, ROOT, |event| {
        match event {
            ElementEvent::Open { path, .. } => {
                if path_is(path, &OBJECT_PATH) {
                    current = Some(ObjectBuilder::default());
                }
            }
            ElementEvent::Close { path, text } => {
                if path_is(path, &OBJECT_PATH) {
                    if let Some(builder) = current.take() {
                        map.objects.push(builder.build());
                    }
                } else if path.len() > OBJECT_PATH.len()
                    && path_is(&path[..OBJECT_PATH.len()], &OBJECT_PATH)
                {
                    if let Some(builder) = current.as_mut() {
                        let index = map.objects.len() + 1;
                        builder
                            .set_field(&path[OBJECT_PATH.len()..], text)
                            .with_context(|| format!("MapObject #{}", index))?;
                    }
                }
            }
        }
        Ok(())
    })
    .context("Kein gueltiges Map-Editor-Dokument")?;

    log::debug!("Map-Editor-Dokument: {} Objekte", map.objects.len());
    Ok(map)
}
