//! YMap-Parsing: `<CMapData>` in das kanonische `YMap`-Modell.
//!
//! Nur die kanonischen Felder werden gelesen; Engine-Defaults wie `lodDist`
//! oder `bodyColorRemap1` schreibt der Writer konstant und werden hier ignoriert.

use super::values::{
    quaternion_from_attributes, value_f32, value_u32, vector_from_attributes,
};
use super::{path_is, walk_elements, ElementEvent};
use crate::core::{CarGenerator, Entity, Quaternion, Vector3, YMap};
use anyhow::{bail, Context, Result};

const ROOT: &str = "CMapData";
const ENTITY_PATH: [&str; 3] = [ROOT, "entities", "Item"];
const CAR_GEN_PATH: [&str; 3] = [ROOT, "carGenerators", "Item"];

#[derive(Default)]
struct EntityBuilder {
    archetype_name: String,
    flags: Option<u32>,
    position: Vector3,
    rotation: Quaternion,
}

impl EntityBuilder {
    fn open_field(&mut self, field: &str, attributes: &[(String, String)]) -> Result<()> {
        match field {
            "flags" => self.flags = Some(value_u32(attributes, field)?),
            "position" => self.position = vector_from_attributes(attributes, field)?,
            "rotation" => self.rotation = quaternion_from_attributes(attributes, field)?,
            _ => {}
        }
        Ok(())
    }

    fn build(self) -> Result<Entity> {
        if self.archetype_name.is_empty() {
            bail!("Entity ohne <archetypeName>");
        }
        Ok(Entity::new(
            self.archetype_name,
            self.position,
            self.rotation,
            self.flags,
        ))
    }
}

#[derive(Default)]
struct CarGeneratorBuilder {
    position: Vector3,
    orient_x: f32,
    orient_y: f32,
    perpendicular_length: f32,
    car_model: String,
}

impl CarGeneratorBuilder {
    fn open_field(&mut self, field: &str, attributes: &[(String, String)]) -> Result<()> {
        match field {
            "position" => self.position = vector_from_attributes(attributes, field)?,
            "orientX" => self.orient_x = value_f32(attributes, field)?,
            "orientY" => self.orient_y = value_f32(attributes, field)?,
            "perpendicularLength" => self.perpendicular_length = value_f32(attributes, field)?,
            _ => {}
        }
        Ok(())
    }

    fn build(self) -> Result<CarGenerator> {
        if self.car_model.is_empty() {
            bail!("CarGenerator ohne <carModel>");
        }
        Ok(CarGenerator {
            position: self.position,
            orient_x: self.orient_x,
            orient_y: self.orient_y,
            perpendicular_length: self.perpendicular_length,
            car_model: self.car_model,
        })
    }
}

/// Parsed ein YMap-Dokument aus einem XML-String.
pub fn parse_ymap(xml_content: &str) -> Result<YMap> {
    let mut ymap = YMap::new();
    let mut entity: Option<EntityBuilder> = None;
    let mut car_gen: Option<CarGeneratorBuilder> = None;

    walk_elements(xml_content, ROOT, |event| {
        match event {
            ElementEvent::Open { path, attributes } => {
                if path_is(path, &ENTITY_PATH) {
                    entity = Some(EntityBuilder::default());
                } else if path_is(path, &CAR_GEN_PATH) {
                    car_gen = Some(CarGeneratorBuilder::default());
                } else if path.len() == 4 && path_is(&path[..3], &ENTITY_PATH) {
                    if let Some(builder) = entity.as_mut() {
                        builder.open_field(&path[3], attributes)?;
                    }
                } else if path.len() == 4 && path_is(&path[..3], &CAR_GEN_PATH) {
                    if let Some(builder) = car_gen.as_mut() {
                        builder.open_field(&path[3], attributes)?;
                    }
                } else if path.len() == 2 {
                    open_map_field(&mut ymap, &path[1], attributes)?;
                }
            }
            ElementEvent::Close { path, text } => {
                if path_is(path, &ENTITY_PATH) {
                    if let Some(builder) = entity.take() {
                        let index = ymap.entities.len() + 1;
                        let built = builder
                            .build()
                            .with_context(|| format!("Entity #{}", index))?;
                        ymap.entities.push(built);
                    }
                } else if path_is(path, &CAR_GEN_PATH) {
                    if let Some(builder) = car_gen.take() {
                        let index = ymap.car_generators.len() + 1;
                        let built = builder
                            .build()
                            .with_context(|| format!("CarGenerator #{}", index))?;
                        ymap.car_generators.push(built);
                    }
                } else if path_is(path, &[ROOT, "entities", "Item", "archetypeName"]) {
                    if let Some(builder) = entity.as_mut() {
                        builder.archetype_name = text.to_string();
                    }
                } else if path_is(path, &[ROOT, "carGenerators", "Item", "carModel"]) {
                    if let Some(builder) = car_gen.as_mut() {
                        builder.car_model = text.to_string();
                    }
                } else if path_is(path, &[ROOT, "name"]) && !text.is_empty() {
                    ymap.name = Some(text.to_string());
                }
            }
        }
        Ok(())
    })
    .context("Kein gueltiges YMap-Dokument")?;

    log::debug!(
        "YMap-Dokument: {} Entities, {} CarGenerators",
        ymap.entity_count(),
        ymap.car_generator_count()
    );
    Ok(ymap)
}

fn open_map_field(ymap: &mut YMap, field: &str, attributes: &[(String, String)]) -> Result<()> {
    match field {
        "streamingExtentsMin" => {
            ymap.streaming_extents_min = vector_from_attributes(attributes, field)?
        }
        "streamingExtentsMax" => {
            ymap.streaming_extents_max = vector_from_attributes(attributes, field)?
        }
        "entitiesExtentsMin" => {
            ymap.entities_extents_min = vector_from_attributes(attributes, field)?
        }
        "entitiesExtentsMax" => {
            ymap.entities_extents_max = vector_from_attributes(attributes, field)?
        }
        _ => {}
    }
    Ok(())
}
