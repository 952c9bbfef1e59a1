//! Writer für YMap-XML.
//!
//! Ausgabe: UTF-8, XML-Deklaration ohne `standalone`, zwei Leerzeichen
//! Einrückung, keine Namespace-Deklarationen.

use crate::core::{CarGenerator, Entity, Quaternion, Vector3, YMap};
use anyhow::Result;
use std::fmt::Write as _;

const INDENT: &str = "  ";

/// Schreibt eine YMap als XML-String.
pub fn write_ymap(ymap: &YMap) -> Result<String> {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    output.push_str("<CMapData>\n");

    if let Some(ref name) = ymap.name {
        text_element(&mut output, 1, "name", name)?;
    }

    vector_element(&mut output, 1, "streamingExtentsMin", ymap.streaming_extents_min)?;
    vector_element(&mut output, 1, "streamingExtentsMax", ymap.streaming_extents_max)?;
    vector_element(&mut output, 1, "entitiesExtentsMin", ymap.entities_extents_min)?;
    vector_element(&mut output, 1, "entitiesExtentsMax", ymap.entities_extents_max)?;

    if ymap.entities.is_empty() {
        output.push_str(&format!("{INDENT}<entities />\n"));
    } else {
        output.push_str(&format!("{INDENT}<entities>\n"));
        for entity in &ymap.entities {
            write_entity(&mut output, entity)?;
        }
        output.push_str(&format!("{INDENT}</entities>\n"));
    }

    if ymap.car_generators.is_empty() {
        output.push_str(&format!("{INDENT}<carGenerators />\n"));
    } else {
        output.push_str(&format!("{INDENT}<carGenerators>\n"));
        for car_gen in &ymap.car_generators {
            write_car_generator(&mut output, car_gen)?;
        }
        output.push_str(&format!("{INDENT}</carGenerators>\n"));
    }

    output.push_str("</CMapData>\n");

    Ok(output)
}

fn write_entity(output: &mut String, entity: &Entity) -> Result<()> {
    writeln!(output, "{}<Item type=\"CEntityDef\">", INDENT.repeat(2))?;
    text_element(output, 3, "archetypeName", &entity.archetype_name)?;
    // flags nur bei statischen Entities
    if let Some(flags) = entity.flags {
        value_element(output, 3, "flags", &flags.to_string())?;
    }
    value_element(output, 3, "guid", "0")?;
    vector_element(output, 3, "position", entity.position)?;
    quaternion_element(output, 3, "rotation", entity.rotation)?;
    value_element(output, 3, "scaleXY", "1")?;
    value_element(output, 3, "scaleZ", "1")?;
    value_element(output, 3, "parentIndex", "-1")?;
    value_element(output, 3, "lodDist", "100")?;
    value_element(output, 3, "childLodDist", "0")?;
    text_element(output, 3, "lodLevel", "LODTYPES_DEPTH_ORPHANHD")?;
    value_element(output, 3, "numChildren", "0")?;
    text_element(output, 3, "priorityLevel", "PRI_REQUIRED")?;
    writeln!(output, "{}<extensions />", INDENT.repeat(3))?;
    value_element(output, 3, "ambientOcclusionMultiplier", "255")?;
    value_element(output, 3, "artificialAmbientOcclusion", "255")?;
    value_element(output, 3, "tintValue", "0")?;
    writeln!(output, "{}</Item>", INDENT.repeat(2))?;
    Ok(())
}

fn write_car_generator(output: &mut String, car_gen: &CarGenerator) -> Result<()> {
    writeln!(output, "{}<Item>", INDENT.repeat(2))?;
    vector_element(output, 3, "position", car_gen.position)?;
    value_element(output, 3, "orientX", &format_float(car_gen.orient_x))?;
    value_element(output, 3, "orientY", &format_float(car_gen.orient_y))?;
    value_element(
        output,
        3,
        "perpendicularLength",
        &format_float(car_gen.perpendicular_length),
    )?;
    text_element(output, 3, "carModel", &car_gen.car_model)?;
    value_element(output, 3, "flags", "3680")?;
    for remap in 1..=4 {
        value_element(output, 3, &format!("bodyColorRemap{}", remap), "-1")?;
    }
    writeln!(output, "{}<popGroup />", INDENT.repeat(3))?;
    value_element(output, 3, "livery", "-1")?;
    writeln!(output, "{}</Item>", INDENT.repeat(2))?;
    Ok(())
}

fn text_element(output: &mut String, depth: usize, tag: &str, text: &str) -> Result<()> {
    writeln!(
        output,
        "{}<{tag}>{}</{tag}>",
        INDENT.repeat(depth),
        escape_xml(text)
    )?;
    Ok(())
}

fn value_element(output: &mut String, depth: usize, tag: &str, value: &str) -> Result<()> {
    writeln!(
        output,
        "{}<{tag} value=\"{}\" />",
        INDENT.repeat(depth),
        escape_xml(value)
    )?;
    Ok(())
}

fn vector_element(output: &mut String, depth: usize, tag: &str, v: Vector3) -> Result<()> {
    writeln!(
        output,
        "{}<{tag} x=\"{}\" y=\"{}\" z=\"{}\" />",
        INDENT.repeat(depth),
        format_float(v.x),
        format_float(v.y),
        format_float(v.z)
    )?;
    Ok(())
}

fn quaternion_element(output: &mut String, depth: usize, tag: &str, q: Quaternion) -> Result<()> {
    writeln!(
        output,
        "{}<{tag} x=\"{}\" y=\"{}\" z=\"{}\" w=\"{}\" />",
        INDENT.repeat(depth),
        format_float(q.x),
        format_float(q.y),
        format_float(q.z),
        format_float(q.w)
    )?;
    Ok(())
}

/// Kürzeste Darstellung, die beim Zurücklesen denselben `f32` ergibt.
fn format_float(value: f32) -> String {
    format!("{}", value)
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
