//! Konvertierung geparster Quelldokumente in das kanonische YMap-Modell.
//!
//! Jede Platzierung wird in Dateireihenfolge klassifiziert:
//! Fahrzeug → CarGenerator, Prop → Entity, alles andere wird übersprungen.
//! Nach der letzten Platzierung werden die Extents neu berechnet.

pub mod rules;


use crate::core::model_names::{hash_fallback_name, resolve_name, ModelNameLookup};
use crate::core::{extents, YMap};
use crate::shared::ConverterOptions;
use crate::source::spooner::{SPOONER_TYPE_PROP, SPOONER_TYPE_VEHICLE};
use crate::source::{MapEditorMap, MapObjectType, Placement, SourceDocument, SpoonerPlacements};

pub use rules::{build_car_generator, build_entity, entity_rotation};

/// Zusammenfassung einer Konvertierung.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Erzeugte Entities
    pub entities: usize,
    /// Erzeugte CarGenerators
    pub car_generators: usize,
    /// Wegen unbekanntem/irrelevantem Typ übersprungen
    pub skipped_by_type: usize,
    /// Ohne auflösbaren Modellnamen übersprungen
    pub unresolved: usize,
}

/// Klassifizierung einer Platzierung.
enum Classification {
    CarGenerator,
    Entity,
    Skip,
}

/// Konvertiert ein Quelldokument in eine neue YMap (inkl. Extents).
pub fn convert(
    document: &SourceDocument,
    names: &dyn ModelNameLookup,
    options: &ConverterOptions,
) -> (YMap, ConversionReport) {
    let (mut ymap, report) = match document {
        SourceDocument::MapEditor(map) => convert_map_editor(map, names, options),
        SourceDocument::Spooner(spooner) => convert_spooner(spooner, names, options),
    };

    extents::recalculate(&mut ymap, &options.extents_padding);

    log::info!(
        "Konvertiert ({}): {} Entities, {} CarGenerators, {} nach Typ übersprungen, {} ohne Modellnamen",
        document.dialect(),
        report.entities,
        report.car_generators,
        report.skipped_by_type,
        report.unresolved
    );

    (ymap, report)
}

fn classify_map_object(object_type: &MapObjectType) -> Classification {
    match object_type {
        MapObjectType::Vehicle => Classification::CarGenerator,
        MapObjectType::Prop => Classification::Entity,
        _ => Classification::Skip,
    }
}

fn classify_spooner(type_code: i32) -> Classification {
    match type_code {
        SPOONER_TYPE_VEHICLE => Classification::CarGenerator,
        SPOONER_TYPE_PROP => Classification::Entity,
        _ => Classification::Skip,
    }
}

fn convert_map_editor(
    map: &MapEditorMap,
    names: &dyn ModelNameLookup,
    options: &ConverterOptions,
) -> (YMap, ConversionReport) {
    let mut ymap = YMap::new();
    let mut report = ConversionReport::default();

    for (index, object) in map.objects.iter().enumerate() {
        let classification = classify_map_object(&object.object_type);
        if let Classification::Skip = classification {
            log::debug!("MapObject vom Typ {:?} übersprungen", object.object_type);
            report.skipped_by_type += 1;
            continue;
        }

        let Some(hash) = object.model_hash() else {
            log::warn!("MapObject #{} ohne <Hash> übersprungen", index + 1);
            report.unresolved += 1;
            continue;
        };
        let model = resolve_name(names, hash);

        match classification {
            Classification::CarGenerator => {
                ymap.car_generators.push(build_car_generator(
                    model,
                    object.position,
                    object.quaternion,
                    options.car_gen_scale,
                ));
                report.car_generators += 1;
            }
            Classification::Entity => {
                ymap.entities.push(build_entity(
                    model,
                    object.position,
                    object.quaternion,
                    object.is_static(),
                    options.map_editor_conjugate_rotation,
                    options.static_entity_flags,
                ));
                report.entities += 1;
            }
            Classification::Skip => {}
        }
    }

    (ymap, report)
}

/// Modellname einer Spooner-Platzierung: Tabelle, dann `HashName`, dann Hex-Fallback,
/// zuletzt der unveränderte `<ModelHash>`-Text.
fn spooner_model_name(placement: &Placement, names: &dyn ModelNameLookup) -> Option<String> {
    if let Some(name) = placement
        .model_hash
        .and_then(|hash| names.lookup(hash))
        .filter(|name| !name.is_empty())
    {
        return Some(name.to_string());
    }

    placement
        .hash_name
        .clone()
        .or_else(|| placement.model_hash.map(hash_fallback_name))
        .or_else(|| placement.model_hash_text.clone())
}

fn convert_spooner(
    spooner: &SpoonerPlacements,
    names: &dyn ModelNameLookup,
    options: &ConverterOptions,
) -> (YMap, ConversionReport) {
    let mut ymap = YMap::new();
    let mut report = ConversionReport::default();

    for (index, placement) in spooner.placements.iter().enumerate() {
        let classification = classify_spooner(placement.type_code);
        if let Classification::Skip = classification {
            log::debug!(
                "Placement #{} mit Typ-Code {} übersprungen",
                index + 1,
                placement.type_code
            );
            report.skipped_by_type += 1;
            continue;
        }

        let Some(model) = spooner_model_name(placement, names) else {
            log::warn!(
                "Placement #{} ohne ModelHash und HashName übersprungen",
                index + 1
            );
            report.unresolved += 1;
            continue;
        };

        let position = placement.position_rotation.position();
        let rotation = placement.position_rotation.quaternion();

        match classification {
            Classification::CarGenerator => {
                ymap.car_generators.push(build_car_generator(
                    model,
                    position,
                    rotation,
                    options.car_gen_scale,
                ));
                report.car_generators += 1;
            }
            Classification::Entity => {
                ymap.entities.push(build_entity(
                    model,
                    position,
                    rotation,
                    !placement.dynamic,
                    options.spooner_conjugate_rotation,
                    options.static_entity_flags,
                ));
                report.entities += 1;
            }
            Classification::Skip => {}
        }
    }

    (ymap, report)
}
