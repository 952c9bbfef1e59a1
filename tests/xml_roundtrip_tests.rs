use ymap_exporter::{
    convert, detect_source_document, parse_ymap, write_ymap, ConverterOptions, ModelNameTable,
    SourceDialect,
};

#[test]
fn test_map_editor_conversion_survives_write_and_reparse() {
    let xml_content = include_str!("fixtures/map_editor.xml");
    let names = ModelNameTable::from_names(["adder", "prop_bench_01a"]);

    let source = detect_source_document(xml_content).expect("Dialekt-Erkennung fehlgeschlagen");
    assert_eq!(source.dialect(), SourceDialect::MapEditor);

    let (converted, report) = convert(&source, &names, &ConverterOptions::default());
    assert_eq!(report.entities, 2);
    assert_eq!(report.car_generators, 1);
    assert_eq!(report.skipped_by_type, 1);

    let written_xml = write_ymap(&converted).expect("XML-Export fehlgeschlagen");
    let reparsed = parse_ymap(&written_xml).expect("Re-Parsing fehlgeschlagen");

    assert_eq!(reparsed, converted);
    assert_eq!(reparsed.entities[0].archetype_name, "prop_bench_01a");
    assert_eq!(reparsed.entities[0].flags, Some(32));
    assert_eq!(reparsed.entities[1].archetype_name, "0x1a2b");
    assert_eq!(reparsed.entities[1].flags, None);
    assert_eq!(reparsed.car_generators[0].car_model, "adder");
}

#[test]
fn test_spooner_conversion_survives_write_and_reparse() {
    let xml_content = include_str!("fixtures/spooner.xml");

    let source = detect_source_document(xml_content).expect("Dialekt-Erkennung fehlgeschlagen");
    assert_eq!(source.dialect(), SourceDialect::Spooner);

    let (converted, report) =
        convert(&source, &ModelNameTable::new(), &ConverterOptions::default());
    assert_eq!(report.entities, 1);
    assert_eq!(report.car_generators, 1);
    assert_eq!(report.skipped_by_type, 1);

    let written_xml = write_ymap(&converted).expect("XML-Export fehlgeschlagen");
    let reparsed = parse_ymap(&written_xml).expect("Re-Parsing fehlgeschlagen");

    assert_eq!(reparsed, converted);
    assert_eq!(reparsed.car_generators[0].car_model, "zentorno");
    assert_eq!(reparsed.entities[0].archetype_name, "prop_barrier_work05");
    assert!(reparsed.entities[0].is_static());
}

#[test]
fn test_ymap_fixture_roundtrip_preserves_document() {
    let xml_content = include_str!("fixtures/sample.ymap.xml");

    let parsed = parse_ymap(xml_content).expect("Initiales Parsing fehlgeschlagen");
    let written_xml = write_ymap(&parsed).expect("XML-Export fehlgeschlagen");
    let reparsed = parse_ymap(&written_xml).expect("Re-Parsing fehlgeschlagen");

    assert_eq!(parsed.name.as_deref(), Some("sample"));
    assert_eq!(parsed.entity_count(), 1);
    assert_eq!(parsed.car_generator_count(), 1);
    assert_eq!(parsed, reparsed);
}

#[test]
fn test_written_ymap_contains_engine_defaults() {
    let parsed = parse_ymap(include_str!("fixtures/sample.ymap.xml")).expect("Parsing fehlgeschlagen");

    let written_xml = write_ymap(&parsed).expect("XML-Export fehlgeschlagen");

    assert!(written_xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(written_xml.contains("<lodLevel>LODTYPES_DEPTH_ORPHANHD</lodLevel>"));
    assert!(written_xml.contains("<flags value=\"3680\" />"));
    assert!(written_xml.contains("<livery value=\"-1\" />"));
}
