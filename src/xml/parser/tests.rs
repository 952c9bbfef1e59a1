use super::*;
use crate::core::{Quaternion, Vector3};
use crate::source::MapObjectType;

const MAP_EDITOR_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Map xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <Objects>
    <MapObject>
      <Type>Prop</Type>
      <Position><X>1.5</X><Y>-2</Y><Z>30.25</Z></Position>
      <Rotation><X>0</X><Y>0</Y><Z>90</Z></Rotation>
      <Hash>-1216765807</Hash>
      <Dynamic>false</Dynamic>
      <Quaternion><X>0</X><Y>0</Y><Z>0.7071068</Z><W>0.7071068</W></Quaternion>
      <Door>true</Door>
    </MapObject>
    <MapObject>
      <Type>Vehicle</Type>
      <Position><X>0</X><Y>0</Y><Z>0</Z></Position>
      <Hash>6699</Hash>
      <Dynamic>true</Dynamic>
      <Quaternion><X>0</X><Y>0</Y><Z>0</Z><W>1</W></Quaternion>
      <Door>false</Door>
    </MapObject>
  </Objects>
  <RemoveFromWorld />
  <Markers />
</Map>
"#;

#[test]
fn test_parse_map_editor_objects() {
    let map = parse_map_editor(MAP_EDITOR_XML).expect("Parsing fehlgeschlagen");

    assert_eq!(map.objects.len(), 2);
    let prop = &map.objects[0];
    assert_eq!(prop.object_type, MapObjectType::Prop);
    assert_eq!(prop.position, Vector3::new(1.5, -2.0, 30.25));
    assert_eq!(
        prop.quaternion,
        Quaternion::new(0.0, 0.0, 0.707_106_8, 0.707_106_8)
    );
    assert_eq!(prop.model_hash(), Some(0xB779_A091));
    assert!(!prop.dynamic);
    assert!(prop.door);
    assert_eq!(map.objects[1].object_type, MapObjectType::Vehicle);
}

#[test]
fn test_map_editor_rejects_spooner_root() {
    let xml = "<SpoonerPlacements><Placement><Type>3</Type></Placement></SpoonerPlacements>";

    let err = parse_map_editor(xml).expect_err("Parser sollte fehlschlagen");
    assert!(format!("{err:#}").contains("Unerwartetes Wurzelelement"));
}

#[test]
fn test_map_editor_object_without_hash_keeps_siblings() {
    let xml = "<Map><Objects>\
        <MapObject><Type>Prop</Type><Hash>6699</Hash></MapObject>\
        <MapObject><Type>Prop</Type></MapObject>\
        </Objects></Map>";

    let map = parse_map_editor(xml).expect("Parsing fehlgeschlagen");

    assert_eq!(map.objects.len(), 2);
    assert_eq!(map.objects[0].model_hash(), Some(6699));
    assert_eq!(map.objects[1].model_hash(), None);
}

#[test]
fn test_map_editor_invalid_hash_names_object() {
    let xml = "<Map><Objects><MapObject><Hash>abc</Hash></MapObject></Objects></Map>";

    let err = parse_map_editor(xml).expect_err("Parser sollte fehlschlagen");
    let msg = format!("{err:#}");
    assert!(msg.contains("MapObject #1"));
    assert!(msg.contains("Hash"));
}

#[test]
fn test_parse_spooner_placements() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
    <SpoonerPlacements>
        <Note />
        <ClearDatabase>false</ClearDatabase>
        <Placement>
            <ModelHash>0x1a2b</ModelHash>
            <Type>3</Type>
            <Dynamic>true</Dynamic>
            <HashName>prop_bench_01a</HashName>
            <PositionRotation>
                <X>100.5</X>
                <Y>-20</Y>
                <Z>31</Z>
                <Pitch>0</Pitch>
                <Roll>0</Roll>
                <Yaw>90</Yaw>
            </PositionRotation>
            <Attachment isAttached="false">
                <X>999</X>
            </Attachment>
        </Placement>
        <Placement>
            <ModelHash />
            <Type>5</Type>
        </Placement>
    </SpoonerPlacements>
    "#;

    let spooner = parse_spooner(xml).expect("Parsing fehlgeschlagen");

    assert_eq!(spooner.placements.len(), 2);
    let first = &spooner.placements[0];
    assert_eq!(first.model_hash, Some(0x1A2B));
    assert_eq!(first.hash_name.as_deref(), Some("prop_bench_01a"));
    assert_eq!(first.type_code, 3);
    assert!(first.dynamic);
    assert_eq!(first.position_rotation.position(), Vector3::new(100.5, -20.0, 31.0));
    assert_eq!(first.position_rotation.yaw, 90.0);

    assert_eq!(first.model_hash_text.as_deref(), Some("0x1a2b"));

    let second = &spooner.placements[1];
    assert_eq!(second.model_hash, None);
    assert_eq!(second.model_hash_text, None);
    assert_eq!(second.type_code, 5);
}

#[test]
fn test_spooner_rejects_invalid_type_code() {
    let xml = "<SpoonerPlacements><Placement><Type>drei</Type></Placement></SpoonerPlacements>";

    let err = parse_spooner(xml).expect_err("Parser sollte fehlschlagen");
    assert!(format!("{err:#}").contains("Placement #1"));
}

#[test]
fn test_parse_ymap_document() {
    let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<CMapData>
  <name>test_map</name>
  <streamingExtentsMin x="-10000" y="-10000" z="-1000" />
  <streamingExtentsMax x="10000" y="10000" z="5000" />
  <entitiesExtentsMin x="-1" y="-2" z="-3" />
  <entitiesExtentsMax x="1" y="2" z="3" />
  <entities>
    <Item type="CEntityDef">
      <archetypeName>prop_bench_01a</archetypeName>
      <flags value="32" />
      <position x="1" y="2" z="3" />
      <rotation x="0" y="0" z="-0.5" w="0.5" />
      <lodDist value="100" />
    </Item>
    <Item type="CEntityDef">
      <archetypeName>0x1a2b</archetypeName>
      <position x="0" y="0" z="0" />
      <rotation x="0" y="0" z="0" w="1" />
    </Item>
  </entities>
  <carGenerators>
    <Item>
      <position x="5" y="6" z="7" />
      <orientX value="0" />
      <orientY value="1.5" />
      <perpendicularLength value="1.5" />
      <carModel>adder</carModel>
      <bodyColorRemap1 value="-1" />
    </Item>
  </carGenerators>
</CMapData>
"#;

    let ymap = parse_ymap(xml).expect("Parsing fehlgeschlagen");

    assert_eq!(ymap.name.as_deref(), Some("test_map"));
    assert_eq!(ymap.entity_count(), 2);
    assert_eq!(ymap.car_generator_count(), 1);
    assert_eq!(ymap.entities[0].flags, Some(32));
    assert_eq!(ymap.entities[1].flags, None);
    assert_eq!(
        ymap.entities[0].rotation,
        Quaternion::new(0.0, 0.0, -0.5, 0.5)
    );
    assert_eq!(ymap.entities_extents_max, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(ymap.car_generators[0].car_model, "adder");
    assert_eq!(ymap.car_generators[0].orient_y, 1.5);
}

#[test]
fn test_ymap_entity_without_archetype_fails() {
    let xml = r#"<CMapData><entities><Item><position x="0" y="0" z="0" /></Item></entities></CMapData>"#;

    let err = parse_ymap(xml).expect_err("Parser sollte fehlschlagen");
    assert!(format!("{err:#}").contains("archetypeName"));
}

#[test]
fn test_unclosed_document_is_error() {
    let err = parse_ymap("<CMapData><entities>").expect_err("Parser sollte fehlschlagen");
    assert!(format!("{err:#}").contains("Kein gueltiges YMap-Dokument"));
}

#[test]
fn test_empty_input_is_error() {
    assert!(parse_map_editor("").is_err());
    assert!(parse_spooner("   ").is_err());
}

#[test]
fn test_entity_references_in_text_are_resolved() {
    let xml = r#"<CMapData><name>a &amp; b</name></CMapData>"#;

    let ymap = parse_ymap(xml).expect("Parsing fehlgeschlagen");
    assert_eq!(ymap.name.as_deref(), Some("a & b"));
}

#[test]
fn test_spooner_keeps_raw_model_hash_text() {
    let xml = "<SpoonerPlacements><Placement>\
        <ModelHash> prop_bench_01a </ModelHash><Type>3</Type>\
        </Placement></SpoonerPlacements>";

    let spooner = parse_spooner(xml).expect("Parsing fehlgeschlagen");

    let placement = &spooner.placements[0];
    assert_eq!(placement.model_hash, None);
    assert_eq!(placement.model_hash_text.as_deref(), Some("prop_bench_01a"));
}

#[test]
fn test_cdata_text_is_read() {
    let xml = r#"<CMapData><entities><Item type="CEntityDef">
        <archetypeName><![CDATA[prop_bench_01a]]></archetypeName>
        <position x="0" y="0" z="0" />
        <rotation x="0" y="0" z="0" w="1" />
    </Item></entities></CMapData>"#;

    let ymap = parse_ymap(xml).expect("Parsing fehlgeschlagen");
    assert_eq!(ymap.entities[0].archetype_name, "prop_bench_01a");
}
