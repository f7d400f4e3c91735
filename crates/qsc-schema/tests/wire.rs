mod common;

use qsc_schema::wire::{deserialize_program, from_bytes, serialize_program, to_bytes};
use qsc_schema::{CodecConfig, CodecError, EncodeOptions, decode_program, encode_program, schema};
use serde_json::json;

#[test]
fn test_serialize_matches_direct_codec() -> anyhow::Result<()> {
    let program = common::program();

    let bytes = serialize_program(&program, &EncodeOptions::default())?;
    assert_eq!(from_bytes(&bytes)?, encode_program(&program)?);
    assert_eq!(deserialize_program(&bytes)?, program);

    Ok(())
}

#[test]
fn test_config_drives_profile() -> anyhow::Result<()> {
    let config = CodecConfig::from_toml_str("[codec]\nprofile = \"minimal\"\n")?;
    let bytes = serialize_program(&common::program(), &config.encode_options())?;

    let value: serde_json::Value = serde_json::from_slice(&bytes)?;
    let callable = &value["namespaces"][0]["elements"][1]["callable"];
    assert_eq!(callable["fullName"]["name"], "B");
    assert!(callable.get("signature").is_none());
    assert!(callable.get("argumentTuple").is_none());

    Ok(())
}

#[test]
fn test_absent_location_is_explicit_null() -> anyhow::Result<()> {
    let bytes = to_bytes(&encode_program(&common::program())?)?;
    let value: serde_json::Value = serde_json::from_slice(&bytes)?;

    let elements = &value["namespaces"][0]["elements"];
    assert!(elements[3]["callable"]["location"].is_null());
    assert!(elements[3]["callable"].get("location").is_some());
    assert_eq!(elements[1]["callable"]["location"]["offset"]["line"], 8);

    Ok(())
}

#[test]
fn test_documentation_survives_bytes() -> anyhow::Result<()> {
    let decoded = deserialize_program(&serialize_program(
        &common::program(),
        &EncodeOptions::default(),
    )?)?;

    let documentation = &decoded.namespaces[0].documentation;
    let files: Vec<_> = documentation.keys().map(String::as_str).collect();
    assert_eq!(files, vec!["teleport.qs", "message.qs"]);
    assert_eq!(documentation["teleport.qs"].len(), 2);
    assert_eq!(documentation["teleport.qs"][1], vec!["See also Measure."]);

    Ok(())
}

#[test]
fn test_unknown_type_code_is_unsupported() {
    let bytes = serde_json::to_vec(&json!({
        "namespaces": [{
            "name": "Demo",
            "elements": [{
                "kind": 1,
                "customType": {
                    "fullName": { "namespace": "Demo", "name": "Future" },
                    "sourceFile": "future.qs",
                    "location": null,
                    "type": { "typeKind": { "kind": 99 } },
                    "documentation": [],
                    "comments": { "openingComments": [], "closingComments": [] }
                }
            }],
            "documentation": []
        }]
    }))
    .unwrap();

    let program = from_bytes(&bytes).unwrap();
    let custom_type = program.namespaces[0].elements[0].custom_type.as_ref().unwrap();
    assert_eq!(
        custom_type.underlying_type.as_ref().unwrap().type_kind.kind,
        schema::TypeKind::Unrecognized(99)
    );

    let err = decode_program(&program).unwrap_err();
    assert!(matches!(
        &err,
        CodecError::UnsupportedVariant { kind: "TypeKind", variant } if variant == "Unrecognized(99)"
    ));
}

#[test]
fn test_unknown_element_code_is_unsupported() {
    let bytes = br#"{"namespaces":[{"name":"Demo","elements":[{"kind":7}],"documentation":[]}]}"#;
    let err = deserialize_program(bytes).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported NamespaceElement variant: Unrecognized(7)"
    );
}

#[test]
fn test_published_schema_describes_tags_as_integers() {
    let value = serde_json::to_value(qsc_schema::wire::json_schema()).unwrap();
    let text = value.to_string();
    assert!(text.contains("NamespaceElementKind"));
    assert!(text.contains("\"integer\""));
}
