use plugin_version::PluginVersion;

#[test]
fn build_omitted_when_absent() {
    let json = serde_json::to_string(&PluginVersion::new(2, 1)).unwrap();
    assert_eq!(json, r#"{"major":2,"minor":1}"#);

    let json = serde_json::to_string(&PluginVersion::with_build(2, 1, 0)).unwrap();
    assert_eq!(json, r#"{"major":2,"minor":1,"build":0}"#);
}

#[test]
fn missing_build_reads_as_none() {
    let v: PluginVersion = serde_json::from_str(r#"{"major":2,"minor":1}"#).unwrap();
    assert_eq!(v, PluginVersion::new(2, 1));
    assert_eq!(v.build(), None);

    let v: PluginVersion = serde_json::from_str(r#"{"minor":4,"build":9,"major":3}"#).unwrap();
    assert_eq!(v.to_string(), "v3.4.9");
}

#[test]
fn major_and_minor_required() {
    assert!(serde_json::from_str::<PluginVersion>(r#"{"major":2}"#).is_err());
    assert!(serde_json::from_str::<PluginVersion>(r#"{"minor":2,"build":1}"#).is_err());
    assert!(serde_json::from_str::<PluginVersion>(r#"{"major":-1,"minor":0}"#).is_err());
}
