use nestini::{
    container, deserialize_file, guess_type, parse_container, serialize_container, serialize_file,
    Entry, Error, IniFile, ParseOptions, Section, Value,
};

fn no_dups() -> Vec<String> {
    Vec::new()
}

#[test]
fn test_new_file_and_lookup() {
    let mut file = IniFile::new(no_dups());
    file.add_key_to_section("default", "key", "value");

    let entry = file.find_key_in_section("default", "key").unwrap();
    assert_eq!(entry.value.as_str().unwrap(), "value");
}

#[test]
fn test_serialize_and_deserialize_file() {
    let data = "[default]\nkey=value\nkey2=(key=(bob=bab),wow=22.1)";

    let file = deserialize_file(data, no_dups()).unwrap();
    assert_eq!(serialize_file(&file).trim_end(), data);
}

#[test]
fn test_create_section() {
    let expected = "[test]\ntest=test\ntest2=test2";

    let mut section = Section::new("test");
    section.add_key("test", "test");
    section.add_parsed_key("test2=test2").unwrap();

    assert_eq!(section.to_string().trim_end(), expected);
}

#[test]
fn test_nested_container_access() {
    let data = "[default]\nkey=value\nkey2=(key=(bob=bab),wow=22.1)";
    let file = deserialize_file(data, no_dups()).unwrap();

    let section = file.get_section("default").unwrap();
    let outer = section.get_key("key2").unwrap().value.as_container().unwrap();
    let inner = outer.find_key("key").unwrap().value.as_container().unwrap();

    assert_eq!(inner.find_key("bob").unwrap().value.as_str().unwrap(), "bab");
    assert_eq!(outer.find_key("wow").unwrap().value.as_float().unwrap(), 22.1);
}

#[test]
fn test_duplicate_keys_workflow() {
    // A section with repeated keys, as game configs produce them
    let data = "[bob]\ntest=1\ntest2=1\ntest2=2";
    let mut file = deserialize_file(data, ["test2"]).unwrap();

    let section = file.get_section_mut("bob").unwrap();
    assert_eq!(section.check_for_multiple_keys("test2"), 2);

    // Bump every duplicate in place, then overwrite the whole set
    let bumped: Vec<Value> = section
        .get_multiple_keys("test2")
        .iter()
        .map(|e| Value::Int(e.value.as_int().unwrap() + 1))
        .collect();
    section.overwrite_key("test2", bumped).unwrap();

    let values: Vec<i64> = section
        .get_multiple_keys("test2")
        .iter()
        .map(|e| e.value.as_int().unwrap())
        .collect();
    assert_eq!(values, vec![2, 3]);

    assert_eq!(
        serialize_file(&file),
        "[bob]\ntest=1\ntest2=2\ntest2=3\n"
    );
}

#[test]
fn test_safely_add_key_policy() {
    let mut file = IniFile::new(no_dups());
    file.safely_add_key_to_section("s", "k", 1);
    file.safely_add_key_to_section("s", "k", 2);

    let section = file.get_section("s").unwrap();
    assert_eq!(section.check_for_multiple_keys("k"), 1);
    assert_eq!(section.get_key("k").unwrap().value, Value::Int(2));

    let mut file = IniFile::new(["k"]);
    file.safely_add_key_to_section("s", "k", 1);
    file.safely_add_key_to_section("s", "k", 2);

    let section = file.get_section("s").unwrap();
    let values: Vec<i64> = section
        .get_multiple_keys("k")
        .iter()
        .map(|e| e.value.as_int().unwrap())
        .collect();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_add_container_value_then_read_back() {
    let mut file = IniFile::new(no_dups());
    let section = file.get_or_create_section("bob");

    section.add_or_replace_key("test3", guess_type("(Bob=1,Bob2=2)").unwrap());

    let entry = section.get_key("test3").unwrap();
    let container = entry.value.as_container().unwrap();
    assert_eq!(container.find_key("Bob2").unwrap().value.as_int().unwrap(), 2);

    assert_eq!(serialize_file(&file), "[bob]\ntest3=(Bob=1,Bob2=2)\n");
}

#[test]
fn test_programmatic_build_round_trip() {
    let crate_items = container! {
        "SupplyCrateClassString" => "\"SupplyCrate_Cave_QualityTier1\"",
        "MinItemSets" => 0,
        "MaxItemSets" => 1,
        "bSetsRandomWithoutReplacement" => true,
        "ItemSets" => container! {
            "SetName" => "\"Carcha Saddle\"",
            "SetWeight" => 0.015,
        },
    };

    let text = serialize_container(&crate_items);
    let parsed = parse_container(&text).unwrap();
    assert_eq!(parsed, crate_items);
}

#[test]
fn test_multiline_container_round_trips_onto_one_line() {
    let data = "[s]\nItemSets=(SetName=Saddle,\nSetWeight=0.015)\n";
    let file = deserialize_file(data, no_dups()).unwrap();

    assert_eq!(
        serialize_file(&file),
        "[s]\nItemSets=(SetName=Saddle,SetWeight=0.015)\n"
    );
}

#[test]
fn test_error_cases() {
    assert_eq!(parse_container("").unwrap_err(), Error::EmptyInput);
    assert_eq!(parse_container(" \t ").unwrap_err(), Error::EmptyInput);

    assert!(matches!(
        parse_container("a=1,b").unwrap_err(),
        Error::MalformedField { .. }
    ));

    let value = guess_type("hello").unwrap();
    assert!(matches!(
        value.as_int().unwrap_err(),
        Error::TypeMismatch { .. }
    ));

    let mut section = Section::new("s");
    assert_eq!(
        section.overwrite_key("k", Vec::new()).unwrap_err(),
        Error::NoValuesProvided
    );

    let file = IniFile::new(no_dups());
    assert_eq!(
        file.find_key_in_section("nope", "k").unwrap_err(),
        Error::SectionNotFound("nope".to_string())
    );
}

#[test]
fn test_depth_limit_is_configurable() {
    let options = ParseOptions::new().with_max_depth(2);
    let err = nestini::parse_container_with_options("a=(b=(c=1))", &options).unwrap_err();
    assert_eq!(err, Error::DepthExceeded { limit: 2 });
}

#[test]
fn test_entry_rendering() {
    let entry = Entry::new("EngramHidden", true);
    assert_eq!(entry.to_line(), "EngramHidden=true");

    let entry = Entry::new("cost", 0.5);
    assert_eq!(entry.to_line(), "cost=0.5");
}

#[test]
fn test_section_header_rendering() {
    let section = Section::new("ServerSettings");
    assert_eq!(section.header(), "[ServerSettings]");
}

#[test]
fn test_realistic_game_config() {
    let data = concat!(
        "[/script/shootergame.shootergamemode]\n",
        "bAllowUnlimitedRespecs=True\n",
        "GlobalSpoilingTimeMultiplier=1.0\n",
        "ConfigOverrideItemMaxQuantity=(ItemClassString=\"PrimalItemResource_Stone_C\",Quantity=(MaxItemQuantity=500,bIgnoreMultiplier=True))\n",
    );

    let file = deserialize_file(data, no_dups()).unwrap();
    let section = file.get_section("/script/shootergame.shootergamemode").unwrap();

    assert_eq!(
        section.get_key("bAllowUnlimitedRespecs").unwrap().value,
        Value::Bool(true)
    );
    assert_eq!(
        section
            .get_key("GlobalSpoilingTimeMultiplier")
            .unwrap()
            .value,
        Value::Float(1.0)
    );

    let over = section
        .get_key("ConfigOverrideItemMaxQuantity")
        .unwrap()
        .value
        .as_container()
        .unwrap();
    let quantity = over.find_key("Quantity").unwrap().value.as_container().unwrap();
    assert_eq!(
        quantity.find_key("MaxItemQuantity").unwrap().value,
        Value::Int(500)
    );

    // Booleans canonicalize to lowercase; floats keep their point
    assert_eq!(
        serialize_file(&file),
        concat!(
            "[/script/shootergame.shootergamemode]\n",
            "bAllowUnlimitedRespecs=true\n",
            "GlobalSpoilingTimeMultiplier=1.0\n",
            "ConfigOverrideItemMaxQuantity=(ItemClassString=\"PrimalItemResource_Stone_C\",Quantity=(MaxItemQuantity=500,bIgnoreMultiplier=true))\n",
        )
    );
}
