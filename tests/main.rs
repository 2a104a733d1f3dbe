use assert_matches::assert_matches;
use rstest::rstest;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::path::PathBuf;
use switchbind::derive::*;
use switchbind::{BindError, FieldKind, SwitchBinder, Switches};

#[derive(Debug, Default, PartialEq, Eq, Enumeration)]
enum Color {
    #[default]
    Red,
    Green,
    Blue,
}

#[allow(non_snake_case)]
#[derive(Debug, Default, PartialEq, Switches)]
struct Settings {
    pub Flag: bool,
    pub Count: u32,
    pub Mode: Color,
    pub Tags: Vec<String>,
    pub Name: String,
    pub Ratio: Option<f64>,
    pub Sizes: Box<[u16]>,
    Hidden: u32,
}

#[derive(Debug, Default, PartialEq, Switches)]
struct Renamed {
    #[switch(name = "Verbose")]
    pub verbose: Option<bool>,
    #[switch(name = "Out")]
    pub output: PathBuf,
    #[switch(name = "Queue")]
    pub queue: VecDeque<i32>,
    #[switch(name = "Chain")]
    pub chain: LinkedList<char>,
    #[switch(name = "Unique")]
    pub unique: HashSet<u8>,
    #[switch(name = "Sorted")]
    pub sorted: BTreeSet<String>,
    #[switch(name = "Extra")]
    pub extra: Option<Vec<u8>>,
    #[switch(name = "Strict", scalar)]
    pub strict: bool,
    #[switch(skip)]
    pub skipped: u32,
}

#[derive(Debug, Default, PartialEq, Switches)]
#[switches(prefix = "--")]
struct Dashed {
    pub count: u32,
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Switches)]
struct Colliding {
    pub first: u32,
    #[switch(name = "first")]
    pub second: u32,
}

#[derive(Debug, Default, PartialEq, Eq, Enumeration)]
enum Level {
    #[default]
    Low,
    #[switch(name = "hi")]
    High,
}

#[derive(Debug, Default, Switches)]
struct Leveled {
    pub level: Level,
}

#[derive(Debug, Default, Switches)]
struct Empty {}

fn bind<C: Switches>(tokens: &[&str], destination: &mut C) -> Result<(), BindError> {
    SwitchBinder::default().bind(tokens, destination)
}

#[test]
fn toggle() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    bind(&["/Flag"], &mut settings).unwrap();

    // Verify
    assert_eq!(
        settings,
        Settings {
            Flag: true,
            ..Settings::default()
        }
    );
}

#[test]
fn toggle_repeated() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    bind(&["/Flag", "/Flag"], &mut settings).unwrap();

    // Verify
    assert!(settings.Flag);
}

#[test]
fn toggle_ignores_following_value() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    let error = bind(&["/Flag", "true"], &mut settings).unwrap_err();

    // Verify
    assert_eq!(
        error,
        BindError::InvalidSwitchToken {
            offset: 1,
            token: "true".to_string(),
            prefix: "/".to_string(),
        }
    );
    assert!(settings.Flag);
}

#[test]
fn scalar() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    bind(&["/Count", "42"], &mut settings).unwrap();

    // Verify
    assert_eq!(settings.Count, 42);
}

#[rstest]
#[case("abc")]
#[case("-1")]
#[case("4294967296")]
fn scalar_invalid(#[case] value: &str) {
    // Setup
    let mut settings = Settings::default();

    // Execute
    let error = bind(&["/Count", value], &mut settings).unwrap_err();

    // Verify
    assert_matches!(
        error,
        BindError::ValueConversionError { offset: 1, ref name, ref token, type_name: "u32", .. } if name == "Count" && token == value
    );
    assert_eq!(settings.Count, 0);
}

#[test]
fn scalar_string_verbatim() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    bind(&["/Name", "two words"], &mut settings).unwrap();

    // Verify
    assert_eq!(settings.Name, "two words");
}

#[test]
fn optional() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    bind(&["/Ratio", "0.5"], &mut settings).unwrap();

    // Verify
    assert_eq!(settings.Ratio, Some(0.5));
}

#[rstest]
#[case("Red", Color::Red)]
#[case("Green", Color::Green)]
#[case("Blue", Color::Blue)]
fn enumeration(#[case] value: &str, #[case] expected: Color) {
    // Setup
    let mut settings = Settings::default();
    settings.Mode = Color::Blue;

    // Execute
    bind(&["/Mode", value], &mut settings).unwrap();

    // Verify
    assert_eq!(settings.Mode, expected);
}

#[rstest]
#[case("Purple")]
#[case("green")]
fn enumeration_invalid(#[case] value: &str) {
    // Setup
    let mut settings = Settings::default();

    // Execute
    let error = bind(&["/Mode", value], &mut settings).unwrap_err();

    // Verify
    assert_matches!(
        error,
        BindError::InvalidEnumValue { offset: 1, ref name, ref token, members: &["Red", "Green", "Blue"], .. } if name == "Mode" && token == value
    );
}

#[test]
fn enumeration_renamed() {
    // Setup
    let mut leveled = Leveled::default();

    // Execute
    bind(&["/level", "hi"], &mut leveled).unwrap();
    let error = bind(&["/level", "High"], &mut leveled).unwrap_err();

    // Verify
    assert_eq!(leveled.level, Level::High);
    assert_eq!(
        error.to_string(),
        "Invalid value for switch 'level': 'High' is not a member of main::Level (expected one of: Low, hi)."
    );
}

#[test]
fn collection_accumulates() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    bind(&["/Tags", "a", "b", "/Tags", "c"], &mut settings).unwrap();

    // Verify
    assert_eq!(settings.Tags, vec!["a", "b", "c"]);
}

#[test]
fn collection_keeps_initial() {
    // Setup
    let mut settings = Settings::default();
    settings.Tags = vec!["x".to_string()];
    settings.Sizes = vec![1].into_boxed_slice();

    // Execute
    bind(&["/Tags", "a", "/Sizes", "2", "3", "/Tags", "b"], &mut settings).unwrap();

    // Verify
    assert_eq!(settings.Tags, vec!["x", "a", "b"]);
    assert_eq!(&*settings.Sizes, &[1, 2, 3]);
}

#[test]
fn collection_stops_at_switch() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    bind(&["/Tags", "a", "b", "/Count", "3", "/Flag"], &mut settings).unwrap();

    // Verify
    assert_eq!(settings.Tags, vec!["a", "b"]);
    assert_eq!(settings.Count, 3);
    assert!(settings.Flag);
}

#[test]
fn collection_invalid_element() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    let error = bind(&["/Sizes", "1", "2", "x"], &mut settings).unwrap_err();

    // Verify
    assert_eq!(error.offset(), Some(3));
    assert!(settings.Sizes.is_empty());
}

#[test]
fn unknown_switch() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    let error = bind(&["/Bogus", "x"], &mut settings).unwrap_err();

    // Verify
    assert_eq!(
        error,
        BindError::UnknownSwitch {
            offset: 0,
            name: "Bogus".to_string(),
        }
    );
    assert_eq!(settings, Settings::default());
}

#[rstest]
#[case(vec!["/flag"], "flag")]
#[case(vec!["/FLAG"], "FLAG")]
#[case(vec!["/Hidden", "1"], "Hidden")]
#[case(vec!["/"], "")]
fn unknown_switch_names(#[case] tokens: Vec<&str>, #[case] expected: &str) {
    // Setup
    let mut settings = Settings::default();

    // Execute
    let error = bind(&tokens, &mut settings).unwrap_err();

    // Verify
    assert_matches!(error, BindError::UnknownSwitch { offset: 0, ref name } if name == expected);
}

#[test]
fn missing_value() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    let error = bind(&["/Count", "/Tags", "x"], &mut settings).unwrap_err();

    // Verify
    assert_eq!(
        error,
        BindError::MissingSwitchValue {
            offset: 0,
            name: "Count".to_string(),
            found: "/Tags".to_string(),
        }
    );
    assert!(settings.Tags.is_empty());
}

#[test]
fn missing_value_collection() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    let error = bind(&["/Flag", "/Tags", "/Count", "1"], &mut settings).unwrap_err();

    // Verify
    assert_matches!(error, BindError::MissingSwitchValue { offset: 1, .. });
    // Switches preceding the failure remain bound.
    assert!(settings.Flag);
}

#[rstest]
#[case(vec!["/Count"])]
#[case(vec!["/Flag", "/Tags"])]
#[case(vec!["/Tags", "a", "/Ratio"])]
fn trailing_value_switch(#[case] tokens: Vec<&str>) {
    // Setup
    let mut settings = Settings::default();
    settings.Count = 5;

    // Execute
    bind(&tokens, &mut settings).unwrap();

    // Verify
    assert_eq!(settings.Count, 5);
    assert_eq!(settings.Ratio, None);
}

#[test]
fn leading_value() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    let error = bind(&["42", "/Count", "1"], &mut settings).unwrap_err();

    // Verify
    assert_matches!(error, BindError::InvalidSwitchToken { offset: 0, .. });
    assert_eq!(settings.Count, 0);
}

#[test]
fn scalar_takes_one_value() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    let error = bind(&["/Count", "1", "2"], &mut settings).unwrap_err();

    // Verify
    assert_matches!(error, BindError::InvalidSwitchToken { offset: 2, ref token, .. } if token == "2");
    assert_eq!(settings.Count, 1);
}

#[test]
fn empty_tokens() {
    // Setup
    let mut settings = Settings::default();

    // Execute
    bind(&[], &mut settings).unwrap();

    // Verify
    assert_eq!(settings, Settings::default());
}

#[test]
fn custom_prefix() {
    // Setup
    let binder = SwitchBinder::with_prefix("--").unwrap();
    let mut default_prefixed = Settings::default();
    let mut dash_prefixed = Settings::default();

    // Execute
    bind(&["/Count", "7"], &mut default_prefixed).unwrap();
    binder.bind(&["--Count", "7"], &mut dash_prefixed).unwrap();

    // Verify
    assert_eq!(dash_prefixed, default_prefixed);
    assert_eq!(dash_prefixed.Count, 7);
}

#[test]
fn custom_prefix_rejects_default() {
    // Setup
    let binder = SwitchBinder::with_prefix("--").unwrap();
    let mut settings = Settings::default();

    // Execute
    let error = binder.bind(&["/Count", "7"], &mut settings).unwrap_err();

    // Verify
    assert_eq!(
        error.to_string(),
        "Invalid switch '/Count': expected a switch starting with '--'."
    );
}

#[test]
fn empty_prefix() {
    let error = SwitchBinder::with_prefix("").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Config error: switch prefix must not be empty."
    );
}

#[test]
fn renamed() {
    // Setup
    let mut renamed = Renamed::default();

    // Execute
    bind(
        &[
            "/Verbose", "/Out", "out.txt", "/Queue", "-1", "2", "/Chain", "x", "y", "/Unique", "1",
            "1", "2", "/Sorted", "b", "a", "/Extra", "9", "/Strict", "true",
        ],
        &mut renamed,
    )
    .unwrap();

    // Verify
    assert_eq!(
        renamed,
        Renamed {
            verbose: Some(true),
            output: PathBuf::from("out.txt"),
            queue: VecDeque::from([-1, 2]),
            chain: LinkedList::from(['x', 'y']),
            unique: HashSet::from([1, 2]),
            sorted: BTreeSet::from(["a".to_string(), "b".to_string()]),
            extra: Some(vec![9]),
            strict: true,
            skipped: 0,
        }
    );
}

#[test]
fn renamed_hides_field_name() {
    // Setup
    let mut renamed = Renamed::default();

    // Execute
    let verbose = bind(&["/verbose"], &mut renamed).unwrap_err();
    let skipped = bind(&["/skipped", "1"], &mut renamed).unwrap_err();

    // Verify
    assert_matches!(verbose, BindError::UnknownSwitch { .. });
    assert_matches!(skipped, BindError::UnknownSwitch { .. });
}

#[test]
fn derived_prefix() {
    // Execute
    let dashed = Dashed::from_tokens(&["--tags", "a", "b", "--count", "3"]).unwrap();

    // Verify
    assert_eq!(Dashed::PREFIX, "--");
    assert_eq!(
        dashed,
        Dashed {
            count: 3,
            tags: vec!["a".to_string(), "b".to_string()],
        }
    );
}

#[test]
fn duplicate_field_name() {
    // Setup
    let mut colliding = Colliding::default();

    // Execute
    let error = bind(&["/first", "1"], &mut colliding).unwrap_err();

    // Verify
    assert_eq!(
        error,
        BindError::DuplicateFieldName {
            name: "first".to_string(),
        }
    );
    assert_eq!(colliding.first, 0);
}

#[test]
fn derived_catalog() {
    // Execute
    let catalog = Settings::catalog().unwrap();

    // Verify
    assert_eq!(
        catalog.names(),
        vec!["Count", "Flag", "Mode", "Name", "Ratio", "Sizes", "Tags"]
    );
    assert_eq!(catalog.get("Flag").unwrap().kind(), FieldKind::Boolean);
    assert_eq!(catalog.get("Mode").unwrap().kind(), FieldKind::Scalar);
    assert_eq!(catalog.get("Ratio").unwrap().kind(), FieldKind::Scalar);
    assert_eq!(
        catalog.get("Sizes").unwrap().kind(),
        FieldKind::Collection { element: "u16" }
    );
    assert!(catalog.get("Hidden").is_none());
}

#[test]
fn derived_catalog_empty() {
    let catalog = Empty::catalog().unwrap();
    assert!(catalog.is_empty());

    let error = Empty::from_tokens(&["/anything"]).unwrap_err();
    assert_matches!(error, BindError::UnknownSwitch { .. });
}
