//! Adventure definition loader for AdventureBot.
//!
//! Reads the `places` schema from JSON or YAML into an
//! [`ab_core::PlaceGraph`], validating command and action names along the
//! way. YAML is first deserialized into the JSON value model so both formats
//! go through the same validator. A graph that does not define a `start`
//! place gets a placeholder one.

/// Error types for the loader.
pub mod error;
/// Writing a graph back out in the same schema.
pub mod export;
/// Source format detection.
pub mod format;
/// Validation of the definition schema.
pub mod parse;

use std::path::Path;

pub use error::{LoaderError, LoaderResult};
pub use export::{to_json_string, to_json_value, to_yaml_string};
pub use format::Format;
pub use parse::{DEFAULT_START_DESCRIPTION, DEFAULT_START_INSTRUCTIONS, parse_value};

use ab_core::PlaceGraph;

/// Parse adventure source text in the given format.
pub fn parse(source: &str, format: Format) -> LoaderResult<PlaceGraph> {
    match format {
        Format::Json => parse_json(source),
        Format::Yaml => parse_yaml(source),
    }
}

/// Parse a JSON adventure.
pub fn parse_json(source: &str) -> LoaderResult<PlaceGraph> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    parse_value(&value)
}

/// Parse a YAML adventure.
pub fn parse_yaml(source: &str) -> LoaderResult<PlaceGraph> {
    let value: serde_json::Value = serde_yaml::from_str(source)?;
    parse_value(&value)
}

/// Read and parse an adventure file. The format is taken from the file
/// extension.
pub fn load_from(path: impl AsRef<Path>) -> LoaderResult<PlaceGraph> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let source = std::fs::read_to_string(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), %format, "loading adventure");
    parse(&source, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADVENTURE_JSON: &str = r#"{
        "places": {
            "start": {
                "description": "You stand at a crossroads.",
                "instructions": "Say one to go north.",
                "choices": {
                    "OptionOne": [{ "Goto": "north" }]
                }
            },
            "north": {
                "description": "A quiet meadow.",
                "finished": true
            }
        }
    }"#;

    const ADVENTURE_YAML: &str = r#"
places:
  start:
    description: You stand at a crossroads.
    instructions: Say one to go north.
    choices:
      OptionOne:
        - Goto: north
  north:
    description: A quiet meadow.
    finished: true
"#;

    #[test]
    fn json_and_yaml_agree() {
        let from_json = parse(ADVENTURE_JSON, Format::Json).unwrap();
        let from_yaml = parse(ADVENTURE_YAML, Format::Yaml).unwrap();
        assert_eq!(from_json, from_yaml);
        assert_eq!(from_json.len(), 2);
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = parse("{ not json", Format::Json).unwrap_err();
        assert!(matches!(err, LoaderError::Json(_)));
    }

    #[test]
    fn invalid_yaml_is_reported() {
        let err = parse("places: [unclosed", Format::Yaml).unwrap_err();
        assert!(matches!(err, LoaderError::Yaml(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("adventure.YML");
        std::fs::write(&path, ADVENTURE_YAML).unwrap();

        let graph = load_from(&path).unwrap();
        assert!(graph.get("north").is_some_and(|p| p.finished));
    }

    #[test]
    fn load_from_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_from(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
    }

    #[test]
    fn load_from_unsupported_extension() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("adventure.txt");
        std::fs::write(&path, ADVENTURE_JSON).unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, LoaderError::UnsupportedFormat(_)));
    }
}
