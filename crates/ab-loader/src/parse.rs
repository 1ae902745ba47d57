use serde_json::{Map, Value};

use ab_core::{Action, ActionKind, Command, Place, PlaceGraph, START_PLACE_ID};

use crate::error::{LoaderError, LoaderResult};

/// Description of the placeholder start place.
pub const DEFAULT_START_DESCRIPTION: &str =
    "No start place is defined for this adventure. Please check your adventure file and try again.";

/// Instructions of the placeholder start place.
pub const DEFAULT_START_INSTRUCTIONS: &str = "Please check your adventure file and try again.";

/// Validate a definition already deserialized into the JSON value model.
pub fn parse_value(root: &Value) -> LoaderResult<PlaceGraph> {
    let root = expect_object(root, "")?;

    let mut places = Vec::new();
    if let Some(entries) = optional_object(root, "", "places")? {
        for (id, value) in entries {
            places.push(parse_place(id, value, &child("places", id))?);
        }
    }

    if !places.iter().any(|p| p.id == START_PLACE_ID) {
        tracing::warn!("adventure has no start place; using a placeholder");
        places.push(default_start_place());
    }

    tracing::debug!(places = places.len(), "parsed adventure");
    Ok(PlaceGraph::new(places))
}

/// The place used when an adventure does not define `start`.
pub fn default_start_place() -> Place {
    Place::new(START_PLACE_ID)
        .with_description(DEFAULT_START_DESCRIPTION)
        .with_instructions(DEFAULT_START_INSTRUCTIONS)
}

fn parse_place(id: &str, value: &Value, path: &str) -> LoaderResult<Place> {
    let fields = expect_object(value, path)?;

    let mut place = Place::new(id);
    place.description = optional_string(fields, path, "description")?;
    place.instructions = optional_string(fields, path, "instructions")?;
    place.finished = optional_bool(fields, path, "finished")?.unwrap_or(false);

    if let Some(choices) = optional_object(fields, path, "choices")? {
        let choices_path = child(path, "choices");
        for (name, value) in choices {
            let choice_path = child(&choices_path, name);
            let command = Command::parse(name).ok_or_else(|| LoaderError::InvalidCommandName {
                name: name.clone(),
                path: choice_path.clone(),
            })?;
            let actions = parse_actions(value, &choice_path)?;
            if place.choices.insert(command, actions).is_some() {
                tracing::warn!(place = id, %command, key = %name, "choice defined twice; keeping the last one");
            }
        }
    }

    Ok(place)
}

fn parse_actions(value: &Value, path: &str) -> LoaderResult<Vec<Action>> {
    let Value::Array(items) = value else {
        return Err(malformed(path, "an array", value));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_action(item, &format!("{path}[{index}]")))
        .collect()
}

fn parse_action(item: &Value, path: &str) -> LoaderResult<Action> {
    let Value::Object(entry) = item else {
        return Err(LoaderError::InvalidActionShape {
            path: path.to_string(),
            found: type_name(item).to_string(),
        });
    };

    let mut keys = entry.iter();
    let (Some((name, argument)), None) = (keys.next(), keys.next()) else {
        return Err(LoaderError::InvalidActionShape {
            path: path.to_string(),
            found: format!("an object with {} keys", entry.len()),
        });
    };

    let kind = ActionKind::parse(name).ok_or_else(|| LoaderError::InvalidActionName {
        name: name.clone(),
        path: child(path, name),
    })?;

    // YAML turns `Pause: 2.5` into a number.
    let argument = match argument {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(LoaderError::InvalidActionShape {
                path: child(path, name),
                found: type_name(other).to_string(),
            });
        }
    };

    Ok(Action::new(kind, argument))
}

fn expect_object<'a>(value: &'a Value, path: &str) -> LoaderResult<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(malformed(path, "an object", other)),
    }
}

fn optional_object<'a>(
    parent: &'a Map<String, Value>,
    path: &str,
    key: &str,
) -> LoaderResult<Option<&'a Map<String, Value>>> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => expect_object(value, &child(path, key)).map(Some),
    }
}

fn optional_string(
    parent: &Map<String, Value>,
    path: &str,
    key: &str,
) -> LoaderResult<Option<String>> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(malformed(&child(path, key), "a string", other)),
    }
}

fn optional_bool(parent: &Map<String, Value>, path: &str, key: &str) -> LoaderResult<Option<bool>> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Some(Value::String(s)) if s.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Some(other) => Err(malformed(&child(path, key), "a boolean", other)),
    }
}

fn malformed(path: &str, expected: &'static str, found: &Value) -> LoaderError {
    LoaderError::MalformedStructure {
        path: display_path(path),
        expected,
        found: type_name(found).to_string(),
    }
}

fn child(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "(root)".to_string()
    } else {
        path.to_string()
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
