use serde_json::{Map, Value, json};

use ab_core::PlaceGraph;

use crate::error::LoaderResult;

/// Write a graph in the definition schema. Loading the result yields an
/// equal graph.
pub fn to_json_value(graph: &PlaceGraph) -> Value {
    let mut places = Map::new();

    for place in graph.places() {
        let mut fields = Map::new();
        if let Some(description) = &place.description {
            fields.insert("description".into(), json!(description));
        }
        if let Some(instructions) = &place.instructions {
            fields.insert("instructions".into(), json!(instructions));
        }
        if place.finished {
            fields.insert("finished".into(), json!(true));
        }
        if !place.choices.is_empty() {
            let choices: Map<String, Value> = place
                .choices
                .iter()
                .map(|(command, actions)| {
                    let actions = actions
                        .iter()
                        .map(|a| {
                            let mut entry = Map::new();
                            entry.insert(a.kind().name().to_string(), json!(a.argument()));
                            Value::Object(entry)
                        })
                        .collect();
                    (command.name().to_string(), Value::Array(actions))
                })
                .collect();
            fields.insert("choices".into(), Value::Object(choices));
        }
        places.insert(place.id.clone(), Value::Object(fields));
    }

    json!({ "places": places })
}

/// Pretty-printed JSON.
pub fn to_json_string(graph: &PlaceGraph) -> LoaderResult<String> {
    Ok(serde_json::to_string_pretty(&to_json_value(graph))?)
}

/// YAML.
pub fn to_yaml_string(graph: &PlaceGraph) -> LoaderResult<String> {
    Ok(serde_yaml::to_string(&to_json_value(graph))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_json, parse_yaml};
    use ab_core::{Action, Command, Place};

    fn sample() -> PlaceGraph {
        PlaceGraph::new([
            Place::new("start")
                .with_description("A dark forest.")
                .with_instructions("Say yes to enter the cabin.")
                .with_choice(
                    Command::Yes,
                    vec![
                        Action::Say("The door creaks.".into()),
                        Action::Play("door".into()),
                        Action::Pause("0.5".into()),
                        Action::Goto("cabin".into()),
                    ],
                )
                .with_choice(Command::Hint, vec![Action::Say("Try the door.".into())]),
            Place::new("cabin").with_description("Warm at last.").finished(),
        ])
    }

    #[test]
    fn json_round_trip() {
        let graph = sample();
        let text = to_json_string(&graph).unwrap();
        assert_eq!(parse_json(&text).unwrap(), graph);
    }

    #[test]
    fn yaml_round_trip() {
        let graph = sample();
        let text = to_yaml_string(&graph).unwrap();
        assert_eq!(parse_yaml(&text).unwrap(), graph);
    }

    #[test]
    fn export_shape() {
        let value = to_json_value(&sample());
        assert_eq!(value["places"]["cabin"]["finished"], json!(true));
        assert_eq!(
            value["places"]["start"]["choices"]["Yes"][3],
            json!({ "Goto": "cabin" })
        );
        assert!(value["places"]["cabin"].get("choices").is_none());
        assert!(value["places"]["cabin"].get("instructions").is_none());
    }

    #[test]
    fn synthesized_start_survives_round_trip() {
        let graph = parse_json(r#"{ "places": { "room1": { "description": "A room." } } }"#).unwrap();
        let reloaded = parse_json(&to_json_string(&graph).unwrap()).unwrap();
        assert_eq!(reloaded, graph);
    }
}
