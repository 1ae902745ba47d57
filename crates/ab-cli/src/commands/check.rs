use std::path::Path;

use ab_core::{Action, PlaceGraph};
use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path) -> Result<(), String> {
    let graph = super::load_adventure(file)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Place", "Finished", "Choices"]);

    for place in graph.places() {
        let choices = if place.choices.is_empty() {
            "-".to_string()
        } else {
            place
                .choices
                .keys()
                .map(|c| c.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let finished = if place.finished { "yes" } else { "" };
        table.add_row(vec![place.id.as_str(), finished, choices.as_str()]);
    }

    println!("{table}");
    println!();

    let dangling = dangling_gotos(&graph);
    for (from, to) in &dangling {
        println!("  warning: '{from}' goes to unknown place '{to}'");
    }

    let endings = graph.places().filter(|p| p.finished).count();
    println!(
        "  {} places, {} ending{}, {} dangling goto{}",
        graph.len(),
        endings,
        if endings == 1 { "" } else { "s" },
        dangling.len(),
        if dangling.len() == 1 { "" } else { "s" },
    );

    Ok(())
}

/// Goto targets that name no place, as `(from, to)` pairs.
fn dangling_gotos(graph: &PlaceGraph) -> Vec<(&str, &str)> {
    graph
        .places()
        .flat_map(|place| {
            place.choices.values().flatten().filter_map(move |action| match action {
                Action::Goto(target) if !graph.contains(target) => {
                    Some((place.id.as_str(), target.as_str()))
                }
                _ => None,
            })
        })
        .collect()
}
