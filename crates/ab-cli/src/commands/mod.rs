pub mod check;
pub mod export;
pub mod play;
pub mod run;

use std::path::Path;

use ab_core::PlaceGraph;
use miette::Report;

/// Load an adventure file and print any load error as a diagnostic.
fn load_adventure(path: &Path) -> Result<PlaceGraph, String> {
    match ab_loader::load_from(path) {
        Ok(graph) => Ok(graph),
        Err(err) => {
            eprintln!("{:?}", Report::new(err));
            Err("failed to load adventure".into())
        }
    }
}
