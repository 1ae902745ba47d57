use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::place::Place;

/// Id of the place every new session starts in.
pub const START_PLACE_ID: &str = "start";

/// The places of an adventure, keyed by id.
///
/// A graph is never modified after construction, so a single instance can be
/// shared read-only between any number of sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceGraph {
    places: BTreeMap<String, Place>,
}

impl PlaceGraph {
    /// Build a graph from places. A later place replaces an earlier one with
    /// the same id.
    pub fn new(places: impl IntoIterator<Item = Place>) -> Self {
        Self {
            places: places.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    /// Look up a place by id.
    pub fn get(&self, id: &str) -> Option<&Place> {
        self.places.get(id)
    }

    /// Whether a place with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.places.contains_key(id)
    }

    /// The start place, if the graph has one.
    pub fn start(&self) -> Option<&Place> {
        self.get(START_PLACE_ID)
    }

    /// All places, ordered by id.
    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.places.values()
    }

    /// All place ids, ordered.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.places.keys().map(String::as_str)
    }

    /// Number of places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the graph has no places.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        let graph = PlaceGraph::new([Place::new("start"), Place::new("room1")]);
        assert_eq!(graph.len(), 2);
        assert!(graph.contains("room1"));
        assert!(!graph.contains("room2"));
        assert_eq!(graph.start().map(|p| p.id.as_str()), Some("start"));
        assert_eq!(graph.ids().collect::<Vec<_>>(), vec!["room1", "start"]);
    }

    #[test]
    fn later_place_wins() {
        let graph = PlaceGraph::new([
            Place::new("start").with_description("first"),
            Place::new("start").with_description("second"),
        ]);
        assert_eq!(graph.len(), 1);
        assert_eq!(
            graph.start().and_then(|p| p.description.as_deref()),
            Some("second")
        );
    }

    #[test]
    fn empty_graph_has_no_start() {
        let graph = PlaceGraph::default();
        assert!(graph.is_empty());
        assert!(graph.start().is_none());
    }

    #[test]
    fn graph_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlaceGraph>();
    }
}
