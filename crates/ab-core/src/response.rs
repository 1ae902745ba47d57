//! Directives produced by the engine for front ends to render.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One turn's output.
///
/// A turn that produces a single directive returns it directly; any other
/// count is wrapped in [`Response::Multiple`]. Use [`Response::directives`]
/// to treat both shapes the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Response {
    /// Speak text.
    Say(String),
    /// Wait before continuing.
    Delay(Duration),
    /// Play the sound with this id.
    Play(String),
    /// The command has no meaning at the current place.
    NotUnderstood,
    /// The session is over.
    Bye,
    /// The player reached an ending.
    Finished,
    /// Several directives, in order.
    Multiple(Vec<Response>),
}

impl Response {
    /// Collapse a list: exactly one directive is returned as is, anything
    /// else becomes `Multiple`.
    pub fn from_list(mut responses: Vec<Response>) -> Self {
        if responses.len() == 1 {
            responses.remove(0)
        } else {
            Self::Multiple(responses)
        }
    }

    /// The leaf directives in order, with nested `Multiple`s flattened.
    pub fn directives(&self) -> Vec<&Response> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    /// Consume into the flat list of leaf directives.
    pub fn into_directives(self) -> Vec<Response> {
        match self {
            Self::Multiple(list) => list.into_iter().flat_map(Self::into_directives).collect(),
            other => vec![other],
        }
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a Response>) {
        match self {
            Self::Multiple(list) => list.iter().for_each(|r| r.collect_into(out)),
            other => out.push(other),
        }
    }

    /// Whether any directive is `Bye`.
    pub fn is_bye(&self) -> bool {
        self.directives().iter().any(|r| matches!(r, Self::Bye))
    }

    /// Whether any directive is `Finished`.
    pub fn is_finished(&self) -> bool {
        self.directives().iter().any(|r| matches!(r, Self::Finished))
    }

    /// The text of every `Say` directive, in order.
    pub fn said(&self) -> Vec<&str> {
        self.directives()
            .into_iter()
            .filter_map(|r| match r {
                Self::Say(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_is_collapsed() {
        let r = Response::from_list(vec![Response::Bye]);
        assert_eq!(r, Response::Bye);
    }

    #[test]
    fn many_are_wrapped() {
        let r = Response::from_list(vec![Response::Say("a".into()), Response::Bye]);
        assert_eq!(
            r,
            Response::Multiple(vec![Response::Say("a".into()), Response::Bye])
        );
    }

    #[test]
    fn empty_is_empty_multiple() {
        let r = Response::from_list(vec![]);
        assert_eq!(r, Response::Multiple(vec![]));
        assert!(r.directives().is_empty());
    }

    #[test]
    fn directives_flatten_nesting() {
        let r = Response::Multiple(vec![
            Response::Say("a".into()),
            Response::Multiple(vec![Response::Delay(Duration::from_secs(1)), Response::Finished]),
        ]);
        assert_eq!(
            r.directives(),
            vec![
                &Response::Say("a".into()),
                &Response::Delay(Duration::from_secs(1)),
                &Response::Finished
            ]
        );
        assert!(r.is_finished());
        assert!(!r.is_bye());
        assert_eq!(r.clone().into_directives().len(), 3);
    }

    #[test]
    fn said_collects_text() {
        let r = Response::Multiple(vec![
            Response::Say("one".into()),
            Response::Play("bell".into()),
            Response::Say("two".into()),
        ]);
        assert_eq!(r.said(), vec!["one", "two"]);
        assert_eq!(Response::Say("solo".into()).said(), vec!["solo"]);
    }
}
