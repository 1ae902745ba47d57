//! Push-style traversal of responses.
//!
//! The engine always returns a complete [`Response`]. Front ends that would
//! rather receive one callback per directive implement [`ResponseVisitor`]
//! and hand the response to [`visit`].

use std::time::Duration;

use ab_core::Response;

/// Receives directives one at a time, in order.
pub trait ResponseVisitor {
    /// Error returned by the callbacks; stops the traversal.
    type Error;

    /// Speak text.
    fn say(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Wait.
    fn delay(&mut self, duration: Duration) -> Result<(), Self::Error>;

    /// Play a sound by id.
    fn play(&mut self, sound: &str) -> Result<(), Self::Error>;

    /// Tell the player the command was not understood.
    fn not_understood(&mut self) -> Result<(), Self::Error>;

    /// End the session.
    fn bye(&mut self) -> Result<(), Self::Error>;

    /// The player reached an ending.
    fn finished(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walk `response` in order, flattening nested lists.
pub fn visit<V>(response: &Response, visitor: &mut V) -> Result<(), V::Error>
where
    V: ResponseVisitor + ?Sized,
{
    match response {
        Response::Say(text) => visitor.say(text),
        Response::Delay(duration) => visitor.delay(*duration),
        Response::Play(sound) => visitor.play(sound),
        Response::NotUnderstood => visitor.not_understood(),
        Response::Bye => visitor.bye(),
        Response::Finished => visitor.finished(),
        Response::Multiple(list) => list.iter().try_for_each(|r| visit(r, visitor)),
    }
}
