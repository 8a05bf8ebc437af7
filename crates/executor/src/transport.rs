//! Collaborator seams for sending requests.
//!
//! The executor core does no networking. Whatever actually talks to the
//! server implements [`Transport`]; the optional suggest-dataset action
//! behind the `suggest-create-dataset` directive implements
//! [`SuggestDataset`]. Tests substitute recording fakes.

use crate::Result;

/// Sends one rendered request to the server under test.
pub trait Transport {
    /// Send a request string and return the server's textual response.
    ///
    /// The executor ignores the response; it is returned for harnesses
    /// that compare actual output against expectations. Implementations
    /// should map their own failures with
    /// [`Error::transport`](crate::Error::transport).
    fn send(&mut self, request: &str) -> Result<String>;
}

/// Creates a suggest dataset on behalf of the
/// `# suggest-create-dataset <name>` directive.
pub trait SuggestDataset {
    /// Create the named dataset.
    fn create(&mut self, dataset: &str) -> Result<()>;
}
