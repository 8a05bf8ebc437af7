//! Shared fakes and helpers for executor tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Error, Result, ScriptExecutor, SuggestDataset, Transport};

/// Transport fake that records every request it is handed.
pub struct RecordingTransport {
    sent: Rc<RefCell<Vec<String>>>,
}

impl RecordingTransport {
    /// The fake plus a handle onto its request log.
    pub fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        (Self { sent: sent.clone() }, sent)
    }
}

impl Transport for RecordingTransport {
    fn send(&mut self, request: &str) -> Result<String> {
        self.sent.borrow_mut().push(request.to_string());
        Ok(String::new())
    }
}

/// Transport fake that fails every send.
pub struct FailingTransport;

impl Transport for FailingTransport {
    fn send(&mut self, _request: &str) -> Result<String> {
        Err(Error::transport("connection refused"))
    }
}

/// Suggest fake that records every dataset it is asked to create.
pub struct RecordingSuggest {
    created: Rc<RefCell<Vec<String>>>,
}

impl RecordingSuggest {
    /// The fake plus a handle onto its creation log.
    pub fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        let created = Rc::new(RefCell::new(Vec::new()));
        (Self { created: created.clone() }, created)
    }
}

impl SuggestDataset for RecordingSuggest {
    fn create(&mut self, dataset: &str) -> Result<()> {
        self.created.borrow_mut().push(dataset.to_string());
        Ok(())
    }
}

/// Executor over a recording transport, plus the handle to its log.
pub fn recording_executor() -> (ScriptExecutor, Rc<RefCell<Vec<String>>>) {
    let (transport, sent) = RecordingTransport::new();
    (ScriptExecutor::new(Box::new(transport)), sent)
}

/// Run a script given as one string.
pub fn run_script(executor: &mut ScriptExecutor, script: &str) -> Result<()> {
    executor.execute_reader(script.as_bytes())
}
