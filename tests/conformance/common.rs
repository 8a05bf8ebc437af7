//! Common test utilities for conformance tests

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use grnscript::{Result, ScriptExecutor, SuggestDataset, Transport};
use tracing_subscriber::fmt::MakeWriter;

/// Shared handle onto a fake's call log.
pub type CallLog = Rc<RefCell<Vec<String>>>;

/// Transport that records every request it is handed.
pub struct RecordingTransport {
    sent: CallLog,
}

impl RecordingTransport {
    pub fn new() -> (Self, CallLog) {
        let sent: CallLog = Rc::new(RefCell::new(Vec::new()));
        (Self { sent: sent.clone() }, sent)
    }
}

impl Transport for RecordingTransport {
    fn send(&mut self, request: &str) -> Result<String> {
        self.sent.borrow_mut().push(request.to_string());
        Ok(String::new())
    }
}

/// Suggest collaborator that records every dataset creation.
pub struct RecordingSuggest {
    created: CallLog,
}

impl RecordingSuggest {
    pub fn new() -> (Self, CallLog) {
        let created: CallLog = Rc::new(RefCell::new(Vec::new()));
        (Self { created: created.clone() }, created)
    }
}

impl SuggestDataset for RecordingSuggest {
    fn create(&mut self, dataset: &str) -> Result<()> {
        self.created.borrow_mut().push(dataset.to_string());
        Ok(())
    }
}

/// Create an executor over a recording transport.
pub fn create_executor() -> (ScriptExecutor, CallLog) {
    let (transport, sent) = RecordingTransport::new();
    (ScriptExecutor::new(Box::new(transport)), sent)
}

/// Run a script given as one string.
pub fn run(executor: &mut ScriptExecutor, script: &str) -> Result<()> {
    executor.execute_reader(script.as_bytes())
}

/// Install the test tracing subscriber. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Writer that captures formatted tracing output for assertions.
///
/// Hand one to `tracing_subscriber::fmt().with_writer(...)` and read the
/// emitted lines back with [`LogSink::contents`].
#[derive(Clone, Default)]
pub struct LogSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogSink {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
