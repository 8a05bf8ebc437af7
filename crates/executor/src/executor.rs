//! The script executor: reads a script line by line and drives the
//! translator, directives and transport.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use grnscript_wire::{SchemaTable, Translation, Translator};

use crate::directive::{parse_directive, Directive};
use crate::transport::{SuggestDataset, Transport};
use crate::{Error, Result, SessionContext};

/// Options for building a [`ScriptExecutor`].
///
/// # Example
///
/// ```ignore
/// use grnscript_executor::{ExecutorOptions, ScriptExecutor};
///
/// let options = ExecutorOptions::new().logging(false);
/// let executor = ScriptExecutor::with_options(transport, options);
/// ```
#[derive(Debug, Clone)]
pub struct ExecutorOptions {
    /// Whether session logging starts enabled.
    pub logging: bool,
}

impl ExecutorOptions {
    /// Create options with default settings (logging enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset the session's logging flag.
    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self { logging: true }
    }
}

/// Drives a command script against a [`Transport`].
///
/// One executor owns one [`SessionContext`] and one [`Translator`]; runs
/// are single-threaded and fail-fast. Per script line:
///
/// - blank lines close an open load block, otherwise they are skipped
/// - recognized directives are applied to the session, not forwarded
/// - everything else is translated; comments and complete requests go to
///   the transport immediately, load fragments fold into the pending
///   request until the block closes
pub struct ScriptExecutor {
    context: SessionContext,
    translator: Translator,
    transport: Box<dyn Transport>,
    suggest: Option<Box<dyn SuggestDataset>>,
}

impl ScriptExecutor {
    /// Create an executor with default options.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_options(transport, ExecutorOptions::default())
    }

    /// Create an executor with explicit options.
    pub fn with_options(transport: Box<dyn Transport>, options: ExecutorOptions) -> Self {
        let mut context = SessionContext::new();
        context.set_logging(options.logging);
        Self {
            context,
            translator: Translator::new(),
            transport,
            suggest: None,
        }
    }

    /// Replace the translator's schema table.
    pub fn with_schema(mut self, schema: SchemaTable) -> Self {
        self.translator = Translator::with_schema(schema);
        self
    }

    /// Register the collaborator behind `# suggest-create-dataset`.
    pub fn with_suggest_dataset(mut self, handler: Box<dyn SuggestDataset>) -> Self {
        self.suggest = Some(handler);
        self
    }

    /// Read-only view of the session context.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Execute a script file.
    pub fn execute<P: AsRef<Path>>(&mut self, script: P) -> Result<()> {
        let script = script.as_ref();
        tracing::info!(target: "grnscript::executor", script = %script.display(), "executing script");
        let file = File::open(script)?;
        self.execute_reader(BufReader::new(file))?;
        tracing::info!(target: "grnscript::executor", script = %script.display(), "script complete");
        Ok(())
    }

    /// Execute every line from a reader, then close any open load block.
    pub fn execute_reader<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            self.consume_line(&line)?;
        }
        self.flush_load()
    }

    fn consume_line(&mut self, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            return self.flush_load();
        }

        if let Some(directive) = parse_directive(line)? {
            return self.apply_directive(directive);
        }

        match self.translator.translate(line)? {
            Translation::Comment(text) => self.dispatch(&text),
            Translation::Request(request) => self.dispatch(&request),
            // Folded into the pending load request, sent on flush.
            Translation::LoadHeader(_) | Translation::ValuesFragment(_) => Ok(()),
        }
    }

    fn apply_directive(&mut self, directive: Directive) -> Result<()> {
        tracing::debug!(target: "grnscript::executor", directive = ?directive, "applying directive");
        match directive {
            Directive::DisableLogging => {
                self.context.set_logging(false);
                Ok(())
            }
            Directive::EnableLogging => {
                self.context.set_logging(true);
                Ok(())
            }
            Directive::SuggestCreateDataset { dataset } => match self.suggest.as_mut() {
                Some(handler) => handler.create(&dataset),
                None => Err(Error::SuggestUnavailable { dataset }),
            },
        }
    }

    /// Close an open load block and send the folded request.
    fn flush_load(&mut self) -> Result<()> {
        if let Some(request) = self.translator.finish_load() {
            self.dispatch(&request)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, request: &str) -> Result<()> {
        if self.context.logging_enabled() {
            tracing::debug!(target: "grnscript::executor", request = %request, "sending");
        }
        self.transport.send(request)?;
        Ok(())
    }
}
