//! Conformance Tests
//!
//! End-to-end behavior of the public grnscript API:
//! - Translator - line-to-request rendering
//! - Directives - session effects of `#` control lines
//! - ScriptExecutor - script driving against a transport collaborator

mod common;

mod translate;
