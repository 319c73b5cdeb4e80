//! # `pyasm` main library
//!
//! This library provides editor services for Python bytecode disassembly listings,
//! such as those written by the standard `dis` module or by third party disassemblers.
//!
//! ## Architecture
//!
//! The services are built around an immutable `lang::pyasm::Session`, which the host
//! obtains by activating the mode with its settings:
//! * the classifier maps spans of each line to a semantic category, which drives highlighting
//! * the indenter decides the target column of a line, which drives reindentation
//! * the formatter turns these decisions into edits (smart colon, smart newline, comment toggling)
//!
//! Nothing is disassembled or executed, the services only look at text.
//!
//! ## Front ends
//!
//! * `pyasm` is a command line tool whose subcommands work as pipeline nodes
//! * `server-pyasm` is a language server that serves any LSP client

pub mod lang;
pub mod commands;

type DYNERR = Box<dyn std::error::Error>;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;
