//! This is the pyasm language server.
//! Cargo will compile this to a standalone executable.
//!
//! The pyasm library crate provides the classification and indentation.
//! Documents are small and every request is a pure function of the text,
//! so all the work is done on the main loop.

use lsp_types as lsp;
use lsp::{notification::Notification, request::Request};
use lsp_server;
use serde_json;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use pyasm::lang::server::{parse_args,SemanticTokensBuilder};
use pyasm::lang::pyasm::{settings,checkpoint,semantic_tokens,Session};

mod notification;
mod request;
mod response;

#[derive(thiserror::Error,Debug)]
enum ServerError {
    #[error("Parsing")]
    Parsing
}

pub const COMMANDS: [&str;2] = ["pyasm.commentRegion","pyasm.semantic.tokens"];

/// Send log messages to the client.
fn logger(connection: &lsp_server::Connection, message: &str) {
    let note = lsp_server::Notification::new(
        lsp::notification::LogMessage::METHOD.to_string(),
        lsp::LogMessageParams {
            typ: lsp::MessageType::LOG,
            message: message.to_string()
        }
    );
    match connection.sender.send(lsp_server::Message::Notification(note)) {
        Err(_) => {}, // nowhere to send log, what can we do about it?
        Ok(()) => {}
    }
}

/// request the root configuration item
fn request_configuration(connection: &lsp_server::Connection) -> Result<(),Box<dyn Error>> {
    let req = lsp_server::Request::new(
        lsp_server::RequestId::from("pyasm-pull-config".to_string()),
        lsp::request::WorkspaceConfiguration::METHOD.to_string(),
        lsp::ConfigurationParams { items: vec![
            lsp::ConfigurationItem {
                scope_uri: None,
                section: Some("pyasm".to_string())
            }
        ]}
    );
    match connection.sender.send(req.into()) {
        Ok(()) => Ok(()),
        Err(e) => Err(Box::new(e))
    }
}

/// parse the response to the configuration request
fn parse_configuration(resp: lsp_server::Response) -> Result<settings::Settings,Box<dyn Error>> {
    if let Some(result) = resp.result {
        if let Some(ary) = result.as_array() {
            // only one item was requested
            if let Some(item) = ary.first() {
                return settings::parse(&item.to_string());
            }
        }
    }
    Err(Box::new(ServerError::Parsing))
}

struct Tools {
    session: Arc<Session>,
    doc_chkpts: HashMap<String,checkpoint::CheckpointManager>,
    highlighter: semantic_tokens::SemanticTokensProvider
}

impl Tools {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Session::new()),
            doc_chkpts: HashMap::new(),
            highlighter: semantic_tokens::SemanticTokensProvider::new()
        }
    }
    /// Activate a new session and hand it to everything that holds one.
    fn reconfigure(&mut self, config: settings::Settings) -> Result<(),Box<dyn Error>> {
        let session = Arc::new(Session::activate(config, &[])?);
        self.highlighter.use_session(Arc::clone(&session));
        for chkpt in self.doc_chkpts.values_mut() {
            chkpt.update_session(Arc::clone(&session));
        }
        self.session = session;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error + Sync + Send>> {

    let (bools,_) = parse_args();
    let suppress_tokens = bools[0];

    let mut tools = Tools::new();
    let (connection, io_threads) = lsp_server::Connection::stdio();

    logger(&connection,"start initializing connection");
    let (id,params) = connection.initialize_start()?;
    let params: lsp::InitializeParams = serde_json::from_value(params)?;

    let result = lsp::InitializeResult {
        capabilities: lsp::ServerCapabilities {
            text_document_sync: Some(lsp::TextDocumentSyncCapability::Options(
                lsp::TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(lsp::TextDocumentSyncKind::FULL),
                    will_save: None,
                    will_save_wait_until: None,
                    save: None
                }
            )),
            semantic_tokens_provider: match suppress_tokens {
                true => None,
                false => Some(lsp::SemanticTokensServerCapabilities::SemanticTokensOptions(lsp::SemanticTokensOptions {
                    work_done_progress_options: lsp::WorkDoneProgressOptions {
                        work_done_progress: None
                    },
                    legend: SemanticTokensBuilder::legend(),
                    range: Some(true),
                    full: Some(lsp::SemanticTokensFullOptions::Bool(true))
                }))
            },
            execute_command_provider: Some(lsp::ExecuteCommandOptions {
                commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
                work_done_progress_options: lsp::WorkDoneProgressOptions {
                    work_done_progress: None
                }
            }),
            document_symbol_provider: Some(lsp::OneOf::Left(true)),
            document_range_formatting_provider: Some(lsp::OneOf::Left(true)),
            document_on_type_formatting_provider: Some(lsp::DocumentOnTypeFormattingOptions {
                first_trigger_character: ":".to_string(),
                more_trigger_character: Some(vec!["\n".to_string()])
            }),
            ..lsp::ServerCapabilities::default()
        },
        server_info: Some(lsp::ServerInfo {
            name: "pyasm".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string())
        })
    };
    connection.initialize_finish(id, serde_json::to_value(result)?)?;
    logger(&connection,"connection initialized");

    // registrations
    let mut registrations: Vec<lsp::Registration> = Vec::new();
    if let Some(workspace) = params.capabilities.workspace {
        if let Some(config) = workspace.configuration {
            if config {
                registrations.push(lsp::Registration {
                    id: "pull-config".to_string(),
                    method: lsp::notification::DidChangeConfiguration::METHOD.to_string(),
                    register_options: None
                });
            }
        }
    }
    let req = lsp_server::Request::new(
        lsp_server::RequestId::from("pyasm-reg-config".to_string()),
        lsp::request::RegisterCapability::METHOD.to_string(),
        lsp::RegistrationParams { registrations });
    if let Err(_) = connection.sender.send(req.into()) {
        logger(&connection,"Could not register change configuration capability");
    }

    // Starting configuration
    match request_configuration(&connection) {
        Ok(()) => {},
        Err(_) => logger(&connection,"could not request starting configuration")
    }

    // Main loop
    while let Ok(msg) = connection.receiver.recv() {
        match msg {
            lsp_server::Message::Notification(note) => {
                notification::handle_notification(&connection,note,&mut tools);
            }
            lsp_server::Message::Request(req) => {
                if request::handle_request(&connection, req, &mut tools) {
                    break;
                }
            },
            lsp_server::Message::Response(resp) => {
                response::handle_response(&connection, resp, &mut tools);
            }
        }
    }

    io_threads.join()?;
    Ok(())
}
