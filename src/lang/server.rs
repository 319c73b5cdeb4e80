//! # Generics and traits for language servers
//!
//! These traits can be used to aid in the handling of requests
//! that are typically sent by a language client.

use std::io::Write;
use std::str::FromStr;
use lsp_types as lsp;
use lsp::request::Request;
use std::collections::HashMap;
use std::sync::Arc;

use crate::DYNERR;

pub const TOKEN_TYPES: [&str;21] = ["comment", "string", "keyword", "number", "regexp", "operator", "namespace",
"type", "struct", "class", "interface", "enum", "typeParameter", "function",
"method", "decorator", "macro", "variable", "parameter", "property", "label"];

pub const TOKEN_MODIFIERS: [&str;2] = ["declaration", "documentation"];

/// JSON-RPC error codes
pub mod rpc_error {
    pub const PARSE_ERROR: i32 = -32700;
}

/// Build an object around this trait to generate semantic tokens.  Then when the client requests
/// tokens, feed that object into Checkpoint::sem_tok_response.
pub trait Tokens {
    fn get(&mut self, txt: &str) -> Result<lsp::SemanticTokens,DYNERR>;
    /// Tokens for the rows spanned by `rng`, by default this is the same as `get`.
    fn get_range(&mut self, txt: &str, _rng: lsp::Range) -> Result<lsp::SemanticTokens,DYNERR> {
        self.get(txt)
    }
}

/// This trait is used to provide the most recent state of a document to the LSP client.
/// A typical pattern is to store the implementation in a map keyed by the document's URI string.
/// The default `*_response` functions provide a convenient way to respond to a client's
/// requests.  These functions are intended to mutate a default response within a match.
pub trait Checkpoint {
    /// Get a copy of the most recently checkpointed document and version.
    fn get_doc(&self) -> super::Document;
    fn get_symbols(&self) -> Vec<lsp::DocumentSymbol>;
    fn symbol_response(chkpts: HashMap<String,Arc<&Self>>, req: lsp_server::Request, resp: &mut lsp_server::Response) {
        if let Ok(params) = serde_json::from_value::<lsp::DocumentSymbolParams>(req.params) {
            let uri = super::normalize_client_uri(params.text_document.uri);
            if let Some(chkpt) = chkpts.get(&uri.to_string()) {
                *resp = match serde_json::to_value::<Vec<lsp::DocumentSymbol>>(chkpt.get_symbols()) {
                    Ok(result) => lsp_server::Response::new_ok(req.id,Some(result)),
                    Err(_) => lsp_server::Response::new_err(req.id,rpc_error::PARSE_ERROR,"symbol request failed while parsing".to_string())
                };
            }
        }
    }
    fn sem_tok_response<TOK: Tokens>(chkpts: HashMap<String,Arc<&Self>>, tok: &mut TOK, req: lsp_server::Request, resp: &mut lsp_server::Response) {
        if let Ok(params) = serde_json::from_value::<lsp::SemanticTokensParams>(req.params) {
            let uri = super::normalize_client_uri(params.text_document.uri);
            if let Some(chkpt) = chkpts.get(&uri.to_string()) {
                let doc = chkpt.get_doc();
                if let Ok(tok) = tok.get(&doc.text) {
                    *resp = match serde_json::to_value::<lsp::SemanticTokensResult>(lsp::SemanticTokensResult::Tokens(tok)) {
                        Ok(result) => lsp_server::Response::new_ok(req.id,Some(result)),
                        Err(_) => lsp_server::Response::new_err(req.id,rpc_error::PARSE_ERROR,"semantic tokens failed while parsing".to_string())
                    };
                }
            }
        }
    }
    fn sem_tok_range_response<TOK: Tokens>(chkpts: HashMap<String,Arc<&Self>>, tok: &mut TOK, req: lsp_server::Request, resp: &mut lsp_server::Response) {
        if let Ok(params) = serde_json::from_value::<lsp::SemanticTokensRangeParams>(req.params) {
            let uri = super::normalize_client_uri(params.text_document.uri);
            if let Some(chkpt) = chkpts.get(&uri.to_string()) {
                let doc = chkpt.get_doc();
                if let Ok(tok) = tok.get_range(&doc.text,params.range) {
                    *resp = match serde_json::to_value::<lsp::SemanticTokensRangeResult>(lsp::SemanticTokensRangeResult::Tokens(tok)) {
                        Ok(result) => lsp_server::Response::new_ok(req.id,Some(result)),
                        Err(_) => lsp_server::Response::new_err(req.id,rpc_error::PARSE_ERROR,"semantic tokens failed while parsing".to_string())
                    };
                }
            }
        }
    }
}

pub struct SemanticTokensBuilder {
    last_pos: lsp::Position,
    tok_map: HashMap<String,u32>,
    mod_map: HashMap<String,u32>,
    tokens: Vec<lsp::SemanticToken>
}

impl SemanticTokensBuilder {
    pub fn new() -> Self {
        let mut tok_map = HashMap::new();
        let types = Self::get_token_types();
        for i in 0..types.len() {
            tok_map.insert(types[i].clone(),i as u32);
        }
        let mut mod_map = HashMap::new();
        for (i,m) in TOKEN_MODIFIERS.iter().enumerate() {
            mod_map.insert(m.to_string(),1u32 << i);
        }
        Self {
            last_pos: lsp::Position::new(0,0),
            tok_map,
            mod_map,
            tokens: Vec::new()
        }
    }
    pub fn get_token_types() -> Vec<String> {
        TOKEN_TYPES.iter().map(|x| x.to_string()).collect()
    }
    /// Legend to send with the server capabilities
    pub fn legend() -> lsp::SemanticTokensLegend {
        lsp::SemanticTokensLegend {
            token_types: TOKEN_TYPES.iter().map(|x| lsp::SemanticTokenType::new(*x)).collect(),
            token_modifiers: TOKEN_MODIFIERS.iter().map(|x| lsp::SemanticTokenModifier::new(*x)).collect()
        }
    }
    pub fn reset(&mut self) {
        self.tokens = Vec::new();
        self.last_pos = lsp::Position::new(0,0);
    }
    pub fn clone_result(&self) -> Result<lsp::SemanticTokens,DYNERR> {
        Ok(lsp::SemanticTokens {
            result_id: None,
            data: self.tokens.clone()
        })
    }
    /// Tokens must be pushed in document order, a token behind the last one is dropped.
    pub fn push_with_modifiers(&mut self,rng: lsp::Range, typ: &str, mods: &[&str]) {
        if let Some(code) = self.tok_map.get(typ) {
            if rng.start.line >= self.last_pos.line {
                if rng.start.line == self.last_pos.line && rng.start.character < self.last_pos.character {
                    return;
                }
                let mut bitset: u32 = 0;
                for m in mods {
                    bitset |= *self.mod_map.get(*m).unwrap_or(&0);
                }
                self.tokens.push(lsp::SemanticToken {
                    delta_line: rng.start.line - self.last_pos.line,
                    delta_start: match rng.start.line == self.last_pos.line {
                        true => rng.start.character - self.last_pos.character,
                        false => rng.start.character
                    },
                    length: rng.end.character - rng.start.character,
                    token_type: *code,
                    token_modifiers_bitset: bitset
                });
                self.last_pos.line = rng.start.line;
                self.last_pos.character = rng.start.character;
            }
        }
    }
}

pub fn send_edit_req(connection: &lsp_server::Connection, doc: &super::Document, label: &str, edits: Vec<lsp::TextEdit>) -> Result<(),String> {
    let mut edit_list = Vec::new();
    edit_list.push(lsp::TextDocumentEdit {
        text_document: lsp::OptionalVersionedTextDocumentIdentifier { uri: doc.uri.clone(), version: doc.version },
        edits: edits.iter().map(|x| lsp::OneOf::Left(x.clone())).collect()
    });
    let ws_edit = lsp::WorkspaceEdit {
        changes: None,
        document_changes: Some(lsp::DocumentChanges::Edits(edit_list)),
        change_annotations: None
    };
    // send the edit request
    if let Ok(params) = serde_json::to_value(lsp::ApplyWorkspaceEditParams {label: Some(label.to_string()),edit: ws_edit}) {
        let req = lsp_server::Request {
            id: lsp_server::RequestId::from(label.to_string()),
            method: lsp::request::ApplyWorkspaceEdit::METHOD.to_string(),
            params
        };
        match connection.sender.send(lsp_server::Message::Request(req)) {
            Ok(()) => Ok(()),
            Err(_) => Err("could not send".to_string())
        }
    } else {
        Err("could not parse".to_string())
    }
}

fn setup_env_logger(filt: log::LevelFilter, path: &str) {
    if filt==log::LevelFilter::Off {
        return;
    }
    let pyasm_logging_file = Box::new(std::fs::File::create(path).expect("failed to create log file"));
    env_logger::Builder::new().format(|buf,record| {
        writeln!(buf,"{}:{} [{}] - {}",record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.level(),
            record.args()
        )
    })
    .filter(Some("pyasm::lang"),filt)
    .target(env_logger::Target::Pipe(pyasm_logging_file))
    .init();
}

/// Parse the language server's command line arguments.
/// Sets up logging based on the arguments, panics if log level or log file are invalid.
/// As of this writing it returns only the `--suppress-tokens` status in `parse_args().0[0]`.
pub fn parse_args() -> (Vec<bool>,Vec<String>) {
    let mut log_level = log::LevelFilter::Off;
    let mut log_file = "pyasm_log.txt".to_string();
    let mut suppress_tokens = false;

    // process arguments
    let mut args = std::env::args().into_iter();
    args.next();
    while let Some(val) = args.next() {
        if &val == "--log-level" {
            if let Some(val) = args.next() {
                log_level = log::LevelFilter::from_str(&val).expect("invalid logging filter");
            }
        } else if &val == "--log-file" {
            if let Some(val) = args.next() {
                log_file = val;
            }
        } else if &val == "--suppress-tokens" {
            // tokens will only be sent to client upon request
            suppress_tokens = true;
        }
    }
    setup_env_logger(log_level, &log_file);
    (vec![suppress_tokens],vec![])
}
