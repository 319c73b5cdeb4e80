//! Handle incoming notifications

use lsp_types as lsp;
use lsp::{notification::Notification, NumberOrString};
use lsp_server;
use serde_json;
use std::sync::Arc;
use pyasm::lang::normalize_client_uri;
use pyasm::lang::pyasm::checkpoint;

use super::logger;

pub fn handle_notification(
    connection: &lsp_server::Connection,
    note: lsp_server::Notification,
    tools: &mut super::Tools) {

    match note.method.as_str() {
        lsp::notification::DidChangeConfiguration::METHOD => {
            match super::request_configuration(&connection) {
                Ok(()) => {},
                Err(_) => logger(&connection,"request for configuration failed")
            }
        },
        lsp::notification::DidOpenTextDocument::METHOD => {
            if let Ok(params) = serde_json::from_value::<lsp::DidOpenTextDocumentParams>(note.params) {
                let mut chkpt = checkpoint::CheckpointManager::new(Arc::clone(&tools.session));
                let normalized_uri = normalize_client_uri(params.text_document.uri);
                chkpt.update_doc(normalized_uri.clone(),params.text_document.text,Some(params.text_document.version));
                tools.doc_chkpts.insert(normalized_uri.to_string(),chkpt);
            }
        },
        lsp::notification::DidCloseTextDocument::METHOD => {
            if let Ok(params) = serde_json::from_value::<lsp::DidCloseTextDocumentParams>(note.params) {
                let normalized_uri = normalize_client_uri(params.text_document.uri);
                tools.doc_chkpts.remove(&normalized_uri.to_string());
            }
        },
        lsp::notification::DidChangeTextDocument::METHOD => {
            if let Ok(params) = serde_json::from_value::<lsp::DidChangeTextDocumentParams>(note.params) {
                let normalized_uri = normalize_client_uri(params.text_document.uri);
                if let Some(chkpt) = tools.doc_chkpts.get_mut(&normalized_uri.to_string()) {
                    for change in params.content_changes {
                        // we asked for full documents so expect just one iteration
                        chkpt.update_doc(normalized_uri.clone(),change.text,Some(params.text_document.version));
                    }
                }
            }
        },
        lsp::notification::Cancel::METHOD => {
            if let Ok(params) = serde_json::from_value::<lsp::CancelParams>(note.params) {
                let id = match params.id {
                    NumberOrString::Number(id) => lsp_server::RequestId::from(id),
                    NumberOrString::String(s) => lsp_server::RequestId::from(s)
                };
                logger(&connection,&format!("request {} was canceled",id.to_string()));
            }
        },
        lsp::notification::SetTrace::METHOD => {
            if let Ok(_params) = serde_json::from_value::<lsp::SetTraceParams>(note.params) {
                logger(&connection,"ignoring the SetTrace notification");
            }
        }
        lsp::notification::Exit::METHOD => {
            logger(&connection,"exit notification");
        }
        which_method => {
            logger(&connection,&format!("unhandled notification {}",which_method))
        }
    }
}
