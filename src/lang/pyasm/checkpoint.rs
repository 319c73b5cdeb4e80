//! Disassembly checkpoint module.
//!
//! Holds the latest text of an open document so requests can be answered
//! without waiting on the client.  The outline is recomputed from the text on demand.

use std::sync::Arc;
use lsp_types as lsp;
use crate::lang::{Document,utf16_col};
use crate::lang::server::Checkpoint;
use super::Session;

pub struct CheckpointManager {
    doc: Document,
    session: Arc<Session>
}

#[allow(deprecated)]
fn create_symbol(name: String,detail: Option<String>,kind: lsp::SymbolKind,rng: &lsp::Range,children: Option<Vec<lsp::DocumentSymbol>>) -> lsp::DocumentSymbol {
    lsp::DocumentSymbol {
        name: name.to_string(),
        detail,
        kind,
        range: rng.clone(),
        selection_range: rng.clone(),
        tags: None,
        children,
        deprecated: None
    }
}

impl CheckpointManager {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            doc: Document::from_string(String::new(),0),
            session
        }
    }
    pub fn update_doc(&mut self, uri: lsp::Url, txt: String, version: Option<i32>) {
        self.doc = Document {
            uri,
            version,
            text: txt
        };
    }
    /// Use a newly activated session, e.g. after the configuration changed.
    pub fn update_session(&mut self, session: Arc<Session>) {
        self.session = session;
    }
    pub fn shared_session(&self) -> Arc<Session> {
        Arc::clone(&self.session)
    }
}

impl Checkpoint for CheckpointManager {
    fn get_doc(&self) -> Document {
        self.doc.clone()
    }
    fn get_symbols(&self) -> Vec<lsp::DocumentSymbol> {
        let lines: Vec<&str> = self.doc.text.lines().collect();
        let mut ans = Vec::new();
        for (row,span) in self.session.labels(&self.doc.text) {
            let line = lines[row];
            let rng = lsp::Range::new(
                lsp::Position::new(row as u32,utf16_col(line,span.start)),
                lsp::Position::new(row as u32,utf16_col(line,span.end))
            );
            ans.push(create_symbol(span.text(line).to_string(),Some("label".to_string()),lsp::SymbolKind::CONSTANT,&rng,None));
        }
        ans
    }
}
