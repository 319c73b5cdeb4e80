use lsp_types as lsp;
use std::sync::Arc;
use super::{Category,Session};
use crate::lang::server::{Tokens,SemanticTokensBuilder};
use crate::lang::utf16_col;
use crate::DYNERR;

/// Token type and modifiers used to present a category
pub fn token_style(category: Category) -> (&'static str,&'static [&'static str]) {
    match category {
        Category::LineNumber => ("number",&[]),
        Category::Mnemonic => ("operator",&[]),
        Category::JumpTarget => ("type",&[]),
        Category::LabelDeclaration => ("label",&["declaration"]),
        Category::HexOperand => ("type",&[]),
        Category::LabelOperand => ("label",&[]),
        Category::Comment => ("comment",&["documentation"]),
        Category::EmbeddedSource => ("string",&["documentation"])
    }
}

pub struct SemanticTokensProvider {
    builder: SemanticTokensBuilder,
    session: Arc<Session>
}

impl SemanticTokensProvider {
    pub fn new() -> Self {
        Self {
            builder: SemanticTokensBuilder::new(),
            session: Arc::new(Session::new())
        }
    }
    pub fn use_session(&mut self, session: Arc<Session>) {
        self.session = session;
    }
    fn push_rows(&mut self, txt: &str, beg: usize, end: usize) {
        let lines: Vec<&str> = txt.lines().collect();
        for (row,spans) in self.session.classify_rows(txt, beg, end) {
            let line = lines[row];
            for span in spans {
                let rng = lsp::Range::new(
                    lsp::Position::new(row as u32,utf16_col(line,span.start)),
                    lsp::Position::new(row as u32,utf16_col(line,span.end))
                );
                let (typ,mods) = token_style(span.category);
                self.builder.push_with_modifiers(rng,typ,mods);
            }
        }
    }
}

impl Tokens for SemanticTokensProvider {
    fn get(&mut self, txt: &str) -> Result<lsp::SemanticTokens,DYNERR> {
        self.builder.reset();
        self.push_rows(txt, 0, usize::MAX);
        self.builder.clone_result()
    }
    fn get_range(&mut self, txt: &str, rng: lsp::Range) -> Result<lsp::SemanticTokens,DYNERR> {
        self.builder.reset();
        self.push_rows(txt, rng.start.line as usize, rng.end.line as usize + 1);
        self.builder.clone_result()
    }
}
