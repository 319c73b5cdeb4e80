//! # Python disassembly listing services
//!
//! This module is used by both the CLI and the language server.
//! It handles listings produced by the standard `dis` module or by third party
//! disassemblers, e.g.
//! ```text
//!   3           0 LOAD_FAST                0 (x)
//!               2 POP_JUMP_IF_FALSE        8 (to 8)
//! L8:
//!   4     >>    8 LOAD_CONST               1 (None)
//! ```
//! There are two services, both pure functions of the text:
//! * the `classifier` assigns a `Category` to spans of a line, which drives highlighting
//! * the `indenter` decides the target column of a line, which drives reindentation
//!
//! A host editor obtains both by activating a `Session` with its `Settings`.
//! The session is immutable, changing settings means activating a new session.
//! The server compiles to a separate executable, its entry point is in `src/bin/server-pyasm`.

use std::fmt;
use serde::Serialize;
use log::info;
use crate::lang::Error;
use crate::DYNERR;

pub mod settings;
pub mod mnemonics;
pub mod classifier;
pub mod indenter;
pub mod formatter;
pub mod semantic_tokens;
pub mod checkpoint;

#[cfg(test)]
mod tests;

const RCH: &str = "unreachable was reached";

/// Semantic category of a span, variants are listed in matching priority order.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash,Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// digits standing alone between spaces, e.g. source line numbers and offsets
    LineNumber,
    /// instruction name
    Mnemonic,
    /// `(to 42)`
    JumpTarget,
    /// name of a label at the start of a line
    LabelDeclaration,
    /// `|XX` or `XX|`, operand bytes in older listings
    HexOperand,
    /// label used as an operand, `L42`
    LabelOperand,
    /// from the comment character to end of line
    Comment,
    /// full line comment holding a fragment of the original source
    EmbeddedSource
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LineNumber => "line-number",
            Self::Mnemonic => "mnemonic",
            Self::JumpTarget => "jump-target",
            Self::LabelDeclaration => "label",
            Self::HexOperand => "hex-operand",
            Self::LabelOperand => "label-operand",
            Self::Comment => "comment",
            Self::EmbeddedSource => "embedded-source"
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"{}",self.name())
    }
}

/// Contiguous span of a line, `start` and `end` are byte offsets.
#[derive(Clone,Debug,PartialEq,Eq,Serialize)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
    pub category: Category
}

impl TokenSpan {
    pub fn new(start: usize, end: usize, category: Category) -> Self {
        Self { start, end, category }
    }
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }
}

/// Editing commands the mode binds to keys
#[derive(Clone,Copy,Debug,PartialEq)]
pub enum EditCommand {
    /// insert `:` and pull a new label flush left
    SmartColon,
    /// comment or uncomment the lines of the selection
    ToggleComment
}

#[derive(Clone,Copy,Debug,PartialEq)]
pub struct KeyBinding {
    pub key: &'static str,
    pub command: EditCommand
}

pub const KEY_BINDINGS: [KeyBinding;2] = [
    KeyBinding { key: ":", command: EditCommand::SmartColon },
    KeyBinding { key: "C-c ;", command: EditCommand::ToggleComment }
];

/// Extension point for the host.  Hooks are passed explicitly to `Session::activate`
/// and run in the order given.
pub trait ModeHook {
    /// Runs before validation, the hook may adjust the settings.
    fn before_activate(&self, _settings: &mut settings::Settings) {}
    /// Runs once the session is ready.
    fn after_activate(&self, _session: &Session) {}
}

/// Characters that cannot start a comment because they are part of the listing syntax.
fn comment_char_allowed(c: char) -> bool {
    !(c.is_whitespace() || c.is_alphanumeric() || ['_',':','\\','(',')','|'].contains(&c))
}

/// Immutable handle holding everything needed to serve one buffer.
pub struct Session {
    settings: settings::Settings,
    classifier: classifier::Classifier,
    indenter: indenter::Indenter
}

impl Session {
    /// Session with default settings and no hooks.
    pub fn new() -> Self {
        Self::build(settings::Settings::new())
    }
    fn build(settings: settings::Settings) -> Self {
        Self {
            classifier: classifier::Classifier::new(settings.comment_char),
            indenter: indenter::Indenter::new(&settings),
            settings
        }
    }
    /// Run the hooks, validate the settings, and create the session.
    pub fn activate(mut settings: settings::Settings, hooks: &[Box<dyn ModeHook>]) -> Result<Self,DYNERR> {
        for hook in hooks {
            hook.before_activate(&mut settings);
        }
        if !comment_char_allowed(settings.comment_char) {
            return Err(Box::new(Error::BadCommentChar));
        }
        let ans = Self::build(settings);
        if let Err(e) = ans.indenter.validate() {
            log::warn!("{}, indentation requests will fall back to column 0",e);
        }
        for hook in hooks {
            hook.after_activate(&ans);
        }
        info!("activated with comment character {}",ans.settings.comment_char);
        Ok(ans)
    }
    pub fn settings(&self) -> &settings::Settings {
        &self.settings
    }
    pub fn classifier(&self) -> &classifier::Classifier {
        &self.classifier
    }
    pub fn indenter(&self) -> &indenter::Indenter {
        &self.indenter
    }
    pub fn key_bindings(&self) -> &'static [KeyBinding] {
        &KEY_BINDINGS
    }
    pub fn command_for_key(&self, key: &str) -> Option<EditCommand> {
        KEY_BINDINGS.iter().find(|b| b.key == key).map(|b| b.command)
    }
    pub fn classify_line(&self, line: &str) -> Vec<TokenSpan> {
        self.classifier.classify_line(line)
    }
    pub fn classify(&self, text: &str) -> Vec<(usize,Vec<TokenSpan>)> {
        self.classifier.classify(text)
    }
    pub fn classify_rows(&self, text: &str, beg: usize, end: usize) -> Vec<(usize,Vec<TokenSpan>)> {
        self.classifier.classify_rows(text, beg, end)
    }
    pub fn indent_column(&self, line: &str) -> usize {
        self.indenter.indent_column(line)
    }
    pub fn reindent_line(&self, line: &str) -> String {
        self.indenter.reindent_line(line)
    }
    /// Label declarations in document order, as (row, span) pairs.
    pub fn labels(&self, text: &str) -> Vec<(usize,TokenSpan)> {
        let mut ans = Vec::new();
        for (row,spans) in self.classifier.spans(text) {
            for span in spans {
                if span.category == Category::LabelDeclaration {
                    ans.push((row,span));
                }
            }
        }
        ans
    }
}
