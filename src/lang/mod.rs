//! # Language Module
//!
//! Generic items shared by the CLI and the language server.
//! Language specific operations such as highlighting and indentation are in the submodules.

pub mod server;
pub mod pyasm;

use lsp_types as lsp;
use thiserror::Error;
use log::warn;
use crate::DYNERR;

#[derive(Error,Debug)]
pub enum Error {
    #[error("Comment character is not allowed")]
    BadCommentChar,
    #[error("Tab stops are not usable")]
    BadTabStops,
    #[error("Range is out of bounds")]
    OutOfRange
}

/// Snapshot of a document as it was handed to us by the client or the CLI.
#[derive(Clone)]
pub struct Document {
    pub uri: lsp::Url,
    pub version: Option<i32>,
    pub text: String
}

impl Document {
    pub fn new(uri: lsp::Url, text: String) -> Self {
        Self {
            uri,
            version: None,
            text
        }
    }
    /// Create a document with a made up URI, used until the client supplies one.
    pub fn from_string(text: String, id: u64) -> Self {
        Self {
            uri: lsp::Url::parse(&format!("untitled:Untitled-{}",id)).expect("unreachable"),
            version: None,
            text
        }
    }
    /// Get a line without its terminator, or None if the row is past the end.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.text.lines().nth(row)
    }
}

/// Clients are not consistent in how they encode the URI of a Windows path,
/// e.g. `file:///C%3A/...` vs `file:///c:/...`.  Put it in one canonical form
/// so it can be used as a key.
pub fn normalize_client_uri(uri: lsp::Url) -> lsp::Url {
    let s = uri.to_string();
    match normalize_client_uri_str(&s) {
        Ok(ans) => ans,
        Err(_) => uri
    }
}

pub fn normalize_client_uri_str(uri: &str) -> Result<lsp::Url,DYNERR> {
    let mut s = uri.replace("%3A",":").replace("%3a",":");
    if s.starts_with("file:///") && s.get(9..10)==Some(":") {
        if let Some(drive) = s.get(8..9).map(|d| d.to_lowercase()) {
            s.replace_range(8..9,&drive);
        }
    }
    Ok(lsp::Url::parse(&s)?)
}

pub fn update_json_bool(maybe_obj: &serde_json::Value, key: &str, curr: &mut bool) {
    if let Some(obj) = maybe_obj.as_object() {
        if let Some(val) = obj.get(key) {
            match val.as_bool() {
                Some(x) => *curr = x,
                None => warn!("{} should be a boolean",key)
            }
        }
    }
}

pub fn update_json_i64(maybe_obj: &serde_json::Value, key: &str, curr: &mut i64) {
    if let Some(obj) = maybe_obj.as_object() {
        if let Some(val) = obj.get(key) {
            match val.as_i64() {
                Some(x) => *curr = x,
                None => warn!("{} should be an integer",key)
            }
        }
    }
}

pub fn update_json_string(maybe_obj: &serde_json::Value, key: &str, curr: &mut String) {
    if let Some(obj) = maybe_obj.as_object() {
        if let Some(val) = obj.get(key) {
            match val.as_str() {
                Some(x) => *curr = x.to_string(),
                None => warn!("{} should be a string",key)
            }
        }
    }
}

pub fn update_json_vec_i64(maybe_obj: &serde_json::Value, key: &str, curr: &mut Vec<i64>) {
    if let Some(obj) = maybe_obj.as_object() {
        if let Some(val) = obj.get(key) {
            match val.as_array() {
                Some(ary) => {
                    let mut ans = Vec::new();
                    for item in ary {
                        match item.as_i64() {
                            Some(x) => ans.push(x),
                            None => {
                                warn!("{} should be an array of integers",key);
                                return;
                            }
                        }
                    }
                    *curr = ans;
                },
                None => warn!("{} should be an array",key)
            }
        }
    }
}

/// Convert a byte offset within a line to the UTF-16 column used by LSP.
pub fn utf16_col(line: &str, byte: usize) -> u32 {
    let end = byte.min(line.len());
    line.get(0..end).unwrap_or(line).encode_utf16().count() as u32
}

/// Convert an LSP UTF-16 column to a byte offset within a line.
/// Returns None if the column is past the end of the line or splits a character.
pub fn byte_offset(line: &str, col: u32) -> Option<usize> {
    let mut units = 0;
    for (i,c) in line.char_indices() {
        if units == col as usize {
            return Some(i);
        }
        if units > col as usize {
            return None;
        }
        units += c.len_utf16();
    }
    match units == col as usize {
        true => Some(line.len()),
        false => None
    }
}
