//! Module to edit lines of a listing
//!
//! There are three tasks here:
//! * format as the user types into an editor (smart colon and smart newline)
//! * reindent a range of lines
//! * toggle comments on a range of lines
//!
//! Edits are first computed as `LineEdit`, which uses byte offsets, so that the CLI can
//! apply them directly.  The language server converts them to LSP text edits.

use lsp_types as lsp;
use log::debug;
use super::Session;
use crate::lang::{byte_offset,utf16_col,Document,Error};

/// Replacement of bytes `beg..end` within a single row
#[derive(Clone,Debug,PartialEq)]
pub struct LineEdit {
    pub row: usize,
    pub beg: usize,
    pub end: usize,
    pub new_text: String
}

impl LineEdit {
    pub fn to_lsp(&self, line: &str) -> lsp::TextEdit {
        let row = self.row as u32;
        lsp::TextEdit::new(
            lsp::Range::new(
                lsp::Position::new(row,utf16_col(line,self.beg)),
                lsp::Position::new(row,utf16_col(line,self.end))
            ),
            self.new_text.clone()
        )
    }
}

/// Convert line edits to LSP edits, rows that are not in the document are dropped.
pub fn to_lsp_edits(doc: &Document, edits: &[LineEdit]) -> Vec<lsp::TextEdit> {
    let lines: Vec<&str> = doc.text.lines().collect();
    edits.iter().filter_map(|e| lines.get(e.row).map(|line| e.to_lsp(line))).collect()
}

/// Apply non-overlapping line edits to the text.
/// If the text uses `\r\n` anywhere, every line is written with `\r\n`, otherwise with `\n`.
/// A final terminator is kept if there was one.
pub fn apply_line_edits(text: &str, edits: &[LineEdit]) -> String {
    let mut lines: Vec<String> = text.lines().map(|s| s.to_string()).collect();
    let mut sorted = edits.to_vec();
    sorted.sort_by(|a,b| (b.row,b.beg).cmp(&(a.row,a.beg)));
    for edit in sorted {
        if let Some(line) = lines.get_mut(edit.row) {
            if edit.beg <= edit.end && edit.end <= line.len() {
                line.replace_range(edit.beg..edit.end,&edit.new_text);
            }
        }
    }
    let eol = match text.contains("\r\n") {
        true => "\r\n",
        false => "\n"
    };
    let mut ans = lines.join(eol);
    if text.ends_with('\n') {
        ans += eol;
    }
    ans
}

/// Edit replacing the leading whitespace of `line` with whitespace for `col`.
/// Blank lines lose their whitespace.  Returns None if nothing would change.
fn indent_edit(session: &Session, row: usize, line: &str, col: usize) -> Option<LineEdit> {
    let content = line.trim_start_matches([' ','\t']);
    let ws_len = line.len() - content.len();
    let new_text = match content.len() {
        0 => String::new(),
        _ => session.indenter().indentation(col)
    };
    if new_text == line[0..ws_len] {
        return None;
    }
    Some(LineEdit { row, beg: 0, end: ws_len, new_text })
}

/// Edit that reindents one line, None if it is already correct.
pub fn reindent_edit(session: &Session, row: usize, line: &str) -> Option<LineEdit> {
    indent_edit(session, row, line, session.indent_column(line))
}

/// Smart colon.  The colon has already been inserted just before `caret` (byte offset).
/// If it completed a label at the start of the line, remove the indentation in front of it.
pub fn smart_colon(session: &Session, row: usize, line: &str, caret: usize) -> Vec<LineEdit> {
    if caret == 0 || line.get(caret-1..caret) != Some(":") {
        return Vec::new();
    }
    match session.indenter().smart_colon(&line[0..caret-1]) {
        Some(ws_len) if ws_len > 0 => vec![LineEdit { row, beg: 0, end: ws_len, new_text: String::new() }],
        _ => Vec::new()
    }
}

/// Smart newline.  The line break has already been inserted, so `row` is the new line.
/// The previous line is reindented, and the new line is indented for its content.
/// The new line is indented even if it is empty, that is where the caret goes.
pub fn smart_newline(session: &Session, doc: &Document, row: usize) -> Vec<LineEdit> {
    let mut ans = Vec::new();
    if row > 0 {
        if let Some(prev) = doc.line(row-1) {
            if let Some(edit) = reindent_edit(session, row-1, prev) {
                ans.push(edit);
            }
        }
    }
    let curr = doc.line(row).unwrap_or("");
    let content = curr.trim_start_matches([' ','\t']);
    let ws_len = curr.len() - content.len();
    let new_text = session.indenter().indentation(session.indent_column(curr));
    if new_text != curr[0..ws_len] {
        ans.push(LineEdit { row, beg: 0, end: ws_len, new_text });
    }
    ans
}

/// Handle on type formatting.  Characters other than `:` and newline produce no edits.
pub fn format_typing(session: &Session, doc: &Document, position: lsp::Position, ch: &str) -> Vec<lsp::TextEdit> {
    let row = position.line as usize;
    let edits = match ch {
        ":" => match doc.line(row) {
            Some(line) => match byte_offset(line, position.character) {
                Some(caret) => smart_colon(session, row, line, caret),
                None => Vec::new()
            },
            None => Vec::new()
        },
        "\n" => smart_newline(session, doc, row),
        _ => Vec::new()
    };
    debug!("format on type {:?} produced {} edits",ch,edits.len());
    if ch == "\n" && doc.line(row).is_none() {
        // new line is past the end of the text as we have it, supply the indentation directly
        let mut ans = to_lsp_edits(doc, &edits);
        let col = session.indent_column("");
        ans.push(lsp::TextEdit::new(lsp::Range::new(position,position),session.indenter().indentation(col)));
        return ans;
    }
    to_lsp_edits(doc, &edits)
}

/// Reindent rows `beg..end`, empty range means the whole document.
pub fn format_rows(session: &Session, text: &str, beg: usize, end: usize) -> Vec<LineEdit> {
    let mut ans = Vec::new();
    for (row,line) in text.lines().enumerate() {
        if beg < end && (row < beg || row >= end) {
            continue;
        }
        if let Some(edit) = reindent_edit(session, row, line) {
            ans.push(edit);
        }
    }
    ans
}

/// Reindent the lines touched by the selection, the whole document if the selection is empty.
pub fn format_range(session: &Session, doc: &Document, sel: lsp::Range) -> Vec<lsp::TextEdit> {
    let (beg,end) = match sel.start == sel.end {
        true => (0,0),
        false => (sel.start.line as usize,sel.end.line as usize + 1)
    };
    to_lsp_edits(doc, &format_rows(session, &doc.text, beg, end))
}

/// Toggle comments on rows `beg..end`.  If every non-blank row is already commented,
/// one comment character and one following space are removed from each.  Otherwise a
/// comment character and a space are inserted at the content of each non-blank row.
pub fn toggle_comment(session: &Session, text: &str, beg: usize, end: usize) -> Result<Vec<LineEdit>,Error> {
    if beg > end {
        return Err(Error::OutOfRange);
    }
    let cc = session.settings().comment_char;
    let mut rows = Vec::new();
    for (row,line) in text.lines().enumerate().skip(beg).take(end-beg) {
        let content = line.trim_start_matches([' ','\t']);
        if content.len() > 0 {
            rows.push((row,line.len()-content.len(),content));
        }
    }
    let uncomment = rows.len() > 0 && rows.iter().all(|(_,_,content)| content.starts_with(cc));
    let mut ans = Vec::new();
    for (row,offset,content) in rows {
        if uncomment {
            let mut len = cc.len_utf8();
            if content[len..].starts_with(' ') {
                len += 1;
            }
            ans.push(LineEdit { row, beg: offset, end: offset+len, new_text: String::new() });
        } else {
            ans.push(LineEdit { row, beg: offset, end: offset, new_text: format!("{} ",cc) });
        }
    }
    Ok(ans)
}
