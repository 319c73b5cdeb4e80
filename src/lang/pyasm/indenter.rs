//! Module to decide the indentation of a line.
//!
//! The decision looks only at the text starting at the first non-blank character:
//! * labels (`name:`) and block comments go flush left
//! * a single comment character goes to the comment column
//! * everything else goes to the first tab stop at or after the content
//!
//! Columns are character cells with leading tabs expanded to the tab width.

use regex::Regex;
use log::{debug,warn};
use super::settings::Settings;
use super::RCH;
use crate::lang::Error;
use crate::DYNERR;

/// Largest column or tab interval the indenter will produce.
pub const MAX_COLUMN: i64 = u16::MAX as i64;

pub struct Indenter {
    comment_char: char,
    comment_column: i64,
    tab_width: i64,
    tab_stops: Vec<i64>,
    use_tabs: bool,
    label_re: Regex,
    bare_ident_re: Regex
}

impl Indenter {
    pub fn new(settings: &Settings) -> Self {
        Self {
            comment_char: settings.comment_char,
            comment_column: settings.comment_column,
            tab_width: settings.tab_width,
            tab_stops: settings.tab_stops.clone(),
            use_tabs: settings.use_tabs,
            label_re: Regex::new(r"^[A-Za-z0-9_]+:").expect(RCH),
            bare_ident_re: Regex::new(r"^([ \t]*)[A-Za-z0-9_]+$").expect(RCH)
        }
    }
    /// Check the tab stop configuration, this is the only way the indenter can fail.
    pub fn validate(&self) -> Result<(),Error> {
        if self.tab_width < 1 || self.tab_width > MAX_COLUMN {
            return Err(Error::BadTabStops);
        }
        if self.comment_column < 0 || self.comment_column > MAX_COLUMN {
            return Err(Error::BadTabStops);
        }
        let mut prev = 0;
        for stop in &self.tab_stops {
            if *stop <= prev || *stop > MAX_COLUMN {
                return Err(Error::BadTabStops);
            }
            prev = *stop;
        }
        Ok(())
    }
    /// First tab stop strictly greater than `col`.
    pub fn next_tab_stop(&self, col: usize) -> Result<usize,Error> {
        self.validate()?;
        let col = col as i64;
        for stop in &self.tab_stops {
            if *stop > col {
                return Ok(*stop as usize);
            }
        }
        // continue past the explicit list using the last interval
        let (last,step) = match self.tab_stops.len() {
            0 => (0,self.tab_width),
            1 => (self.tab_stops[0],self.tab_width),
            n => (self.tab_stops[n-1],self.tab_stops[n-1]-self.tab_stops[n-2])
        };
        let n = (col - last) / step + 1;
        Ok((last + n*step) as usize)
    }
    /// Get the column and byte offset of the first character that is not a space or tab.
    pub fn content_column(&self, line: &str) -> Result<(usize,usize),Error> {
        if self.tab_width < 1 {
            return Err(Error::BadTabStops);
        }
        let tw = self.tab_width as usize;
        let mut col = 0;
        for (i,c) in line.char_indices() {
            match c {
                ' ' => col += 1,
                '\t' => col = (col/tw + 1)*tw,
                _ => return Ok((col,i))
            }
        }
        Ok((col,line.len()))
    }
    /// Compute the target column, propagating any failure.
    pub fn try_indent_column(&self, line: &str) -> Result<usize,DYNERR> {
        self.validate()?;
        let (col,offset) = self.content_column(line)?;
        let content = &line[offset..];
        if self.label_re.is_match(content) {
            return Ok(0);
        }
        let markers = content.chars().take_while(|c| *c == self.comment_char).count();
        if markers >= 3 {
            return Ok(0);
        }
        if markers == 1 {
            return Ok(usize::try_from(self.comment_column)?);
        }
        let mut stop = self.next_tab_stop(0)?;
        while stop < col {
            stop = self.next_tab_stop(stop)?;
        }
        Ok(stop)
    }
    /// Compute the target column.  This never fails, if something goes wrong the answer is 0.
    pub fn indent_column(&self, line: &str) -> usize {
        match self.try_indent_column(line) {
            Ok(col) => col,
            Err(e) => {
                warn!("indentation failed ({}), using column 0",e);
                0
            }
        }
    }
    /// Whitespace that fills `col` cells, respecting the tab preference.
    pub fn indentation(&self, col: usize) -> String {
        if self.use_tabs && self.tab_width > 0 {
            let tw = self.tab_width as usize;
            "\t".repeat(col/tw) + &" ".repeat(col%tw)
        } else {
            " ".repeat(col)
        }
    }
    /// Replace the leading whitespace of `line` with the computed indentation.
    pub fn reindent_line(&self, line: &str) -> String {
        let col = self.indent_column(line);
        let content = line.trim_start_matches([' ','\t']);
        debug!("reindent to {}: {}",col,content);
        self.indentation(col) + content
    }
    /// Given the text in front of a colon that is about to be typed, decide whether the
    /// colon completes a label.  If so return the number of bytes of leading whitespace
    /// to delete (possibly 0), otherwise None.
    pub fn smart_colon(&self, before: &str) -> Option<usize> {
        match self.bare_ident_re.captures(before) {
            Some(caps) => caps.get(1).map(|m| m.end()),
            None => None
        }
    }
}
