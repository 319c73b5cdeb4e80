//! Module to classify spans of disassembly text.
//!
//! Each line is handled independently.  The comment, if any, is found first, and the
//! text in front of it is run through an ordered list of rules.  A match is kept only if
//! it does not overlap a span claimed by an earlier rule, so rule order is priority order.
//! Offsets in the resulting spans are byte offsets into the line.

use regex::Regex;
use super::{Category,TokenSpan,RCH};
use super::mnemonics;

/// Matching strategy for one category
enum Matcher {
    /// digit run with a space on both sides
    LineNumber(Regex),
    /// whole word that is in the mnemonic set, the slice suffix must end the word
    Mnemonic(Regex),
    /// span is the given capture group of every match
    Pattern(Regex,usize)
}

struct Rule {
    matcher: Matcher,
    category: Category
}

impl Rule {
    /// Candidate spans in this line, before priority is applied.
    fn candidates(&self, code: &str) -> Vec<(usize,usize)> {
        let mut ans = Vec::new();
        match &self.matcher {
            Matcher::LineNumber(re) => {
                let bytes = code.as_bytes();
                for m in re.find_iter(code) {
                    if m.start() > 0 && bytes[m.start()-1] == b' ' && m.end() < bytes.len() && bytes[m.end()] == b' ' {
                        ans.push((m.start(),m.end()));
                    }
                }
            },
            Matcher::Mnemonic(re) => {
                for caps in re.captures_iter(code) {
                    let whole = caps.get(0).expect(RCH);
                    let word = caps.get(1).expect(RCH);
                    if mnemonics::is_mnemonic(whole.as_str()) {
                        ans.push((whole.start(),whole.end()));
                    } else if mnemonics::is_mnemonic(word.as_str()) {
                        ans.push((word.start(),word.end()));
                    }
                }
            },
            Matcher::Pattern(re,group) => {
                for caps in re.captures_iter(code) {
                    if let Some(m) = caps.get(*group) {
                        ans.push((m.start(),m.end()));
                    }
                }
            }
        }
        ans
    }
}

/// Find the byte offset of the first comment character that is not escaped by a backslash.
/// An even run of backslashes escapes itself, not the comment character.
pub fn comment_start(line: &str, comment_char: char) -> Option<usize> {
    let mut backslashes = 0;
    for (i,c) in line.char_indices() {
        if c == comment_char && backslashes % 2 == 0 {
            return Some(i);
        }
        if c == '\\' {
            backslashes += 1;
        } else {
            backslashes = 0;
        }
    }
    None
}

pub struct Classifier {
    comment_char: char,
    rules: Vec<Rule>
}

impl Classifier {
    pub fn new(comment_char: char) -> Self {
        let rules = vec![
            Rule {
                matcher: Matcher::LineNumber(Regex::new(r"[0-9]+").expect(RCH)),
                category: Category::LineNumber
            },
            Rule {
                matcher: Matcher::Mnemonic(Regex::new(r"([A-Za-z0-9_]+)(\+[0-9])?\b").expect(RCH)),
                category: Category::Mnemonic
            },
            Rule {
                matcher: Matcher::Pattern(Regex::new(r"\(to [0-9]+\)").expect(RCH),0),
                category: Category::JumpTarget
            },
            Rule {
                matcher: Matcher::Pattern(Regex::new(r"^\s*(L?[0-9]+|[A-Za-z_][A-Za-z0-9_]*):").expect(RCH),1),
                category: Category::LabelDeclaration
            },
            Rule {
                matcher: Matcher::Pattern(Regex::new(r"\|[0-9a-fA-F]{2}|[0-9a-fA-F]{2}\|").expect(RCH),0),
                category: Category::HexOperand
            },
            Rule {
                matcher: Matcher::Pattern(Regex::new(r"(L[0-9]+) ").expect(RCH),1),
                category: Category::LabelOperand
            }
        ];
        Self {
            comment_char,
            rules
        }
    }
    pub fn comment_char(&self) -> char {
        self.comment_char
    }
    /// Category of the comment starting at `start`.  A full line comment whose marker is
    /// exactly doubled holds an embedded source fragment.
    fn comment_category(&self, line: &str, start: usize) -> Category {
        if line[0..start].trim().len() > 0 {
            return Category::Comment;
        }
        let markers = line[start..].chars().take_while(|c| *c == self.comment_char).count();
        match markers {
            2 => Category::EmbeddedSource,
            _ => Category::Comment
        }
    }
    /// Classify one line, the result is sorted and free of overlaps.
    pub fn classify_line(&self, line: &str) -> Vec<TokenSpan> {
        let maybe_comment = comment_start(line, self.comment_char);
        let code = match maybe_comment {
            Some(end) => &line[0..end],
            None => line
        };
        let mut ans: Vec<TokenSpan> = Vec::new();
        for rule in &self.rules {
            for (start,end) in rule.candidates(code) {
                if !ans.iter().any(|s| s.overlaps(start,end)) {
                    ans.push(TokenSpan::new(start,end,rule.category));
                }
            }
        }
        if let Some(start) = maybe_comment {
            ans.push(TokenSpan::new(start,line.len(),self.comment_category(line,start)));
        }
        ans.sort_by_key(|s| s.start);
        ans
    }
    /// Lazily classify every line of `text`, yielding the row with its spans.
    pub fn spans<'a>(&'a self, text: &'a str) -> impl Iterator<Item=(usize,Vec<TokenSpan>)> + 'a {
        text.lines().enumerate().map(move |(row,line)| (row,self.classify_line(line)))
    }
    /// Classify the whole text.
    pub fn classify(&self, text: &str) -> Vec<(usize,Vec<TokenSpan>)> {
        self.spans(text).collect()
    }
    /// Classify only rows in `beg..end`, this is what an incremental update needs.
    pub fn classify_rows(&self, text: &str, beg: usize, end: usize) -> Vec<(usize,Vec<TokenSpan>)> {
        self.spans(text).skip(beg).take(end.saturating_sub(beg)).collect()
    }
}
