//! Parse settings string sent by any client.
//!
//! The server will check for specific keys that may affect its operation.
//! The settings structure can then be used by the various modules.
//! Bad values are logged and the default is kept.

use serde_json;
use log::warn;
use crate::DYNERR;
use crate::lang::{update_json_bool,update_json_i64,update_json_string,update_json_vec_i64};

#[derive(Clone,Debug,PartialEq)]
pub struct Settings {
    /// starts a comment, runs to end of line
    pub comment_char: char,
    /// column where trailing style comments are placed
    pub comment_column: i64,
    /// interval between tab stops, also used to expand leading tabs
    pub tab_width: i64,
    /// explicit tab stops, if empty stops are multiples of `tab_width`
    pub tab_stops: Vec<i64>,
    /// write indentation using tabs where possible
    pub use_tabs: bool
}

impl Settings {
    pub fn new() -> Self {
        Self {
            comment_char: '#',
            comment_column: 32,
            tab_width: 8,
            tab_stops: Vec::new(),
            use_tabs: false
        }
    }
}

pub fn parse(json: &str) -> Result<Settings,DYNERR> {
    let mut ans = Settings::new();
    update(&mut ans, json)?;
    Ok(ans)
}

/// Apply keys found in the JSON string to existing settings.
pub fn update(ans: &mut Settings, json: &str) -> Result<(),DYNERR> {
    let root = serde_json::from_str::<serde_json::Value>(json)?;
    if !root.is_object() {
        warn!("settings should be a JSON object");
        return Ok(());
    }
    let mut comment_char = ans.comment_char.to_string();
    update_json_string(&root, "commentChar", &mut comment_char);
    let mut chars = comment_char.chars();
    match (chars.next(),chars.next()) {
        (Some(c),None) => ans.comment_char = c,
        _ => warn!("commentChar should be exactly one character, keeping {}",ans.comment_char)
    }
    update_json_i64(&root, "commentColumn", &mut ans.comment_column);
    update_json_i64(&root, "tabWidth", &mut ans.tab_width);
    update_json_vec_i64(&root, "tabStops", &mut ans.tab_stops);
    update_json_bool(&root, "useTabs", &mut ans.use_tabs);
    Ok(())
}
