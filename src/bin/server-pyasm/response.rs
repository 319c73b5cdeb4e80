//! Handle incoming responses to our requests

use lsp_server;
use super::logger;

pub fn handle_response(connection: &lsp_server::Connection, resp: lsp_server::Response, tools: &mut super::Tools) {
    match resp.id.to_string().as_str() {
        "\"pyasm-pull-config\"" => {
            match super::parse_configuration(resp) {
                Ok(config) => match tools.reconfigure(config) {
                    Ok(()) => logger(&connection,&format!("session activated for {} documents",tools.doc_chkpts.len())),
                    Err(e) => logger(&connection,&format!("settings were rejected, keeping the old session: {}",e))
                },
                Err(_) => logger(&connection,"could not parse config")
            }
        },
        "\"pyasm-reg-config\"" => {
            logger(&connection,"registration response was received");
        },
        s if s.starts_with("\"pyasm.commentRegion") => {
            if let Some(err) = resp.error {
                logger(&connection,&format!("client did not apply comment edits: {}",err.message));
            }
        },
        s => {
            logger(&connection,&format!("unhandled response: {}",s))
        }
    }
}
