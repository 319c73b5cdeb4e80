//! Provide our response to incoming requests

use lsp_types as lsp;
use lsp::request::Request;
use lsp_server::{Connection,RequestId,Response};
use serde_json;
use std::collections::HashMap;
use std::sync::Arc;
use pyasm::lang::server::{Checkpoint,Tokens,send_edit_req};
use pyasm::lang::server::rpc_error::PARSE_ERROR;
use pyasm::lang::{normalize_client_uri,normalize_client_uri_str};
use pyasm::lang::pyasm::formatter;
use super::logger;

fn def_response(req_id: RequestId, meth: &str) -> lsp_server::Response {
    let mess = req_id.to_string();
    lsp_server::Response::new_err(req_id,PARSE_ERROR,format!("request {} ({}) not understood",mess,meth))
}

/// returns true if there was a shutdown request
pub fn handle_request(
    connection: &Connection,
    req: lsp_server::Request,
    tools: &mut super::Tools) -> bool {

    let mut resp = def_response(req.id.clone(),&req.method);
    let mut chkpts = HashMap::new();
    for (k,v) in &tools.doc_chkpts {
        chkpts.insert(k.to_string(),Arc::new(v));
    }

    match req.method.as_str() {
        lsp::request::DocumentSymbolRequest::METHOD => Checkpoint::symbol_response(chkpts, req.clone(), &mut resp),
        lsp::request::SemanticTokensFullRequest::METHOD => Checkpoint::sem_tok_response(chkpts, &mut tools.highlighter, req.clone(), &mut resp),
        lsp::request::SemanticTokensRangeRequest::METHOD => Checkpoint::sem_tok_range_response(chkpts, &mut tools.highlighter, req.clone(), &mut resp),

        lsp::request::Shutdown::METHOD => {
            logger(&connection,"shutdown request");
            resp = lsp_server::Response::new_ok(req.id.clone(), ());
            if let Err(_) = connection.sender.send(resp.into()) {
                logger(&connection,"failed to respond to shutdown request");
            }
            // wait for the exit notification
            let _ = connection.receiver.recv_timeout(std::time::Duration::from_secs(30));
            return true;
        },

        lsp::request::RangeFormatting::METHOD => {
            if let Ok(params) = serde_json::from_value::<lsp::DocumentRangeFormattingParams>(req.params) {
                let normalized_uri = normalize_client_uri(params.text_document.uri);
                if let Some(chk) = tools.doc_chkpts.get(normalized_uri.as_str()) {
                    let edits = formatter::format_range(&chk.shared_session(), &chk.get_doc(), params.range);
                    resp = lsp_server::Response::new_ok(req.id,edits);
                }
            }
        },

        lsp::request::OnTypeFormatting::METHOD => {
            if let Ok(params) = serde_json::from_value::<lsp::DocumentOnTypeFormattingParams>(req.params) {
                let normalized_uri = normalize_client_uri(params.text_document_position.text_document.uri);
                if let Some(chk) = tools.doc_chkpts.get(normalized_uri.as_str()) {
                    let edits = formatter::format_typing(&chk.shared_session(), &chk.get_doc(), params.text_document_position.position, &params.ch);
                    resp = lsp_server::Response::new_ok(req.id,edits);
                }
            }
        },

        lsp::request::ExecuteCommand::METHOD => {
            if let Ok(params) = serde_json::from_value::<lsp::ExecuteCommandParams>(req.params) {
                match params.command.as_str() {
                    "pyasm.commentRegion" => {
                        if params.arguments.len()==3 {
                            let uri_res = serde_json::from_value::<String>(params.arguments[0].clone());
                            let beg_res = serde_json::from_value::<usize>(params.arguments[1].clone());
                            let end_res = serde_json::from_value::<usize>(params.arguments[2].clone());
                            resp = match (uri_res,beg_res,end_res) {
                                (Ok(uri),Ok(beg),Ok(end)) => match normalize_client_uri_str(&uri) {
                                    Ok(normalized_uri) => match tools.doc_chkpts.get(&normalized_uri.to_string()) {
                                        Some(chk) => {
                                            let doc = chk.get_doc();
                                            match formatter::toggle_comment(&chk.shared_session(), &doc.text, beg, end) {
                                                Ok(edits) => {
                                                    let lsp_edits = formatter::to_lsp_edits(&doc, &edits);
                                                    match send_edit_req(connection, &doc, "pyasm.commentRegion", lsp_edits) {
                                                        Ok(()) => Response::new_ok(req.id,serde_json::Value::Null),
                                                        Err(e) => Response::new_err(req.id,PARSE_ERROR,e)
                                                    }
                                                },
                                                Err(e) => Response::new_err(req.id,PARSE_ERROR,e.to_string())
                                            }
                                        },
                                        None => Response::new_err(req.id,PARSE_ERROR,"cannot comment due to missing checkpoint".to_string())
                                    },
                                    Err(_) => Response::new_err(req.id,PARSE_ERROR,"could not parse URI".to_string())
                                },
                                _ => Response::new_err(req.id,PARSE_ERROR,"bad arguments to comment region".to_string())
                            };
                        }
                    },
                    "pyasm.semantic.tokens" => {
                        if params.arguments.len()==1 {
                            if let Ok(program) = serde_json::from_value::<String>(params.arguments[0].clone()) {
                                resp = match tools.highlighter.get(&program) {
                                    Ok(result) => lsp_server::Response::new_ok(req.id,result),
                                    Err(_) => lsp_server::Response::new_err(req.id,PARSE_ERROR,"semantic tokens failed".to_string())
                                };
                            }
                        }
                    },
                    _ => {
                        logger(&connection,&format!("unhandled command {}",params.command));
                    }
                }
            }
        },
        _ => {
            logger(&connection,&format!("unhandled request: {}",req.method))
        }
    }
    if let Err(_) = connection.sender.send(lsp_server::Message::Response(resp)) {
        logger(&connection,&format!("could not send response to {}",req.method));
    }
    false
}
