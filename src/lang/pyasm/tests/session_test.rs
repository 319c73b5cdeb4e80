//! Test of settings, activation, and the language server helpers.

use std::cell::Cell;
use std::rc::Rc;
use super::super::settings::{self,Settings};
use super::super::{Session,ModeHook,EditCommand,Category};

struct CommentHook(char);

impl ModeHook for CommentHook {
    fn before_activate(&self, settings: &mut Settings) {
        settings.comment_char = self.0;
    }
}

struct CountHook {
    count: Rc<Cell<usize>>
}

impl ModeHook for CountHook {
    fn after_activate(&self, session: &Session) {
        assert_eq!(session.indent_column("NOP"),8);
        self.count.set(self.count.get() + 1);
    }
}

mod config {
    use super::{settings,Settings};
    #[test]
    fn defaults() {
        let config = Settings::new();
        assert_eq!(config.comment_char,'#');
        assert_eq!(config.comment_column,32);
        assert_eq!(config.tab_width,8);
        assert!(config.tab_stops.is_empty());
        assert!(!config.use_tabs);
    }
    #[test]
    fn parse_all_keys() {
        let config = settings::parse(r#"{"commentChar":";","commentColumn":40,"tabWidth":4,"tabStops":[4,12],"useTabs":true,"other":1}"#).expect("parse failed");
        assert_eq!(config,Settings {
            comment_char: ';',
            comment_column: 40,
            tab_width: 4,
            tab_stops: vec![4,12],
            use_tabs: true
        });
    }
    #[test]
    fn bad_values_keep_defaults() {
        let config = settings::parse(r###"{"commentChar":"##","tabWidth":"wide","tabStops":[4,"x"],"useTabs":1}"###).expect("parse failed");
        assert_eq!(config,Settings::new());
        let config = settings::parse("[1,2,3]").expect("parse failed");
        assert_eq!(config,Settings::new());
    }
    #[test]
    fn invalid_json() {
        assert!(settings::parse("{commentChar:").is_err());
    }
    #[test]
    fn update_existing() {
        let mut config = Settings::new();
        config.comment_column = 50;
        settings::update(&mut config, r#"{"tabWidth":2}"#).expect("update failed");
        assert_eq!(config.comment_column,50);
        assert_eq!(config.tab_width,2);
    }
}

mod activation {
    use std::cell::Cell;
    use std::rc::Rc;
    use super::{Settings,Session,ModeHook,EditCommand,Category,CommentHook,CountHook};
    #[test]
    fn key_bindings() {
        let session = Session::new();
        assert_eq!(session.key_bindings().len(),2);
        assert_eq!(session.command_for_key(":"),Some(EditCommand::SmartColon));
        assert_eq!(session.command_for_key("C-c ;"),Some(EditCommand::ToggleComment));
        assert_eq!(session.command_for_key("C-c C-c"),None);
    }
    #[test]
    fn bad_comment_char() {
        for c in [' ','a','7','_',':','\\','(',')','|'] {
            let mut config = Settings::new();
            config.comment_char = c;
            assert!(Session::activate(config,&[]).is_err(),"accepted {:?}",c);
        }
        let mut config = Settings::new();
        config.comment_char = '!';
        assert!(Session::activate(config,&[]).is_ok());
    }
    #[test]
    fn unusable_tab_stops_still_activate() {
        let mut config = Settings::new();
        config.tab_width = 0;
        let session = Session::activate(config,&[]).expect("activation failed");
        assert_eq!(session.indent_column("    NOP"),0);
        assert_eq!(session.classify_line("    NOP").len(),1);
    }
    #[test]
    fn hooks_run_in_order() {
        let count = Rc::new(Cell::new(0));
        let hooks: Vec<Box<dyn ModeHook>> = vec![
            Box::new(CommentHook('%')),
            Box::new(CommentHook(';')),
            Box::new(CountHook { count: Rc::clone(&count) })
        ];
        let session = Session::activate(Settings::new(),&hooks).expect("activation failed");
        assert_eq!(count.get(),1);
        assert_eq!(session.settings().comment_char,';');
        assert_eq!(session.classifier().comment_char(),';');
        let line = "NOP ; done";
        assert_eq!(session.classify_line(line).last().map(|s| s.category),Some(Category::Comment));
    }
    #[test]
    fn hook_can_break_activation() {
        let hooks: Vec<Box<dyn ModeHook>> = vec![Box::new(CommentHook('x'))];
        assert!(Session::activate(Settings::new(),&hooks).is_err());
    }
}

mod server {
    use std::sync::Arc;
    use lsp_types as lsp;
    use super::{Session,Settings};
    use crate::lang::server::{Checkpoint,Tokens,SemanticTokensBuilder,TOKEN_TYPES};
    use crate::lang::pyasm::checkpoint::CheckpointManager;
    use crate::lang::pyasm::semantic_tokens::SemanticTokensProvider;
    use crate::lang::{normalize_client_uri_str,utf16_col,byte_offset};

    fn type_index(typ: &str) -> u32 {
        TOKEN_TYPES.iter().position(|t| *t == typ).expect("missing token type") as u32
    }
    #[test]
    fn semantic_tokens() {
        let mut provider = SemanticTokensProvider::new();
        let toks = provider.get("L2:\n    NOP # x\n").expect("tokens failed");
        assert_eq!(toks.data.len(),3);
        assert_eq!(toks.data[0].token_type,type_index("label"));
        assert_eq!(toks.data[0].token_modifiers_bitset,1);
        assert_eq!(toks.data[0].length,2);
        assert_eq!((toks.data[1].delta_line,toks.data[1].delta_start),(1,4));
        assert_eq!(toks.data[1].token_type,type_index("operator"));
        assert_eq!((toks.data[2].delta_line,toks.data[2].delta_start),(0,4));
        assert_eq!(toks.data[2].token_type,type_index("comment"));
        assert_eq!(toks.data[2].token_modifiers_bitset,2);
    }
    #[test]
    fn semantic_tokens_range() {
        let mut provider = SemanticTokensProvider::new();
        let rng = lsp::Range::new(lsp::Position::new(1,0),lsp::Position::new(1,3));
        let toks = provider.get_range("L2:\n    NOP # x\n",rng).expect("tokens failed");
        assert_eq!(toks.data.len(),2);
        assert_eq!((toks.data[0].delta_line,toks.data[0].delta_start),(1,4));
    }
    #[test]
    fn semantic_tokens_follow_session() {
        let mut config = Settings::new();
        config.comment_char = ';';
        let mut provider = SemanticTokensProvider::new();
        provider.use_session(Arc::new(Session::activate(config,&[]).expect("activation failed")));
        let toks = provider.get("NOP # x").expect("tokens failed");
        assert_eq!(toks.data.len(),1);
    }
    #[test]
    fn legend() {
        let legend = SemanticTokensBuilder::legend();
        assert_eq!(legend.token_types.len(),TOKEN_TYPES.len());
        assert_eq!(legend.token_modifiers.len(),2);
    }
    #[test]
    fn document_symbols() {
        let mut chkpt = CheckpointManager::new(Arc::new(Session::new()));
        let uri = normalize_client_uri_str("file:///C%3A/work/prog.dis").expect("bad uri");
        assert_eq!(uri.as_str(),"file:///c:/work/prog.dis");
        chkpt.update_doc(uri,"L2:\n    NOP\n  loop:\n".to_string(),Some(3));
        assert_eq!(chkpt.get_doc().version,Some(3));
        assert_eq!(chkpt.get_doc().line(1),Some("    NOP"));
        let symbols = chkpt.get_symbols();
        assert_eq!(symbols.len(),2);
        assert_eq!(symbols[0].name,"L2");
        assert_eq!(symbols[1].name,"loop");
        assert_eq!(symbols[1].range.start,lsp::Position::new(2,2));
        assert_eq!(symbols[1].kind,lsp::SymbolKind::CONSTANT);
    }
    #[test]
    fn utf16_columns() {
        let line = "é NOP";
        assert_eq!(utf16_col(line,3),2);
        assert_eq!(byte_offset(line,2),Some(3));
        assert_eq!(byte_offset(line,5),Some(6));
        assert_eq!(byte_offset(line,9),None);
    }
}
