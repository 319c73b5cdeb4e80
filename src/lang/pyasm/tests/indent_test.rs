//! Test of the indenter.

use super::super::settings::Settings;
use super::super::indenter::Indenter;
use super::super::Session;

fn indenter(json: &str) -> Indenter {
    let config = super::super::settings::parse(json).expect("bad settings");
    Indenter::new(&config)
}

mod rules {
    use super::{indenter,Settings,Indenter};
    #[test]
    fn labels_go_flush_left() {
        let ind = Indenter::new(&Settings::new());
        assert_eq!(ind.indent_column("label_1:"),0);
        assert_eq!(ind.indent_column("   label_1:"),0);
        assert_eq!(ind.indent_column("\tL12:"),0);
    }
    #[test]
    fn comments() {
        let ind = indenter(r#"{"commentColumn":40}"#);
        assert_eq!(ind.indent_column("# note"),40);
        assert_eq!(ind.indent_column("        #"),40);
        assert_eq!(ind.indent_column("### section"),0);
        assert_eq!(ind.indent_column("    #### banner"),0);
    }
    #[test]
    fn embedded_source_is_ordinary_content() {
        let ind = Indenter::new(&Settings::new());
        assert_eq!(ind.indent_column("## x = 1"),8);
    }
    #[test]
    fn tab_stops_every_8() {
        let ind = Indenter::new(&Settings::new());
        assert_eq!(ind.indent_column("   LOAD_FAST 0"),8);
        assert_eq!(ind.indent_column("LOAD_FAST 0"),8);
        assert_eq!(ind.indent_column("        LOAD_FAST 0"),8);
        assert_eq!(ind.indent_column("         LOAD_FAST 0"),16);
        assert_eq!(ind.indent_column(""),8);
    }
    #[test]
    fn leading_tabs_expand() {
        let ind = Indenter::new(&Settings::new());
        assert_eq!(ind.indent_column("\tNOP"),8);
        assert_eq!(ind.indent_column("\t NOP"),16);
        assert_eq!(ind.indent_column("  \tNOP"),8);
    }
    #[test]
    fn explicit_tab_stops() {
        let ind = indenter(r#"{"tabStops":[4,20]}"#);
        assert_eq!(ind.indent_column("  NOP"),4);
        assert_eq!(ind.indent_column("     NOP"),20);
        assert_eq!(ind.indent_column(&(" ".repeat(21) + "NOP")),36);
        let ind = indenter(r#"{"tabStops":[10],"tabWidth":4}"#);
        assert_eq!(ind.indent_column("NOP"),10);
        assert_eq!(ind.indent_column(&(" ".repeat(11) + "NOP")),14);
    }
    #[test]
    fn custom_comment_char() {
        let ind = indenter(r#"{"commentChar":";","commentColumn":24}"#);
        assert_eq!(ind.indent_column("; note"),24);
        assert_eq!(ind.indent_column(";;; section"),0);
        assert_eq!(ind.indent_column("# not a comment"),8);
    }
}

mod tab_stops {
    use super::{indenter,Settings,Indenter};
    use crate::lang::Error;
    #[test]
    fn next_stop() {
        let ind = Indenter::new(&Settings::new());
        assert_eq!(ind.next_tab_stop(0).unwrap(),8);
        assert_eq!(ind.next_tab_stop(8).unwrap(),16);
        assert_eq!(ind.next_tab_stop(9).unwrap(),16);
        let ind = indenter(r#"{"tabStops":[6,10,16]}"#);
        assert_eq!(ind.next_tab_stop(0).unwrap(),6);
        assert_eq!(ind.next_tab_stop(6).unwrap(),10);
        assert_eq!(ind.next_tab_stop(16).unwrap(),22);
        assert_eq!(ind.next_tab_stop(23).unwrap(),28);
    }
    #[test]
    fn bad_stops() {
        assert!(matches!(indenter(r#"{"tabStops":[8,4]}"#).validate(),Err(Error::BadTabStops)));
        assert!(matches!(indenter(r#"{"tabStops":[0,4]}"#).validate(),Err(Error::BadTabStops)));
        assert!(matches!(indenter(r#"{"tabWidth":0}"#).validate(),Err(Error::BadTabStops)));
        assert!(matches!(indenter(r#"{"commentColumn":-1}"#).validate(),Err(Error::BadTabStops)));
        assert!(indenter(r#"{"tabStops":[4,8]}"#).validate().is_ok());
    }
    #[test]
    fn columns_out_of_bounds() {
        for json in [
            r#"{"commentColumn":9223372036854775807}"#,
            r#"{"commentColumn":65536}"#,
            r#"{"tabWidth":1099511627776}"#,
            r#"{"tabStops":[8,1099511627776]}"#
        ] {
            let ind = indenter(json);
            assert!(matches!(ind.validate(),Err(Error::BadTabStops)),"accepted {}",json);
            assert_eq!(ind.indent_column("# note"),0);
            assert_eq!(ind.indent_column("    NOP"),0);
            assert_eq!(ind.reindent_line("    # note"),"# note");
        }
        let ind = indenter(r#"{"commentColumn":65535}"#);
        assert!(ind.validate().is_ok());
        assert_eq!(ind.indent_column("# note"),65535);
    }
    #[test]
    fn huge_columns_still_activate() {
        let config = crate::lang::pyasm::settings::parse(r#"{"commentColumn":9223372036854775807}"#).expect("bad settings");
        let session = crate::lang::pyasm::Session::activate(config,&[]).expect("activation failed");
        assert_eq!(session.reindent_line("  # note"),"# note");
    }
    #[test]
    fn fail_soft() {
        let ind = indenter(r#"{"tabWidth":0}"#);
        assert!(ind.try_indent_column("    NOP").is_err());
        assert_eq!(ind.indent_column("    NOP"),0);
        assert_eq!(ind.reindent_line("    NOP"),"NOP");
        let ind = indenter(r#"{"tabStops":[8,4]}"#);
        assert_eq!(ind.indent_column("    NOP"),0);
    }
}

mod reindent {
    use super::{indenter,Session};
    #[test]
    fn reindent_line() {
        let session = Session::new();
        assert_eq!(session.reindent_line("   LOAD_FAST 0"),"        LOAD_FAST 0");
        assert_eq!(session.reindent_line("    L4:"),"L4:");
        assert_eq!(session.reindent_line("\t# note"),format!("{}# note"," ".repeat(32)));
    }
    #[test]
    fn use_tabs() {
        let ind = indenter(r#"{"useTabs":true}"#);
        assert_eq!(ind.reindent_line("   LOAD_FAST 0"),"\tLOAD_FAST 0");
        assert_eq!(ind.reindent_line("# x"),"\t\t\t\t# x");
        let ind = indenter(r#"{"useTabs":true,"tabStops":[10]}"#);
        assert_eq!(ind.reindent_line("NOP"),"\t  NOP");
    }
    #[test]
    fn idempotent() {
        let session = Session::new();
        for line in ["   LOAD_FAST 0","L4:","  ### banner","# note","           NOP","\tRETURN_VALUE",""] {
            let once = session.reindent_line(line);
            assert_eq!(session.reindent_line(&once),once);
            assert_eq!(session.classify_line(&once).len(),session.classify_line(line.trim_start()).len());
        }
    }
}

mod smart_colon {
    use super::{Settings,Indenter};
    #[test]
    fn bare_identifier() {
        let ind = Indenter::new(&Settings::new());
        assert_eq!(ind.smart_colon("    foo"),Some(4));
        assert_eq!(ind.smart_colon("\tL12"),Some(1));
        assert_eq!(ind.smart_colon("foo"),Some(0));
    }
    #[test]
    fn other_contexts() {
        let ind = Indenter::new(&Settings::new());
        assert_eq!(ind.smart_colon("x = 3"),None);
        assert_eq!(ind.smart_colon("    LOAD_FAST 0"),None);
        assert_eq!(ind.smart_colon(""),None);
        assert_eq!(ind.smart_colon("  "),None);
    }
}
