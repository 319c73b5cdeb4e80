//! ## Language Analysis and Transformations

use std::io::Read;
use colored::{ColoredString,Colorize};
use serde::Serialize;
use super::CommandError;
use crate::lang::pyasm::{settings,formatter,mnemonics,Category,Session};
use crate::{STDRESULT,DYNERR};
const RCH: &str = "unreachable was reached";

#[derive(Serialize)]
struct SpanRecord<'a> {
    row: usize,
    start: usize,
    end: usize,
    category: Category,
    text: &'a str
}

/// Activate a session using the `--config` and `--comment-char` arguments.
fn session_from_args(cmd: &clap::ArgMatches) -> Result<Session,DYNERR> {
    let mut config = settings::Settings::new();
    if let Some(json) = cmd.get_one::<String>("config") {
        settings::update(&mut config, json)?;
    }
    if let Some(s) = cmd.get_one::<String>("comment") {
        let mut chars = s.chars();
        match (chars.next(),chars.next()) {
            (Some(c),None) => config.comment_char = c,
            _ => {
                log::error!("comment character should be a single character");
                return Err(Box::new(CommandError::InvalidCommand));
            }
        }
    }
    Session::activate(config, &[])
}

fn read_stdin() -> Result<String,DYNERR> {
    if atty::is(atty::Stream::Stdin) {
        log::error!("line entry is not supported, please pipe something in");
        return Err(Box::new(CommandError::InvalidCommand));
    }
    let mut program = String::new();
    match std::io::stdin().read_to_string(&mut program) {
        Ok(_) => Ok(program),
        Err(e) => {
            log::error!("the listing could not be interpreted as a string");
            Err(Box::new(e))
        }
    }
}

fn paint(txt: &str, category: Category) -> ColoredString {
    match category {
        Category::LineNumber => txt.yellow(),
        Category::Mnemonic => txt.bright_blue().bold(),
        Category::JumpTarget => txt.cyan(),
        Category::LabelDeclaration => txt.magenta().bold(),
        Category::HexOperand => txt.cyan(),
        Category::LabelOperand => txt.magenta(),
        Category::Comment => txt.green().italic(),
        Category::EmbeddedSource => txt.bright_green()
    }
}

pub fn highlight(cmd: &clap::ArgMatches) -> STDRESULT {
    let session = session_from_args(cmd)?;
    let program = read_stdin()?;
    let lines: Vec<&str> = program.lines().collect();
    let classified = session.classify(&program);
    if cmd.get_flag("json") {
        let mut records = Vec::new();
        for (row,spans) in &classified {
            for span in spans {
                records.push(SpanRecord {
                    row: *row,
                    start: span.start,
                    end: span.end,
                    category: span.category,
                    text: span.text(lines[*row])
                });
            }
        }
        println!("{}",serde_json::to_string(&records)?);
        return Ok(());
    }
    if cmd.get_flag("console") || atty::is(atty::Stream::Stdout) {
        for (row,spans) in &classified {
            let line = lines[*row];
            let mut out = String::new();
            let mut pos = 0;
            for span in spans {
                out += &line[pos..span.start];
                out += &paint(span.text(line),span.category).to_string();
                pos = span.end;
            }
            out += &line[pos..];
            println!("{}",out);
        }
        return Ok(());
    }
    for (row,spans) in &classified {
        for span in spans {
            println!("{}:{}:{}:{}:{}",row,span.start,span.end,span.category,span.text(lines[*row]));
        }
    }
    Ok(())
}

pub fn indent(cmd: &clap::ArgMatches) -> STDRESULT {
    let session = session_from_args(cmd)?;
    let program = read_stdin()?;
    let edits = formatter::format_rows(&session, &program, 0, 0);
    log::debug!("{} lines were reindented",edits.len());
    print!("{}",formatter::apply_line_edits(&program, &edits));
    Ok(())
}

pub fn comment(cmd: &clap::ArgMatches) -> STDRESULT {
    let session = session_from_args(cmd)?;
    let beg = *cmd.get_one::<usize>("beg").expect(RCH);
    let end = *cmd.get_one::<usize>("end").expect(RCH);
    if beg > end {
        log::error!("beginning row {} is past end row {}",beg,end);
        return Err(Box::new(CommandError::OutOfRange));
    }
    let program = read_stdin()?;
    let edits = formatter::toggle_comment(&session, &program, beg, end)?;
    print!("{}",formatter::apply_line_edits(&program, &edits));
    Ok(())
}

pub fn mnemonics() -> STDRESULT {
    for m in mnemonics::sorted() {
        println!("{}",m);
    }
    Ok(())
}
