use clap::{crate_version, Arg, ArgAction, Command};

fn config_arg() -> Arg {
    Arg::new("config").long("config").value_name("JSON").help("modify the mode settings")
        .long_help("JSON object with any of the keys commentChar, commentColumn, tabWidth, tabStops, useTabs")
        .required(false)
}

fn comment_char_arg() -> Arg {
    Arg::new("comment").long("comment-char").value_name("CHAR").help("character that starts a comment")
        .required(false)
}

fn row_arg(name: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(name).long(name).short(short).value_name("ROW").help(help)
        .value_parser(clap::value_parser!(usize))
        .required(true)
}

pub fn build_cli() -> Command {
    let long_help = "pyasm is always invoked with exactly one of several subcommands.
The subcommands read a disassembly listing from stdin and write to stdout,
so they can function as nodes in a pipeline.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
highlight a listing:   `python -m dis prog.py | pyasm highlight`
spans as JSON:         `pyasm highlight --json < prog.dis`
reindent a listing:    `pyasm indent --config '{\"commentColumn\":40}' < prog.dis`
comment out rows 3-5:  `pyasm comment -b 3 -e 6 < prog.dis`";

    let mut main_cmd = Command::new("pyasm")
        .about("Highlights and indents Python bytecode disassembly listings.")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(
        Command::new("highlight")
            .arg(config_arg())
            .arg(comment_char_arg())
            .arg(Arg::new("json").long("json").help("write spans as JSON").action(ArgAction::SetTrue))
            .arg(Arg::new("console").long("console").help("format for console unconditionally")
                .long_help("even if the output context is a file or pipe, format it for the console")
                .action(ArgAction::SetTrue)
                .conflicts_with("json"))
            .about("read from stdin, classify spans, write to stdout"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("indent")
            .arg(config_arg())
            .arg(comment_char_arg())
            .about("read from stdin, reindent every line, write to stdout"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("comment")
            .arg(config_arg())
            .arg(comment_char_arg())
            .arg(row_arg("beg",'b',"first row to toggle"))
            .arg(row_arg("end",'e',"last row to toggle plus 1"))
            .about("read from stdin, toggle comments on a range of rows, write to stdout"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("mnemonics")
            .about("write the known instruction names to stdout"),
    );
    main_cmd
}
