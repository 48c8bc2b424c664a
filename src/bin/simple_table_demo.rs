use log::LevelFilter;
use simple_table::logging::PlainLogger;
use simple_table::prelude::*;

const HELP_TEXT: &str = "\
simple_table_demo - print sample plain-text tables

USAGE:
    simple_table_demo [OPTIONS]

OPTIONS:
    --table <name>       Print only one table: methods, arguments, computers
    --log-level <level>  Log level for library events (off, error, warn, info, debug, trace)
    -h, --help           Print this help
";

#[derive(Debug, Default)]
struct Config {
    table: Option<String>,
    log_level: Option<LevelFilter>,
    help: bool,
}

fn parse_args(args: Vec<String>) -> Result<Config, String> {
    let mut cfg = Config::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => cfg.help = true,
            "--table" => {
                let name = args.next().ok_or("--table requires a value")?;
                if !matches!(name.as_str(), "methods" | "arguments" | "computers") {
                    return Err(format!("unknown table: {name}"));
                }
                cfg.table = Some(name);
            }
            "--log-level" => {
                let level = args.next().ok_or("--log-level requires a value")?;
                let level = level
                    .parse::<LevelFilter>()
                    .map_err(|_| format!("invalid log level: {level}"))?;
                cfg.log_level = Some(level);
            }
            other => return Err(format!("unknown argument: {other}\n\n{HELP_TEXT}")),
        }
    }

    Ok(cfg)
}

fn methods_table() -> Table {
    let mut table = Table::new([
        vec![
            "new()",
            "repr()",
            "len()",
            "eq()",
            "render()",
            "set()",
            "transpose()",
        ],
        vec![
            "Initialise with arguments",
            "returns Table call",
            "length of table",
            "is content equal?",
            "returns table as string",
            "modify options of existing table",
            "columns become rows",
        ],
        vec!["(columns)", "", "", "(other Table)", "", "(TableOptions)"],
    ])
    .header(["Method", "Purpose", "Arguments"]);
    table.set(
        TableOptions::new()
            .title("Methods of Table")
            .column_width(40),
    );
    table
}

fn arguments_table() -> Result<Table, TableError> {
    let mut table = Table::new([
        vec!["positional", "option", "option", "option"],
        vec!["", "header", "title", "columnwidth"],
        vec![
            "sequence(s) = columns",
            "text at top of columns",
            "text at top of table",
            "width of columns",
        ],
    ]);
    table.set_from_pairs([(
        "header",
        Value::from(vec!["kind of arguments", "option", "function"]),
    )])?;
    table.set_from_pairs([("title", Value::from("Arguments of Table"))])?;
    Ok(table)
}

fn computers_table() -> Table {
    let mut table = Table::new([
        vec![
            "CPU",
            "RAM",
            "Storage",
            "screen",
            "Disk OS",
            "Prog. language",
            "sound",
            "colors",
        ],
        vec!["Z80", "1KB", "Cassette", "TV", "", "Sinclair basic", "B/W"],
        vec![
            "Z80",
            "48KB",
            "Cassette",
            "TV",
            "",
            "Sinclair basic",
            "beeps",
            "16 colors?",
        ],
        vec![
            "Z80",
            "128KB",
            "3.5\" floppy",
            "Monitor",
            "MSX-DOS",
            "MSX-BASIC",
            "soundchip",
            "256 colors",
        ],
    ])
    .header(["", "ZX-81", "ZX-Spectrum", "MSX2"]);
    table.set(
        TableOptions::new()
            .column_width(14)
            .title("Computers of the past"),
    );
    table
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let cfg = match parse_args(args) {
        Ok(cfg) => cfg,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if cfg.help {
        print!("{HELP_TEXT}");
        return;
    }

    if let Some(level) = cfg.log_level
        && let Err(err) = PlainLogger::new().level(level).show_path(false).init()
    {
        eprintln!("failed to install logger: {err}");
    }

    let wants = |name: &str| cfg.table.as_deref().is_none_or(|table| table == name);

    if wants("methods") {
        println!("{}", methods_table());
    }

    if wants("arguments") {
        match arguments_table() {
            Ok(table) => println!("{table}"),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }

    if wants("computers") {
        let mut table = computers_table();
        println!("{table}");
        table.transpose();
        println!("{table}");
    }
}
