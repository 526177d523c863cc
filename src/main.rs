use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use nl2code::banner::{self, Surface};
use nl2code::engine::{self, supported_commands_text};
use nl2code::session::Shell;

const NL2CODE_VERSION: &str = env!("CARGO_PKG_VERSION");
const NL2CODE_ABOUT: &str =
    "nl2code CLI – turns a fixed set of English commands into Python snippets.";

fn print_version() {
    println!("nl2code version {}", NL2CODE_VERSION);
}

fn print_about() {
    println!("{}", NL2CODE_ABOUT);
}

fn print_help() {
    println!(
        r#"
nl2code — help

Usage:
────────────────────────────────
nl2code "<command>"              → Print the snippet for one command
nl2code path/to/commands.txt     → One command per line, snippets separated by blank lines
nl2code                          → Interactive mode (one command per line)

Supported commands:
────────────────────────────────
{}

Matching ignores case and surrounding whitespace. Names and text are emitted
in lowercase.

Interactive mode:
────────────────────────────────
last                             → Show the last generated snippet again
help / version / about           → Meta commands
exit                             → Quit

Logging:
────────────────────────────────
RUST_LOG=debug                   → Show which rule matched each command (stderr)
"#,
        supported_commands_text()
    );
}

fn run_file(path: &Path) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading command file {}", path.display()))?;

    let snippets: Vec<String> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(engine::convert)
        .collect();

    tracing::info!(file = %path.display(), commands = snippets.len(), "translated command file");
    println!("{}", snippets.join("\n\n"));
    Ok(())
}

fn interactive() -> Result<()> {
    let mut shell = Shell::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("nl2code> ");
        io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;

        match line.trim() {
            "exit" | "quit" => {
                println!("Exiting...");
                break;
            }
            "help" => {
                print_help();
                continue;
            }
            "version" | "--version" | "-v" => {
                print_version();
                continue;
            }
            "about" | "--about" => {
                print_about();
                continue;
            }
            "last" => {
                println!("{}", shell.display());
                continue;
            }
            _ => {}
        }

        println!("{}", shell.submit(&line));
    }

    Ok(())
}

fn main() -> Result<()> {
    nl2code::init_logging("warn");
    banner::print(Surface::Cli);

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(first) = args.first() else {
        return interactive();
    };

    match first.as_str() {
        "help" | "--help" | "-h" => print_help(),
        "--version" | "-v" => print_version(),
        "--about" => print_about(),
        arg if args.len() == 1 && Path::new(arg).is_file() => run_file(Path::new(arg))?,
        _ => println!("{}", engine::convert(&args.join(" "))),
    }

    Ok(())
}
