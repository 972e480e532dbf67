use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of DialectId::ALL from md-babel
// We need to duplicate this here since build scripts can't access the library crates
const AVAILABLE_DIALECTS: &[&str] = &[
    "gfm",
    "commonmark",
    "kramdown",
    "obsidian",
    "discord",
    "reddit",
    "multimarkdown",
];

fn dialect_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_DIALECTS))
        .value_hint(ValueHint::Other)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdbabel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown between dialects")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-dialects")
                .long("list-dialects")
                .help("List supported dialects")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("convert")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(dialect_arg("from"))
                .arg(dialect_arg("to"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("save").long("save").action(ArgAction::SetTrue))
                .arg(Arg::new("wrap").long("wrap").value_hint(ValueHint::Other))
                .arg(
                    Arg::new("tight-lists")
                        .long("tight-lists")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("setext").long("setext").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("preview")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(dialect_arg("dialect"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdbabel", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdbabel", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdbabel", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
