// Command-line interface for md-babel
//
// This binary converts Markdown documents between dialects and renders previews of the result.
// The conversion work itself lives in the md-babel crate; this crate only deals with files,
// flags and configuration.
//
// Converting:
//
// The conversion needs a from and to pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. When neither works, the configured
// default is used. The same goes for --to.
// Usage:
//  mdbabel <input> --to <dialect> [--from <dialect>] [-o <file> | --save]   - Convert (default)
//  mdbabel convert <input> --to <dialect> ...                              - Same as above (explicit)
//  mdbabel preview <input> [--dialect <dialect>] [-o <file>]               - Render converted text as HTML
//  mdbabel --list-dialects                                                 - List supported dialects
//
// Input `-` reads stdin.
//
// Extra Parameters:
//
// Configuration can be overridden for one run using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies the value over the loaded configuration.
// Example:
//  mdbabel notes.md --to obsidian --extra-wrap-width 72 --extra-tight-lists

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use md_babel::{
    convert, render_preview, ComrakRenderer, ConversionOptions, DialectId, DialectRegistry,
    MAX_WRAP_WIDTH, MIN_WRAP_WIDTH,
};
use md_config::{Loader, MdConfig, USER_CONFIG_FILE};
use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::io::Read;

const STDIN_PATH: &str = "-";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .map(|next| !next.starts_with('-'))
                .unwrap_or(false);

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn dialect_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_parser(clap::builder::PossibleValuesParser::new(
            DialectId::ALL.map(|id| id.as_str()),
        ))
        .value_hint(ValueHint::Other)
}

fn build_cli() -> Command {
    Command::new("mdbabel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown between dialects")
        .long_about(
            "mdbabel converts Markdown documents between dialects: GFM, CommonMark, Kramdown,\n\
            Obsidian, Discord, Reddit and MultiMarkdown.\n\n\
            Commands:\n  \
            - convert: Rewrite a document from one dialect to another (default command)\n  \
            - preview: Render a converted document as HTML\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration for one run.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdbabel notes.md --to obsidian               # Convert to Obsidian (stdout)\n  \
            mdbabel vault/page.md --from obsidian --to gfm -o page.md\n  \
            cat post.md | mdbabel - --to reddit --save   # Writes converted.reddit.md\n  \
            mdbabel preview page.md --dialect obsidian -o page.html",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-dialects")
                .long("list-dialects")
                .help("List supported dialects")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdbabel.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline stages to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between Markdown dialects (default command)")
                .long_about(
                    "Convert a document from one Markdown dialect to another.\n\n\
                    The source dialect is auto-detected from the file extension (.mmd, .kd)\n\
                    and falls back to the configured default.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    mdbabel convert notes.md --from obsidian --to commonmark\n  \
                    mdbabel convert post.md --to discord --wrap 72\n  \
                    mdbabel convert list.md --to gfm --tight-lists --setext",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(dialect_arg(
                    "from",
                    "Source dialect (auto-detected from file extension if not specified)",
                ))
                .arg(dialect_arg("to", "Target dialect"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath)
                        .conflicts_with("save"),
                )
                .arg(
                    Arg::new("save")
                        .long("save")
                        .help("Write to converted.<target>.md in the current directory")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("wrap")
                        .long("wrap")
                        .value_name("WIDTH")
                        .help("Re-wrap paragraphs to WIDTH columns (0 disables)")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("tight-lists")
                        .long("tight-lists")
                        .help("Remove blank lines between list items")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("setext")
                        .long("setext")
                        .help("Underline level 1 and 2 headings")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Render a converted document as HTML")
                .long_about(
                    "Render a document as HTML the way its dialect would display it.\n\n\
                    Spoilers become styled spans and Obsidian wiki-links become anchors.\n\
                    The preview is display-only and never feeds back into a conversion.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(dialect_arg(
                    "dialect",
                    "Dialect the input is written in (auto-detected if not specified)",
                ))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A leading path means the subcommand was left out: inject "convert"
            if cleaned_args.len() > 1
                && (!cleaned_args[1].starts_with('-') || cleaned_args[1] == STDIN_PATH)
                && !matches!(cleaned_args[1].as_str(), "convert" | "preview" | "help")
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-dialects") {
        handle_list_dialects_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    if !extra_params.is_empty() {
        let mut unknown: Vec<&str> = extra_params.keys().map(|key| key.as_str()).collect();
        unknown.sort_unstable();
        exit_with(format!("Unknown parameter(s): --extra-{}", unknown.join(", --extra-")));
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &config),
        Some(("preview", sub_matches)) => handle_preview_command(sub_matches, &config),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: &MdConfig) {
    let input = required_arg(matches, "input");
    let registry = DialectRegistry::default();

    let from = match matches.get_one::<String>("from") {
        Some(raw) => parse_dialect(raw),
        None => detect_dialect(&registry, input).unwrap_or(config.convert.from),
    };
    let to = matches
        .get_one::<String>("to")
        .map(|raw| parse_dialect(raw))
        .unwrap_or(config.convert.to);

    let options = conversion_options(matches, config);
    let source = read_input(input);
    log::info!("converting '{input}' from {from} to {to}");

    let converted = convert(&source, from, to, &options).unwrap_or_else(|e| exit_with(e));

    if matches.get_flag("save") {
        write_output(&saved_file_name(to), &converted);
    } else {
        emit(matches.get_one::<String>("output").map(|s| s.as_str()), &converted);
    }
}

/// Handle the preview command
fn handle_preview_command(matches: &ArgMatches, config: &MdConfig) {
    let input = required_arg(matches, "input");
    let registry = DialectRegistry::default();

    let dialect = match matches.get_one::<String>("dialect") {
        Some(raw) => parse_dialect(raw),
        None => detect_dialect(&registry, input).unwrap_or(config.preview.dialect),
    };

    let source = read_input(input);
    let html = render_preview(&source, dialect, &ComrakRenderer).unwrap_or_else(|e| exit_with(e));
    emit(matches.get_one::<String>("output").map(|s| s.as_str()), &html);
}

/// Handle the list-dialects command
fn handle_list_dialects_command() {
    let registry = DialectRegistry::default();
    println!("Available dialects:\n");
    for id in registry.list_dialects() {
        let description = registry
            .get(id)
            .map(|dialect| dialect.description().to_string())
            .unwrap_or_default();
        println!("  {:<14} {}", id.as_str(), id.display_name());
        if !description.is_empty() {
            println!("  {:<14} {description}", "");
        }
    }
}

/// Explicit flags win over configuration, which already carries any --extra-* overrides.
fn conversion_options(matches: &ArgMatches, config: &MdConfig) -> ConversionOptions {
    let mut options = ConversionOptions::from(&config.convert);
    if let Some(width) = matches.get_one::<usize>("wrap") {
        options.wrap_width = Some(*width);
    }
    if matches.get_flag("tight-lists") {
        options.tighten_lists = true;
    }
    if matches.get_flag("setext") {
        options.use_setext_headings = true;
    }
    options
}

fn detect_dialect(registry: &DialectRegistry, input: &str) -> Option<DialectId> {
    if input == STDIN_PATH {
        return None;
    }
    let detected = registry.detect_from_filename(input);
    if let Some(id) = detected {
        log::debug!("detected {id} from '{input}'");
    }
    detected
}

fn saved_file_name(target: DialectId) -> String {
    format!("converted.{}.md", target.as_str())
}

fn required_arg<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_else(|| exit_with(format!("Missing required argument '{name}'")))
}

fn parse_dialect(raw: &str) -> DialectId {
    raw.parse().unwrap_or_else(|e| exit_with(e))
}

fn read_input(path: &str) -> String {
    if path == STDIN_PATH {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| exit_with(format!("Failed to read stdin: {e}")));
        return source;
    }
    fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with(format!("Failed to read file '{path}': {e}")))
}

fn emit(output: Option<&str>, text: &str) {
    match output {
        Some(path) => write_output(path, text),
        None => println!("{text}"),
    }
}

fn write_output(path: &str, text: &str) {
    fs::write(path, text)
        .unwrap_or_else(|e| exit_with(format!("Failed to write file '{path}': {e}")));
    log::info!("wrote {} bytes to '{path}'", text.len());
}

fn exit_with(message: impl Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn load_cli_config(explicit_path: Option<&str>) -> MdConfig {
    let loader = Loader::new().with_optional_file(USER_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader
        .build()
        .unwrap_or_else(|err| exit_with(format!("Failed to load configuration: {err}")))
}

fn apply_config_overrides(config: &mut MdConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["wrap-width", "wrap"]) {
        let width: usize = raw.parse().unwrap_or_else(|_| {
            exit_with(format!(
                "Invalid width '{raw}' for --extra-wrap-width (expected 0 or {MIN_WRAP_WIDTH}..={MAX_WRAP_WIDTH})"
            ))
        });
        config.convert.wrap = width > 0;
        config.convert.wrap_width = width;
    }
    if let Some(raw) = take_override(extra_params, &["tight-lists", "tighten-lists"]) {
        config.convert.tighten_lists = parse_bool_arg("tight-lists", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["setext", "setext-headings"]) {
        config.convert.setext_headings = parse_bool_arg("setext", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => exit_with(format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}
