use std::error::Error;
use std::process;

use clap::{App, AppSettings, Arg, SubCommand};

mod graphviz;
mod parse;
mod table;

use crate::parse::Halted;

fn main() {
    if let Err(err) = cli() {
        match err.downcast_ref::<Halted>() {
            // The error threshold message goes to stdout like the classic front end does
            Some(halted @ Halted::TooManyErrors { .. }) => println!("{}", halted),
            Some(halted) => eprintln!("{}", halted),
            None => eprintln!("Error: {}", err),
        }
        process::exit(1);
    }
}

fn cli() -> Result<(), Box<dyn Error>> {
    let matches = App::new("coolp_cli")
        .about("Parser front end for COOL programs")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            SubCommand::with_name("parse")
                .arg(
                    Arg::with_name("files")
                        .help("COOL source files forming one program")
                        .multiple(true)
                        .required(true),
                ).arg(
                    Arg::with_name("canonical")
                        .long("--canonical")
                        .help("Print canonical COOL source instead of the tree dump"),
                ).arg(
                    Arg::with_name("max-errors")
                        .long("--max-errors")
                        .takes_value(true)
                        .help("Give up after reporting more than this many syntax errors"),
                ).about("Parses COOL files and prints the resulting syntax tree"),
        ).subcommand(
            SubCommand::with_name("tokens")
                .arg(
                    Arg::with_name("file")
                        .help("COOL source file")
                        .required(true),
                ).about("Prints the tokens the scanner produces for a COOL file"),
        ).subcommand(
            SubCommand::with_name("table")
                .arg(
                    Arg::with_name("csv")
                        .long("--csv")
                        .takes_value(true)
                        .help("Write the parse table to a specified CSV file"),
                ).about("Prints the LALR parse table of the COOL grammar"),
        ).subcommand(
            SubCommand::with_name("graph")
                .arg(
                    Arg::with_name("output")
                        .long("--output")
                        .short("-o")
                        .takes_value(true)
                        .help("Write the generated graphviz graph to a file (*.dot)"),
                ).about("Outputs a graphviz graph showing the LALR states of the COOL grammar"),
        ).setting(AppSettings::ArgRequiredElseHelp)
        .get_matches();

    if let Some(parse_opts) = matches.subcommand_matches("parse") {
        let filenames: Vec<&str> = parse_opts.values_of("files").into_iter().flatten().collect();
        let mut options = parse::ParseOptions {
            canonical: parse_opts.is_present("canonical"),
            ..Default::default()
        };
        if let Some(max_errors) = parse_opts.value_of("max-errors") {
            options.max_errors = max_errors.parse()?;
        }
        parse::parse_files(&filenames, &options)?;
    }

    if let Some(tokens_opts) = matches.subcommand_matches("tokens") {
        if let Some(filename) = tokens_opts.value_of("file") {
            parse::print_tokens(filename)?;
        }
    }

    if let Some(table_opts) = matches.subcommand_matches("table") {
        if let Some(csv_filename) = table_opts.value_of("csv") {
            table::write_table_csv(csv_filename)?;
        } else {
            table::print_table();
        }
    }

    if let Some(graph_opts) = matches.subcommand_matches("graph") {
        if let Some(output_filename) = graph_opts.value_of("output") {
            graphviz::write_graphviz_graph(output_filename)?;
        } else {
            graphviz::show_graphviz_graph()?;
        }
    }

    Ok(())
}
