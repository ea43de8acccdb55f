extern crate asmvm;

#[macro_use]
extern crate log;
extern crate env_logger;

#[macro_use]
extern crate clap;

use asmvm::config::Value;
use asmvm::{asm, vm, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::env;
use std::fs::{self, File};
use std::io::BufWriter;
use std::process;

fn main() {
    let matches = App::new("asmvm")
        .about("Assembler and interpreter for a four-instruction stack machine")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::from_usage("-d, --debug 'Enable debug messages'").global(true))
        .subcommand(SubCommand::with_name("assemble")
            .about("Translates source text into a binary program")
            .args_from_usage("<SOURCE> 'Source file'
                              <BINARY> 'Binary output file'
                              <LOG> 'Trace log output file'"))
        .subcommand(SubCommand::with_name("interpret")
            .about("Executes a binary program and dumps a memory range")
            .args_from_usage("<BINARY> 'Binary program'
                              <RESULT> 'Memory dump output file'")
            .arg(Arg::with_name("memory-range")
                .long("memory-range")
                .value_names(&["LO", "HI"])
                .number_of_values(2)
                .allow_hyphen_values(true)
                .required(true)
                .help("Half-open address range to dump")))
        .get_matches();

    if matches.is_present("debug") {
        env::set_var("RUST_LOG", "asmvm=debug");
    }
    let _ = env_logger::try_init();

    if let Err(e) = do_checked_main(&matches) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn do_checked_main(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        ("assemble", Some(m)) => assemble(m),
        ("interpret", Some(m)) => interpret(m),
        _ => unreachable!(),
    }
}

fn assemble(matches: &ArgMatches) -> Result<()> {
    let source = fs::read_to_string(path(matches, "SOURCE"))?;
    let binary = BufWriter::new(File::create(path(matches, "BINARY"))?);
    let log = BufWriter::new(File::create(path(matches, "LOG"))?);

    asm::assemble(&source, binary, log)?;
    Ok(())
}

fn interpret(matches: &ArgMatches) -> Result<()> {
    let (lo, hi) = memory_range(matches);
    let program = fs::read(path(matches, "BINARY"))?;

    let records = vm::execute(program, lo, hi)?;

    let result = BufWriter::new(File::create(path(matches, "RESULT"))?);
    vm::write_dump(records, result)
}

fn path<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches.value_of(name).unwrap()
}

fn memory_range(matches: &ArgMatches) -> (Value, Value) {
    let bounds = values_t!(matches, "memory-range", Value).unwrap_or_else(|e| e.exit());
    debug!("memory range {:?}", bounds);
    (bounds[0], bounds[1])
}
