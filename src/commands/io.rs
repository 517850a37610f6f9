//! Query input and result output
use std::fs::{self, File};
use std::io::{self, BufReader, IsTerminal, Write};

use routefind_core::error::{Result, RouteError};
use routefind_core::query::{read_query, Query};

use crate::cli::Cli;

/// Read the query from the input file, or from stdin for `-`
pub fn read_input(cli: &Cli) -> Result<Query> {
    if cli.reads_stdin() {
        let stdin = io::stdin();
        if stdin.is_terminal() && !cli.quiet {
            eprint!("Enter the start and destination cities: ");
            io::stderr().flush()?;
        }
        return read_query(stdin.lock(), "<stdin>");
    }

    let file = File::open(&cli.input)
        .map_err(|e| RouteError::io_operation("open", &cli.input, e))?;
    read_query(BufReader::new(file), &cli.input)
}

/// Write rendered results to the output file, or to stdout for `-`
pub fn write_output(cli: &Cli, rendered: &str) -> Result<()> {
    if cli.writes_stdout() {
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    fs::write(&cli.output, rendered)
        .map_err(|e| RouteError::io_operation("write", &cli.output, e))
}
