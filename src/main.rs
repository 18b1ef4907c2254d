use clap::Parser;
use ip_range_cidrs::config::{init_logging, Cli};
use ip_range_cidrs::input::{read_ranges_file, RangeLine};
use ip_range_cidrs::output::write_results;
use ip_range_cidrs::processing::verify_cover;
use ip_range_cidrs::{decompose_lines, parse_range};
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    if let Err(e) = init_logging(&cli.log_config) {
        eprintln!("Error initializing log4rs: {e}");
        return ExitCode::FAILURE;
    }
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, Box<dyn Error>> {
    if !cli.color() {
        colored::control::set_override(false);
    }
    log::info!("#Start main()");

    let lines = match (&cli.begin, &cli.end, &cli.file) {
        (Some(begin), Some(end), _) => vec![Ok(RangeLine {
            line: 1,
            begin: begin.clone(),
            end: end.clone(),
        })],
        (_, _, Some(file)) => read_ranges_file(file)?,
        _ => return Err("expected BEGIN END or --file".into()),
    };
    let total = lines.len();

    let mut failed = 0;
    let mut results = Vec::new();
    for result in decompose_lines(lines) {
        match result {
            Ok(r) => {
                if cli.verify {
                    let range = parse_range(&r.begin, &r.end)?;
                    if let Err(v) = verify_cover(&range, &r.cidrs) {
                        log::error!("line {}: {range}: {v}", r.line);
                        failed += 1;
                    }
                }
                results.push(r);
            }
            Err(e) => {
                log::error!("{e}");
                failed += 1;
            }
        }
    }

    let mut stdout = io::stdout().lock();
    write_results(&mut stdout, &results, cli.format, cli.color())?;
    stdout.flush()?;

    log::info!("#End main() ranges={total} failed={failed}");
    if failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
