use std::{env, fs, process::ExitCode, time::Instant};

use cpq::{
    compile_source,
    config::{Config, USAGE},
    format_error,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}\n{}", err, USAGE);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let file_name = config.file_name();

    let source = match fs::read_to_string(&config.input) {
        Ok(source) => source,
        Err(err) => {
            error!("failed to read {}: {}", config.input.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let program = match compile_source(source.clone(), &file_name) {
        Ok(program) => program,
        Err(err) => {
            eprint!("{}", format_error(&err, &file_name, &source));
            return ExitCode::FAILURE;
        }
    };

    info!(
        instructions = program.len(),
        warnings = program.warnings().len(),
        "compiled {} in {:?}",
        file_name,
        start.elapsed()
    );

    if let Err(err) = fs::write(&config.output, program.render(config.numbered)) {
        error!("failed to write {}: {}", config.output.display(), err);
        return ExitCode::FAILURE;
    }

    info!("wrote {}", config.output.display());
    ExitCode::SUCCESS
}
