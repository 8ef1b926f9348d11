use anrar::arg::Cli;
use anrar::errors::Error;
use anrar::extract::ProcessRunner;
use anrar::orchestrator::{self, EXIT_FATAL};

fn main() {
    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("{}", Error::from(err));
            std::process::exit(EXIT_FATAL);
        }
    };

    let ctx = match cli.into_context() {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(EXIT_FATAL);
        }
    };

    let mut runner = ProcessRunner::new();
    let code = match orchestrator::run(&ctx, &mut runner) {
        Ok(report) => report.exit_code(),
        Err(err) => {
            ctx.logger.fatal(err.to_string());
            EXIT_FATAL
        }
    };
    std::process::exit(code);
}
