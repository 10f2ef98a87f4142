use a3s_cron_expand::{parse_schedule, CliError, OutputFormat};
use clap::Parser;
use colored::Colorize;

#[derive(Parser, Debug)]
#[command(
    name = "cron-expand",
    version,
    about = "Expand a cron expression into the values each field matches"
)]
struct Cli {
    /// Cron expression and command, quoted as one argument
    /// (e.g. "*/15 0 1,15 * 1-5 /usr/bin/find")
    #[arg(value_name = "EXPRESSION")]
    expression: Vec<String>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version go to stdout and succeed
            if e.use_stderr() {
                eprint!("{e}");
                std::process::exit(1);
            }
            print!("{e}");
            std::process::exit(0);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match run(&cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let expression = single_argument(&cli.expression)?;
    let schedule = parse_schedule(expression)?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };
    format.render(&schedule)
}

fn single_argument(args: &[String]) -> Result<&str, CliError> {
    match args {
        [one] => Ok(one.as_str()),
        [] => Err(CliError::Usage(
            "cron-expand \"<cron expression> <command>\" (missing expression)".into(),
        )),
        more => Err(CliError::Usage(format!(
            "cron-expand \"<cron expression> <command>\" (expected 1 argument, got {}; quote the expression)",
            more.len()
        ))),
    }
}
