use agora_news::ScraperConfig;
use agora_runner::{RunnerConfig, RunnerError, SimulationRunner};

const NEWS_URL_VAR: &str = "AGORA_NEWS_URL";

fn print_help() {
    eprintln!(
        r#"Agora - multi-agent stock trading simulation

USAGE:
    agora [OPTIONS] [TOTAL_STEPS]

ARGS:
    TOTAL_STEPS         Number of steps to run (default: 100)

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    AGORA_NEWS_URL      Fetch news from this endpoint instead of placeholders
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Run 100 steps with defaults
    agora

    # Run 20 steps
    agora 20

    # Run with config file and live news
    AGORA_NEWS_URL=https://news.example.com/api agora --config sim.json
"#
    );
}

struct Args {
    config_path: Option<String>,
    total_steps: Option<u64>,
}

enum Command {
    Run(Args),
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, RunnerError> {
    let mut parsed = Args {
        config_path: None,
        total_steps: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--config" | "-c" => {
                i += 1;
                let path = args.get(i).ok_or_else(|| {
                    RunnerError::InvalidArgument("--config requires a path argument".to_string())
                })?;
                parsed.config_path = Some(path.clone());
            }
            arg if parsed.total_steps.is_none() => {
                let steps = arg.parse::<u64>().map_err(|_| {
                    RunnerError::InvalidArgument(format!("not a step count: {}", arg))
                })?;
                parsed.total_steps = Some(steps);
            }
            arg => {
                return Err(RunnerError::InvalidArgument(format!(
                    "unexpected argument: {}",
                    arg
                )));
            }
        }
        i += 1;
    }

    Ok(Command::Run(parsed))
}

fn run(args: Args) -> Result<(), RunnerError> {
    let mut config = match &args.config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            RunnerConfig::from_file(path)?
        }
        None => RunnerConfig::default(),
    };

    if let Ok(url) = std::env::var(NEWS_URL_VAR) {
        let scraper = match config.news.take() {
            Some(existing) => ScraperConfig {
                base_url: url,
                ..existing
            },
            None => ScraperConfig::with_base_url(url),
        };
        scraper.validate()?;
        config.news = Some(scraper);
    }

    let total_steps = args.total_steps.unwrap_or(config.total_steps);
    let mut runner = SimulationRunner::new(config);
    let summary = runner.run(total_steps)?;

    log::info!(
        "Steps: {} | Trades: {} | Terminal: {}",
        summary.steps_taken,
        summary.total_trades,
        summary.reached_terminal
    );
    for (agent, trades) in &summary.trades_by_agent {
        log::info!("  {}: {} trades", agent, trades);
    }
    if let Some(asset) = summary.final_state.info.get("total_asset") {
        log::info!("Environment total asset: {}", asset);
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let result = match parse_args(&args) {
        Ok(Command::Help) => {
            print_help();
            Ok(())
        }
        Ok(Command::Run(args)) => run(args),
        Err(e) => {
            print_help();
            Err(e)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
