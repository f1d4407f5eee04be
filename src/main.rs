use std::io;
use std::process::ExitCode;
use wordle_game::cli::{Cli, CliInterface, parse_cli};
use wordle_game::logging::init_logging;
use wordle_game::tui::TuiInterface;
use wordle_game::{AppError, game_loop};

fn main() -> ExitCode {
    let cli = parse_cli();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wordle-game: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    init_logging(cli.log_path().as_deref())?;
    let source = cli.secret_source()?;
    let config = cli.loop_config();
    log::info!("Starting ({} interface)", if cli.plain { "plain" } else { "tui" });

    let outcomes = if cli.plain {
        let stdin = io::stdin();
        let mut interface =
            CliInterface::new(stdin.lock(), io::stdout()).with_diagnostics(cli.verbose);
        game_loop(&source, &mut interface, &config)?
    } else {
        let mut interface = TuiInterface::new()?;
        game_loop(&source, &mut interface, &config)?
    };

    log::info!("Finished {} games", outcomes.len());
    Ok(())
}
