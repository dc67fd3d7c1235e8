use std::io::{self, BufRead};

use quiz_core::Clock;
use quiz_core::model::{LevelCatalog, UserProfile};
use rand::Rng;
use services::SessionController;

mod bank;
mod config;
mod shell;
mod text;

use bank::QuestionBank;
use config::{Config, Invocation, print_usage};
use shell::{Flow, Shell};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let invocation = Config::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let config = match invocation {
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
        Invocation::Run(config) => config,
    };

    let clock = Clock::system();
    let profile = match config.username.as_deref() {
        Some(name) => UserProfile::new(name, clock.today())?,
        None => UserProfile::seed(),
    };
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::info!(
        "session start: user={} language={} seed={seed}",
        profile.username(),
        config.language
    );

    let session = SessionController::new(LevelCatalog::standard(), profile)
        .with_language(config.language)
        .with_clock(clock);
    let mut shell = Shell::new(session, QuestionBank::seeded(seed), io::stdout().lock());
    shell.render()?;

    for line in io::stdin().lock().lines() {
        if shell.handle_line(&line?)? == Flow::Quit {
            break;
        }
    }

    log::debug!("leaving from the {} page", shell.session().page());
    let profile = shell.finish();
    log::info!(
        "session end: {} points, {} quizzes, average {}%",
        profile.total_points(),
        profile.total_quizzes(),
        profile.average_score()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
