use std::io::{self, BufRead};

use live_scoreboard::config::ConsoleConfig;
use live_scoreboard::console::{Console, Outcome};

fn main() {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = ConsoleConfig::from_env();
    tracing::info!("Scoreboard console ready (output: {})", config.output);

    let mut console = Console::new(&config);
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };

        match console.execute(&line) {
            Ok(Outcome::Output(text)) => println!("{}", text),
            Ok(Outcome::Silent) => {}
            Ok(Outcome::Quit) => break,
            Err(e) => eprintln!("error: {}", e),
        }
    }
}
