use std::io::{self, BufRead, Write};

use colored::Colorize;
use gacha_core::{GachaConfig, GachaSession};

pub fn run(seed: u64) -> Result<(), String> {
    let mut session = GachaSession::new(GachaConfig::default().with_seed(seed));

    println!("  {} Gacha Session", "Starting".bold());
    println!("  Seed: {seed}");
    println!("  Enter a charge between 0 and 1 per roll, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("charge> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match input.parse::<f64>() {
            Ok(charge) => {
                let outcome = session.roll(charge);
                println!("  {}", super::format_outcome(&outcome));
                println!("  {}\n", super::format_pity_status(&session));
            }
            Err(_) => {
                println!(
                    "{}\n",
                    format!("not a number: '{input}' (try 0.0-1.0 or 'quit')").yellow()
                );
            }
        }
    }

    println!("  {} rolls this session.", session.rolls());
    Ok(())
}
