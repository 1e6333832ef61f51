use colored::Colorize;
use gacha_core::{GachaConfig, GachaSession};

pub fn run(charge: f64, count: u32, seed: u64) -> Result<(), String> {
    if count == 0 {
        return Err("count must be at least 1".to_string());
    }

    let mut session = GachaSession::new(GachaConfig::default().with_seed(seed));

    println!(
        "  {} {}",
        "Rolling".bold(),
        format!("(charge={charge}, seed={seed})").dimmed()
    );
    println!();

    for _ in 0..count {
        let outcome = session.roll(charge);
        println!("  {}", super::format_outcome(&outcome));
    }

    println!();
    println!("  {}", super::format_pity_status(&session));
    Ok(())
}
