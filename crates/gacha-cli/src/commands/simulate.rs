use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use gacha_core::{GachaConfig, GachaSession, Outcome, Tier};

pub fn run(rolls: u64, charge: f64, seed: u64, win_rate: Option<f64>) -> Result<(), String> {
    if rolls == 0 {
        return Err("rolls must be at least 1".to_string());
    }

    let mut config = GachaConfig::default().with_seed(seed);
    if let Some(rate) = win_rate {
        config = config.with_win_rate(rate);
    }
    let configured_rate = config.win_rate;
    let mut session = GachaSession::new(config);

    let mut tier_wins = [0u64; 3];
    let mut pity_wins = 0u64;
    let mut losses = 0u64;

    for _ in 0..rolls {
        match session.roll(charge) {
            Outcome::Win { pity: true, .. } => pity_wins += 1,
            Outcome::Win { tier, .. } => tier_wins[tier as usize] += 1,
            Outcome::Loss { .. } => losses += 1,
        }
    }

    let wins: u64 = tier_wins.iter().sum();

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({rolls} rolls, charge={charge}, seed={seed}, win_rate={configured_rate})")
            .dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Outcome", "Tier", "Count", "Share"]);
    for tier in Tier::all() {
        table.add_row(vec![
            "win".to_string(),
            tier.label().to_string(),
            tier_wins[*tier as usize].to_string(),
            share(tier_wins[*tier as usize], rolls),
        ]);
    }
    table.add_row(vec![
        "pity win".to_string(),
        Tier::SuperRare.label().to_string(),
        pity_wins.to_string(),
        share(pity_wins, rolls),
    ]);
    table.add_row(vec![
        "loss".to_string(),
        "-".to_string(),
        losses.to_string(),
        share(losses, rolls),
    ]);
    println!("{table}");

    println!();
    println!("  wins: {wins}");
    println!("  pity wins: {pity_wins}");
    println!("  losses: {losses}");
    println!(
        "  observed win rate (excluding pity): {:.4}",
        wins as f64 / rolls as f64
    );

    Ok(())
}

fn share(count: u64, total: u64) -> String {
    format!("{:.2}%", 100.0 * count as f64 / total as f64)
}
