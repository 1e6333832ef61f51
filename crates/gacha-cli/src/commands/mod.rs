pub mod play;
pub mod roll;
pub mod simulate;

use colored::Colorize;
use gacha_core::{GachaSession, Outcome, PITY_LIMIT, Tier};

/// One printable line for an outcome.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Win {
            tier,
            pity: true,
            item,
            ..
        } => format!(
            "{} {} {} [{}]",
            "GUARANTEED".magenta().bold(),
            item.glyph,
            item.name.bold(),
            tier.label()
        ),
        Outcome::Win { tier, item, .. } => {
            let label = match tier {
                Tier::SuperRare => tier.label().magenta().bold(),
                Tier::Rare => tier.label().cyan(),
                Tier::Common => tier.label().normal(),
            };
            format!(
                "{}        {} {} [{label}]",
                "WIN".green().bold(),
                item.glyph,
                item.name
            )
        }
        Outcome::Loss { item, .. } => format!(
            "{}       {} {}",
            "MISS".dimmed(),
            item.glyph,
            item.name.dimmed()
        ),
    }
}

/// The "fails: N/6 | pity: ..." status line shown after rolling.
pub fn format_pity_status(session: &GachaSession) -> String {
    let pity = if session.pity_ready() {
        "ready".magenta().bold().to_string()
    } else {
        "not yet".dimmed().to_string()
    };
    format!("fails: {}/{PITY_LIMIT} | pity: {pity}", session.fails())
}
