use super::comparison::Comparison;
use super::query::Query;
use super::table::CardTable;
use super::table::Row;
use crate::cards::Color;
use crate::cards::Hand;
use crate::dice::Dice;
use crate::simulation::simulate;
use crate::strategy::Preset;
use colored::ColoredString;
use colored::Colorize;

impl Query {
    pub fn handle(self) -> anyhow::Result<()> {
        match self {
            Query::Simulate {
                strategy,
                players,
                json,
            } => {
                log::info!("simulating {} at {} players", strategy, players);
                let trace = simulate(strategy.strategy(), players)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&trace)?);
                } else {
                    print!("{}", trace);
                    println!(
                        "{} won in {} rounds",
                        strategy.to_string().bold(),
                        trace.rounds()
                    );
                }
                Ok(())
            }
            Query::Compare { players } => {
                let comparison = Comparison::run(Preset::all(), &players);
                print!("{}", comparison);
                for n in players.iter() {
                    if let Some(best) = comparison.best(*n) {
                        println!(
                            "fastest at {} players: {}",
                            n,
                            best.preset.to_string().green().bold()
                        );
                    }
                }
                Ok(())
            }
            Query::Cards {
                hand,
                players,
                two_dice,
            } => {
                let hand = Hand::try_from(hand.as_str())?;
                let table = CardTable::new(hand, Dice::from(two_dice), players)?;
                println!(
                    "{} with {} at {} players",
                    table.hand(),
                    table.dice(),
                    table.players()
                );
                println!("{}", CardTable::header().bold());
                for row in table.rows() {
                    println!("{}", paint(row));
                }
                Ok(())
            }
        }
    }
}

/// row text in its card's color
fn paint(row: &Row) -> ColoredString {
    let text = row.to_string();
    match row.color {
        Color::Red => text.red(),
        Color::Green => text.green(),
        Color::Blue => text.blue(),
        Color::Purple => text.magenta(),
        Color::Gold => text.yellow(),
    }
}
