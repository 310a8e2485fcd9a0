use crate::strategy::Preset;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(about = "Play one build order until it owns every landmark", alias = "sim")]
    Simulate {
        #[arg(long, short, value_enum, default_value = "buy-nothing")]
        strategy: Preset,
        #[arg(long, short, default_value_t = 4)]
        players: usize,
        #[arg(long, help = "print the trace as JSON")]
        json: bool,
    },
    #[command(about = "Race every build order across table sizes", alias = "cmp")]
    Compare {
        #[arg(long, short, num_args = 1.., default_values_t = [2, 3, 4])]
        players: Vec<usize>,
    },
    #[command(about = "Value every card against a hand", alias = "val")]
    Cards {
        #[arg(long, default_value = "Wheat Field, Bakery")]
        hand: String,
        #[arg(long, short, default_value_t = 4)]
        players: usize,
        #[arg(long, help = "roll two dice on the owner's turn")]
        two_dice: bool,
    },
}
