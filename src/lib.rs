//! Expected-revenue model and build-order simulator for Machi Koro.
//!
//! Cards are valued by the coins they are expected to yield per roll, and a
//! fixed purchase order is simulated turn by turn until it owns every
//! landmark. Nothing is sampled: every quantity is an expectation.
pub mod analysis;
pub mod cards;
pub mod dice;
pub mod economy;
pub mod simulation;
pub mod strategy;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Coin balances and revenues. Fractional because revenue accrues in expectation.
pub type Coins = f64;
/// Chance of a roll activating a card.
pub type Probability = f64;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Rounds a strategy is given to buy every landmark.
pub const MAX_ROUNDS: usize = 100;
/// Coins every player starts with.
pub const STARTING_COINS: Coins = 3.0;
/// Fewest players at the table.
pub const MIN_PLAYERS: usize = 2;
/// Most players at the table.
pub const MAX_PLAYERS: usize = 4;
/// Coin amounts closer than this are equal. Expected revenue accumulates in
/// floating point, so a balance meant to equal a price can land just below it.
pub const TOLERANCE: Coins = 1e-9;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> std::io::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|t| t.as_secs())
        .unwrap_or_default();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::AlreadyExists, e))
}
