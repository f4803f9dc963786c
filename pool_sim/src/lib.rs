pub mod bot;
pub mod runner;
pub mod settings;

pub use bot::{Bot, BotStyle};
pub use runner::{run_match, MatchSummary, RunOptions};
pub use settings::load_config;
