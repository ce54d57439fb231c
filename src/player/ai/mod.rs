pub mod config;
pub mod minimax;
pub mod random;

pub use config::AIConfig;
pub use minimax::MinimaxAI;
pub use random::RandomAI;
