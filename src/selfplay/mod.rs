use crate::core::PlayerId;
use crate::game::Game;
use crate::logic::initial_state;
use crate::player::{MinimaxAI, PlayerController, RandomAI};
use crate::solver::Strategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

pub const STATS_DIR: &str = "selfplay_stats";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    Minimax(Strategy),
    /// Seeded per game as `seed + game index`.
    Random(Option<u64>),
}

impl Opponent {
    fn controller(self, player_id: PlayerId, game_index: u64) -> Box<dyn PlayerController> {
        let name = format!("{}-{}", self.label(), player_id);
        match self {
            Opponent::Minimax(strategy) => {
                Box::new(MinimaxAI::new(player_id, &name).with_strategy(strategy))
            }
            Opponent::Random(Some(seed)) => {
                Box::new(RandomAI::with_seed(&name, seed.wrapping_add(game_index)))
            }
            Opponent::Random(None) => Box::new(RandomAI::new(&name)),
        }
    }

    pub fn label(self) -> String {
        match self {
            Opponent::Minimax(strategy) => format!("Minimax({})", strategy),
            Opponent::Random(_) => "Random".to_string(),
        }
    }
}

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub player1: Opponent,
    pub player2: Opponent,
    pub save_stats: bool,
    /// Where stats files go when `save_stats` is set.
    pub stats_dir: PathBuf,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            player1: Opponent::Minimax(Strategy::AlphaBeta),
            player2: Opponent::Random(None),
            save_stats: false,
            stats_dir: PathBuf::from(STATS_DIR),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<PlayerId>,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub player1: String,
    pub player2: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(PlayerId::Player1) => self.p1_wins += 1,
            Some(PlayerId::Player2) => self.p2_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }

    pub fn summary(&self) -> String {
        let pct = |n: usize| {
            if self.total_games == 0 {
                0.0
            } else {
                n as f64 / self.total_games as f64 * 100.0
            }
        };
        format!(
            "{} (X) vs {} (O), {} games\r\n\
             X wins: {} ({:.1}%)\r\n\
             O wins: {} ({:.1}%)\r\n\
             Draws: {} ({:.1}%)\r\n\
             Avg moves: {:.1}, avg time: {:.1}ms",
            self.player1,
            self.player2,
            self.total_games,
            self.p1_wins,
            pct(self.p1_wins),
            self.p2_wins,
            pct(self.p2_wins),
            self.draws,
            pct(self.draws),
            self.avg_moves,
            self.avg_time_ms,
        )
    }
}

pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let mut stats = SelfPlayStats::new();
    stats.player1 = config.player1.label();
    stats.player2 = config.player2.label();

    for game_index in 0..config.num_games {
        let start_time = Instant::now();
        let p1 = config.player1.controller(PlayerId::Player1, game_index as u64);
        let p2 = config.player2.controller(PlayerId::Player2, game_index as u64);

        let mut game = Game::new(initial_state());
        let result = game.play_silent(p1.as_ref(), p2.as_ref())?;

        let elapsed = start_time.elapsed();
        info!(
            game = game_index + 1,
            of = config.num_games,
            outcome = %result.outcome,
            moves = result.moves.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "self-play game finished"
        );

        stats.add_result(GameResult {
            winner: result.winner(),
            moves: result.moves.len(),
            time_ms: elapsed.as_millis(),
        });
    }

    if config.save_stats {
        let path = save_stats(&stats, &config.stats_dir)?;
        info!(path = %path.display(), "self-play stats saved");
    }

    Ok(stats)
}

/// 統計のみ保存する (盤面は保存しない)
pub fn save_stats(stats: &SelfPlayStats, dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let filename = dir.join(format!(
        "stats_{}.json",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let file = std::fs::File::create(&filename)?;
    serde_json::to_writer_pretty(file, stats)?;
    Ok(filename)
}
