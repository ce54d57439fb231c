use crossterm::event::{self, Event, KeyCode};
use crossterm::{execute, terminal};
use std::io::{self, Write};
use std::time::Duration;
use tictactoe_aho_ai::core::PlayerId;
use tictactoe_aho_ai::game::Game;
use tictactoe_aho_ai::logic::initial_state;
use tictactoe_aho_ai::player::ai::AIConfig;
use tictactoe_aho_ai::player::{MinimaxAI, PlayerController, TuiController};
use tictactoe_aho_ai::selfplay::{self, Opponent, SelfPlayConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // stdout は盤面描画に使うのでログは stderr へ
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AIConfig::load_or_default();
    info!(strategy = %config.search.strategy, "starting");

    // ターミナル初期化
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), terminal::EnterAlternateScreen)?;

    let res = run(&config);

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn read_choice(valid: &[char]) -> anyhow::Result<Option<char>> {
    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    KeyCode::Char(c) if valid.contains(&c) => return Ok(Some(c)),
                    _ => {}
                }
            }
        }
    }
}

fn run(config: &AIConfig) -> anyhow::Result<()> {
    loop {
        execute!(
            io::stdout(),
            terminal::Clear(terminal::ClearType::All),
            crossterm::cursor::MoveTo(0, 0)
        )?;
        print!("=== Tic-Tac-Toe AI ({}) ===\r\n", config.search.strategy);
        print!("\r\nSelect mode:\r\n");
        print!("1. Human (X) vs AI (O)\r\n");
        print!("2. AI (X) vs Human (O)\r\n");
        print!("3. Human vs Human\r\n");
        print!("4. AI vs AI\r\n");
        print!("5. Self-play benchmark (AI vs Random)\r\n");
        print!("[q] Quit\r\n");
        io::stdout().flush()?;

        let Some(choice) = read_choice(&['1', '2', '3', '4', '5'])? else {
            return Ok(());
        };

        if choice == '5' {
            run_benchmark(config)?;
            continue;
        }

        let ai = |player_id: PlayerId, name: &str| -> Box<dyn PlayerController> {
            Box::new(MinimaxAI::new(player_id, name).with_strategy(config.search.strategy))
        };
        let human = |player_id: PlayerId, name: &str| -> Box<dyn PlayerController> {
            Box::new(TuiController::new(player_id, name))
        };

        let (p1, p2) = match choice {
            '1' => (human(PlayerId::Player1, "Human"), ai(PlayerId::Player2, "AI")),
            '2' => (ai(PlayerId::Player1, "AI"), human(PlayerId::Player2, "Human")),
            '3' => (
                human(PlayerId::Player1, "Player 1"),
                human(PlayerId::Player2, "Player 2"),
            ),
            _ => (ai(PlayerId::Player1, "X AI"), ai(PlayerId::Player2, "O AI")),
        };

        let mut game = Game::new(initial_state());
        game.think_delay = Duration::from_millis(config.search.think_delay_ms);
        game.play(p1.as_ref(), p2.as_ref())?;
    }
}

fn run_benchmark(config: &AIConfig) -> anyhow::Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0)
    )?;
    print!("=== Self-Play ===\r\n");
    print!("Running {} games...\r\n", config.selfplay.num_games);
    io::stdout().flush()?;

    let selfplay_config = SelfPlayConfig {
        num_games: config.selfplay.num_games,
        player1: Opponent::Minimax(config.search.strategy),
        player2: Opponent::Random(None),
        save_stats: config.selfplay.save_stats,
        ..Default::default()
    };
    let stats = selfplay::run_selfplay(&selfplay_config)?;

    print!("\r\n{}\r\n\r\nPress any key to continue\r\n", stats.summary());
    io::stdout().flush()?;
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}
