mod app;
mod cli;
mod display;
mod editor;
mod input;
mod render;
mod session;
mod transcript;
mod tutor;

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use codecraft_ai::{GeminiClient, GeminiConfig};
use codecraft_runner::PythonRunner;

use crate::app::App;
use crate::session::TutorSession;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

/// Log to a file; stderr belongs to the terminal UI once it is up.
fn init_logging(args: &cli::Args) {
    let log_directive = args.log_level.as_deref().unwrap_or("codecraft=info");
    let filter = EnvFilter::from_default_env().add_directive(
        log_directive
            .parse()
            .unwrap_or_else(|_| "codecraft=info".parse().unwrap()),
    );

    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("codecraft");
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("warning: could not create log directory: {e}");
        return;
    }
    let log_path = log_dir.join("codecraft.log");
    match std::fs::File::create(&log_path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(file)
                .init();
        }
        Err(e) => eprintln!("warning: could not open {}: {e}", log_path.display()),
    }
}

/// Restore the terminal before the default panic output so the message lands
/// on a usable screen instead of inside the alternate buffer.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();
}

fn main() {
    // Load .env before anything reads the environment.
    load_dotenv();

    let args = cli::parse();
    init_logging(&args);

    let config = match GeminiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("🚨 {e}");
            std::process::exit(1);
        }
    };
    let config = match args.model.as_deref() {
        Some(model) => config.with_model(model),
        None => config,
    };

    let runner = match args.python.as_deref() {
        Some(python) => PythonRunner::with_interpreter(python),
        None => PythonRunner::from_env(),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("🚨 Failed to start async runtime: {e}");
            std::process::exit(1);
        }
    };

    let client = GeminiClient::new(config);
    tracing::info!(model = client.model(), interpreter = runner.interpreter(), "starting up");

    let mut session = TutorSession::new(Box::new(client), runner);

    // Bootstrap before touching the terminal so a startup failure prints a
    // plain, readable message.
    println!("Starting tutor session...");
    if let Err(e) = runtime.block_on(session.start()) {
        eprintln!("🚨 Failed to start chat: {e}");
        std::process::exit(1);
    }

    let mut app = App::new(session);

    install_panic_hook();
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            eprintln!("🚨 Failed to set up the terminal: {e}");
            std::process::exit(1);
        }
    };

    let result = app::run(&mut terminal, &runtime, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = result {
        tracing::error!(error = %e, "session loop failed");
        eprintln!("🚨 Session error: {e}");
        std::process::exit(1);
    }
}
