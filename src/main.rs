use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{read as event_read, Event as CrosstermEvent, KeyEventKind};
use quill::app::Editor;
use quill::config::Config;
use quill::config_io::DirectoryContext;
use quill::model::filesystem::StdFileSystem;
use quill::services::terminal_modes::{self, TerminalModes};
use quill::services::{log_dirs, tracing_setup};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;

/// A small tabbed text editor for the terminal
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "A small tabbed text editor", long_about = None)]
#[command(version)]
struct Args {
    /// Files to open, each in its own tab
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print the directories used by quill and exit
    #[arg(long)]
    show_paths: bool,
}

struct SetupState {
    config: Config,
    dir_context: DirectoryContext,
    working_dir: PathBuf,
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    /// Drop impl restores the terminal
    terminal_modes: TerminalModes,
}

fn load_config(args: &Args, dir_context: &DirectoryContext) -> AnyhowResult<Config> {
    match &args.config {
        // An explicit config file must load
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load_or_default(dir_context, None)),
    }
}

fn initialize_app(args: &Args) -> AnyhowResult<SetupState> {
    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(log_dirs::main_log_path);
    if let Err(e) = tracing_setup::init_global(&log_file) {
        eprintln!("Warning: cannot write log file {}: {}", log_file.display(), e);
    }

    log_dirs::cleanup_stale_logs();

    tracing::info!("Editor starting");

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let dir_context = DirectoryContext::from_system()?;
    let config = load_config(args, &dir_context)?;
    let working_dir = std::env::current_dir().context("Failed to read working directory")?;

    let terminal_modes = TerminalModes::enable()?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    Ok(SetupState {
        config,
        dir_context,
        working_dir,
        terminal,
        terminal_modes,
    })
}

/// Draw, wait for one event, apply it; repeat until quit
fn run_event_loop(
    editor: &mut Editor,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    loop {
        terminal.draw(|frame| editor.render(frame))?;

        if editor.should_quit() {
            break;
        }

        match event_read()? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind != KeyEventKind::Release {
                    tracing::trace!("Key event: {:?}", key_event);
                    editor.handle_key(key_event);
                }
            }
            CrosstermEvent::Paste(text) => editor.handle_paste(&text),
            CrosstermEvent::Resize(width, height) => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
            }
            _ => {}
        }
    }
    Ok(())
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    // Handle --show-paths early (no terminal setup needed)
    if args.show_paths {
        let dir_context = DirectoryContext::from_system()?;
        let config_path = args
            .config
            .clone()
            .unwrap_or_else(|| dir_context.config_path());
        log_dirs::print_all_paths(&config_path);
        return Ok(());
    }

    // Handle --dump-config early (no terminal setup needed)
    if args.dump_config {
        let dir_context = DirectoryContext::from_system()?;
        let config = load_config(&args, &dir_context)?;
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let SetupState {
        config,
        dir_context,
        working_dir,
        mut terminal,
        mut terminal_modes,
    } = initialize_app(&args).context("Failed to initialize application")?;

    let mut editor = Editor::new(config, Arc::new(StdFileSystem), working_dir)
        .with_home_dir(dir_context.home_dir.clone());

    for path in &args.files {
        // Failures are reported in the status bar
        let _ = editor.open_file(path);
    }

    let result = run_event_loop(&mut editor, &mut terminal);

    let _ = terminal.show_cursor();
    terminal_modes.undo();
    tracing::info!("Editor exiting");

    result
}
