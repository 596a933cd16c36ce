mod app;
mod config;
mod error;
mod event;
mod github;
mod loader;
mod logging;
mod opener;
#[cfg(test)]
mod test_utils;
mod ui;

use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::AppEvent;
use futures::StreamExt;
use github::client::GitHubClient;
use loader::{LoadState, MountId};
use opener::SystemOpener;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

/// Redraw cadence while idle, so toasts expire without input.
const TICK_SECS: u64 = 1;

#[derive(Parser)]
#[command(name = "folio", about = "Recent GitHub repositories as portfolio cards")]
struct Cli {
    #[arg(long, short, help = "GitHub account whose repositories are listed")]
    account: Option<String>,

    #[arg(long, short, help = "Path to config.toml")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.config, cli.account);
    logging::init(&config.resolved_log_file());
    tracing::info!(account = %config.account, api_base = %config.api_base, "starting");

    let mut app = App::new(config, Box::new(SystemOpener));

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let mount = app.mount_projects();
    spawn_load(&app.config, mount, tx.clone());

    let tick_tx = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(TICK_SECS));
        interval.tick().await;
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };
        app.handle_event(first);
        while let Ok(pending) = rx.try_recv() {
            app.handle_event(pending);
        }

        if app.should_quit {
            break;
        }
    }

    app.unmount_projects();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Issues the one fetch for `mount`. Every outcome, including a client that
/// cannot be built, comes back as a terminal state on the channel.
fn spawn_load(config: &Config, mount: MountId, tx: mpsc::UnboundedSender<AppEvent>) {
    let client = match GitHubClient::new(&config.api_base, &config.account) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "cannot build GitHub client");
            let _ = tx.send(AppEvent::ReposLoaded {
                mount,
                state: LoadState::Empty,
            });
            return;
        }
    };

    tokio::spawn(async move {
        tracing::debug!(account = client.account(), "fetching repositories");
        let state = loader::load(&client).await;
        let _ = tx.send(AppEvent::ReposLoaded { mount, state });
    });
}
