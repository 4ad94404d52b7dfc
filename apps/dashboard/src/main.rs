mod config;
mod main_lib;
mod render;

use config::Config;
use main_lib::{init_tracing, start_search};
use market_search_core::{InputView, PanelView, SearchSnapshot};
use tokio::io::{AsyncBufReadExt, BufReader};

const CLEAR_COMMANDS: &[&str] = &[":clear", ":esc"];
const QUIT_COMMAND: &str = ":q";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let handle = start_search(&config);
    let mut snapshots = handle.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Type a search term, ':clear' to reset, ':q' to quit.");
    draw(&config, &snapshots.borrow_and_update().clone());

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) if line.trim() == QUIT_COMMAND => break,
                Some(line) if CLEAR_COMMANDS.contains(&line.trim()) => handle.clear(),
                Some(line) => handle.change(line),
                None => break,
            },
            changed = snapshots.changed() => {
                if changed.is_err() {
                    tracing::warn!("Search runtime stopped unexpectedly");
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                draw(&config, &snapshot);
            }
        }
    }

    handle.shutdown().await;
    Ok(())
}

fn draw(config: &Config, snapshot: &SearchSnapshot) {
    println!();
    println!("{}", render::render_input(&InputView::new(&config.search, snapshot)));
    println!("{}", render::render_panel(&PanelView::from_snapshot(snapshot)));
}
