mod config;
mod fetcher;
mod fields;
mod model;
mod normalizer;
mod parser;
mod selector;
mod view;

use config::{AppConfig, load_config};
use fetcher::{Fetcher, SheetFetcher};
use fields::start_of_today;
use model::FieldKeys;
use normalizer::normalize_all;
use parser::{Parser, SheetParser};
use selector::{Selector, SelectorImpl};
use std::sync::Arc;
use tokio::sync::Notify;
use tokio::time::{Duration, sleep};
use tracing::{error, info, warn};
use view::BoardView;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config: Arc<AppConfig> = match load_config("config.json") {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config error: {}", e);
            return;
        }
    };

    let fetcher = match SheetFetcher::new() {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };
    let parser = SheetParser::new();
    let keys = FieldKeys::from_sheet_labels();
    let selector = SelectorImpl::new(keys.clone(), &config.open_token);
    let board = BoardView::new(keys, &config.ficha_link_template);

    // Manual refresh: an empty line on stdin reruns the pipeline early.
    let refresh_notify = Arc::new(Notify::new());
    spawn_stdin_listener(refresh_notify.clone());

    info!("🚀 oferta-watcher started.");

    loop {
        run_pipeline(&config, &fetcher, &parser, &selector, &board).await;

        info!(
            "Waiting for timer ({}s) or manual refresh...",
            config.check_interval_seconds
        );
        tokio::select! {
            _ = sleep(Duration::from_secs(config.check_interval_seconds)) => {
                info!("Timer triggered.");
            }
            _ = refresh_notify.notified() => {
                info!("Manual refresh triggered.");
            }
        }
    }
}

/// One full invocation: fetch → tokenize → normalize → select → render.
/// Fetch and parse failures abort this invocation only; row-level anomalies
/// are handled inside the pipeline and never surface here.
async fn run_pipeline(
    config: &AppConfig,
    fetcher: &SheetFetcher,
    parser: &SheetParser,
    selector: &SelectorImpl,
    board: &BoardView,
) {
    info!("Fetching sheet CSV...");
    let text = match fetcher.fetch(&config.sheet_csv_url).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Fetch error: {}", e);
            return;
        }
    };

    info!("Tokenizing CSV...");
    let raw_rows = match parser.parse(&text) {
        Ok(rows) => rows,
        Err(e) => {
            warn!("CSV parse error: {}", e);
            return;
        }
    };
    info!("Parsed {} rows.", raw_rows.len());

    let rows = normalize_all(&raw_rows);

    // Reference date is computed once per invocation, here at the boundary,
    // so the selector itself stays pure.
    let today = start_of_today();
    let open = selector.select_open_offerings(&rows, today);
    info!(
        "✅ {} open offerings (reference date {}).",
        open.len(),
        today
    );

    print!("{}", board.render_board(&open));
}

fn spawn_stdin_listener(refresh_notify: Arc<Notify>) {
    use tokio::io::{AsyncBufReadExt, BufReader};

    tokio::spawn(async move {
        info!("▶️ Listening on stdin for manual refresh (press Enter).");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(_)) = lines.next_line().await {
            info!("🔄 Refresh requested.");
            refresh_notify.notify_one();
        }
        info!("🛑 Stdin closed, manual refresh disabled.");
    });
}
