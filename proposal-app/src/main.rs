use anyhow::Context;
use proposal_app::{init_tracing, App, Command, Reply};
use proposal_core::{ChannelSink, LogCollector, TokioScheduler};
use proposal_store::Config;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const ANALYTICS_QUEUE: usize = 256;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Booking destination {}", config.booking.url);

    let (analytics, delivery) = ChannelSink::spawn(Arc::new(LogCollector), ANALYTICS_QUEUE)?;
    let scheduler = TokioScheduler::current()?;

    let mut app = App::build(&config, Arc::new(analytics), Arc::new(scheduler))
        .context("Failed to build proposal session")?;
    println!("{}", app.summary());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => match app.apply(command) {
                Reply::Continue(output) => println!("{}", output),
                Reply::Quit => break,
            },
            Err(e) => println!("error: {}", e),
        }
    }

    // Dropping the session closes the analytics queue so the delivery task can drain
    drop(app);
    let delivered = delivery.await?;
    tracing::info!("Session closed, {} analytics events delivered", delivered);

    Ok(())
}
