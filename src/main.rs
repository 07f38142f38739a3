use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tugas::api::HttpTugasApi;
use tugas::app::App;
use tugas::commands::Command;
use tugas::config::ClientConfig;
use tugas::notice::Notice;
use tugas::screens::Outcome;
use tugas::session::FileTokenStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::new_from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("using API at {}", config.base_url);

    let tokens = Arc::new(FileTokenStore::new(config.token_path.clone()));
    debug!("token file at {}", tokens.path().display());
    let api = Arc::new(HttpTugasApi::new(&config, tokens.clone())?);

    let (mut app, outcome) = App::start(api, tokens).await;
    show(&app, &outcome);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", Notice::error(e.to_string()));
                prompt()?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        let outcome = app.dispatch(command).await;
        show(&app, &outcome);
        prompt()?;
    }

    Ok(())
}

fn show(app: &App, outcome: &Outcome) {
    for notice in &outcome.notices {
        println!("{}", notice);
    }
    println!("\n== {} ==\n{}\n", app.current_route(), app.render());
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}
