use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ofc_table::{
    commands::{Command, HELP},
    AdvanceOutcome, ClientConfig, ClientError, HttpGameApi, RenderMode, SvgTableView,
    TableController, TableView, TextTableView,
};

/// Where the board goes after each command
enum BoardOutput {
    Terminal,
    File(PathBuf),
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ofc_table=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Table client stopped");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ClientError> {
    let config = ClientConfig::from_env()?;
    info!(
        api_url = %config.api_url,
        render_mode = %config.render_mode,
        "Starting OFC table client"
    );

    let api = Arc::new(HttpGameApi::new(&config.api_url, config.timeout)?);

    match config.render_mode {
        RenderMode::Text => {
            let controller = TableController::new(api, TextTableView::new());
            command_loop(controller, BoardOutput::Terminal).await
        }
        RenderMode::Svg => {
            println!("Board is written to {}", config.svg_path.display());
            let controller = TableController::new(api, SvgTableView::new());
            command_loop(controller, BoardOutput::File(config.svg_path)).await
        }
    }
}

async fn command_loop<V: TableView>(
    mut controller: TableController<V>,
    output: BoardOutput,
) -> Result<(), ClientError> {
    println!("{HELP}");
    controller.refresh();
    show_board(&controller, &output).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        // Failed requests leave the session as it was; report and keep going
        if let Err(e) = handle(&mut controller, command).await {
            error!(error = %e, "Command failed");
            println!("Error: {e}");
        }

        for alert in controller.view_mut().drain_alerts() {
            println!("(!) {alert}");
        }
        show_board(&controller, &output).await?;
    }

    info!("Leaving the table");
    Ok(())
}

async fn handle<V: TableView>(
    controller: &mut TableController<V>,
    command: Command,
) -> Result<(), ClientError> {
    match command {
        Command::Start => controller.start_game().await?,
        Command::Next => {
            if let AdvanceOutcome::GameOver(scores) = controller.advance_round().await? {
                println!("Final scores: {scores}");
            }
        }
        Command::Place { card, row } => {
            let payload = controller.drag_start(&card);
            if controller.drag_over(row, &payload) {
                controller.drop_card(row, &payload)?;
            }
        }
        Command::Save => {
            controller.save_progress().await?;
        }
        Command::SaveLocal => {
            controller.save_locally().await?;
        }
        Command::AiMove => {
            let status = controller.request_ai_move().await?;
            println!("{status}");
        }
        Command::Show => {}
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
    Ok(())
}

async fn show_board<V: TableView>(
    controller: &TableController<V>,
    output: &BoardOutput,
) -> Result<(), ClientError> {
    let snapshot = controller.view().snapshot();
    match output {
        BoardOutput::Terminal => print!("{snapshot}"),
        BoardOutput::File(path) => tokio::fs::write(path, snapshot).await?,
    }
    Ok(())
}
