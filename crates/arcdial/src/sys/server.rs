use crate::events::AppEvent;
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

const SOCKET_PATH: &str = "/tmp/arcdial.sock";

/// Line-oriented control socket: `set <n>` moves the dial to `n`.
pub async fn run_server(tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        handle_command(line.trim(), &tx).await;
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

async fn handle_command(line: &str, tx: &Sender<AppEvent>) {
    if let Some(value) = line.strip_prefix("set ") {
        match value.trim().parse::<u32>() {
            Ok(progress) => {
                let _ = tx.send(AppEvent::SetProgress(progress)).await;
            }
            Err(_) => log::warn!("Malformed set command: {}", line),
        }
    } else if !line.is_empty() {
        log::warn!("Unknown control command: {}", line);
    }
}
