use worker_event_console::app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::main().await
}
