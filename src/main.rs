#[tokio::main]
async fn main() -> std::io::Result<()> {
    drone_sync::run_with_config().await
}
