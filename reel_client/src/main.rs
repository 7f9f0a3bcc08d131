#[tokio::main]
async fn main() -> std::io::Result<()> {
    reel_client::run_with_config().await
}
