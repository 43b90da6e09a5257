use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    touchwire_cli::cli::run().await
}
