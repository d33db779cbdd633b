#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = recito_rust::run().await {
        eprintln!("recito-rust fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
