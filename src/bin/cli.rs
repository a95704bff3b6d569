use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    taskboard::cli::run().await
}
