use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    krishibot::run().await
}
