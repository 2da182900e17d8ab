use genai_lister::output::write_models;
use genai_lister::Client;

#[tokio::main]
async fn main() -> genai_lister::Result<()> {
    genai_lister::logging::init();

    let client = Client::from_env()?;
    let models = client.list_models().await?;
    write_models(&mut std::io::stdout().lock(), &models)?;
    Ok(())
}
