use selam_ai::{Assistant, ChatCompletionClient};
use selam_config::Config;

pub async fn run(config: &Config, topic: &str) -> anyhow::Result<()> {
    if !config.ai.enabled {
        anyhow::bail!("AI assistance is disabled; enable it in the config profile");
    }

    let client = ChatCompletionClient::new(
        config.ai.api_key.clone(),
        config.ai.api_url.clone(),
        config.ai.model.clone(),
    );

    let prompt = format!(
        "Write a one-sentence description for a language course unit about {topic}. \
         Keep it under 20 words."
    );
    let text = client.complete(&prompt).await?;
    println!("{text}");

    Ok(())
}
