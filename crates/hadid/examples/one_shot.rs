//! One-shot facade with a named prompt: extract fields instead of
//! converting to markdown.
//!
//! ```bash
//! export ANTHROPIC_API_KEY=sk-ant-…
//! cargo run -p hadid --example one_shot
//! ```

use hadid::{GenerationRequest, SystemPrompt, hadid};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let result = hadid(
        GenerationRequest::new("Receipt: 2 coffees, 8.40 EUR, paid cash, 2026-08-30")
            .with_system_prompt(SystemPrompt::Named("extraction".into())),
    )
    .await?;

    println!("{}", result.content);
    Ok(())
}
