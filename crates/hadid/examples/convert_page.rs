//! # Convert a page – the smallest viable program
//!
//! 1. **Builds** the Anthropic backend from the environment.
//! 2. **Wraps** it in the generic client.
//! 3. **Runs** one generation with the default system prompt (convert the
//!    supplied document text to markdown).
//!
//! ## How to run
//!
//! ```bash
//! export ANTHROPIC_API_KEY=sk-ant-…
//! cargo run -p hadid --example convert_page
//! ```

use hadid::anthropic::AnthropicAdapterBuilder;
use hadid::{GenerationOptions, GenerationRequest, HadidClient, model::ClaudeModel};

const SAMPLE_PAGE: &str = "\
INVOICE #0042
Item            Qty   Price
Widget, blue      3    9.50
Widget, red       1   12.00
Total                 40.50";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = AnthropicAdapterBuilder::new_from_env().build()?;
    let client = HadidClient::new(backend);

    let result = client
        .generate(
            GenerationRequest::new(SAMPLE_PAGE).with_options(
                GenerationOptions::default()
                    .with_model(ClaudeModel::Claude35Haiku)
                    .with_max_tokens(1024),
            ),
        )
        .await?;

    println!("{}", result.content);
    if let Some(usage) = result.usage {
        println!(
            "-- {} input tokens, {} output tokens",
            usage.input_tokens, usage.output_tokens
        );
    }
    Ok(())
}
