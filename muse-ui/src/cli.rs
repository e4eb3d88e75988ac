//! Command-line flags. Each one overrides its environment variable.

use clap::Parser;

use muse_llm::{LlmConfig, LlmError};

#[derive(Debug, Parser)]
#[command(name = "muse")]
#[command(about = "Creative slogan generator", long_about = None)]
pub struct Args {
    /// Model name (overrides MUSE_MODEL)
    #[arg(long)]
    pub model: Option<String>,

    /// API base URL (overrides OPENAI_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Sampling temperature (overrides MUSE_TEMPERATURE)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Seed for reproducible bubble placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also float fusion results as gold bubbles
    #[arg(long)]
    pub float_fused: bool,
}

impl Args {
    /// Apply the flags on top of `config` and re-validate.
    pub fn apply(&self, mut config: LlmConfig) -> Result<LlmConfig, LlmError> {
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(temperature) = self.temperature {
            config.temperature = temperature;
        }
        config.validate()?;
        Ok(config)
    }
}
