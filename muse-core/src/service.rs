//! Remote half of the controller: turns jobs into model calls.

use std::sync::Arc;

use muse_llm::LlmProvider;

use crate::controller::{FuseJob, GenerateJob};
use crate::error::MuseError;
use crate::idea::FusionOutcome;
use crate::parse::{parse_fusion, split_ideas};
use crate::prompt;

/// Cheap to clone into async tasks; holds the shared client.
#[derive(Clone)]
pub struct IdeaService {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: f32,
}

impl IdeaService {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
        }
    }

    pub async fn generate_ideas(&self, job: &GenerateJob) -> Result<Vec<String>, MuseError> {
        let request = prompt::generation_request(
            &self.model,
            self.temperature,
            &job.theme,
            &job.prior,
            job.follow_up,
        );
        tracing::info!(
            provider = self.provider.name(),
            theme = %job.theme,
            follow_up = job.follow_up,
            "Requesting ideas"
        );
        let raw = self.provider.complete(request).await?;
        Ok(split_ideas(&raw))
    }

    pub async fn fuse_ideas(&self, job: &FuseJob) -> Result<FusionOutcome, MuseError> {
        if job.selected.len() < 2 {
            return Err(MuseError::NotEnoughSelections(job.selected.len()));
        }
        let request = prompt::fusion_request(&self.model, self.temperature, &job.selected);
        tracing::info!(
            provider = self.provider.name(),
            inputs = job.selected.len(),
            "Requesting fusion"
        );
        let raw = self.provider.complete(request).await?;
        Ok(parse_fusion(&raw))
    }
}
