//! Session state and the generate/fuse lifecycle.
//!
//! The UI update loop is synchronous, so each operation has two phases:
//! `begin_*` validates, marks the controller busy and hands back an owned job
//! for the remote call; `finish_*` applies the result and clears busy. The
//! async [`GenerationController::generate`] / [`GenerationController::fuse`]
//! pair chains both phases for headless callers.

use std::fmt;

use crate::error::MuseError;
use crate::grid::MIN_FUSION_INPUTS;
use crate::idea::{FusionOutcome, FusionRecord, Idea};
use crate::service::IdeaService;

/// Everything the remote generation call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateJob {
    pub theme: String,
    pub prior: Vec<String>,
    /// Later rounds ask for fewer ideas that differ from `prior`.
    pub follow_up: bool,
}

/// Everything the remote fusion call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuseJob {
    pub selected: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerOptions {
    /// Also float each fusion result on the field as a fused idea.
    pub float_fused_results: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InFlight {
    Generate,
    Fuse { selected: Vec<String> },
}

#[derive(Debug, Default)]
pub struct GenerationController {
    options: ControllerOptions,
    ideas: Vec<Idea>,
    history: Vec<FusionRecord>,
    in_flight: Option<InFlight>,
    /// Set by a reset during a call; that call's result is thrown away.
    discard_in_flight: bool,
    has_generated_once: bool,
    grid_key: u64,
    last_error: Option<String>,
}

impl GenerationController {
    pub fn new(options: ControllerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn idea_texts(&self) -> Vec<String> {
        self.ideas.iter().map(|i| i.text.clone()).collect()
    }

    pub fn history(&self) -> &[FusionRecord] {
        &self.history
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn has_generated_once(&self) -> bool {
        self.has_generated_once
    }

    /// Changes after every successful fusion; the grid clears when it does.
    pub fn grid_key(&self) -> u64 {
        self.grid_key
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Start a generation round. `None` when the theme is blank or busy.
    pub fn begin_generate(&mut self, theme: &str) -> Option<GenerateJob> {
        let theme = theme.trim();
        if theme.is_empty() || self.is_busy() {
            return None;
        }
        self.in_flight = Some(InFlight::Generate);
        self.last_error = None;
        Some(GenerateJob {
            theme: theme.to_string(),
            prior: self.idea_texts(),
            follow_up: self.has_generated_once,
        })
    }

    /// Apply a generation result; on success returns the ideas just appended.
    pub fn finish_generate<E: fmt::Display>(
        &mut self,
        result: Result<Vec<String>, E>,
    ) -> Result<&[Idea], E> {
        if self.in_flight != Some(InFlight::Generate) {
            tracing::warn!("Generation result arrived with no generation in flight");
            return Ok(&[]);
        }
        self.in_flight = None;
        if std::mem::take(&mut self.discard_in_flight) {
            tracing::debug!("Dropping generation result from before reset");
            return Ok(&[]);
        }

        match result {
            Ok(texts) => {
                let start = self.ideas.len();
                self.ideas.extend(texts.into_iter().map(Idea::normal));
                self.has_generated_once = true;
                tracing::info!(added = self.ideas.len() - start, "Ideas generated");
                Ok(&self.ideas[start..])
            }
            Err(e) => {
                tracing::warn!("Idea generation failed: {}", e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Start a fusion. `None` with fewer than two inputs or when busy.
    pub fn begin_fuse(&mut self, selected: Vec<String>) -> Option<FuseJob> {
        if selected.len() < MIN_FUSION_INPUTS || self.is_busy() {
            return None;
        }
        self.in_flight = Some(InFlight::Fuse {
            selected: selected.clone(),
        });
        self.last_error = None;
        Some(FuseJob { selected })
    }

    /// Apply a fusion result; on success returns the new record.
    pub fn finish_fuse<E: fmt::Display>(
        &mut self,
        result: Result<FusionOutcome, E>,
    ) -> Result<Option<&FusionRecord>, E> {
        let selected = match self.in_flight.take() {
            Some(InFlight::Fuse { selected }) => selected,
            other => {
                tracing::warn!("Fusion result arrived with no fusion in flight");
                self.in_flight = other;
                return Ok(None);
            }
        };
        if std::mem::take(&mut self.discard_in_flight) {
            tracing::debug!("Dropping fusion result from before reset");
            return Ok(None);
        }

        match result {
            Ok(outcome) => {
                if self.options.float_fused_results {
                    self.ideas.push(Idea::fused(outcome.result.clone()));
                }
                self.history.push(FusionRecord::new(selected, outcome));
                self.grid_key += 1;
                tracing::info!(history = self.history.len(), "Fusion recorded");
                Ok(self.history.last())
            }
            Err(e) => {
                tracing::warn!("Fusion failed: {}", e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Generate and apply in one go.
    pub async fn generate(
        &mut self,
        service: &IdeaService,
        theme: &str,
    ) -> Result<Vec<String>, MuseError> {
        let Some(job) = self.begin_generate(theme) else {
            return Err(if self.is_busy() {
                MuseError::Busy
            } else {
                MuseError::EmptyTheme
            });
        };
        let result = service.generate_ideas(&job).await;
        let added = self.finish_generate(result)?;
        Ok(added.iter().map(|i| i.text.clone()).collect())
    }

    /// Fuse and apply in one go.
    pub async fn fuse(
        &mut self,
        service: &IdeaService,
        selected: Vec<String>,
    ) -> Result<FusionRecord, MuseError> {
        let count = selected.len();
        let Some(job) = self.begin_fuse(selected) else {
            return Err(if self.is_busy() {
                MuseError::Busy
            } else {
                MuseError::NotEnoughSelections(count)
            });
        };
        let result = service.fuse_ideas(&job).await;
        let record = self.finish_fuse(result)?;
        record.cloned().ok_or(MuseError::Busy)
    }

    /// Drop every idea, record and error.
    ///
    /// A call already in flight keeps the controller busy until its result
    /// arrives; that result is then discarded, so it can never land on a
    /// job started after the reset.
    pub fn reset(&mut self) {
        self.ideas.clear();
        self.history.clear();
        self.discard_in_flight = self.in_flight.is_some();
        self.has_generated_once = false;
        self.last_error = None;
        self.grid_key += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(result: &str, score: &str) -> FusionOutcome {
        FusionOutcome {
            result: result.to_string(),
            score: score.to_string(),
        }
    }

    #[test]
    fn blank_theme_is_ignored() {
        let mut controller = GenerationController::default();
        assert!(controller.begin_generate("   ").is_none());
        assert!(!controller.is_busy());
    }

    #[test]
    fn busy_blocks_second_request() {
        let mut controller = GenerationController::default();
        assert!(controller.begin_generate("茶").is_some());
        assert!(controller.is_busy());
        assert!(controller.begin_generate("茶").is_none());
        assert!(controller.begin_fuse(vec!["a".into(), "b".into()]).is_none());
    }

    #[test]
    fn first_round_then_follow_up() {
        let mut controller = GenerationController::default();

        let job = controller.begin_generate(" 茶 ").unwrap();
        assert_eq!(job.theme, "茶");
        assert!(!job.follow_up);
        assert!(job.prior.is_empty());

        let added = controller
            .finish_generate::<String>(Ok(vec!["一杯清茶".into(), "慢享时光".into()]))
            .unwrap();
        assert_eq!(added.len(), 2);
        assert!(!controller.is_busy());
        assert!(controller.has_generated_once());

        let job = controller.begin_generate("茶").unwrap();
        assert!(job.follow_up);
        assert_eq!(job.prior, vec!["一杯清茶".to_string(), "慢享时光".to_string()]);
    }

    #[test]
    fn failed_generation_clears_busy_and_keeps_ideas() {
        let mut controller = GenerationController::default();
        controller.begin_generate("茶").unwrap();
        controller
            .finish_generate::<String>(Ok(vec!["一杯清茶".into()]))
            .unwrap();

        controller.begin_generate("茶").unwrap();
        let err = controller
            .finish_generate(Err("connection reset".to_string()))
            .unwrap_err();
        assert_eq!(err, "connection reset");
        assert!(!controller.is_busy());
        assert_eq!(controller.ideas().len(), 1);
        assert_eq!(controller.last_error(), Some("connection reset"));

        // The next attempt clears the stale error.
        controller.begin_generate("茶").unwrap();
        assert!(controller.last_error().is_none());
    }

    #[test]
    fn fusion_needs_two_inputs() {
        let mut controller = GenerationController::default();
        assert!(controller.begin_fuse(vec![]).is_none());
        assert!(controller.begin_fuse(vec!["only".into()]).is_none());
        assert!(!controller.is_busy());
    }

    #[test]
    fn fusion_appends_record_and_bumps_grid_key() {
        let mut controller = GenerationController::default();
        let key = controller.grid_key();

        controller
            .begin_fuse(vec!["甲".into(), "乙".into()])
            .unwrap();
        let record = controller
            .finish_fuse::<String>(Ok(outcome("甲乙合一", "8分")))
            .unwrap()
            .unwrap()
            .clone();

        assert_eq!(record.source_texts, vec!["甲".to_string(), "乙".to_string()]);
        assert_eq!(record.result_text, "甲乙合一");
        assert_eq!(record.score_text, "8分");
        assert_eq!(controller.history().len(), 1);
        assert_eq!(controller.grid_key(), key + 1);
        assert!(controller.ideas().is_empty());
    }

    #[test]
    fn failed_fusion_keeps_grid_key() {
        let mut controller = GenerationController::default();
        controller.begin_fuse(vec!["甲".into(), "乙".into()]).unwrap();
        assert!(controller.finish_fuse(Err("timeout")).is_err());
        assert_eq!(controller.grid_key(), 0);
        assert!(controller.history().is_empty());
        assert!(!controller.is_busy());
    }

    #[test]
    fn fused_results_can_float() {
        let mut controller = GenerationController::new(ControllerOptions {
            float_fused_results: true,
        });
        controller.begin_fuse(vec!["甲".into(), "乙".into()]).unwrap();
        controller
            .finish_fuse::<String>(Ok(outcome("甲乙合一", "8分")))
            .unwrap();

        assert_eq!(controller.ideas(), &[Idea::fused("甲乙合一")]);
    }

    #[test]
    fn stray_results_are_ignored() {
        let mut controller = GenerationController::default();
        let added = controller
            .finish_generate::<String>(Ok(vec!["x".into()]))
            .unwrap();
        assert!(added.is_empty());

        controller.begin_generate("茶").unwrap();
        let record = controller
            .finish_fuse::<String>(Ok(outcome("x", "1分")))
            .unwrap();
        assert!(record.is_none());
        assert!(controller.is_busy());
    }

    #[test]
    fn reset_clears_session() {
        let mut controller = GenerationController::default();
        controller.begin_generate("茶").unwrap();
        controller
            .finish_generate::<String>(Ok(vec!["一杯清茶".into()]))
            .unwrap();

        controller.reset();
        assert!(controller.ideas().is_empty());
        assert!(!controller.has_generated_once());
        assert_eq!(controller.grid_key(), 1);
    }

    #[test]
    fn reset_mid_call_discards_late_result() {
        let mut controller = GenerationController::default();
        controller.begin_generate("茶").unwrap();
        controller.reset();
        assert!(controller.is_busy());
        assert!(controller.begin_generate("咖啡").is_none());

        let added = controller
            .finish_generate::<String>(Ok(vec!["旧的".into()]))
            .unwrap();
        assert!(added.is_empty());
        assert!(!controller.is_busy());
        assert!(!controller.has_generated_once());

        controller.begin_generate("咖啡").unwrap();
        let added = controller
            .finish_generate::<String>(Ok(vec!["新的".into()]))
            .unwrap();
        assert_eq!(added, &[Idea::normal("新的")]);
    }

    #[test]
    fn reset_mid_fusion_discards_late_record() {
        let mut controller = GenerationController::default();
        controller.begin_fuse(vec!["甲".into(), "乙".into()]).unwrap();
        controller.reset();
        let key = controller.grid_key();

        let record = controller
            .finish_fuse::<String>(Ok(outcome("甲乙合一", "8分")))
            .unwrap();
        assert!(record.is_none());
        assert!(controller.history().is_empty());
        assert_eq!(controller.grid_key(), key);
        assert!(!controller.is_busy());
    }
}
