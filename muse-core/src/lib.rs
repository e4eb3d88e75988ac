//! Muse Core - the UI-independent heart of the slogan generator.
//!
//! - `controller`: idea list, fusion history, busy flag, grid key
//! - `service`: the remote half of generate/fuse, over a `muse_llm` provider
//! - `placement`: rejection-sampling layout of bubbles on the floating field
//! - `grid`: the 3x3 combination grid
//! - `prompt` / `parse`: model prompt wording and reply parsing

pub mod controller;
pub mod error;
pub mod grid;
pub mod idea;
pub mod parse;
pub mod placement;
pub mod prompt;
pub mod service;

pub use controller::{ControllerOptions, FuseJob, GenerateJob, GenerationController};
pub use error::MuseError;
pub use grid::{CombinationGrid, GRID_COLUMNS, GRID_SLOTS, MIN_FUSION_INPUTS};
pub use idea::{FusionOutcome, FusionRecord, Idea, IdeaKind};
pub use parse::{UNSCORED, parse_fusion, split_ideas};
pub use placement::{FloatingField, PlacementConfig, PlacementOutcome, Position, Rect, Zone};
pub use service::IdeaService;
