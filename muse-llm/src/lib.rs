//! Muse LLM - chat-completion client for the Muse slogan generator.
//!
//! The crate is deliberately narrow: it knows how to send a role-tagged
//! prompt to an OpenAI-compatible `/chat/completions` endpoint and hand back
//! the reply text. Prompt wording and response parsing live in `muse-core`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use muse_llm::{create_llm_client, ChatRequest, LlmConfig, Message};
//!
//! let config = LlmConfig::from_env()?;
//! let client = create_llm_client(&config)?;
//! let request = ChatRequest::new(&config.model, config.temperature)
//!     .with_message(Message::new_system("You are a copywriter."))
//!     .with_message(Message::new_user("Three slogans for tea."));
//! let text = client.complete(request).await?;
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod message;
pub mod openai;
pub mod provider;

pub use config::LlmConfig;
pub use error::LlmError;
pub use factory::create_llm_client;
pub use message::{ChatRequest, ChatResponse, Message, MessageRole};
pub use openai::OpenAiClient;
pub use provider::LlmProvider;
