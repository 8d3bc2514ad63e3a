pub mod commands;
pub mod config;
pub mod flavor;
pub mod llm;
pub mod pipeline;
pub mod reply;
pub mod search;
pub mod youtube;

/// Custom data passed to all commands
pub struct Data {
    pub config: config::Config,
    pub search: search::TavilyClient,
    pub llm_client: llm::LlmClient,
}

impl Data {
    /// Build the provider clients once from the loaded configuration.
    pub fn new(config: config::Config) -> Self {
        Self {
            search: search::TavilyClient::new(&config),
            llm_client: llm::LlmClient::new(&config),
            config,
        }
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
