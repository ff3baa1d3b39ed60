pub mod cart;
pub mod config;
pub mod courses;
pub mod instructor;
pub mod learn;

use crate::api::LearnHubClient;
use crate::config::Config;
use anyhow::{Context, Result};

pub(crate) fn client(config: &Config) -> Result<LearnHubClient> {
    LearnHubClient::from_config(&config.api).context("Failed to build LearnHub API client")
}

pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

pub(crate) fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}
