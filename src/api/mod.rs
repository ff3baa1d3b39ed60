pub mod client;

pub use client::LearnHubClient;
