pub mod client;
mod extract;
mod suggestion_generator;

pub use client::GatewayClient;
pub use suggestion_generator::SuggestionGeneratorGateway;
