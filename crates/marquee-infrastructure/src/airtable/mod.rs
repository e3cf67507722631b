//! Airtable adapter: HTTP client and table DTOs.

mod client;
pub mod dto;

pub use client::AirtableClient;
