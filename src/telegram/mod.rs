//! Telegram Bot API integration

pub mod client;

pub use client::TelegramClient;
