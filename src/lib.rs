//! Typed Rust client for the Infobip WhatsApp, RCS and WebRTC HTTP APIs.
//!
//! The crate is split into a domain layer of request/content types with
//! declarative validation, a transport layer for wire-format details, and a
//! small client layer that validates, sends, and maps HTTP statuses to
//! [`InfobipError`] variants.
//!
//! ```rust,no_run
//! use infobip::{Auth, InfobipClient, TextContent, WhatsAppMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), infobip::InfobipError> {
//!     let client = InfobipClient::builder(Auth::api_key("...")?)
//!         .base_url("xxxxx.api.infobip.com")
//!         .build()?;
//!     let request = WhatsAppMessage::new("447860099299", "447860099300", TextContent::new("hello"));
//!     let info = client.send(&request).await?;
//!     println!("{:?}", info.message_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ApiRequest, Auth, InfobipClient, InfobipClientBuilder, InfobipError};
pub use domain::*;
