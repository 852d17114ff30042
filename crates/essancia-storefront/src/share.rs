//! Social hand-off URLs.
//!
//! With checkout disabled, purchase intent is handed off to the
//! brand's messaging channels. This module only constructs the URLs;
//! opening a browsing context is the embedder's job.

use crate::config::StoreProfile;
use serde::{Deserialize, Serialize};

/// Outbound channels for the hand-off buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialChannel {
    WhatsApp,
    Instagram,
}

impl SocialChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialChannel::WhatsApp => "whatsapp",
            SocialChannel::Instagram => "instagram",
        }
    }
}

/// Build the redirect URL for a channel.
///
/// WhatsApp gets a pre-filled message referencing the current product;
/// Instagram just opens the brand profile.
pub fn redirect_url(channel: SocialChannel, profile: &StoreProfile, product_name: &str) -> String {
    match channel {
        SocialChannel::WhatsApp => {
            let message = format!(
                "Hi, I'm interested in {} from {}!",
                product_name, profile.brand_name
            );
            format!(
                "https://wa.me/{}?text={}",
                profile.whatsapp_number,
                urlencoding::encode(&message)
            )
        }
        SocialChannel::Instagram => {
            format!("https://instagram.com/{}", profile.instagram_handle)
        }
    }
}
