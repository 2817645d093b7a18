//! Preview site document assembled from a client record.
//!
//! The document is the only thing the preview front-end reads. Field names are
//! camelCase on the wire and the layout mirrors the front-end's
//! `service-business` template.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::colors::{self, SiteColors};
use super::services::{self, ServiceEntry};
use crate::client::Client;
use crate::time;

pub const TEMPLATE: &str = "service-business";

/// Status written when the client record carries none. The store's own
/// default for new clients is `intake`; the two are intentionally not merged.
pub const FALLBACK_STATUS: &str = "prospect";

const HERO_CTA: &str = "Get a Free Quote";
const HERO_CTA_LINK: &str = "#contact";
const CONTACT_HOURS: &str = "Mon-Fri: 8am-6pm, Sat: 9am-2pm";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub status: String,
    pub template: String,
    pub colors: SiteColors,
    pub content: Content,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub hero: Hero,
    pub services: Vec<ServiceEntry>,
    pub about: About,
    pub testimonials: Vec<Testimonial>,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub cta: String,
    pub cta_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub hours: String,
}

fn default_testimonial() -> Testimonial {
    Testimonial {
        text: "Excellent service! They were professional, on time, and did a great job."
            .to_string(),
        author: "Happy Customer".to_string(),
        role: "Local Resident".to_string(),
    }
}

/// Build the preview document for `client`.
///
/// Callers must supply a client with a non-empty `slug` and `business_name`.
/// Absent contact fields become empty strings; `createdAt` falls back to
/// `now` and `updatedAt` is always `now`.
pub fn assemble(client: &Client, now: &NaiveDateTime) -> ConfigDocument {
    let business_type = colors::business_type_key(client.business_type.as_deref());
    let name = &client.business_name;
    let now = time::iso(now);

    ConfigDocument {
        id: client.id.to_string(),
        slug: client.slug.clone(),
        name: name.clone(),
        status: client
            .status
            .clone()
            .unwrap_or_else(|| FALLBACK_STATUS.to_string()),
        template: TEMPLATE.to_string(),
        colors: colors::resolve(client.business_type.as_deref()).into(),
        content: Content {
            hero: Hero {
                headline: format!("Welcome to {}", name),
                subheadline: format!("Professional {} services you can trust.", business_type),
                cta: HERO_CTA.to_string(),
                cta_link: HERO_CTA_LINK.to_string(),
            },
            services: services::normalize(client.services.as_deref()),
            about: About {
                title: format!("About {}", name),
                text: format!(
                    "{} is your trusted local {} service provider. We pride ourselves on quality workmanship, honest pricing, and exceptional customer service.",
                    name, business_type
                ),
            },
            testimonials: vec![default_testimonial()],
            contact: Contact {
                phone: client.phone.clone().unwrap_or_default(),
                email: client.email.clone().unwrap_or_default(),
                address: client.address.clone().unwrap_or_default(),
                hours: CONTACT_HOURS.to_string(),
            },
        },
        created_at: client.created_at.clone().unwrap_or_else(|| now.clone()),
        updated_at: now,
    }
}
