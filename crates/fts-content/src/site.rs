//! Site-level records: pages, navigation, footer, settings, gallery.
//!
//! The fallback constructors return the fixed records substituted when a
//! store read fails or comes back empty. Pages have no fallback: a missing
//! page is a 404, not a default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::block::{Block, SocialLink};

/// A site route: identifier, display title and ordered block sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub blocks: Vec<Block>,
}

/// Navigation brand link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavBrand {
    pub text: String,
    pub href: String,
}

/// One navigation entry. `href` is normalized: `/` for `home`, `/{id}`
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    pub id: String,
    pub text: String,
    pub href: String,
}

/// Site navigation record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Navigation {
    pub brand: NavBrand,
    pub items: Vec<NavItem>,
}

impl Navigation {
    /// Fixed navigation used when the stored record is missing or the read
    /// fails.
    #[must_use]
    pub fn fallback() -> Self {
        let items = [
            ("home", "Home", "/"),
            ("about", "About", "/about"),
            ("programs", "Programs", "/programs"),
            ("schedule", "Schedule", "/schedule"),
            ("gallery", "Gallery", "/gallery"),
            ("contact", "Contact", "/contact"),
        ];

        Self {
            brand: NavBrand {
                text: "Flip The Switch".to_owned(),
                href: "/".to_owned(),
            },
            items: items
                .into_iter()
                .map(|(id, text, href)| NavItem {
                    id: id.to_owned(),
                    text: text.to_owned(),
                    href: href.to_owned(),
                })
                .collect(),
        }
    }
}

/// Site footer record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Footer {
    pub brand: String,
    pub email: String,
    pub copyright: String,
    pub social: Vec<SocialLink>,
}

impl Footer {
    /// Fixed footer used when the stored record is missing or the read
    /// fails.
    #[must_use]
    pub fn fallback() -> Self {
        let social = [
            ("instagram", "IG"),
            ("youtube", "YT"),
            ("tiktok", "TT"),
        ];

        Self {
            brand: "Flip The Switch Performance".to_owned(),
            email: "train@fliptheswitch.co".to_owned(),
            copyright: "© 2025 Flip The Switch. All rights reserved.".to_owned(),
            social: social
                .into_iter()
                .map(|(platform, label)| SocialLink {
                    platform: platform.to_owned(),
                    label: label.to_owned(),
                    href: "#".to_owned(),
                })
                .collect(),
        }
    }
}

/// Site settings document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub tagline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl SiteSettings {
    /// Fixed settings used when the stored record is missing or the read
    /// fails.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            id: None,
            name: "Flip The Switch Performance".to_owned(),
            tagline: "Elite Performance Coaching".to_owned(),
            email: Some("train@fliptheswitch.co".to_owned()),
            phone: None,
            location: Some("Los Angeles, CA".to_owned()),
        }
    }
}

/// One gallery image, ordered by the explicit `order` field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub src: Option<String>,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub order: i64,
}

/// Everything one extraction run produces: the envelope written to disk and
/// uploaded to the document store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteData {
    pub site: SiteSettings,
    pub pages: BTreeMap<String, Page>,
    pub navigation: Option<Navigation>,
    pub footer: Option<Footer>,
}
