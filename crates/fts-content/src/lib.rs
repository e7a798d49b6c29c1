//! Shared content model for the FTS site engine.
//!
//! This crate defines the typed content-block union ([`Block`]) plus the
//! site-level records ([`Page`], [`Navigation`], [`Footer`], [`SiteSettings`],
//! [`GalleryImage`]) that the extractor produces and the renderer consumes.
//! It is a pure data contract: no I/O, no behavior beyond serde and a few
//! accessors.
//!
//! # Wire format
//!
//! Records serialize to the JSON shape stored in the hosted document
//! database: blocks are tagged by a kebab-case `type` field, record fields
//! are camelCase. A block whose `type` is not part of the closed set
//! deserializes to [`Block::Unknown`] so a foreign document degrades to a
//! skippable block instead of failing the whole page.

mod block;
mod site;

pub use block::{
    Block, ButtonVariant, ContactForm, ContactSplit, ContentBlock, Credentials, CtaButton,
    CtaSection, Description, Feature, Features, FormField, Hero, HeroVariant, Image, ImageDivider,
    IntroSection, MediaItem, MediaRow, Program, Programs, Schedule, Section, Session, SocialLink,
    Stat,
};
pub use site::{Footer, GalleryImage, NavBrand, NavItem, Navigation, Page, SiteData, SiteSettings};
