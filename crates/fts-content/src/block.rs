//! The content-block union and its component shapes.
//!
//! Every page is an ordered sequence of [`Block`] values. The order is the
//! document's linear reading order and is preserved verbatim from extraction
//! through rendering; nothing in this crate re-orders blocks.

use serde::{Deserialize, Serialize};

/// One typed, self-contained content unit within a page.
///
/// The `type` tag selects the shape. The set is closed: rendering matches
/// exhaustively over these variants, so adding a block kind is a
/// compile-time-checked change. Documents written by other tools may carry
/// tags outside this set; those deserialize to [`Block::Unknown`] and are
/// skipped (with a warning) at the render boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    /// Full-screen hero with headline, subtitle and CTA buttons.
    Hero(Hero),
    /// Alternating two-column media/text block.
    ContentBlock(ContentBlock),
    /// Triple-column media row.
    MediaRow(MediaRow),
    /// Full-width image divider between sections.
    ImageDivider(ImageDivider),
    /// Centered call-to-action section.
    Cta(CtaSection),
    /// Feature grid with a section title.
    Features(Features),
    /// Program card grid with a section title.
    Programs(Programs),
    /// Session schedule with filter labels.
    Schedule(Schedule),
    /// Credential list with a section title.
    Credentials(Credentials),
    /// Standalone contact form.
    ContactForm(ContactForm),
    /// Two-column contact layout (info + form).
    ContactSplit(ContactSplit),
    /// Generic titled section with a paragraph of content.
    Section(Section),
    /// Page intro with title and lede.
    IntroSection(IntroSection),
    /// Any tag outside the closed set. Never produced by the extractor.
    #[serde(other)]
    Unknown,
}

/// Button style, inferred at extraction time from the button's class set.
///
/// Inference precedence is fixed: yellow wins over outline, and anything
/// else is primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Yellow,
    Outline,
}

impl ButtonVariant {
    /// Class-name suffix (`btn btn--{suffix}`).
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Yellow => "yellow",
            Self::Outline => "outline",
        }
    }
}

/// A call-to-action link rendered as a button.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaButton {
    pub text: String,
    pub href: String,
    pub variant: ButtonVariant,
}

/// Hero color treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroVariant {
    #[default]
    Dark,
    Light,
}

impl HeroVariant {
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Full-screen hero block.
///
/// The title is rich text encoded as a plain string: highlighted spans are
/// wrapped in `{highlight}`/`{/highlight}` markers and forced line breaks
/// are a single `\n`. The renderer decodes both.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub ctas: Vec<CtaButton>,
    /// Background image URL. Absent means "use the stock background";
    /// an empty string means "no background".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub variant: HeroVariant,
}

/// Description text: either a single paragraph or an ordered sequence.
///
/// The extractor collapses a one-paragraph region to the string form; the
/// renderer accepts both and produces one `<p>` per paragraph either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    One(String),
    Many(Vec<String>),
}

impl Default for Description {
    fn default() -> Self {
        Self::One(String::new())
    }
}

impl Description {
    /// Paragraphs to render. An empty single string yields no paragraphs.
    #[must_use]
    pub fn paragraphs(&self) -> &[String] {
        match self {
            Self::One(s) if s.is_empty() => &[],
            Self::One(s) => std::slice::from_ref(s),
            Self::Many(v) => v,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs().is_empty()
    }
}

impl From<&str> for Description {
    fn from(s: &str) -> Self {
        Self::One(s.to_owned())
    }
}

impl From<Vec<String>> for Description {
    fn from(v: Vec<String>) -> Self {
        Self::Many(v)
    }
}

/// Image reference with a placeholder label for when no source exists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub src: Option<String>,
    pub alt: String,
    pub placeholder: String,
}

/// A single statistic (number + label).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

/// Two-column media/text block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentBlock {
    pub label: String,
    pub title: String,
    pub description: Description,
    pub image: Option<Image>,
    pub cta: Option<CtaButton>,
    pub stats: Option<Vec<Stat>>,
    /// Media/text column order is flipped.
    pub reverse: bool,
    /// Text column uses the dark treatment.
    pub dark_text: bool,
}

/// One slot of a media row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaItem {
    pub src: Option<String>,
    pub alt: String,
    pub caption: String,
    pub placeholder: String,
}

/// Triple-column media row. Rendering always produces exactly three slots,
/// padding with placeholders and never exceeding three.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaRow {
    pub items: Vec<MediaItem>,
}

/// Full-width image divider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDivider {
    pub src: Option<String>,
    pub alt: String,
    pub placeholder: String,
}

/// Centered call-to-action section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaSection {
    pub title: String,
    pub description: String,
    pub buttons: Vec<CtaButton>,
    pub alt_background: bool,
}

impl Default for CtaSection {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            buttons: Vec::new(),
            alt_background: true,
        }
    }
}

/// One feature cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Feature grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub title: String,
    pub items: Vec<Feature>,
}

/// One program card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Program {
    pub title: String,
    pub description: String,
    pub cta: Option<CtaButton>,
}

/// Program card grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Programs {
    pub title: String,
    pub programs: Vec<Program>,
}

/// One schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub title: String,
    pub time: String,
    pub tag: String,
    pub selected: bool,
}

/// Session schedule with filter labels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub title: String,
    pub filters: Vec<String>,
    pub sessions: Vec<Session>,
}

/// Credential list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub title: String,
    pub items: Vec<String>,
}

/// One configurable form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormField {
    pub label: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub placeholder: String,
    pub optional: bool,
}

impl Default for FormField {
    fn default() -> Self {
        Self {
            label: String::new(),
            name: String::new(),
            field_type: "text".to_owned(),
            placeholder: String::new(),
            optional: false,
        }
    }
}

/// Standalone contact form. Absent fields fall back to the stock
/// name/email/phone/message set at render time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactForm {
    pub fields: Option<Vec<FormField>>,
    pub submit_text: Option<String>,
    pub action: Option<String>,
}

/// Social link (shared with the footer record).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub platform: String,
    pub label: String,
    pub href: String,
}

/// Two-column contact layout: info column plus an embedded form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSplit {
    pub label: String,
    pub title: String,
    pub description: String,
    pub email: Option<String>,
    pub location: Option<String>,
    pub hours: Option<String>,
    pub social: Option<Vec<SocialLink>>,
    pub form: Option<ContactForm>,
}

/// Generic titled section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    pub title: String,
    pub content: String,
    /// `"alt"` selects the alternate background.
    pub variant: String,
    pub narrow: bool,
}

/// Page intro: `h1` title plus optional lede.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroSection {
    pub title: String,
    pub subtitle: String,
}
