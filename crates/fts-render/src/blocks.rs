//! Per-block HTML builders and the dispatch entry point.
//!
//! The output shapes mirror the legacy page markup closely enough that
//! re-extracting a rendered page yields the same blocks: class names,
//! `data-label` placeholders and the centered-CTA inline style are all
//! preserved.

use std::fmt::Write;

use fts_content::{
    Block, ContactForm, ContactSplit, ContentBlock, Credentials, CtaButton, CtaSection, Features,
    FormField, Hero, ImageDivider, IntroSection, MediaItem, Programs, Schedule, Section, Stat,
};

use crate::escape::escape_html;

const HIGHLIGHT_OPEN: &str = "{highlight}";
const HIGHLIGHT_CLOSE: &str = "{/highlight}";

/// Stock hero background, used when a hero record carries no
/// `backgroundImage` field at all.
const DEFAULT_HERO_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?q=80&w=2000&auto=format&fit=crop";

/// Render one block to an HTML fragment.
///
/// Returns `None` for [`Block::Unknown`]; callers must skip `None` results
/// rather than emit placeholders. Every member of the closed set renders,
/// whatever optional fields are absent.
#[must_use]
pub fn render_block(block: &Block) -> Option<String> {
    match block {
        Block::Hero(b) => Some(hero(b)),
        Block::ContentBlock(b) => Some(content_block(b)),
        Block::MediaRow(b) => Some(media_row(&b.items)),
        Block::ImageDivider(b) => Some(image_divider(b)),
        Block::Cta(b) => Some(cta_section(b)),
        Block::Features(b) => Some(features_section(b)),
        Block::Programs(b) => Some(programs_section(b)),
        Block::Schedule(b) => Some(schedule_section(b)),
        Block::Credentials(b) => Some(credentials_section(b)),
        Block::ContactForm(b) => Some(contact_form_section(b)),
        Block::ContactSplit(b) => Some(contact_split(b)),
        Block::Section(b) => Some(generic_section(b)),
        Block::IntroSection(b) => Some(intro_section(b)),
        Block::Unknown => {
            tracing::warn!("skipping block with unrecognized type");
            None
        }
    }
}

fn button_html(cta: &CtaButton) -> String {
    format!(
        r#"<a class="btn btn--{}" href="{}"><span>{}</span></a>"#,
        cta.variant.class_suffix(),
        escape_html(&cta.href),
        escape_html(&cta.text)
    )
}

fn hero(block: &Hero) -> String {
    // Absent field means stock background; an explicit empty string means
    // no background at all.
    let background = match &block.background_image {
        None => Some(DEFAULT_HERO_BACKGROUND),
        Some(url) if url.is_empty() => None,
        Some(url) => Some(url.as_str()),
    };
    let style = background.map_or_else(String::new, |url| {
        format!(r#" style="background-image: url('{}');""#, escape_html(url))
    });

    let mut out = String::new();
    write!(
        out,
        r#"<section class="hero hero--{}"{style}><div class="hero-inner">"#,
        block.variant.class_suffix()
    )
    .unwrap();
    write!(out, r#"<h1 class="hero-title">{}</h1>"#, hero_title_html(&block.title)).unwrap();
    if !block.subtitle.is_empty() {
        write!(out, r#"<p class="hero-subtitle">{}</p>"#, escape_html(&block.subtitle)).unwrap();
    }
    if !block.ctas.is_empty() {
        out.push_str(r#"<div class="hero-ctas">"#);
        for cta in &block.ctas {
            out.push_str(&button_html(cta));
        }
        out.push_str("</div>");
    }
    out.push_str("</div></section>");
    out
}

/// Decode the hero title's marker encoding: `{highlight}` spans become
/// `<span class="highlight">`, newlines become `<br>`.
fn hero_title_html(title: &str) -> String {
    let mut out = String::new();
    let mut rest = title;
    loop {
        let Some(open) = rest.find(HIGHLIGHT_OPEN) else {
            text_with_breaks(rest, &mut out);
            break;
        };
        text_with_breaks(&rest[..open], &mut out);
        let after = &rest[open + HIGHLIGHT_OPEN.len()..];
        match after.find(HIGHLIGHT_CLOSE) {
            Some(close) => {
                write!(
                    out,
                    r#"<span class="highlight">{}</span>"#,
                    escape_html(&after[..close])
                )
                .unwrap();
                rest = &after[close + HIGHLIGHT_CLOSE.len()..];
            }
            None => {
                // Unbalanced marker: treat the remainder as plain text.
                text_with_breaks(after, &mut out);
                break;
            }
        }
    }
    out
}

fn text_with_breaks(text: &str, out: &mut String) {
    let normalized = text.replace("<br>", "\n");
    for (i, line) in normalized.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        out.push_str(&escape_html(line));
    }
}

fn content_block(block: &ContentBlock) -> String {
    let block_class = if block.reverse {
        "content-block content-block--reverse"
    } else {
        "content-block"
    };
    let mut out = format!(r#"<div class="{block_class}">"#);

    if let Some(image) = &block.image
        && let Some(src) = &image.src
    {
        let alt = if image.alt.is_empty() { &block.title } else { &image.alt };
        write!(
            out,
            r#"<div class="content-block__media"><img src="{}" alt="{}"></div>"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    } else {
        let placeholder = block
            .image
            .as_ref()
            .map(|image| image.placeholder.as_str())
            .filter(|p| !p.is_empty())
            .unwrap_or("Image Placeholder");
        write!(
            out,
            r#"<div class="content-block__media content-block__media--placeholder" data-label="{}"></div>"#,
            escape_html(placeholder)
        )
        .unwrap();
    }

    let text_class = if block.dark_text {
        "content-block__text content-block__text--dark"
    } else {
        "content-block__text"
    };
    write!(out, r#"<div class="{text_class}">"#).unwrap();
    if !block.label.is_empty() {
        write!(out, r#"<span class="content-block__label">{}</span>"#, escape_html(&block.label))
            .unwrap();
    }
    write!(out, r#"<h2 class="content-block__title">{}</h2>"#, escape_html(&block.title)).unwrap();
    for paragraph in block.description.paragraphs() {
        write!(out, r#"<p class="content-block__description">{}</p>"#, escape_html(paragraph))
            .unwrap();
    }
    if let Some(stats) = &block.stats
        && !stats.is_empty()
    {
        out.push_str(&stats_row(stats));
    }
    if let Some(cta) = &block.cta {
        out.push_str(&button_html(cta));
    }
    out.push_str("</div></div>");
    out
}

fn stats_row(stats: &[Stat]) -> String {
    let mut out = String::from(r#"<div class="content-block__stats">"#);
    for stat in stats {
        write!(
            out,
            r#"<div class="stat"><div class="stat__number">{}</div><div class="stat__label">{}</div></div>"#,
            escape_html(&stat.number),
            escape_html(&stat.label)
        )
        .unwrap();
    }
    out.push_str("</div>");
    out
}

/// Render a media row with exactly three slots: real items in original
/// order, placeholders appended, surplus dropped.
fn media_row(items: &[MediaItem]) -> String {
    const SLOTS: usize = 3;

    let mut out = String::from(r#"<div class="media-row">"#);
    for item in items.iter().take(SLOTS) {
        out.push_str(&media_item(item));
    }
    for _ in items.len()..SLOTS {
        out.push_str(
            r#"<div class="media-row__item media-row__item--placeholder" data-label="Image"></div>"#,
        );
    }
    out.push_str("</div>");
    out
}

fn media_item(item: &MediaItem) -> String {
    if let Some(src) = &item.src {
        let mut out = format!(
            r#"<div class="media-row__item"><img src="{}" alt="{}">"#,
            escape_html(src),
            escape_html(&item.alt)
        );
        if !item.caption.is_empty() {
            write!(out, r#"<span class="media-row__caption">{}</span>"#, escape_html(&item.caption))
                .unwrap();
        }
        out.push_str("</div>");
        out
    } else {
        let label = if item.placeholder.is_empty() { "Image" } else { &item.placeholder };
        format!(
            r#"<div class="media-row__item media-row__item--placeholder" data-label="{}"></div>"#,
            escape_html(label)
        )
    }
}

fn image_divider(block: &ImageDivider) -> String {
    if let Some(src) = &block.src {
        format!(
            r#"<div class="image-divider"><img src="{}" alt="{}"></div>"#,
            escape_html(src),
            escape_html(&block.alt)
        )
    } else {
        let label = if block.placeholder.is_empty() { "Full Width Image" } else { &block.placeholder };
        format!(
            r#"<div class="image-divider image-divider--placeholder" data-label="{}"></div>"#,
            escape_html(label)
        )
    }
}

fn cta_section(block: &CtaSection) -> String {
    let section_class = if block.alt_background { "section section--alt" } else { "section" };

    // The centered inline style is what the extraction heuristic keys on.
    let mut out = format!(r#"<section class="{section_class}" style="text-align: center;">"#);
    out.push_str(r#"<div class="container narrow">"#);
    write!(
        out,
        r#"<h2 class="section-title" style="display: block; text-align: center;">{}</h2>"#,
        escape_html(&block.title)
    )
    .unwrap();
    if !block.description.is_empty() {
        write!(out, "<p>{}</p>", escape_html(&block.description)).unwrap();
    }
    if !block.buttons.is_empty() {
        out.push_str(
            r#"<div style="display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap;">"#,
        );
        for b in &block.buttons {
            out.push_str(&button_html(b));
        }
        out.push_str("</div>");
    }
    out.push_str("</div></section>");
    out
}

fn features_section(block: &Features) -> String {
    let mut out = String::from(r#"<section class="section"><div class="container">"#);
    if !block.title.is_empty() {
        write!(out, r#"<h2 class="section-title">{}</h2>"#, escape_html(&block.title)).unwrap();
    }
    out.push_str(r#"<div class="features">"#);
    for feature in &block.items {
        out.push_str(r#"<div class="feature">"#);
        if !feature.icon.is_empty() {
            write!(out, r#"<span class="icon">{}</span>"#, escape_html(&feature.icon)).unwrap();
        }
        write!(out, "<h3>{}</h3>", escape_html(&feature.title)).unwrap();
        write!(out, "<p>{}</p>", escape_html(&feature.description)).unwrap();
        out.push_str("</div>");
    }
    out.push_str("</div></div></section>");
    out
}

fn programs_section(block: &Programs) -> String {
    let mut out = String::from(r#"<section class="section"><div class="container">"#);
    if !block.title.is_empty() {
        write!(out, r#"<h2 class="section-title">{}</h2>"#, escape_html(&block.title)).unwrap();
    }
    out.push_str(r#"<div class="programs-grid">"#);
    for program in &block.programs {
        out.push_str(r#"<div class="program-card">"#);
        write!(out, "<h3>{}</h3>", escape_html(&program.title)).unwrap();
        write!(out, "<p>{}</p>", escape_html(&program.description)).unwrap();
        if let Some(cta) = &program.cta {
            write!(out, r#"<div class="card-actions">{}</div>"#, button_html(cta)).unwrap();
        }
        out.push_str("</div>");
    }
    out.push_str("</div></div></section>");
    out
}

fn schedule_section(block: &Schedule) -> String {
    let mut out = String::from(r#"<section class="section"><div class="container">"#);
    if !block.title.is_empty() {
        write!(out, r#"<h2 class="section-title">{}</h2>"#, escape_html(&block.title)).unwrap();
    }
    if !block.filters.is_empty() {
        out.push_str(r#"<div class="filters">"#);
        for (i, filter) in block.filters.iter().enumerate() {
            let class = if i == 0 { "filter-btn filter-btn--active" } else { "filter-btn" };
            write!(out, r#"<button class="{class}" type="button">{}</button>"#, escape_html(filter))
                .unwrap();
        }
        out.push_str("</div>");
    }
    out.push_str(r#"<div class="schedule-grid">"#);
    for session in &block.sessions {
        let class = if session.selected { "session session--selected" } else { "session" };
        write!(out, r#"<div class="{class}"><h4>{}"#, escape_html(&session.title)).unwrap();
        if !session.tag.is_empty() {
            write!(out, r#" <span class="tag">{}</span>"#, escape_html(&session.tag)).unwrap();
        }
        write!(out, r#"</h4><p class="meta">{}</p></div>"#, escape_html(&session.time)).unwrap();
    }
    out.push_str("</div></div></section>");
    out
}

fn credentials_section(block: &Credentials) -> String {
    let mut out = String::from(r#"<section class="section"><div class="container narrow">"#);
    if !block.title.is_empty() {
        write!(out, r#"<h2 class="section-title">{}</h2>"#, escape_html(&block.title)).unwrap();
    }
    out.push_str(r#"<ul class="credentials-list">"#);
    for item in &block.items {
        write!(out, "<li>{}</li>", escape_html(item)).unwrap();
    }
    out.push_str("</ul></div></section>");
    out
}

fn default_form_fields() -> Vec<FormField> {
    let fields = [
        ("Name", "name", "text", "Your name", false),
        ("Email", "email", "email", "your@email.com", false),
        ("Phone", "phone", "tel", "(555) 123-4567", true),
        ("Message", "message", "textarea", "Tell me about your goals...", false),
    ];
    fields
        .into_iter()
        .map(|(label, name, field_type, placeholder, optional)| FormField {
            label: label.to_owned(),
            name: name.to_owned(),
            field_type: field_type.to_owned(),
            placeholder: placeholder.to_owned(),
            optional,
        })
        .collect()
}

fn form_field(field: &FormField) -> String {
    let mut label = escape_html(&field.label);
    if field.optional {
        label.push_str(r#"<span class="optional"> (optional)</span>"#);
    }

    let name = escape_html(&field.name);
    let placeholder = escape_html(&field.placeholder);
    let mut out = format!(r#"<div class="form-field"><label for="{name}">{label}</label>"#);

    if field.field_type == "textarea" {
        write!(
            out,
            r#"<textarea id="{name}" name="{name}" placeholder="{placeholder}" autocomplete="{name}""#
        )
        .unwrap();
        if !field.optional {
            out.push_str(r#" required aria-required="true""#);
        }
        out.push_str("></textarea>");
    } else {
        write!(
            out,
            r#"<input id="{name}" name="{name}" type="{}" placeholder="{placeholder}" autocomplete="{name}""#,
            escape_html(&field.field_type)
        )
        .unwrap();
        if !field.optional {
            out.push_str(r#" required aria-required="true""#);
        }
        out.push('>');
    }
    out.push_str("</div>");
    out
}

fn contact_form(config: &ContactForm) -> String {
    let default_fields;
    let fields = match &config.fields {
        Some(fields) => fields.as_slice(),
        None => {
            default_fields = default_form_fields();
            &default_fields
        }
    };
    let submit_text = config.submit_text.as_deref().unwrap_or("Send Message");
    let action = config.action.as_deref().unwrap_or("#");

    let mut out = format!(
        r#"<form class="contact-form" action="{}" method="post" aria-labelledby="contact-heading">"#,
        escape_html(action)
    );
    out.push_str(r#"<h2 id="contact-heading" class="sr-only">Contact form</h2>"#);
    for field in fields {
        out.push_str(&form_field(field));
    }
    write!(
        out,
        r#"<button class="btn btn--yellow" type="submit"><span>{}</span></button></form>"#,
        escape_html(submit_text)
    )
    .unwrap();
    out
}

fn contact_form_section(block: &ContactForm) -> String {
    format!(
        r#"<section class="section"><div class="container">{}</div></section>"#,
        contact_form(block)
    )
}

fn contact_split(block: &ContactSplit) -> String {
    let mut out = String::from(r#"<div class="content-block" style="min-height: auto;">"#);

    // Info column.
    out.push_str(r#"<div class="content-block__text" style="padding: 5rem 4rem;">"#);
    if !block.label.is_empty() {
        write!(out, r#"<span class="content-block__label">{}</span>"#, escape_html(&block.label))
            .unwrap();
    }
    write!(out, r#"<h1 class="content-block__title">{}</h1>"#, escape_html(&block.title)).unwrap();
    write!(out, r#"<p class="content-block__description">{}</p>"#, escape_html(&block.description))
        .unwrap();

    out.push_str("<div>");
    if let Some(email) = &block.email {
        write!(
            out,
            r#"<p><strong>Email</strong><br><a href="mailto:{0}">{0}</a></p>"#,
            escape_html(email)
        )
        .unwrap();
    }
    if let Some(location) = &block.location {
        write!(out, "<p><strong>Location</strong><br><span>{}</span></p>", escape_html(location))
            .unwrap();
    }
    if let Some(hours) = &block.hours {
        write!(out, "<p><strong>Hours</strong><br><span>{}</span></p>", escape_html(hours))
            .unwrap();
    }
    out.push_str("</div>");

    if let Some(social) = &block.social
        && !social.is_empty()
    {
        out.push_str(r#"<div class="social-links">"#);
        for link in social {
            write!(
                out,
                r#"<a href="{}" aria-label="{}">{}</a>"#,
                escape_html(&link.href),
                escape_html(&link.platform),
                escape_html(&link.label)
            )
            .unwrap();
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");

    // Form column.
    let form = block.form.clone().unwrap_or_default();
    write!(
        out,
        r#"<div class="content-block__text content-block__text--dark" style="padding: 5rem 4rem;">{}</div>"#,
        contact_form(&form)
    )
    .unwrap();

    out.push_str("</div>");
    out
}

fn generic_section(block: &Section) -> String {
    let section_class = if block.variant == "alt" { "section section--alt" } else { "section" };
    let container_class = if block.narrow { "container narrow" } else { "container" };

    let mut out = format!(r#"<section class="{section_class}"><div class="{container_class}">"#);
    if !block.title.is_empty() {
        write!(out, r#"<h2 class="section-title">{}</h2>"#, escape_html(&block.title)).unwrap();
    }
    if !block.content.is_empty() {
        write!(out, "<p>{}</p>", escape_html(&block.content)).unwrap();
    }
    out.push_str("</div></section>");
    out
}

fn intro_section(block: &IntroSection) -> String {
    let mut out = String::from(r#"<section class="section section--intro"><div class="container">"#);
    write!(out, r#"<h1 class="page-title">{}</h1>"#, escape_html(&block.title)).unwrap();
    if !block.subtitle.is_empty() {
        write!(out, r#"<p class="lede">{}</p>"#, escape_html(&block.subtitle)).unwrap();
    }
    out.push_str("</div></section>");
    out
}

#[cfg(test)]
mod tests {
    use fts_content::{ButtonVariant, Description, HeroVariant, Image, MediaRow};
    use pretty_assertions::assert_eq;

    use super::*;

    fn media_items(n: usize) -> Vec<MediaItem> {
        (0..n)
            .map(|i| MediaItem {
                src: Some(format!("img-{i}.jpg")),
                alt: format!("Item {i}"),
                caption: String::new(),
                placeholder: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_every_known_block_type_renders() {
        let blocks = vec![
            Block::Hero(Hero::default()),
            Block::ContentBlock(ContentBlock::default()),
            Block::MediaRow(MediaRow::default()),
            Block::ImageDivider(ImageDivider::default()),
            Block::Cta(CtaSection::default()),
            Block::Features(Features::default()),
            Block::Programs(Programs::default()),
            Block::Schedule(Schedule::default()),
            Block::Credentials(Credentials::default()),
            Block::ContactForm(ContactForm::default()),
            Block::ContactSplit(ContactSplit::default()),
            Block::Section(Section::default()),
            Block::IntroSection(IntroSection::default()),
        ];

        for block in &blocks {
            assert!(render_block(block).is_some(), "no fragment for {block:?}");
        }
    }

    #[test]
    fn test_unknown_block_renders_absent() {
        assert_eq!(render_block(&Block::Unknown), None);
    }

    #[test]
    fn test_hero_highlight_markers_decode_to_span() {
        let block = Hero {
            title: "Train {highlight}Harder{/highlight}".to_owned(),
            ..Hero::default()
        };
        let html = hero(&block);

        assert_eq!(html.matches(r#"<span class="highlight">"#).count(), 1);
        assert!(html.contains(r#"<span class="highlight">Harder</span>"#));
        assert!(!html.contains("{highlight}"));
    }

    #[test]
    fn test_hero_newline_becomes_break() {
        let block = Hero {
            title: "Flip\nThe Switch".to_owned(),
            ..Hero::default()
        };
        assert!(hero(&block).contains("Flip<br>The Switch"));
    }

    #[test]
    fn test_hero_without_ctas_has_no_cta_group() {
        let block = Hero {
            title: "Go".to_owned(),
            variant: HeroVariant::Dark,
            ..Hero::default()
        };
        let html = hero(&block);

        assert!(html.contains(r#"class="hero hero--dark""#));
        assert!(!html.contains("hero-ctas"));
        assert!(!html.contains("hero-subtitle"));
    }

    #[test]
    fn test_hero_background_handling() {
        let stock = hero(&Hero::default());
        assert!(stock.contains("background-image"));

        let none = hero(&Hero {
            background_image: Some(String::new()),
            ..Hero::default()
        });
        assert!(!none.contains("background-image"));

        let custom = hero(&Hero {
            background_image: Some("https://example.com/bg.jpg".to_owned()),
            ..Hero::default()
        });
        assert!(custom.contains("https://example.com/bg.jpg"));
    }

    #[test]
    fn test_description_string_and_single_sequence_render_alike() {
        let one = ContentBlock {
            description: Description::One("Same text.".to_owned()),
            ..ContentBlock::default()
        };
        let seq = ContentBlock {
            description: Description::Many(vec!["Same text.".to_owned()]),
            ..ContentBlock::default()
        };

        let count = |html: &str| html.matches(r#"<p class="content-block__description">"#).count();
        assert_eq!(count(&content_block(&one)), 1);
        assert_eq!(count(&content_block(&seq)), 1);
    }

    #[test]
    fn test_content_block_missing_image_renders_placeholder() {
        let block = ContentBlock {
            title: "Coaching".to_owned(),
            image: Some(Image {
                src: None,
                alt: "Coaching".to_owned(),
                placeholder: "Coach at work".to_owned(),
            }),
            ..ContentBlock::default()
        };
        let html = content_block(&block);

        assert!(html.contains(r#"data-label="Coach at work""#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_content_block_absent_cta_renders_no_button() {
        let html = content_block(&ContentBlock::default());
        assert!(!html.contains("btn"));
    }

    #[test]
    fn test_content_block_with_stats_and_cta() {
        let block = ContentBlock {
            title: "Results".to_owned(),
            stats: Some(vec![Stat {
                number: "500+".to_owned(),
                label: "Athletes".to_owned(),
            }]),
            cta: Some(CtaButton {
                text: "Start".to_owned(),
                href: "/contact".to_owned(),
                variant: ButtonVariant::Yellow,
            }),
            reverse: true,
            ..ContentBlock::default()
        };
        let html = content_block(&block);

        assert!(html.contains("content-block--reverse"));
        assert!(html.contains(r#"<div class="stat__number">500+</div>"#));
        assert!(html.contains(r#"class="btn btn--yellow""#));
    }

    #[test]
    fn test_media_row_always_three_slots() {
        for n in [0, 1, 2, 3, 5] {
            let html = media_row(&media_items(n));
            assert_eq!(
                html.matches("media-row__item").count(),
                // Placeholder slots carry the class twice (base + modifier).
                3 + 3_usize.saturating_sub(n),
                "wrong slot count for {n} items"
            );
            assert_eq!(html.matches("<img").count(), n.min(3));
        }
    }

    #[test]
    fn test_media_row_real_items_precede_placeholders() {
        let html = media_row(&media_items(1));
        let img = html.find("<img").unwrap();
        let placeholder = html.find("media-row__item--placeholder").unwrap();
        assert!(img < placeholder);
    }

    #[test]
    fn test_cta_section_keeps_centered_inline_style() {
        let block = CtaSection {
            title: "Ready?".to_owned(),
            description: "Let's go.".to_owned(),
            buttons: vec![CtaButton::default()],
            alt_background: true,
        };
        let html = cta_section(&block);

        assert!(html.contains(r#"class="section section--alt""#));
        assert!(html.contains("text-align: center"));
        assert!(html.contains("<p>Let&#x27;s go.</p>"));
    }

    #[test]
    fn test_schedule_first_filter_active() {
        let block = Schedule {
            title: String::new(),
            filters: vec!["All".to_owned(), "Youth".to_owned()],
            sessions: vec![fts_content::Session {
                title: "AM Strength".to_owned(),
                time: "6AM".to_owned(),
                tag: "All".to_owned(),
                selected: true,
            }],
        };
        let html = schedule_section(&block);

        assert_eq!(html.matches("filter-btn--active").count(), 1);
        assert!(html.find("filter-btn--active").unwrap() < html.find("Youth").unwrap());
        assert!(html.contains("session--selected"));
        assert!(html.contains(r#"<span class="tag">All</span>"#));
    }

    #[test]
    fn test_contact_form_defaults() {
        let html = contact_form(&ContactForm::default());

        assert_eq!(html.matches("form-field").count(), 4);
        assert!(html.contains("<textarea"));
        assert!(html.contains(r#"<span class="optional"> (optional)</span>"#));
        assert!(html.contains("<span>Send Message</span>"));
        assert!(html.contains("action=\"#\""));
    }

    #[test]
    fn test_contact_split_renders_info_and_form() {
        let block = ContactSplit {
            title: "Get In Touch".to_owned(),
            description: "Reach out.".to_owned(),
            email: Some("train@fliptheswitch.co".to_owned()),
            ..ContactSplit::default()
        };
        let html = contact_split(&block);

        assert!(html.contains("mailto:train@fliptheswitch.co"));
        assert!(html.contains("contact-form"));
        assert!(html.contains("content-block__text--dark"));
    }

    #[test]
    fn test_generic_section_variants() {
        let alt = Section {
            title: "T".to_owned(),
            content: "C".to_owned(),
            variant: "alt".to_owned(),
            narrow: true,
        };
        let html = generic_section(&alt);
        assert!(html.contains("section--alt"));
        assert!(html.contains("container narrow"));

        let plain = generic_section(&Section::default());
        assert!(!plain.contains("section--alt"));
        assert!(!plain.contains("section-title"));
    }

    #[test]
    fn test_text_is_escaped() {
        let block = IntroSection {
            title: "<script>alert(1)</script>".to_owned(),
            subtitle: String::new(),
        };
        let html = intro_section(&block);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
