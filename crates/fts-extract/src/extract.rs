//! Region scans: parsed document tree → content blocks.
//!
//! [`extract_page`] recognizes each structural region independently, in a
//! fixed priority order, appending to the page's block sequence as regions
//! are found. Regions are not exclusive containers: a document may contain
//! any subset, any number of times, anywhere.

use fts_content::{
    Block, ButtonVariant, ContentBlock, Credentials, CtaButton, CtaSection, Description, Feature,
    Features, Footer, Hero, HeroVariant, Image, ImageDivider, IntroSection, MediaItem, MediaRow,
    NavBrand, NavItem, Navigation, Page, Program, Programs, Schedule, Session, SocialLink, Stat,
};

use crate::dom::Element;

/// Fixed page-id → source-file mapping for the legacy site.
pub const PAGE_FILES: [(&str, &str); 6] = [
    ("home", "index.html"),
    ("about", "about.html"),
    ("programs", "programs.html"),
    ("schedule", "schedule.html"),
    ("gallery", "gallery.html"),
    ("contact", "contact.html"),
];

/// Stock hero background carried over from the legacy pages, which style
/// the hero in CSS rather than markup.
const HERO_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?q=80&w=2000&auto=format&fit=crop";

/// Extract one page's ordered block sequence from its document tree.
///
/// Missing optional sub-elements (subtitle, label, stats, image) degrade to
/// absent or empty values; they never fail the region.
#[must_use]
pub fn extract_page(doc: &Element, page_id: &str) -> Page {
    let mut blocks = Vec::new();

    hero_blocks(doc, &mut blocks);
    intro_blocks(doc, &mut blocks);
    content_blocks(doc, &mut blocks);
    media_row_blocks(doc, &mut blocks);
    image_divider_blocks(doc, &mut blocks);
    features_blocks(doc, &mut blocks);
    programs_blocks(doc, &mut blocks);
    schedule_blocks(doc, &mut blocks);
    credentials_blocks(doc, &mut blocks);
    cta_blocks(doc, &mut blocks);

    Page {
        id: page_id.to_owned(),
        title: page_title(doc),
        blocks,
    }
}

/// Page title from the `<title>` head element, site-name suffix removed.
fn page_title(doc: &Element) -> String {
    let full = doc
        .find_first_tag("title")
        .map(Element::text_content)
        .unwrap_or_default();
    full.split('—').next().unwrap_or("").trim().to_owned()
}

fn text_of(el: &Element) -> String {
    el.text_content().trim().to_owned()
}

/// Button variant from the class set. Fixed precedence: yellow wins, then
/// outline, then primary.
fn button_variant(el: &Element) -> ButtonVariant {
    if el.has_class("btn--yellow") {
        ButtonVariant::Yellow
    } else if el.has_class("btn--outline") {
        ButtonVariant::Outline
    } else {
        ButtonVariant::Primary
    }
}

/// Button label: the inner `<span>` text when present, the link text
/// otherwise.
fn button_text(el: &Element) -> String {
    if let Some(span) = el.find_first_tag("span") {
        let text = span.text_content().trim().to_owned();
        if !text.is_empty() {
            return text;
        }
    }
    el.text_content().trim().to_owned()
}

fn button(el: &Element) -> CtaButton {
    CtaButton {
        text: button_text(el),
        href: el.attr("href").unwrap_or_default().to_owned(),
        variant: button_variant(el),
    }
}

/// Encode a heading's rich text as a plain string: highlighted spans become
/// `{highlight}`/`{/highlight}` markers and `<br>` becomes `\n`.
fn heading_markup(el: &Element) -> String {
    let mut out = String::new();
    out.push_str(&el.text);
    for child in &el.children {
        if child.tag == "span" && child.has_class("highlight") {
            out.push_str("{highlight}");
            out.push_str(&child.text_content());
            out.push_str("{/highlight}");
        } else if child.tag == "br" {
            out.push('\n');
        } else {
            out.push_str(&child.text_content());
        }
        out.push_str(&child.tail);
    }
    out.trim().to_owned()
}

fn hero_blocks(doc: &Element, blocks: &mut Vec<Block>) {
    let Some(hero) = doc.find_first_class("hero") else {
        return;
    };

    let title = hero
        .find_first_class("hero-title")
        .map(heading_markup)
        .unwrap_or_default();
    let subtitle = hero
        .find_first_class("hero-subtitle")
        .map(text_of)
        .unwrap_or_default();

    let mut ctas = Vec::new();
    let mut groups = hero.find_class("hero-ctas");
    groups.extend(hero.find_class("cta-group"));
    for group in groups {
        for link in group.find_tag("a") {
            ctas.push(button(link));
        }
    }

    blocks.push(Block::Hero(Hero {
        title,
        subtitle,
        ctas,
        background_image: Some(HERO_BACKGROUND.to_owned()),
        variant: HeroVariant::Dark,
    }));
}

fn intro_blocks(doc: &Element, blocks: &mut Vec<Block>) {
    for section in doc.find_class("section--intro") {
        let title = section
            .find_first_class("page-title")
            .map(text_of)
            .unwrap_or_default();
        if title.is_empty() {
            continue;
        }
        let subtitle = section
            .find_first_class("lede")
            .map(text_of)
            .unwrap_or_default();

        blocks.push(Block::IntroSection(IntroSection { title, subtitle }));
    }
}

fn content_blocks(doc: &Element, blocks: &mut Vec<Block>) {
    for el in doc.find_class("content-block") {
        let label = el
            .find_first_class("content-block__label")
            .map(text_of)
            .unwrap_or_default();
        let title = el
            .find_first_class("content-block__title")
            .map(text_of)
            .unwrap_or_default();

        // One paragraph collapses to a plain string.
        let mut paragraphs: Vec<String> = el
            .find_class("content-block__description")
            .into_iter()
            .map(text_of)
            .collect();
        let description = if paragraphs.len() == 1 {
            Description::One(paragraphs.remove(0))
        } else {
            Description::Many(paragraphs)
        };

        let stats: Vec<Stat> = el
            .find_class("stat")
            .into_iter()
            .map(|stat| Stat {
                number: stat
                    .find_first_class("stat__number")
                    .map(text_of)
                    .unwrap_or_default(),
                label: stat
                    .find_first_class("stat__label")
                    .map(text_of)
                    .unwrap_or_default(),
            })
            .collect();

        let placeholder = el
            .find_first_class("content-block__media--placeholder")
            .and_then(|media| media.attr("data-label"))
            .unwrap_or("Image")
            .to_owned();

        blocks.push(Block::ContentBlock(ContentBlock {
            label,
            title: title.clone(),
            description,
            image: Some(Image {
                src: None,
                alt: title,
                placeholder,
            }),
            cta: el.find_first_class("btn").map(button),
            stats: if stats.is_empty() { None } else { Some(stats) },
            reverse: el.has_class("content-block--reverse"),
            dark_text: el.find_first_class("content-block__text--dark").is_some(),
        }));
    }
}

fn media_row_blocks(doc: &Element, blocks: &mut Vec<Block>) {
    for row in doc.find_class("media-row") {
        let items = row
            .find_class("media-row__item")
            .into_iter()
            .map(|item| {
                let placeholder = item.attr("data-label").unwrap_or("Image").to_owned();
                MediaItem {
                    src: None,
                    alt: placeholder.clone(),
                    caption: item
                        .find_first_class("media-row__caption")
                        .map(text_of)
                        .unwrap_or_default(),
                    placeholder,
                }
            })
            .collect();

        blocks.push(Block::MediaRow(MediaRow { items }));
    }
}

fn image_divider_blocks(doc: &Element, blocks: &mut Vec<Block>) {
    for divider in doc.find_class("image-divider") {
        let placeholder = divider
            .attr("data-label")
            .unwrap_or("Full Width Image")
            .to_owned();

        blocks.push(Block::ImageDivider(ImageDivider {
            src: None,
            alt: placeholder.clone(),
            placeholder,
        }));
    }
}

/// All elements carrying `grid_class`, paired with their nearest enclosing
/// `.section` ancestor (which holds the section title).
fn grids_with_section<'a>(
    doc: &'a Element,
    grid_class: &str,
) -> Vec<(Option<&'a Element>, &'a Element)> {
    let mut out = Vec::new();
    doc.walk(&mut |node, ancestors| {
        if node.has_class(grid_class) {
            let section = ancestors
                .iter()
                .rev()
                .find(|a| a.has_class("section"))
                .copied();
            out.push((section, node));
        }
    });
    out
}

fn section_title(section: Option<&Element>) -> String {
    section
        .and_then(|s| s.find_first_class("section-title"))
        .map(text_of)
        .unwrap_or_default()
}

fn features_blocks(doc: &Element, blocks: &mut Vec<Block>) {
    for (section, grid) in grids_with_section(doc, "features") {
        let items: Vec<Feature> = grid
            .find_class("feature")
            .into_iter()
            .map(|feature| Feature {
                icon: feature
                    .find_first_class("icon")
                    .map(text_of)
                    .unwrap_or_default(),
                title: feature
                    .find_first_tag("h3")
                    .map(text_of)
                    .unwrap_or_default(),
                description: feature.find_first_tag("p").map(text_of).unwrap_or_default(),
            })
            .collect();

        if !items.is_empty() {
            blocks.push(Block::Features(Features {
                title: section_title(section),
                items,
            }));
        }
    }
}

fn programs_blocks(doc: &Element, blocks: &mut Vec<Block>) {
    for (section, grid) in grids_with_section(doc, "programs-grid") {
        let programs: Vec<Program> = grid
            .find_class("program-card")
            .into_iter()
            .map(|card| Program {
                title: card.find_first_tag("h3").map(text_of).unwrap_or_default(),
                description: card.find_first_tag("p").map(text_of).unwrap_or_default(),
                cta: card.find_first_class("btn").map(button),
            })
            .collect();

        if !programs.is_empty() {
            blocks.push(Block::Programs(Programs {
                title: section_title(section),
                programs,
            }));
        }
    }
}

fn schedule_blocks(doc: &Element, blocks: &mut Vec<Block>) {
    for (section, grid) in grids_with_section(doc, "schedule-grid") {
        let filters: Vec<String> = section
            .map(|s| s.find_class("filter-btn").into_iter().map(text_of).collect())
            .unwrap_or_default();

        let sessions: Vec<Session> = grid
            .find_class("session")
            .into_iter()
            .map(|session| Session {
                // Direct heading text only; the tag lives in a child span.
                title: session
                    .find_first_tag("h4")
                    .map(|h| h.own_text().trim().to_owned())
                    .unwrap_or_default(),
                time: session
                    .find_first_class("meta")
                    .map(text_of)
                    .unwrap_or_default(),
                tag: session
                    .find_first_class("tag")
                    .map(text_of)
                    .unwrap_or_default(),
                selected: session.has_class("session--selected"),
            })
            .collect();

        if !sessions.is_empty() {
            blocks.push(Block::Schedule(Schedule {
                title: section_title(section),
                filters,
                sessions,
            }));
        }
    }
}

fn credentials_blocks(doc: &Element, blocks: &mut Vec<Block>) {
    for (section, list) in grids_with_section(doc, "credentials-list") {
        let items: Vec<String> = list.find_tag("li").into_iter().map(text_of).collect();

        if !items.is_empty() {
            blocks.push(Block::Credentials(Credentials {
                title: section_title(section),
                items,
            }));
        }
    }
}

/// Catch-all scan for centered CTA sections. Runs last; a section whose
/// title was already captured as a `cta` block is skipped, so a section
/// matching several heuristics is emitted once. Title equality is the only
/// identity available in the source markup, so two genuinely different
/// sections with identical titles merge; this is best-effort by design of
/// the source format.
fn cta_blocks(doc: &Element, blocks: &mut Vec<Block>) {
    let mut sections = Vec::new();
    doc.walk(&mut |node, _| {
        if node.has_class("section") || node.has_class("section--alt") {
            sections.push(node);
        }
    });

    for section in sections {
        let Some(title_el) = section.find_first_class("section-title") else {
            continue;
        };
        let button_els = section.find_class("btn");
        if button_els.is_empty() {
            continue;
        }
        if !is_centered(title_el) && !is_centered(section) {
            continue;
        }

        let title = text_of(title_el);
        if title.is_empty() {
            continue;
        }
        let already_captured = blocks
            .iter()
            .any(|b| matches!(b, Block::Cta(cta) if cta.title == title));
        if already_captured {
            continue;
        }

        let description = section
            .find_tag("p")
            .into_iter()
            .find(|p| !p.has_class("section-title"))
            .map(text_of)
            .unwrap_or_default();

        blocks.push(Block::Cta(CtaSection {
            title,
            description,
            buttons: button_els.into_iter().map(button).collect(),
            alt_background: section.has_class("section--alt"),
        }));
    }
}

/// Whether the element's inline style declares centered text.
fn is_centered(el: &Element) -> bool {
    el.attr("style").is_some_and(style_declares_center)
}

fn style_declares_center(style: &str) -> bool {
    style.split(';').any(|decl| {
        let mut parts = decl.splitn(2, ':');
        let prop = parts.next().unwrap_or("").trim();
        let value = parts.next().unwrap_or("").trim();
        prop.eq_ignore_ascii_case("text-align") && value.eq_ignore_ascii_case("center")
    })
}

/// Extract the navigation record from the home document.
#[must_use]
pub fn extract_navigation(doc: &Element) -> Navigation {
    let brand_el = doc.find_first_class("brand");
    let brand = NavBrand {
        text: brand_el.map(text_of).unwrap_or_default(),
        href: brand_el
            .and_then(|b| b.attr("href"))
            .unwrap_or("/")
            .to_owned(),
    };

    let mut items = Vec::new();
    for nav in doc.find_class("site-nav") {
        for link in nav.find_tag("a") {
            let id = nav_page_id(link.attr("href").unwrap_or_default());
            let href = if id == "home" {
                "/".to_owned()
            } else {
                format!("/{id}")
            };
            items.push(NavItem {
                id,
                text: text_of(link),
                href,
            });
        }
    }

    Navigation { brand, items }
}

/// Page id from a legacy nav href: `.html` suffix and leading slash
/// stripped, empty and `index` normalized to `home`.
fn nav_page_id(href: &str) -> String {
    let stripped = href.strip_suffix(".html").unwrap_or(href);
    let id = stripped.replacen('/', "", 1);
    if id.is_empty() || id == "index" {
        "home".to_owned()
    } else {
        id
    }
}

/// Extract the footer record from the home document. Missing pieces fall
/// back to the fixed footer defaults field by field.
#[must_use]
pub fn extract_footer(doc: &Element) -> Footer {
    let fallback = Footer::fallback();
    let Some(footer) = doc.find_first_class("site-footer") else {
        return fallback;
    };

    let brand = footer
        .find_first_tag("strong")
        .map(text_of)
        .filter(|b| !b.is_empty())
        .unwrap_or(fallback.brand);

    let email = footer
        .find_tag("a")
        .into_iter()
        .find_map(|a| {
            a.attr("href")
                .and_then(|href| href.strip_prefix("mailto:"))
                .map(str::to_owned)
        })
        .unwrap_or(fallback.email);

    let social: Vec<SocialLink> = footer
        .find_class("social-links")
        .into_iter()
        .flat_map(|links| links.find_tag("a"))
        .map(|a| SocialLink {
            platform: a
                .attr("aria-label")
                .map(str::to_owned)
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| text_of(a)),
            label: text_of(a),
            href: a.attr("href").unwrap_or_default().to_owned(),
        })
        .collect();

    let copyright = footer
        .find_tag("p")
        .last()
        .map(|p| text_of(p))
        .filter(|c| !c.is_empty())
        .unwrap_or(fallback.copyright);

    Footer {
        brand,
        email,
        copyright,
        social,
    }
}
