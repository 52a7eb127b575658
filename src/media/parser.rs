//! Feed page parsing and post extraction.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::media::item::Post;

const POST: &str = r#"div[class^="b-post b-post_"]"#;
const AUTHOR: &str = r#"div[class="g-user-username"]"#;
const CAPTION: &str = r#"div[class="b-post__text"]"#;
const VIDEO_WRAPPER: &str = r#"div[class="video-wrapper"]"#;
const VIDEO: &str = "video";
const MP4_SOURCE: &str = r#"source[type="video/mp4"]"#;
const GALLERY: &str = r#"div[class="swiper-wrapper"]"#;
const SLIDE: &str = r#"figure[class^="swiper-slide"]"#;
const LIGHTBOX: &str = r#"a[data-toggle="lightbox"]"#;
const MORE: &str = "span[data-more]";

/// Placeholder used in diagnostics when a post carries no `data-id`.
const UNKNOWN_POST_ID: &str = "<unknown>";

/// Result of parsing one feed page.
#[derive(Debug, Default)]
pub struct Page {
    /// Number of post elements on the page, including ones that failed extraction.
    pub post_count: usize,

    /// Posts extracted from the page, in document order.
    pub posts: Vec<Post>,

    /// Opaque token for the next page, if the page offers one.
    pub more_token: Option<String>,
}

/// Extracts posts from feed markup.
///
/// Selectors are compiled once and reused for every page.
pub struct PostExtractor {
    post: Selector,
    author: Selector,
    caption: Selector,
    video_wrapper: Selector,
    video: Selector,
    mp4_source: Selector,
    gallery: Selector,
    slide: Selector,
    lightbox: Selector,
    more: Selector,
}

impl PostExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            post: parse_selector(POST)?,
            author: parse_selector(AUTHOR)?,
            caption: parse_selector(CAPTION)?,
            video_wrapper: parse_selector(VIDEO_WRAPPER)?,
            video: parse_selector(VIDEO)?,
            mp4_source: parse_selector(MP4_SOURCE)?,
            gallery: parse_selector(GALLERY)?,
            slide: parse_selector(SLIDE)?,
            lightbox: parse_selector(LIGHTBOX)?,
            more: parse_selector(MORE)?,
        })
    }

    /// Parse a full feed page: its posts and its continuation token.
    pub fn parse_page(&self, html: &str) -> Page {
        let document = Html::parse_document(html);
        let elements: Vec<ElementRef> = document.select(&self.post).collect();

        let more_token = document
            .select(&self.more)
            .next()
            .and_then(|el| el.value().attr("data-more"))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        Page {
            post_count: elements.len(),
            posts: self.extract(elements),
            more_token,
        }
    }

    /// Extract posts from a sequence of post elements.
    ///
    /// A post that is missing a required element or attribute is logged and skipped.
    pub fn extract<'a, I>(&self, elements: I) -> Vec<Post>
    where
        I: IntoIterator<Item = ElementRef<'a>>,
    {
        let mut posts = Vec::new();

        for element in elements {
            match self.extract_post(element) {
                Ok(extracted) => {
                    for post in &extracted {
                        tracing::debug!("Added {} from post {}", post.kind(), post.id);
                    }
                    posts.extend(extracted);
                }
                Err(e) => tracing::warn!("Skipping post: {}", e),
            }
        }

        posts
    }

    /// Classify one post element and build its posts.
    fn extract_post(&self, element: ElementRef) -> Result<Vec<Post>> {
        let id = element
            .value()
            .attr("data-id")
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::MissingAttribute {
                post_id: UNKNOWN_POST_ID.to_string(),
                selector: POST.to_string(),
                attribute: "data-id".to_string(),
            })?;

        let author_text = element_text(first(element, &self.author, AUTHOR, id)?);
        let author = author_text.trim_start_matches('@');
        if author.is_empty() {
            return Err(Error::MissingElement {
                post_id: id.to_string(),
                selector: AUTHOR.to_string(),
            });
        }

        let caption = element
            .select(&self.caption)
            .next()
            .map(element_text)
            .unwrap_or_default();

        if element.select(&self.video_wrapper).next().is_some() {
            let preview_url = required_attr(
                first(element, &self.video, VIDEO, id)?,
                VIDEO,
                "poster",
                id,
            )?;
            let media_url = required_attr(
                first(element, &self.mp4_source, MP4_SOURCE, id)?,
                MP4_SOURCE,
                "src",
                id,
            )?;
            return Ok(vec![Post::video(id, author, &caption, media_url, preview_url)]);
        }

        if element.select(&self.gallery).next().is_some() {
            let mut urls: Vec<String> = Vec::new();
            for slide in element.select(&self.slide) {
                let url = required_attr(slide, SLIDE, "data-full", id)?;
                if !urls.contains(&url) {
                    urls.push(url);
                }
            }
            return Ok(urls
                .into_iter()
                .map(|url| Post::image(id, author, &caption, url))
                .collect());
        }

        let media_url = required_attr(
            first(element, &self.lightbox, LIGHTBOX, id)?,
            LIGHTBOX,
            "href",
            id,
        )?;
        Ok(vec![Post::image(id, author, &caption, media_url)])
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// First descendant of `element` matching `selector`.
fn first<'a>(
    element: ElementRef<'a>,
    selector: &Selector,
    css: &str,
    post_id: &str,
) -> Result<ElementRef<'a>> {
    element
        .select(selector)
        .next()
        .ok_or_else(|| Error::MissingElement {
            post_id: post_id.to_string(),
            selector: css.to_string(),
        })
}

/// Non-empty attribute value, trimmed.
fn required_attr(element: ElementRef, css: &str, attribute: &str, post_id: &str) -> Result<String> {
    element
        .value()
        .attr(attribute)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::MissingAttribute {
            post_id: post_id.to_string(),
            selector: css.to_string(),
            attribute: attribute.to_string(),
        })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
