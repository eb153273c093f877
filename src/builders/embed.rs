//! Embed builder enforcing the API's size limits.
//!
//! Text that exceeds a per-field limit is truncated. Text that would push
//! the embed over the 6000 character total is cut to the space left, and
//! once the total is reached further text is stored empty. Fields beyond the
//! 25th are dropped. Lengths are counted in Unicode scalar values.

use crate::model::embed::{
    Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMedia, EmbedProvider,
};

pub const TITLE_LIMIT: usize = 256;
pub const DESCRIPTION_LIMIT: usize = 2048;
pub const FIELD_NAME_LIMIT: usize = 256;
pub const FIELD_VALUE_LIMIT: usize = 1024;
pub const FOOTER_TEXT_LIMIT: usize = 2048;
pub const AUTHOR_NAME_LIMIT: usize = 256;
pub const FIELD_COUNT_LIMIT: usize = 25;
pub const TOTAL_TEXT_LIMIT: usize = 6000;

#[derive(Debug, Clone, Default)]
pub struct EmbedBuilder {
    data: Embed,
    total: usize,
}

impl EmbedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Truncate `text` to `max`, then to whatever room the total leaves,
    /// and charge the result against the total.
    fn fit(&mut self, text: &str, max: usize) -> String {
        let room = TOTAL_TEXT_LIMIT.saturating_sub(self.total).min(max);
        let fitted: String = text.chars().take(room).collect();
        self.total += fitted.chars().count();
        fitted
    }

    /// Give back the characters of text being replaced.
    fn release(&mut self, old: Option<&str>) {
        if let Some(old) = old {
            self.total -= old.chars().count();
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        let old = self.data.title.take();
        self.release(old.as_deref());
        self.data.title = Some(self.fit(title, TITLE_LIMIT));
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.data.url = Some(url.into());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        let old = self.data.description.take();
        self.release(old.as_deref());
        self.data.description = Some(self.fit(description, DESCRIPTION_LIMIT));
        self
    }

    pub fn thumbnail(mut self, thumbnail: EmbedMedia) -> Self {
        self.data.thumbnail = Some(thumbnail);
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.data.color = Some(color);
        self
    }

    /// RFC 3339 timestamp, e.g. `2024-05-01T12:00:00Z`.
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.data.timestamp = Some(timestamp.into());
        self
    }

    /// Append a field; ignored once the embed holds 25 fields.
    pub fn field(mut self, name: &str, value: &str, inline: bool) -> Self {
        if self.data.fields.len() == FIELD_COUNT_LIMIT {
            return self;
        }
        let name = self.fit(name, FIELD_NAME_LIMIT);
        let value = self.fit(value, FIELD_VALUE_LIMIT);
        self.data.fields.push(EmbedField {
            name,
            value,
            inline,
        });
        self
    }

    pub fn footer(mut self, text: &str, icon_url: Option<String>) -> Self {
        let old = self.data.footer.take().map(|footer| footer.text);
        self.release(old.as_deref());
        self.data.footer = Some(EmbedFooter {
            text: self.fit(text, FOOTER_TEXT_LIMIT),
            icon_url,
        });
        self
    }

    pub fn author(mut self, name: &str, url: Option<String>, icon_url: Option<String>) -> Self {
        let old = self.data.author.take().map(|author| author.name);
        self.release(old.as_deref());
        self.data.author = Some(EmbedAuthor {
            name: self.fit(name, AUTHOR_NAME_LIMIT),
            url,
            icon_url,
        });
        self
    }

    pub fn image(mut self, image: EmbedMedia) -> Self {
        self.data.image = Some(image);
        self
    }

    pub fn video(mut self, video: EmbedMedia) -> Self {
        self.data.video = Some(video);
        self
    }

    pub fn provider(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.data.provider = Some(EmbedProvider {
            name: Some(name.into()),
            url: Some(url.into()),
        });
        self
    }

    pub fn field_count(&self) -> usize {
        self.data.fields.len()
    }

    /// Characters currently counted against the 6000 total.
    pub fn text_total(&self) -> usize {
        self.total
    }

    pub fn build(self) -> Embed {
        self.data
    }
}
