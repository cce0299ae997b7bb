//! Post records as supplied by the export reader.
//!
//! A `Post` is immutable once constructed. Everything downstream (path
//! building, markdown conversion, writing) takes it by reference.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of content item, controlling the type folder of the output path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostType {
    Post,
    Page,
    /// Any other registered post type, kept verbatim (e.g. `"recipe"`).
    Custom(String),
}

impl PostType {
    /// Parse a raw export type string. `"post"` and `"page"` are matched first,
    /// so they can never become a custom type.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "post" => Self::Post,
            "page" => Self::Page,
            other => Self::Custom(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Post => "post",
            Self::Page => "page",
            Self::Custom(name) => name,
        }
    }
}

impl Serialize for PostType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PostType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

/// One exported content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub post_type: Option<PostType>,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub content: String,
}

impl Post {
    /// Minimal post with only the required id set.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            slug: None,
            title: String::new(),
            post_type: None,
            is_draft: false,
            date: None,
            content: String::new(),
        }
    }

    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_type(mut self, post_type: PostType) -> Self {
        self.post_type = Some(post_type);
        self
    }

    #[must_use]
    pub fn with_draft(mut self, is_draft: bool) -> Self {
        self.is_draft = is_draft;
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}
