use std::fmt;
use std::str::FromStr;

use crate::errors::ApiError;

/// The three supported advanced-content formats.
/// Anything else is rejected before a prompt is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostType {
    Article,
    Update,
    Carousel,
}

impl FromStr for PostType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(PostType::Article),
            "update" => Ok(PostType::Update),
            "carousel" => Ok(PostType::Carousel),
            other => Err(ApiError::UnsupportedPostType(other.to_string())),
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PostType::Article => "article",
            PostType::Update => "update",
            PostType::Carousel => "carousel",
        };
        f.write_str(s)
    }
}
