use std::fmt;
use std::str::FromStr;

/// Category assigned to articles that have none
pub const DEFAULT_CATEGORY: &str = "默认分类";
pub const STATUS_PUBLISH: &str = "publish";
pub const STATUS_DRAFT: &str = "draft";
pub const META_CATEGORY: &str = "category";
pub const META_TAG: &str = "tag";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStatus {
    Publish,
    Draft,
}

impl ArticleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleStatus::Publish => STATUS_PUBLISH,
            ArticleStatus::Draft => STATUS_DRAFT,
        }
    }
}

/// Kind of taxonomy entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaType {
    Category,
    Tag,
}

impl MetaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaType::Category => META_CATEGORY,
            MetaType::Tag => META_TAG,
        }
    }
}

impl FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PUBLISH => Ok(ArticleStatus::Publish),
            STATUS_DRAFT => Ok(ArticleStatus::Draft),
            _ => Err(format!("Unknown article status: {}", s)),
        }
    }
}

impl FromStr for MetaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            META_CATEGORY => Ok(MetaType::Category),
            META_TAG => Ok(MetaType::Tag),
            _ => Err(format!("Unknown meta type: {}", s)),
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MetaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_its_own_string() {
        for status in [ArticleStatus::Publish, ArticleStatus::Draft] {
            assert_eq!(status.as_str().parse::<ArticleStatus>(), Ok(status));
        }
        assert!("Publish".parse::<ArticleStatus>().is_err());
    }

    #[test]
    fn meta_type_strings() {
        assert_eq!(MetaType::Tag.to_string(), "tag");
        assert_eq!("category".parse::<MetaType>(), Ok(MetaType::Category));
        assert!("".parse::<MetaType>().is_err());
    }
}
