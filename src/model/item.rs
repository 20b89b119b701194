use std::fmt;

/// Fields extracted from one ranked entry
///
/// Every field is best-effort text; a node missing from the markup leaves its
/// field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRecord {
    pub title: String,
    pub subtitle: String,
    pub other_titles: String,
    pub description: String,
    pub year: String,
    pub region: String,
    pub genre_tags: String,
    /// Rating as displayed, e.g. "9.7"
    pub rating_score: String,
    /// Number of ratings, digits only
    pub rating_count: String,
    pub quote: String,
}

impl fmt::Display for ItemRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{title:{} subtitle:{} other_titles:{} description:{} year:{} region:{} \
             genre_tags:{} rating_score:{} rating_count:{} quote:{}}}",
            self.title,
            self.subtitle,
            self.other_titles,
            self.description,
            self.year,
            self.region,
            self.genre_tags,
            self.rating_score,
            self.rating_count,
            self.quote
        )
    }
}
