use serde::Deserialize;

/// `GET /r/{subreddit}/hot.json`
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<ListingChild>,
    #[serde(default)]
    pub after: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListingChild {
    pub data: Post,
}

#[derive(Debug, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub title: String,
}

/// `GET /r/{subreddit}/about.json`
#[derive(Debug, Deserialize)]
pub struct AboutResponse {
    pub data: AboutData,
}

#[derive(Debug, Deserialize)]
pub struct AboutData {
    #[serde(default)]
    pub subscribers: Option<u64>,
}

impl ListingData {
    /// Cursor for the next page. Reddit sends `null` on the last page; an
    /// empty string is treated the same way.
    pub fn next_cursor(&self) -> Option<&str> {
        self.after.as_deref().filter(|after| !after.is_empty())
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|child| child.data.title.as_str())
    }
}
