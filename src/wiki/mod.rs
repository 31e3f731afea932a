// Article fetching: the remote encyclopedia collaborator.

pub mod client;
pub mod traits;

/// The raw content of one fetched article, keyed by its topic title.
///
/// Immutable after fetch; the tokenizer and the similarity reporter both
/// read it, neither mutates it.
#[derive(Debug, Clone)]
pub struct Article {
    /// The resolved article title (after redirect resolution this can
    /// differ from the requested topic)
    pub title: String,
    /// Full plain-text article content
    pub text: String,
}
