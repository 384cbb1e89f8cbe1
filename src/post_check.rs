use crate::error::{Error, Result};
use crate::post::Post;

/// Fails on the first pair of posts sharing an id. Posts are compared
/// pairwise in input order; a run holds at most a few hundred of them.
pub fn check_duplicates(posts: &[Post]) -> Result<()> {
    for (i, post) in posts.iter().enumerate() {
        if posts[i + 1..].iter().any(|other| other.id == post.id) {
            return Err(Error::DuplicateId(post.id.clone()));
        }
    }
    Ok(())
}
