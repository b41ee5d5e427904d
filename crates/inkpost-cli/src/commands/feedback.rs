use anyhow::bail;

use inkpost_store::{Comment, WritingStore};

/// `rate`: fold one star rating into a writing's running average.  The
/// 1-5 range is enforced here, at the boundary; the store applies
/// whatever it is given.
pub fn rate(store: &mut WritingStore, id: &str, stars: u8) -> anyhow::Result<()> {
    if !(1..=5).contains(&stars) {
        bail!("rating must be between 1 and 5 stars");
    }

    if !store.add_rating(id, stars)? {
        bail!("no writing with id '{id}'");
    }

    match store.get_by_id(id) {
        Some(writing) => println!(
            "Rated \"{}\" {stars}/5 (now {:.1} from {} rating(s))",
            writing.title, writing.average_rating, writing.total_ratings
        ),
        None => println!("Rating recorded."),
    }
    Ok(())
}

/// `comment`: append feedback authored by the device identity.
pub fn comment(store: &mut WritingStore, id: &str, text: &str) -> anyhow::Result<()> {
    let text = text.trim();
    if text.is_empty() {
        bail!("comment text must not be empty");
    }

    let author = store.device_identity()?;
    if !store.add_comment(id, Comment::new(text, &author))? {
        bail!("no writing with id '{id}'");
    }

    match store.get_by_id(id) {
        Some(writing) => println!(
            "Comment posted on \"{}\" ({} comment(s))",
            writing.title, writing.comments_count
        ),
        None => println!("Comment posted."),
    }
    Ok(())
}
