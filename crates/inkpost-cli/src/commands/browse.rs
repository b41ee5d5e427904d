use anyhow::bail;

use inkpost_shared::WritingKind;
use inkpost_store::{Writing, WritingStore};

/// `list`: the explore page.  Newest first, optional category filter and
/// case-insensitive substring search over title and content.
pub fn list(store: &WritingStore, kind: Option<&str>, search: Option<&str>) -> anyhow::Result<()> {
    let kind = kind.map(str::parse::<WritingKind>).transpose()?;
    let query = search.map(str::to_lowercase);

    let writings: Vec<Writing> = store
        .list_all()
        .into_iter()
        .filter(|w| kind.map_or(true, |k| w.kind == k))
        .filter(|w| {
            query.as_ref().map_or(true, |q| {
                w.title.to_lowercase().contains(q) || w.content.to_lowercase().contains(q)
            })
        })
        .collect();

    print_listing(&writings);
    Ok(())
}

/// `show`: the detail page for one writing.
pub fn show(store: &WritingStore, id: &str) -> anyhow::Result<()> {
    let Some(writing) = store.get_by_id(id) else {
        bail!("no writing with id '{id}'");
    };

    println!("{} ({})", writing.title, writing.kind);
    println!(
        "by {} on {}",
        writing.author_name,
        writing.created_at.format("%Y-%m-%d")
    );
    println!(
        "rating: {:.1}/5 from {} rating(s)",
        writing.average_rating, writing.total_ratings
    );
    println!();
    println!("{}", writing.content);
    println!();
    println!("Comments ({})", writing.comments.len());
    for comment in &writing.comments {
        println!(
            "  {} on {}: {}",
            comment.author.username,
            comment.created_at.format("%Y-%m-%d"),
            comment.content
        );
    }
    Ok(())
}

/// `mine`: the dashboard page, only this device's pieces.
pub fn mine(store: &WritingStore) -> anyhow::Result<()> {
    let me = store.device_identity()?;
    let writings: Vec<Writing> = store
        .list_all()
        .into_iter()
        .filter(|w| w.author_id == me.id())
        .collect();

    print_listing(&writings);
    Ok(())
}

fn print_listing(writings: &[Writing]) {
    if writings.is_empty() {
        println!("No writings found.");
        return;
    }

    for writing in writings {
        println!("{} ({}) by {}", writing.title, writing.kind, writing.author_name);
        println!("  id: {}", writing.id);
        println!(
            "  rating: {:.1}/5 from {} rating(s), {} comment(s)",
            writing.average_rating, writing.total_ratings, writing.comments_count
        );
        if let Some(excerpt) = &writing.excerpt {
            println!("  {}", excerpt.replace('\n', " "));
        }
    }
}
