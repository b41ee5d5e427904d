use std::path::PathBuf;

use anyhow::{bail, Context};

use inkpost_shared::WritingKind;
use inkpost_store::{Writing, WritingStore};

/// Minimum lengths enforced by the publish form.  This is the only input
/// validation in the system; the store accepts whatever it is handed.
const MIN_TITLE_CHARS: usize = 3;
const MIN_CONTENT_CHARS: usize = 10;

pub fn run(
    store: &mut WritingStore,
    title: &str,
    kind: &str,
    content: Option<String>,
    file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let kind: WritingKind = kind.parse()?;

    let content = match (content, file) {
        (Some(inline), _) => inline,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("could not read {}", path.display()))?,
        (None, None) => bail!("provide the piece with --content or --file"),
    };

    let title = title.trim();
    let content = content.trim();
    if title.chars().count() < MIN_TITLE_CHARS {
        bail!("title must be at least {MIN_TITLE_CHARS} characters");
    }
    if content.chars().count() < MIN_CONTENT_CHARS {
        bail!("content must be at least {MIN_CONTENT_CHARS} characters");
    }

    let author = store.device_identity()?;
    let writing = Writing::new(title, content, kind, &author);
    let id = writing.id.clone();
    store.create(writing)?;

    println!("Published \"{title}\" ({kind}) as {}", author.display_name());
    println!("id: {id}");
    Ok(())
}
