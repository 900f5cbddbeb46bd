use crate::{
    load,
    name_tree::{collect_entries, embedded_files, resolve},
    Error, Result,
};
use std::path::Path;

/// Extract the metadata attachment named `name`.
pub fn extract(document: &[u8], name: &str) -> Result<String> {
    let doc = load(document)?;
    let not_found = || Error::NotFound(name.to_owned());

    let files = embedded_files(&doc)?.ok_or_else(not_found)?;
    let mut entries = Vec::new();
    collect_entries(&doc, files, &mut entries)?;

    let (_, file_spec) = entries
        .into_iter()
        .find(|(key, _)| key == name.as_bytes())
        .ok_or_else(not_found)?;

    let file_spec = resolve(&doc, &file_spec)?.as_dict()?;
    let embedded = resolve(&doc, file_spec.get(b"EF")?)?.as_dict()?;
    let file = embedded.get(b"UF").or_else(|_| embedded.get(b"F"))?;
    let stream = resolve(&doc, file)?.as_stream()?;

    let content = if stream.dict.has(b"Filter") {
        stream.decompressed_content()?
    } else {
        stream.content.clone()
    };

    tracing::debug!(
        name = %name,
        len = %content.len(),
        "document::extract"
    );

    Ok(String::from_utf8(content)?)
}

/// Read a PDF file and extract the metadata attachment named `name`.
pub async fn extract_file(path: impl AsRef<Path>, name: &str) -> Result<String> {
    let buffer = tokio::fs::read(path.as_ref()).await?;
    extract(&buffer, name)
}

/// Content streams of every page in page order.
///
/// Used to check that embedding leaves the rendered
/// content untouched.
pub fn page_contents(document: &[u8]) -> Result<Vec<Vec<u8>>> {
    let doc = load(document)?;
    let mut pages = Vec::new();
    for page_id in doc.get_pages().into_values() {
        pages.push(doc.get_page_content(page_id)?);
    }
    Ok(pages)
}
