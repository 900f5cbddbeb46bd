use crate::{
    load,
    name_tree::{collect_entries, embedded_files, names_mut},
    AttachmentOptions, Error, Result,
};
use lopdf::{dictionary, Object, Stream, StringFormat};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Embed metadata into a PDF document.
///
/// An existing attachment with the same name is replaced
/// and a nested name tree is flattened into a single node.
pub fn embed(
    metadata: &str,
    source: &[u8],
    options: &AttachmentOptions,
) -> Result<Vec<u8>> {
    let mut doc = load(source)?;
    let key = options.name.as_bytes();

    let mut entries = Vec::new();
    if let Some(files) = embedded_files(&doc)? {
        collect_entries(&doc, files, &mut entries)?;
    }
    let existing = entries.len();
    entries.retain(|(name, _)| name != key);
    if entries.len() != existing {
        tracing::warn!(
            name = %options.name,
            "document::embed replacing existing attachment"
        );
    }

    let content = metadata.as_bytes().to_vec();
    let size = content.len() as i64;
    let file_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "EmbeddedFile",
            "Params" => dictionary! { "Size" => size },
        },
        content,
    ));
    let file_spec_id = doc.add_object(dictionary! {
        "Type" => "Filespec",
        "F" => Object::string_literal(options.name.as_str()),
        "UF" => Object::string_literal(options.name.as_str()),
        "Desc" => Object::string_literal(options.description.as_str()),
        "EF" => dictionary! { "F" => file_id, "UF" => file_id },
    });

    entries.push((key.to_vec(), Object::Reference(file_spec_id)));
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    let names: Vec<Object> = entries
        .into_iter()
        .flat_map(|(name, value)| {
            [Object::String(name, StringFormat::Literal), value]
        })
        .collect();

    names_mut(&mut doc)?
        .set("EmbeddedFiles", dictionary! { "Names" => names });

    let mut buffer = Vec::with_capacity(source.len() + metadata.len());
    doc.save_to(&mut buffer)?;

    tracing::debug!(
        name = %options.name,
        source_len = %source.len(),
        output_len = %buffer.len(),
        "document::embed"
    );

    Ok(buffer)
}

/// Embed metadata into the PDF at `source` and write the
/// result to `destination`.
///
/// The output is written to a temporary file next to the
/// destination which is renamed into place once complete, so
/// the destination is either absent, untouched or complete.
/// The source is validated before any file is created.
pub async fn embed_file(
    metadata: &str,
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    options: &AttachmentOptions,
) -> Result<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();
    if destination.file_name().is_none() {
        return Err(Error::NotFile(destination.to_path_buf()));
    }

    let buffer = tokio::fs::read(source).await?;
    let output = embed(metadata, &buffer, options)?;

    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    // Temporary path is removed on drop unless persisted
    let temp = tempfile::Builder::new()
        .prefix(".ek-")
        .suffix(".tmp")
        .tempfile_in(&dir)?
        .into_temp_path();

    let mut file = tokio::fs::File::create(&temp).await?;
    file.write_all(&output).await?;
    file.sync_all().await?;
    drop(file);

    temp.persist(destination)?;

    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        len = %output.len(),
        "document::embed_file"
    );

    Ok(())
}
