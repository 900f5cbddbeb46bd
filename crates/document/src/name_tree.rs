//! Helpers for the catalog name dictionary.
use crate::{Error, Result};
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Deepest name tree we are willing to walk.
const MAX_DEPTH: usize = 32;

/// Key of a name tree entry and its value.
pub(crate) type NameEntry = (Vec<u8>, Object);

/// Follow an indirect reference.
pub(crate) fn resolve<'a>(
    doc: &'a Document,
    object: &'a Object,
) -> Result<&'a Object> {
    match object {
        Object::Reference(id) => Ok(doc.get_object(*id)?),
        other => Ok(other),
    }
}

pub(crate) fn root_id(doc: &Document) -> Result<ObjectId> {
    Ok(doc.trailer.get(b"Root")?.as_reference()?)
}

/// Embedded files name tree, if the document has one.
pub(crate) fn embedded_files(doc: &Document) -> Result<Option<&Dictionary>> {
    let catalog = doc.get_object(root_id(doc)?)?.as_dict()?;
    let Ok(names) = catalog.get(b"Names") else {
        return Ok(None);
    };
    let names = resolve(doc, names)?.as_dict()?;
    let Ok(files) = names.get(b"EmbeddedFiles") else {
        return Ok(None);
    };
    Ok(Some(resolve(doc, files)?.as_dict()?))
}

/// Collect the leaf entries of a name tree in order.
pub(crate) fn collect_entries(
    doc: &Document,
    node: &Dictionary,
    entries: &mut Vec<NameEntry>,
) -> Result<()> {
    walk(doc, node, 0, entries)
}

fn walk(
    doc: &Document,
    node: &Dictionary,
    depth: usize,
    entries: &mut Vec<NameEntry>,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(Error::NameTreeDepth(MAX_DEPTH));
    }

    if let Ok(names) = node.get(b"Names") {
        for pair in resolve(doc, names)?.as_array()?.chunks(2) {
            if let [Object::String(key, _), value] = pair {
                entries.push((key.clone(), value.clone()));
            }
        }
    }

    if let Ok(kids) = node.get(b"Kids") {
        for kid in resolve(doc, kids)?.as_array()? {
            let kid = resolve(doc, kid)?.as_dict()?;
            walk(doc, kid, depth + 1, entries)?;
        }
    }

    Ok(())
}

/// Mutable names dictionary of the catalog, created when missing.
pub(crate) fn names_mut(doc: &mut Document) -> Result<&mut Dictionary> {
    let root_id = root_id(doc)?;
    let names = doc
        .get_object(root_id)?
        .as_dict()?
        .get(b"Names")
        .ok()
        .cloned();

    if let Some(Object::Reference(id)) = names {
        return Ok(doc.get_object_mut(id)?.as_dict_mut()?);
    }

    let catalog = doc.get_object_mut(root_id)?.as_dict_mut()?;
    if !matches!(names, Some(Object::Dictionary(_))) {
        catalog.set("Names", Dictionary::new());
    }
    Ok(catalog.get_mut(b"Names")?.as_dict_mut()?)
}
