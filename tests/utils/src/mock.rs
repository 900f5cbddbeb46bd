//! Mock data.
use anyhow::Result;
use ek_core::{
    encrypted_key::{CIPHER_TEXT_LEN, EPHEMERAL_KEY_LEN, SALT_LEN},
    EncryptedKeyRecord,
};
use lopdf::{dictionary, Document, Object, Stream};

/// Compressed secp256k1 generator point.
pub const SWAP_SERVER_KEY: &str =
    "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

/// Fingerprint of the first mock key.
pub const FIRST_FINGERPRINT: &str = "AABBCCDD";

/// Fingerprint of the second mock key.
pub const SECOND_FINGERPRINT: &str = "11223344";

/// Mock encrypted key record; `seed` fills the key material.
pub fn encrypted_key_record(seed: u8, birthday: u32) -> EncryptedKeyRecord {
    let mut ephemeral = [seed; EPHEMERAL_KEY_LEN];
    ephemeral[0] = 0x02;
    EncryptedKeyRecord::new(
        birthday,
        ephemeral,
        [seed ^ 0x55; CIPHER_TEXT_LEN],
        [seed ^ 0xaa; SALT_LEN],
    )
}

/// Mock opaque encrypted key string.
pub fn encrypted_key(seed: u8, birthday: u32) -> String {
    encrypted_key_record(seed, birthday).encode()
}

/// Build a PDF with one page per entry in `pages`.
///
/// Each page shows its text with a standard font.
pub fn pdf(pages: &[&str]) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = format!("BT /F1 18 Tf 72 720 Td ({text}) Tj ET");
        let content_id =
            doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}
