//! Interface to the kit content renderer.
use crate::KitInput;
use ek_core::DescriptorSet;

/// Error returned by a content renderer.
pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

/// Material available to the renderer.
#[derive(Debug)]
pub struct KitContent<'a> {
    /// Kit input.
    pub input: &'a KitInput,
    /// Code the user confirms after printing.
    pub verification_code: &'a str,
    /// Checksummed output descriptors.
    pub descriptors: &'a DescriptorSet,
    /// Block height to start recovery scanning from.
    pub birthday_block: u32,
}

/// Renders the visual content of a kit, typically HTML that
/// the host later turns into a PDF.
pub trait ContentRenderer {
    /// Render the kit content in a language.
    fn render(
        &self,
        content: &KitContent<'_>,
        language: &str,
    ) -> Result<String, RenderError>;
}

impl<T: ContentRenderer + ?Sized> ContentRenderer for &T {
    fn render(
        &self,
        content: &KitContent<'_>,
        language: &str,
    ) -> Result<String, RenderError> {
        (**self).render(content, language)
    }
}

impl<T: ContentRenderer + ?Sized> ContentRenderer for Box<T> {
    fn render(
        &self,
        content: &KitContent<'_>,
        language: &str,
    ) -> Result<String, RenderError> {
        (**self).render(content, language)
    }
}
