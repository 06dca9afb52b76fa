// SPDX-License-Identifier: MPL-2.0
//! Image groups and the discovery seam used by the lightbox.
//!
//! The navigator never walks the gallery itself. It asks a [`GroupResolver`]
//! for the ordered siblings of the activated image and keeps the answer as an
//! immutable [`ImageGroup`] snapshot for the whole session.

use std::fmt;

/// A reference to one image shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    /// Identifier of the batch (group container) the image belongs to.
    pub batch_id: String,
    /// File name as reported by the backend listing.
    pub filename: String,
    /// Fully qualified URL the image bytes are served from.
    pub source: String,
}

impl ImageRef {
    #[must_use]
    pub fn new(
        batch_id: impl Into<String>,
        filename: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            batch_id: batch_id.into(),
            filename: filename.into(),
            source: source.into(),
        }
    }
}

/// Ordered snapshot of the sibling images of a group container.
///
/// The snapshot is taken when the lightbox opens and is not refreshed while
/// it stays open, so a gallery reload cannot shift in-flight navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageGroup {
    images: Vec<ImageRef>,
}

impl ImageGroup {
    #[must_use]
    pub fn new(images: Vec<ImageRef>) -> Self {
        Self { images }
    }

    /// A group made of a single image.
    #[must_use]
    pub fn single(image: ImageRef) -> Self {
        Self {
            images: vec![image],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    /// Position of `image` in document order, if it is a member.
    #[must_use]
    pub fn position(&self, image: &ImageRef) -> Option<usize> {
        self.images.iter().position(|candidate| candidate == image)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }
}

impl FromIterator<ImageRef> for ImageGroup {
    fn from_iter<T: IntoIterator<Item = ImageRef>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Errors reported by group discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No group container holds the activated image.
    GroupNotFound {
        /// Batch the image claimed to belong to.
        batch_id: String,
    },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::GroupNotFound { batch_id } => {
                write!(f, "no image group found for batch {batch_id}")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

/// Given an activated image, returns the ordered sibling sequence it belongs to.
pub trait GroupResolver {
    /// Resolves the group container of `target`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::GroupNotFound`] when no container holds the target.
    fn resolve(&self, target: &ImageRef) -> Result<ImageGroup, NavigationError>;
}

impl<F> GroupResolver for F
where
    F: Fn(&ImageRef) -> Result<ImageGroup, NavigationError>,
{
    fn resolve(&self, target: &ImageRef) -> Result<ImageGroup, NavigationError> {
        self(target)
    }
}
