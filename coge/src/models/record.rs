use super::{Fields, Hydrate};

/// Fields shared by organisms, genomes, experiments, notebooks and groups.
///
/// An `id` of `0` means the record was not given one, e.g. a genome which
/// has not been added to CoGe yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record<I> {
    pub id: I,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl<I> Record<I> {
    pub fn new(id: I, name: Option<String>, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}

impl<I: From<u32> + Default> Record<I> {
    /// A record which does not exist in CoGe yet.
    pub fn named(name: impl Into<String>, description: Option<String>) -> Self {
        Self::new(I::default(), Some(name.into()), description)
    }

    pub(crate) fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            id: fields.u32("id").map(I::from).unwrap_or_default(),
            name: fields.string("name"),
            description: fields.string("description"),
        }
    }
}

/// Common accessors for the entities built around a [Record].
pub trait CogeObject {
    type Id: Copy;

    fn record(&self) -> &Record<Self::Id>;

    fn id(&self) -> Self::Id {
        self.record().id
    }

    fn name(&self) -> Option<&str> {
        self.record().name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.record().description.as_deref()
    }
}

macro_rules! coge_object {
    ($entity:ty, $id:ty) => {
        impl $crate::models::CogeObject for $entity {
            type Id = $id;

            fn record(&self) -> &$crate::models::Record<$id> {
                &self.record
            }
        }
    };
}

pub(crate) use coge_object;

/// A free-form `(type_group, type, text, link)` annotation attached to
/// genomes, experiments and notebooks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    type_group: Option<String>,
    metadata_type: Option<String>,
    text: Option<String>,
    link: Option<String>,
}

impl Metadata {
    pub fn new(
        type_group: Option<String>,
        metadata_type: Option<String>,
        text: Option<String>,
        link: Option<String>,
    ) -> Self {
        Self {
            type_group,
            metadata_type,
            text,
            link,
        }
    }

    pub fn type_group(&self) -> Option<&str> {
        self.type_group.as_deref()
    }

    pub fn metadata_type(&self) -> Option<&str> {
        self.metadata_type.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

impl Hydrate for Metadata {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self::new(
            fields.string("type_group"),
            fields.string("type"),
            fields.string("text"),
            fields.string("link"),
        )
    }
}

/// Hydrate the `additional_metadata` list of an entity.
pub(crate) fn additional_metadata(fields: Fields<'_>) -> Vec<Metadata> {
    fields
        .objects("additional_metadata")
        .map(Metadata::hydrate)
        .collect()
}
