use serde::{Deserialize, Serialize};

use crate::config::{Config, TagDefaults};
use crate::layouts::Layout;

use super::TagId;

/// Maximum number of tags a `TagSet` can hold.
pub const MAX_TAGS: usize = 32;

/// A bit-per-tag vector. Used both for the tags a client carries and for the tags a
/// monitor has selected.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u32);

impl TagSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Set holding only `tag`. Tags outside the supported range give an empty set.
    #[must_use]
    pub const fn single(tag: TagId) -> Self {
        if tag < MAX_TAGS {
            Self(1 << tag)
        } else {
            Self(0)
        }
    }

    /// Set holding the first `count` tags.
    #[must_use]
    pub const fn all(count: usize) -> Self {
        if count >= MAX_TAGS {
            Self(u32::MAX)
        } else {
            Self((1 << count) - 1)
        }
    }

    #[must_use]
    pub const fn contains(&self, tag: TagId) -> bool {
        tag < MAX_TAGS && self.0 & (1 << tag) != 0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn intersects(&self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn set(&mut self, tag: TagId, value: bool) {
        if tag >= MAX_TAGS {
            return;
        }
        if value {
            self.0 |= 1 << tag;
        } else {
            self.0 &= !(1 << tag);
        }
    }

    pub fn toggle(&mut self, tag: TagId) {
        self.set(tag, !self.contains(tag));
    }

    /// Lowest tag in the set.
    #[must_use]
    pub const fn first(&self) -> Option<TagId> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as TagId)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = TagId> + '_ {
        (0..MAX_TAGS).filter(|t| self.contains(*t))
    }
}

impl FromIterator<TagId> for TagSet {
    fn from_iter<I: IntoIterator<Item = TagId>>(iter: I) -> Self {
        let mut set = Self::empty();
        for tag in iter {
            set.set(tag, true);
        }
        set
    }
}

/// How the struts of a tag are treated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrutMode {
    /// Struts shrink the work area.
    #[default]
    On,
    /// Struts are ignored; bastard windows stay mapped.
    Off,
    /// Struts are ignored and bastard windows are hidden.
    Hide,
}

/// Settings of a single tag. They live in a table indexed by tag so they survive
/// monitor reconfiguration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: TagId,
    pub label: String,
    pub layout: Layout,
    pub nmaster: usize,
    pub mwfact: f32,
    pub strut_mode: StrutMode,
    /// What `nmaster` and `mwfact` reset to.
    pub defaults: TagDefaults,
}

impl Tag {
    #[must_use]
    pub fn new(id: TagId, label: &str, defaults: &TagDefaults) -> Self {
        let defaults = defaults.sanitized();
        Self {
            id,
            label: label.to_owned(),
            layout: defaults.layout,
            nmaster: defaults.nmaster,
            mwfact: defaults.mwfact,
            strut_mode: defaults.strut_mode,
            defaults,
        }
    }

    /// Whether the master area may hold `nmaster` clients on a work area `height`
    /// pixels tall with `border` wide borders.
    #[must_use]
    pub fn fits_masters(nmaster: i32, height: i32, border: i32) -> bool {
        nmaster >= 1 && height / nmaster > 2 * border
    }
}

/// The process wide table of tag settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Tags {
    normal: Vec<Tag>,
}

impl Tags {
    /// Build the table from the configured tag names. There is always at least one
    /// tag and never more than `MAX_TAGS`.
    pub fn new(config: &impl Config) -> Self {
        let mut labels = config.tag_names();
        labels.truncate(MAX_TAGS);
        if labels.is_empty() {
            labels.push("1".to_owned());
        }
        let normal = labels
            .iter()
            .enumerate()
            .map(|(id, label)| Tag::new(id, label, &config.tag_defaults(id)))
            .collect();
        Self { normal }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.normal.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty()
    }

    #[must_use]
    pub fn all(&self) -> &[Tag] {
        &self.normal
    }

    #[must_use]
    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.normal.get(id)
    }

    pub fn get_mut(&mut self, id: TagId) -> Option<&mut Tag> {
        self.normal.get_mut(id)
    }

    /// Index of the tag with the given label.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<TagId> {
        self.normal.iter().position(|t| t.label == label)
    }

    /// Layout of a tag, falling back to the default layout for unknown tags.
    #[must_use]
    pub fn layout(&self, id: TagId) -> Layout {
        self.get(id).map(|t| t.layout).unwrap_or_default()
    }

    #[must_use]
    pub fn strut_mode(&self, id: TagId) -> StrutMode {
        self.get(id).map(|t| t.strut_mode).unwrap_or_default()
    }

    /// A set holding every tag in the table.
    #[must_use]
    pub fn full_set(&self) -> TagSet {
        TagSet::all(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;

    #[test]
    fn toggling_the_only_tag_leaves_an_empty_set() {
        let mut set = TagSet::single(3);
        set.toggle(3);
        assert!(set.is_empty());
        set.toggle(3);
        assert_eq!(set, TagSet::single(3));
    }

    #[test]
    fn out_of_range_tags_are_ignored() {
        let mut set = TagSet::empty();
        set.set(MAX_TAGS, true);
        assert!(set.is_empty());
        assert!(!set.contains(MAX_TAGS + 4));
    }

    #[test]
    fn all_should_hold_exactly_count_tags() {
        let set = TagSet::all(5);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(TagSet::all(MAX_TAGS).iter().count(), MAX_TAGS);
    }

    #[test]
    fn first_is_the_lowest_tag() {
        let set: TagSet = [4, 2, 7].into_iter().collect();
        assert_eq!(set.first(), Some(2));
        assert_eq!(TagSet::empty().first(), None);
    }

    #[test]
    fn intersection_is_the_visibility_test() {
        let client: TagSet = [1, 3].into_iter().collect();
        assert!(client.intersects(TagSet::single(3)));
        assert!(!client.intersects(TagSet::single(2)));
    }

    #[test]
    fn tags_table_uses_the_configured_defaults() {
        let config = TestConfig::default();
        let tags = Tags::new(&config);
        assert_eq!(tags.len(), 5);
        let first = tags.get(0).unwrap();
        assert_eq!(first.nmaster, 1);
        assert!((first.mwfact - 0.6).abs() < f32::EPSILON);
        assert_eq!(tags.find("3"), Some(2));
    }

    #[test]
    fn tags_table_is_never_empty() {
        let config = TestConfig {
            tags: vec![],
            ..TestConfig::default()
        };
        assert_eq!(Tags::new(&config).len(), 1);
    }
}
