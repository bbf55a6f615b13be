//! Zone tags and per-message occurrence indexes.

use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::footer::footer_key;
use super::message::CommitMessageZones;
use super::pattern::IssuePattern;

const ADDED_PREFIX: &str = "added@";
const FOOTER_KEY_PREFIX: &str = "footer-";

/// Where in a commit message an issue id occurred.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ZoneTag {
    /// Anywhere in the message.
    Somewhere,
    /// The subject line.
    Subject,
    /// The body between subject and footer.
    Body,
    /// The footer paragraph.
    Footer,
    /// A footer line with the given key, e.g. `Bug`.
    FooterKey(String),
}

impl fmt::Display for ZoneTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneTag::Somewhere => write!(f, "somewhere"),
            ZoneTag::Subject => write!(f, "subject"),
            ZoneTag::Body => write!(f, "body"),
            ZoneTag::Footer => write!(f, "footer"),
            ZoneTag::FooterKey(key) => write!(f, "{FOOTER_KEY_PREFIX}{key}"),
        }
    }
}

impl FromStr for ZoneTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "somewhere" => Ok(ZoneTag::Somewhere),
            "subject" => Ok(ZoneTag::Subject),
            "body" => Ok(ZoneTag::Body),
            "footer" => Ok(ZoneTag::Footer),
            other => match other.strip_prefix(FOOTER_KEY_PREFIX) {
                Some(key) if !key.is_empty() => Ok(ZoneTag::FooterKey(key.to_string())),
                _ => Err(format!("Unknown zone tag '{other}'")),
            },
        }
    }
}

/// A tag attached to an issue id in an [`OccurrenceIndex`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    /// The id occurs in this zone.
    Zone(ZoneTag),
    /// The id occurs in this zone and did not in the previous patch set.
    Added(ZoneTag),
}

impl Tag {
    /// The zone this tag refers to.
    pub fn zone(&self) -> &ZoneTag {
        match self {
            Tag::Zone(zone) | Tag::Added(zone) => zone,
        }
    }

    /// Whether this is an added marker.
    pub fn is_added(&self) -> bool {
        matches!(self, Tag::Added(_))
    }
}

impl From<ZoneTag> for Tag {
    fn from(zone: ZoneTag) -> Self {
        Tag::Zone(zone)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Zone(zone) => write!(f, "{zone}"),
            Tag::Added(zone) => write!(f, "{ADDED_PREFIX}{zone}"),
        }
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix(ADDED_PREFIX) {
            Some(zone) => Ok(Tag::Added(zone.parse()?)),
            None => Ok(Tag::Zone(s.parse()?)),
        }
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Mapping from issue id to the set of tags it carries.
///
/// Every id carries [`ZoneTag::Somewhere`], and every id carrying a
/// [`ZoneTag::FooterKey`] also carries [`ZoneTag::Footer`].
///
/// Deserialization restores these invariants: loaded tags are recorded as if
/// found in a message, and an added marker also records its zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OccurrenceIndex {
    entries: BTreeMap<String, BTreeSet<Tag>>,
}

impl OccurrenceIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index of all ids `pattern` finds in the zones of a message.
    pub fn build(zones: &CommitMessageZones, pattern: &IssuePattern) -> Self {
        let mut index = Self::new();
        if !pattern.is_enabled() {
            return index;
        }

        index.record_all(pattern.find_ids(zones.subject()), ZoneTag::Subject);

        let body = zones.body();
        index.record_all(pattern.find_ids(&body), ZoneTag::Body);

        let footer = zones.footer();
        index.record_all(pattern.find_ids(&footer), ZoneTag::Footer);

        for line in zones.footer_lines() {
            if let Some(key) = footer_key(line) {
                index.record_all(pattern.find_ids(line), ZoneTag::FooterKey(key.to_string()));
            }
        }

        index
    }

    /// Records that `id` occurs in `zone`, along with the zones it implies.
    pub fn record(&mut self, id: &str, zone: ZoneTag) {
        let tags = self.entries.entry(id.to_string()).or_default();
        tags.insert(Tag::Zone(ZoneTag::Somewhere));
        if matches!(zone, ZoneTag::FooterKey(_)) {
            tags.insert(Tag::Zone(ZoneTag::Footer));
        }
        tags.insert(Tag::Zone(zone));
    }

    fn record_all<'a>(&mut self, ids: impl Iterator<Item = &'a str>, zone: ZoneTag) {
        for id in ids {
            self.record(id, zone.clone());
        }
    }

    /// Adds an added marker for `zone` to an id already in the index.
    ///
    /// Returns `false` (and changes nothing) if `id` is not indexed.
    pub(crate) fn insert_added(&mut self, id: &str, zone: ZoneTag) -> bool {
        match self.entries.get_mut(id) {
            Some(tags) => {
                tags.insert(Tag::Added(zone));
                true
            }
            None => false,
        }
    }

    /// Tags of `id`, if it occurs at all.
    pub fn get(&self, id: &str) -> Option<&BTreeSet<Tag>> {
        self.entries.get(id)
    }

    /// Whether `id` carries `tag`.
    pub fn contains(&self, id: &str, tag: &Tag) -> bool {
        self.entries.get(id).is_some_and(|tags| tags.contains(tag))
    }

    /// Whether `id` occurs in `zone`.
    pub fn occurs_in(&self, id: &str, zone: &ZoneTag) -> bool {
        self.contains(id, &Tag::Zone(zone.clone()))
    }

    /// Ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Id and tag set pairs in ascending id order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, BTreeSet<Tag>> {
        self.entries.iter()
    }

    /// Number of distinct ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no id was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the index into its underlying map.
    pub fn into_map(self) -> BTreeMap<String, BTreeSet<Tag>> {
        self.entries
    }
}

impl<'de> Deserialize<'de> for OccurrenceIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, BTreeSet<Tag>>::deserialize(deserializer)?;

        let mut index = Self::new();
        for (id, tags) in entries {
            // An id listed without tags still occurs somewhere.
            index.record(&id, ZoneTag::Somewhere);
            for tag in tags {
                match tag {
                    Tag::Zone(zone) => index.record(&id, zone),
                    Tag::Added(zone) => {
                        index.record(&id, zone.clone());
                        index.insert_added(&id, zone);
                    }
                }
            }
        }
        Ok(index)
    }
}

impl<'a> IntoIterator for &'a OccurrenceIndex {
    type Item = (&'a String, &'a BTreeSet<Tag>);
    type IntoIter = btree_map::Iter<'a, String, BTreeSet<Tag>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
