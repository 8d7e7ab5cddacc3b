//! Static relation taxonomy.
//!
//! Every relation name the explorer understands is declared once in
//! [`RELATIONS`]: whether edges of that type are directed, which name is its
//! inverse, which semantic group it belongs to and whether neighborhood
//! expansion follows it by default. Traversal code only ever consults this
//! table, so adding a relation means adding a row here.

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Semantic grouping of relation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationGroup {
    Hierarchy,
    PartWhole,
    Domain,
    Similarity,
    Entailment,
    Contrast,
    Attribute,
}

/// One row of the relation table.
#[derive(Debug)]
pub struct RelationSpec {
    pub name: &'static str,
    pub directed: bool,
    pub inverse: Option<&'static str>,
    pub group: RelationGroup,
    pub neighborhood_default: bool,
}

const fn directed(
    name: &'static str,
    inverse: &'static str,
    group: RelationGroup,
    neighborhood_default: bool,
) -> RelationSpec {
    RelationSpec {
        name,
        directed: true,
        inverse: Some(inverse),
        group,
        neighborhood_default,
    }
}

const fn symmetric(name: &'static str, group: RelationGroup) -> RelationSpec {
    RelationSpec {
        name,
        directed: false,
        inverse: Some(name),
        group,
        neighborhood_default: true,
    }
}

/// A relation type known to the taxonomy.
#[derive(Clone, Copy)]
pub struct Relation(&'static RelationSpec);

mod specs {
    use super::*;

    pub(super) const HYPERNYM: RelationSpec = directed("hypernym", "hyponym", RelationGroup::Hierarchy, true);
    pub(super) const HYPONYM: RelationSpec = directed("hyponym", "hypernym", RelationGroup::Hierarchy, true);
    pub(super) const INSTANCE_HYPERNYM: RelationSpec = directed("instance_hypernym", "instance_hyponym", RelationGroup::Hierarchy, true);
    pub(super) const INSTANCE_HYPONYM: RelationSpec = directed("instance_hyponym", "instance_hypernym", RelationGroup::Hierarchy, true);
    pub(super) const MERO_PART: RelationSpec = directed("mero_part", "holo_part", RelationGroup::PartWhole, true);
    pub(super) const HOLO_PART: RelationSpec = directed("holo_part", "mero_part", RelationGroup::PartWhole, true);
    pub(super) const MERO_MEMBER: RelationSpec = directed("mero_member", "holo_member", RelationGroup::PartWhole, true);
    pub(super) const HOLO_MEMBER: RelationSpec = directed("holo_member", "mero_member", RelationGroup::PartWhole, true);
    pub(super) const MERO_SUBSTANCE: RelationSpec = directed("mero_substance", "holo_substance", RelationGroup::PartWhole, false);
    pub(super) const HOLO_SUBSTANCE: RelationSpec = directed("holo_substance", "mero_substance", RelationGroup::PartWhole, false);
    pub(super) const CAUSES: RelationSpec = directed("causes", "is_caused_by", RelationGroup::Entailment, false);
    pub(super) const IS_CAUSED_BY: RelationSpec = directed("is_caused_by", "causes", RelationGroup::Entailment, false);
    pub(super) const ENTAILS: RelationSpec = directed("entails", "is_entailed_by", RelationGroup::Entailment, false);
    pub(super) const IS_ENTAILED_BY: RelationSpec = directed("is_entailed_by", "entails", RelationGroup::Entailment, false);
    pub(super) const DOMAIN_TOPIC: RelationSpec = directed("domain_topic", "has_domain_topic", RelationGroup::Domain, false);
    pub(super) const HAS_DOMAIN_TOPIC: RelationSpec = directed("has_domain_topic", "domain_topic", RelationGroup::Domain, false);
    pub(super) const DOMAIN_REGION: RelationSpec = directed("domain_region", "has_domain_region", RelationGroup::Domain, false);
    pub(super) const HAS_DOMAIN_REGION: RelationSpec = directed("has_domain_region", "domain_region", RelationGroup::Domain, false);
    pub(super) const EXEMPLIFIES: RelationSpec = directed("exemplifies", "is_exemplified_by", RelationGroup::Domain, false);
    pub(super) const IS_EXEMPLIFIED_BY: RelationSpec = directed("is_exemplified_by", "exemplifies", RelationGroup::Domain, false);
    pub(super) const SIMILAR: RelationSpec = symmetric("similar", RelationGroup::Similarity);
    pub(super) const ALSO: RelationSpec = symmetric("also", RelationGroup::Similarity);
    pub(super) const ANTONYM: RelationSpec = symmetric("antonym", RelationGroup::Contrast);
    pub(super) const ATTRIBUTE: RelationSpec = symmetric("attribute", RelationGroup::Attribute);
}

pub const HYPERNYM: Relation = Relation(&specs::HYPERNYM);
pub const HYPONYM: Relation = Relation(&specs::HYPONYM);
pub const INSTANCE_HYPERNYM: Relation = Relation(&specs::INSTANCE_HYPERNYM);
pub const INSTANCE_HYPONYM: Relation = Relation(&specs::INSTANCE_HYPONYM);
pub const MERO_PART: Relation = Relation(&specs::MERO_PART);
pub const HOLO_PART: Relation = Relation(&specs::HOLO_PART);
pub const MERO_MEMBER: Relation = Relation(&specs::MERO_MEMBER);
pub const HOLO_MEMBER: Relation = Relation(&specs::HOLO_MEMBER);
pub const MERO_SUBSTANCE: Relation = Relation(&specs::MERO_SUBSTANCE);
pub const HOLO_SUBSTANCE: Relation = Relation(&specs::HOLO_SUBSTANCE);
pub const CAUSES: Relation = Relation(&specs::CAUSES);
pub const IS_CAUSED_BY: Relation = Relation(&specs::IS_CAUSED_BY);
pub const ENTAILS: Relation = Relation(&specs::ENTAILS);
pub const IS_ENTAILED_BY: Relation = Relation(&specs::IS_ENTAILED_BY);
pub const DOMAIN_TOPIC: Relation = Relation(&specs::DOMAIN_TOPIC);
pub const HAS_DOMAIN_TOPIC: Relation = Relation(&specs::HAS_DOMAIN_TOPIC);
pub const DOMAIN_REGION: Relation = Relation(&specs::DOMAIN_REGION);
pub const HAS_DOMAIN_REGION: Relation = Relation(&specs::HAS_DOMAIN_REGION);
pub const EXEMPLIFIES: Relation = Relation(&specs::EXEMPLIFIES);
pub const IS_EXEMPLIFIED_BY: Relation = Relation(&specs::IS_EXEMPLIFIED_BY);
pub const SIMILAR: Relation = Relation(&specs::SIMILAR);
pub const ALSO: Relation = Relation(&specs::ALSO);
pub const ANTONYM: Relation = Relation(&specs::ANTONYM);
pub const ATTRIBUTE: Relation = Relation(&specs::ATTRIBUTE);

/// All known relations, in the order neighborhood expansion follows them.
pub static RELATIONS: &[Relation] = &[
    HYPERNYM,
    HYPONYM,
    INSTANCE_HYPERNYM,
    INSTANCE_HYPONYM,
    MERO_PART,
    HOLO_PART,
    MERO_MEMBER,
    HOLO_MEMBER,
    MERO_SUBSTANCE,
    HOLO_SUBSTANCE,
    CAUSES,
    IS_CAUSED_BY,
    ENTAILS,
    IS_ENTAILED_BY,
    DOMAIN_TOPIC,
    HAS_DOMAIN_TOPIC,
    DOMAIN_REGION,
    HAS_DOMAIN_REGION,
    EXEMPLIFIES,
    IS_EXEMPLIFIED_BY,
    SIMILAR,
    ALSO,
    ANTONYM,
    ATTRIBUTE,
];

/// Relations followed upward when climbing the is-a hierarchy.
pub static UPWARD: &[Relation] = &[HYPERNYM, INSTANCE_HYPERNYM];

/// Relations followed downward when descending the is-a hierarchy.
pub static DOWNWARD: &[Relation] = &[HYPONYM, INSTANCE_HYPONYM];

impl Relation {
    /// Looks a relation up by name. Unknown names yield `None`, never an error.
    pub fn from_name(name: &str) -> Option<Relation> {
        let name = name.trim();
        RELATIONS.iter().copied().find(|r| r.name() == name)
    }

    pub fn name(&self) -> &'static str {
        self.0.name
    }

    pub fn is_directed(&self) -> bool {
        self.0.directed
    }

    pub fn inverse(&self) -> Option<Relation> {
        self.0.inverse.and_then(Relation::from_name)
    }

    pub fn group(&self) -> RelationGroup {
        self.0.group
    }

    pub fn is_neighborhood_default(&self) -> bool {
        self.0.neighborhood_default
    }
}

impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Relation {}

impl Hash for Relation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Relation({})", self.name())
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Relation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Whether edges of the named relation are directed. Unknown names are treated as directed.
pub fn is_directed(name: &str) -> bool {
    Relation::from_name(name).map_or(true, |r| r.is_directed())
}

/// The curated relation set used when a neighborhood request names none.
pub fn default_neighborhood_relations() -> Vec<Relation> {
    RELATIONS
        .iter()
        .copied()
        .filter(Relation::is_neighborhood_default)
        .collect()
}

/// Relations belonging to one semantic group, in table order.
pub fn relations_in_group(group: RelationGroup) -> Vec<Relation> {
    RELATIONS.iter().copied().filter(|r| r.group() == group).collect()
}

/// Resolves a list of requested names, dropping unknown and duplicate names.
pub fn resolve_names<S: AsRef<str>>(names: &[S]) -> Vec<Relation> {
    let mut resolved: Vec<Relation> = Vec::new();
    for name in names {
        match Relation::from_name(name.as_ref()) {
            Some(relation) if !resolved.contains(&relation) => resolved.push(relation),
            Some(_) => {}
            None => tracing::debug!(relation = %name.as_ref(), "Ignoring unknown relation type"),
        }
    }
    resolved
}
