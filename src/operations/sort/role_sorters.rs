use super::natural::natural_cmp;
use super::sequencer::sort_by_connectivity;
use crate::data::{has_tag, DataSet, Member};
use crate::rules::RelationRules;

/// Sorts members of a well-known role family separately from the
/// connectivity sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RoleSorter {
    /// `street` members of an associated street.
    Street,
    /// `house` and `address` members.
    AddressHouse,
    /// Public transport stops and platforms.
    StopPlatform,
    /// `from`, `via` and `to` members of a restriction.
    FromViaTo,
}

impl RoleSorter {
    /// Sorters in the order they are offered each member.
    pub const ALL: [Self; 4] = [
        Self::Street,
        Self::AddressHouse,
        Self::StopPlatform,
        Self::FromViaTo,
    ];

    /// Returns `true` if this sorter takes `member` out of `all`.
    pub fn accepts(self, member: &Member, all: &[Member]) -> bool {
        let role = member.role.as_str();
        match self {
            Self::Street => role == "street",
            Self::AddressHouse => matches!(role, "house" | "address"),
            Self::StopPlatform => role.starts_with("stop") || role.starts_with("platform"),
            Self::FromViaTo => {
                matches!(role, "from" | "via" | "to")
                    && ["from", "via", "to"]
                        .iter()
                        .all(|r| all.iter().any(|m| m.has_role(r)))
            }
        }
    }

    pub fn sort(self, store: &DataSet, rules: &RelationRules, members: Vec<Member>) -> Vec<Member> {
        match self {
            Self::Street => sort_by_connectivity(store, rules, &members),
            Self::AddressHouse => sort_addresses(store, members),
            Self::StopPlatform => pair_stops(store, members),
            Self::FromViaTo => ["from", "via", "to"]
                .iter()
                .flat_map(|role| members.iter().filter(move |m| m.has_role(role)).cloned())
                .collect(),
        }
    }
}

fn sort_addresses(store: &DataSet, mut members: Vec<Member>) -> Vec<Member> {
    let tag = |m: &Member, key| store.tag_of(m.target, key).unwrap_or_default();
    members.sort_by(|a, b| {
        natural_cmp(tag(a, "addr:housenumber"), tag(b, "addr:housenumber"))
            .then_with(|| natural_cmp(tag(a, "name"), tag(b, "name")))
    });
    members
}

/// Lists every stop followed by the first platform of the same name.
fn pair_stops(store: &DataSet, members: Vec<Member>) -> Vec<Member> {
    let (stops, mut platforms): (Vec<Member>, Vec<Member>) =
        members.into_iter().partition(|m| m.role.starts_with("stop"));

    let mut sorted = Vec::with_capacity(stops.len() + platforms.len());
    for stop in stops {
        let name = stop_name(store, &stop);
        sorted.push(stop);
        let Some(name) = name else {
            continue;
        };
        if let Some(pos) = platforms
            .iter()
            .position(|p| stop_name(store, p) == Some(name))
        {
            sorted.push(platforms.remove(pos));
        }
    }
    sorted.extend(platforms);
    sorted
}

/// Name of the stop area containing the member, else the member's own name.
fn stop_name<'s>(store: &'s DataSet, member: &Member) -> Option<&'s str> {
    store
        .relations()
        .find(|(_, rel)| {
            has_tag(&rel.tags, "public_transport", &["stop_area"]) && rel.contains(member.target)
        })
        .and_then(|(_, rel)| rel.tags.get("name"))
        .map(String::as_str)
        .or_else(|| store.tag_of(member.target, "name"))
}
