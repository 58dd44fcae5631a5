// Section registry: the five resource categories this tool can manage,
// each with a display name and the API paths used to list and delete items.
//
// Path templates may contain an `{org_id}` placeholder. For Sites, listing
// is org-scoped but deletion goes through /sites/:site_id. Hub Profiles are
// device profiles filtered to the gateway type at list time.

use crate::error::{Error, Result};

/// One deletable resource category.
#[derive(Debug)]
pub struct Section {
    pub name: &'static str,
    list_path: &'static str,
    delete_path: &'static str,
}

impl Section {
    /// List path with the org id substituted, relative to the API base URL.
    pub fn list_path(&self, org_id: &str) -> String {
        self.list_path.replace("{org_id}", org_id)
    }

    /// Delete path for a single item, relative to the API base URL.
    pub fn delete_path(&self, org_id: &str, item_id: &str) -> String {
        format!("{}/{}", self.delete_path.replace("{org_id}", org_id), item_id)
    }
}

/// Fixed, ordered set of sections keyed by the menu digit. Order matters:
/// the global purge walks these in ascending order.
pub const SECTIONS: [(&str, Section); 5] = [
    (
        "1",
        Section {
            name: "Sites",
            list_path: "/orgs/{org_id}/sites",
            delete_path: "/sites",
        },
    ),
    (
        "2",
        Section {
            name: "Applications",
            list_path: "/orgs/{org_id}/services",
            delete_path: "/orgs/{org_id}/services",
        },
    ),
    (
        "3",
        Section {
            name: "Networks",
            list_path: "/orgs/{org_id}/networks",
            delete_path: "/orgs/{org_id}/networks",
        },
    ),
    (
        "4",
        Section {
            name: "Hub Profiles",
            list_path: "/orgs/{org_id}/deviceprofiles?type=gateway",
            delete_path: "/orgs/{org_id}/deviceprofiles",
        },
    ),
    (
        "5",
        Section {
            name: "WAN Edges",
            list_path: "/orgs/{org_id}/gatewaytemplates",
            delete_path: "/orgs/{org_id}/gatewaytemplates",
        },
    ),
];

/// Look up a section by its menu key.
pub fn resolve(section_id: &str) -> Result<&'static Section> {
    SECTIONS
        .iter()
        .find(|(id, _)| *id == section_id)
        .map(|(_, section)| section)
        .ok_or_else(|| Error::UnknownSection(section_id.to_string()))
}
