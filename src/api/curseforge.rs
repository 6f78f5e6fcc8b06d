//! Query-URL construction for the CurseForge v1 REST API.
//!
//! Builds search, project, files-listing and dependency URLs from typed
//! parameter sets. The numeric ids baked in here (class ids, loader ids,
//! the Minecraft game id) are part of the CurseForge API contract:
//! <https://docs.curseforge.com/?http#tocS_ModLoaderType>

use std::ops::BitOr;

const API_BASE_URL: &str = "https://api.curseforge.com/v1";

/// CurseForge game id for Minecraft.
const GAME_ID: u32 = 432;

/// Kinds of resources the mod browser can search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceType {
    #[default]
    Mod,
    ResourcePack,
}

impl ResourceType {
    fn class_id(self) -> u32 {
        match self {
            ResourceType::Mod => 6,
            ResourceType::ResourcePack => 12,
        }
    }
}

/// Bitmask of mod loaders a search is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModLoaderTypes(u32);

impl ModLoaderTypes {
    pub const FORGE: ModLoaderTypes = ModLoaderTypes(1 << 0);
    pub const FABRIC: ModLoaderTypes = ModLoaderTypes(1 << 1);
    pub const QUILT: ModLoaderTypes = ModLoaderTypes(1 << 2);
    pub const NEOFORGE: ModLoaderTypes = ModLoaderTypes(1 << 3);

    pub fn contains(self, other: ModLoaderTypes) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ModLoaderTypes {
    type Output = ModLoaderTypes;

    fn bitor(self, rhs: ModLoaderTypes) -> ModLoaderTypes {
        ModLoaderTypes(self.0 | rhs.0)
    }
}

// CurseForge-side numeric id of the first loader present in the mask.
fn mapped_loader(loaders: ModLoaderTypes) -> u32 {
    if loaders.contains(ModLoaderTypes::FORGE) {
        return 1;
    }
    if loaders.contains(ModLoaderTypes::FABRIC) {
        return 4;
    }
    if loaders.contains(ModLoaderTypes::QUILT) {
        return 5;
    }
    if loaders.contains(ModLoaderTypes::NEOFORGE) {
        return 6;
    }
    0
}

// "[6,1]"-style filter value listing every loader id in the mask.
fn loader_filter(loaders: ModLoaderTypes) -> String {
    let ids: Vec<String> = [
        ModLoaderTypes::NEOFORGE,
        ModLoaderTypes::FORGE,
        ModLoaderTypes::FABRIC,
        ModLoaderTypes::QUILT,
    ]
    .into_iter()
    .filter(|loader| loaders.contains(*loader))
    .map(|loader| mapped_loader(loader).to_string())
    .collect();
    format!("[{}]", ids.join(","))
}

/// Parameters for a mod-browser search.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub resource_type: ResourceType,
    /// Pagination offset into the result set.
    pub offset: u32,
    /// Free-text filter.
    pub search: Option<String>,
    /// CurseForge sort-field index.
    pub sort_field: Option<u32>,
    /// Restrict results to these loaders.
    pub loaders: Option<ModLoaderTypes>,
    /// Restrict results to a game version, e.g. "1.20.1".
    pub game_version: Option<String>,
}

/// Builds the search URL for a parameter set.
pub fn search_url(query: &SearchQuery) -> String {
    let mut params = vec![
        format!("classId={}", query.resource_type.class_id()),
        format!("index={}", query.offset),
        "pageSize=25".to_string(),
    ];
    if let Some(search) = &query.search {
        params.push(format!("searchFilter={}", search));
    }
    if let Some(sort_field) = query.sort_field {
        params.push(format!("sortField={}", sort_field));
    }
    params.push("sortOrder=desc".to_string());
    if let Some(loaders) = query.loaders {
        params.push(format!("modLoaderTypes={}", loader_filter(loaders)));
    }
    if let Some(game_version) = &query.game_version {
        params.push(format!("gameVersion={}", game_version));
    }

    format!("{}/mods/search?gameId={}&{}", API_BASE_URL, GAME_ID, params.join("&"))
}

/// Builds the project-info URL for an addon id.
pub fn info_url(addon_id: &str) -> String {
    format!("{}/mods/{}", API_BASE_URL, addon_id)
}

/// Parameters for listing the files of an addon.
#[derive(Debug, Clone)]
pub struct VersionQuery {
    pub addon_id: String,
    pub game_version: Option<String>,
}

/// Builds the files-listing URL for an addon.
pub fn versions_url(query: &VersionQuery) -> String {
    let mut url = format!("{}/mods/{}/files?pageSize=10000", API_BASE_URL, query.addon_id);
    if let Some(game_version) = &query.game_version {
        url.push_str(&format!("&gameVersion={}", game_version));
    }
    url
}

/// Parameters for resolving a dependency's files.
#[derive(Debug, Clone)]
pub struct DependencyQuery {
    pub addon_id: String,
    pub game_version: String,
    pub loader: ModLoaderTypes,
}

/// Builds the dependency files URL, constrained to one loader id.
pub fn dependency_url(query: &DependencyQuery) -> String {
    format!(
        "{}/mods/{}/files?pageSize=10000&gameVersion={}&modLoaderType={}",
        API_BASE_URL,
        query.addon_id,
        query.game_version,
        mapped_loader(query.loader)
    )
}
