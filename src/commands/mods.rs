//! Builds mod repository query URLs for the launcher's mod browser.
//!
//! Diagnostic helper: the launcher normally issues these requests
//! itself, but having the exact URL on hand makes it easy to inspect
//! what a given search actually asks the repository for.

use crate::api::curseforge::{self, ModLoaderTypes, ResourceType, SearchQuery, VersionQuery};
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ModsArgs {
    /// Free-text search filter
    #[arg(short, long)]
    search: Option<String>,

    /// Resource type: mod or resourcepack
    #[arg(long, default_value = "mod")]
    resource: String,

    /// Pagination offset into the result set
    #[arg(long, default_value_t = 0)]
    offset: u32,

    /// Sort field index
    #[arg(long)]
    sort: Option<u32>,

    /// Loaders to filter by: forge, fabric, quilt, neoforge (repeatable)
    #[arg(short, long)]
    loader: Vec<String>,

    /// Game version filter, e.g. 1.20.1
    #[arg(short, long)]
    game_version: Option<String>,

    /// Print the files-listing URL for this addon id instead of searching
    #[arg(long)]
    files: Option<String>,
}

pub fn cmd(args: ModsArgs) -> Result<()> {
    if let Some(addon_id) = args.files {
        let query = VersionQuery {
            addon_id,
            game_version: args.game_version,
        };
        println!("{}", curseforge::versions_url(&query));
        return Ok(());
    }

    let resource_type = match args.resource.as_str() {
        "mod" => ResourceType::Mod,
        "resourcepack" => ResourceType::ResourcePack,
        other => msg_bail_anyhow!(Message::UnknownResourceType(other.to_string())),
    };

    let mut loaders = ModLoaderTypes::default();
    for name in &args.loader {
        loaders = loaders
            | match name.to_lowercase().as_str() {
                "forge" => ModLoaderTypes::FORGE,
                "fabric" => ModLoaderTypes::FABRIC,
                "quilt" => ModLoaderTypes::QUILT,
                "neoforge" => ModLoaderTypes::NEOFORGE,
                other => msg_bail_anyhow!(Message::UnknownModLoader(other.to_string())),
            };
    }

    let query = SearchQuery {
        resource_type,
        offset: args.offset,
        search: args.search,
        sort_field: args.sort,
        loaders: if loaders.is_empty() { None } else { Some(loaders) },
        game_version: args.game_version,
    };
    println!("{}", curseforge::search_url(&query));
    Ok(())
}
