#[cfg(test)]
mod tests {
    use uplift::api::curseforge::{
        dependency_url, info_url, search_url, versions_url, DependencyQuery, ModLoaderTypes, ResourceType, SearchQuery, VersionQuery,
    };

    #[test]
    fn test_minimal_search_url() {
        let query = SearchQuery::default();
        assert_eq!(
            search_url(&query),
            "https://api.curseforge.com/v1/mods/search?gameId=432&classId=6&index=0&pageSize=25&sortOrder=desc"
        );
    }

    #[test]
    fn test_full_search_url() {
        let query = SearchQuery {
            resource_type: ResourceType::Mod,
            offset: 25,
            search: Some("sodium".to_string()),
            sort_field: Some(2),
            loaders: Some(ModLoaderTypes::FORGE | ModLoaderTypes::FABRIC),
            game_version: Some("1.20.1".to_string()),
        };
        assert_eq!(
            search_url(&query),
            "https://api.curseforge.com/v1/mods/search?gameId=432&classId=6&index=25&pageSize=25&searchFilter=sodium&sortField=2&sortOrder=desc&modLoaderTypes=[1,4]&gameVersion=1.20.1"
        );
    }

    #[test]
    fn test_resource_packs_use_their_own_class_id() {
        let query = SearchQuery {
            resource_type: ResourceType::ResourcePack,
            ..Default::default()
        };
        assert!(search_url(&query).contains("classId=12"));
    }

    #[test]
    fn test_loader_filter_lists_every_selected_loader() {
        let query = SearchQuery {
            loaders: Some(ModLoaderTypes::NEOFORGE | ModLoaderTypes::QUILT),
            ..Default::default()
        };
        assert!(search_url(&query).contains("modLoaderTypes=[6,5]"));
    }

    #[test]
    fn test_info_url() {
        assert_eq!(info_url("394468"), "https://api.curseforge.com/v1/mods/394468");
    }

    #[test]
    fn test_versions_url_with_and_without_game_version() {
        let bare = VersionQuery {
            addon_id: "394468".to_string(),
            game_version: None,
        };
        assert_eq!(versions_url(&bare), "https://api.curseforge.com/v1/mods/394468/files?pageSize=10000");

        let constrained = VersionQuery {
            addon_id: "394468".to_string(),
            game_version: Some("1.20.1".to_string()),
        };
        assert_eq!(
            versions_url(&constrained),
            "https://api.curseforge.com/v1/mods/394468/files?pageSize=10000&gameVersion=1.20.1"
        );
    }

    #[test]
    fn test_dependency_url_maps_the_loader_id() {
        let query = DependencyQuery {
            addon_id: "306612".to_string(),
            game_version: "1.20.1".to_string(),
            loader: ModLoaderTypes::QUILT,
        };
        assert_eq!(
            dependency_url(&query),
            "https://api.curseforge.com/v1/mods/306612/files?pageSize=10000&gameVersion=1.20.1&modLoaderType=5"
        );
    }

    #[test]
    fn test_empty_loader_mask_maps_to_zero() {
        let query = DependencyQuery {
            addon_id: "306612".to_string(),
            game_version: "1.20.1".to_string(),
            loader: ModLoaderTypes::default(),
        };
        assert!(dependency_url(&query).ends_with("modLoaderType=0"));
    }
}
