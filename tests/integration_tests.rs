use media_seed::config::SeedConfig;
use media_seed::models::{AssetDescriptor, SeedOutcome};
use media_seed::services::manifest::load_manifest;
use media_seed::services::seed::{builtin_assets, seed_media, SeedError};
use media_seed::services::store::{RecordStore, StoreError};
use media_seed::services::media;
use media_seed::{Config, Database};

fn create_test_db() -> Database {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let id: u32 = rng.gen();
    let name = format!("test_db_{}", id);

    let db = Database::open_memory(&name).expect("Failed to create test database");
    db.migrate().expect("Failed to run migrations");
    db
}

mod sqlite_store_tests {
    use super::*;

    #[test]
    fn test_seed_builtin_assets() {
        let db = create_test_db();
        let assets = builtin_assets();

        let report = seed_media(&db, &SeedConfig::default(), &assets).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.created().len(), assets.len());
        assert_eq!(media::count_media(&db).unwrap(), assets.len() as i64);
    }

    #[test]
    fn test_created_ids_match_rows() {
        let db = create_test_db();
        let report = seed_media(&db, &SeedConfig::default(), &builtin_assets()).unwrap();

        for (filename, record) in report.created() {
            let row = media::get_media(&db, &record.id)
                .unwrap()
                .expect("row should exist");
            assert_eq!(row.filename, filename);
        }
    }

    #[test]
    fn test_fields_are_persisted() {
        let db = create_test_db();
        let config = SeedConfig {
            storage_base_url: "https://cdn.example.com/media".to_string(),
            ..Default::default()
        };
        seed_media(&db, &config, &builtin_assets()).unwrap();

        let logo = media::get_media_by_filename(&db, "logo.png")
            .unwrap()
            .expect("logo should be seeded");
        assert_eq!(logo.alt, "Company Logo");
        assert_eq!(logo.mime_type, "image/png");
        assert_eq!(logo.filesize, 100_000);
        assert_eq!(logo.width, 800);
        assert_eq!(logo.height, 600);
        assert_eq!(logo.url, "https://cdn.example.com/media/logo.png");
        assert_eq!(logo.thumbnail_url, logo.url);
        assert_eq!(logo.sizes.thumbnail.filename, "thumb_logo.png");
        assert_eq!(logo.sizes.thumbnail.width, 400);
        assert_eq!(logo.created_at, logo.updated_at);

        let oxford = media::get_media_by_filename(&db, "mens-dress-oxford.jpg")
            .unwrap()
            .unwrap();
        assert_eq!(oxford.mime_type, "image/jpeg");
        assert_eq!(oxford.alt, "Men's Dress Oxford Shoes");
    }

    #[test]
    fn test_rerun_fails_per_item() {
        let db = create_test_db();
        let assets = builtin_assets();
        seed_media(&db, &SeedConfig::default(), &assets).unwrap();

        let second = seed_media(&db, &SeedConfig::default(), &assets).unwrap();

        assert!(second.created().is_empty());
        assert_eq!(second.failure_count(), assets.len());
        assert!(second
            .failures()
            .all(|(_, reason)| reason.contains("already exists")));
        assert_eq!(media::count_media(&db).unwrap(), assets.len() as i64);
    }

    #[test]
    fn test_partial_rerun_only_adds_new_assets() {
        let db = create_test_db();
        let first = vec![AssetDescriptor::new("logo.png", "Company Logo")];
        seed_media(&db, &SeedConfig::default(), &first).unwrap();

        let report = seed_media(&db, &SeedConfig::default(), &builtin_assets()).unwrap();

        assert_eq!(report.success_count(), builtin_assets().len() - 1);
        assert!(matches!(
            report.items[0].outcome,
            SeedOutcome::Failed { .. }
        ));
        assert!(!report.created().contains_key("logo.png"));
    }

    #[test]
    fn test_nested_filename_is_seeded() {
        let db = create_test_db();
        let assets = vec![
            AssetDescriptor::new("logo.png", "Company Logo"),
            AssetDescriptor::new("products/shoe.jpg", "Shoe"),
        ];
        let config = SeedConfig {
            storage_base_url: "https://cdn.example.com/media".to_string(),
            ..Default::default()
        };

        let report = seed_media(&db, &config, &assets).unwrap();

        assert!(report.is_complete());
        assert_eq!(media::count_media(&db).unwrap(), 2);
        let shoe = media::get_media_by_filename(&db, "products/shoe.jpg")
            .unwrap()
            .unwrap();
        assert_eq!(shoe.url, "https://cdn.example.com/media/products/shoe.jpg");
        assert_eq!(shoe.sizes.thumbnail.filename, "thumb_products/shoe.jpg");
    }

    #[test]
    fn test_unmigrated_database_aborts() {
        let db = Database::open_memory("unmigrated").unwrap();

        let err = seed_media(&db, &SeedConfig::default(), &builtin_assets()).unwrap_err();

        assert!(matches!(
            err,
            SeedError::StoreUnavailable(StoreError::NotMigrated(_))
        ));
    }

    #[test]
    fn test_unknown_collection_aborts() {
        let db = create_test_db();
        let config = SeedConfig {
            collection: "posts".to_string(),
            ..Default::default()
        };

        let err = seed_media(&db, &config, &builtin_assets()).unwrap_err();

        assert!(matches!(
            err,
            SeedError::StoreUnavailable(StoreError::UnknownCollection(_))
        ));
        assert_eq!(media::count_media(&db).unwrap(), 0);
    }

    #[test]
    fn test_ensure_ready_after_migrate() {
        let db = create_test_db();
        assert!(db.ensure_ready("media").is_ok());
    }

    #[test]
    fn test_list_media_respects_limit() {
        let db = create_test_db();
        seed_media(&db, &SeedConfig::default(), &builtin_assets()).unwrap();

        let page = media::list_media(&db, 3, 0).unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page[0].filename, "logo.png");

        let rest = media::list_media(&db, 100, 3).unwrap();
        assert_eq!(rest.len(), builtin_assets().len() - 3);
    }

    #[test]
    fn test_get_media_by_filename_missing() {
        let db = create_test_db();
        assert!(media::get_media_by_filename(&db, "nope.jpg")
            .unwrap()
            .is_none());
    }
}

mod file_tests {
    use super::*;
    use media_seed::cli::init::write_default_config;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_default_config(dir.path()).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.database.collection, "media");
        assert_eq!(config.placeholders.width, 800);
        assert!(config.remote.is_none());
        assert!(dir.path().join("data").is_dir());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        write_default_config(dir.path()).unwrap();
        assert!(write_default_config(dir.path()).is_err());
    }

    #[test]
    fn test_refused_init_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("media-seed.toml"), "").unwrap();

        assert!(write_default_config(dir.path()).is_err());
        assert!(!dir.path().join("data").exists());
    }

    #[test]
    fn test_config_load_rejects_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("media-seed.toml");
        std::fs::write(
            &path,
            r#"
            [storage]
            base_url = "not a url"
            "#,
        )
        .unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_config_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_seed_from_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("assets.toml");
        std::fs::write(
            &manifest,
            r#"
            [[asset]]
            filename = "banner.PNG"
            alt = "Banner"

            [[asset]]
            filename = "footer.jpeg"
            alt = "Footer"
            "#,
        )
        .unwrap();

        let assets = load_manifest(&manifest).unwrap();
        let db = create_test_db();
        let report = seed_media(&db, &SeedConfig::default(), &assets).unwrap();

        assert_eq!(report.success_count(), 2);
        let banner = media::get_media_by_filename(&db, "banner.PNG")
            .unwrap()
            .unwrap();
        assert_eq!(banner.mime_type, "image/png");
    }
}
