mod support;

#[allow(unused_imports)]
use rounds_rust::db::StateStore;
use rounds_rust::db::{StoreFactory, StoreType};
use support::with_scoped_env;

#[test]
fn test_store_type_env_explicit() {
    let store_type = with_scoped_env(
        &[("STORE_TYPE", Some("file")), ("STATE_PATH", None)],
        StoreType::from_env,
    );
    assert_eq!(store_type, StoreType::File);
}

#[test]
fn test_store_type_env_defaults_to_file_when_path_set() {
    let store_type = with_scoped_env(
        &[("STORE_TYPE", None), ("STATE_PATH", Some("x/state.json"))],
        StoreType::from_env,
    );
    assert_eq!(store_type, StoreType::File);
}

#[test]
fn test_store_type_env_defaults_to_local() {
    let store_type = with_scoped_env(
        &[("STORE_TYPE", None), ("STATE_PATH", None)],
        StoreType::from_env,
    );
    assert_eq!(store_type, StoreType::Local);
}

#[test]
fn test_store_type_env_invalid_falls_back_to_local() {
    let store_type = with_scoped_env(
        &[("STORE_TYPE", Some("firestore")), ("STATE_PATH", None)],
        StoreType::from_env,
    );
    assert_eq!(store_type, StoreType::Local);
}

#[cfg(feature = "local-store")]
#[test]
fn test_factory_from_env_builds_local_store() {
    let store = with_scoped_env(
        &[("STORE_TYPE", Some("local")), ("STATE_PATH", None)],
        StoreFactory::from_env,
    )
    .unwrap();

    let runtime = tokio::runtime::Runtime::new().unwrap();
    assert!(runtime.block_on(store.health_check()).unwrap());
}

#[cfg(feature = "file-store")]
#[test]
fn test_factory_from_env_builds_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let store = with_scoped_env(
        &[
            ("STORE_TYPE", Some("file")),
            ("STATE_PATH", Some(path.to_str().unwrap())),
        ],
        StoreFactory::from_env,
    )
    .unwrap();

    let runtime = tokio::runtime::Runtime::new().unwrap();
    assert!(runtime.block_on(store.health_check()).unwrap());
}
