use peervault_config::{global, Config, ConfigError};
use std::fs;
use tempfile::NamedTempFile;

// All assertions live in one test because the handle is process-global
// and integration tests share the binary.
#[test]
fn test_global_handle_lifecycle() {
    assert!(!global::is_initialized());
    assert!(global::try_get().is_none());
    assert!(matches!(global::get(), Err(ConfigError::NotInitialized)));
    assert!(matches!(
        global::reload("unused.toml"),
        Err(ConfigError::NotInitialized)
    ));

    global::init(Config::default()).unwrap();
    assert!(global::is_initialized());
    assert_eq!(global::get().unwrap().network.max_peers, 100);

    // Second init is rejected
    assert!(matches!(
        global::init(Config::default()),
        Err(ConfigError::AlreadyInitialized)
    ));

    // A failed reload leaves the previous aggregate in place
    let bad_file = NamedTempFile::new().unwrap();
    fs::write(bad_file.path(), "[network]\nmax_peers = 0\n").unwrap();
    assert!(global::reload(bad_file.path()).is_err());
    assert_eq!(global::get().unwrap().network.max_peers, 100);

    // A successful reload swaps the whole aggregate
    let good_file = NamedTempFile::new().unwrap();
    fs::write(good_file.path(), "[network]\nmax_peers = 7\n").unwrap();
    global::reload(good_file.path()).unwrap();
    assert_eq!(global::get().unwrap().network.max_peers, 7);
}
