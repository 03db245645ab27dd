//! Failure-path coverage for artifact acquisition and symbol resolution.
//!
//! Run: cargo test -p factlink-loader --test load_failure_test

use factlink_loader::{LoadError, LoadedArtifact};

#[test]
fn acquire_missing_artifact_names_path() {
    let err = LoadedArtifact::acquire("./no_such_dir/libmissing.so").unwrap_err();
    match &err {
        LoadError::Acquire { path, .. } => {
            assert!(path.to_string_lossy().contains("libmissing.so"));
        }
        other => panic!("expected acquire failure, got {other:?}"),
    }
    let message = err.to_string();
    assert!(
        message.contains("libmissing.so"),
        "diagnostic should name the artifact: {message}"
    );
}

// libm ships with every glibc system, so these resolution tests do not depend
// on the workspace's own artifact being built first.

#[cfg(target_os = "linux")]
#[test]
fn resolve_missing_symbol_in_valid_library() {
    let library = LoadedArtifact::acquire("libm.so.6").expect("libm should load");
    let err = library.resolve("factlink_definitely_absent").unwrap_err();
    assert!(matches!(err, LoadError::Resolve { .. }), "got {err:?}");
    assert!(err.to_string().contains("factlink_definitely_absent"));
    library
        .release()
        .expect("release of a valid handle succeeds");
}

#[cfg(target_os = "linux")]
#[test]
fn invalid_symbol_names_never_reach_the_resolver() {
    let library = LoadedArtifact::acquire("libm.so.6").expect("libm should load");
    for name in ["", "has space", "1leading_digit", "dash-ed"] {
        let err = library.resolve(name).unwrap_err();
        assert!(
            matches!(err, LoadError::InvalidSymbolName { .. }),
            "{name:?} -> {err:?}"
        );
    }
    library.release().expect("release succeeds");
}
