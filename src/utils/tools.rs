use log::info;

/// Versions injectées à la compilation par `build.rs`.
pub fn tracked_dependencies() -> [(&'static str, &'static str); 3] {
    [
        ("rand", option_env!("RAND_VERSION").unwrap_or("Unknown")),
        ("glam", option_env!("GLAM_VERSION").unwrap_or("Unknown")),
        ("image", option_env!("IMAGE_VERSION").unwrap_or("Unknown")),
    ]
}

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    // Info système (Rust version, OS)
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    info!("Rust core dependancies");
    for (name, version) in tracked_dependencies() {
        info!("  {:<5} version: {}", name, version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_rust_core_dependencies_no_panic() {
        show_rust_core_dependencies();
    }

    #[test]
    fn test_tracked_dependencies_are_named() {
        let deps = tracked_dependencies();
        assert_eq!(
            deps.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            vec!["rand", "glam", "image"]
        );
        assert!(deps.iter().all(|(_, version)| !version.is_empty()));
    }
}
