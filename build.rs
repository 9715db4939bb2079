use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BUILD_VERSION");

    let version = std::env::var("BUILD_VERSION").unwrap_or_else(|_| {
        format!(
            "{}+{}",
            env!("CARGO_PKG_VERSION"),
            Utc::now().format("%Y%m%d%H%M")
        )
    });
    println!("cargo:rustc-env=BUILD_VERSION={version}");
}
