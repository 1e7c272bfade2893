fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(const_type_id)");

    // `TypeId::of` is callable in const context since 1.91
    if version_check::is_min_version("1.91.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=const_type_id");
    }
}
