//! Validates the galaxy WGSL with naga so shader errors surface in CI
//! instead of at pipeline creation.

use galactic_tarot::gpu::SHADER_SOURCE;

fn validate_wgsl(code: &str) -> Result<naga::Module, String> {
    let module =
        naga::front::wgsl::parse_str(code).map_err(|e| format!("WGSL parse error: {:?}", e))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| format!("WGSL validation error: {:?}", e))?;

    Ok(module)
}

#[test]
fn test_galaxy_shader_validates() {
    if let Err(e) = validate_wgsl(SHADER_SOURCE) {
        panic!("{e}");
    }
}

#[test]
fn test_entry_points_present() {
    let module = validate_wgsl(SHADER_SOURCE).unwrap();
    let names: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    for expected in [
        "vs_star", "fs_star", "vs_nebula", "fs_nebula", "vs_core", "fs_core", "vs_glow", "fs_glow",
    ] {
        assert!(names.contains(&expected), "missing entry point {expected}");
    }
}

#[test]
fn test_uniform_block_size() {
    let module = validate_wgsl(SHADER_SOURCE).unwrap();
    let uniforms = module
        .types
        .iter()
        .find(|(_, ty)| ty.name.as_deref() == Some("Uniforms"))
        .map(|(_, ty)| ty)
        .unwrap();
    match &uniforms.inner {
        naga::TypeInner::Struct { span, .. } => {
            assert_eq!(*span as usize, std::mem::size_of::<galactic_tarot::gpu::Uniforms>());
        }
        other => panic!("Uniforms is not a struct: {other:?}"),
    }
}
