use anyhow::Result;
use crux_core::typegen::TypeGen;
use qr_provision_core::{
    events::ScanEvent,
    types::{PermissionState, SettingKey, SubmissionState},
    App, PermissionOutput, SettingsOutput,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register enums to ensure all variants are traced
    gen.register_type::<ScanEvent>()?;
    gen.register_type::<PermissionState>()?;
    gen.register_type::<SubmissionState>()?;
    gen.register_type::<SettingKey>()?;
    gen.register_type::<PermissionOutput>()?;
    gen.register_type::<SettingsOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
