use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    // 未设置 PROTOC 时使用内置的 protoc
    let mut config = prost_build::Config::new();
    if env::var_os("PROTOC").is_none() {
        config.protoc_executable(protoc_bin_vendored::protoc_bin_path()?);
    }

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .file_descriptor_set_path(out_dir.join("product_descriptor.bin"))
        .compile_protos_with_config(
            config,
            &["../../proto/product/v1/product.proto"],
            &["../../proto"],
        )?;

    println!("cargo:rerun-if-changed=../../proto/product/v1/product.proto");

    Ok(())
}
