//! Generates `libkafkaadmin_defs.h` from the exported surface on every
//! build and copies it next to the compiled artifact, so host projects pick
//! up the header and the shared library from one directory.
//!
//! Setting `KAFKAADMIN_HEADER_DIR` additionally drops a copy at that path.

use std::env;
use std::fs;
use std::path::PathBuf;

const HEADER_NAME: &str = "libkafkaadmin_defs.h";

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=cbindgen.toml");
    println!("cargo:rerun-if-env-changed=KAFKAADMIN_HEADER_DIR");

    let crate_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    let header = out_dir.join(HEADER_NAME);
    cbindgen::generate(&crate_dir)
        .expect("unable to generate the C header")
        .write_to_file(&header);

    // OUT_DIR is <target>/<profile>/build/<pkg>-<hash>/out; three levels up
    // is the profile directory the cdylib lands in.
    if let Some(profile_dir) = out_dir.ancestors().nth(3) {
        fs::copy(&header, profile_dir.join(HEADER_NAME))
            .expect("unable to copy the header next to the artifact");
    }

    if let Ok(dir) = env::var("KAFKAADMIN_HEADER_DIR") {
        let dir = PathBuf::from(dir);
        fs::create_dir_all(&dir).expect("unable to create KAFKAADMIN_HEADER_DIR");
        fs::copy(&header, dir.join(HEADER_NAME))
            .expect("unable to copy the header to KAFKAADMIN_HEADER_DIR");
    }
}
