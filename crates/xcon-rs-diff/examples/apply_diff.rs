// crates/xcon-rs-diff/examples/apply_diff.rs
//! Applies a conference-info-diff to a conference-info document and prints
//! the patched document together with the typed view of every operation.
//!
//! To run this example from the workspace root:
//!    cargo run -p xcon-rs-diff --example apply_diff [conference-info.xml] [diff.xml]
//!
//! Without arguments the test fixtures in `tests/data/` are used.

use log::{error, info};
use std::{env, fs, path::PathBuf, process};
use xcon_rs_diff::{
    PatchOperation, SerializeOptions, XconError, apply_diff_atomic, dom, load_diff_from_str,
};

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);
    path
}

fn run(document_path: PathBuf, diff_path: PathBuf) -> Result<(), XconError> {
    info!("Reading document from {:?}", document_path);
    let mut document = dom::parse_str(&fs::read_to_string(&document_path)?)?;

    info!("Reading diff from {:?}", diff_path);
    let diff = load_diff_from_str(&fs::read_to_string(&diff_path)?)?;
    info!(
        "Diff for '{}' carries {} operation(s)",
        diff.entity,
        diff.operations.len()
    );

    for operation in &diff.operations {
        match operation {
            PatchOperation::Add(add) => {
                info!("add {} -> {:?}", add.sel, add.xcon_elements()?);
            }
            PatchOperation::Replace(replace) => {
                info!("replace {} -> {:?}", replace.sel, replace.xcon_elements()?);
            }
            PatchOperation::Remove(remove) => info!("remove {}", remove.sel),
            PatchOperation::Extension(element) => {
                info!("skipping extension <{}>", element.name)
            }
        }
    }

    apply_diff_atomic(&mut document, &diff)?;
    println!("{}", dom::to_string(&document, &SerializeOptions::default())?);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let document_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| fixture("conference_info.xml"));
    let diff_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| fixture("diff_full.xml"));

    if let Err(e) = run(document_path, diff_path) {
        error!("Failed to apply diff: {}", e);
        process::exit(1);
    }
}
