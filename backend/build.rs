//! Embeds the browser bundle produced by `trunk build` into the server.
//!
//! `frontend/dist` is mirrored into `static/dist`, which `main.rs` includes
//! with `include_dir!`. When the frontend has not been built yet a small
//! placeholder page is written instead so the server still compiles.

use std::fs;
use std::path::Path;

const PLACEHOLDER: &str = r#"<!doctype html>
<html lang="en">
  <head><meta charset="utf-8"><title>CSV Insight Hub</title></head>
  <body>
    <p>The browser bundle has not been built. Run <code>trunk build --release</code>
    in <code>frontend/</code> and rebuild the server.</p>
  </body>
</html>
"#;

fn main() {
    let bundle = Path::new("../frontend/dist");
    let embedded = Path::new("static/dist");
    println!("cargo:rerun-if-changed=../frontend/dist");

    if bundle.join("index.html").exists() {
        let _ = fs::remove_dir_all(embedded);
        fs::create_dir_all(embedded).unwrap();
        fs_extra::dir::copy(
            bundle,
            embedded,
            &fs_extra::dir::CopyOptions::new()
                .overwrite(true)
                .content_only(true),
        )
        .unwrap();
    } else if !embedded.join("index.html").exists() {
        fs::create_dir_all(embedded).unwrap();
        fs::write(embedded.join("index.html"), PLACEHOLDER).unwrap();
    }
}
