//! Dataset file drives the rendered shell

mod common;

use std::fs;

use bizdash::config::{self, load_shell_inputs};
use bizdash::domain::sample;
use bizdash::{App, ShellOptions};
use common::*;

#[test]
fn test_dataset_file_replaces_sections() {
    let dir = std::env::temp_dir().join(format!("bizdash-dataset-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("data.toml");
    fs::write(
        &path,
        r#"
metrics = []

[[navigation]]
label = "Inbox"
target = "/inbox"
icon = "bell"

[[navigation]]
label = "Inbox"
icon = "user"

[[transactions]]
customer = "Eve Adams"
email = "eve@example.com"
amount = "$9.99"
status = "Refunded"
"#,
    )
    .unwrap();

    let (registry, data) = load_shell_inputs(Some(&path));
    assert_eq!(registry.len(), 1);
    assert!(data.metrics.is_empty());
    assert_eq!(data.progress, sample::progress());

    let mut app = App::new(ShellOptions::default(), registry, data);
    let buf = render(&mut app, WIDTH, HEIGHT);
    assert!(find_text(&buf, "Inbox").is_some());
    assert!(find_text(&buf, "[Refunded]").is_some());
    assert!(find_text(&buf, "$45,231.89").is_none());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_config_file_sets_brand_and_widths() {
    let dir = std::env::temp_dir().join(format!("bizdash-cfg-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    fs::write(
        &path,
        "brand_name = \"Acme Corp\"\nbrand_mark = \"Z\"\n[sidebar]\nexpanded_width = 30\n",
    )
    .unwrap();

    let config = config::load(Some(&path)).config;
    let (registry, data) = load_shell_inputs(None);
    let mut app = App::new(ShellOptions::from_config(&config), registry, data);
    let buf = render(&mut app, WIDTH, HEIGHT);

    assert!(find_text(&buf, "Acme Corp").is_some());
    assert_eq!(app.areas(size()).sidebar.width, 30);

    let _ = fs::remove_dir_all(&dir);
}
