//! Fixtures shared by the unit and router tests.

use std::path::Path;
use std::sync::Arc;

use crate::assets::AssetStore;
use crate::config::Config;
use crate::models::portfolio::Portfolio;
use crate::state::AppState;

pub fn sample_data_json() -> &'static str {
    r#"{
  "profile": {
    "name": "Elvis Harmon",
    "location": "Leeds, UK",
    "university": "University of Leeds",
    "degree": "BSc Computer Science",
    "bio": "Final year student who likes compilers."
  },
  "timeline": [
    { "year": 2021, "event": "Started BSc Computer Science" },
    { "year": "2023", "event": "Summer internship" }
  ],
  "projects": [
    {
      "title": "Maze Solver",
      "type": "Year 1",
      "description": "Breadth-first search over grid mazes.",
      "tech": ["Python", "Pygame"],
      "link": "https://github.com/example/maze"
    },
    {
      "title": "Chat Server",
      "type": "Year 2",
      "description": "Multi-room chat over TCP.",
      "tech": ["Java"],
      "link": ""
    },
    {
      "title": "Thesis Engine",
      "type": "Dissertation",
      "description": "Incremental type checker.",
      "tech": ["Rust", "Salsa"]
    },
    {
      "title": "Sudoku",
      "type": "Year 1",
      "description": "Backtracking solver.",
      "tech": ["C"],
      "link": null
    }
  ],
  "skills": [
    { "name": "Rust", "level": 0.8 },
    { "name": "Overconfidence", "level": 1.5 }
  ],
  "achievements": ["Dean's List 2022", "Hackathon winner"]
}"#
}

/// Writes data, stylesheet and assets under `root` and returns a config
/// pointing at them.
pub fn test_config(root: &Path) -> Config {
    let asset_dir = root.join("asset");
    std::fs::create_dir_all(&asset_dir).unwrap();
    std::fs::write(root.join("data.json"), sample_data_json()).unwrap();
    std::fs::write(root.join("styles.css"), "body { margin: 0; }").unwrap();
    std::fs::write(asset_dir.join("resume.pdf"), b"%PDF-1.4 test resume").unwrap();
    std::fs::write(asset_dir.join("profile.jpg"), b"original picture").unwrap();

    Config {
        data_path: root.join("data.json"),
        stylesheet_path: root.join("styles.css"),
        asset_dir,
        max_upload_bytes: 1024 * 1024,
        secure_cookies: false,
        port: 0,
        rust_log: "info".to_string(),
    }
}

pub fn test_state(root: &Path) -> AppState {
    let config = test_config(root);
    let portfolio: Portfolio = serde_json::from_str(sample_data_json()).unwrap();

    AppState {
        portfolio: Arc::new(portfolio),
        stylesheet: Arc::from("body { margin: 0; }"),
        assets: Arc::new(AssetStore::new(&config)),
        config,
    }
}
