#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Isolated config and data directories for one test.
pub struct Sandbox {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl Sandbox {
    /// A sandbox with an English pack and a config limiting searches to `limit`.
    pub fn new(limit: usize) -> Self {
        let sandbox = Self::empty();
        sandbox.write_config(&format!(
            "language = \"en\"\nresult_color = \"255, 0, 0\"\nsearch_limit = {limit}\n"
        ));
        sandbox.write_pack("en", &sample_verses());
        sandbox
    }

    /// A sandbox with no config file and no packs.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("failed to create sandbox dir");
        std::fs::create_dir_all(dir.path().join("data")).expect("failed to create data dir");
        Self { dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("config.toml")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    pub fn write_pack(&self, language: &str, verses: &serde_json::Value) {
        let path = self.data_dir().join(format!("{language}.json"));
        std::fs::write(path, serde_json::to_string(verses).unwrap()).unwrap();
    }

    /// A `verse` command pointed at this sandbox with colors disabled.
    pub fn cmd(&self) -> Command {
        verse_cmd(&self.config_path(), &self.data_dir())
    }
}

pub fn verse_cmd(config: &Path, data_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("verse"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("VERSE_CONFIG", config);
    cmd.env("VERSE_DATA_DIR", data_dir);
    cmd.env("NO_COLOR", "1");
    cmd
}

pub fn sample_verses() -> serde_json::Value {
    serde_json::json!([
        {"bookname": "Genesis", "chapter": 1, "verse": 1, "text": "In the beginning God created the heaven and the earth."},
        {"bookname": "John", "chapter": 3, "verse": 16, "text": "For God so loved the world"},
        {"bookname": "John", "chapter": 3, "verse": 17, "text": "For God sent not his Son into the world to condemn the world; but that the world through him might be saved."},
        {"bookname": "John", "chapter": 3, "verse": 18, "text": "He that believeth on him is not condemned"},
        {"bookname": "Psalms", "chapter": 23, "verse": 1, "text": "The LORD is my shepherd; I shall not want."},
        {"bookname": "1 John", "chapter": 4, "verse": 8, "text": "He that loveth not knoweth not God; for God is love."}
    ])
}
