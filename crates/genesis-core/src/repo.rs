//! Layout of a Genesis deployment repository.
//!
//! A repository is any directory holding `.genesis/config`. The config file
//! is a single line, `genesis: <version>`, naming the Genesis release that
//! created the repository.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use genesis_prereqs::version::Version;
use genesis_util::errors::{GenesisError, GenesisResult};
use genesis_util::fs::{ensure_dir, find_ancestor_with};
use regex::Regex;

pub const GENESIS_DIR: &str = ".genesis";
pub const CONFIG_FILE: &str = "config";
pub const BIN_DIR: &str = "bin";

const DEPLOYMENTS_SUFFIX: &str = "-deployments";

static REPO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]+$").expect("valid repo name pattern"));

/// Contents of `.genesis/config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    pub genesis: String,
}

impl RepoConfig {
    pub fn new(genesis: impl Into<String>) -> Self {
        Self {
            genesis: genesis.into(),
        }
    }

    /// The file contents, byte for byte.
    pub fn render(&self) -> String {
        format!("genesis: {}\n", self.genesis)
    }

    /// Parse the contents of a config file.
    pub fn parse(content: &str) -> GenesisResult<Self> {
        content
            .lines()
            .find_map(|line| line.strip_prefix("genesis:"))
            .map(|v| Self::new(v.trim()))
            .filter(|c| !c.genesis.is_empty())
            .ok_or_else(|| {
                GenesisError::command(format!(
                    "{GENESIS_DIR}/{CONFIG_FILE} does not say which version of Genesis created it"
                ))
            })
    }

    pub fn load(root: &Path) -> GenesisResult<Self> {
        let content = std::fs::read_to_string(config_path(root))?;
        Self::parse(&content)
    }
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(GENESIS_DIR).join(CONFIG_FILE)
}

/// True for names like `us-east-prod`: lowercase, starting with a letter.
pub fn valid_repo_name(name: &str) -> bool {
    REPO_NAME.is_match(name)
}

/// `concourse` and `concourse-deployments` both become `concourse-deployments`.
pub fn repo_dir_name(name: &str) -> String {
    let base = name.strip_suffix(DEPLOYMENTS_SUFFIX).unwrap_or(name);
    format!("{base}{DEPLOYMENTS_SUFFIX}")
}

/// Create a new, empty deployment repository named after `name` inside
/// `parent`, and return its path.
pub fn init_repo(parent: &Path, name: &str, version: &str) -> GenesisResult<PathBuf> {
    if !parent.is_dir() {
        return Err(GenesisError::command(format!(
            "{} is not a directory",
            parent.display()
        )));
    }

    let root = parent.join(repo_dir_name(name));
    if root.exists() {
        return Err(GenesisError::command(format!(
            "{} already exists; refusing to overwrite it",
            root.display()
        )));
    }

    ensure_dir(&root.join(GENESIS_DIR).join(BIN_DIR))?;
    std::fs::write(config_path(&root), RepoConfig::new(version).render())?;
    tracing::info!("initialized deployment repository at {}", root.display());
    Ok(root)
}

/// Find the repository containing `start`, walking up through its parents.
pub fn find_repo_root(start: &Path) -> GenesisResult<PathBuf> {
    let start = start.canonicalize()?;
    let root = find_ancestor_with(&start, Path::new(GENESIS_DIR).join(CONFIG_FILE)).ok_or_else(
        || {
            GenesisError::command(format!(
                "{} is not inside a Genesis deployment repository (no {GENESIS_DIR}/{CONFIG_FILE} found)",
                start.display()
            ))
        },
    )?;

    let config = RepoConfig::load(&root)?;
    match (config.genesis.parse::<Version>(), crate::VERSION.parse::<Version>()) {
        (Ok(created), Ok(running)) if created > running => tracing::warn!(
            "{} was created by Genesis v{}, which is newer than this v{}",
            root.display(),
            config.genesis,
            crate::VERSION
        ),
        (Err(e), _) => tracing::debug!("not comparing repository version: {e}"),
        _ => {}
    }
    Ok(root)
}
