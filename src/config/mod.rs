pub mod cli;

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DATA_ROOT_VAR: &str = "VBASE_DATA_ROOT";
pub const ENV_ID_VAR: &str = "ENV_ID";
pub const ENTRYPOINT_ARGS_VAR: &str = "ENTRYPOINT_ARGS";

/// Container mount point used by vbase_env_runner.
pub const DEFAULT_DATA_ROOT: &str = "/data";
pub const LEGACY_DATA_ROOT: &str = "/vbase-env/data";

pub const OUTPUT_DIR: &str = "output";
pub const LOGS_DIR: &str = "logs";

/// How a fixture picks its data root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootPolicy {
    /// Read `var`, falling back to `default` when it is unset.
    Env {
        var: &'static str,
        default: &'static str,
    },
    Fixed(&'static str),
}

impl RootPolicy {
    pub const fn standard() -> Self {
        RootPolicy::Env {
            var: DATA_ROOT_VAR,
            default: DEFAULT_DATA_ROOT,
        }
    }

    pub const fn legacy() -> Self {
        RootPolicy::Fixed(LEGACY_DATA_ROOT)
    }

    pub fn resolve<F>(&self, lookup: F) -> PathBuf
    where
        F: Fn(&str) -> Option<OsString>,
    {
        match self {
            RootPolicy::Env { var, default } => {
                lookup(*var).map_or_else(|| PathBuf::from(*default), PathBuf::from)
            }
            RootPolicy::Fixed(path) => PathBuf::from(*path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureEnv {
    pub env_id: String,
    pub entrypoint_args: String,
    pub data_root: PathBuf,
}

impl FixtureEnv {
    /// Text values are decoded lossily; the data root keeps its raw bytes.
    pub fn from_lookup<F>(policy: RootPolicy, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let text = |key: &str| lookup(key).map(|v| v.to_string_lossy().into_owned());

        Self {
            env_id: text(ENV_ID_VAR).unwrap_or_else(|| "unknown".to_string()),
            entrypoint_args: text(ENTRYPOINT_ARGS_VAR).unwrap_or_default(),
            data_root: policy.resolve(&lookup),
        }
    }

    pub fn from_env(policy: RootPolicy) -> Self {
        Self::from_lookup(policy, |key| std::env::var_os(key))
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "sample_pipeline", version)]
#[command(about = "Sample data processing pipeline")]
pub struct PipelineArgs {
    #[arg(long, help = "Run in test mode")]
    pub test_mode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let env = FixtureEnv::from_lookup(RootPolicy::standard(), lookup_from(&[]));
        assert_eq!(env.env_id, "unknown");
        assert_eq!(env.entrypoint_args, "");
        assert_eq!(env.data_root, PathBuf::from("/data"));
    }

    #[test]
    fn test_data_root_override() {
        let env = FixtureEnv::from_lookup(
            RootPolicy::standard(),
            lookup_from(&[("VBASE_DATA_ROOT", "/tmp/run-1"), ("ENV_ID", "env-42")]),
        );
        assert_eq!(env.data_root, PathBuf::from("/tmp/run-1"));
        assert_eq!(env.env_id, "env-42");
    }

    #[test]
    fn test_fixed_root_ignores_override() {
        let env = FixtureEnv::from_lookup(
            RootPolicy::legacy(),
            lookup_from(&[("VBASE_DATA_ROOT", "/tmp/run-1")]),
        );
        assert_eq!(env.data_root, PathBuf::from("/vbase-env/data"));
    }

    #[test]
    fn test_empty_override_is_current_dir() {
        let root = RootPolicy::standard().resolve(lookup_from(&[("VBASE_DATA_ROOT", "")]));
        assert_eq!(root, PathBuf::from(""));
        assert_eq!(root.join("output"), PathBuf::from("output"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_values_are_accepted() {
        use std::os::unix::ffi::OsStringExt;

        let lookup = |key: &str| match key {
            "ENV_ID" => Some(OsString::from_vec(b"env-\xff".to_vec())),
            "VBASE_DATA_ROOT" => Some(OsString::from_vec(b"/tmp/r\xff".to_vec())),
            _ => None,
        };
        let env = FixtureEnv::from_lookup(RootPolicy::standard(), lookup);

        assert_eq!(env.env_id, "env-\u{fffd}");
        assert_eq!(
            env.data_root.into_os_string().into_vec(),
            b"/tmp/r\xff".to_vec()
        );
    }

    #[test]
    fn test_pipeline_args() {
        let args = PipelineArgs::try_parse_from(["sample_pipeline", "--test-mode"]).unwrap();
        assert!(args.test_mode);

        let args = PipelineArgs::try_parse_from(["sample_pipeline"]).unwrap();
        assert!(!args.test_mode);

        assert!(PipelineArgs::try_parse_from(["sample_pipeline", "--bogus"]).is_err());
    }
}
