// src/executor.rs

//! Apply a sync plan with the system package manager
//!
//! Removals run first, then installs, each as a single package manager
//! invocation. The child inherits the terminal so pacman can ask for
//! confirmation itself.

use crate::error::{Error, Result};
use crate::model::SyncPlan;
use std::collections::BTreeSet;
use std::process::Command;
use tracing::{debug, info};

/// Default package manager command
pub const DEFAULT_PACKAGE_MANAGER: &str = "sudo pacman";

const REMOVE_FLAG: &str = "-R";
const INSTALL_FLAG: &str = "-S";

/// A package manager command line, such as `sudo pacman`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    program: String,
    args: Vec<String>,
}

impl PackageManager {
    /// Split a command string on whitespace into program and leading arguments
    pub fn from_command(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| Error::ConfigError("Empty package manager command".to_string()))?;

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full command line that removes `packages`
    pub fn removal_command(&self, packages: &BTreeSet<String>) -> Vec<String> {
        self.command_line(REMOVE_FLAG, packages)
    }

    /// Full command line that installs `packages`
    pub fn install_command(&self, packages: &BTreeSet<String>) -> Vec<String> {
        self.command_line(INSTALL_FLAG, packages)
    }

    /// Command lines `apply` would run, in order
    pub fn dry_run(&self, plan: &SyncPlan) -> Vec<Vec<String>> {
        let mut commands = Vec::new();
        if !plan.to_remove.is_empty() {
            commands.push(self.removal_command(&plan.to_remove));
        }
        if !plan.to_install.is_empty() {
            commands.push(self.install_command(&plan.to_install));
        }
        commands
    }

    /// Run the removal and install commands for a plan
    ///
    /// Stops at the first command that fails, so nothing is installed if
    /// removal did not succeed.
    pub fn apply(&self, plan: &SyncPlan) -> Result<()> {
        if plan.is_empty() {
            info!("Nothing to do");
            return Ok(());
        }

        for command in self.dry_run(plan) {
            self.run(&command)?;
        }
        Ok(())
    }

    fn command_line(&self, flag: &str, packages: &BTreeSet<String>) -> Vec<String> {
        let mut line = Vec::with_capacity(self.args.len() + packages.len() + 2);
        line.push(self.program.clone());
        line.extend(self.args.iter().cloned());
        line.push(flag.to_string());
        line.extend(packages.iter().cloned());
        line
    }

    fn run(&self, command: &[String]) -> Result<()> {
        let Some((program, args)) = command.split_first() else {
            return Ok(());
        };

        let rendered = command.join(" ");
        debug!("Executing: {}", rendered);

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| Error::CommandError(format!("Failed to spawn '{}': {}", program, e)))?;

        if !status.success() {
            let code = status
                .code()
                .map_or_else(|| "signal".to_string(), |c| c.to_string());
            return Err(Error::CommandError(format!(
                "'{}' failed with exit code {}",
                rendered, code
            )));
        }
        Ok(())
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self {
            program: "sudo".to_string(),
            args: vec!["pacman".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn plan(remove: &[&str], install: &[&str]) -> SyncPlan {
        SyncPlan {
            to_remove: set(remove),
            to_install: set(install),
        }
    }

    #[test]
    fn test_from_command_splits_words() {
        let pm = PackageManager::from_command("  sudo   pacman --noconfirm ").unwrap();
        assert_eq!(pm.program(), "sudo");
        assert_eq!(
            pm.install_command(&set(&["vim"])),
            vec!["sudo", "pacman", "--noconfirm", "-S", "vim"]
        );
    }

    #[test]
    fn test_from_command_empty() {
        let err = PackageManager::from_command("   ").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_default_matches_constant() {
        assert_eq!(
            PackageManager::default(),
            PackageManager::from_command(DEFAULT_PACKAGE_MANAGER).unwrap()
        );
    }

    #[test]
    fn test_dry_run_removes_before_installing() {
        let pm = PackageManager::from_command("pacman").unwrap();
        let commands = pm.dry_run(&plan(&["b", "a"], &["z"]));
        assert_eq!(
            commands,
            vec![
                vec!["pacman", "-R", "a", "b"],
                vec!["pacman", "-S", "z"],
            ]
        );
    }

    #[test]
    fn test_dry_run_skips_empty_halves() {
        let pm = PackageManager::from_command("pacman").unwrap();
        assert_eq!(pm.dry_run(&plan(&[], &["z"])), vec![vec!["pacman", "-S", "z"]]);
        assert!(pm.dry_run(&plan(&[], &[])).is_empty());
    }

    #[test]
    fn test_apply_empty_plan_runs_nothing() {
        let pm = PackageManager::from_command("/nonexistent/pacman").unwrap();
        assert!(pm.apply(&SyncPlan::default()).is_ok());
    }

    #[test]
    fn test_apply_spawn_failure() {
        let pm = PackageManager::from_command("/nonexistent/pacman").unwrap();
        let err = pm.apply(&plan(&["a"], &[])).unwrap_err();
        assert!(matches!(err, Error::CommandError(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_apply_stops_after_failed_removal() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        let script = dir.path().join("fake-pacman");
        std::fs::write(
            &script,
            format!(
                "#!/bin/sh\necho \"$1\" >> {}\n[ \"$1\" = \"-R\" ] && exit 1\nexit 0\n",
                log.display()
            ),
        )
        .unwrap();

        let pm = PackageManager::from_command(&format!("sh {}", script.display())).unwrap();
        let err = pm.apply(&plan(&["a"], &["z"])).unwrap_err();
        assert!(matches!(err, Error::CommandError(_)));

        let calls = std::fs::read_to_string(&log).unwrap();
        assert_eq!(calls.lines().collect::<Vec<_>>(), vec!["-R"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_apply_runs_both_commands() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        let script = dir.path().join("fake-pacman");
        std::fs::write(
            &script,
            format!("#!/bin/sh\necho \"$@\" >> {}\n", log.display()),
        )
        .unwrap();

        let pm = PackageManager::from_command(&format!("sh {}", script.display())).unwrap();
        pm.apply(&plan(&["a", "b"], &["z"])).unwrap();

        let calls = std::fs::read_to_string(&log).unwrap();
        assert_eq!(calls.lines().collect::<Vec<_>>(), vec!["-R a b", "-S z"]);
    }
}
