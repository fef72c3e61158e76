// src/benchmark/system_info.rs

use serde::{Deserialize, Serialize};
use sysinfo::System;
use log::debug;

const UNKNOWN: &str = "unknown";

/// The machine and checkout a set of timings was taken on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub cpu_model: String,
    pub cpu_threads: usize,
    pub total_memory_mb: u64,
    pub git_commit: String,
    pub git_dirty: bool,
    pub crate_version: String,
}

impl SystemInfo {
    pub fn collect() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_memory();

        let cpu_model = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());

        let os = match (System::name(), System::os_version()) {
            (Some(name), Some(version)) => format!("{} {}", name, version),
            (Some(name), None) => name,
            _ => UNKNOWN.to_string(),
        };

        let (git_commit, git_dirty) = Self::git_state();

        let info = SystemInfo {
            hostname: System::host_name().unwrap_or_else(|| UNKNOWN.to_string()),
            os,
            cpu_model,
            cpu_threads: sys.cpus().len(),
            total_memory_mb: sys.total_memory() / 1024 / 1024,
            git_commit,
            git_dirty,
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
        };
        debug!("Collected system info: {:?}", info);
        info
    }

    /// Placeholder used when collecting real information is not wanted.
    pub fn unknown() -> Self {
        SystemInfo {
            hostname: UNKNOWN.to_string(),
            os: UNKNOWN.to_string(),
            cpu_model: UNKNOWN.to_string(),
            cpu_threads: 0,
            total_memory_mb: 0,
            git_commit: UNKNOWN.to_string(),
            git_dirty: false,
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn git_state() -> (String, bool) {
        let Ok(repo) = git2::Repository::discover(".") else {
            return (UNKNOWN.to_string(), false);
        };
        let commit = repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok())
            .map(|commit| commit.id().to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());
        let dirty = repo
            .statuses(None)
            .map(|statuses| !statuses.is_empty())
            .unwrap_or(false);
        (commit, dirty)
    }

    pub fn short_commit(&self) -> String {
        self.git_commit.chars().take(8).collect()
    }

    pub fn to_string_pretty(&self) -> String {
        format!(
            "Host:    {} ({})\nCPU:     {} ({} threads, {} MB)\nBuild:   euler_toolkit {} @ {}{}\n",
            self.hostname,
            self.os,
            self.cpu_model,
            self.cpu_threads,
            self.total_memory_mb,
            self.crate_version,
            self.short_commit(),
            if self.git_dirty { " [dirty]" } else { "" },
        )
    }
}
