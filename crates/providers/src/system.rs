//! CPU description and pending system updates.
//!
//! On Linux the CPU summary is read from `/proc/cpuinfo`. Pending updates
//! are only counted on Arch Linux, where `pacman -Qu` prints one line per
//! upgradable package.

use std::path::Path;
use std::time::Duration;

use dashboard_protocol::SystemSummary;
use tracing::{debug, instrument};

use crate::command;
use crate::error::Result;

/// Kernel CPU description file.
pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Operating system identification file.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Parses the first processor block of `/proc/cpuinfo`.
///
/// Returns `None` when `model name` is missing, as on most non-x86
/// kernels. Missing `cpu cores` or `cpu MHz` become 0; the MHz value is
/// truncated.
///
/// # Examples
///
/// ```
/// use dashboard_providers::system::parse_cpuinfo;
///
/// let text = "processor\t: 0\nmodel name\t: AMD Ryzen 7 5800X\ncpu MHz\t\t: 3800.123\ncpu cores\t: 8\n";
/// let cpu = parse_cpuinfo(text).unwrap();
/// assert_eq!(cpu.summary_line(), "8 Core AMD Ryzen 7 5800X @ 3800 MHz");
/// ```
#[must_use]
pub fn parse_cpuinfo(text: &str) -> Option<SystemSummary> {
    let mut model = None;
    let mut cores = None;
    let mut mhz = None;

    for line in text.lines() {
        // Blocks are separated by blank lines; the first one is enough.
        if line.trim().is_empty() && model.is_some() {
            break;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "model name" if model.is_none() => model = Some(value.to_string()),
            "cpu cores" if cores.is_none() => cores = value.parse::<u32>().ok(),
            "cpu MHz" if mhz.is_none() => {
                mhz = value.parse::<f64>().ok().map(|v| v.trunc() as u32);
            }
            _ => {}
        }
    }

    model.map(|model| SystemSummary::new(model, cores.unwrap_or(0), mhz.unwrap_or(0)))
}

/// Extracts the `ID` value of an `os-release` file, without quotes.
#[must_use]
pub fn parse_os_release_id(text: &str) -> Option<String> {
    text.lines()
        .filter_map(|line| line.split_once('='))
        .find(|(key, _)| key.trim() == "ID")
        .map(|(_, value)| value.trim().trim_matches(['"', '\'']).to_string())
}

/// Returns `true` if the os-release `ID` names Arch Linux or a derivative
/// that reports itself as such.
#[must_use]
pub fn is_arch_id(id: &str) -> bool {
    id.to_ascii_lowercase().contains("arch")
}

/// Counts the non-empty lines of `pacman -Qu` output.
#[must_use]
pub fn count_update_lines(stdout: &str) -> u32 {
    let count = stdout.lines().filter(|line| !line.trim().is_empty()).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Reads the CPU summary of this machine.
///
/// Platforms without `/proc/cpuinfo`, or whose file lacks a model name,
/// yield [`SystemSummary::unavailable`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
#[instrument]
pub async fn read_system_summary(cpuinfo: &Path) -> Result<SystemSummary> {
    if !cfg!(target_os = "linux") || !cpuinfo.exists() {
        debug!("no cpuinfo on this platform");
        return Ok(SystemSummary::unavailable());
    }

    let text = tokio::fs::read_to_string(cpuinfo).await?;
    Ok(parse_cpuinfo(&text).unwrap_or_else(SystemSummary::unavailable))
}

/// Counts pending system updates.
///
/// Only Arch Linux is supported; every other system reports 0.
///
/// # Errors
///
/// Returns an error if `pacman -Qu` cannot be run. Note that `pacman -Qu`
/// exits with status 1 when nothing is upgradable, which counts as 0.
#[instrument]
pub async fn count_updates(os_release: &Path, timeout: Duration) -> Result<u32> {
    let id = match tokio::fs::read_to_string(os_release).await {
        Ok(text) => parse_os_release_id(&text),
        Err(e) => {
            debug!(error = %e, "os-release not readable");
            None
        }
    };

    if !id.as_deref().is_some_and(is_arch_id) {
        debug!(?id, "update counting not supported");
        return Ok(0);
    }

    match command::run("pacman", &["-Qu".to_string()], timeout).await {
        Ok(stdout) => Ok(count_update_lines(&String::from_utf8_lossy(&stdout))),
        Err(crate::Error::Command { reason, .. }) if reason == "exit status 1" => Ok(0),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPUINFO: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 142
model name\t: Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz
stepping\t: 10
cpu MHz\t\t: 1992.001
cache size\t: 8192 KB
cpu cores\t: 4

processor\t: 1
vendor_id\t: GenuineIntel
model name\t: Some Other Model
cpu MHz\t\t: 400.000
cpu cores\t: 4
";

    #[test]
    fn parse_cpuinfo_uses_first_block() {
        let cpu = parse_cpuinfo(CPUINFO).unwrap();
        assert_eq!(cpu.cpu_model, "Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz");
        assert_eq!(cpu.cpu_cores, 4);
        assert_eq!(cpu.cpu_mhz, 1992);
    }

    #[test]
    fn parse_cpuinfo_without_model_name() {
        let text = "processor\t: 0\nBogoMIPS\t: 108.00\nFeatures\t: fp asimd\n";
        assert_eq!(parse_cpuinfo(text), None);
    }

    #[test]
    fn parse_cpuinfo_with_missing_numbers() {
        let cpu = parse_cpuinfo("model name : Toy CPU\n").unwrap();
        assert_eq!(cpu.summary_line(), "0 Core Toy CPU @ 0 MHz");
    }

    #[test]
    fn os_release_id_strips_quotes() {
        let text = "NAME=\"Arch Linux\"\nPRETTY_NAME=\"Arch Linux\"\nID=arch\nBUILD_ID=rolling\n";
        assert_eq!(parse_os_release_id(text).as_deref(), Some("arch"));

        let text = "NAME=\"Ubuntu\"\nID=\"ubuntu\"\nID_LIKE=debian\n";
        assert_eq!(parse_os_release_id(text).as_deref(), Some("ubuntu"));
    }

    #[test]
    fn os_release_without_id() {
        assert_eq!(parse_os_release_id("NAME=Mystery\n"), None);
    }

    #[test]
    fn arch_detection() {
        assert!(is_arch_id("arch"));
        assert!(is_arch_id("archarm"));
        assert!(!is_arch_id("debian"));
    }

    #[test]
    fn update_lines_are_counted() {
        let stdout = "linux 6.9.1.arch1-1 -> 6.9.2.arch1-1\nfirefox 126.0-1 -> 126.0.1-1\n\n";
        assert_eq!(count_update_lines(stdout), 2);
        assert_eq!(count_update_lines(""), 0);
    }

    #[tokio::test]
    async fn non_arch_system_reports_no_updates() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("os-release");
        std::fs::write(&path, "ID=debian\n").unwrap();

        let count = count_updates(&path, Duration::from_secs(1)).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn missing_cpuinfo_is_unavailable() {
        let summary = read_system_summary(Path::new("/nonexistent/cpuinfo"))
            .await
            .unwrap();
        assert!(summary.is_unavailable());
    }
}
