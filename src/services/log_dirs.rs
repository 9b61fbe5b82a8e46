//! Where quill writes its diagnostics
//!
//! Every running editor gets its own `quill-{PID}.log` under
//! `$XDG_STATE_HOME/quill/logs/` (usually `~/.local/state/quill/logs/`).
//! On startup, logs from editors that have since exited are removed once
//! they are a day old, so the directory does not grow without bound.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

const LOG_PREFIX: &str = "quill-";
const LOG_SUFFIX: &str = ".log";

/// Logs of exited editors younger than this are kept for inspection
const STALE_AFTER: Duration = Duration::from_secs(24 * 60 * 60);

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Log directory, created on first use. Uses the temp dir when the state
/// directory cannot be created.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let fallback = std::env::temp_dir().join("quill-logs");
        let dir = state_log_dir().unwrap_or_else(|| fallback.clone());
        match fs::create_dir_all(&dir) {
            Ok(()) => dir,
            Err(e) => {
                tracing::warn!("Cannot create log directory {}: {}", dir.display(), e);
                fallback
            }
        }
    })
}

fn state_log_dir() -> Option<PathBuf> {
    let state_home = std::env::var_os("XDG_STATE_HOME")
        .map(PathBuf::from)
        .filter(|path| path.is_absolute())
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("state")))?;
    Some(state_home.join("quill").join("logs"))
}

/// File name of the log for process `pid`
fn log_file_name(pid: u32) -> String {
    format!("{LOG_PREFIX}{pid}{LOG_SUFFIX}")
}

/// Inverse of `log_file_name`
fn pid_of_log_file(name: &str) -> Option<u32> {
    name.strip_prefix(LOG_PREFIX)?
        .strip_suffix(LOG_SUFFIX)?
        .parse()
        .ok()
}

/// Log file of this process
pub fn main_log_path() -> PathBuf {
    log_dir().join(log_file_name(std::process::id()))
}

/// Delete logs written by editors that are no longer running
pub fn cleanup_stale_logs() {
    let Ok(entries) = fs::read_dir(log_dir()) else {
        return;
    };
    let own_pid = std::process::id();

    for entry in entries.flatten() {
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        let Some(pid) = pid_of_log_file(&entry.file_name().to_string_lossy()) else {
            continue;
        };
        if !is_file || pid == own_pid || is_process_running(pid) {
            continue;
        }
        let path = entry.path();
        if !older_than(&path, STALE_AFTER) {
            continue;
        }
        match fs::remove_file(&path) {
            Ok(()) => tracing::debug!("Removed stale log {}", path.display()),
            Err(e) => tracing::debug!("Cannot remove stale log {}: {}", path.display(), e),
        }
    }
}

fn older_than(path: &Path, age: Duration) -> bool {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .is_some_and(|elapsed| elapsed > age)
}

fn is_process_running(pid: u32) -> bool {
    #[cfg(unix)]
    {
        // Signal 0 only checks existence; EPERM means it exists but is not ours
        unsafe {
            libc::kill(pid as libc::pid_t, 0) == 0
                || std::io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
        }
    }

    #[cfg(windows)]
    {
        use windows_sys::Win32::Foundation::CloseHandle;
        use windows_sys::Win32::System::Threading::{
            OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION,
        };

        unsafe {
            let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, 0, pid);
            if handle.is_null() {
                return false;
            }
            CloseHandle(handle);
            true
        }
    }

    #[cfg(not(any(unix, windows)))]
    {
        true
    }
}

/// Text printed by `--show-paths`
fn paths_report(config_path: &Path, log_dir: &Path, log_file: &Path) -> String {
    let mut report = String::from("Quill paths:\n\n");
    let _ = writeln!(report, "Config:   {}", config_path.display());
    let _ = writeln!(report, "Logs:     {}", log_dir.display());
    let _ = writeln!(report, "This run: {}", log_file.display());
    report
}

pub fn print_all_paths(config_path: &Path) {
    print!("{}", paths_report(config_path, log_dir(), &main_log_path()));
}
