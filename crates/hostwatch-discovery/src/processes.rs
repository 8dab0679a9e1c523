//! Process discovery via `sysinfo`.

use hostwatch_core::ProcessRecord;
use sysinfo::{System, Users};
use tracing::debug;

use crate::source::SourceResult;

/// Source label used in reports.
pub const SOURCE: &str = "process table";

/// Snapshot all running processes.
///
/// Protected processes still appear, but without a path or owner when the
/// OS refuses the detail query. Entries that vanished mid-enumeration
/// (no readable name) are dropped.
pub fn list_processes() -> SourceResult<ProcessRecord> {
    let system = System::new_all();
    let users = Users::new_with_refreshed_list();

    let mut processes: Vec<ProcessRecord> = system
        .processes()
        .iter()
        .filter_map(|(pid, proc)| {
            let name = proc.name().to_string_lossy().into_owned();
            if name.is_empty() {
                debug!(pid = pid.as_u32(), "skipping process without a name");
                return None;
            }
            Some(ProcessRecord {
                pid: pid.as_u32(),
                name,
                exe_path: proc.exe().map(|p| p.display().to_string()),
                owner: proc
                    .user_id()
                    .and_then(|uid| users.get_user_by_id(uid))
                    .map(|u| u.name().to_string()),
            })
        })
        .collect();

    processes.sort_by_key(|p| p.pid);
    debug!(count = processes.len(), "enumerated processes");

    SourceResult::ok(SOURCE, processes)
}
