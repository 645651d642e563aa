use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnapshotStore;

pub fn run<S: SnapshotStore>(store: &mut S) -> Result<CmdResult> {
    let report = store.doctor()?;
    let mut result = CmdResult::default();

    if report.trailing_bytes_dropped == 0 {
        result.add_message(CmdMessage::success(format!(
            "No inconsistencies found. {} record(s) on disk.",
            report.whole_records
        )));
    } else {
        result.add_message(CmdMessage::warning("Inconsistencies found and fixed:"));
        result.add_message(CmdMessage::info(format!(
            "  - Dropped {} trailing byte(s) after {} whole record(s).",
            report.trailing_bytes_dropped, report.whole_records
        )));
    }

    Ok(result)
}
