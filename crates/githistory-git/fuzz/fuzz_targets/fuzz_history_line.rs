#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let output = String::from_utf8_lossy(data);
    let records = githistory_git::parse_log_output(&output);
    assert_eq!(records.len(), output.lines().count());
    for record in &records {
        assert_eq!(record.is_errored(), record.sha1.is_none());
    }
});
