use super::*;
use futures::executor::block_on;

#[test]
fn pending_until_driver_runs() {
    let (driver, mut handle) = observed(async { 5 });
    assert_eq!(handle.status(), TaskStatus::Pending);
    block_on(driver);
    assert_eq!(handle.status(), TaskStatus::Finished(5));
}

#[test]
fn finished_status_is_sticky() {
    let (driver, mut handle) = observed(async { "done" });
    block_on(driver);
    assert_eq!(handle.status(), TaskStatus::Finished("done"));
    assert_eq!(handle.status(), TaskStatus::Finished("done"));
}

#[test]
fn dropped_driver_reports_dropped() {
    let (driver, mut handle) = observed(async { 1 });
    drop(driver);
    assert_eq!(handle.status(), TaskStatus::Dropped);
    assert_eq!(handle.status(), TaskStatus::Dropped);
}

#[test]
fn error_value_is_reported_as_finished() {
    let (driver, mut handle) = observed(async { Err::<(), String>("boom".to_owned()) });
    block_on(driver);
    assert_eq!(handle.status(), TaskStatus::Finished(Err("boom".to_owned())));
}

#[test]
fn dropping_handle_does_not_stall_driver() {
    let (driver, handle) = observed(async { 3 });
    drop(handle);
    block_on(driver);
}
