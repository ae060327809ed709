use linear_scan::{try_find_all, SearchError};
use logtest::Logger;

#[test]
fn rejected_sequence_is_logged() {
    let mut logger = Logger::start();

    let outcome = try_find_all::<u8, u8>(None, &1);
    assert_eq!(outcome, Err(SearchError::InvalidArgument));

    let mut logged = false;
    while let Some(record) = logger.pop() {
        if record.level() == log::Level::Debug && record.args().to_string().contains("no sequence provided") {
            logged = true;
            break;
        }
    }

    assert!(logged, "expected the rejection to be logged");
}
