use tja_rs::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn unknown_directives_are_skipped() {
    init_logger();
    let chart = Chart::parse("#START\n#GOGOSTART\n1111,\n#GOGOEND\n#END\n").unwrap();
    assert_eq!(chart.measure_count(), 1);
    assert_eq!(chart[0].to_kind_string(), "1111");
}
