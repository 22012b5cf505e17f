extern crate midibind;

use midibind::host::{ErrorKind, Exports, Value};

#[test]
fn init_installs_both_classes() {
    let mut exports = Exports::new();
    midibind::init(&mut exports);
    let names: Vec<&str> = exports.names().collect();
    assert_eq!(names, ["RtMidiIn", "RtMidiOut"]);
}

// The machine running the tests may have any number of ports, including none.
#[test]
fn system_objects_report_consistent_ports() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut exports = Exports::new();
    midibind::init(&mut exports);

    for class in ["RtMidiIn", "RtMidiOut"] {
        let mut obj = match exports.construct(class, &[]) {
            Ok(obj) => obj,
            Err(err) => {
                assert_eq!(err.kind(), ErrorKind::Error);
                continue;
            }
        };
        let count = obj.call("getPortCount", &[]).unwrap().as_index().unwrap();
        assert!(count >= 0);
        for i in 0..count {
            let name = obj.call("getPortName", &[Value::from(i)]).unwrap();
            assert!(!name.as_str().unwrap().is_empty());
        }
        assert!(obj.call("getPortName", &[Value::from(count)]).is_err());
        obj.call("close", &[]).unwrap();
        obj.call("close", &[]).unwrap();
    }
}
