use kl_reload::buffer::SourceBuffer;
use kl_reload::notify::RecordingNotifier;
use kl_reload::reload::{self, ReloadError};
use kl_reload::settings::Settings;
use kl_reload::transmit::TransmitError;
use pretty_assertions::assert_eq;
use std::io::Read;
use std::net::TcpListener;
use std::thread;

const DEFORM_KL: &str = "\
require Math;

operator deformMesh(io PolygonMesh mesh, Scalar amount) {
  mesh.recomputePointNormals();
}

function helper() {}

operator 2bad(io Scalar x) {}

operator blendShapes<<<index>>>(io Vec3 points[]) {
}
";

fn quick_settings(port: u16) -> Settings {
    Settings {
        port,
        connect_timeout_ms: 500,
        grace_ms: 10,
        ..Settings::default()
    }
}

#[test]
fn sends_script_for_declared_operators() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let maya = thread::spawn(move || {
        let (mut conn, _) = listener.accept().unwrap();
        let mut received = String::new();
        conn.read_to_string(&mut received).unwrap();
        received
    });

    let buffer = SourceBuffer::new("/projects/rig/deform.kl", DEFORM_KL);
    let mut notifier = RecordingNotifier::default();
    let report = reload::run(&buffer, &quick_settings(port), &mut notifier).unwrap();

    let names: Vec<String> = report.operators.iter().map(|op| op.to_string()).collect();
    assert_eq!(names, vec!["deformMesh", "blendShapes"]);

    let received = maya.join().unwrap();
    assert_eq!(report.bytes_sent, received.len());
    assert!(received.contains(r#"if entry_operator in ["deformMesh","blendShapes"]:"#));
    assert!(received.contains(r#""fileName": "/projects/rig/deform.kl""#));
    assert!(!received.contains("2bad"));
    assert!(notifier.messages.is_empty());
}

#[test]
fn missing_listener_is_reported_and_propagated() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let buffer = SourceBuffer::new("/projects/rig/deform.kl", DEFORM_KL);
    let mut notifier = RecordingNotifier::default();
    let err = reload::run(&buffer, &quick_settings(port), &mut notifier).unwrap_err();

    assert!(matches!(
        err,
        ReloadError::Transmit(TransmitError::Connect { .. })
    ));
    assert_eq!(notifier.messages.len(), 1);
    assert!(notifier.messages[0].contains(&port.to_string()));
}

#[test]
fn prepare_is_deterministic() {
    let buffer = SourceBuffer::new("/tmp/test.kl", "operator foo()\noperator bar()\n");
    let (ops_a, script_a) = reload::prepare(&buffer).unwrap();
    let (ops_b, script_b) = reload::prepare(&buffer).unwrap();

    assert_eq!(ops_a, ops_b);
    assert_eq!(script_a.as_bytes(), script_b.as_bytes());
    assert!(script_a.as_str().contains(r#"["foo","bar"]"#));
    assert!(script_a.as_str().contains("/tmp/test.kl"));
}
