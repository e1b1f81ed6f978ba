//! Event -> normalized path vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod vector_loader;

use visitcount_core::path::normalize;
use visitcount_core::protocol::InvocationEvent;
use visitcount_core::Result;

fn resolve(event: &InvocationEvent) -> Result<String> {
    let body = event.request_body()?;
    normalize(body.requested_path()?)
}

#[test]
fn all_vectors() {
    let vectors = vector_loader::load_all();
    assert!(vectors.len() >= 10, "expected the full vector set");

    for (name, v) in vectors {
        match (resolve(&v.event), &v.expect, &v.expect_error) {
            (Ok(path), Some(expect), None) => {
                assert_eq!(path, expect.path, "{name}: {}", v.description)
            }
            (Err(err), None, Some(expect)) => {
                assert_eq!(err.client_code().as_str(), expect.code, "{name}: {}", v.description);
                assert_eq!(err.status_code(), expect.status, "{name}: {}", v.description);
            }
            (got, _, _) => panic!("{name}: {} -> unexpected outcome {got:?}", v.description),
        }
    }
}

#[test]
fn empty_path_message_is_fixed() {
    let err = resolve(&InvocationEvent::raw(r#"{"path": ""}"#)).unwrap_err();
    assert_eq!(err.to_string(), "Missing path parameter");
}
