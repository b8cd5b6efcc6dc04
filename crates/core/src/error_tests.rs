// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    not_found = { ServiceError::not_found(Entity::Command, "deploy"), ErrorKind::NotFound, 404 },
    invalid = { ServiceError::invalid("bad pattern"), ErrorKind::Invalid, 422 },
    unauthorized = { ServiceError::unauthorized("user bob"), ErrorKind::Unauthorized, 403 },
    unknown = { ServiceError::unknown("fork failed"), ErrorKind::Unknown, 500 },
)]
fn kind_and_status(err: ServiceError, kind: ErrorKind, status: u16) {
    assert_eq!(err.kind(), kind);
    assert_eq!(err.status_code(), status);
}

#[test]
fn not_found_public_message_names_entity_and_id() {
    let err = ServiceError::not_found(Entity::View, "disk-usage");
    assert_eq!(err.public_message(), "Failed to find View with ID disk-usage");
}

#[parameterized(
    invalid = { ServiceError::invalid("value 'x;rm' does not match ^[a-z]+$"), "Failed as invalid" },
    unauthorized = { ServiceError::unauthorized("user 'eve' may not run 'reboot'"), "Unauthorized" },
    unknown = { ServiceError::unknown("spawn /bin/sh: No such file"), "Failed for unknown reason" },
)]
fn public_message_hides_detail(err: ServiceError, expected: &str) {
    let public = err.public_message();
    assert_eq!(public, expected);
    assert_ne!(public, err.to_string());
}

#[test]
fn display_keeps_detail_for_logs() {
    let err = ServiceError::unknown("spawn /bin/sh: No such file");
    assert_eq!(err.to_string(), "spawn /bin/sh: No such file");
}

#[test]
fn kind_display_matches_wire_code() {
    assert_eq!(ErrorKind::Unauthorized.to_string(), "Unauthorized");
    assert_eq!(
        serde_json::to_string(&ErrorKind::NotFound).unwrap(),
        "\"NotFound\""
    );
}
