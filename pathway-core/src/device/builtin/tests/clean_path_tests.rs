use crate::ctx::RequestCtx;
use crate::device::builtin::CleanPathDevice;
use crate::device::core::{Device, DeviceResult};
use http::{Method, Uri};
use pretty_assertions::assert_eq;

fn hydrated(method: Method, target: &str) -> RequestCtx {
    let uri: Uri = target.parse().expect("invalid test target");
    let mut ctx = RequestCtx::empty();
    ctx.hydrate(method, &uri);
    ctx
}

fn run(ctx: &mut RequestCtx) {
    let device = CleanPathDevice::new();

    assert!(matches!(
        device.on_request(ctx),
        DeviceResult::Continue
    ));
}

//-----------------------------------------------------------------------------
// Non-CONNECT requests get a cleaned routing path
//-----------------------------------------------------------------------------
#[test]
fn get_request_records_cleaned_route_path() {
    // Arrange
    let mut ctx = hydrated(Method::GET, "/test/path///");

    // Act
    run(&mut ctx);

    // Assert
    assert_eq!(ctx.route_path_override(), Some("/test/path"));
    assert_eq!(ctx.route_path(), "/test/path");
}

#[test]
fn raw_path_survives_the_rewrite() {
    // Arrange
    let mut ctx = hydrated(Method::GET, "/test/path///");

    // Act
    run(&mut ctx);

    // Assert
    assert_eq!(ctx.raw_path(), "/test/path///");
}

#[test]
fn already_canonical_path_is_still_recorded() {
    // Arrange
    let mut ctx = hydrated(Method::GET, "/already/clean");

    // Act
    run(&mut ctx);

    // Assert
    assert_eq!(ctx.route_path_override(), Some("/already/clean"));
}

#[test]
fn earlier_override_is_replaced_for_non_connect() {
    // Arrange
    let mut ctx = hydrated(Method::POST, "/a/./b/../c");
    ctx.set_route_path("/from-earlier-stage".to_string());

    // Act
    run(&mut ctx);

    // Assert
    assert_eq!(ctx.route_path_override(), Some("/a/c"));
}

//-----------------------------------------------------------------------------
// CONNECT requests pass through untouched
//-----------------------------------------------------------------------------
#[test]
fn connect_request_records_no_override() {
    // Arrange
    let mut ctx = hydrated(Method::CONNECT, "/test/path///");

    // Act
    run(&mut ctx);

    // Assert
    assert_eq!(ctx.route_path_override(), None);
    assert_eq!(ctx.route_path(), "/test/path///");
}

#[test]
fn connect_request_keeps_an_earlier_override_byte_for_byte() {
    // Arrange
    let mut ctx = hydrated(Method::CONNECT, "/test/path///");
    ctx.set_route_path("/from-earlier-stage".to_string());

    // Act
    run(&mut ctx);

    // Assert
    assert_eq!(ctx.route_path_override(), Some("/from-earlier-stage"));
}

#[test]
fn connect_authority_form_target_passes_through() {
    // Arrange
    let mut ctx = hydrated(Method::CONNECT, "example.com:443");

    // Act
    run(&mut ctx);

    // Assert
    assert_eq!(ctx.route_path_override(), None);
    assert_eq!(ctx.route_path(), "");
}
