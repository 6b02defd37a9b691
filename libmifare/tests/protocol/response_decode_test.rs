use libmifare::protocol::{Frame, responses};
use libmifare::types::CardType;
use libmifare::{Error, ResponseError};

use crate::common::fixtures;

#[test]
fn decode_classic_discovery() {
    let t = responses::decode_in_list_passive_target(&fixtures::classic_discovery_frame()).unwrap();
    assert_eq!(t.uid.to_hex(), "deadbeef");
    assert_eq!(CardType::classify(t.sens_res, t.sel_res), CardType::Classic);
}

#[test]
fn decode_ultralight_discovery() {
    let t =
        responses::decode_in_list_passive_target(&fixtures::ultralight_discovery_frame()).unwrap();
    assert_eq!(t.uid.as_bytes(), &fixtures::ULTRALIGHT_UID);
    assert_eq!(
        CardType::classify(t.sens_res, t.sel_res),
        CardType::Ultralight
    );
}

#[test]
fn decode_discovery_tolerates_padding() {
    // fixed-length bus reads return trailing zeros after the postamble
    let mut frame = fixtures::classic_discovery_frame();
    frame.resize(20, 0);
    let t = responses::decode_in_list_passive_target(&frame).unwrap();
    assert_eq!(t.uid.len(), 4);
}

#[test]
fn decode_discovery_without_tag() {
    let frame = Frame::response(0x4B, &[0x00]).unwrap();
    assert!(matches!(
        responses::decode_in_list_passive_target(&frame),
        Err(Error::NoTarget { found: 0 })
    ));
}

#[test]
fn decode_discovery_truncated_uid() {
    let frame = Frame::response(0x4B, &fixtures::hex_bytes("01 01 00 04 08 07 01 02")).unwrap();
    let err = responses::decode_in_list_passive_target(&frame[..frame.len() - 2]).unwrap_err();
    assert!(matches!(
        err,
        Error::UnexpectedResponse(ResponseError::TooShort { .. })
    ));
}

#[test]
fn decode_sam_rejects_other_codes() {
    responses::decode_sam_configuration(&Frame::response(0x15, &[]).unwrap()).unwrap();
    let err = responses::decode_sam_configuration(&Frame::response(0x4B, &[]).unwrap());
    assert!(matches!(
        err,
        Err(Error::UnexpectedResponse(ResponseError::ResponseCode {
            expected: 0x15,
            actual: 0x4B
        }))
    ));
}

#[test]
fn decode_block_read() {
    let mut body = vec![0x00];
    body.extend_from_slice(&[0xC3; 16]);
    let frame = Frame::response(0x41, &body).unwrap();
    let block = responses::decode_classic_read(&frame).unwrap();
    assert_eq!(block.as_bytes(), &[0xC3; 16]);

    let page = responses::decode_ultralight_read(&frame).unwrap();
    assert_eq!(page.as_bytes(), &[0xC3; 4]);
}

#[test]
fn decode_error_status() {
    let frame = fixtures::status_frame(0x14);
    assert!(matches!(
        responses::decode_authenticate(&frame, 12),
        Err(Error::AuthenticationFailed { block: 12 })
    ));
    assert!(matches!(
        responses::decode_status(&frame),
        Err(Error::UnexpectedResponse(ResponseError::Status { .. }))
    ));
}

#[test]
fn decode_discovery_rejects_wrong_code_and_uid_length() {
    let mut frame = fixtures::classic_discovery_frame();
    frame[6] = 0x41;
    assert!(matches!(
        responses::decode_in_list_passive_target(&frame),
        Err(Error::UnexpectedResponse(ResponseError::ResponseCode { .. }))
    ));

    let frame = Frame::response(0x4B, &fixtures::hex_bytes("01 01 00 04 08 0a")).unwrap();
    assert!(matches!(
        responses::decode_in_list_passive_target(&frame),
        Err(Error::UnexpectedResponse(ResponseError::UidLength(10)))
    ));
}
