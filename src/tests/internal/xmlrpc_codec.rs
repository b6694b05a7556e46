use chrono::NaiveDate;

use crate::internal::errors::bscw_error::BscwError;
use crate::internal::xmlrpc::functions::decode_method_response::decode_method_response;
use crate::internal::xmlrpc::functions::encode_method_call::encode_method_call;
use crate::internal::xmlrpc::structs::xml_rpc_value::XmlRpcValue;
use crate::tests::xml;

#[test]
fn encode_get_attributes_call() {
    let params = [
        XmlRpcValue::from("4711"),
        XmlRpcValue::string_array(&["__id__", "name"]),
        XmlRpcValue::from(1u32),
        XmlRpcValue::from(false),
    ];
    let body = encode_method_call("get_attributes", &params).unwrap();

    assert!(body.starts_with("<?xml version=\"1.0\"?>"));
    assert!(body.contains("<methodName>get_attributes</methodName>"));
    assert!(body.contains("<param><value><string>4711</string></value></param>"));
    assert!(body.contains(
        "<array><data><value><string>__id__</string></value><value><string>name</string></value></data></array>"
    ));
    assert!(body.contains("<value><i4>1</i4></value>"));
    assert!(body.contains("<value><boolean>0</boolean></value>"));
}

#[test]
fn encode_escapes_text_and_handles_empty_params() {
    let body = encode_method_call("get_path", &[XmlRpcValue::from("a&b<c")]).unwrap();
    assert!(body.contains("<string>a&amp;b&lt;c</string>"));

    let body = encode_method_call("get_attributes", &[]).unwrap();
    assert!(body.contains("<params></params>"));
}

#[test]
fn decode_nested_struct_and_array() {
    let body = xml::response(&xml::array(&[
        xml::structure(&[
            ("__id__", xml::string("12")),
            ("name", xml::string("Reports")),
            ("size", xml::int(2048)),
        ]),
        xml::array(&[xml::string("x"), xml::int(3)]),
    ]));

    let value = decode_method_response(&body).unwrap();
    let items = value.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get("name").and_then(XmlRpcValue::as_str), Some("Reports"));
    assert_eq!(items[0].get("size").and_then(XmlRpcValue::as_i64), Some(2048));
    assert_eq!(
        items[1],
        XmlRpcValue::Array(vec![XmlRpcValue::from("x"), XmlRpcValue::Int(3)])
    );
}

#[test]
fn decode_scalars() {
    let value = decode_method_response(&xml::response(&xml::base64("aGVsbG8="))).unwrap();
    assert_eq!(value.into_bytes(), Some(b"hello".to_vec()));

    let value =
        decode_method_response(&xml::response(&xml::datetime("20240105T10:20:30"))).unwrap();
    let expected = NaiveDate::from_ymd_opt(2024, 1, 5)
        .unwrap()
        .and_hms_opt(10, 20, 30)
        .unwrap();
    assert_eq!(value.as_datetime(), Some(expected));

    let value = decode_method_response(&xml::response("<value>plain</value>")).unwrap();
    assert_eq!(value.as_str(), Some("plain"));

    let value =
        decode_method_response(&xml::response("<value><boolean>1</boolean></value>")).unwrap();
    assert_eq!(value.as_bool(), Some(true));
}

#[test]
fn decode_fault_as_remote_error() {
    let err = decode_method_response(&xml::fault(4, "object not found")).unwrap_err();

    match err {
        BscwError::RemoteFault { code, message } => {
            assert_eq!(code, 4);
            assert_eq!(message, "object not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn decode_rejects_malformed_bodies() {
    let err = decode_method_response("<html><body>502</body></html>").unwrap_err();
    assert!(matches!(err, BscwError::Decode(_)));

    let err =
        decode_method_response(&xml::response("<value><int>twelve</int></value>")).unwrap_err();
    assert!(matches!(err, BscwError::Decode(_)));
}

#[test]
fn encode_wide_integers_as_i8() {
    let body = encode_method_call(
        "get_attributes",
        &[
            XmlRpcValue::Int(i64::from(i32::MAX)),
            XmlRpcValue::Int(5_000_000_000),
            XmlRpcValue::Int(i64::from(i32::MIN) - 1),
        ],
    )
    .unwrap();

    assert!(body.contains("<value><i4>2147483647</i4></value>"));
    assert!(body.contains("<value><i8>5000000000</i8></value>"));
    assert!(body.contains("<value><i8>-2147483649</i8></value>"));
    assert!(!body.contains("<i4>5000000000</i4>"));
}
