use base64::Engine;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::internal::errors::bscw_error::BscwError;
use crate::internal::xmlrpc::structs::xml_rpc_value::{DATETIME_FORMAT, XmlRpcValue};

type XmlWriter = Writer<Vec<u8>>;

fn write(writer: &mut XmlWriter, event: Event<'_>) -> Result<(), BscwError> {
    writer
        .write_event(event)
        .map_err(|e| BscwError::Encode(e.to_string()))
}

fn start(writer: &mut XmlWriter, tag: &str) -> Result<(), BscwError> {
    write(writer, Event::Start(BytesStart::new(tag)))
}

fn end(writer: &mut XmlWriter, tag: &str) -> Result<(), BscwError> {
    write(writer, Event::End(BytesEnd::new(tag)))
}

/// 写入 `<tag>text</tag>`，文本会被转义
fn text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<(), BscwError> {
    start(writer, tag)?;
    if !text.is_empty() {
        write(writer, Event::Text(BytesText::new(text)))?;
    }
    end(writer, tag)
}

fn write_value(writer: &mut XmlWriter, value: &XmlRpcValue) -> Result<(), BscwError> {
    start(writer, "value")?;
    match value {
        XmlRpcValue::Int(i) => {
            // 超出 32 位范围的整数只能用 <i8> 表示
            let tag = if i32::try_from(*i).is_ok() { "i4" } else { "i8" };
            text_element(writer, tag, &i.to_string())?
        }
        XmlRpcValue::Bool(b) => text_element(writer, "boolean", if *b { "1" } else { "0" })?,
        XmlRpcValue::String(s) => text_element(writer, "string", s)?,
        XmlRpcValue::Double(d) => text_element(writer, "double", &d.to_string())?,
        XmlRpcValue::DateTime(dt) => text_element(
            writer,
            "dateTime.iso8601",
            &dt.format(DATETIME_FORMAT).to_string(),
        )?,
        XmlRpcValue::Base64(bytes) => text_element(
            writer,
            "base64",
            &base64::engine::general_purpose::STANDARD.encode(bytes),
        )?,
        XmlRpcValue::Struct(members) => {
            start(writer, "struct")?;
            for (name, member) in members {
                start(writer, "member")?;
                text_element(writer, "name", name)?;
                write_value(writer, member)?;
                end(writer, "member")?;
            }
            end(writer, "struct")?;
        }
        XmlRpcValue::Array(items) => {
            start(writer, "array")?;
            start(writer, "data")?;
            for item in items {
                write_value(writer, item)?;
            }
            end(writer, "data")?;
            end(writer, "array")?;
        }
        XmlRpcValue::Nil => write(writer, Event::Empty(BytesStart::new("nil")))?,
    }
    end(writer, "value")
}

/// 编码 XML-RPC 请求体 `<methodCall>`
pub fn encode_method_call(method: &str, params: &[XmlRpcValue]) -> Result<String, BscwError> {
    let mut writer = Writer::new(Vec::new());

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", None, None)))?;
    start(&mut writer, "methodCall")?;
    text_element(&mut writer, "methodName", method)?;
    start(&mut writer, "params")?;
    for param in params {
        start(&mut writer, "param")?;
        write_value(&mut writer, param)?;
        end(&mut writer, "param")?;
    }
    end(&mut writer, "params")?;
    end(&mut writer, "methodCall")?;

    String::from_utf8(writer.into_inner()).map_err(|e| BscwError::Encode(e.to_string()))
}
