//! 读取 `src/tests/servers.toml`，生成 live 测试可选的 BSCW 服务器枚举 `TestServer`。
//!
//! 每个 id 对应 `src/tests/env/{id}.env` 中的一组账号，没有配置任何服务器时枚举为空。

use std::env;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// `team_bscw` → `TeamBscw`
fn variant_name(id: &str) -> String {
    id.split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars
                .next()
                .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
                .unwrap_or_default()
        })
        .collect()
}

fn server_ids(source: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let table: toml::Table = source.parse()?;

    let Some(servers) = table.get("servers") else {
        return Ok(Vec::new());
    };
    let servers = servers
        .as_array()
        .ok_or("servers.toml: `servers` 必须是字符串数组")?;

    servers
        .iter()
        .map(|value| -> Result<String, Box<dyn Error>> {
            let id = value
                .as_str()
                .ok_or("servers.toml: `servers` 必须是字符串数组")?;
            let valid = id.starts_with(|c: char| c.is_ascii_alphabetic())
                && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
            if valid {
                Ok(id.to_string())
            } else {
                Err(format!("servers.toml: 无效的服务器 id {id:?}").into())
            }
        })
        .collect()
}

fn render(ids: &[String]) -> String {
    let mut variants = String::new();
    let mut arms = String::new();
    let mut all = String::new();

    for id in ids {
        let variant = variant_name(id);
        let _ = writeln!(variants, "    {variant},");
        let _ = writeln!(arms, "            TestServer::{variant} => {id:?},");
        let _ = writeln!(all, "TestServer::{variant}, ");
    }

    format!(
        "/// 配置了 live 测试账号的 BSCW 服务器\n\
         #[derive(Debug, Clone, Copy, PartialEq, Eq)]\n\
         pub enum TestServer {{\n{variants}}}\n\n\
         impl TestServer {{\n\
         \x20   /// 服务器 id，对应 env/{{id}}.env\n\
         \x20   pub fn as_str(&self) -> &'static str {{\n\
         \x20       match *self {{\n{arms}        }}\n\
         \x20   }}\n\n\
         \x20   pub fn all() -> &'static [TestServer] {{\n\
         \x20       &[{all}]\n\
         \x20   }}\n\
         }}\n"
    )
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=src/tests/servers.toml");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR")?;
    let source = fs::read_to_string(Path::new(&manifest_dir).join("src/tests/servers.toml"))
        .unwrap_or_default();

    let code = render(&server_ids(&source)?);

    let out_dir = env::var("OUT_DIR")?;
    fs::write(Path::new(&out_dir).join("test_servers.rs"), code)?;

    Ok(())
}
