#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};

/// Canned dashboard answering every request with the same JSON body.
pub struct FakeDashboard {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeDashboard {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn spawn_dashboard(status: u16, body: &str) -> Result<FakeDashboard> {
    let listener = TcpListener::bind("127.0.0.1:0").context("bind fake dashboard")?;
    let addr = listener.local_addr().context("fake dashboard addr")?;
    let requests = Arc::new(Mutex::new(Vec::new()));

    let seen = requests.clone();
    let body = body.to_string();
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                    break;
                }
                if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = v.trim().parse().unwrap_or(0);
                }
                head.push_str(&line);
            }
            let mut discard = vec![0u8; content_length];
            let _ = reader.read_exact(&mut discard);
            seen.lock().unwrap().push(head);

            let resp = format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(resp.as_bytes());
        }
    });

    Ok(FakeDashboard {
        base_url: format!("http://{}", addr),
        requests,
    })
}

pub fn run_apictl(config: &Path, args: &[&str], envs: &[(&str, &str)]) -> Result<Output> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_apictl"));
    cmd.arg("--config")
        .arg(config)
        .args(args)
        .env_remove("APICTL_DASHBOARD_URL")
        .env_remove("APICTL_TOKEN")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null());
    for (k, v) in envs {
        cmd.env(k, v);
    }
    cmd.output()
        .with_context(|| format!("run apictl {:?}", args))
}

pub fn config_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("config.json")
}

pub fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

pub fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}
