use super::{SourceApi, SourceResponse};
use crate::error::{JudgeError, Result};
use std::collections::{HashMap, HashSet};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};

/// In-memory source API. Unknown API paths answer 404; unknown raw paths
/// answer nothing.
#[derive(Default)]
pub struct FakeSource {
    routes: HashMap<String, SourceResponse>,
    broken: HashSet<String>,
    raw: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, path: &str, response: SourceResponse) -> Self {
        self.routes.insert(path.to_string(), response);
        self
    }

    pub fn broken(mut self, path: &str) -> Self {
        self.broken.insert(path.to_string());
        self
    }

    pub fn raw_file(mut self, path: &str, content: &str) -> Self {
        self.raw.insert(path.to_string(), content.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl SourceApi for FakeSource {
    fn get(&self, path: &str, _accept: &str) -> Result<SourceResponse> {
        self.record(path.to_string());
        if self.broken.contains(path) {
            return Err(JudgeError::Transport(format!("connection reset: {path}")));
        }
        Ok(self.routes.get(path).cloned().unwrap_or(SourceResponse {
            status: 404,
            link: None,
            body: r#"{"message":"Not Found"}"#.to_string(),
        }))
    }

    fn get_raw(&self, owner: &str, repo: &str, branch: &str, path: &str) -> Option<String> {
        self.record(format!("raw:{owner}/{repo}/{branch}/{path}"));
        self.raw.get(path).filter(|content| !content.is_empty()).cloned()
    }
}

/// Answers exactly one HTTP request on a loopback port with a canned
/// response. Returns the base URL and a handle yielding the raw request.
pub fn serve_once(status: &str, headers: &[(&str, &str)], body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("loopback listener should bind");
    let addr = listener.local_addr().expect("listener should have an address");

    let mut response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n",
        body.len()
    );
    for (name, value) in headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str("\r\n");
    response.push_str(body);

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("client should connect");
        let request = read_request(&stream);
        stream
            .write_all(response.as_bytes())
            .expect("response should be written");
        request
    });
    (format!("http://{addr}"), handle)
}

fn read_request(stream: &TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut head = String::new();
    loop {
        let mut line = String::new();
        let read = reader.read_line(&mut line).expect("request line should read");
        if read == 0 || line == "\r\n" {
            break;
        }
        head.push_str(&line);
    }

    let header = |wanted: &str| {
        head.lines().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.trim()
                .eq_ignore_ascii_case(wanted)
                .then(|| value.trim().to_string())
        })
    };

    let mut body = Vec::new();
    if let Some(length) = header("content-length").and_then(|value| value.parse::<usize>().ok()) {
        body.resize(length, 0);
        reader.read_exact(&mut body).expect("request body should read");
    } else if header("transfer-encoding").is_some_and(|value| value.eq_ignore_ascii_case("chunked")) {
        loop {
            let mut size_line = String::new();
            reader.read_line(&mut size_line).expect("chunk size should read");
            let size = usize::from_str_radix(size_line.trim(), 16).unwrap_or(0);
            let mut chunk = vec![0; size + 2];
            reader.read_exact(&mut chunk).expect("chunk should read");
            if size == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..size]);
        }
    }

    head.push_str(&String::from_utf8_lossy(&body));
    head
}
