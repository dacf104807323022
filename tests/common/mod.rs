use std::io::{ErrorKind, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::thread::JoinHandle;
use std::time::Duration;

use tempfile::TempDir;

#[allow(dead_code)]
pub fn run_smart_notes(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_smart-notes"));
        command
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env_remove("SMART_NOTES_GROQ_API_KEY")
            .env_remove("GROQ_API_KEY")
            .env_remove("RUST_LOG");
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_stdin(args, "")
    }

    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to execute smart-notes binary");

        // The child may exit before reading (e.g. when gated), so a broken pipe is fine.
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(input.as_bytes());
        }

        child.wait_with_output().expect("wait for smart-notes")
    }

    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        let output = self.run(&["config", "path"]);
        assert!(
            output.status.success(),
            "config path should succeed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        let path = String::from_utf8_lossy(&output.stdout);
        PathBuf::from(path.trim())
    }

    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) {
        let config_path = self.config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).expect("create config parent directory");
        }
        std::fs::write(&config_path, contents).expect("write config file");
    }

    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.path().join(name);
        std::fs::write(&path, contents).expect("write test file");
        path
    }
}

/// A local chat-completion endpoint that answers at most one request.
#[allow(dead_code)]
pub struct StubEndpoint {
    listener: TcpListener,
    pub url: String,
}

#[allow(dead_code)]
impl StubEndpoint {
    pub fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub endpoint");
        let url = format!("http://{}", listener.local_addr().expect("stub address"));
        Self { listener, url }
    }

    /// Answer the next request; the handle yields the raw request that was received.
    pub fn respond_once(self, status_line: &'static str, body: String) -> JoinHandle<String> {
        std::thread::spawn(move || {
            let (mut socket, _) = self.listener.accept().expect("accept request");
            socket
                .set_read_timeout(Some(Duration::from_secs(10)))
                .expect("set read timeout");

            let mut received = Vec::new();
            let mut chunk = [0u8; 4096];
            while !request_complete(&received) {
                let n = socket.read(&mut chunk).expect("read request");
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .expect("write response");
            String::from_utf8_lossy(&received).to_string()
        })
    }

    /// True when nothing has connected since `bind`.
    pub fn was_never_contacted(&self) -> bool {
        self.listener
            .set_nonblocking(true)
            .expect("set listener nonblocking");
        matches!(self.listener.accept(), Err(e) if e.kind() == ErrorKind::WouldBlock)
    }
}

fn request_complete(received: &[u8]) -> bool {
    let Some(header_end) = received.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&received[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    received.len() >= header_end + 4 + content_length
}

/// An OpenAI-style completion whose first choice carries `content`.
#[allow(dead_code)]
pub fn completion(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
