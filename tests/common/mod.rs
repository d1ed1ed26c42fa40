#![allow(dead_code)]

pub mod temp_files {
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Writes `content` to `name` inside a fresh temporary directory.
    ///
    /// The directory is removed when the returned guard is dropped.
    pub fn create_temp_spec(name: &str, content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }
}

pub mod mock_http {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc::{self, Receiver};
    use std::thread;
    use std::time::Duration;

    /// Canned reply served for every request.
    #[derive(Clone)]
    pub struct MockReply {
        pub status_line: &'static str,
        pub body: String,
        pub delay: Option<Duration>,
    }

    impl MockReply {
        pub fn ok(body: &str) -> Self {
            Self {
                status_line: "200 OK",
                body: body.to_string(),
                delay: None,
            }
        }

        pub fn status(status_line: &'static str) -> Self {
            Self {
                status_line,
                body: String::new(),
                delay: None,
            }
        }

        pub fn delayed(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }
    }

    /// Starts a mock server on an ephemeral port.
    ///
    /// Returns the base URL and a channel carrying the raw request head of
    /// every request received.
    pub fn start_mock_server(reply: MockReply) -> (String, Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let url = format!("http://127.0.0.1:{}", addr.port());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let mut stream = match stream {
                    Ok(s) => s,
                    Err(_) => break,
                };
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = tx.send(String::from_utf8_lossy(&head).into_owned());
                if let Some(delay) = reply.delay {
                    thread::sleep(delay);
                }
                let resp = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    reply.status_line,
                    reply.body.len(),
                    reply.body
                );
                let _ = stream.write_all(resp.as_bytes());
                let _ = stream.flush();
            }
        });

        (url, rx)
    }
}
