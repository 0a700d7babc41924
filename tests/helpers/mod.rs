use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Request as seen by the stub server
#[allow(dead_code)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[allow(dead_code)]
impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Single-request HTTP stub answering with a fixed status and body
pub struct StubServer {
    pub url: String,
    captured: Receiver<CapturedRequest>,
}

impl StubServer {
    pub fn respond_once(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let url = format!("http://{}/v1/graphql", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();
        let body = body.to_string();

        thread::spawn(move || {
            let captured = listener
                .accept()
                .and_then(|(stream, _)| serve_one(stream, status, &body));
            match captured {
                Ok(request) => {
                    let _ = tx.send(request);
                }
                Err(e) => eprintln!("Stub server failed: {}", e),
            }
        });

        Self { url, captured: rx }
    }

    pub fn captured(&self) -> CapturedRequest {
        self.captured
            .recv()
            .expect("Stub server did not capture a request")
    }
}

/// Read one request, answer it, and hand back what was received
fn serve_one(stream: TcpStream, status: u16, body: &str) -> io::Result<CapturedRequest> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut raw_body = vec![0u8; length];
    reader.read_exact(&mut raw_body)?;

    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )?;
    stream.flush()?;

    Ok(CapturedRequest {
        request_line: request_line.trim_end().to_string(),
        headers,
        body: String::from_utf8_lossy(&raw_body).into_owned(),
    })
}

/// URL on a port nothing listens on
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1/graphql", addr)
}
