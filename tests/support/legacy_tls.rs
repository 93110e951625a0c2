//! A local TLS 1.1-only endpoint backed by `openssl s_server`.
//!
//! The server uses a throwaway self-signed certificate, so a client that
//! negotiates the protocol version still fails later, on certificate
//! verification.

use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use tempfile::TempDir;

pub struct LegacyTlsServer {
    child: Child,
    port: u16,
    _certs: TempDir,
}

impl LegacyTlsServer {
    /// Starts a server that only accepts TLS 1.1, or `None` when `openssl`
    /// or a local port is unavailable.
    pub async fn start_or_skip() -> Option<Self> {
        let openssl_present = Command::new("openssl")
            .arg("version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success());
        if !openssl_present {
            eprintln!("[legacy-tls-test] openssl binary not found. Skipping test.");
            return None;
        }

        let certs = TempDir::new().ok()?;
        let cert = certs.path().join("cert.pem");
        let key = certs.path().join("key.pem");
        let generated = Command::new("openssl")
            .args(["req", "-x509", "-newkey", "rsa:2048", "-nodes", "-days", "1"])
            .args(["-subj", "/CN=localhost"])
            .arg("-keyout")
            .arg(&key)
            .arg("-out")
            .arg(&cert)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success());
        if !generated {
            eprintln!("[legacy-tls-test] could not generate a certificate. Skipping test.");
            return None;
        }

        let port = TcpListener::bind("127.0.0.1:0")
            .ok()?
            .local_addr()
            .ok()?
            .port();
        let child = Command::new("openssl")
            .args(["s_server", "-quiet", "-www", "-tls1_1"])
            .args(["-cipher", "DEFAULT:@SECLEVEL=0"])
            .args(["-accept", &port.to_string()])
            .arg("-cert")
            .arg(&cert)
            .arg("-key")
            .arg(&key)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .ok()?;
        let server = Self {
            child,
            port,
            _certs: certs,
        };

        for _ in 0..50 {
            if tokio::net::TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
                return Some(server);
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        eprintln!("[legacy-tls-test] openssl s_server did not start listening. Skipping test.");
        None
    }

    pub fn url(&self) -> String {
        format!("https://localhost:{}/", self.port)
    }
}

impl Drop for LegacyTlsServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
