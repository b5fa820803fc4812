//! Exercises the HTTP client against a one-shot local server that replies
//! with a canned response and hands back the raw request it received.

use ppi_core::auth::{AuthService, ChangePasswordRequest};
use ppi_core::batch::{BatchPredictionResult, BatchUpload, UploadFile};
use ppi_core::config::ApiConfig;
use ppi_core::prediction::{PayloadStyle, PredictionRequest, PredictionService, ProteinRecord};
use ppi_interaction::PpiApiClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct CannedServer {
    base_url: String,
    request: oneshot::Receiver<String>,
}

async fn serve_once(status_line: &str, headers: &[(&str, &str)], body: &str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut response = format!("HTTP/1.1 {}\r\n", status_line);
    for (name, value) in headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    ));

    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let raw = read_request(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(raw);
    });

    CannedServer {
        base_url: format!("http://{}", addr),
        request: rx,
    }
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if request_complete(&buf) {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn request_complete(buf: &[u8]) -> bool {
    let text = String::from_utf8_lossy(buf);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let head = text[..header_end].to_ascii_lowercase();
    let body_len = text.len() - header_end - 4;

    if head.contains("transfer-encoding: chunked") {
        return text.ends_with("0\r\n\r\n");
    }
    let expected = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    body_len >= expected
}

fn client(base_url: &str, style: PayloadStyle) -> PpiApiClient {
    PpiApiClient::new(ApiConfig {
        base_url: base_url.to_string(),
        payload_style: style,
    })
    .unwrap()
}

fn request() -> PredictionRequest {
    PredictionRequest::new(
        ProteinRecord::new("P12345", "MKTAYIAKQR"),
        ProteinRecord::new("Q67890", "MSDNELKQAL"),
    )
}

#[tokio::test]
async fn predict_posts_flat_json_and_decodes_result() {
    let server = serve_once(
        "200 OK",
        &[("Content-Type", "application/json")],
        r#"{"score":0.87,"label":"interaction","model":"esm2","threshold":0.5}"#,
    )
    .await;

    let result = client(&server.base_url, PayloadStyle::Flat)
        .predict(&request())
        .await
        .unwrap();
    assert_eq!(result.score, 0.87);
    assert_eq!(result.label, "interaction");
    assert_eq!(result.threshold, Some(0.5));

    let raw = server.request.await.unwrap();
    assert!(raw.starts_with("POST /api/predict HTTP/1.1"));
    assert!(raw.contains(r#""id1":"P12345""#));
    assert!(raw.contains(r#""seq2":"MSDNELKQAL""#));
}

#[tokio::test]
async fn predict_tolerates_null_and_string_fields() {
    let server = serve_once(
        "200 OK",
        &[("Content-Type", "application/json")],
        r#"{"score":"0.75","label":null,"threshold":null,"model":"esm2"}"#,
    )
    .await;

    let result = client(&server.base_url, PayloadStyle::Flat)
        .predict(&request())
        .await
        .unwrap();
    assert_eq!(result.score, 0.75);
    assert_eq!(result.label, "");
    assert_eq!(result.threshold, None);
    assert_eq!(result.model.as_deref(), Some("esm2"));
}

#[tokio::test]
async fn predict_can_send_nested_payload() {
    let server = serve_once(
        "200 OK",
        &[("Content-Type", "application/json")],
        r#"{"score":0.1,"label":"no_interaction"}"#,
    )
    .await;

    client(&server.base_url, PayloadStyle::Nested)
        .predict(&request())
        .await
        .unwrap();

    let raw = server.request.await.unwrap();
    assert!(raw.contains(r#""protein1":{"id":"P12345","sequence":"MKTAYIAKQR"}"#));
}

#[tokio::test]
async fn predict_server_error_carries_status() {
    let server = serve_once("500 Internal Server Error", &[], "boom").await;

    let err = client(&server.base_url, PayloadStyle::Flat)
        .predict(&request())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn batch_text_response_reads_metadata_headers() {
    let server = serve_once(
        "200 OK",
        &[
            ("Content-Type", "text/plain; charset=utf-8"),
            ("X-Model", "esm2"),
            ("X-Total-Pairs", "2"),
            ("X-Successful-Predictions", "2"),
            ("X-Failed-Predictions", "0"),
        ],
        "P1 P2 0.91\nP3 P4 0.12\n",
    )
    .await;

    let upload = BatchUpload::new(
        UploadFile::new("proteins.fasta", b">P1\nMKT\n".to_vec()),
        UploadFile::new("pairs.tsv", b"P1\tP2\n".to_vec()),
    );
    let result = client(&server.base_url, PayloadStyle::Flat)
        .predict_batch(&upload)
        .await
        .unwrap();

    let metadata = result.metadata().unwrap();
    assert_eq!(metadata.model.as_deref(), Some("esm2"));
    assert_eq!(metadata.total_pairs, Some(2));
    assert_eq!(metadata.threshold, None);
    assert_eq!(result.rows().len(), 2);

    let raw = server.request.await.unwrap();
    assert!(raw.starts_with("POST /api/predict/batch HTTP/1.1"));
    assert!(raw.contains(r#"name="fasta_file"; filename="proteins.fasta""#));
    assert!(raw.contains(r#"name="pairs_file"; filename="pairs.tsv""#));
}

#[tokio::test]
async fn batch_json_response_decodes_results() {
    let server = serve_once(
        "200 OK",
        &[("Content-Type", "application/json")],
        r#"[{"score":0.4,"label":"no_interaction"},{"score":0.9,"label":"interaction"}]"#,
    )
    .await;

    let upload = BatchUpload::new(
        UploadFile::new("a.fa", b">A\nM\n".to_vec()),
        UploadFile::new("pairs.txt", b"A A\n".to_vec()),
    );
    let result = client(&server.base_url, PayloadStyle::Flat)
        .predict_batch(&upload)
        .await
        .unwrap();

    let BatchPredictionResult::Json(results) = result else {
        panic!("expected JSON batch result");
    };
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].label, "interaction");
}

#[tokio::test]
async fn change_password_sends_bearer_token() {
    let server = serve_once(
        "200 OK",
        &[("Content-Type", "application/json")],
        r#"{"message":"Password changed"}"#,
    )
    .await;

    let request = ChangePasswordRequest::from_form("old-pw", "new-pw").unwrap();
    let body = client(&server.base_url, PayloadStyle::Flat)
        .change_password(&request, Some("tok-123"))
        .await
        .unwrap();
    assert_eq!(body["message"], "Password changed");

    let raw = server.request.await.unwrap();
    assert!(raw.starts_with("POST /api/auth/change-password HTTP/1.1"));
    assert!(raw.to_ascii_lowercase().contains("authorization: bearer tok-123"));
}
