use mdash_api::{
    ApiConfig, ApiError, DeviceConfig, MdashClient, create_ui, set_label,
};
use mdash_widgets::{Widget, WidgetCollection};
use redact::Secret;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = header_end(&buf) {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

/// Accept a single request and answer it with the raw `response` bytes.
/// Resolves to the raw request text.
async fn serve_raw(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("listener address");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();
        request
    });

    (format!("http://{addr}/api/v2/devices"), handle)
}

/// Accept a single request and answer it with `status` and `body`.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    serve_raw(format!(
        "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    ))
    .await
}

fn client(base_url: String) -> MdashClient {
    MdashClient::new(
        ApiConfig { base_url },
        DeviceConfig {
            id: "esp32_0A1B2C".to_string(),
            mdash_device_id: Some("d1234".to_string()),
            api_key: Some(Secret::new("token123".to_string())),
        },
    )
}

#[tokio::test]
async fn test_create_ui_posts_to_device_endpoint() {
    let (base_url, server) = serve_once("200 OK", "{}").await;
    let client = client(base_url);
    let mut widgets = WidgetCollection::default();
    widgets
        .add(Widget::value("RAM", "ram").expect("valid widget"))
        .expect("add widget");

    create_ui(&client, &widgets).await.expect("post should succeed");

    let request = server.await.expect("server task");
    assert!(
        request.starts_with(
            "POST /api/v2/devices/d1234?access_token=token123 HTTP/1.1\r\n"
        ),
        "unexpected request: {request}"
    );
    assert!(request.to_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(
        r#"{"shadow":{"tags":{"ui":{"widgets":[{"type":"value","title":"RAM","key":"ram"}]}}}}"#
    ));
}

#[tokio::test]
async fn test_set_label_without_label_sends_device_id() {
    let (base_url, server) = serve_once("200 OK", "{}").await;
    let client = client(base_url);

    set_label(&client, None).await.expect("post should succeed");

    let request = server.await.expect("server task");
    assert!(
        request.ends_with(r#"{"shadow":{"tags":{"labels":"esp32_0A1B2C"}}}"#)
    );
}

#[tokio::test]
async fn test_error_reply_is_parsed() {
    let (base_url, server) = serve_once(
        "403 Forbidden",
        r#"{"error":{"code":403,"message":"access denied"}}"#,
    )
    .await;
    let client = client(base_url);

    let result = set_label(&client, Some("garage")).await;

    server.await.expect("server task");
    match result {
        Err(ApiError::Reply {
            status,
            code,
            message,
        }) => {
            assert_eq!(status, 403);
            assert_eq!(code, Some(403));
            assert_eq!(message.as_deref(), Some("access denied"));
        }
        other => panic!("expected a reply error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unstructured_error_reply() {
    let (base_url, server) =
        serve_once("502 Bad Gateway", "upstream unavailable").await;
    let client = client(base_url);

    let result = set_label(&client, None).await;

    server.await.expect("server task");
    assert!(matches!(
        result,
        Err(ApiError::Reply {
            status: 502,
            code: None,
            message: None
        })
    ));
}

#[tokio::test]
async fn test_truncated_error_reply_still_reports_status() {
    let (base_url, server) = serve_raw(
        "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 200\r\nconnection: close\r\n\r\n{\"error\":"
            .to_string(),
    )
    .await;
    let client = client(base_url);

    let result = set_label(&client, None).await;

    server.await.expect("server task");
    assert!(matches!(
        result,
        Err(ApiError::Reply {
            status: 500,
            code: None,
            message: None
        })
    ));
}
